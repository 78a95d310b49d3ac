use yew::prelude::*;

use crate::content::AGENCY;
use crate::motion::entrance::use_scroll_entrance;
use crate::motion::timeline::{Ease, Pose, Position, Timeline};

fn fade_in() -> Timeline {
    Timeline::new().stagger(0..3, Pose::hidden().y(20.0), Pose::IDENTITY, 700.0, 100.0, Ease::Power2Out, Position::Sequential)
}

#[function_component(Team)]
pub fn team() -> Html {
    let section = use_node_ref();
    let subtitle = use_node_ref();
    let title = use_node_ref();
    let body = use_node_ref();
    use_scroll_entrance(section.clone(), vec![subtitle.clone(), title.clone(), body.clone()], fade_in);

    html! {
        <div ref={section} id="about" class="section light">
            <div class="container">
                <p ref={subtitle} class="eyebrow">{format!("ABOUT {}", AGENCY.to_uppercase())}</p>
                <h2 ref={title} class="section-title">
                    {"Your "}<span class="accent">{"Digital Transformation"}</span>{" Partner"}
                </h2>
                <p ref={body} class="body-copy narrow">
                    {format!(
                        "{} specializes in creating stunning websites and intelligent automation solutions for businesses worldwide. We combine deep understanding of local markets with cutting-edge global technology standards to deliver transformative results.",
                        AGENCY
                    )}
                </p>
            </div>
        </div>
    }
}
