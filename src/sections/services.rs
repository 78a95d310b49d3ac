use yew::prelude::*;

use crate::components::carousel::SlideDeck;
use crate::content::{Service, SERVICES};
use crate::motion::entrance::use_scroll_entrance;
use crate::motion::timeline::{Ease, Pose, Position, Timeline};

fn heading() -> Timeline {
    Timeline::new().stagger(
        0..3,
        Pose::hidden().y(40.0),
        Pose::IDENTITY,
        800.0,
        200.0,
        Ease::Power3Out,
        Position::Sequential,
    )
}

fn card(service: &Service) -> Html {
    html! {
        <div class="service-card">
            <div class="service-badge">{service.badge}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section = use_node_ref();
    let eyebrow = use_node_ref();
    let title = use_node_ref();
    let deck = use_node_ref();
    use_scroll_entrance(section.clone(), vec![eyebrow.clone(), title.clone(), deck.clone()], heading);

    let slides: Vec<Html> = SERVICES.iter().map(card).collect();

    html! {
        <div ref={section} id="services" class="section dark">
            <style>
                {r#"
                    .service-card {
                        position: relative;
                        max-width: 40rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(24px);
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .service-card:hover {
                        transform: scale(1.02);
                        background: rgba(255, 255, 255, 0.12);
                    }
                    .service-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 107, 53, 0.1);
                        color: #FF6B35;
                        font-size: 0.8rem;
                        font-weight: 700;
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        margin-bottom: 1rem;
                    }
                    .service-card p {
                        color: #9ca3af;
                        line-height: 1.7;
                    }
                    .carousel-nav {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .carousel-arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .carousel-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        padding: 0;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        background: #FF6B35;
                    }
                "#}
            </style>
            <div class="container">
                <p ref={eyebrow} class="eyebrow">{"WHAT WE OFFER"}</p>
                <h2 ref={title} class="section-title">
                    {"Our "}<span class="accent">{"Services"}</span>
                </h2>
                <div ref={deck} class="services-deck">
                    <SlideDeck {slides} />
                </div>
            </div>
        </div>
    }
}
