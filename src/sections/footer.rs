use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{AGENCY, FOOTER_LOGO_URL};

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, AGENCY)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo(|_| Local::now().year(), ());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0a0a0a;
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 2rem;
                        color: #d1d5db;
                        font-size: 1.1rem;
                    }
                    .footer-brand img {
                        height: 2rem;
                        width: auto;
                    }
                    .footer-legal {
                        display: flex;
                        justify-content: flex-end;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        color: #fff;
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-brand">
                    <img src={FOOTER_LOGO_URL} alt={format!("{} Logo", AGENCY)} />
                    <p>{"Designed for Impact. Engineered for Growth."}</p>
                </div>
                <div class="footer-legal">
                    <p>{copyright(*year)}</p>
                </div>
            </div>
        </footer>
    }
}
