use chrono::Datelike;
use yew::prelude::*;

use crate::components::forms::{Confirmation, EmailSignup};
use crate::components::sections::IconGlyph;
use crate::config;
use crate::content::SOCIAL;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer id="contact" class="site-footer section-surface">
            <style>
                {r#"
                .site-footer { padding: 4rem 0 2.5rem; margin-top: 2.5rem; }
                .footer-grid { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
                .footer-social { display: flex; gap: 1rem; margin-top: 1rem; }
                .footer-social a { color: inherit; text-decoration: none; }
                .footer-newsletter .signup { margin: 0; }
                .footer-legal { margin-top: 2.5rem; }
                "#}
            </style>
            <div class="container footer-grid">
                <div>
                    <h4>{ config::SITE_NAME }</h4>
                    <p class="muted">{"Premium smart home solutions for a life that feels effortless."}</p>
                    <div class="footer-social">
                        { for SOCIAL.iter().map(|link| html! {
                            <a
                                key={link.label}
                                aria-label={link.label}
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <IconGlyph icon={link.icon} class="icon-pulse" />
                            </a>
                        }) }
                    </div>
                </div>
                <div class="footer-newsletter">
                    <h5>{"Newsletter"}</h5>
                    <EmailSignup
                        placeholder="you@example.com"
                        button_label="Subscribe"
                        confirmation={Confirmation::Toast {
                            title: "Subscribed",
                            description: "Thanks! We'll keep you posted.",
                        }}
                    />
                </div>
            </div>
            <div class="container muted small footer-legal">
                { format!("© {} {}. All rights reserved.", year, config::SITE_NAME) }
            </div>
        </footer>
    }
}
