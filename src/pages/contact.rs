use yew::prelude::*;

use crate::components::forms::ContactForm;
use crate::content::CHANNELS;
use crate::dom;

#[function_component(Contact)]
pub fn contact() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                dom::scroll_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page { padding-top: 5rem; min-height: 100vh; }
                .contact-header { padding: 2rem 0; }
                .contact-header h1 { font-size: 2.25rem; font-weight: 700; }
                .contact-grid { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); padding-bottom: 4rem; }
                .contact-grid h2 { font-size: 1.5rem; font-weight: 600; }
                .channels { list-style: none; padding: 0; display: grid; gap: 0.5rem; }
                "#}
            </style>
            <header class="container contact-header">
                <h1>{"Contact Us"}</h1>
                <p class="muted">
                    {"We’d love to hear from you. Whether you’re exploring solutions, media, or partnerships—let’s talk."}
                </p>
            </header>

            <section class="container contact-grid">
                <div class="stack">
                    <h2>{"Start the Conversation"}</h2>
                    <p class="muted">{"Share a bit about your needs and we’ll respond within 1–2 business days."}</p>
                    <div class="card-border">
                        <div class="card">
                            <ContactForm />
                        </div>
                    </div>
                </div>

                <aside>
                    <h2>{"Other ways to connect"}</h2>
                    <ul class="channels muted">
                        { for CHANNELS.iter().map(|(kind, address)| html! {
                            <li key={*kind}>
                                <span class="strong">{ format!("{}: ", kind) }</span>
                                <a href={format!("mailto:{}", address)}>{ *address }</a>
                            </li>
                        }) }
                    </ul>
                </aside>
            </section>
        </div>
    }
}
