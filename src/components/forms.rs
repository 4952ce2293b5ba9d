use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::{use_notifier, Notice};
use crate::form::{ContactMessage, FormState, CONTACT, EMAIL_ONLY};

fn field_error(form: &FormState, field: &str) -> Html {
    match form.error(field) {
        Some(err) => html! { <p class="field-error" role="alert">{ err.to_string() }</p> },
        None => html! {},
    }
}

fn on_field_input(form: &UseStateHandle<FormState>, field: &'static str) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = match e.target_dyn_into::<HtmlTextAreaElement>() {
            Some(area) => area.value(),
            None => e.target_unchecked_into::<HtmlInputElement>().value(),
        };
        let mut next = (*form).clone();
        next.set(field, value);
        form.set(next);
    })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(|| FormState::new(&CONTACT));
    let notifier = use_notifier();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit(|values| {
                let payload = serde_json::to_string(&ContactMessage::from_values(values)).unwrap_or_default();
                gloo_console::log!("Contact form submitted:", payload);
                notifier.notify(Notice {
                    title: "Message sent".into(),
                    description: "Thanks! We'll get back to you shortly.".into(),
                });
            });
            if let Err(errors) = outcome {
                debug!("Contact form rejected: {}", errors);
            }
            form.set(next);
        })
    };

    html! {
        <form class={classes!("form", form.has_errors().then_some("form-invalid"))} onsubmit={onsubmit} novalidate={true}>
            <div class="form-item">
                <label for="contact-name">{"Full Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Alex Johnson"
                    value={form.value("name").to_string()}
                    oninput={on_field_input(&form, "name")}
                />
                { field_error(&form, "name") }
            </div>
            <div class="form-item">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="you@example.com"
                    value={form.value("email").to_string()}
                    oninput={on_field_input(&form, "email")}
                />
                { field_error(&form, "email") }
            </div>
            <div class="form-item">
                <label for="contact-subject">{"Subject"}</label>
                <input
                    id="contact-subject"
                    type="text"
                    placeholder="Partnership inquiry"
                    value={form.value("subject").to_string()}
                    oninput={on_field_input(&form, "subject")}
                />
                <p class="muted small">{"Optional"}</p>
                { field_error(&form, "subject") }
            </div>
            <div class="form-item">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="6"
                    placeholder="Tell us about your project, timeline, and goals."
                    value={form.value("message").to_string()}
                    oninput={on_field_input(&form, "message")}
                />
                { field_error(&form, "message") }
            </div>
            <div class="form-actions">
                <button type="submit" class="button button-hero">{"Send Message"}</button>
            </div>
        </form>
    }
}

/// What the visitor sees after a successful signup.
#[derive(Clone, Debug, PartialEq)]
pub enum Confirmation {
    /// Rendered under the form.
    Inline(&'static str),
    Toast {
        title: &'static str,
        description: &'static str,
    },
}

#[derive(Properties, PartialEq)]
pub struct EmailSignupProps {
    pub placeholder: AttrValue,
    pub button_label: AttrValue,
    pub confirmation: Confirmation,
    #[prop_or_default]
    pub class: Classes,
}

/// Single email field used for waitlists and the newsletter.
#[function_component(EmailSignup)]
pub fn email_signup(props: &EmailSignupProps) -> Html {
    let form = use_state(|| FormState::new(&EMAIL_ONLY));
    let notifier = use_notifier();

    let onsubmit = {
        let form = form.clone();
        let confirmation = props.confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit(|_| {
                info!("Email signup accepted");
                if let Confirmation::Toast { title, description } = &confirmation {
                    notifier.notify(Notice { title: (*title).into(), description: (*description).into() });
                }
            });
            if let Err(errors) = outcome {
                debug!("Email signup rejected: {}", errors);
            }
            form.set(next);
        })
    };

    html! {
        <div class={classes!("signup", props.class.clone())}>
            <form class="signup-form" onsubmit={onsubmit} novalidate={true}>
                <input
                    type="email"
                    aria-label="Email"
                    placeholder={props.placeholder.clone()}
                    value={form.value("email").to_string()}
                    oninput={on_field_input(&form, "email")}
                />
                <button type="submit" class="button button-hero">{ props.button_label.clone() }</button>
            </form>
            { field_error(&form, "email") }
            if let (Confirmation::Inline(message), true) = (&props.confirmation, form.submitted()) {
                <div class="signup-confirmation">{ *message }</div>
            }
        </div>
    }
}

#[function_component(FormStyles)]
pub fn form_styles() -> Html {
    html! {
        <style>
            {r#"
            .form { display: grid; gap: 1rem; }
            .form-item { display: grid; gap: 0.4rem; }
            .form-item label { font-size: 0.875rem; font-weight: 500; }
            .form input, .form textarea, .signup-form input {
                width: 100%;
                box-sizing: border-box;
                padding: 0.7rem 1rem;
                border-radius: 8px;
                border: 1px solid rgba(255, 255, 255, 0.15);
                background: rgba(0, 0, 0, 0.3);
                color: inherit;
                font: inherit;
            }
            .form-actions { padding-top: 0.5rem; }
            .field-error { color: #f87171; font-size: 0.85rem; margin: 0; }
            .form-invalid input:focus, .form-invalid textarea:focus { outline-color: #f87171; }
            .signup { max-width: 28rem; margin: 0 auto; }
            .signup-form { display: flex; gap: 0.75rem; }
            .signup-form input { flex: 1; }
            .signup-confirmation { margin-top: 0.75rem; color: #34d399; font-size: 0.875rem; }
            "#}
        </style>
    }
}
