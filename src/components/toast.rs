use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Shows a transient confirmation. Handed out through context by
/// [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<Notice>);

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        self.0.emit(notice);
    }
}

/// The notifier of the nearest [`ToastProvider`]. Outside one, notices are
/// only logged.
#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        Notifier(Callback::from(|notice: Notice| {
            info!("No toast provider, dropping notice: {}", notice.title);
        }))
    })
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    notice: Notice,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let current = use_state(|| None::<Rc<Toast>>);
    let next_id = use_mut_ref(|| 0u32);

    let notifier = {
        let current = current.clone();
        Notifier(Callback::from(move |notice: Notice| {
            let mut id = next_id.borrow_mut();
            *id = id.wrapping_add(1);
            current.set(Some(Rc::new(Toast { id: *id, notice })));
        }))
    };

    // Dismiss after a while; a newer toast restarts the clock.
    {
        let current = current.clone();
        let shown = (*current).as_ref().map(|t| t.id);
        use_effect_with_deps(
            move |shown: &Option<u32>| {
                let timeout = shown.map(|_| Timeout::new(config::TOAST_LIFETIME_MS, move || current.set(None)));
                move || drop(timeout)
            },
            shown,
        );
    }

    let dismiss = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(None))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <style>
                {r#"
                .toast {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 60;
                    max-width: 360px;
                    padding: 1rem 2.5rem 1rem 1.25rem;
                    border-radius: 12px;
                    background: rgba(20, 24, 32, 0.95);
                    border: 1px solid rgba(52, 211, 153, 0.3);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                    animation: toastIn 0.3s ease-out;
                }
                .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                .toast-description { color: rgba(255, 255, 255, 0.75); font-size: 0.9rem; }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { transform: translateY(1rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            if let Some(toast) = (*current).as_ref() {
                <div class="toast" role="status" aria-live="polite" key={toast.id.to_string()}>
                    <div class="toast-title">{ toast.notice.title.clone() }</div>
                    <div class="toast-description">{ toast.notice.description.clone() }</div>
                    <button class="toast-close" aria-label="Dismiss" onclick={dismiss}>{"✕"}</button>
                </div>
            }
        </ContextProvider<Notifier>>
    }
}
