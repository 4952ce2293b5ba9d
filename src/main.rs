use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod counter;
mod dom;
mod form;
mod hooks;
mod meta;
mod parallax;
mod rotation;
mod components {
    pub mod footer;
    pub mod forms;
    pub mod nav;
    pub mod sections;
    pub mod toast;
}
mod pages {
    pub mod brightsense;
    pub mod contact;
    pub mod home;
    pub mod invest;
    pub mod not_found;
}

use components::{
    forms::FormStyles,
    nav::SiteHeader,
    sections::SectionStyles,
    toast::ToastProvider,
};
use meta::RouteMeta;
use pages::{
    brightsense::BrightSense,
    contact::Contact,
    home::Home,
    invest::Invest,
    not_found::NotFound,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/brightsense")]
    BrightSense,
    #[at("/invest")]
    Invest,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::BrightSense => {
            info!("Rendering BrightSense page");
            html! { <BrightSense /> }
        }
        Route::Invest => {
            info!("Rendering Invest page");
            html! { <Invest /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <style>
                    {r#"
                    *, *::before, *::after { box-sizing: border-box; }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: #0b0f14;
                        color: #e6edf3;
                        font-family: Inter, system-ui, -apple-system, sans-serif;
                        line-height: 1.5;
                    }
                    a { color: inherit; }
                    img { display: block; max-width: 100%; }
                    "#}
                </style>
                <SectionStyles />
                <FormStyles />
                <RouteMeta />
                <SiteHeader />
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
