use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Fixed header shown on every page. Section anchors are plain links so
/// they also work when followed from another page.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    backdrop-filter: blur(10px);
                    background: rgba(11, 15, 20, 0.6);
                }
                .site-header .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-weight: 600; font-size: 1.125rem; letter-spacing: -0.01em; color: inherit; text-decoration: none; }
                .nav-links { display: flex; gap: 1.5rem; font-size: 0.875rem; }
                .nav-link { color: inherit; text-decoration: none; opacity: 0.8; transition: opacity 0.2s; }
                .nav-link:hover { opacity: 1; }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>
                <nav class="nav-links">
                    <a href="/#about" class="nav-link">{"About"}</a>
                    <a href="/#products" class="nav-link">{"Products"}</a>
                    <Link<Route> to={Route::BrightSense} classes="nav-link">{"BrightSense"}</Link<Route>>
                    <Link<Route> to={Route::Invest} classes="nav-link">{"Invest"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                </nav>
                <Link<Route> to={Route::Contact} classes="button button-hero">
                    {"Get Updates"}
                </Link<Route>>
            </div>
        </header>
    }
}
