use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::sections::{FeatureGrid, IconGlyph, ProductGrid, QuoteCarousel, SectionHeader};
use crate::config;
use crate::content::{Icon, ECOSYSTEM, HERO_LIGHTS, QUOTES, VALUES};
use crate::dom;
use crate::hooks::use_parallax;
use crate::Route;

fn light_style(&(top, left, right, bottom, size): &(&str, &str, &str, &str, &str)) -> String {
    let mut style = format!("width: {size}; height: {size};");
    for (prop, value) in [("top", top), ("left", left), ("right", right), ("bottom", bottom)] {
        if !value.is_empty() {
            style.push_str(&format!(" {prop}: {value};"));
        }
    }
    style
}

#[function_component(Home)]
pub fn home() -> Html {
    // Land on the requested section when arriving from another page.
    {
        use_effect_with_deps(
            move |_| {
                match dom::location_hash() {
                    Some(section) => {
                        dom::scroll_to_section(&section);
                    }
                    None => dom::scroll_to_top(),
                }
                || ()
            },
            (),
        );
    }

    let (hero_ref, offset) = use_parallax(config::PARALLAX_STRENGTH);

    let explore = Callback::from(|_: MouseEvent| {
        dom::scroll_to_section("products");
    });

    html! {
        <div class="home-page">
            <style>
                {r#"
                .hero { position: relative; min-height: 100svh; overflow: hidden; }
                .hero-background { position: absolute; inset: -8px; pointer-events: none; transition: transform 0.1s linear; }
                .hero-background img { width: 100%; height: 100%; object-fit: cover; opacity: 0.7; }
                .hero-lights { position: absolute; inset: 0; pointer-events: none; }
                .hero-light { position: absolute; pointer-events: auto; cursor: pointer; }
                .hero-light span {
                    display: block;
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    background: rgba(52, 211, 153, 0.2);
                    transition: all 0.3s ease;
                }
                .hero-light:hover span { background: rgba(52, 211, 153, 0.6); box-shadow: 0 0 30px rgba(52, 211, 153, 0.8); transform: scale(1.5); }
                .hero-content { position: relative; min-height: 100svh; display: grid; place-items: center; text-align: center; }
                .hero-content h1 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; letter-spacing: -0.02em; }
                .hero-content p { font-size: 1.25rem; max-width: 48rem; margin: 1.5rem auto; }
                .about-grid { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); max-width: 64rem; margin: 0 auto; }
                .about-grid p { font-size: 1.125rem; line-height: 1.7; }
                .highlight { text-align: center; }
                .highlight p { max-width: 48rem; margin: 0 auto 2rem; font-size: 1.125rem; }
                "#}
            </style>

            <section id="home" class="hero" ref={hero_ref}>
                <div class="hero-background" style={offset.style()}>
                    <img
                        src="/assets/hero-smart-home.jpg"
                        alt="Futuristic smart home interior with adaptive lighting by Seculinx"
                        loading="eager"
                    />
                </div>
                <div class="hero-lights">
                    { for HERO_LIGHTS.iter().map(|light| html! {
                        <div class="hero-light" style={light_style(light)}><span></span></div>
                    }) }
                </div>
                <div class="hero-content container">
                    <div>
                        <h1>{"Smarter Living, Connected by Design."}</h1>
                        <p>
                            {"At Seculinx, we create intelligent, sustainable, and secure living experiences through seamless automation."}
                        </p>
                        <div class="button-group">
                            <button class="button button-hero" onclick={explore}>
                                {"Explore Our Solutions"}
                                <IconGlyph icon={Icon::ArrowRight} />
                            </button>
                            <Link<Route> to={Route::BrightSense} classes="button button-soft">
                                {"Discover BrightSense"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>

            <section id="about" class="section section-surface">
                <div class="container stack">
                    <SectionHeader
                        title="Innovation Meets Comfort."
                        subtitle="Reimagining smart living with technology that adapts to you."
                    />
                    <div class="about-grid">
                        <p class="muted">
                            {"Seculinx is reimagining smart living. Our mission is to integrate cutting-edge technology into everyday life, creating a connected ecosystem that adapts to you. From intelligent lighting to advanced home security, we make your home safer, more efficient, and more intuitive."}
                        </p>
                        <FeatureGrid blocks={VALUES} />
                    </div>
                </div>
            </section>

            <section id="products" class="section">
                <div class="container stack">
                    <SectionHeader title="Product Ecosystem" subtitle="Explore our connected solutions" />
                    <ProductGrid products={ECOSYSTEM} />
                </div>
            </section>

            <section class="section section-surface highlight">
                <div class="container stack">
                    <SectionHeader title="BrightSense — Lighting That Thinks For You." subtitle="Launching Q4 2025" />
                    <p class="muted">
                        {"With cutting-edge mmWave sensing, BrightSense understands your presence, activity, and preferences to create the perfect lighting experience."}
                    </p>
                    <Link<Route> to={Route::BrightSense} classes="button button-hero">
                        {"Experience BrightSense"}
                    </Link<Route>>
                </div>
            </section>

            <section class="section">
                <div class="container stack">
                    <SectionHeader title="Trusted Innovation." />
                    <QuoteCarousel quotes={QUOTES} />
                    <p class="muted highlight">
                        {"Seculinx envisions a future where technology serves you quietly, intelligently, and beautifully."}
                    </p>
                </div>
            </section>

            <SiteFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_style_skips_unset_sides() {
        assert_eq!(
            light_style(&("20%", "25%", "", "", "4rem")),
            "width: 4rem; height: 4rem; top: 20%; left: 25%;"
        );
        assert_eq!(
            light_style(&("", "", "25%", "30%", "3.5rem")),
            "width: 3.5rem; height: 3.5rem; right: 25%; bottom: 30%;"
        );
    }
}
