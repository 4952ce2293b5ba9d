use yew::prelude::*;

use crate::components::forms::{Confirmation, EmailSignup};
use crate::components::sections::{CardRow, FeatureGrid, IconGlyph, SectionHeader, StepList};
use crate::content::{Icon, BRIGHTSENSE_FEATURES, HOW_IT_WORKS, USE_CASES};
use crate::dom;

#[function_component(BrightSense)]
pub fn brightsense() -> Html {
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
        <div class="brightsense-page">
            <style>
                {r#"
                .product-hero { position: relative; overflow: hidden; }
                .product-hero-image { position: absolute; inset: 0; }
                .product-hero-image img { width: 100%; height: 100%; object-fit: cover; opacity: 0.7; }
                .product-hero-content { position: relative; min-height: 80svh; display: grid; place-items: center; text-align: center; padding: 6rem 0; }
                .product-hero-content h1 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; margin-bottom: 1rem; }
                .tech-grid { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); align-items: center; }
                .tech-visual { height: 18rem; }
                .tech-visual .card { display: grid; place-items: center; font-size: 3rem; }
                .waitlist { text-align: center; }
                "#}
            </style>

            <section class="product-hero">
                <div class="product-hero-image">
                    <img src="/assets/brightsense-hero.jpg" alt="BrightSense lifestyle lighting adapting in real time" />
                </div>
                <div class="product-hero-content container">
                    <div>
                        <h1>{"BrightSense — Intelligent Lighting, Perfected."}</h1>
                        <p class="muted">{"Launching Q4 2025"}</p>
                        <EmailSignup
                            placeholder="Enter your email"
                            button_label="Stay Notified"
                            confirmation={Confirmation::Inline("Thanks! We'll notify you at launch.")}
                        />
                    </div>
                </div>
            </section>

            <section class="section section-surface">
                <div class="container stack">
                    <SectionHeader
                        title="How It Works"
                        subtitle="A privacy-first system that detects, adapts, and optimizes."
                    />
                    <StepList steps={HOW_IT_WORKS} />
                </div>
            </section>

            <section class="section">
                <div class="container stack">
                    <SectionHeader title="Key Features" />
                    <FeatureGrid blocks={BRIGHTSENSE_FEATURES} class="cols-4" />
                </div>
            </section>

            <section class="section section-surface">
                <div class="container stack">
                    <SectionHeader title="Use Cases" />
                    <CardRow items={USE_CASES} />
                </div>
            </section>

            <section class="section">
                <div class="container tech-grid">
                    <div>
                        <h2>{"The Tech Behind BrightSense"}</h2>
                        <p class="muted">
                            {"Powered by mmWave technology, BrightSense offers unparalleled detection accuracy while maintaining total privacy. Combined with AI-driven lighting algorithms, it delivers a lighting experience that feels natural and human."}
                        </p>
                    </div>
                    <div class="card-border tech-visual">
                        <div class="card"><IconGlyph icon={Icon::Lightbulb} /></div>
                    </div>
                </div>
            </section>

            <section class="section section-surface waitlist">
                <div class="container stack">
                    <h2>{"Launching Q4 2025 — Be the first to experience BrightSense."}</h2>
                    <EmailSignup
                        placeholder="Enter your email"
                        button_label="Join Waitlist"
                        confirmation={Confirmation::Inline("You're on the list! ✨")}
                    />
                </div>
            </section>
        </div>
    }
}
