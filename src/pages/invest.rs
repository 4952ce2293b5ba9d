use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sections::{
    CheckList, ComparisonTable, PlanList, ProductGrid, SectionHeader, StatGrid, Timeline,
};
use crate::content::{
    Icon, ADVANTAGES, INVESTOR_DECK, MARKET, MILESTONES, PARTNER_REASONS, PORTFOLIO, PRINCIPLES, GROWTH_PLAN,
    VERSUS,
};
use crate::dom;
use crate::Route;

#[function_component(Invest)]
pub fn invest() -> Html {
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
        <div class="invest-page">
            <style>
                {r#"
                .invest-hero { min-height: 80svh; display: grid; place-items: center; text-align: center; padding: 6rem 0; }
                .invest-hero h1 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; }
                .invest-hero p { font-size: 1.25rem; max-width: 48rem; margin: 1.5rem auto; }
                .two-col { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); align-items: start; }
                .narrow { max-width: 64rem; margin: 0 auto; }
                .principles { grid-template-columns: 1fr 1fr; }
                .invest-cta { text-align: center; padding: 4rem 0; }
                .invest-cta h3 { font-size: 1.75rem; font-weight: 600; margin-bottom: 1.5rem; }
                "#}
            </style>

            <section class="invest-hero container">
                <div>
                    <h1>{"Invest in the Future of Smart Living"}</h1>
                    <p class="muted">
                        {"Seculinx is redefining the connected home experience with intelligent, sustainable, and secure solutions."}
                    </p>
                    <div class="button-group">
                        <Link<Route> to={Route::Contact} classes="button button-hero">
                            {"Start the Conversation"}
                        </Link<Route>>
                        <a href={INVESTOR_DECK} download="" class="button button-soft">{"Download Investor Deck"}</a>
                    </div>
                </div>
            </section>

            <section class="section section-surface">
                <div class="container stack">
                    <SectionHeader title="Our Vision & Why We Exist" />
                    <div class="two-col narrow">
                        <p class="muted">
                            {"Our mission is to bridge innovation and practicality in smart home technology. We design products that feel effortless: innovation, sustainability, customer-centric solutions, and seamless integration into daily life. Our long-term ambition is clear — to lead smart living ecosystems worldwide."}
                        </p>
                        <CheckList items={PRINCIPLES} class="principles" />
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container stack">
                    <SectionHeader
                        title="Market Opportunity"
                        subtitle="A rapidly expanding landscape driven by IoT and AI"
                    />
                    <StatGrid stats={MARKET} />
                </div>
            </section>

            <section class="section section-surface">
                <div class="container stack">
                    <SectionHeader title="Our Competitive Advantage" />
                    <div class="two-col">
                        <CheckList items={ADVANTAGES} icon={Icon::Shield} />
                        <ComparisonTable title="Seculinx vs Typical Offerings" rows={VERSUS} />
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container stack">
                    <SectionHeader title="Current & Upcoming Products" />
                    <ProductGrid products={PORTFOLIO} />
                </div>
            </section>

            <section class="section section-surface">
                <div class="container stack">
                    <SectionHeader title="Our Growth Plan" />
                    <div class="two-col">
                        <PlanList items={GROWTH_PLAN} />
                        <Timeline milestones={MILESTONES} />
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container stack">
                    <SectionHeader title="Why Partner with Us" />
                    <CheckList items={PARTNER_REASONS} class="narrow" />
                </div>
            </section>

            <section class="section-surface invest-cta">
                <div class="container">
                    <h3>{"Let’s Shape the Future of Smart Living Together"}</h3>
                    <div class="button-group">
                        <Link<Route> to={Route::Contact} classes="button button-hero">{"Get in Touch"}</Link<Route>>
                        <a href={INVESTOR_DECK} download="" class="button button-soft">{"Investor Deck"}</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
