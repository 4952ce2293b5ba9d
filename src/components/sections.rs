//! Presentational building blocks shared by the pages. Each takes a slice
//! of literal content from [`crate::content`] and lays it out.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{Comparison, ContentBlock, Icon, Product, Quote, Stat, Step};
use crate::counter::format_thousands;
use crate::hooks::{use_count_up, use_rotation};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header fade-in">
            <h2>{ props.title.clone() }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="muted">{ subtitle.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">{ props.icon.glyph() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub blocks: &'static [ContentBlock],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <div class={classes!("card-grid", props.class.clone())}>
            { for props.blocks.iter().map(|block| html! {
                <div class="card-border" key={block.title}>
                    <div class="card">
                        <IconGlyph icon={block.icon} class="icon-pulse" />
                        <h4>{ block.title }</h4>
                        <p class="muted small">{ block.description }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepListProps {
    pub steps: &'static [Step],
}

/// Steps numbered from 1 in the order given.
#[function_component(StepList)]
pub fn step_list(props: &StepListProps) -> Html {
    html! {
        <div class="steps-grid">
            { for props.steps.iter().enumerate().map(|(i, step)| html! {
                <div class="step" key={step.title}>
                    <div class="step-index">{ i + 1 }</div>
                    <div>
                        <h4>{ step.title }</h4>
                        <p class="muted">{ step.description }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardRowProps {
    pub items: &'static [Step],
}

/// Horizontally scrolling, snap-aligned cards.
#[function_component(CardRow)]
pub fn card_row(props: &CardRowProps) -> Html {
    html! {
        <div class="card-row">
            { for props.items.iter().map(|item| html! {
                <div class="card-border card-row-item" key={item.title}>
                    <div class="card">
                        <h4>{ item.title }</h4>
                        <p class="muted small">{ item.description }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckListProps {
    pub items: &'static [&'static str],
    #[prop_or(Icon::CheckCircle)]
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CheckList)]
pub fn check_list(props: &CheckListProps) -> Html {
    html! {
        <ul class={classes!("check-list", props.class.clone())}>
            { for props.items.iter().map(|item| html! {
                <li key={*item}><IconGlyph icon={props.icon} /><span>{ *item }</span></li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlanListProps {
    pub items: &'static [ContentBlock],
}

/// Icon-led list where each entry reads "Title: description".
#[function_component(PlanList)]
pub fn plan_list(props: &PlanListProps) -> Html {
    html! {
        <ul class="check-list">
            { for props.items.iter().map(|item| html! {
                <li key={item.title}>
                    <IconGlyph icon={item.icon} />
                    <span>{ format!("{}: {}", item.title, item.description) }</span>
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub milestones: &'static [&'static str],
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <ol class="timeline">
            { for props.milestones.iter().map(|m| html! {
                <li key={*m}>
                    <span class="timeline-dot"></span>
                    <div class="card-border"><div class="card">{ *m }</div></div>
                </li>
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub title: AttrValue,
    pub rows: &'static [Comparison],
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    html! {
        <div class="card-border">
            <div class="card">
                <h4>{ props.title.clone() }</h4>
                <div class="comparison">
                    { for props.rows.iter().map(|row| html! {
                        <>
                            <div class="muted">{ row.aspect }</div>
                            <div class="strong">{ row.ours }</div>
                        </>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub products: &'static [Product],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    html! {
        <div class={classes!("card-grid", props.class.clone())}>
            { for props.products.iter().map(|product| html! {
                <div class="card-border product" key={product.name}>
                    <div class="card">
                        <div class="product-banner">
                            {
                                match product.icon {
                                    Some(icon) => html! { <IconGlyph icon={icon} /> },
                                    None => html! { <div class="banner-gradient"></div> },
                                }
                            }
                        </div>
                        <h4>{ product.name }</h4>
                        <div class="muted small">{ product.status }</div>
                        <p class="muted small product-description">{ product.description }</p>
                        if let Some(route) = product.link {
                            <Link<Route> to={route} classes="button button-hero button-block">
                                {"Learn More"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

/// Counts up to the statistic once it scrolls into view.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let Stat { label, end, suffix } = props.stat;
    let (node, value) = use_count_up(end, config::COUNT_UP_DURATION_MS);

    html! {
        <div class="card-border" ref={node}>
            <div class="card stat">
                <div class="stat-value">{ format!("{}{}", format_thousands(value), suffix) }</div>
                <div class="muted small">{ label }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: &'static [Stat],
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="card-grid cols-4">
            { for props.stats.iter().map(|stat| html! { <StatCard key={stat.label} stat={*stat} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuoteCarouselProps {
    pub quotes: &'static [Quote],
}

/// Cycles through the quotes on a fixed timer for as long as it is mounted.
#[function_component(QuoteCarousel)]
pub fn quote_carousel(props: &QuoteCarouselProps) -> Html {
    let index = use_rotation(props.quotes.len(), config::QUOTE_ROTATION_MS);

    let Some(quote) = props.quotes.get(index) else {
        return html! {};
    };

    html! {
        <div class="quote">
            <blockquote class="fade-in" key={index.to_string()}>{ format!("“{}”", quote.quote) }</blockquote>
            <div class="muted">{ format!("— {}", quote.attribution) }</div>
        </div>
    }
}

/// Stylesheet for the section components, mounted once by the app shell.
#[function_component(SectionStyles)]
pub fn section_styles() -> Html {
    html! {
        <style>
            {r#"
            .section { padding: 5rem 0; }
            .section-surface { background: rgba(255, 255, 255, 0.03); }
            .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
            .stack > * + * { margin-top: 3rem; }
            .section-header { max-width: 48rem; margin: 0 auto; text-align: center; }
            .section-header h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.75rem; }
            .muted { color: rgba(255, 255, 255, 0.65); }
            .small { font-size: 0.875rem; }
            .strong { font-weight: 500; }
            .fade-in { animation: fadeIn 0.6s ease-out; }
            @keyframes fadeIn { from { opacity: 0; transform: translateY(6px); } to { opacity: 1; transform: none; } }
            .card-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
            .card-grid.cols-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
            .card-border {
                padding: 1px;
                border-radius: 12px;
                background: linear-gradient(135deg, rgba(52, 211, 153, 0.6), rgba(59, 130, 246, 0.4));
            }
            .card { height: 100%; border-radius: 11px; padding: 1.25rem; background: #0f141c; }
            .card h4 { font-weight: 600; margin: 0.5rem 0 0.25rem; }
            .icon { display: inline-block; font-size: 1.4rem; line-height: 1; }
            .icon-pulse { animation: pulse 3s ease-in-out infinite; }
            @keyframes pulse { 50% { transform: scale(1.08); } }
            .steps-grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
            .step { display: flex; gap: 1rem; align-items: flex-start; }
            .step-index {
                flex: none;
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 50%;
                display: grid;
                place-items: center;
                font-weight: 600;
                background: #1f2937;
            }
            .card-row { display: flex; gap: 1.5rem; overflow-x: auto; scroll-snap-type: x mandatory; padding-bottom: 1rem; }
            .card-row-item { min-width: 280px; scroll-snap-align: start; }
            .check-list { list-style: none; padding: 0; display: grid; gap: 0.75rem; }
            .check-list li { display: flex; gap: 0.75rem; align-items: flex-start; }
            .timeline { list-style: none; border-left: 1px solid rgba(255, 255, 255, 0.2); padding-left: 1.5rem; display: grid; gap: 1.5rem; }
            .timeline li { position: relative; }
            .timeline-dot {
                position: absolute;
                left: calc(-1.5rem - 6px);
                top: 0.75rem;
                width: 0.75rem;
                height: 0.75rem;
                border-radius: 50%;
                background: #34d399;
                box-shadow: 0 0 12px rgba(52, 211, 153, 0.8);
            }
            .comparison { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; font-size: 0.875rem; }
            .product-banner { height: 8rem; display: grid; place-items: center; border-radius: 8px; overflow: hidden; }
            .banner-gradient { width: 100%; height: 100%; background: linear-gradient(120deg, #065f46, #1e3a8a); opacity: 0.5; }
            .product-description { flex: 1; }
            .stat { text-align: center; padding: 1.5rem; }
            .stat-value { font-size: 2.25rem; font-weight: 700; }
            .quote { max-width: 48rem; margin: 0 auto; text-align: center; min-height: 120px; }
            .quote blockquote { font-size: 1.5rem; font-weight: 500; margin: 0; }
            .button {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                border-radius: 8px;
                border: none;
                font-weight: 600;
                cursor: pointer;
                text-decoration: none;
                transition: transform 0.2s ease;
            }
            .button:hover { transform: scale(1.03); }
            .button-hero { background: linear-gradient(135deg, #34d399, #3b82f6); color: #0b0f14; }
            .button-soft { background: rgba(255, 255, 255, 0.08); color: inherit; }
            .button-block { width: 100%; margin-top: 1rem; }
            .button-group { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
            "#}
        </style>
    }
}
