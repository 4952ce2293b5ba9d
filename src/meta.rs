//! Document metadata per route.
//!
//! Pages never touch `<head>` themselves: [`for_route`] describes what each
//! route wants and [`RouteMeta`] applies it whenever the route changes.

use log::{debug, warn};
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlHeadElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const STRUCTURED_DATA_ID: &str = "structured-data";

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Site-relative canonical path.
    pub canonical: Option<&'static str>,
    /// schema.org JSON-LD describing the page.
    pub structured_data: Option<Value>,
}

fn organization() -> Value {
    json!({ "@type": "Organization", "name": config::SITE_NAME })
}

pub fn for_route(route: &Route) -> PageMeta {
    match route {
        Route::Home => PageMeta {
            title: "Seculinx — Smarter Living, Connected by Design",
            description: "Premium smart home automation: intelligent lighting, security, and sensors by Seculinx.",
            canonical: None,
            structured_data: None,
        },
        Route::BrightSense => PageMeta {
            title: "BrightSense — Intelligent Lighting, Perfected | Seculinx",
            description: "BrightSense uses mmWave and AI to deliver adaptive, privacy-first lighting. Launching Q4 2025.",
            canonical: Some("/brightsense"),
            structured_data: Some(json!({
                "@context": "https://schema.org",
                "@type": "Product",
                "name": "BrightSense",
                "brand": { "@type": "Brand", "name": config::SITE_NAME },
                "description": "AI-powered smart lighting with mmWave sensing. Launching Q4 2025.",
                "releaseDate": "2025-10-01",
            })),
        },
        Route::Invest => PageMeta {
            title: "Invest in Seculinx | Future of Smart Living",
            description: "Explore investment opportunities with Seculinx — visionary smart home solutions with sustainable growth.",
            canonical: Some("/invest"),
            structured_data: Some(json!({
                "@context": "https://schema.org",
                "@type": "WebPage",
                "name": "Invest in Seculinx",
                "url": "/invest",
                "about": organization(),
            })),
        },
        Route::Contact => PageMeta {
            title: "Contact Seculinx | Smart Home Automation",
            description: "Get in touch with Seculinx for smart home solutions, partnerships, or media inquiries.",
            canonical: Some("/contact"),
            structured_data: Some(json!({
                "@context": "https://schema.org",
                "@type": "ContactPage",
                "name": "Contact Seculinx",
                "url": "/contact",
                "about": organization(),
            })),
        },
        Route::NotFound => PageMeta {
            title: "Page not found | Seculinx",
            description: "The page you were looking for does not exist.",
            canonical: None,
            structured_data: None,
        },
    }
}

/// Writes `meta` into the live document, replacing whatever the previous
/// route left behind.
pub fn apply(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document, skipping page metadata");
        return;
    };
    document.set_title(meta.title);

    let Some(head) = document.head() else {
        warn!("Document has no <head>, skipping page metadata");
        return;
    };

    let result = set_description(&document, &head, meta.description)
        .and_then(|_| set_canonical(&document, &head, meta.canonical))
        .and_then(|_| set_structured_data(&document, &head, meta.structured_data.as_ref()));
    if let Err(err) = result {
        warn!("Failed to update page metadata: {:?}", err);
    }
}

fn set_description(document: &Document, head: &HtmlHeadElement, description: &str) -> Result<(), JsValue> {
    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            head.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", description)
}

fn set_canonical(document: &Document, head: &HtmlHeadElement, path: Option<&str>) -> Result<(), JsValue> {
    let existing = document.query_selector("link[rel=\"canonical\"]")?;
    match (path, existing) {
        (Some(path), Some(link)) => link.set_attribute("href", &config::canonical_url(path)),
        (Some(path), None) => {
            let link = document.create_element("link")?;
            link.set_attribute("rel", "canonical")?;
            link.set_attribute("href", &config::canonical_url(path))?;
            head.append_child(&link)?;
            Ok(())
        }
        (None, Some(link)) => {
            link.remove();
            Ok(())
        }
        (None, None) => Ok(()),
    }
}

fn set_structured_data(document: &Document, head: &HtmlHeadElement, data: Option<&Value>) -> Result<(), JsValue> {
    if let Some(old) = document.get_element_by_id(STRUCTURED_DATA_ID) {
        old.remove();
    }
    let Some(data) = data else {
        return Ok(());
    };
    let script = document.create_element("script")?;
    script.set_id(STRUCTURED_DATA_ID);
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&data.to_string()));
    head.append_child(&script)?;
    Ok(())
}

/// Applies the current route's metadata on every navigation. Must be
/// rendered inside the router.
#[function_component(RouteMeta)]
pub fn route_meta() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with_deps(
        |route: &Route| {
            debug!("Applying metadata for {:?}", route);
            apply(&for_route(route));
            || ()
        },
        route,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 5] = [Route::Home, Route::BrightSense, Route::Invest, Route::Contact, Route::NotFound];

    #[test]
    fn every_route_has_title_and_description() {
        for route in ALL {
            let meta = for_route(&route);
            assert!(!meta.title.is_empty(), "{:?}", route);
            assert!(!meta.description.is_empty(), "{:?}", route);
            assert!(meta.title.contains("Seculinx"), "{:?}", route);
        }
    }

    #[test]
    fn canonical_paths_match_routes() {
        for route in ALL {
            let meta = for_route(&route);
            match route {
                Route::Home | Route::NotFound => assert_eq!(meta.canonical, None),
                _ => assert_eq!(meta.canonical, Some(route.to_path().as_str())),
            }
        }
    }

    #[test]
    fn structured_data_types() {
        let kind = |route: Route| {
            for_route(&route)
                .structured_data
                .map(|data| data["@type"].as_str().unwrap_or_default().to_string())
        };
        assert_eq!(kind(Route::Home), None);
        assert_eq!(kind(Route::BrightSense).as_deref(), Some("Product"));
        assert_eq!(kind(Route::Invest).as_deref(), Some("WebPage"));
        assert_eq!(kind(Route::Contact).as_deref(), Some("ContactPage"));
    }

    #[test]
    fn product_release_and_brand() {
        let data = for_route(&Route::BrightSense).structured_data.unwrap();
        assert_eq!(data["brand"]["name"], "Seculinx");
        assert_eq!(data["releaseDate"], "2025-10-01");
        assert_eq!(data["@context"], "https://schema.org");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let resolve = |path: &str| Route::recognize(path).or_else(Route::not_found_route);
        assert_eq!(resolve("/careers"), Some(Route::NotFound));
        assert_eq!(resolve("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/invest"), Some(Route::Invest));
    }
}
