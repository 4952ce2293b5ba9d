pub const SITE_NAME: &str = "Seculinx";

// Testimonial carousel period.
pub const QUOTE_ROTATION_MS: u32 = 4_000;

pub const COUNT_UP_DURATION_MS: f64 = 1_400.0;
// Fraction of a statistic that must be on screen before it starts counting.
pub const COUNT_UP_THRESHOLD: f64 = 0.4;

// Maximum hero background travel is half of this, in pixels.
pub const PARALLAX_STRENGTH: f64 = 8.0;

pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn get_site_origin() -> &'static str {
    "http://localhost:8080" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_origin() -> &'static str {
    "https://seculinx.com"
}

pub fn canonical_url(path: &str) -> String {
    format!("{}{}", get_site_origin(), path)
}
