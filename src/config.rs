use log::Level;

/// Booking destination behind every call-to-action. Set `BOOKING_URL` at
/// build time to point the page at the live reservation form.
pub fn booking_url() -> &'static str {
    option_env!("BOOKING_URL").unwrap_or("https://example.com/reserve")
}

pub const AWARD_URL: &str = "https://www.alphapolis.co.jp/prize/result/663000178";

/// Id of the pricing section watched by the intersection observer.
pub const PRICE_ANCHOR_ID: &str = "price";

/// Scroll offset (px) past which the floating CTA may appear.
pub const SCROLL_THRESHOLD: f64 = 400.0;

pub const INTERSECTION_THRESHOLD: f64 = 0.1;

pub const FAR_STAR_COUNT: usize = 20;
pub const NEAR_STAR_COUNT: usize = 10;
/// Upper bound (seconds) of a near star's twinkle delay.
pub const MAX_TWINKLE_DELAY: f64 = 5.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
