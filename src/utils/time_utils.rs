/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

/// Milliseconds since `start`, as the `f64` timeline the chart animates on.
pub fn elapsed_ms(start: AppInstant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
