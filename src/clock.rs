//! Wall-clock access and message time formatting.
//!
//! Timestamps are milliseconds since the Unix epoch as `f64`, matching what
//! `Date.now()` returns in the browser.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Source of message timestamps.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Browser clock in the csr build, system time elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "csr"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
        }
    }
}

/// Format a timestamp as `HH:MM` in the viewer's local time.
///
/// Outside the browser there is no timezone database, so UTC is used.
pub fn format_time(ts_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms));
        format_hh_mm(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let (hours, minutes) = utc_hours_minutes(ts_ms);
        format_hh_mm(hours, minutes)
    }
}

fn format_hh_mm(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

#[cfg(any(test, not(feature = "csr")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(ts_ms: f64) -> (u32, u32) {
    let total_minutes = (ts_ms.max(0.0) / 60_000.0).floor() as u64;
    let minute_of_day = total_minutes % (24 * 60);
    ((minute_of_day / 60) as u32, (minute_of_day % 60) as u32)
}
