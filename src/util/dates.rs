//! Display-date formatting.
//!
//! Entry dates are presentation strings like "Jan 29, 2026"; nothing in the
//! system parses them back. The browser clock is only touched behind the
//! `csr` feature so the native test build stays deterministic.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Format a date as "Mon D, YYYY". `month` is zero-based.
pub fn format_display_date(month: usize, day: u32, year: i32) -> String {
    let name = MONTHS.get(month).copied().unwrap_or(MONTHS[0]);
    format!("{name} {day}, {year}")
}

/// Today's display date from the browser clock.
pub fn today_display() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_display_date(now.get_month() as usize, now.get_date(), now.get_full_year() as i32)
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
