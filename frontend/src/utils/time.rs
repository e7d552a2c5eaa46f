use chrono::{Local, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date in the browser's time zone as `YYYY-MM-DD`.
pub fn today_string() -> String {
    today_local().format(ISO_DATE_FORMAT).to_string()
}

/// Renders an ISO date as `Jan 5, 2024`; anything unparsable is shown as is.
pub fn format_display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
