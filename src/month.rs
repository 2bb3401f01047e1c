//! Month labels used to bucket transactions and to match them against budgets.

use time::{
    Date, Month, OffsetDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// The three-letter abbreviation for `month`, e.g. "Jan".
pub fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Get the month label ("Jan".."Dec") for a transaction date.
///
/// `date` may be an ISO calendar date (`2024-01-05`) or an RFC 3339 date-time
/// (`2024-01-05T10:30:00+13:00`). The label is taken from the date as written,
/// the offset of a date-time is not applied.
///
/// Returns `None` if `date` is in neither format.
pub fn month_label(date: &str) -> Option<&'static str> {
    parse_date(date).map(|date| short_month_name(date.month()))
}

fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(text, &Rfc3339)
                .ok()
                .map(|date_time| date_time.date())
        })
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::{month_label, short_month_name};

    #[test]
    fn short_month_names_are_three_letters() {
        assert_eq!(short_month_name(Month::January), "Jan");
        assert_eq!(short_month_name(Month::September), "Sep");
        assert_eq!(short_month_name(Month::December), "Dec");
    }

    #[test]
    fn label_from_calendar_date() {
        assert_eq!(month_label("2024-01-05"), Some("Jan"));
        assert_eq!(month_label("2023-11-30"), Some("Nov"));
    }

    #[test]
    fn label_from_date_time_uses_written_date() {
        // Converting to UTC would move this into December.
        assert_eq!(month_label("2024-01-01T08:00:00+13:00"), Some("Jan"));
    }

    #[test]
    fn unparseable_date_has_no_label() {
        assert_eq!(month_label(""), None);
        assert_eq!(month_label("Jan"), None);
        assert_eq!(month_label("05/01/2024"), None);
        assert_eq!(month_label("2024-13-01"), None);
    }
}
