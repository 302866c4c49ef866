#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use remi::libs::date::{end_of_day, SpentOn};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn moment(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_serialize_wire_format() {
        let json = serde_json::to_string(&SpentOn(date(2024, 1, 15))).unwrap();
        assert_eq!(json, r#""2024-01-15""#);
    }

    #[test]
    fn test_round_trip_across_supported_range() {
        for d in [date(0, 1, 1), date(1970, 1, 1), date(2024, 2, 29), date(9999, 12, 31)] {
            let json = serde_json::to_string(&SpentOn(d)).unwrap();
            let back: SpentOn = serde_json::from_str(&json).unwrap();
            assert_eq!(back, SpentOn(d));
        }
    }

    #[test]
    fn test_serialize_fails_outside_year_range() {
        assert!(serde_json::to_string(&SpentOn(date(10000, 1, 1))).is_err());
        assert!(serde_json::to_string(&SpentOn(date(-1, 12, 31))).is_err());
    }

    #[test]
    fn test_deserialize_null_yields_zero_value() {
        let spent_on: SpentOn = serde_json::from_str("null").unwrap();
        assert_eq!(spent_on, SpentOn::default());
    }

    #[test]
    fn test_deserialize_rejects_other_formats() {
        assert!(serde_json::from_str::<SpentOn>(r#""2020/01/15""#).is_err());
        assert!(serde_json::from_str::<SpentOn>(r#""15-01-2020""#).is_err());
        assert!(serde_json::from_str::<SpentOn>("42").is_err());
    }

    #[test]
    fn test_parse_today_resolves_to_reference() {
        let reference = date(2024, 3, 10);
        assert_eq!(SpentOn::parse("today", reference).unwrap(), SpentOn(reference));
    }

    #[test]
    fn test_parse_yesterday_resolves_to_reference_minus_one() {
        let reference = date(2024, 3, 10);
        assert_eq!(SpentOn::parse("yesterday", reference).unwrap(), SpentOn(date(2024, 3, 9)));
    }

    #[test]
    fn test_parse_literal_ignores_reference() {
        let reference = date(2024, 3, 10);
        assert_eq!(SpentOn::parse("2020-01-15", reference).unwrap(), SpentOn(date(2020, 1, 15)));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        let reference = date(2024, 3, 10);
        assert!(SpentOn::parse("someday", reference).is_err());
        assert!(SpentOn::parse("2020/01/15", reference).is_err());
        assert!(SpentOn::parse("", reference).is_err());
    }

    // The day delta is hour-difference divided by 24 with truncation, not a
    // calendar-day subtraction: just before midnight an entry from the same
    // day is still "today", just after midnight it flips.
    #[test]
    fn test_relative_truncates_hours_not_calendar_days() {
        let entry = SpentOn(date(2024, 3, 10));

        assert_eq!(entry.relative(moment(2024, 3, 10, 23, 59)), "today (Sun, 2024-03-10)");
        assert_eq!(entry.relative(moment(2024, 3, 11, 0, 1)), "yesterday (Sun, 2024-03-10)");
        assert_eq!(entry.relative(moment(2024, 3, 12, 1, 0)), "2 days ago (Sun, 2024-03-10)");
    }

    #[test]
    fn test_relative_future_dates_render_bare() {
        let entry = SpentOn(date(2024, 3, 15));
        assert_eq!(entry.relative(end_of_day(date(2024, 3, 10))), "Fri, 2024-03-15");
    }

    #[test]
    fn test_end_of_day() {
        let eod = end_of_day(date(2024, 3, 10));
        assert_eq!(eod, moment(2024, 3, 10, 23, 59) + chrono::Duration::seconds(59));
    }
}
