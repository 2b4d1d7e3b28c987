use solar_system_mapper::calendar::{
    CalendarError, Date, approximate_ordinal, days_in_month, days_since,
};

#[test]
fn february_follows_gregorian_leap_rule() {
    assert_eq!(days_in_month(2, 2024).unwrap(), 29);
    assert_eq!(days_in_month(2, 2023).unwrap(), 28);
    // Century exceptions
    assert_eq!(days_in_month(2, 1900).unwrap(), 28);
    assert_eq!(days_in_month(2, 2000).unwrap(), 29);
}

#[test]
fn month_lengths_for_non_february_months() {
    for month in [1, 3, 5, 7, 8, 10, 12] {
        assert_eq!(days_in_month(month, 2025).unwrap(), 31);
    }
    for month in [4, 6, 9, 11] {
        assert_eq!(days_in_month(month, 2025).unwrap(), 30);
    }
}

#[test]
fn out_of_range_month_is_an_error_not_a_sentinel() {
    assert!(matches!(
        days_in_month(0, 2025),
        Err(CalendarError::InvalidMonth(0))
    ));
    assert!(matches!(
        days_in_month(13, 2025),
        Err(CalendarError::InvalidMonth(13))
    ));
}

#[test]
fn days_since_is_reflexive() {
    for date in [
        Date::new(1, 1, 2025),
        Date::new(29, 2, 2024),
        Date::new(31, 12, 1999),
    ] {
        assert_eq!(days_since(date, date).unwrap(), 0);
    }
}

#[test]
fn consecutive_days_within_a_month_differ_by_one() {
    let a = Date::new(12, 6, 2025);
    let b = Date::new(13, 6, 2025);
    assert_eq!(days_since(a, b).unwrap(), 1);
    assert_eq!(days_since(b, a).unwrap(), -1);
}

#[test]
fn ordinal_is_the_documented_approximation_not_a_proleptic_count() {
    // Crossing a month boundary exposes the approximate formula: the count
    // can even run backwards. Pinned so nobody "fixes" it silently.
    let jan31 = Date::new(31, 1, 2025);
    let feb1 = Date::new(1, 2, 2025);
    assert_eq!(days_since(jan31, feb1).unwrap(), -2);

    // day + (month-1)*days_in_month + year*365, verbatim.
    let date = Date::new(13, 6, 2025);
    assert_eq!(approximate_ordinal(date).unwrap(), 13 + 5 * 30 + 2025 * 365);
}

#[test]
fn parses_and_redisplays_dd_mm_yyyy() {
    let date = Date::parse("13/06/2025").unwrap();
    assert_eq!(date, Date::new(13, 6, 2025));
    assert_eq!(date.to_string(), "13/06/2025");
}

#[test]
fn day_is_not_cross_checked_against_month_length() {
    // Intentionally loose: 31 February passes validation.
    assert!(Date::parse("31/02/2025").is_ok());
}

#[test]
fn rejects_out_of_range_triples_and_garbage() {
    for text in ["99/06/2025", "13/13/2025", "01/01/0999", "0/1/2025", "foo", "13-06-2025", "13/06"] {
        assert!(
            matches!(Date::parse(text), Err(CalendarError::InvalidDate(_))),
            "expected {text:?} to be rejected"
        );
    }
}
