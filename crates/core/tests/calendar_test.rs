use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tabletime_core::calendar::{days_in_month, MonthRef};

#[rstest]
#[case(2024, 2, 29)]
#[case(2023, 2, 28)]
#[case(2024, 4, 30)]
#[case(2024, 1, 31)]
#[case(2024, 12, 31)]
#[case(2100, 2, 28)] // century rule
#[case(2000, 2, 29)] // 400-year rule
fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
    assert_eq!(days_in_month(year, month).unwrap(), expected);
}

#[test]
fn test_month_validation() {
    assert!(MonthRef::new(2024, 0).is_err());
    assert!(MonthRef::new(2024, 13).is_err());
    assert!(days_in_month(2024, 13).is_err());
}

#[test]
fn test_accessors_expose_validated_parts() {
    let scope = MonthRef::new(2024, 5).unwrap();
    assert_eq!(scope.year(), 2024);
    assert_eq!(scope.month(), 5);

    // Construction is the only way in, so first_day never fails and
    // navigation only ever produces in-range months.
    assert_eq!(scope.first_day(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    let mut cursor = scope;
    for _ in 0..24 {
        cursor = cursor.next();
        assert!((1..=12).contains(&cursor.month()));
        assert!(cursor.days() >= 28);
    }
}

#[test]
fn test_month_navigation_wraps_year() {
    let december = MonthRef::new(2025, 12).unwrap();
    assert_eq!(december.next(), MonthRef::new(2026, 1).unwrap());

    let january = MonthRef::new(2026, 1).unwrap();
    assert_eq!(january.prev(), december);

    let june = MonthRef::new(2026, 6).unwrap();
    assert_eq!(june.next().prev(), june);
}

#[test]
fn test_month_span_is_half_open() {
    let feb = MonthRef::new(2024, 2).unwrap();
    let (start, end) = feb.span();
    assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

    assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    assert!(!feb.contains(end));
}
