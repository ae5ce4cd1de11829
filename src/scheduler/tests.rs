use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::DailySchedule;

fn schedule() -> DailySchedule {
    DailySchedule::new(NaiveTime::from_hms_opt(2, 0, 0).unwrap())
}

fn clock(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        .and_hms_opt(hour, minute, second).unwrap()
}

#[test]
fn test_schedule_counts_down_to_todays_run() {
    let delay = schedule().delay_until_next(clock(1, 0, 0));

    assert_eq!(delay.as_secs(), 60 * 60);
}

#[test]
fn test_schedule_rolls_over_to_tomorrow_after_todays_run() {
    let delay = schedule().delay_until_next(clock(3, 30, 0));

    assert_eq!(delay.as_secs(), 22 * 60 * 60 + 30 * 60);
}

#[test]
fn test_schedule_waits_a_full_day_on_the_exact_boundary() {
    let delay = schedule().delay_until_next(clock(2, 0, 0));

    assert_eq!(delay.as_secs(), 24 * 60 * 60);
}

#[test]
fn test_schedule_counts_seconds_not_whole_minutes() {
    let delay = schedule().delay_until_next(clock(1, 59, 59));

    assert_eq!(delay.as_secs(), 1);
}
