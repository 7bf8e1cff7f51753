//! Property tests for availability and paging.

use carebook_core::models::{DayOfWeek, RawSlot, TimeWindow, WeeklySchedule};
use carebook_core::scheduling::{classify_and_paginate, compute_available_dates};
use chrono::{Datelike, NaiveDate, NaiveTime};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_schedule() -> impl Strategy<Value = WeeklySchedule> {
    proptest::collection::vec(any::<bool>(), 7).prop_map(|flags| {
        let window = TimeWindow::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        );
        let mut schedule = WeeklySchedule::new();
        for (day, on) in DayOfWeek::ALL.iter().zip(flags) {
            if on {
                schedule.add_windows(*day, [window]);
            }
        }
        schedule
    })
}

proptest! {
    #[test]
    fn dates_strictly_increasing(schedule in arb_schedule(), today in arb_date(), horizon in 0u32..120) {
        let dates = compute_available_dates(&schedule, today, horizon);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dates_within_horizon(schedule in arb_schedule(), today in arb_date(), horizon in 0u32..120) {
        let dates = compute_available_dates(&schedule, today, horizon);
        prop_assert!(dates.len() <= horizon as usize + 1);
        for d in &dates {
            prop_assert!(*d >= today);
            prop_assert!((*d - today).num_days() <= i64::from(horizon));
        }
    }

    #[test]
    fn dates_match_scheduled_weekdays(schedule in arb_schedule(), today in arb_date(), horizon in 0u32..60) {
        for d in compute_available_dates(&schedule, today, horizon) {
            prop_assert!(schedule.is_available_on(DayOfWeek::from(d.weekday())));
        }
    }

    #[test]
    fn full_week_horizon_covers_each_scheduled_day(schedule in arb_schedule(), today in arb_date()) {
        let dates = compute_available_dates(&schedule, today, 6);
        prop_assert_eq!(dates.len(), schedule.available_days().len());
    }

    #[test]
    fn pages_partition_the_slots(count in 0usize..60, page_size in 1usize..12) {
        let slots: Vec<RawSlot> = (0..count)
            .map(|i| RawSlot::new(format!("s{}", i), "9:00 - 9:15", 0))
            .collect();
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(8, 0, 0).unwrap();

        let first = classify_and_paginate(&slots, day, now, None, 0, page_size);
        prop_assert_eq!(first.total_pages, count.div_ceil(page_size));

        let ids: Vec<String> = (0..first.total_pages)
            .flat_map(|p| classify_and_paginate(&slots, day, now, None, p, page_size).slots)
            .map(|s| s.slot_id)
            .collect();
        let expected: Vec<String> = slots.iter().map(|s| s.slot_id.clone()).collect();
        prop_assert_eq!(ids, expected);

        let past_end = classify_and_paginate(&slots, day, now, None, first.total_pages, page_size);
        prop_assert!(past_end.slots.is_empty());
    }
}
