//! Appointment scheduling: bookable dates and the slot grid.
//!
//! Pipeline: Doctor schedule → Available dates → (host fetches slots) → Classified page

mod availability;
mod slots;

pub use availability::*;
pub use slots::*;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::BookingConfig;
use crate::models::{Doctor, RawSlot, SlotPage, SlotSummary};

/// Applies the configured horizon and page size to the scheduling functions.
pub struct BookingPlanner<'a> {
    config: &'a BookingConfig,
}

impl<'a> BookingPlanner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a BookingConfig) -> Self {
        Self { config }
    }

    /// Bookable dates for a doctor, starting at `today`.
    pub fn available_dates(&self, doctor: &Doctor, today: NaiveDate) -> Vec<NaiveDate> {
        compute_available_dates(&doctor.schedule, today, self.config.horizon_days)
    }

    /// Default date to preselect when the booking screen opens.
    pub fn initial_date(&self, doctor: &Doctor, today: NaiveDate) -> Option<NaiveDate> {
        next_available_date(&doctor.schedule, today, self.config.horizon_days)
    }

    /// One page of the slot grid.
    pub fn slot_page(
        &self,
        slots: &[RawSlot],
        selected_date: NaiveDate,
        now: NaiveDateTime,
        selected_slot_id: Option<&str>,
        page_index: usize,
    ) -> SlotPage {
        classify_and_paginate(
            slots,
            selected_date,
            now,
            selected_slot_id,
            page_index,
            self.config.page_size as usize,
        )
    }

    /// Per-state totals for the slot grid header.
    pub fn slot_summary(
        &self,
        slots: &[RawSlot],
        selected_date: NaiveDate,
        now: NaiveDateTime,
        selected_slot_id: Option<&str>,
    ) -> SlotSummary {
        count_by_state(slots, selected_date, now, selected_slot_id)
    }

    /// Whether `page_index` points at an existing page for `slot_count` slots.
    pub fn is_valid_page(&self, slot_count: usize, page_index: usize) -> bool {
        let page_size = self.config.page_size as usize;
        page_size > 0 && page_index < slot_count.div_ceil(page_size)
    }

    /// Get the configuration.
    pub fn config(&self) -> &BookingConfig {
        self.config
    }
}
