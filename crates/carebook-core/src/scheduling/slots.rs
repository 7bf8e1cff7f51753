//! Slot classification and paging for the slot grid.
//!
//! Precedence, highest first:
//! 1. Selected - id equals the user's current pick
//! 2. Expired  - the date is today and the slot's start time has passed
//! 3. Booked   - server status 1 (booked) or 2 (blocked)
//! 4. Available

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock;
use crate::models::{ClassifiedSlot, RawSlot, SlotPage, SlotState, SlotSummary};

/// Default number of slots per grid page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Classify a single slot.
pub fn classify_slot(
    slot: &RawSlot,
    selected_date: NaiveDate,
    now: NaiveDateTime,
    selected_slot_id: Option<&str>,
) -> SlotState {
    if selected_slot_id == Some(slot.slot_id.as_str()) {
        return SlotState::Selected;
    }
    if is_expired(slot, selected_date, now) {
        return SlotState::Expired;
    }
    if slot.is_open() {
        SlotState::Available
    } else {
        SlotState::Booked
    }
}

/// Classify every slot and return the requested page.
///
/// `page_index` is not clamped: an index past the end yields an empty page.
pub fn classify_and_paginate(
    slots: &[RawSlot],
    selected_date: NaiveDate,
    now: NaiveDateTime,
    selected_slot_id: Option<&str>,
    page_index: usize,
    page_size: usize,
) -> SlotPage {
    if page_size == 0 {
        return SlotPage {
            slots: Vec::new(),
            page_index,
            total_pages: 0,
        };
    }

    let total_pages = slots.len().div_ceil(page_size);
    let start = page_index.saturating_mul(page_size).min(slots.len());
    let end = start.saturating_add(page_size).min(slots.len());

    let page = slots[start..end]
        .iter()
        .map(|slot| ClassifiedSlot {
            slot_id: slot.slot_id.clone(),
            label: slot.label.clone(),
            state: classify_slot(slot, selected_date, now, selected_slot_id),
        })
        .collect();

    SlotPage {
        slots: page,
        page_index,
        total_pages,
    }
}

/// Count slots per state across the whole date.
pub fn count_by_state(
    slots: &[RawSlot],
    selected_date: NaiveDate,
    now: NaiveDateTime,
    selected_slot_id: Option<&str>,
) -> SlotSummary {
    let mut summary = SlotSummary::default();
    for slot in slots {
        match classify_slot(slot, selected_date, now, selected_slot_id) {
            SlotState::Available => summary.available += 1,
            SlotState::Booked => summary.booked += 1,
            SlotState::Expired => summary.expired += 1,
            SlotState::Selected => summary.selected += 1,
        }
    }
    summary
}

fn is_expired(slot: &RawSlot, selected_date: NaiveDate, now: NaiveDateTime) -> bool {
    if selected_date != now.date() {
        return false;
    }
    match clock::slot_start(&slot.label) {
        Some(start) => start < now.time(),
        None => {
            tracing::debug!(
                slot_id = %slot.slot_id,
                label = %slot.label,
                "unparseable slot label, treating as not expired"
            );
            false
        }
    }
}
