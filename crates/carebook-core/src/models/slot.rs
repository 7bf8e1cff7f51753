//! Time slot models.

use serde::{Deserialize, Serialize};

/// Server status code for an open slot.
pub const STATUS_AVAILABLE: u8 = 0;
/// Server status code for a slot taken by another booking.
pub const STATUS_BOOKED: u8 = 1;
/// Server status code for a slot the hospital has blocked.
pub const STATUS_BLOCKED: u8 = 2;

/// A slot as listed by the Appointment Service for one (doctor, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSlot {
    /// Opaque server identifier
    pub slot_id: String,
    /// Display label, e.g. "9:00 AM - 9:30 AM"
    pub label: String,
    /// Server occupancy status (0 available, 1 booked, 2 blocked)
    pub status: u8,
}

impl RawSlot {
    pub fn new(slot_id: impl Into<String>, label: impl Into<String>, status: u8) -> Self {
        Self {
            slot_id: slot_id.into(),
            label: label.into(),
            status,
        }
    }

    /// Whether the server reports the slot as open.
    pub fn is_open(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

/// Client-side state of a slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Available,
    Booked,
    Expired,
    Selected,
}

impl SlotState {
    /// Whether tapping the slot should select it.
    pub fn is_selectable(&self) -> bool {
        matches!(self, SlotState::Available | SlotState::Selected)
    }
}

/// A slot after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSlot {
    pub slot_id: String,
    pub label: String,
    pub state: SlotState,
}

/// One page of classified slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPage {
    pub slots: Vec<ClassifiedSlot>,
    pub page_index: usize,
    pub total_pages: usize,
}

/// Per-state totals across all slots of a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSummary {
    pub available: usize,
    pub booked: usize,
    pub expired: usize,
    pub selected: usize,
}

impl SlotSummary {
    pub fn total(&self) -> usize {
        self.available + self.booked + self.expired + self.selected
    }

    /// Slots the user could still pick.
    pub fn bookable(&self) -> usize {
        self.available + self.selected
    }
}
