//! Token receipts issued after a successful booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::format;

/// Length of the human-readable booking reference.
pub const REFERENCE_LEN: usize = 10;

/// Booking details a receipt is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub appointment_id: String,
    pub token_number: u32,
    pub doctor_id: String,
    pub doctor_name: String,
    pub hospital_name: Option<String>,
    pub patient_name: String,
    pub patient_id: Option<String>,
    pub appointment_date: NaiveDate,
    pub slot_label: String,
    pub fee_total_minor: u64,
}

/// A booked token, kept locally so it can be shown and shared offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenReceipt {
    /// Local UUID
    pub receipt_id: String,
    /// Short reference derived from the booking fields
    pub reference: String,
    pub appointment_id: String,
    pub token_number: u32,
    pub doctor_id: String,
    pub doctor_name: String,
    pub hospital_name: Option<String>,
    pub patient_name: String,
    pub patient_id: Option<String>,
    pub appointment_date: NaiveDate,
    pub slot_label: String,
    pub fee_total_minor: u64,
    /// Creation timestamp
    pub created_at: String,
}

impl TokenReceipt {
    /// Create a receipt for a confirmed booking.
    pub fn new(details: BookingDetails) -> Self {
        let reference = booking_reference(
            &details.appointment_id,
            &details.doctor_id,
            details.appointment_date,
            &details.slot_label,
            details.token_number,
        );

        Self {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            reference,
            appointment_id: details.appointment_id,
            token_number: details.token_number,
            doctor_id: details.doctor_id,
            doctor_name: details.doctor_name,
            hospital_name: details.hospital_name,
            patient_name: details.patient_name,
            patient_id: details.patient_id,
            appointment_date: details.appointment_date,
            slot_label: details.slot_label,
            fee_total_minor: details.fee_total_minor,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Check that the reference still matches the booking fields.
    pub fn verify_reference(&self) -> bool {
        self.reference
            == booking_reference(
                &self.appointment_id,
                &self.doctor_id,
                self.appointment_date,
                &self.slot_label,
                self.token_number,
            )
    }

    /// Whether the appointment is today or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.appointment_date >= today
    }

    /// Plain-text summary for the host's share sheet.
    pub fn share_text(&self, currency_symbol: &str) -> String {
        let mut lines = vec![
            format!("Appointment token #{}", self.token_number),
            format!("Reference: {}", self.reference),
            format!("Patient: {}", self.patient_name),
            format!("Doctor: {}", self.doctor_name),
        ];
        if let Some(hospital) = &self.hospital_name {
            lines.push(format!("Hospital: {}", hospital));
        }
        lines.push(format!(
            "Date: {}",
            format::display_date(self.appointment_date)
        ));
        lines.push(format!("Time: {}", self.slot_label));
        lines.push(format!(
            "Amount: {}",
            format::format_amount(self.fee_total_minor, currency_symbol)
        ));
        lines.join("\n")
    }
}

/// Derive the booking reference: leading hex digits of SHA-256 over the canonical fields.
pub fn booking_reference(
    appointment_id: &str,
    doctor_id: &str,
    date: NaiveDate,
    slot_label: &str,
    token_number: u32,
) -> String {
    let canonical = format!(
        "{}|{}|{}|{}|{}",
        appointment_id.trim(),
        doctor_id.trim(),
        date.format("%Y-%m-%d"),
        slot_label.trim(),
        token_number
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hex::encode_upper(hasher.finalize());
    digest[..REFERENCE_LEN].to_string()
}
