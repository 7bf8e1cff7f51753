//! Token receipt database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::format;
use crate::models::TokenReceipt;

const RECEIPT_COLUMNS: &str = "receipt_id, reference, appointment_id, token_number, doctor_id, \
                               doctor_name, hospital_name, patient_name, patient_id, \
                               appointment_date, slot_label, fee_total_minor, created_at";

impl Database {
    /// Store a receipt.
    pub fn insert_receipt(&self, receipt: &TokenReceipt) -> DbResult<()> {
        let fee = i64::try_from(receipt.fee_total_minor).unwrap_or(i64::MAX);

        self.conn.execute(
            r#"
            INSERT INTO token_receipts (
                receipt_id, reference, appointment_id, token_number, doctor_id,
                doctor_name, hospital_name, patient_name, patient_id,
                appointment_date, slot_label, fee_total_minor, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                receipt.receipt_id,
                receipt.reference,
                receipt.appointment_id,
                receipt.token_number,
                receipt.doctor_id,
                receipt.doctor_name,
                receipt.hospital_name,
                receipt.patient_name,
                receipt.patient_id,
                format::iso_date(receipt.appointment_date),
                receipt.slot_label,
                fee,
                receipt.created_at,
            ],
        )?;
        tracing::info!(
            reference = %receipt.reference,
            token = receipt.token_number,
            "token receipt stored"
        );
        Ok(())
    }

    /// Get a receipt by local ID.
    pub fn get_receipt(&self, receipt_id: &str) -> DbResult<Option<TokenReceipt>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM token_receipts WHERE receipt_id = ?",
                    RECEIPT_COLUMNS
                ),
                [receipt_id],
                ReceiptRow::from_row,
            )
            .optional()?;

        row.map(ReceiptRow::into_receipt).transpose()
    }

    /// Get a receipt by its booking reference (case-insensitive).
    pub fn get_receipt_by_reference(&self, reference: &str) -> DbResult<Option<TokenReceipt>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM token_receipts WHERE reference = ?",
                    RECEIPT_COLUMNS
                ),
                [reference.trim().to_uppercase()],
                ReceiptRow::from_row,
            )
            .optional()?;

        row.map(ReceiptRow::into_receipt).transpose()
    }

    /// Most recently created receipts first.
    pub fn list_receipts(&self, limit: usize) -> DbResult<Vec<TokenReceipt>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM token_receipts ORDER BY created_at DESC, rowid DESC LIMIT ?",
            RECEIPT_COLUMNS
        ))?;

        let rows = stmt.query_map([limit as i64], ReceiptRow::from_row)?;
        collect_receipts(rows)
    }

    /// Receipts for appointments on or after `today`, soonest first.
    pub fn list_upcoming_receipts(&self, today: NaiveDate) -> DbResult<Vec<TokenReceipt>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM token_receipts WHERE appointment_date >= ? \
             ORDER BY appointment_date ASC, token_number ASC",
            RECEIPT_COLUMNS
        ))?;

        let rows = stmt.query_map([format::iso_date(today)], ReceiptRow::from_row)?;
        collect_receipts(rows)
    }
}

fn collect_receipts(
    rows: impl Iterator<Item = rusqlite::Result<ReceiptRow>>,
) -> DbResult<Vec<TokenReceipt>> {
    rows.map(|row| row.map_err(DbError::from).and_then(ReceiptRow::into_receipt))
        .collect()
}

/// Internal row type for deserialization.
struct ReceiptRow {
    receipt_id: String,
    reference: String,
    appointment_id: String,
    token_number: u32,
    doctor_id: String,
    doctor_name: String,
    hospital_name: Option<String>,
    patient_name: String,
    patient_id: Option<String>,
    appointment_date: String,
    slot_label: String,
    fee_total_minor: i64,
    created_at: String,
}

impl ReceiptRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            receipt_id: row.get(0)?,
            reference: row.get(1)?,
            appointment_id: row.get(2)?,
            token_number: row.get(3)?,
            doctor_id: row.get(4)?,
            doctor_name: row.get(5)?,
            hospital_name: row.get(6)?,
            patient_name: row.get(7)?,
            patient_id: row.get(8)?,
            appointment_date: row.get(9)?,
            slot_label: row.get(10)?,
            fee_total_minor: row.get(11)?,
            created_at: row.get(12)?,
        })
    }

    fn into_receipt(self) -> DbResult<TokenReceipt> {
        let appointment_date = format::parse_iso_date(&self.appointment_date).ok_or_else(|| {
            DbError::Corrupt(format!(
                "receipt {} has invalid date {:?}",
                self.receipt_id, self.appointment_date
            ))
        })?;
        let fee_total_minor = u64::try_from(self.fee_total_minor).map_err(|_| {
            DbError::Corrupt(format!(
                "receipt {} has negative fee {}",
                self.receipt_id, self.fee_total_minor
            ))
        })?;

        Ok(TokenReceipt {
            receipt_id: self.receipt_id,
            reference: self.reference,
            appointment_id: self.appointment_id,
            token_number: self.token_number,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            hospital_name: self.hospital_name,
            patient_name: self.patient_name,
            patient_id: self.patient_id,
            appointment_date,
            slot_label: self.slot_label,
            fee_total_minor,
            created_at: self.created_at,
        })
    }
}
