//! Carebook Core Library
//!
//! Local-first booking logic for the hospital appointment app.
//!
//! # Architecture
//!
//! ```text
//!   Appointment Service (REST, via host HTTP client)
//!            │
//!            ▼
//!   carebook-api: decode doctor / slot / booking payloads
//!            │
//!            ▼
//!   ┌───────────────────────────────────────────────┐
//!   │ scheduling                                    │
//!   │  weekly schedule ──► available dates (horizon)│
//!   │  slot list + now ──► classified slot page     │
//!   └───────────────────────┬───────────────────────┘
//!                           │ user picks date + slot
//!                           ▼
//!              fees ──► booking confirmed ──► TokenReceipt
//!                                                 │
//!                                                 ▼
//!                                    local store (session, patients,
//!                                    receipts for offline viewing)
//! ```
//!
//! # Core Principle
//!
//! **Scheduling never fails.** Malformed weekday names are dropped and unparseable slot
//! labels stay selectable. Only the FFI edge rejects input, and only when a date or
//! timestamp string cannot be read at all.
//!
//! # Modules
//!
//! - [`scheduling`]: Availability calculator and slot classifier/paginator
//! - [`models`]: Domain types (WeeklySchedule, RawSlot, Doctor, TokenReceipt, etc.)
//! - [`clock`]: Time-of-day label parsing
//! - [`directory`]: Doctor and hospital search
//! - [`fees`]: Fee breakdown
//! - [`db`]: SQLite store for session, patients and receipts
//! - [`config`]: Host-supplied tunables

pub mod clock;
pub mod config;
pub mod db;
pub mod directory;
pub mod fees;
pub mod format;
pub mod models;
pub mod scheduling;

// Re-export commonly used types
pub use config::BookingConfig;
pub use db::Database;
pub use models::{
    BookingDetails, ClassifiedSlot, DayOfWeek, Doctor, DoctorService, Hospital, Patient,
    RawDaySchedule, RawSlot, RawTimeWindow, Session, SlotPage, SlotState, TimeWindow,
    TokenReceipt, WeeklySchedule,
};
pub use scheduling::{classify_and_paginate, compute_available_dates, BookingPlanner};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CarebookError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<db::DbError> for CarebookError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(what) => CarebookError::NotFound(what),
            other => CarebookError::DatabaseError(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for CarebookError {
    fn from(e: config::ConfigError) -> Self {
        CarebookError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CarebookError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CarebookError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

fn parse_date_arg(name: &str, value: &str) -> Result<chrono::NaiveDate, CarebookError> {
    format::parse_iso_date(value).ok_or_else(|| {
        CarebookError::InvalidInput(format!("{} is not an ISO date: {:?}", name, value))
    })
}

fn parse_datetime_arg(name: &str, value: &str) -> Result<chrono::NaiveDateTime, CarebookError> {
    format::parse_local_datetime(value).ok_or_else(|| {
        CarebookError::InvalidInput(format!("{} is not a timestamp: {:?}", name, value))
    })
}

// =========================================================================
// Stateless Functions (exported to FFI)
// =========================================================================

/// Bookable ISO dates from `today` through `today + horizon_days` (at most a year).
#[uniffi::export]
pub fn available_dates(
    schedule: Vec<FfiDaySchedule>,
    today: String,
    horizon_days: u32,
) -> Result<Vec<String>, CarebookError> {
    if horizon_days > config::MAX_HORIZON_DAYS {
        return Err(CarebookError::InvalidInput(format!(
            "horizon_days must be at most {}, got {}",
            config::MAX_HORIZON_DAYS,
            horizon_days
        )));
    }
    let today = parse_date_arg("today", &today)?;
    let raw: Vec<RawDaySchedule> = schedule.into_iter().map(Into::into).collect();
    let schedule = WeeklySchedule::from_raw(&raw);

    Ok(compute_available_dates(&schedule, today, horizon_days)
        .into_iter()
        .map(format::iso_date)
        .collect())
}

/// Classify slots for `selected_date` and return one page.
#[uniffi::export]
pub fn slot_page(
    slots: Vec<FfiSlot>,
    selected_date: String,
    now: String,
    selected_slot_id: Option<String>,
    page_index: u32,
    page_size: u32,
) -> Result<FfiSlotPage, CarebookError> {
    let selected_date = parse_date_arg("selected_date", &selected_date)?;
    let now = parse_datetime_arg("now", &now)?;
    let raw: Vec<RawSlot> = slots.into_iter().map(Into::into).collect();

    let page = classify_and_paginate(
        &raw,
        selected_date,
        now,
        selected_slot_id.as_deref(),
        page_index as usize,
        page_size as usize,
    );
    Ok(page.into())
}

/// Fee breakdown for a doctor and the services the user ticked.
#[uniffi::export]
pub fn compute_fees(
    doctor: FfiDoctor,
    selected_services: Vec<String>,
    booking_charge_minor: u64,
) -> FfiFeeBreakdown {
    let doctor: Doctor = doctor.into();
    fees::compute_fees(&doctor, &selected_services, booking_charge_minor).into()
}

/// Format an amount in minor units, e.g. `"Rs. 1,250.00"`.
#[uniffi::export]
pub fn format_amount(amount_minor: u64, currency_symbol: String) -> String {
    format::format_amount(amount_minor, &currency_symbol)
}

/// Default configuration.
#[uniffi::export]
pub fn default_config() -> FfiBookingConfig {
    BookingConfig::default().into()
}

/// Parse and validate a JSON configuration.
#[uniffi::export]
pub fn parse_config(json: String) -> Result<FfiBookingConfig, CarebookError> {
    Ok(BookingConfig::from_json(&json)?.into())
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the booking store at the given path.
#[uniffi::export]
pub fn open_store(
    path: String,
    config_json: Option<String>,
) -> Result<Arc<CarebookCore>, CarebookError> {
    let config = match config_json {
        Some(json) => BookingConfig::from_json(&json)?,
        None => BookingConfig::default(),
    };
    let db = Database::open(&path)?;
    Ok(Arc::new(CarebookCore {
        db: Arc::new(Mutex::new(db)),
        config,
    }))
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<CarebookCore>, CarebookError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(CarebookCore {
        db: Arc::new(Mutex::new(db)),
        config: BookingConfig::default(),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store and configuration wrapper for FFI.
#[derive(uniffi::Object)]
pub struct CarebookCore {
    db: Arc<Mutex<Database>>,
    config: BookingConfig,
}

#[uniffi::export]
impl CarebookCore {
    /// Active configuration.
    pub fn config(&self) -> FfiBookingConfig {
        self.config.clone().into()
    }

    // =========================================================================
    // Scheduling Operations
    // =========================================================================

    /// Bookable dates for a doctor, using the configured horizon.
    pub fn doctor_available_dates(
        &self,
        doctor: FfiDoctor,
        today: String,
    ) -> Result<Vec<String>, CarebookError> {
        let today = parse_date_arg("today", &today)?;
        let doctor: Doctor = doctor.into();
        let planner = BookingPlanner::new(&self.config);
        Ok(planner
            .available_dates(&doctor, today)
            .into_iter()
            .map(format::iso_date)
            .collect())
    }

    /// One page of the slot grid, using the configured page size.
    pub fn doctor_slot_page(
        &self,
        slots: Vec<FfiSlot>,
        selected_date: String,
        now: String,
        selected_slot_id: Option<String>,
        page_index: u32,
    ) -> Result<FfiSlotPage, CarebookError> {
        let selected_date = parse_date_arg("selected_date", &selected_date)?;
        let now = parse_datetime_arg("now", &now)?;
        let raw: Vec<RawSlot> = slots.into_iter().map(Into::into).collect();
        let planner = BookingPlanner::new(&self.config);
        Ok(planner
            .slot_page(
                &raw,
                selected_date,
                now,
                selected_slot_id.as_deref(),
                page_index as usize,
            )
            .into())
    }

    /// Fee breakdown including the configured booking charge.
    pub fn booking_fees(&self, doctor: FfiDoctor, selected_services: Vec<String>) -> FfiFeeBreakdown {
        let doctor: Doctor = doctor.into();
        fees::compute_fees(&doctor, &selected_services, self.config.booking_charge_minor).into()
    }

    // =========================================================================
    // Directory Operations
    // =========================================================================

    /// Search doctors by name, speciality or hospital.
    pub fn search_doctors(
        &self,
        doctors: Vec<FfiDoctor>,
        query: String,
        filter: FfiDoctorFilter,
    ) -> Vec<FfiScoredDoctor> {
        let doctors: Vec<Doctor> = doctors.into_iter().map(Into::into).collect();
        directory::search_doctors(
            &doctors,
            &query,
            &filter.into(),
            self.config.search_limit as usize,
            self.config.min_search_score,
        )
        .into_iter()
        .map(Into::into)
        .collect()
    }

    /// Search hospitals by name or city.
    pub fn search_hospitals(&self, hospitals: Vec<FfiHospital>, query: String) -> Vec<FfiScoredHospital> {
        let hospitals: Vec<Hospital> = hospitals.into_iter().map(Into::into).collect();
        directory::search_hospitals(
            &hospitals,
            &query,
            self.config.search_limit as usize,
            self.config.min_search_score,
        )
        .into_iter()
        .map(Into::into)
        .collect()
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Persist the signed-in user.
    pub fn save_session(&self, session: FfiSession) -> Result<(), CarebookError> {
        let db = self.db.lock()?;
        db.save_session(&session.into())?;
        Ok(())
    }

    /// Restore the signed-in user, if any.
    pub fn load_session(&self) -> Result<Option<FfiSession>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.load_session()?.map(Into::into))
    }

    /// Sign out. Returns whether a session existed.
    pub fn clear_session(&self) -> Result<bool, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.clear_session()?)
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a patient locally (before the server confirms).
    pub fn register_patient(
        &self,
        name: String,
        phone: String,
        gender: Option<String>,
        date_of_birth: Option<String>,
        relation: Option<String>,
    ) -> Result<FfiPatient, CarebookError> {
        if name.trim().is_empty() {
            return Err(CarebookError::InvalidInput("patient name is empty".into()));
        }
        if let Some(dob) = &date_of_birth {
            parse_date_arg("date_of_birth", dob)?;
        }

        let db = self.db.lock()?;
        let mut patient = Patient::new(name.trim().to_string(), phone);
        patient.gender = gender;
        patient.date_of_birth = date_of_birth;
        patient.relation = relation;
        db.insert_patient(&patient)?;
        Ok(patient.into())
    }

    /// Get a patient by local ID.
    pub fn get_patient(&self, local_id: String) -> Result<Option<FfiPatient>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.get_patient(&local_id)?.map(Into::into))
    }

    /// All locally registered patients, by name.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.list_patients()?.into_iter().map(Into::into).collect())
    }

    /// Record the server ID once registration succeeds.
    pub fn confirm_patient_registration(
        &self,
        local_id: String,
        server_id: String,
    ) -> Result<(), CarebookError> {
        let db = self.db.lock()?;
        if !db.set_patient_server_id(&local_id, &server_id)? {
            return Err(CarebookError::NotFound(format!("patient {}", local_id)));
        }
        Ok(())
    }

    // =========================================================================
    // Receipt Operations
    // =========================================================================

    /// Store a token receipt for a confirmed booking.
    ///
    /// Recording the same booking again returns the receipt already stored.
    pub fn record_booking(
        &self,
        booking: FfiBookingDetails,
    ) -> Result<FfiTokenReceipt, CarebookError> {
        let details = booking.try_into_details()?;
        let receipt = TokenReceipt::new(details);
        let db = self.db.lock()?;
        if let Some(existing) = db.get_receipt_by_reference(&receipt.reference)? {
            tracing::debug!(reference = %existing.reference, "booking already recorded");
            return Ok(existing.into());
        }
        db.insert_receipt(&receipt)?;
        Ok(receipt.into())
    }

    /// Get a receipt by local ID.
    pub fn get_receipt(&self, receipt_id: String) -> Result<Option<FfiTokenReceipt>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.get_receipt(&receipt_id)?.map(Into::into))
    }

    /// Look up a receipt by its booking reference.
    pub fn find_receipt(&self, reference: String) -> Result<Option<FfiTokenReceipt>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db.get_receipt_by_reference(&reference)?.map(Into::into))
    }

    /// Newest receipts first.
    pub fn recent_receipts(&self, limit: u32) -> Result<Vec<FfiTokenReceipt>, CarebookError> {
        let db = self.db.lock()?;
        Ok(db
            .list_receipts(limit as usize)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Receipts for appointments on or after `today`.
    pub fn upcoming_receipts(&self, today: String) -> Result<Vec<FfiTokenReceipt>, CarebookError> {
        let today = parse_date_arg("today", &today)?;
        let db = self.db.lock()?;
        Ok(db
            .list_upcoming_receipts(today)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Plain-text summary of a receipt for the share sheet.
    pub fn receipt_share_text(&self, receipt_id: String) -> Result<String, CarebookError> {
        let db = self.db.lock()?;
        let receipt = db
            .get_receipt(&receipt_id)?
            .ok_or_else(|| CarebookError::NotFound(format!("receipt {}", receipt_id)))?;
        Ok(receipt.share_text(&self.config.currency_symbol))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe schedule entry. `day` is a weekday name in any case.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDaySchedule {
    pub day: String,
    pub windows: Vec<FfiTimeWindow>,
}

/// FFI-safe time window labels.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTimeWindow {
    pub time_from: String,
    pub time_to: String,
}

impl From<FfiDaySchedule> for RawDaySchedule {
    fn from(entry: FfiDaySchedule) -> Self {
        RawDaySchedule {
            day: entry.day,
            windows: entry
                .windows
                .into_iter()
                .map(|w| RawTimeWindow {
                    time_from: w.time_from,
                    time_to: w.time_to,
                })
                .collect(),
        }
    }
}

/// FFI-safe slot as listed by the server.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSlot {
    pub slot_id: String,
    pub label: String,
    pub status: u8,
}

impl From<FfiSlot> for RawSlot {
    fn from(slot: FfiSlot) -> Self {
        RawSlot {
            slot_id: slot.slot_id,
            label: slot.label,
            status: slot.status,
        }
    }
}

/// FFI-safe classified slot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClassifiedSlot {
    pub slot_id: String,
    pub label: String,
    pub state: SlotState,
}

/// FFI-safe slot page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSlotPage {
    pub slots: Vec<FfiClassifiedSlot>,
    pub page_index: u32,
    pub total_pages: u32,
}

impl From<SlotPage> for FfiSlotPage {
    fn from(page: SlotPage) -> Self {
        Self {
            slots: page
                .slots
                .into_iter()
                .map(|s| FfiClassifiedSlot {
                    slot_id: s.slot_id,
                    label: s.label,
                    state: s.state,
                })
                .collect(),
            page_index: u32::try_from(page.page_index).unwrap_or(u32::MAX),
            total_pages: u32::try_from(page.total_pages).unwrap_or(u32::MAX),
        }
    }
}

/// FFI-safe doctor service.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorService {
    pub name: String,
    pub fee_minor: u64,
}

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub name: String,
    pub speciality: Option<String>,
    pub hospital_id: Option<String>,
    pub hospital_name: Option<String>,
    pub consultation_fee_minor: u64,
    pub services: Vec<FfiDoctorService>,
    pub weekly_schedule: Vec<FfiDaySchedule>,
}

impl From<FfiDoctor> for Doctor {
    fn from(doctor: FfiDoctor) -> Self {
        let raw: Vec<RawDaySchedule> = doctor.weekly_schedule.into_iter().map(Into::into).collect();
        Doctor {
            id: doctor.id,
            name: doctor.name,
            speciality: doctor.speciality,
            hospital_id: doctor.hospital_id,
            hospital_name: doctor.hospital_name,
            consultation_fee_minor: doctor.consultation_fee_minor,
            services: doctor
                .services
                .into_iter()
                .map(|s| DoctorService::new(s.name, s.fee_minor))
                .collect(),
            schedule: WeeklySchedule::from_raw(&raw),
        }
    }
}

/// FFI-safe doctor filter.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorFilter {
    pub hospital_id: Option<String>,
    pub speciality: Option<String>,
    pub available_on: Option<DayOfWeek>,
}

impl From<FfiDoctorFilter> for directory::DoctorFilter {
    fn from(filter: FfiDoctorFilter) -> Self {
        directory::DoctorFilter {
            hospital_id: filter.hospital_id,
            speciality: filter.speciality,
            available_on: filter.available_on,
        }
    }
}

/// FFI-safe doctor search hit.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScoredDoctor {
    pub doctor_id: String,
    pub name: String,
    pub speciality: Option<String>,
    pub hospital_name: Option<String>,
    pub score: f64,
}

impl From<directory::ScoredDoctor> for FfiScoredDoctor {
    fn from(hit: directory::ScoredDoctor) -> Self {
        Self {
            doctor_id: hit.doctor.id,
            name: hit.doctor.name,
            speciality: hit.doctor.speciality,
            hospital_name: hit.doctor.hospital_name,
            score: hit.score,
        }
    }
}

/// FFI-safe hospital.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHospital {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl From<FfiHospital> for Hospital {
    fn from(h: FfiHospital) -> Self {
        Hospital {
            id: h.id,
            name: h.name,
            city: h.city,
            address: h.address,
        }
    }
}

/// FFI-safe hospital search hit.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScoredHospital {
    pub hospital_id: String,
    pub name: String,
    pub city: Option<String>,
    pub score: f64,
}

impl From<directory::ScoredHospital> for FfiScoredHospital {
    fn from(hit: directory::ScoredHospital) -> Self {
        Self {
            hospital_id: hit.hospital.id,
            name: hit.hospital.name,
            city: hit.hospital.city,
            score: hit.score,
        }
    }
}

/// FFI-safe fee line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeeLine {
    pub name: String,
    pub amount_minor: u64,
}

/// FFI-safe fee breakdown.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeeBreakdown {
    pub consultation_minor: u64,
    pub services: Vec<FfiFeeLine>,
    pub booking_charge_minor: u64,
    pub total_minor: u64,
}

impl From<fees::FeeBreakdown> for FfiFeeBreakdown {
    fn from(b: fees::FeeBreakdown) -> Self {
        Self {
            consultation_minor: b.consultation_minor,
            services: b
                .services
                .into_iter()
                .map(|l| FfiFeeLine {
                    name: l.name,
                    amount_minor: l.amount_minor,
                })
                .collect(),
            booking_charge_minor: b.booking_charge_minor,
            total_minor: b.total_minor,
        }
    }
}

/// FFI-safe configuration.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookingConfig {
    pub horizon_days: u32,
    pub page_size: u32,
    pub booking_charge_minor: u64,
    pub currency_symbol: String,
    pub search_limit: u32,
    pub min_search_score: f64,
}

impl From<BookingConfig> for FfiBookingConfig {
    fn from(c: BookingConfig) -> Self {
        Self {
            horizon_days: c.horizon_days,
            page_size: c.page_size,
            booking_charge_minor: c.booking_charge_minor,
            currency_symbol: c.currency_symbol,
            search_limit: c.search_limit,
            min_search_score: c.min_search_score,
        }
    }
}

/// FFI-safe session.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSession {
    pub user_id: String,
    pub display_name: String,
    pub phone: Option<String>,
    pub auth_token: String,
    pub signed_in_at: String,
}

impl From<Session> for FfiSession {
    fn from(s: Session) -> Self {
        Self {
            user_id: s.user_id,
            display_name: s.display_name,
            phone: s.phone,
            auth_token: s.auth_token,
            signed_in_at: s.signed_in_at,
        }
    }
}

impl From<FfiSession> for Session {
    fn from(s: FfiSession) -> Self {
        Session {
            user_id: s.user_id,
            display_name: s.display_name,
            phone: s.phone,
            auth_token: s.auth_token,
            signed_in_at: s.signed_in_at,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub local_id: String,
    pub server_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub relation: Option<String>,
}

impl From<Patient> for FfiPatient {
    fn from(p: Patient) -> Self {
        Self {
            local_id: p.local_id,
            server_id: p.server_id,
            name: p.name,
            phone: p.phone,
            gender: p.gender,
            date_of_birth: p.date_of_birth,
            relation: p.relation,
        }
    }
}

/// FFI-safe booking confirmation details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookingDetails {
    pub appointment_id: String,
    pub token_number: u32,
    pub doctor_id: String,
    pub doctor_name: String,
    pub hospital_name: Option<String>,
    pub patient_name: String,
    pub patient_id: Option<String>,
    pub appointment_date: String,
    pub slot_label: String,
    pub fee_total_minor: u64,
}

impl FfiBookingDetails {
    fn try_into_details(self) -> Result<BookingDetails, CarebookError> {
        let appointment_date = parse_date_arg("appointment_date", &self.appointment_date)?;
        Ok(BookingDetails {
            appointment_id: self.appointment_id,
            token_number: self.token_number,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            hospital_name: self.hospital_name,
            patient_name: self.patient_name,
            patient_id: self.patient_id,
            appointment_date,
            slot_label: self.slot_label,
            fee_total_minor: self.fee_total_minor,
        })
    }
}

/// FFI-safe token receipt.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTokenReceipt {
    pub receipt_id: String,
    pub reference: String,
    pub appointment_id: String,
    pub token_number: u32,
    pub doctor_name: String,
    pub hospital_name: Option<String>,
    pub patient_name: String,
    pub appointment_date: String,
    pub slot_label: String,
    pub fee_total_minor: u64,
    pub created_at: String,
}

impl From<TokenReceipt> for FfiTokenReceipt {
    fn from(r: TokenReceipt) -> Self {
        Self {
            receipt_id: r.receipt_id,
            reference: r.reference,
            appointment_id: r.appointment_id,
            token_number: r.token_number,
            doctor_name: r.doctor_name,
            hospital_name: r.hospital_name,
            patient_name: r.patient_name,
            appointment_date: format::iso_date(r.appointment_date),
            slot_label: r.slot_label,
            fee_total_minor: r.fee_total_minor,
            created_at: r.created_at,
        }
    }
}
