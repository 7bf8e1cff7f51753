//! Appointment Service response decoding.

use carebook_core::fees::to_minor_units;
use carebook_core::format::parse_iso_date;
use carebook_core::models::{
    BookingDetails, Doctor, DoctorService, Hospital, RawDaySchedule, RawSlot, RawTimeWindow,
    WeeklySchedule,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Payload decoding errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Request rejected by server: {0}")]
    Rejected(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A doctor as returned by the doctor detail and listing endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "specialization")]
    pub speciality: Option<String>,
    #[serde(default)]
    pub hospital_id: Option<String>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub consultation_fee: Option<f64>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    /// Informational list of weekday names; availability comes from `weekly_schedule`
    #[serde(default)]
    pub available_days: Vec<String>,
    #[serde(default)]
    pub weekly_schedule: Vec<DayScheduleRecord>,
}

/// One weekday of a doctor's recurring schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct DayScheduleRecord {
    pub day: String,
    #[serde(default, rename = "timingScheedules", alias = "timingSchedules")]
    pub timings: Vec<TimingRecord>,
}

/// A time window label pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRecord {
    pub time_from: String,
    pub time_to: String,
}

/// A billable service offered by a doctor.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fee: Option<f64>,
}

/// One slot from the slot listing for a (doctor, date).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    #[serde(alias = "_id")]
    pub slot_id: String,
    pub slot: String,
    #[serde(default)]
    pub status: u8,
}

/// A hospital listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HospitalRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Response to a successful appointment creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(alias = "_id")]
    pub appointment_id: String,
    #[serde(alias = "token", alias = "tokenNo")]
    pub token_number: u32,
    pub date: String,
    pub slot: String,
}

/// Body of the appointment creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: String,
    pub patient_id: String,
    pub date: String,
    pub slot_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

impl AppointmentRequest {
    /// Serialize for the request body.
    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl DoctorRecord {
    /// Schedule entries in core form.
    pub fn raw_schedule(&self) -> Vec<RawDaySchedule> {
        self.weekly_schedule
            .iter()
            .map(|entry| RawDaySchedule {
                day: entry.day.clone(),
                windows: entry
                    .timings
                    .iter()
                    .map(|t| RawTimeWindow {
                        time_from: t.time_from.clone(),
                        time_to: t.time_to.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Convert to the core doctor model.
    pub fn into_doctor(self) -> Doctor {
        let schedule = WeeklySchedule::from_raw(&self.raw_schedule());
        Doctor {
            id: self.id,
            name: self.name,
            speciality: self.speciality,
            hospital_id: self.hospital_id,
            hospital_name: self.hospital_name,
            consultation_fee_minor: self.consultation_fee.map(to_minor_units).unwrap_or(0),
            services: self
                .services
                .into_iter()
                .map(|s| DoctorService::new(s.name, s.fee.map(to_minor_units).unwrap_or(0)))
                .collect(),
            schedule,
        }
    }
}

impl From<SlotRecord> for RawSlot {
    fn from(record: SlotRecord) -> Self {
        RawSlot {
            slot_id: record.slot_id,
            label: record.slot,
            status: record.status,
        }
    }
}

impl From<HospitalRecord> for Hospital {
    fn from(record: HospitalRecord) -> Self {
        Hospital {
            id: record.id,
            name: record.name,
            city: record.city,
            address: record.address,
        }
    }
}

impl BookingConfirmation {
    /// Combine with the booking context the client already holds.
    pub fn into_details(
        self,
        doctor: &Doctor,
        patient_name: String,
        patient_id: Option<String>,
        fee_total_minor: u64,
    ) -> ApiResult<BookingDetails> {
        let appointment_date = parse_iso_date(&self.date).ok_or(ApiError::InvalidField {
            field: "date",
            value: self.date.clone(),
        })?;

        Ok(BookingDetails {
            appointment_id: self.appointment_id,
            token_number: self.token_number,
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            hospital_name: doctor.hospital_name.clone(),
            patient_name,
            patient_id,
            appointment_date,
            slot_label: self.slot,
            fee_total_minor,
        })
    }
}

/// Decode a doctor detail response.
pub fn parse_doctor(json: &str) -> ApiResult<Doctor> {
    let record: DoctorRecord = decode(json)?;
    Ok(record.into_doctor())
}

/// Decode a doctor listing response.
pub fn parse_doctors(json: &str) -> ApiResult<Vec<Doctor>> {
    let records: Vec<DoctorRecord> = decode(json)?;
    Ok(records.into_iter().map(DoctorRecord::into_doctor).collect())
}

/// Decode a slot listing response.
pub fn parse_slots(json: &str) -> ApiResult<Vec<RawSlot>> {
    let records: Vec<SlotRecord> = decode(json)?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// Decode a hospital listing response.
pub fn parse_hospitals(json: &str) -> ApiResult<Vec<Hospital>> {
    let records: Vec<HospitalRecord> = decode(json)?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// Decode an appointment creation response.
pub fn parse_booking_confirmation(json: &str) -> ApiResult<BookingConfirmation> {
    decode(json)
}

/// Decode a body that is either `{ "success", "message", "data" }` or the bare payload.
pub fn decode<T: for<'de> Deserialize<'de>>(json: &str) -> ApiResult<T> {
    let value: Value = serde_json::from_str(json)?;
    let payload = unwrap_envelope(value)?;
    Ok(serde_json::from_value(payload)?)
}

fn unwrap_envelope(value: Value) -> ApiResult<Value> {
    let Value::Object(mut map) = value else {
        return Ok(value);
    };

    if !map.contains_key("success") && !map.contains_key("data") {
        return Ok(Value::Object(map));
    }

    if map.get("success").and_then(Value::as_bool) == Some(false) {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message")
            .to_string();
        tracing::warn!(%message, "appointment service rejected request");
        return Err(ApiError::Rejected(message));
    }

    match map.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(map)),
    }
}

/// Accept an amount sent as a number, a numeric string, or null.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
