//! Hospital and doctor directory models.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, WeeklySchedule};

/// A hospital listed by the Appointment Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    /// Server ID
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl Hospital {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: None,
            address: None,
        }
    }
}

/// A billable service offered by a doctor (e.g. "ECG", "Follow-up").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorService {
    pub name: String,
    /// Fee in minor currency units
    pub fee_minor: u64,
}

impl DoctorService {
    pub fn new(name: impl Into<String>, fee_minor: u64) -> Self {
        Self {
            name: name.into(),
            fee_minor,
        }
    }
}

/// A doctor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Server ID
    pub id: String,
    pub name: String,
    pub speciality: Option<String>,
    pub hospital_id: Option<String>,
    pub hospital_name: Option<String>,
    /// Consultation fee in minor currency units
    pub consultation_fee_minor: u64,
    pub services: Vec<DoctorService>,
    pub schedule: WeeklySchedule,
}

impl Doctor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            speciality: None,
            hospital_id: None,
            hospital_name: None,
            consultation_fee_minor: 0,
            services: Vec::new(),
            schedule: WeeklySchedule::new(),
        }
    }

    /// Whether the doctor has any window on the given weekday.
    pub fn works_on(&self, day: DayOfWeek) -> bool {
        self.schedule.is_available_on(day)
    }

    /// Case-insensitive speciality check. A doctor without a speciality matches nothing.
    pub fn has_speciality(&self, speciality: &str) -> bool {
        self.speciality
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(speciality.trim()))
    }

    /// Find an offered service by name, case-insensitively.
    pub fn service(&self, name: &str) -> Option<&DoctorService> {
        self.services
            .iter()
            .find(|s| s.name.trim().eq_ignore_ascii_case(name.trim()))
    }
}
