//! Hospital and doctor browsing with typo-tolerant search.
//!
//! Doctor match weights:
//! - Name: 100%
//! - Speciality: 90%
//! - Hospital name: 80%
//!
//! A doctor's score is the best of the weighted field scores.

use std::cmp::Ordering;

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{DayOfWeek, Doctor, Hospital};

const SPECIALITY_WEIGHT: f64 = 0.9;
const HOSPITAL_WEIGHT: f64 = 0.8;

/// Narrowing applied before scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilter {
    pub hospital_id: Option<String>,
    pub speciality: Option<String>,
    pub available_on: Option<DayOfWeek>,
}

impl DoctorFilter {
    /// Whether a doctor passes every set criterion.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(hospital_id) = &self.hospital_id {
            if doctor.hospital_id.as_deref() != Some(hospital_id.as_str()) {
                return false;
            }
        }
        if let Some(speciality) = &self.speciality {
            if !doctor.has_speciality(speciality) {
                return false;
            }
        }
        if let Some(day) = self.available_on {
            if !doctor.works_on(day) {
                return false;
            }
        }
        true
    }
}

/// A doctor search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoctor {
    pub doctor: Doctor,
    pub score: f64,
}

/// A hospital search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHospital {
    pub hospital: Hospital,
    pub score: f64,
}

/// Search doctors by name, speciality or hospital.
///
/// An empty query lists every doctor passing the filter, ordered by name.
pub fn search_doctors(
    doctors: &[Doctor],
    query: &str,
    filter: &DoctorFilter,
    limit: usize,
    min_score: f64,
) -> Vec<ScoredDoctor> {
    let query = query.trim().to_lowercase();

    let mut hits: Vec<ScoredDoctor> = doctors
        .iter()
        .filter(|d| filter.matches(d))
        .map(|d| ScoredDoctor {
            score: if query.is_empty() {
                1.0
            } else {
                score_doctor(d, &query)
            },
            doctor: d.clone(),
        })
        .filter(|hit| hit.score >= min_score)
        .collect();

    hits.sort_by(|a, b| by_score_then_name(a.score, &a.doctor.name, b.score, &b.doctor.name));
    hits.truncate(limit);

    tracing::debug!(query = %query, hits = hits.len(), "doctor search");
    hits
}

/// Search hospitals by name or city.
pub fn search_hospitals(
    hospitals: &[Hospital],
    query: &str,
    limit: usize,
    min_score: f64,
) -> Vec<ScoredHospital> {
    let query = query.trim().to_lowercase();

    let mut hits: Vec<ScoredHospital> = hospitals
        .iter()
        .map(|h| ScoredHospital {
            score: if query.is_empty() {
                1.0
            } else {
                let name = field_score(&query, &h.name);
                let city = h
                    .city
                    .as_deref()
                    .map(|c| field_score(&query, c) * HOSPITAL_WEIGHT)
                    .unwrap_or(0.0);
                name.max(city)
            },
            hospital: h.clone(),
        })
        .filter(|hit| hit.score >= min_score)
        .collect();

    hits.sort_by(|a, b| by_score_then_name(a.score, &a.hospital.name, b.score, &b.hospital.name));
    hits.truncate(limit);
    hits
}

/// Distinct specialities across doctors, sorted, for the filter picker.
pub fn specialities(doctors: &[Doctor]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for speciality in doctors.iter().filter_map(|d| d.speciality.as_deref()) {
        let speciality = speciality.trim();
        if speciality.is_empty() || out.iter().any(|s| s.eq_ignore_ascii_case(speciality)) {
            continue;
        }
        out.push(speciality.to_string());
    }
    out.sort_by_key(|s| s.to_lowercase());
    out
}

fn score_doctor(doctor: &Doctor, query: &str) -> f64 {
    let name = field_score(query, &doctor.name);
    let speciality = doctor
        .speciality
        .as_deref()
        .map(|s| field_score(query, s) * SPECIALITY_WEIGHT)
        .unwrap_or(0.0);
    let hospital = doctor
        .hospital_name
        .as_deref()
        .map(|h| field_score(query, h) * HOSPITAL_WEIGHT)
        .unwrap_or(0.0);

    name.max(speciality).max(hospital)
}

/// Score a lowercase query against a field (0.0 - 1.0).
fn field_score(query: &str, field: &str) -> f64 {
    let field = field.to_lowercase();
    if field.contains(query) {
        return 1.0;
    }

    // Compare against the whole field and each word, so "kavia" finds "Dr. Kavya Nair"
    field
        .split(|c: char| c.is_whitespace() || c == '.' || c == ',')
        .filter(|w| !w.is_empty())
        .chain(std::iter::once(field.as_str()))
        .map(|w| fuzzy_match(query, w))
        .fold(0.0, f64::max)
}

/// Combine Jaro-Winkler (typos, prefixes) with normalized Levenshtein (overall similarity).
fn fuzzy_match(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

fn by_score_then_name(a_score: f64, a_name: &str, b_score: f64, b_name: &str) -> Ordering {
    b_score
        .partial_cmp(&a_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
}
