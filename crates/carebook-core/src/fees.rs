//! Appointment fee computation.

use serde::{Deserialize, Serialize};

use crate::models::Doctor;

/// A single priced line on the booking summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    pub name: String,
    pub amount_minor: u64,
}

/// Fee breakdown shown before confirming a booking. All amounts in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub consultation_minor: u64,
    pub services: Vec<FeeLine>,
    pub booking_charge_minor: u64,
    pub total_minor: u64,
}

impl FeeBreakdown {
    /// Sum of the selected service lines.
    pub fn services_total(&self) -> u64 {
        self.services
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.amount_minor))
    }
}

/// Compute the fee breakdown for a booking.
///
/// Selected service names match the doctor's services case-insensitively. Unknown names
/// are skipped, and a service selected twice is charged once.
pub fn compute_fees(
    doctor: &Doctor,
    selected_services: &[String],
    booking_charge_minor: u64,
) -> FeeBreakdown {
    let mut services: Vec<FeeLine> = Vec::new();

    for name in selected_services {
        let Some(service) = doctor.service(name) else {
            tracing::warn!(doctor_id = %doctor.id, service = %name, "selected service not offered");
            continue;
        };
        if services
            .iter()
            .any(|line| line.name.eq_ignore_ascii_case(&service.name))
        {
            continue;
        }
        services.push(FeeLine {
            name: service.name.clone(),
            amount_minor: service.fee_minor,
        });
    }

    let mut breakdown = FeeBreakdown {
        consultation_minor: doctor.consultation_fee_minor,
        services,
        booking_charge_minor,
        total_minor: 0,
    };
    breakdown.total_minor = breakdown
        .consultation_minor
        .saturating_add(breakdown.services_total())
        .saturating_add(booking_charge_minor);
    breakdown
}

/// Convert an amount in major units (as sent by the server) to minor units.
///
/// Negative and non-finite amounts become zero.
pub fn to_minor_units(major: f64) -> u64 {
    if !major.is_finite() || major <= 0.0 {
        return 0;
    }
    let minor = (major * 100.0).round();
    if minor >= u64::MAX as f64 {
        u64::MAX
    } else {
        minor as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoctorService;

    fn doctor() -> Doctor {
        let mut doctor = Doctor::new("doc-1", "Dr. Iyer");
        doctor.consultation_fee_minor = 50000;
        doctor.services = vec![
            DoctorService::new("ECG", 30000),
            DoctorService::new("Blood Test", 15050),
        ];
        doctor
    }

    #[test]
    fn test_consultation_only() {
        let fees = compute_fees(&doctor(), &[], 0);
        assert_eq!(fees.total_minor, 50000);
        assert!(fees.services.is_empty());
    }

    #[test]
    fn test_services_and_charge() {
        let fees = compute_fees(&doctor(), &["ecg".into(), "Blood Test".into()], 2500);

        assert_eq!(fees.services.len(), 2);
        assert_eq!(fees.services[0].name, "ECG");
        assert_eq!(fees.services_total(), 45050);
        assert_eq!(fees.total_minor, 50000 + 45050 + 2500);
    }

    #[test]
    fn test_unknown_and_duplicate_services() {
        let fees = compute_fees(
            &doctor(),
            &["MRI".into(), "ECG".into(), "ecg".into()],
            0,
        );

        assert_eq!(fees.services.len(), 1);
        assert_eq!(fees.total_minor, 80000);
    }

    #[test]
    fn test_saturating_total() {
        let mut d = doctor();
        d.consultation_fee_minor = u64::MAX - 1;
        let fees = compute_fees(&d, &["ECG".into()], 10);
        assert_eq!(fees.total_minor, u64::MAX);
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(500.0), 50000);
        assert_eq!(to_minor_units(150.5), 15050);
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(-10.0), 0);
        assert_eq!(to_minor_units(f64::NAN), 0);
    }
}
