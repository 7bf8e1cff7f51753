//! Booking store integration tests through the FFI surface.

use carebook_core::{
    open_store, open_store_in_memory, FfiBookingDetails, FfiDaySchedule, FfiDoctor,
    FfiDoctorFilter, FfiDoctorService, FfiSession, FfiSlot, FfiTimeWindow, CarebookError,
    DayOfWeek, SlotState,
};

fn make_booking(appointment_id: &str, date: &str, token: u32) -> FfiBookingDetails {
    FfiBookingDetails {
        appointment_id: appointment_id.to_string(),
        token_number: token,
        doctor_id: "doc-7".to_string(),
        doctor_name: "Dr. Kavya Nair".to_string(),
        hospital_name: Some("City General".to_string()),
        patient_name: "Asha Menon".to_string(),
        patient_id: None,
        appointment_date: date.to_string(),
        slot_label: "10:00 AM - 10:15 AM".to_string(),
        fee_total_minor: 52500,
    }
}

fn make_doctor(id: &str, name: &str, days: &[&str]) -> FfiDoctor {
    FfiDoctor {
        id: id.to_string(),
        name: name.to_string(),
        speciality: Some("Cardiology".to_string()),
        hospital_id: Some("h1".to_string()),
        hospital_name: Some("City General".to_string()),
        consultation_fee_minor: 50000,
        services: vec![FfiDoctorService {
            name: "ECG".to_string(),
            fee_minor: 30000,
        }],
        weekly_schedule: days
            .iter()
            .map(|d| FfiDaySchedule {
                day: d.to_string(),
                windows: vec![FfiTimeWindow {
                    time_from: "9:00 AM".to_string(),
                    time_to: "1:00 PM".to_string(),
                }],
            })
            .collect(),
    }
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carebook.db").to_string_lossy().to_string();

    let receipt_id = {
        let core = open_store(path.clone(), None).unwrap();
        core.save_session(FfiSession {
            user_id: "u-1".to_string(),
            display_name: "Asha".to_string(),
            phone: None,
            auth_token: "tok".to_string(),
            signed_in_at: "2024-06-10T08:00:00Z".to_string(),
        })
        .unwrap();
        core.record_booking(make_booking("apt-1", "2024-06-12", 4))
            .unwrap()
            .receipt_id
    };

    let core = open_store(path, None).unwrap();
    let session = core.load_session().unwrap().unwrap();
    assert_eq!(session.user_id, "u-1");

    let receipt = core.get_receipt(receipt_id).unwrap().unwrap();
    assert_eq!(receipt.token_number, 4);
    assert_eq!(receipt.appointment_date, "2024-06-12");
}

#[test]
fn test_record_booking_and_lookup_by_reference() {
    let core = open_store_in_memory().unwrap();
    let receipt = core
        .record_booking(make_booking("apt-1", "2024-06-12", 4))
        .unwrap();

    let found = core.find_receipt(receipt.reference.clone()).unwrap().unwrap();
    assert_eq!(found.receipt_id, receipt.receipt_id);

    let text = core.receipt_share_text(receipt.receipt_id).unwrap();
    assert!(text.contains(&receipt.reference));
    assert!(text.contains("Amount: Rs. 525.00"));
}

#[test]
fn test_record_same_booking_twice() {
    let core = open_store_in_memory().unwrap();
    let first = core
        .record_booking(make_booking("apt-1", "2024-06-12", 4))
        .unwrap();
    let second = core
        .record_booking(make_booking("apt-1", "2024-06-12", 4))
        .unwrap();

    assert_eq!(second.receipt_id, first.receipt_id);
    assert_eq!(second.reference, first.reference);
    assert_eq!(core.recent_receipts(10).unwrap().len(), 1);
}

#[test]
fn test_record_booking_rejects_bad_date() {
    let core = open_store_in_memory().unwrap();
    let result = core.record_booking(make_booking("apt-1", "12/06/2024", 4));
    assert!(matches!(result, Err(CarebookError::InvalidInput(_))));
}

#[test]
fn test_upcoming_receipts() {
    let core = open_store_in_memory().unwrap();
    core.record_booking(make_booking("past", "2024-06-01", 1)).unwrap();
    core.record_booking(make_booking("later", "2024-06-20", 1)).unwrap();
    core.record_booking(make_booking("soon", "2024-06-12", 1)).unwrap();

    let upcoming = core.upcoming_receipts("2024-06-10".to_string()).unwrap();
    let ids: Vec<&str> = upcoming.iter().map(|r| r.appointment_id.as_str()).collect();
    assert_eq!(ids, vec!["soon", "later"]);

    assert_eq!(core.recent_receipts(10).unwrap().len(), 3);
}

#[test]
fn test_missing_receipt_share_text() {
    let core = open_store_in_memory().unwrap();
    assert!(matches!(
        core.receipt_share_text("nope".to_string()),
        Err(CarebookError::NotFound(_))
    ));
}

#[test]
fn test_patient_registration_flow() {
    let core = open_store_in_memory().unwrap();

    let patient = core
        .register_patient(
            "  Asha Menon ".to_string(),
            "9847012345".to_string(),
            Some("female".to_string()),
            Some("1990-04-02".to_string()),
            Some("self".to_string()),
        )
        .unwrap();
    assert_eq!(patient.name, "Asha Menon");
    assert!(patient.server_id.is_none());

    core.confirm_patient_registration(patient.local_id.clone(), "srv-9".to_string())
        .unwrap();
    let stored = core.get_patient(patient.local_id).unwrap().unwrap();
    assert_eq!(stored.server_id.as_deref(), Some("srv-9"));

    assert!(matches!(
        core.confirm_patient_registration("missing".to_string(), "srv-1".to_string()),
        Err(CarebookError::NotFound(_))
    ));
    assert!(matches!(
        core.register_patient(" ".to_string(), "1".to_string(), None, None, None),
        Err(CarebookError::InvalidInput(_))
    ));
}

#[test]
fn test_clear_session() {
    let core = open_store_in_memory().unwrap();
    assert!(!core.clear_session().unwrap());
    assert!(core.load_session().unwrap().is_none());
}

#[test]
fn test_configured_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carebook.db").to_string_lossy().to_string();
    let core = open_store(
        path.clone(),
        Some(r#"{"page_size": 4, "horizon_days": 7, "booking_charge_minor": 2500}"#.to_string()),
    )
    .unwrap();

    let doctor = make_doctor("d1", "Dr. Kavya Nair", &["Monday", "Wednesday"]);
    let dates = core
        .doctor_available_dates(doctor.clone(), "2024-06-10".to_string())
        .unwrap();
    assert_eq!(dates, vec!["2024-06-10", "2024-06-12", "2024-06-17"]);

    let slots: Vec<FfiSlot> = (0..9)
        .map(|i| FfiSlot {
            slot_id: format!("s{}", i),
            label: format!("{}:00 - {}:30", 9 + i, 9 + i),
            status: 0,
        })
        .collect();
    let page = core
        .doctor_slot_page(
            slots,
            "2024-06-10".to_string(),
            "2024-06-10T10:15:00".to_string(),
            None,
            0,
        )
        .unwrap();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.slots.len(), 4);
    assert_eq!(page.slots[0].state, SlotState::Expired);
    assert_eq!(page.slots[2].state, SlotState::Available);

    let fees = core.booking_fees(doctor, vec!["ecg".to_string()]);
    assert_eq!(fees.total_minor, 50000 + 30000 + 2500);

    assert!(open_store(path, Some(r#"{"page_size": 0}"#.to_string())).is_err());
}

#[test]
fn test_search_doctors_through_core() {
    let core = open_store_in_memory().unwrap();
    let doctors = vec![
        make_doctor("d1", "Dr. Kavya Nair", &["Monday"]),
        make_doctor("d2", "Dr. Arjun Pillai", &["Tuesday"]),
    ];

    let hits = core.search_doctors(
        doctors,
        String::new(),
        FfiDoctorFilter {
            hospital_id: None,
            speciality: None,
            available_on: Some(DayOfWeek::Tuesday),
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doctor_id, "d2");
}

#[test]
fn test_stateless_functions() {
    let doctor = make_doctor("d1", "Dr. Kavya Nair", &["monday", "Wednesday", "Caturday"]);

    let dates = carebook_core::available_dates(doctor.weekly_schedule.clone(), "2024-06-10".to_string(), 7)
        .unwrap();
    assert_eq!(dates, vec!["2024-06-10", "2024-06-12", "2024-06-17"]);

    assert!(matches!(
        carebook_core::available_dates(vec![], "tomorrow".to_string(), 7),
        Err(CarebookError::InvalidInput(_))
    ));
    assert!(matches!(
        carebook_core::available_dates(doctor.weekly_schedule.clone(), "2024-06-10".to_string(), u32::MAX),
        Err(CarebookError::InvalidInput(_))
    ));
    assert_eq!(
        carebook_core::available_dates(doctor.weekly_schedule.clone(), "2024-06-10".to_string(), 365)
            .unwrap()
            .len(),
        105
    );

    let page = carebook_core::slot_page(
        vec![FfiSlot {
            slot_id: "a".to_string(),
            label: "9:00 AM - 9:30 AM".to_string(),
            status: 0,
        }],
        "2024-06-10".to_string(),
        "2024-06-10T10:00:00+05:30".to_string(),
        None,
        0,
        6,
    )
    .unwrap();
    assert_eq!(page.slots[0].state, SlotState::Expired);

    let fees = carebook_core::compute_fees(doctor, vec!["ECG".to_string(), "MRI".to_string()], 0);
    assert_eq!(fees.services.len(), 1);
    assert_eq!(fees.total_minor, 80000);

    assert_eq!(carebook_core::format_amount(80000, "Rs.".to_string()), "Rs. 800.00");
    assert_eq!(carebook_core::default_config().page_size, 6);
    assert!(carebook_core::parse_config(r#"{"horizon_days": 999}"#.to_string()).is_err());
}
