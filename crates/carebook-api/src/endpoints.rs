//! Request URLs for the Appointment Service.

use carebook_core::format::iso_date;
use chrono::NaiveDate;
use url::Url;

use crate::payloads::{ApiError, ApiResult};

/// Builds request URLs under a service base such as `https://api.example.com/v1/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET hospitals`
    pub fn hospitals(&self) -> Url {
        self.url_for(&["hospitals"])
    }

    /// `GET hospitals/{id}/doctors`
    pub fn doctors_by_hospital(&self, hospital_id: &str) -> ApiResult<Url> {
        let hospital_id = path_id("hospital_id", hospital_id)?;
        Ok(self.url_for(&["hospitals", hospital_id, "doctors"]))
    }

    /// `GET doctors/{id}`
    pub fn doctor(&self, doctor_id: &str) -> ApiResult<Url> {
        let doctor_id = path_id("doctor_id", doctor_id)?;
        Ok(self.url_for(&["doctors", doctor_id]))
    }

    /// `GET slots?doctorId=..&date=YYYY-MM-DD`
    pub fn slots(&self, doctor_id: &str, date: NaiveDate) -> Url {
        let mut url = self.url_for(&["slots"]);
        url.query_pairs_mut()
            .append_pair("doctorId", doctor_id)
            .append_pair("date", &iso_date(date));
        url
    }

    /// `POST appointments`
    pub fn create_appointment(&self) -> Url {
        self.url_for(&["appointments"])
    }

    /// `POST patients`
    pub fn register_patient(&self) -> Url {
        self.url_for(&["patients"])
    }

    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// An ID used as a path segment. Empty and dot segments would change the path.
fn path_id<'a>(field: &'static str, id: &'a str) -> ApiResult<&'a str> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::InvalidField {
            field,
            value: id.to_string(),
        });
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://api.carebook.test/v1/").unwrap()
    }

    #[test]
    fn test_paths() {
        let e = endpoints();
        assert_eq!(e.hospitals().as_str(), "https://api.carebook.test/v1/hospitals");
        assert_eq!(
            e.doctors_by_hospital("h1").unwrap().as_str(),
            "https://api.carebook.test/v1/hospitals/h1/doctors"
        );
        assert_eq!(
            e.doctor("doc-7").unwrap().as_str(),
            "https://api.carebook.test/v1/doctors/doc-7"
        );
        assert_eq!(
            e.create_appointment().as_str(),
            "https://api.carebook.test/v1/appointments"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let e = Endpoints::new("https://api.carebook.test/v1").unwrap();
        assert_eq!(
            e.doctor("d1").unwrap().as_str(),
            "https://api.carebook.test/v1/doctors/d1"
        );
    }

    #[test]
    fn test_slots_query() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let url = endpoints().slots("doc 7&x", date);
        assert_eq!(
            url.as_str(),
            "https://api.carebook.test/v1/slots?doctorId=doc+7%26x&date=2024-06-12"
        );
    }

    #[test]
    fn test_segment_encoding() {
        let url = endpoints().doctor("a/b c").unwrap();
        assert_eq!(url.as_str(), "https://api.carebook.test/v1/doctors/a%2Fb%20c");
    }

    #[test]
    fn test_dot_and_empty_ids_rejected() {
        let e = endpoints();
        for id in ["", ".", ".."] {
            assert!(matches!(
                e.doctor(id),
                Err(ApiError::InvalidField { field: "doctor_id", .. })
            ));
        }
        assert!(matches!(
            e.doctors_by_hospital(".."),
            Err(ApiError::InvalidField { field: "hospital_id", .. })
        ));
        assert_eq!(
            e.doctor("...").unwrap().as_str(),
            "https://api.carebook.test/v1/doctors/..."
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(Endpoints::new("not a url"), Err(ApiError::BaseUrl(_))));
        assert!(matches!(
            Endpoints::new("mailto:desk@carebook.test"),
            Err(ApiError::BaseUrl(_))
        ));
    }

    proptest! {
        #[test]
        fn doctor_id_survives_encoding(id in "[a-zA-Z0-9 ./?#%-]{1,20}") {
            prop_assume!(id != "." && id != "..");
            let url = endpoints().doctor(&id).unwrap();
            let last = url.path_segments().and_then(|s| s.last()).unwrap().to_string();
            // No '+' in the generated ids, so form decoding matches path decoding
            let decoded = url::form_urlencoded::parse(format!("x={}", last).as_bytes())
                .next()
                .map(|(_, v)| v.into_owned())
                .unwrap();
            prop_assert_eq!(decoded, id);
        }
    }
}
