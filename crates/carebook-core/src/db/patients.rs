//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Patient;

const PATIENT_COLUMNS: &str = "local_id, server_id, name, phone, gender, date_of_birth, \
                               relation, created_at, updated_at";

impl Database {
    /// Insert a new patient.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                local_id, server_id, name, phone, gender, date_of_birth,
                relation, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                patient.local_id,
                patient.server_id,
                patient.name,
                patient.phone,
                patient.gender,
                patient.date_of_birth,
                patient.relation,
                patient.created_at,
                patient.updated_at,
            ],
        )?;
        tracing::debug!(local_id = %patient.local_id, "patient stored");
        Ok(())
    }

    /// Get a patient by local ID.
    pub fn get_patient(&self, local_id: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM patients WHERE local_id = ?", PATIENT_COLUMNS),
                [local_id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get a patient by server ID.
    pub fn get_patient_by_server_id(&self, server_id: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM patients WHERE server_id = ?", PATIENT_COLUMNS),
                [server_id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients, ordered by name.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM patients ORDER BY name COLLATE NOCASE",
            PATIENT_COLUMNS
        ))?;

        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Link a local patient to its server ID once registration is confirmed.
    pub fn set_patient_server_id(&self, local_id: &str, server_id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE patients SET server_id = ?, updated_at = datetime('now') WHERE local_id = ?",
            [server_id, local_id],
        )?;
        Ok(rows_affected > 0)
    }

    /// Delete a patient.
    pub fn delete_patient(&self, local_id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE local_id = ?", [local_id])?;
        Ok(rows_affected > 0)
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        local_id: row.get(0)?,
        server_id: row.get(1)?,
        name: row.get(2)?,
        phone: row.get(3)?,
        gender: row.get(4)?,
        date_of_birth: row.get(5)?,
        relation: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();

        let mut patient = Patient::new("Asha Menon".into(), "9847012345".into());
        patient.gender = Some("female".into());
        patient.relation = Some("self".into());
        db.insert_patient(&patient).unwrap();

        let retrieved = db.get_patient(&patient.local_id).unwrap().unwrap();
        assert_eq!(retrieved, patient);
        assert!(db.get_patient("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_by_name() {
        let db = setup_db();
        db.insert_patient(&Patient::new("ravi".into(), "1".into())).unwrap();
        db.insert_patient(&Patient::new("Asha".into(), "2".into())).unwrap();
        db.insert_patient(&Patient::new("Meera".into(), "3".into())).unwrap();

        let names: Vec<String> = db
            .list_patients()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Asha", "Meera", "ravi"]);
    }

    #[test]
    fn test_link_server_id() {
        let db = setup_db();

        let patient = Patient::new("Asha".into(), "9847012345".into());
        db.insert_patient(&patient).unwrap();
        assert!(!patient.is_registered());

        assert!(db.set_patient_server_id(&patient.local_id, "srv-123").unwrap());
        assert!(!db.set_patient_server_id("missing", "srv-999").unwrap());

        let by_server = db.get_patient_by_server_id("srv-123").unwrap().unwrap();
        assert_eq!(by_server.local_id, patient.local_id);
        assert!(by_server.is_registered());
    }

    #[test]
    fn test_delete() {
        let db = setup_db();
        let patient = Patient::new("Asha".into(), "1".into());
        db.insert_patient(&patient).unwrap();

        assert!(db.delete_patient(&patient.local_id).unwrap());
        assert!(!db.delete_patient(&patient.local_id).unwrap());
    }
}
