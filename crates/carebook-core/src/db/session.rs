//! Signed-in session persistence.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Session;

impl Database {
    /// Store the session, replacing any previous one.
    pub fn save_session(&self, session: &Session) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO session (id, user_id, display_name, phone, auth_token, signed_in_at)
            VALUES (1, ?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                user_id = excluded.user_id,
                display_name = excluded.display_name,
                phone = excluded.phone,
                auth_token = excluded.auth_token,
                signed_in_at = excluded.signed_in_at
            "#,
            params![
                session.user_id,
                session.display_name,
                session.phone,
                session.auth_token,
                session.signed_in_at,
            ],
        )?;
        tracing::info!(user_id = %session.user_id, "session saved");
        Ok(())
    }

    /// Load the stored session, if any.
    pub fn load_session(&self) -> DbResult<Option<Session>> {
        self.conn
            .query_row(
                r#"
                SELECT user_id, display_name, phone, auth_token, signed_in_at
                FROM session
                WHERE id = 1
                "#,
                [],
                |row| {
                    Ok(Session {
                        user_id: row.get(0)?,
                        display_name: row.get(1)?,
                        phone: row.get(2)?,
                        auth_token: row.get(3)?,
                        signed_in_at: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Remove the stored session (sign out). Returns whether one existed.
    pub fn clear_session(&self) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM session", [])?;
        if rows_affected > 0 {
            tracing::info!("session cleared");
        }
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_session().unwrap().is_none());

        let mut session = Session::new("u-1".into(), "Asha".into(), "tok-abc".into());
        session.phone = Some("9847012345".into());
        db.save_session(&session).unwrap();

        let loaded = db.load_session().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_replaces() {
        let db = Database::open_in_memory().unwrap();
        db.save_session(&Session::new("u-1".into(), "Asha".into(), "t1".into()))
            .unwrap();
        db.save_session(&Session::new("u-2".into(), "Ravi".into(), "t2".into()))
            .unwrap();

        let loaded = db.load_session().unwrap().unwrap();
        assert_eq!(loaded.user_id, "u-2");
        assert_eq!(loaded.authorization_header(), "Bearer t2");
    }

    #[test]
    fn test_clear() {
        let db = Database::open_in_memory().unwrap();
        assert!(!db.clear_session().unwrap());

        db.save_session(&Session::new("u-1".into(), "Asha".into(), "t1".into()))
            .unwrap();
        assert!(db.clear_session().unwrap());
        assert!(db.load_session().unwrap().is_none());
    }
}
