//! SQLite schema definition.

/// Complete database schema for the local booking store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Session (single row)
-- ============================================================================

CREATE TABLE IF NOT EXISTS session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    user_id TEXT NOT NULL,
    display_name TEXT NOT NULL,
    phone TEXT,
    auth_token TEXT NOT NULL,
    signed_in_at TEXT NOT NULL
);

-- ============================================================================
-- Patients registered from this device
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    local_id TEXT PRIMARY KEY,
    server_id TEXT,                              -- NULL until registration is confirmed
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    gender TEXT,
    date_of_birth TEXT,
    relation TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_server_id ON patients(server_id);
CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Token receipts (append-only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS token_receipts (
    receipt_id TEXT PRIMARY KEY,
    reference TEXT NOT NULL UNIQUE,
    appointment_id TEXT NOT NULL,
    token_number INTEGER NOT NULL,
    doctor_id TEXT NOT NULL,
    doctor_name TEXT NOT NULL,
    hospital_name TEXT,
    patient_name TEXT NOT NULL,
    patient_id TEXT,
    appointment_date TEXT NOT NULL,              -- YYYY-MM-DD
    slot_label TEXT NOT NULL,
    fee_total_minor INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_receipts_date ON token_receipts(appointment_date);
CREATE INDEX IF NOT EXISTS idx_receipts_created ON token_receipts(created_at);
"#;
