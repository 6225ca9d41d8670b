//! SQL schema for the Stratus SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per completed current-weather lookup.
-- weather_data is never updated after insert; only location is mutable.
CREATE TABLE IF NOT EXISTS weather_records (
    record_id    TEXT PRIMARY KEY,
    location     TEXT NOT NULL,
    weather_data TEXT NOT NULL,   -- upstream JSON payload, verbatim
    recorded_at  TEXT NOT NULL    -- fixed-width RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS weather_records_recorded_idx
    ON weather_records(recorded_at);

PRAGMA user_version = 1;
";
