//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use rusqlite::OptionalExtension as _;
use serde_json::Value;
use uuid::Uuid;

use stratus_core::{
  record::WeatherRecord,
  store::{RecordOrder, RecordStore},
};

use crate::{
  Result,
  encode::{RawRecord, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Stratus record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a fully-built [`WeatherRecord`] into the `weather_records` table.
  pub(crate) async fn insert_record(&self, record: &WeatherRecord) -> Result<()> {
    let id_str   = encode_uuid(record.id);
    let location = record.location.clone();
    let data_str = serde_json::to_string(&record.weather_data)?;
    let at_str   = encode_dt(record.date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO weather_records (record_id, location, weather_data, recorded_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, location, data_str, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn create_record(
    &self,
    location:     String,
    weather_data: Value,
  ) -> Result<WeatherRecord> {
    // Stored timestamps carry microseconds; truncate up front so the returned
    // record matches what a later read yields.
    let record = WeatherRecord {
      id: Uuid::new_v4(),
      location,
      weather_data,
      date: Utc::now().trunc_subsecs(6),
    };

    self.insert_record(&record).await?;
    tracing::debug!(id = %record.id, location = %record.location, "stored weather record");
    Ok(record)
  }

  async fn list_records(&self, order: RecordOrder) -> Result<Vec<WeatherRecord>> {
    let order_by = match order {
      RecordOrder::NewestFirst => "recorded_at DESC, rowid DESC",
      RecordOrder::Insertion => "rowid ASC",
    };

    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM weather_records ORDER BY {order_by}",
          RawRecord::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }

  async fn update_location(
    &self,
    id:       Uuid,
    location: String,
  ) -> Result<Option<WeatherRecord>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE weather_records SET location = ?2 WHERE record_id = ?1",
          rusqlite::params![id_str, location],
        )?;
        if changed == 0 {
          return Ok(None);
        }

        let sql = format!(
          "SELECT {} FROM weather_records WHERE record_id = ?1",
          RawRecord::COLUMNS
        );
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], RawRecord::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn delete_record(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM weather_records WHERE record_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }
}
