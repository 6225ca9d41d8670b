//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{Duration, Utc};
use serde_json::json;
use stratus_core::{
  record::WeatherRecord,
  store::{RecordOrder, RecordStore},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn payload(name: &str, temp: f64) -> serde_json::Value {
  json!({ "name": name, "main": { "temp": temp, "humidity": 60 } })
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_record() {
  let s = store().await;

  let record = s
    .create_record("Berlin".into(), payload("Berlin", 4.2))
    .await
    .unwrap();
  assert_eq!(record.location, "Berlin");

  let all = s.list_records(RecordOrder::NewestFirst).await.unwrap();
  assert_eq!(all, vec![record]);
}

#[tokio::test]
async fn create_assigns_unique_ids() {
  let s = store().await;
  let a = s.create_record("A".into(), json!({})).await.unwrap();
  let b = s.create_record("A".into(), json!({})).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn payload_is_stored_verbatim() {
  let s = store().await;
  let data = json!({
    "coord": { "lat": 51.5, "lon": -0.12 },
    "weather": [{ "id": 800, "description": "clear sky" }],
    "name": "London",
    "nested": { "list": [1, 2.5, null, "x"] },
  });
  s.create_record("London".into(), data.clone()).await.unwrap();

  let all = s.list_records(RecordOrder::Insertion).await.unwrap();
  assert_eq!(all[0].weather_data, data);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_records(RecordOrder::NewestFirst).await.unwrap().is_empty());
}

#[tokio::test]
async fn newest_first_ignores_insertion_order() {
  let s = store().await;
  let now = Utc::now();

  // Insert out of chronological order.
  for (location, age_minutes) in [("middle", 10), ("newest", 1), ("oldest", 60)] {
    let record = WeatherRecord {
      id:           Uuid::new_v4(),
      location:     location.into(),
      weather_data: json!({}),
      date:         now - Duration::minutes(age_minutes),
    };
    s.insert_record(&record).await.unwrap();
  }

  let names: Vec<_> = s
    .list_records(RecordOrder::NewestFirst)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.location)
    .collect();
  assert_eq!(names, ["newest", "middle", "oldest"]);

  let inserted: Vec<_> = s
    .list_records(RecordOrder::Insertion)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.location)
    .collect();
  assert_eq!(inserted, ["middle", "newest", "oldest"]);
}

#[tokio::test]
async fn newest_first_breaks_ties_by_insertion() {
  let s = store().await;
  let date = Utc::now();

  for location in ["first", "second"] {
    let record = WeatherRecord {
      id: Uuid::new_v4(),
      location: location.into(),
      weather_data: json!({}),
      date,
    };
    s.insert_record(&record).await.unwrap();
  }

  let all = s.list_records(RecordOrder::NewestFirst).await.unwrap();
  assert_eq!(all[0].location, "second");
  assert_eq!(all[1].location, "first");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_changes_only_location() {
  let s = store().await;
  let original = s
    .create_record("Lodnon".into(), payload("Lodnon", 12.0))
    .await
    .unwrap();

  let updated = s
    .update_location(original.id, "London".into())
    .await
    .unwrap()
    .expect("record exists");

  assert_eq!(updated.id, original.id);
  assert_eq!(updated.location, "London");
  assert_eq!(updated.date, original.date);
  assert_eq!(updated.weather_data, original.weather_data);
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
  let s = store().await;
  let r = s.create_record("x".into(), json!({})).await.unwrap();

  let first = s.update_location(r.id, "Paris".into()).await.unwrap();
  let second = s.update_location(r.id, "Paris".into()).await.unwrap();
  assert_eq!(first, second);

  let all = s.list_records(RecordOrder::NewestFirst).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].location, "Paris");
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let result = s.update_location(Uuid::new_v4(), "Nowhere".into()).await.unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  let keep = s.create_record("keep".into(), json!({})).await.unwrap();
  let gone = s.create_record("gone".into(), json!({})).await.unwrap();

  assert!(s.delete_record(gone.id).await.unwrap());

  let all = s.list_records(RecordOrder::NewestFirst).await.unwrap();
  assert_eq!(all, vec![keep]);
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete_record(Uuid::new_v4()).await.unwrap());
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn records_survive_reopen() {
  let dir = std::env::temp_dir().join(format!("stratus-test-{}", Uuid::new_v4()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("history.db");

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create_record("Madrid".into(), payload("Madrid", 30.1)).await.unwrap()
  };

  let reopened = SqliteStore::open(&path).await.unwrap();
  let all = reopened.list_records(RecordOrder::NewestFirst).await.unwrap();
  assert_eq!(all, vec![created]);

  drop(reopened);
  let _ = std::fs::remove_dir_all(&dir);
}
