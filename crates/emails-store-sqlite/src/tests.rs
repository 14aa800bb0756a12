//! Integration tests for `SqliteStore` against an in-memory database.

use emails_core::{EmailRecord, NewEmail, store::EmailStore};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_email(name: &str, email: &str) -> NewEmail {
  NewEmail {
    email: email.into(),
    name:  name.into(),
  }
}

// ─── Insert / list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_assigns_id_and_lists_record() {
  let s = store().await;

  let record = s.insert(new_email("any", "any@mail.com")).await.unwrap();
  assert_eq!(record.email, "any@mail.com");
  assert_eq!(record.name, "any");

  let all = s.list_all().await.unwrap();
  assert_eq!(all, vec![record]);
}

#[tokio::test]
async fn list_all_is_insertion_ordered() {
  let s = store().await;
  // Names sort opposite to insertion order.
  for (name, email) in [("c", "c@mail.com"), ("b", "b@mail.com"), ("a", "a@mail.com")] {
    s.insert(new_email(name, email)).await.unwrap();
  }

  let names: Vec<String> = s
    .list_all()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.name)
    .collect();
  assert_eq!(names, ["c", "b", "a"]);
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_email_returns_match() {
  let s = store().await;
  s.insert(new_email("other", "other@mail.com")).await.unwrap();
  let record = s.insert(new_email("any", "any@mail.com")).await.unwrap();

  let found = s.find_by_email("any@mail.com").await.unwrap();
  assert_eq!(found, Some(record));
}

#[tokio::test]
async fn find_by_email_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_email("any@mail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_email_prefers_oldest_duplicate() {
  let s = store().await;
  let first = s.insert(new_email("first", "dup@mail.com")).await.unwrap();
  s.insert(new_email("second", "dup@mail.com")).await.unwrap();

  let found = s.find_by_email("dup@mail.com").await.unwrap().unwrap();
  assert_eq!(found.id, first.id);
  assert_eq!(s.list_all().await.unwrap().len(), 2);
}

// ─── Save ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_overwrites_fields_in_place() {
  let s = store().await;
  let mut record = s.insert(new_email("any", "any@mail.com")).await.unwrap();
  s.insert(new_email("later", "later@mail.com")).await.unwrap();

  record.name = "updated".into();
  s.save(&record).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  // Position in the collection is kept.
  assert_eq!(all[0], record);
}

#[tokio::test]
async fn save_unknown_id_is_an_error() {
  let s = store().await;
  let ghost = EmailRecord {
    id:    Uuid::new_v4(),
    email: "ghost@mail.com".into(),
    name:  "ghost".into(),
  };

  let err = s.save(&ghost).await.unwrap_err();
  assert!(matches!(err, Error::RecordNotFound(id) if id == ghost.id));
  assert!(s.list_all().await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_id_removes_only_that_record() {
  let s = store().await;
  let a = s.insert(new_email("a", "dup@mail.com")).await.unwrap();
  let b = s.insert(new_email("b", "dup@mail.com")).await.unwrap();

  assert!(s.delete_by_id(a.id).await.unwrap());
  assert_eq!(s.list_all().await.unwrap(), vec![b]);
}

#[tokio::test]
async fn delete_by_id_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete_by_id(Uuid::new_v4()).await.unwrap());
}

// ─── On-disk ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_records() {
  let path = std::env::temp_dir().join(format!("emails-{}.db", Uuid::new_v4()));

  let record = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(new_email("any", "any@mail.com")).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.list_all().await.unwrap(), vec![record]);

  drop(s);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
