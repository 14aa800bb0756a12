//! [`SqliteStore`]: the SQLite implementation of [`EmailStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;
use uuid::Uuid;

use emails_core::{EmailRecord, NewEmail, store::EmailStore};

use crate::{
  Error, Result,
  encode::{RawEmail, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An email collection backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests and throwaway servers.
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
}

// ─── EmailStore impl ─────────────────────────────────────────────────────────

impl EmailStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<EmailRecord>> {
    let raws: Vec<RawEmail> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, email, name FROM emails ORDER BY seq")?;
        let rows = stmt
          .query_map([], RawEmail::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmail::into_record).collect()
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<EmailRecord>> {
    let email = email.to_owned();

    let raw: Option<RawEmail> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, email, name FROM emails WHERE email = ?1 ORDER BY seq LIMIT 1",
            rusqlite::params![email],
            RawEmail::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawEmail::into_record).transpose()
  }

  async fn insert(&self, input: NewEmail) -> Result<EmailRecord> {
    let record = EmailRecord {
      id:    Uuid::new_v4(),
      email: input.email,
      name:  input.name,
    };

    let id_str = encode_uuid(record.id);
    let email  = record.email.clone();
    let name   = record.name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO emails (id, email, name) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, email, name],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn save(&self, record: &EmailRecord) -> Result<()> {
    let id_str = encode_uuid(record.id);
    let email  = record.email.clone();
    let name   = record.name.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE emails SET email = ?2, name = ?3 WHERE id = ?1",
          rusqlite::params![id_str, email, name],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::RecordNotFound(record.id));
    }
    Ok(())
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM emails WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(changed > 0)
  }
}
