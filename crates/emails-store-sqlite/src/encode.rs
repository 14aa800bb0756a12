//! Conversions between [`EmailRecord`] and the plain-text column values.
//!
//! UUIDs are stored as hyphenated lowercase strings.

use emails_core::EmailRecord;
use uuid::Uuid;

use crate::Result;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

/// Column values exactly as read from a row, before decoding.
pub struct RawEmail {
  pub id:    String,
  pub email: String,
  pub name:  String,
}

impl RawEmail {
  /// Read `id, email, name` from the first three columns of `row`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawEmail {
      id:    row.get(0)?,
      email: row.get(1)?,
      name:  row.get(2)?,
    })
  }

  pub fn into_record(self) -> Result<EmailRecord> {
    Ok(EmailRecord {
      id:    decode_uuid(&self.id)?,
      email: self.email,
      name:  self.name,
    })
  }
}
