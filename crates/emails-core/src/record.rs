//! The email record and the inputs that create or modify it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, validate::validate_email};

/// A stored email record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// Clients address records by `email`, which is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
  pub id:    Uuid,
  pub email: String,
  pub name:  String,
}

/// A record as handed to [`EmailStore::insert`](crate::EmailStore::insert),
/// before an identifier exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmail {
  pub email: String,
  pub name:  String,
}

/// Input accepted by the create operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmailInput {
  pub name:  String,
  pub email: String,
}

impl CreateEmailInput {
  pub fn validate(&self) -> Result<()> { validate_email(&self.email) }
}

impl From<CreateEmailInput> for NewEmail {
  fn from(input: CreateEmailInput) -> Self {
    NewEmail {
      email: input.email,
      name:  input.name,
    }
  }
}

/// Input accepted by the update operation.
///
/// `email` selects the target record and is never rewritten. Every other
/// field is optional and only overwrites the stored value when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmailInput {
  pub email: String,
  #[serde(default)]
  pub name:  Option<String>,
}

impl UpdateEmailInput {
  pub fn validate(&self) -> Result<()> { validate_email(&self.email) }

  /// Overwrite the fields of `record` that this input provides.
  pub fn apply(self, record: &mut EmailRecord) {
    if let Some(name) = self.name {
      record.name = name;
    }
  }
}
