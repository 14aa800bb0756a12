//! The service layer: business-key operations over an [`EmailStore`].
//!
//! [`EmailService`] is object-safe so the GraphQL layer can hold it as
//! `Arc<dyn EmailService>` and tests can swap in a stub.

use async_trait::async_trait;
use tracing::debug;

use crate::{
  Error, Result,
  record::{CreateEmailInput, EmailRecord, NewEmail, UpdateEmailInput},
  store::EmailStore,
};

/// The five operations exposed over GraphQL.
///
/// Inputs are assumed to be validated by the caller.
#[async_trait]
pub trait EmailService: Send + Sync {
  /// All records in insertion order.
  async fn find_all(&self) -> Result<Vec<EmailRecord>>;

  /// The record addressed by `email`, or `None`.
  async fn find_one(&self, email: &str) -> Result<Option<EmailRecord>>;

  async fn create(&self, input: CreateEmailInput) -> Result<EmailRecord>;

  /// Locate by `input.email`, overwrite the provided fields, persist.
  async fn update(&self, input: UpdateEmailInput) -> Result<EmailRecord>;

  /// Locate by `email`, delete, and return the record as it was before
  /// deletion.
  async fn remove(&self, email: &str) -> Result<EmailRecord>;
}

/// [`EmailService`] backed by any [`EmailStore`].
pub struct StoreService<S> {
  store: S,
}

impl<S: EmailStore> StoreService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  async fn locate(&self, email: &str) -> Result<EmailRecord> {
    self
      .store
      .find_by_email(email)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound(email.to_owned()))
  }
}

#[async_trait]
impl<S: EmailStore> EmailService for StoreService<S> {
  async fn find_all(&self) -> Result<Vec<EmailRecord>> {
    let records = self.store.list_all().await.map_err(Error::store)?;
    debug!(count = records.len(), "listed emails");
    Ok(records)
  }

  async fn find_one(&self, email: &str) -> Result<Option<EmailRecord>> {
    let record = self.store.find_by_email(email).await.map_err(Error::store)?;
    debug!(email, found = record.is_some(), "looked up email");
    Ok(record)
  }

  async fn create(&self, input: CreateEmailInput) -> Result<EmailRecord> {
    let record = self
      .store
      .insert(NewEmail::from(input))
      .await
      .map_err(Error::store)?;
    debug!(id = %record.id, email = %record.email, "created email");
    Ok(record)
  }

  async fn update(&self, input: UpdateEmailInput) -> Result<EmailRecord> {
    let mut record = self.locate(&input.email).await?;
    input.apply(&mut record);
    self.store.save(&record).await.map_err(Error::store)?;
    debug!(id = %record.id, email = %record.email, "updated email");
    Ok(record)
  }

  async fn remove(&self, email: &str) -> Result<EmailRecord> {
    let record = self.locate(email).await?;
    if !self.store.delete_by_id(record.id).await.map_err(Error::store)? {
      // Removed by someone else between the lookup and the delete.
      return Err(Error::NotFound(email.to_owned()));
    }
    debug!(id = %record.id, email, "removed email");
    Ok(record)
  }
}
