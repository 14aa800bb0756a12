//! The `EmailStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `emails-store-sqlite`).
//! The service layer depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use uuid::Uuid;

use crate::record::{EmailRecord, NewEmail};

/// Abstraction over a document collection of [`EmailRecord`]s.
///
/// Backends keep insertion order: [`list_all`](EmailStore::list_all) returns
/// records oldest-first and [`find_by_email`](EmailStore::find_by_email)
/// returns the oldest match when several records share an address.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait EmailStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every stored record, in insertion order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<EmailRecord>, Self::Error>> + Send + '_;

  /// The first record whose `email` equals `email`, if any.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<EmailRecord>, Self::Error>> + Send + 'a;

  /// Persist a new record. The identifier is assigned by the store.
  fn insert(
    &self,
    input: NewEmail,
  ) -> impl Future<Output = Result<EmailRecord, Self::Error>> + Send + '_;

  /// Overwrite the stored document carrying `record.id`.
  ///
  /// Returns an error if no such document exists.
  fn save<'a>(
    &'a self,
    record: &'a EmailRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove the document with the given identifier. Returns `false` if
  /// nothing was removed.
  fn delete_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
