//! The resolver: validates mutation inputs, then delegates to an
//! [`EmailService`] and hands its result back untouched.

use std::sync::Arc;

use emails_core::{CreateEmailInput, EmailRecord, EmailService, UpdateEmailInput};

use crate::error::ApiError;

/// Holds the injected service. Cloning shares it.
#[derive(Clone)]
pub struct EmailsResolver {
  service: Arc<dyn EmailService>,
}

impl EmailsResolver {
  pub fn new(service: Arc<dyn EmailService>) -> Self { Self { service } }

  pub async fn find_all(&self) -> Result<Vec<EmailRecord>, ApiError> {
    Ok(self.service.find_all().await?)
  }

  pub async fn find_one(&self, email: &str) -> Result<Option<EmailRecord>, ApiError> {
    Ok(self.service.find_one(email).await?)
  }

  pub async fn create_email(&self, input: CreateEmailInput) -> Result<EmailRecord, ApiError> {
    input.validate()?;
    Ok(self.service.create(input).await?)
  }

  pub async fn update_email(&self, input: UpdateEmailInput) -> Result<EmailRecord, ApiError> {
    input.validate()?;
    Ok(self.service.update(input).await?)
  }

  pub async fn remove_email(&self, email: &str) -> Result<EmailRecord, ApiError> {
    Ok(self.service.remove(email).await?)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;
  use emails_core::Result;
  use uuid::Uuid;

  use super::*;

  #[derive(Debug, Clone, PartialEq)]
  enum Call {
    FindAll,
    FindOne(String),
    Create(CreateEmailInput),
    Update(UpdateEmailInput),
    Remove(String),
  }

  /// Records every call and answers with a canned record.
  struct StubService {
    calls:  Mutex<Vec<Call>>,
    record: EmailRecord,
  }

  impl StubService {
    fn new() -> Arc<Self> {
      Arc::new(Self {
        calls:  Mutex::new(Vec::new()),
        record: EmailRecord {
          id:    Uuid::new_v4(),
          email: "any@mail.com".into(),
          name:  "any".into(),
        },
      })
    }

    fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

    fn push(&self, call: Call) { self.calls.lock().unwrap().push(call); }
  }

  #[async_trait]
  impl EmailService for StubService {
    async fn find_all(&self) -> Result<Vec<EmailRecord>> {
      self.push(Call::FindAll);
      Ok(vec![self.record.clone()])
    }

    async fn find_one(&self, email: &str) -> Result<Option<EmailRecord>> {
      self.push(Call::FindOne(email.to_owned()));
      Ok(Some(self.record.clone()))
    }

    async fn create(&self, input: CreateEmailInput) -> Result<EmailRecord> {
      self.push(Call::Create(input));
      Ok(self.record.clone())
    }

    async fn update(&self, input: UpdateEmailInput) -> Result<EmailRecord> {
      self.push(Call::Update(input));
      Ok(self.record.clone())
    }

    async fn remove(&self, email: &str) -> Result<EmailRecord> {
      self.push(Call::Remove(email.to_owned()));
      Ok(self.record.clone())
    }
  }

  fn setup() -> (Arc<StubService>, EmailsResolver) {
    let stub = StubService::new();
    let resolver = EmailsResolver::new(stub.clone());
    (stub, resolver)
  }

  fn mock_data() -> CreateEmailInput {
    CreateEmailInput {
      name:  "any".into(),
      email: "any@mail.com".into(),
    }
  }

  #[tokio::test]
  async fn find_all_delegates_and_returns_service_result() {
    let (stub, resolver) = setup();
    let out = resolver.find_all().await.unwrap();
    assert_eq!(stub.calls(), vec![Call::FindAll]);
    assert_eq!(out, vec![stub.record.clone()]);
  }

  #[tokio::test]
  async fn find_one_passes_email_through() {
    let (stub, resolver) = setup();
    let out = resolver.find_one("any@mail.com").await.unwrap();
    assert_eq!(stub.calls(), vec![Call::FindOne("any@mail.com".into())]);
    assert_eq!(out, Some(stub.record.clone()));
  }

  #[tokio::test]
  async fn create_email_passes_input_through() {
    let (stub, resolver) = setup();
    let out = resolver.create_email(mock_data()).await.unwrap();
    assert_eq!(stub.calls(), vec![Call::Create(mock_data())]);
    assert_eq!(out, stub.record);
  }

  #[tokio::test]
  async fn create_email_with_invalid_email_never_reaches_service() {
    let (stub, resolver) = setup();
    let err = resolver
      .create_email(CreateEmailInput {
        name:  "any".into(),
        email: "INVALID".into(),
      })
      .await
      .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(stub.calls().is_empty());
  }

  #[tokio::test]
  async fn update_email_passes_input_through() {
    let (stub, resolver) = setup();
    let input = UpdateEmailInput {
      email: "any@mail.com".into(),
      name:  Some("updated".into()),
    };
    let out = resolver.update_email(input.clone()).await.unwrap();
    assert_eq!(stub.calls(), vec![Call::Update(input)]);
    assert_eq!(out, stub.record);
  }

  #[tokio::test]
  async fn update_email_with_invalid_email_never_reaches_service() {
    let (stub, resolver) = setup();
    let err = resolver
      .update_email(UpdateEmailInput {
        email: "INVALID".into(),
        name:  None,
      })
      .await
      .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(stub.calls().is_empty());
  }

  #[tokio::test]
  async fn remove_email_passes_email_through() {
    let (stub, resolver) = setup();
    let out = resolver.remove_email("any@email.com").await.unwrap();
    assert_eq!(stub.calls(), vec![Call::Remove("any@email.com".into())]);
    assert_eq!(out, stub.record);
  }
}
