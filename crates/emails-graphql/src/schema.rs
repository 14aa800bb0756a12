//! The GraphQL schema: object and input types plus the query and mutation
//! roots.
//!
//! ```graphql
//! type Query {
//!   emails: [Email!]!
//!   email(email: String!): Email
//! }
//!
//! type Mutation {
//!   createEmail(createEmailInput: CreateEmailInput!): Email!
//!   updateEmail(updateEmailInput: UpdateEmailInput!): Email!
//!   removeEmail(email: String!): Email!
//! }
//! ```

use async_graphql::{
  Context, EmptySubscription, ErrorExtensions as _, ID, InputObject, Object, Result,
  Schema,
};
use emails_core::EmailRecord;

use crate::resolver::EmailsResolver;

pub type EmailsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `resolver` available to every field.
pub fn build_schema(resolver: EmailsResolver) -> EmailsSchema {
  Schema::build(QueryRoot, MutationRoot, EmptySubscription)
    .data(resolver)
    .finish()
}

/// The schema in SDL form.
pub fn sdl() -> String {
  Schema::build(QueryRoot, MutationRoot, EmptySubscription)
    .finish()
    .sdl()
}

// ─── Types ────────────────────────────────────────────────────────────────────

/// A stored email record.
pub struct Email(pub EmailRecord);

#[Object]
impl Email {
  /// Store-assigned identifier.
  async fn id(&self) -> ID { ID(self.0.id.to_string()) }

  async fn name(&self) -> &str { &self.0.name }

  async fn email(&self) -> &str { &self.0.email }
}

impl From<EmailRecord> for Email {
  fn from(record: EmailRecord) -> Self { Email(record) }
}

#[derive(InputObject)]
#[graphql(name = "CreateEmailInput")]
pub struct CreateInput {
  pub name:  String,
  pub email: String,
}

impl From<CreateInput> for emails_core::CreateEmailInput {
  fn from(i: CreateInput) -> Self {
    Self {
      name:  i.name,
      email: i.email,
    }
  }
}

/// `email` picks the record to update; the remaining fields overwrite it.
#[derive(InputObject)]
#[graphql(name = "UpdateEmailInput")]
pub struct UpdateInput {
  pub email: String,
  pub name:  Option<String>,
}

impl From<UpdateInput> for emails_core::UpdateEmailInput {
  fn from(i: UpdateInput) -> Self {
    Self {
      email: i.email,
      name:  i.name,
    }
  }
}

// ─── Roots ────────────────────────────────────────────────────────────────────

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
  /// Every record, oldest first.
  async fn emails(&self, ctx: &Context<'_>) -> Result<Vec<Email>> {
    let resolver = ctx.data::<EmailsResolver>()?;
    let records = resolver.find_all().await.map_err(|e| e.extend())?;
    Ok(records.into_iter().map(Email::from).collect())
  }

  /// The record with this address, or null.
  async fn email(&self, ctx: &Context<'_>, email: String) -> Result<Option<Email>> {
    let resolver = ctx.data::<EmailsResolver>()?;
    let record = resolver.find_one(&email).await.map_err(|e| e.extend())?;
    Ok(record.map(Email::from))
  }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
  async fn create_email(
    &self,
    ctx: &Context<'_>,
    create_email_input: CreateInput,
  ) -> Result<Email> {
    let resolver = ctx.data::<EmailsResolver>()?;
    let record = resolver
      .create_email(create_email_input.into())
      .await
      .map_err(|e| e.extend())?;
    Ok(Email(record))
  }

  async fn update_email(
    &self,
    ctx: &Context<'_>,
    update_email_input: UpdateInput,
  ) -> Result<Email> {
    let resolver = ctx.data::<EmailsResolver>()?;
    let record = resolver
      .update_email(update_email_input.into())
      .await
      .map_err(|e| e.extend())?;
    Ok(Email(record))
  }

  /// Delete the record and return it as it was before deletion.
  async fn remove_email(&self, ctx: &Context<'_>, email: String) -> Result<Email> {
    let resolver = ctx.data::<EmailsResolver>()?;
    let record = resolver.remove_email(&email).await.map_err(|e| e.extend())?;
    Ok(Email(record))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sdl_exposes_the_five_fields() {
    let sdl = sdl();
    for needle in [
      "emails: [Email!]!",
      "email(email: String!): Email",
      "createEmail(createEmailInput: CreateEmailInput!): Email!",
      "updateEmail(updateEmailInput: UpdateEmailInput!): Email!",
      "removeEmail(email: String!): Email!",
      "input CreateEmailInput",
      "input UpdateEmailInput",
    ] {
      assert!(sdl.contains(needle), "missing {needle:?} in:\n{sdl}");
    }
  }
}
