//! Field-level validation for mutation inputs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Longest address accepted, per the SMTP path limit.
const MAX_EMAIL_LEN: usize = 254;

// local-part@label(.label)*.tld
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
  )
  .expect("valid email regex")
});

/// Returns `true` when `value` has the `local@domain.tld` shape.
pub fn is_email(value: &str) -> bool {
  value.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(value)
}

/// Check the `email` field of an input, producing [`Error::Validation`] on
/// failure.
pub fn validate_email(value: &str) -> Result<()> {
  if is_email(value) {
    Ok(())
  } else {
    Err(Error::Validation {
      field:   "email",
      message: "email must be an email".to_string(),
    })
  }
}
