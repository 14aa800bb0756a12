//! SQL schema for the emails collection.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `seq` only records insertion order. Records are addressed by `id`
/// (internally) and `email` (by clients); `email` is deliberately not
/// `UNIQUE`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS emails (
    seq    INTEGER PRIMARY KEY AUTOINCREMENT,
    id     TEXT NOT NULL UNIQUE,   -- hyphenated UUID; store-assigned
    email  TEXT NOT NULL,
    name   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS emails_email_idx ON emails(email);

PRAGMA user_version = 1;
";
