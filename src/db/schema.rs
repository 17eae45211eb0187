//! Database schema for Skillshelf.
//!
//! A single idempotent setup script; there is no migration ladder because the
//! schema consists of one table created on first connect.

/// Idempotent schema setup script, executed on every connect.
pub const SCHEMA: &str = r#"
-- Content items: one uploaded metadata record, optionally with a file payload.
-- file_name/file_type/file_data are either all present or all absent.
CREATE TABLE IF NOT EXISTS content_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT,
    category    TEXT NOT NULL,
    language    TEXT NOT NULL,
    provider    TEXT NOT NULL,
    role        TEXT NOT NULL,
    file_name   TEXT,
    file_type   TEXT,
    file_data   BLOB,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_content_items_created_at ON content_items(created_at);
"#;
