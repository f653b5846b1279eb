#![allow(dead_code)]

use blog_models::config;
use butane::db::{Connection, ConnectionSpec};

/// A fresh, migrated in-memory SQLite database.
pub fn sqlite_connection() -> Connection {
    config::connect(&ConnectionSpec::new("sqlite", ":memory:")).unwrap()
}

/// Text of exactly `len` characters.
pub fn text(len: usize) -> String {
    "x".repeat(len)
}

pub const TITLE: &str = "Top 10 Reasons To Write Rust";
