//! Author and Post records for a blog, persisted with butane.
//!
//! Validated fields are checked when assigned. See [validation] for
//! the rules and [models] for the records themselves.

#![deny(missing_docs)]

pub mod butane_migrations;
pub mod config;
mod error;
pub mod models;
pub mod validation;

use butane::db::{Connection, ConnectionMethods};

pub use error::{Error, Result};
pub use models::{Author, Post};
pub use validation::{ValidationError, Validated};

/// Load a [Connection] using the connection spec under [config::CONFIG_DIR],
/// migrating the schema if needed.
pub fn establish_connection() -> Result<Connection> {
    let spec = config::connection_spec(config::CONFIG_DIR)?;
    config::connect(&spec)
}

/// Create and save an [Author].
pub fn create_author(
    conn: &impl ConnectionMethods,
    name: &str,
    phone_number: Option<&str>,
) -> Result<Author> {
    let mut author = Author::new(conn, name)?;
    if let Some(phone_number) = phone_number {
        author.set_phone_number(phone_number)?;
    }
    author.persist(conn)?;
    Ok(author)
}

/// Create and save a [Post].
pub fn create_post(
    conn: &impl ConnectionMethods,
    title: &str,
    content: &str,
    category: &str,
    summary: &str,
) -> Result<Post> {
    let mut post = Post::new(title, content, category, summary)?;
    post.persist(conn)?;
    Ok(post)
}
