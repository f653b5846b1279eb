//! Database connection configuration.
//!
//! The connection is described by a butane [ConnectionSpec], normally
//! saved as `.butane/connection.json`. Setting both [BACKEND_ENV] and
//! [CONNSTR_ENV] overrides the file.

use std::path::Path;

use butane::db::{Connection, ConnectionSpec};
use butane::migrations::Migrations;

use crate::{butane_migrations, Result};

/// Directory holding `connection.json`.
pub const CONFIG_DIR: &str = ".butane";
/// Environment variable naming the backend, e.g. `sqlite` or `pg`.
pub const BACKEND_ENV: &str = "BLOG_DB_BACKEND";
/// Environment variable holding the backend connection string.
pub const CONNSTR_ENV: &str = "BLOG_DB_CONNSTR";

/// Resolve the connection spec, preferring the environment over the
/// file at `path` (a directory or the file itself).
pub fn connection_spec(path: impl AsRef<Path>) -> Result<ConnectionSpec> {
    if let (Ok(backend), Ok(connstr)) = (std::env::var(BACKEND_ENV), std::env::var(CONNSTR_ENV)) {
        log::debug!("using {backend} connection from environment");
        return Ok(ConnectionSpec::new(backend, connstr));
    }
    let spec = ConnectionSpec::load(path.as_ref())?;
    log::debug!(
        "using {} connection from {}",
        spec.backend_name,
        path.as_ref().display()
    );
    Ok(spec)
}

/// Connect and bring the schema up to date.
pub fn connect(spec: &ConnectionSpec) -> Result<Connection> {
    let mut conn = butane::db::connect(spec)?;
    let migrations = butane_migrations::get_migrations()?;
    let pending = migrations.unapplied_migrations(&conn)?;
    if !pending.is_empty() {
        log::info!("applying {} migration(s)", pending.len());
    }
    migrations.migrate(&mut conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        ConnectionSpec::new("sqlite", "blog.db")
            .save(dir.path())
            .unwrap();
        temp_env::with_vars_unset([BACKEND_ENV, CONNSTR_ENV], || {
            let spec = connection_spec(dir.path()).unwrap();
            assert_eq!(spec, ConnectionSpec::new("sqlite", "blog.db"));
        });
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        ConnectionSpec::new("sqlite", "blog.db")
            .save(dir.path())
            .unwrap();
        temp_env::with_vars(
            [
                (BACKEND_ENV, Some("sqlite")),
                (CONNSTR_ENV, Some(":memory:")),
            ],
            || {
                let spec = connection_spec(dir.path()).unwrap();
                assert_eq!(spec.conn_str, ":memory:");
            },
        );
    }

    #[test]
    fn partial_environment_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        ConnectionSpec::new("sqlite", "blog.db")
            .save(dir.path())
            .unwrap();
        temp_env::with_vars(
            [(BACKEND_ENV, Some("pg")), (CONNSTR_ENV, None::<&str>)],
            || {
                let spec = connection_spec(dir.path()).unwrap();
                assert_eq!(spec.backend_name, "sqlite");
            },
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_vars_unset([BACKEND_ENV, CONNSTR_ENV], || {
            assert!(connection_spec(dir.path()).is_err());
        });
    }
}
