//! Command line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Lunch roulette web server
#[derive(Parser, Debug, Clone)]
#[command(name = "lunch-roulette")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LUNCH_ROULETTE_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:instance/lunch_roulette.db")]
    pub database_url: String,

    /// Directory of frontend assets served for paths outside /api
    #[arg(long, env = "LUNCH_ROULETTE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (any origin when unset)
    #[arg(long, env = "LUNCH_ROULETTE_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

/// File backing a `sqlite:` URL, or None for in-memory databases
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" || path.starts_with("file:") {
        return None;
    }
    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let config = Config::try_parse_from([
            "lunch-roulette",
            "--bind",
            "127.0.0.1:8080",
            "--database-url",
            "sqlite:/tmp/roulette.db",
            "--static-dir",
            "frontend/dist",
            "--cors-origin",
            "http://localhost:8080",
        ])
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, "sqlite:/tmp/roulette.db");
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let result = Config::try_parse_from(["lunch-roulette", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite:instance/lunch_roulette.db"),
            Some(PathBuf::from("instance/lunch_roulette.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:///var/lib/roulette.db?mode=rwc"),
            Some(PathBuf::from("/var/lib/roulette.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("file:memdb_1?mode=memory&cache=shared"), None);
    }
}
