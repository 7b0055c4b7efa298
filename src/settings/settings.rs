use anyhow::{Result, anyhow};
use config::{Config, File, FileFormat, FileSourceFile};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub avatar: Avatar,
    pub http: Http,
    pub log: Log,
    pub store: Store,
}

#[derive(Debug, Deserialize)]
pub struct Avatar {
    pub backend: String, // "fake" or "real"
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub backend: String, // "fake" or "real"
    pub database: String,
    pub collection: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings on top of built-in defaults.
///
/// An explicit `path` must exist; the default settings file is optional.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    match path {
        Some(path) => load(File::with_name(path)),
        None => load(File::with_name(SETTINGS_PATH).required(false)),
    }
}

fn load(source: File<FileSourceFile, FileFormat>) -> Result<Settings> {
    let settings: Settings = Config::builder()
        .set_default("avatar.backend", "real")?
        .set_default("http.address", "0.0.0.0:7000")?
        .set_default("log.filter", "info")?
        .set_default("store.backend", "real")?
        .set_default("store.database", "test")?
        .set_default("store.collection", "users")?
        .add_source(source)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let settings = load(File::with_name("settings/absent.toml").required(false)).unwrap();

        assert_eq!(settings.avatar.backend, "real");
        assert_eq!(settings.log.filter, "info");
        assert_eq!(settings.http.address, "0.0.0.0:7000");
        assert_eq!(settings.store.database, "test");
        assert_eq!(settings.store.collection, "users");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/settings/dev.toml");

        let settings = parse_settings(Some(path)).unwrap();

        assert_eq!(settings.log.filter, "debug,hyper=info,mongodb=info");
        assert_eq!(settings.http.address, "127.0.0.1:7000");
        assert_eq!(settings.store.backend, "real");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(parse_settings(Some("settings/does-not-exist.toml")).is_err());
    }
}
