//! Dashboard Errors
//!
//! One snafu enum for every fallible path: the trip API, the map overlay,
//! and the local config file.

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    // ==================== Trip API ====================
    /// Connect, timeout or body read failure
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Non-2xx reply whose body is not an API envelope
    #[snafu(display("Unexpected HTTP status {status} from {url}"))]
    Status { status: u16, url: String },

    /// The API answered with `success: false`
    #[snafu(display("{message}"))]
    Api { message: String },

    /// Envelope or trip record did not decode
    #[snafu(display("Malformed API payload: {source}"))]
    Json { source: serde_json::Error },

    // ==================== Map ====================
    #[snafu(display("Map error: {message}"))]
    Map { message: String },

    // ==================== Config ====================
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Config or log directory could not be read or created
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("Config parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    #[snafu(display("Config serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
