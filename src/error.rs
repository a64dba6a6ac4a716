//! Defines [`Error`], the failures returned by decode and dispatch.

use thiserror::Error;

use crate::mode::Mode;

/// Errors surfaced while turning a GeoJSON stream into coordinate pairs.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not valid JSON, or its coordinate nesting does not match the
    /// schema of the selected mode.
    #[error("failed to decode {}", describe_declared(.declared, .expected))]
    Decode {
        /// Geometry type most likely responsible for the failure: the first one
        /// differing from `expected`, else the first feature's, when readable.
        declared: Option<String>,
        /// Geometry type the selected mode decodes.
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A complete document was read, but more data follows it.
    #[error("unexpected data after the GeoJSON document")]
    TrailingData(#[source] serde_json::Error),

    /// The mode token matches none of the known aliases.
    #[error("unknown mode '{0}' (expected one of linestring|l|ls, polygon|p|poly, multipolygon|m|mp)")]
    UnknownMode(String),

    /// Reading the input stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Geometry type declared by the input that failed to decode, if known.
    pub fn declared_type(&self) -> Option<&str> {
        match self {
            Error::Decode { declared, .. } => declared.as_deref(),
            _ => None,
        }
    }

    /// Mode that would accept the declared geometry type of a failed decode.
    /// Never the mode that just failed.
    pub fn suggested_mode(&self) -> Option<Mode> {
        match self {
            Error::Decode { declared: Some(kind), expected, .. } if kind != expected => Mode::for_geometry_type(kind),
            _ => None,
        }
    }
}

fn describe_declared(declared: &Option<String>, expected: &str) -> String {
    match declared.as_deref() {
        None => "input of unknown geometry type".to_string(),
        Some(kind) if kind == expected => format!("{kind} input (coordinates do not match {kind} nesting)"),
        Some(kind) => match Mode::for_geometry_type(kind) {
            Some(mode) => format!("{kind} input (try mode '{}')", mode.to_str()),
            None => format!("{kind} input (unsupported geometry type)"),
        },
    }
}
