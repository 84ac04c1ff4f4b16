use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{flag} payload must be a JSON array")]
    Shape { flag: &'static str },
    #[error("Cannot encode payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Request failed: {}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("Non-JSON response: {body}")]
    NonJsonResponse { body: String },
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Anchor not found for: {}", .missing.join(", "))]
    AnchorsMissing { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// `err` followed by each of its causes, so the connect/DNS failure reaches the user.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        let text = e.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        cause = e.source();
    }
    out
}
