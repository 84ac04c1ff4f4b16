use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::payload::{self, Route};

pub const DEFAULT_BASE: &str = "http://localhost:8080/index.php?r=";

/// Load one payload file and post it. The file is fully checked before the
/// request goes out.
pub fn send_file(client: &ApiClient, path: &Path, route: Route) -> Result<Value> {
    let items = payload::load_payload(path, route)?;
    client.post(route, &items)
}

/// Post questions then answers, printing each decoded reply to `out`.
/// Stops at the first failure; an earlier successful post is not undone.
pub fn send_payloads<W: Write>(
    base: &str,
    questions: Option<&Path>,
    answers: Option<&Path>,
    out: &mut W,
) -> Result<Vec<Value>> {
    let client = ApiClient::new(base)?;
    info!("Sending payloads to {}", client.base());

    let mut replies = Vec::new();
    for (route, path) in [(Route::Questions, questions), (Route::Answers, answers)] {
        let Some(path) = path else { continue };
        let reply = send_file(&client, path, route)?;
        writeln!(out, "{} response: {}", route.label(), reply).map_err(|e| Error::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;
        replies.push(reply);
    }

    Ok(replies)
}
