use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{AnswerRecord, QuestionRecord};

/// API route a payload is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Questions,
    Answers,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Questions => "/questions",
            Route::Answers => "/answers",
        }
    }

    /// CLI flag that supplies this route's payload.
    pub fn flag(self) -> &'static str {
        match self {
            Route::Questions => "--questions",
            Route::Answers => "--answers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Questions => "questions",
            Route::Answers => "answers",
        }
    }

    /// The base is a prefix, not a URL to resolve against: it usually ends in `?r=`.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }
}

/// Read `path` and check that its top-level JSON value is an array.
pub fn load_payload(path: &Path, route: Route) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Array(items) => {
            debug!("Loaded {} {} records from {}", items.len(), route.label(), path.display());
            lint_records(&items, route);
            Ok(items)
        }
        _ => Err(Error::Shape { flag: route.flag() }),
    }
}

/// Log records that don't look like what the API expects. Never fails:
/// field checks belong to the server.
pub fn lint_records(items: &[Value], route: Route) -> usize {
    match route {
        Route::Questions => lint_as::<QuestionRecord>(items, route),
        Route::Answers => lint_as::<AnswerRecord>(items, route),
    }
}

fn lint_as<T: DeserializeOwned>(items: &[Value], route: Route) -> usize {
    let mut odd = 0;
    for (idx, item) in items.iter().enumerate() {
        if let Err(e) = serde_json::from_value::<T>(item.clone()) {
            warn!("{} record #{} looks malformed: {}", route.label(), idx, e);
            odd += 1;
        }
    }
    odd
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn route_url_is_plain_concatenation() {
        assert_eq!(
            Route::Answers.url("http://localhost:8080/index.php?r="),
            "http://localhost:8080/index.php?r=/answers"
        );
        assert_eq!(Route::Questions.url("http://api"), "http://api/questions");
    }

    #[test]
    fn lint_counts_malformed() {
        let items = vec![
            json!({"user_id": 1, "question_id": 42, "selected_label": "B", "elapsed_ms": 1500}),
            json!({"user_id": "x"}),
        ];
        assert_eq!(lint_records(&items, Route::Answers), 1);
        assert_eq!(lint_records(&items[..1], Route::Answers), 0);
    }
}
