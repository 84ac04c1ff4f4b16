use serde::{Deserialize, Serialize};

/// A question as accepted by the `/questions` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_id: i64,
    pub domain_name: String,
    pub topic_name: String,
    pub title: String,
    pub stem: String,
    pub choices: Vec<ChoiceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub choice_id: i64,
    pub choice_label: String,
    pub choice_text: String,
}

/// A single answer as accepted by the `/answers` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub user_id: i64,
    pub question_id: i64,
    pub selected_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<i64>,
}
