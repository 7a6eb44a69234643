use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub quick_replies: Vec<String>,
    pub timestamp: f64,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicSummary>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: &'static [&'static str],
}

/// Contact form fields, checked for presence only.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub use_case: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub ticket_id: String,
}

/// Strings pass through, `null` is absent, any other JSON value is
/// rendered as its JSON text (`7` becomes `"7"`).
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
