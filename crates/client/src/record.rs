use serde::{Deserialize, Serialize};

/// A student record as the service returns it. The id is opaque to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Student {
    /// Records stored without a status display as `Active`.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Active")
    }
}

/// Body for both create and update; the form never carries a status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub course: String,
}
