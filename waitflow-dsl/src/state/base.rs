use serde::{Deserialize, Serialize};

/// Fields shared by every state definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseState {
    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub end: Option<bool>,
}
