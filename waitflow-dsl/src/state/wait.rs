use serde::{Deserialize, Serialize};

use super::base::BaseState;

/// A state that suspends the workflow instance before handing control to
/// `Next`. Exactly one of the four wait fields must be set; see
/// [`WaitState::validate`](crate::validation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaitState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(default)]
    pub seconds: Option<i64>,

    #[serde(default)]
    pub seconds_path: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub timestamp_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_state_seconds_serde() {
        let state: WaitState =
            serde_json::from_str(r#"{"Seconds": 5, "Next": "Done"}"#).unwrap();
        assert_eq!(state.seconds, Some(5));
        assert_eq!(state.base.next.as_deref(), Some("Done"));
        assert!(state.timestamp.is_none());

        let ser = serde_json::to_string(&state).unwrap();
        let de: WaitState = serde_json::from_str(&ser).unwrap();
        assert_eq!(de.seconds, Some(5));
        assert_eq!(de.base.next.as_deref(), Some("Done"));
    }

    #[test]
    fn test_wait_state_path_fields_serde() {
        let state: WaitState = serde_json::from_str(
            r#"{"TimestampPath": "$.until", "End": true, "Comment": "pause"}"#,
        )
        .unwrap();
        assert_eq!(state.timestamp_path.as_deref(), Some("$.until"));
        assert_eq!(state.base.end, Some(true));
        assert_eq!(state.base.comment.as_deref(), Some("pause"));

        let state: WaitState =
            serde_json::from_str(r#"{"SecondsPath": "$.delay", "Next": "Done"}"#).unwrap();
        assert_eq!(state.seconds_path.as_deref(), Some("$.delay"));
    }

    #[test]
    fn test_wait_state_fields_are_pascal_case() {
        let state = WaitState {
            base: BaseState {
                next: Some("Done".to_string()),
                ..Default::default()
            },
            seconds: None,
            seconds_path: None,
            timestamp: Some("2023-01-01T00:00:00+00:00".to_string()),
            timestamp_path: None,
        };
        let ser = serde_json::to_value(&state).unwrap();
        assert_eq!(ser["Timestamp"], "2023-01-01T00:00:00+00:00");
        assert_eq!(ser["Next"], "Done");
    }
}
