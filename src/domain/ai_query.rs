// AI query domain model - tagged response union keyed by "type"
use serde::Deserialize;

/// Response to a natural-language query. Exactly one payload field is
/// meaningful per variant; the backend sends the others as null.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AiResponse {
    Textual { text: String },
    Dashboard { dashboard: DashboardPayload },
    Report { report: serde_json::Value },
}

/// Chart description produced by the AI for dashboard-type answers.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardPayload {
    pub x_axis_name: String,
    pub y_axis_name: String,
    pub values: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_response_reaches_dashboard_branch() {
        let json = r#"{
            "type": "dashboard",
            "text": null,
            "dashboard": {"x_axis_name": "Month", "y_axis_name": "kWh", "values": [1, 2, 3]},
            "report": null
        }"#;

        let response: AiResponse = serde_json::from_str(json).unwrap();
        match response {
            AiResponse::Dashboard { dashboard } => {
                assert_eq!(dashboard.x_axis_name, "Month");
                assert_eq!(dashboard.y_axis_name, "kWh");
                assert_eq!(dashboard.values.len(), 3);
            }
            other => panic!("expected dashboard response, got {:?}", other),
        }
    }

    #[test]
    fn test_textual_response_reaches_textual_branch() {
        let json = r#"{
            "type": "textual",
            "text": "Energy usage is trending down.",
            "dashboard": null,
            "report": null
        }"#;

        let response: AiResponse = serde_json::from_str(json).unwrap();
        match response {
            AiResponse::Textual { text } => {
                assert_eq!(text, "Energy usage is trending down.")
            }
            other => panic!("expected textual response, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"type": "table", "text": null, "dashboard": null, "report": null}"#;
        assert!(serde_json::from_str::<AiResponse>(json).is_err());
    }
}
