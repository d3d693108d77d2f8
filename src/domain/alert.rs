// Alert domain model
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub kpi: String,
    #[serde(rename = "machineID")]
    pub machine_id: i64,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "alertDescription")]
    pub alert_description: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_deserializes() {
        let json = r#"{
            "id": 42,
            "kpi": "energy_consumption",
            "machineID": 3,
            "timestamp": "2024-09-30T08:15:00Z",
            "alertDescription": "Consumption above threshold",
            "severity": "HIGH"
        }"#;

        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.machine_id, 3);
        assert_eq!(alert.severity, Severity::High);
    }

    #[test]
    fn test_severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
