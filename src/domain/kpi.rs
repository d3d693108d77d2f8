// KPI domain model
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum KpiCategory {
    #[serde(rename = "Cost Management")]
    CostManagement,
    #[serde(rename = "Energy and Environmental Impact")]
    EnergyAndEnvironmentalImpact,
    #[serde(rename = "Overall Performance")]
    OverallPerformance,
}

/// Read-only KPI reference data. A null formula marks a basic KPI that is
/// produced directly by the machines rather than computed by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiDefinition {
    pub unit: String,
    #[serde(rename = "nameID")]
    pub name_id: String,
    pub description: String,
    pub formula: Option<String>,
    pub category: KpiCategory,
}

/// One aggregated sample over a sub-range of the requested window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KpiValuePoint {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    pub value: f64,
}

/// Wire envelope of the values endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiValueSeries {
    #[serde(default)]
    pub values: Vec<KpiValuePoint>,
    pub code: i32,
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
    pub unit: String,
}

/// Machines supporting a KPI, as two index-aligned parallel sequences.
/// Callers zip `names` and `ids` by position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineList {
    pub names: Vec<String>,
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_definition_deserializes_with_category() {
        let json = r#"{
            "unit": "kWh",
            "nameID": "energy_consumption",
            "description": "Total energy drawn by the machine",
            "formula": null,
            "category": "Energy and Environmental Impact"
        }"#;

        let kpi: KpiDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(kpi.name_id, "energy_consumption");
        assert_eq!(kpi.formula, None);
        assert_eq!(kpi.category, KpiCategory::EnergyAndEnvironmentalImpact);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "unit": "h",
            "nameID": "uptime",
            "description": "",
            "formula": null,
            "category": "Maintenance"
        }"#;

        assert!(serde_json::from_str::<KpiDefinition>(json).is_err());
    }

    #[test]
    fn test_value_series_deserializes() {
        let json = r#"{
            "values": [
                {"startDate": "2024-10-14", "endDate": "2024-10-19", "value": 12.5}
            ],
            "code": 200,
            "errorMessage": null,
            "unit": "kWh"
        }"#;

        let series: KpiValueSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.values.len(), 1);
        assert_eq!(series.values[0].value, 12.5);
        assert_eq!(
            series.values[0].start_date,
            NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
        );
        assert_eq!(series.error_message, None);
    }

    #[test]
    fn test_machine_list_keeps_parallel_sequences() {
        let json = r#"{"names": ["Laser cutter", "Assembly line"], "ids": [3, 7]}"#;
        let machines: MachineList = serde_json::from_str(json).unwrap();
        assert_eq!(machines.names.len(), machines.ids.len());
        assert_eq!(machines.ids[1], 7);
    }
}
