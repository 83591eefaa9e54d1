use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One pre-parsed refuel candidate from a bulk import.
///
/// References are by name (plate, driver, station, fuel); entities that do
/// not exist yet are registered during ingestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRefuel {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub plate: String,
    pub driver: String,
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub fuel: String,
    pub liters: f64,
    pub total: f64,
    pub odometer: f64,
    #[serde(default)]
    pub full_tank: bool,
    #[serde(default)]
    pub notes: String,
    /// Payment label as found in the source, if any. Normalized against
    /// the legacy mapping table during ingestion; unknown labels are kept.
    #[serde(default)]
    pub pay_mode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_candidate_deserializes() {
        let json = r#"{
            "date": "2024-03-01",
            "plate": "abc1234",
            "driver": "Motorista 1",
            "liters": 40.0,
            "total": 220.0,
            "odometer": 12000
        }"#;
        let c: CandidateRefuel = serde_json::from_str(json).unwrap();
        assert_eq!(c.time, None);
        assert_eq!(c.station, "");
        assert!(!c.full_tank);
        assert_eq!(c.pay_mode, None);
    }
}
