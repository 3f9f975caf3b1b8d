use serde::{Deserialize, Serialize};

/// One weather observation as a station reports it.
///
/// Field order is load-bearing: sent and acknowledged payloads are
/// compared byte-for-byte, so serialization must always put `id`
/// before `temperature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationReading {
    pub id: String,
    pub temperature: String,
}

impl StationReading {
    /// Canonical wire form of this reading.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("station reading serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_field_order() {
        let reading = StationReading {
            id: "station_0".to_string(),
            temperature: "20".to_string(),
        };
        assert_eq!(
            reading.canonical_json(),
            r#"{"id":"station_0","temperature":"20"}"#
        );
    }

    #[test]
    fn test_round_trips_through_serde() {
        let reading = StationReading {
            id: "station_7".to_string(),
            temperature: "27".to_string(),
        };
        let parsed: StationReading =
            serde_json::from_str(&reading.canonical_json()).unwrap();
        assert_eq!(parsed, reading);
    }
}
