//! City record

use serde::{Deserialize, Serialize};

/// A city as served by the dataset collaborator.
///
/// `name` is the identity within a round; no two cities in the same round
/// share a name. Wire names are camelCase to match the dataset rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub country_code: String,
    pub country: String,
    pub continent: String,
    /// Latitude in signed degrees (positive = north)
    pub lat: f64,
    /// Longitude in signed degrees (positive = east)
    pub lon: f64,
    pub population: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "name": "Berlin",
            "countryCode": "DE",
            "country": "Germany",
            "continent": "EU",
            "lat": 52.52,
            "lon": 13.405,
            "population": 3576873
        }"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.country_code, "DE");
        assert_eq!(city.population, 3_576_873);

        let back = serde_json::to_value(&city).unwrap();
        assert!(back.get("countryCode").is_some());
    }
}
