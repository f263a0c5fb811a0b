//! Reveal records for end-of-round display

use crate::city::City;
use serde::Serialize;

/// Ground-truth attributes of one city, formatted for display
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub lat: f64,
    pub lon: f64,
    /// Population with thousands grouping, e.g. "3.576.873"
    pub population: String,
}

/// Group digits in threes with dot separators (de-DE convention,
/// matching the dataset's origin)
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Build one display record per city, in round order.
///
/// Pure transformation: calling it twice yields identical records.
pub fn display_records(cities: &[City]) -> Vec<DisplayRecord> {
    cities
        .iter()
        .map(|city| DisplayRecord {
            name: city.name.clone(),
            country: city.country.clone(),
            continent: city.continent.clone(),
            lat: city.lat,
            lon: city.lon,
            population: format_population(city.population),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1.000");
        assert_eq!(format_population(15000), "15.000");
        assert_eq!(format_population(3576873), "3.576.873");
    }

    #[test]
    fn test_display_records_idempotent() {
        let cities = vec![City {
            name: "Berlin".to_string(),
            country_code: "DE".to_string(),
            country: "Germany".to_string(),
            continent: "EU".to_string(),
            lat: 52.52,
            lon: 13.405,
            population: 3_576_873,
        }];

        let first = display_records(&cities);
        let second = display_records(&cities);
        assert_eq!(first, second);
        assert_eq!(first[0].population, "3.576.873");
        assert_eq!(first[0].country, "Germany");
    }
}
