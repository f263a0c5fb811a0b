//! GeoNames import
//!
//! Builds the city table straight from the two GeoNames exports
//! (countryInfo.txt and a cities dump such as cities500.txt): join each city
//! row to its country for the country name and continent, drop `PPLX`
//! section-of-city rows and everything at or below the population cut.

use anyhow::Context;
use cityquiz_core::City;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Both GeoNames exports carry 19 tab-separated fields per row
const GEONAMES_FIELDS: usize = 19;

/// Population cut applied at import; quiz rounds never go below this
const POPULATION_CUT: u64 = 15_000;

/// Country name and continent, keyed by ISO code
struct CountryInfo {
    country: String,
    continent: String,
}

/// Load and join the two exports into city records
pub fn load_geonames(country_info: &Path, cities_file: &Path) -> anyhow::Result<Vec<City>> {
    let countries_raw = std::fs::read_to_string(country_info)
        .with_context(|| format!("failed to read {}", country_info.display()))?;
    let cities_raw = std::fs::read_to_string(cities_file)
        .with_context(|| format!("failed to read {}", cities_file.display()))?;

    let countries = parse_country_info(&countries_raw);
    Ok(parse_cities(&cities_raw, &countries))
}

/// Parse countryInfo.txt: ISO code -> country name and continent.
/// Comment lines start with `#`; malformed rows are skipped with a warning.
fn parse_country_info(raw: &str) -> FxHashMap<String, CountryInfo> {
    let mut countries = FxHashMap::default();

    for (lineno, line) in raw.lines().enumerate() {
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != GEONAMES_FIELDS {
            tracing::warn!(
                "countryInfo line {}: got {} fields (expected {}), skipping",
                lineno + 1,
                fields.len(),
                GEONAMES_FIELDS
            );
            continue;
        }

        countries.insert(
            fields[0].to_string(),
            CountryInfo {
                country: fields[4].to_string(),
                continent: fields[8].to_string(),
            },
        );
    }

    countries
}

/// Parse a cities dump and join against the country table.
/// Rows without a known country, `PPLX` section-of-city rows and rows at or
/// below the population cut are dropped.
fn parse_cities(raw: &str, countries: &FxHashMap<String, CountryInfo>) -> Vec<City> {
    let mut cities = Vec::new();

    for (lineno, line) in raw.lines().enumerate() {
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != GEONAMES_FIELDS {
            tracing::warn!(
                "cities line {}: got {} fields (expected {}), skipping",
                lineno + 1,
                fields.len(),
                GEONAMES_FIELDS
            );
            continue;
        }

        let (name, lat, lon, fcode, country_code, population) = (
            fields[1], fields[4], fields[5], fields[7], fields[8], fields[14],
        );

        if fcode == "PPLX" {
            continue;
        }

        let population: u64 = match population.parse() {
            Ok(p) => p,
            Err(_) => {
                tracing::warn!("cities line {}: bad population {:?}, skipping", lineno + 1, population);
                continue;
            }
        };
        if population <= POPULATION_CUT {
            continue;
        }

        let (lat, lon) = match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                tracing::warn!("cities line {}: bad coordinates, skipping", lineno + 1);
                continue;
            }
        };

        let info = match countries.get(country_code) {
            Some(info) => info,
            None => {
                tracing::warn!(
                    "cities line {}: unknown country code {:?}, skipping",
                    lineno + 1,
                    country_code
                );
                continue;
            }
        };

        cities.push(City {
            name: name.to_string(),
            country_code: country_code.to_string(),
            country: info.country.clone(),
            continent: info.continent.clone(),
            lat,
            lon,
            population,
        });
    }

    cities
}

// ============================================================================
// TESTS
// ============================================================================
