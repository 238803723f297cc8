//! Catalogue of supported countries.

use serde::Serialize;

/// Country used whenever a code has no tabulated data.
pub const DEFAULT_COUNTRY_CODE: &str = "USA";

/// A supported country with its WHO region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

const fn country(code: &'static str, name: &'static str, region: &'static str) -> Country {
    Country { code, name, region }
}

/// The 21 countries with baseline and composite data.
pub const SUPPORTED_COUNTRIES: &[Country] = &[
    country("USA", "United States", "Americas"),
    country("GBR", "United Kingdom", "Europe"),
    country("CAN", "Canada", "Americas"),
    country("AUS", "Australia", "Western Pacific"),
    country("DEU", "Germany", "Europe"),
    country("FRA", "France", "Europe"),
    country("ITA", "Italy", "Europe"),
    country("ESP", "Spain", "Europe"),
    country("JPN", "Japan", "Western Pacific"),
    country("CHN", "China", "Western Pacific"),
    country("IND", "India", "South-East Asia"),
    country("BRA", "Brazil", "Americas"),
    country("RUS", "Russia", "Europe"),
    country("MEX", "Mexico", "Americas"),
    country("ZAF", "South Africa", "Africa"),
    country("EGY", "Egypt", "Eastern Mediterranean"),
    country("NGA", "Nigeria", "Africa"),
    country("TUR", "Turkey", "Europe"),
    country("IRN", "Iran", "Eastern Mediterranean"),
    country("THA", "Thailand", "South-East Asia"),
    country("LKA", "Sri Lanka", "South-East Asia"),
];

/// Looks up a supported country by exact code.
pub fn find_country(code: &str) -> Option<&'static Country> {
    SUPPORTED_COUNTRIES.iter().find(|c| c.code == code)
}

pub fn is_supported_country(code: &str) -> bool {
    find_country(code).is_some()
}

/// Display name for a code, falling back to the code itself.
pub fn country_name(code: &str) -> &str {
    find_country(code).map_or(code, |c| c.name)
}
