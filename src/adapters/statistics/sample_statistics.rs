//! Fixed sample statistics served when live data is unavailable.

use async_trait::async_trait;

use crate::ports::{
    CountryStatistic, RegionalStatistic, RegionalStatistics, StatisticsError, StatisticsService,
};

const SAMPLE_YEAR: &str = "2020";

/// (country, years)
const SAMPLE_GLOBAL: &[(&str, f64)] = &[
    ("Japan", 84.7),
    ("Switzerland", 83.8),
    ("Australia", 83.2),
    ("Spain", 83.1),
    ("Italy", 82.9),
    ("France", 82.7),
    ("Canada", 82.4),
    ("United Kingdom", 81.2),
    ("United States", 78.9),
    ("China", 76.9),
];

/// (region, average, country count)
const SAMPLE_REGIONAL: &[(&str, f64, u32)] = &[
    ("Europe", 81.2, 44),
    ("Americas", 76.8, 35),
    ("Western Pacific", 77.8, 37),
    ("South-East Asia", 71.4, 11),
    ("Eastern Mediterranean", 72.8, 21),
    ("Africa", 64.1, 47),
];

/// Deterministic, offline statistics source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStatistics;

impl SampleStatistics {
    pub fn new() -> Self {
        Self
    }

    pub fn global(&self) -> Vec<CountryStatistic> {
        SAMPLE_GLOBAL
            .iter()
            .map(|&(country, value)| CountryStatistic::new(country, value, SAMPLE_YEAR))
            .collect()
    }

    pub fn regional(&self) -> RegionalStatistics {
        SAMPLE_REGIONAL
            .iter()
            .map(|&(region, average, count)| {
                (region.to_string(), RegionalStatistic::new(average, count))
            })
            .collect()
    }
}

#[async_trait]
impl StatisticsService for SampleStatistics {
    async fn fetch_global_stats(&self) -> Result<Vec<CountryStatistic>, StatisticsError> {
        Ok(self.global())
    }

    async fn fetch_regional_stats(&self) -> Result<RegionalStatistics, StatisticsError> {
        Ok(self.regional())
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}
