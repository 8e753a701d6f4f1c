// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regional pricing explorer.
//!
//! Pure search, filter, sort, and aggregation over the regional
//! pricing table. Sorting is stable with a region-name tie-break so
//! equal keys never thrash. Aggregate stats are computed over the
//! unfiltered set regardless of the active search or filter.

use std::cmp::Ordering;

use crate::records::RegionalPricing;

/// Sort key for the explorer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Numeric sort on the price multiplier.
    #[default]
    Multiplier,
    /// Lexical sort on the region name.
    RegionName,
    /// Lexical sort on the country.
    Country,
    /// Lexical sort on the density's wire value.
    Density,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Ascending,
    /// Descending.
    Descending,
}

/// Aggregate statistics over the price multipliers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiplierStats {
    /// Number of rows.
    pub count: usize,
    /// Smallest multiplier, 0.0 when empty.
    pub min: f64,
    /// Largest multiplier, 0.0 when empty.
    pub max: f64,
    /// Mean multiplier, 0.0 when empty.
    pub mean: f64,
}

/// Number of histogram buckets.
pub const HISTOGRAM_BUCKETS: usize = 4;

/// Bucket boundaries: [1.0, 1.2), [1.2, 1.5), [1.5, 2.0), [2.0, inf).
const BUCKET_UPPER_BOUNDS: [f64; HISTOGRAM_BUCKETS - 1] = [1.2, 1.5, 2.0];

/// Case-insensitive substring search over region name, country, and
/// state/province. An empty term matches everything.
#[must_use]
pub fn search_regions<'a>(rows: &'a [RegionalPricing], term: &str) -> Vec<&'a RegionalPricing> {
    let needle: String = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            row.region_name.to_lowercase().contains(&needle)
                || row.country.to_lowercase().contains(&needle)
                || row
                    .state_province
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact-match filter by country.
#[must_use]
pub fn filter_by_country<'a>(
    rows: &'a [RegionalPricing],
    country: &str,
) -> Vec<&'a RegionalPricing> {
    rows.iter().filter(|row| row.country == country).collect()
}

fn compare_rows(a: &RegionalPricing, b: &RegionalPricing, key: SortKey) -> Ordering {
    let primary: Ordering = match key {
        SortKey::Multiplier => a
            .price_multiplier
            .partial_cmp(&b.price_multiplier)
            .unwrap_or(Ordering::Equal),
        SortKey::RegionName => a.region_name.cmp(&b.region_name),
        SortKey::Country => a.country.cmp(&b.country),
        SortKey::Density => a
            .population_density
            .as_str()
            .cmp(b.population_density.as_str()),
    };
    // Region name breaks ties so equal keys keep a fixed order.
    primary.then_with(|| a.region_name.cmp(&b.region_name))
}

/// Sorts rows by the given key and direction.
///
/// The sort is stable and ties on the primary key fall back to the
/// region name.
pub fn sort_regions(rows: &mut [&RegionalPricing], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering: Ordering = compare_rows(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Computes count/min/max/mean of the price multipliers.
///
/// Callers pass the unfiltered table; stats do not react to the active
/// search or filter.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn multiplier_stats(rows: &[RegionalPricing]) -> MultiplierStats {
    if rows.is_empty() {
        return MultiplierStats::default();
    }

    let mut min: f64 = f64::INFINITY;
    let mut max: f64 = f64::NEG_INFINITY;
    let mut sum: f64 = 0.0;
    for row in rows {
        min = min.min(row.price_multiplier);
        max = max.max(row.price_multiplier);
        sum += row.price_multiplier;
    }

    MultiplierStats {
        count: rows.len(),
        min,
        max,
        mean: sum / rows.len() as f64,
    }
}

/// Buckets the multipliers into [1.0,1.2), [1.2,1.5), [1.5,2.0),
/// [2.0,inf).
#[must_use]
pub fn multiplier_histogram(rows: &[RegionalPricing]) -> [usize; HISTOGRAM_BUCKETS] {
    let mut buckets: [usize; HISTOGRAM_BUCKETS] = [0; HISTOGRAM_BUCKETS];
    for row in rows {
        let index: usize = BUCKET_UPPER_BOUNDS
            .iter()
            .position(|bound| row.price_multiplier < *bound)
            .unwrap_or(HISTOGRAM_BUCKETS - 1);
        buckets[index] += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use adslot_domain::PopulationDensity;

    fn create_test_region(
        id: i64,
        region_name: &str,
        country: &str,
        state_province: Option<&str>,
        price_multiplier: f64,
        population_density: PopulationDensity,
    ) -> RegionalPricing {
        RegionalPricing {
            id,
            region_name: String::from(region_name),
            country: String::from(country),
            state_province: state_province.map(String::from),
            price_multiplier,
            population_density,
        }
    }

    fn create_test_table() -> Vec<RegionalPricing> {
        vec![
            create_test_region(
                1,
                "New York Metro",
                "USA",
                Some("NY"),
                2.0,
                PopulationDensity::VeryHigh,
            ),
            create_test_region(
                2,
                "Los Angeles County",
                "USA",
                Some("CA"),
                1.8,
                PopulationDensity::VeryHigh,
            ),
            create_test_region(
                3,
                "Chicago Metro",
                "USA",
                Some("IL"),
                1.5,
                PopulationDensity::High,
            ),
            create_test_region(4, "Rural Midwest", "USA", None, 1.0, PopulationDensity::Low),
            create_test_region(
                5,
                "London Metro",
                "UK",
                None,
                1.7,
                PopulationDensity::VeryHigh,
            ),
            create_test_region(
                6,
                "Phoenix Metro",
                "USA",
                Some("AZ"),
                1.2,
                PopulationDensity::Medium,
            ),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let table: Vec<RegionalPricing> = create_test_table();

        let matches = search_regions(&table, "new york");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].region_name, "New York Metro");
    }

    #[test]
    fn test_search_covers_country_and_state() {
        let table: Vec<RegionalPricing> = create_test_table();

        let by_country = search_regions(&table, "uk");
        assert_eq!(by_country.len(), 1);
        assert_eq!(by_country[0].region_name, "London Metro");

        let by_state = search_regions(&table, "az");
        assert_eq!(by_state.len(), 1);
        assert_eq!(by_state[0].region_name, "Phoenix Metro");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let table: Vec<RegionalPricing> = create_test_table();
        assert_eq!(search_regions(&table, "  ").len(), table.len());
    }

    #[test]
    fn test_filter_by_country_is_exact() {
        let table: Vec<RegionalPricing> = create_test_table();
        assert_eq!(filter_by_country(&table, "USA").len(), 5);
        assert_eq!(filter_by_country(&table, "UK").len(), 1);
        assert_eq!(filter_by_country(&table, "usa").len(), 0);
    }

    #[test]
    fn test_sort_by_multiplier_descending() {
        let table: Vec<RegionalPricing> = create_test_table();
        let mut rows: Vec<&RegionalPricing> = table.iter().collect();

        sort_regions(&mut rows, SortKey::Multiplier, SortDirection::Descending);

        let multipliers: Vec<f64> = rows.iter().map(|r| r.price_multiplier).collect();
        assert_eq!(multipliers, vec![2.0, 1.8, 1.7, 1.5, 1.2, 1.0]);
    }

    #[test]
    fn test_sort_ties_break_on_region_name() {
        let table: Vec<RegionalPricing> = vec![
            create_test_region(1, "Toronto Metro", "Canada", Some("ON"), 1.4, PopulationDensity::High),
            create_test_region(2, "Houston Metro", "USA", Some("TX"), 1.4, PopulationDensity::High),
        ];
        let mut rows: Vec<&RegionalPricing> = table.iter().collect();

        sort_regions(&mut rows, SortKey::Multiplier, SortDirection::Ascending);
        assert_eq!(rows[0].region_name, "Houston Metro");
        assert_eq!(rows[1].region_name, "Toronto Metro");
    }

    #[test]
    fn test_sort_by_density_is_lexical() {
        let table: Vec<RegionalPricing> = create_test_table();
        let mut rows: Vec<&RegionalPricing> = table.iter().collect();

        sort_regions(&mut rows, SortKey::Density, SortDirection::Ascending);

        // Lexical order: high < low < medium < very_high.
        assert_eq!(rows[0].population_density, PopulationDensity::High);
        assert_eq!(rows[1].population_density, PopulationDensity::Low);
        assert_eq!(rows[2].population_density, PopulationDensity::Medium);
        assert_eq!(rows[3].population_density, PopulationDensity::VeryHigh);
    }

    #[test]
    fn test_stats_over_full_table() {
        let table: Vec<RegionalPricing> = create_test_table();

        let stats: MultiplierStats = multiplier_stats(&table);
        assert_eq!(stats.count, 6);
        assert!((stats.min - 1.0).abs() < f64::EPSILON);
        assert!((stats.max - 2.0).abs() < f64::EPSILON);
        assert!((stats.mean - (2.0 + 1.8 + 1.5 + 1.0 + 1.7 + 1.2) / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty_table() {
        let stats: MultiplierStats = multiplier_stats(&[]);
        assert_eq!(stats.count, 0);
        assert!((stats.mean - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_histogram_bucket_edges() {
        let table: Vec<RegionalPricing> = vec![
            create_test_region(1, "A", "USA", None, 1.0, PopulationDensity::Low),
            create_test_region(2, "B", "USA", None, 1.2, PopulationDensity::Medium),
            create_test_region(3, "C", "USA", None, 1.5, PopulationDensity::High),
            create_test_region(4, "D", "USA", None, 2.0, PopulationDensity::VeryHigh),
            create_test_region(5, "E", "USA", None, 1.1, PopulationDensity::Low),
        ];

        let buckets: [usize; HISTOGRAM_BUCKETS] = multiplier_histogram(&table);
        assert_eq!(buckets, [2, 1, 1, 1]);
    }
}
