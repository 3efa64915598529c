use std::fmt;

use super::model::LaunchTable;

/// Label of the "every site" entry in the site selector.
pub const ALL_SITES: &str = "All Sites";

// ---------------------------------------------------------------------------
// Selection values handed to the chart functions
// ---------------------------------------------------------------------------

/// Value of the site selector: every site, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Interpret a selector value; the `"All Sites"` label maps to the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The selector value this selection corresponds to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Payload window `(low, high)` in kilograms, `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            PayloadRange { low, high }
        } else {
            PayloadRange {
                low: high,
                high: low,
            }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Open-interval test: both ends are excluded.
    pub fn contains_exclusive(&self, payload: f64) -> bool {
        payload > self.low && payload < self.high
    }
}

// ---------------------------------------------------------------------------
// Derived views: row indices into the table
// ---------------------------------------------------------------------------

/// Indices of the rows launched from the selected site (all rows for
/// [`SiteSelection::AllSites`]). A site absent from the table selects nothing.
pub fn site_indices(table: &LaunchTable, selection: &SiteSelection) -> Vec<usize> {
    match selection {
        SiteSelection::AllSites => (0..table.len()).collect(),
        SiteSelection::Site(site) => {
            if !table.has_site(site) {
                log::warn!("Unknown launch site {site:?}, selecting no rows");
            }
            table
                .records()
                .iter()
                .enumerate()
                .filter(|(_, r)| r.launch_site == *site)
                .map(|(i, _)| i)
                .collect()
        }
    }
}

/// Indices of the rows from the selected site whose payload lies strictly
/// inside `range`.
pub fn site_and_payload_indices(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    let records = table.records();
    site_indices(table, selection)
        .into_iter()
        .filter(|&i| range.contains_exclusive(records[i].payload_mass_kg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::example_table;

    #[test]
    fn all_sites_label_round_trips_to_sentinel() {
        assert_eq!(SiteSelection::from_value("All Sites"), SiteSelection::AllSites);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        assert_eq!(SiteSelection::AllSites.value(), ALL_SITES);
    }

    #[test]
    fn reversed_range_is_normalised() {
        let range = PayloadRange::new(2000.0, 400.0);
        assert_eq!(range.low(), 400.0);
        assert_eq!(range.high(), 2000.0);
    }

    #[test]
    fn range_excludes_both_ends() {
        let range = PayloadRange::new(500.0, 1500.0);
        assert!(!range.contains_exclusive(500.0));
        assert!(!range.contains_exclusive(1500.0));
        assert!(range.contains_exclusive(500.5));
        assert!(range.contains_exclusive(1499.0));
    }

    #[test]
    fn degenerate_range_selects_nothing() {
        let table = example_table();
        let rows =
            site_and_payload_indices(&table, &SiteSelection::AllSites, PayloadRange::new(500.0, 500.0));
        assert!(rows.is_empty());
    }

    #[test]
    fn site_filter_restricts_rows() {
        let table = example_table();
        assert_eq!(site_indices(&table, &SiteSelection::AllSites), vec![0, 1, 2]);
        assert_eq!(
            site_indices(&table, &SiteSelection::Site("Site A".into())),
            vec![0, 1]
        );
        assert!(site_indices(&table, &SiteSelection::Site("Nowhere".into())).is_empty());
    }

    #[test]
    fn payload_filter_applies_after_site_filter() {
        let table = example_table();
        let rows = site_and_payload_indices(
            &table,
            &SiteSelection::Site("Site A".into()),
            PayloadRange::new(1000.0, 3000.0),
        );
        assert_eq!(rows, vec![1]);
    }
}
