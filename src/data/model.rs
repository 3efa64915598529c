use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a launch, stored in the source table as `class` (0/1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as it appears in the source table.
    pub fn class_value(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Parse a class cell. Accepts `0`/`1` written as integers or floats.
    pub fn from_class(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Outcome::Failure)
        } else if value == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "0 (failure)"),
            Outcome::Success => write!(f, "1 (success)"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Only used to group and colour scatter points.
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// PayloadBounds
// ---------------------------------------------------------------------------

/// Minimum and maximum payload mass of a table. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category indices.
///
/// Read-only once built: fields are private and every filter in
/// [`super::filter`] returns row indices instead of touching the rows.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: BTreeSet<String>,
    booster_versions: BTreeSet<String>,
    bounds: Option<PayloadBounds>,
}

impl LaunchTable {
    /// Build category indices and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites = records.iter().map(|r| r.launch_site.clone()).collect();
        let booster_versions = records
            .iter()
            .map(|r| r.booster_version.clone())
            .collect();

        let bounds = records.iter().fold(None, |acc: Option<PayloadBounds>, r| {
            let m = r.payload_mass_kg;
            Some(match acc {
                None => PayloadBounds { min: m, max: m },
                Some(b) => PayloadBounds {
                    min: b.min.min(m),
                    max: b.max.max(m),
                },
            })
        });

        LaunchTable {
            records,
            sites,
            booster_versions,
            bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, sorted by name.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    /// Distinct booster versions, sorted by name.
    pub fn booster_versions(&self) -> &BTreeSet<String> {
        &self.booster_versions
    }

    /// Payload bounds, `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.bounds
    }

    /// Whether `site` occurs in the table.
    pub fn has_site(&self, site: &str) -> bool {
        self.sites.contains(site)
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome: if class == 1 {
                Outcome::Success
            } else {
                Outcome::Failure
            },
            booster_version: booster.to_string(),
        }
    }

    /// The three-row table used in the worked examples.
    pub(crate) fn example_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("Site A", 500.0, 1, "F9 v1.0"),
            record("Site A", 1500.0, 0, "F9 v1.1"),
            record("Site B", 2500.0, 1, "F9 FT"),
        ])
    }

    #[test]
    fn bounds_cover_payload_column() {
        let table = example_table();
        assert_eq!(
            table.payload_bounds(),
            Some(PayloadBounds {
                min: 500.0,
                max: 2500.0
            })
        );
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let table = LaunchTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.payload_bounds(), None);
        assert!(table.sites().is_empty());
    }

    #[test]
    fn category_indices_are_distinct_and_sorted() {
        let table = example_table();
        let sites: Vec<&str> = table.sites().iter().map(String::as_str).collect();
        assert_eq!(sites, ["Site A", "Site B"]);
        assert_eq!(table.booster_versions().len(), 3);
        assert!(table.has_site("Site B"));
        assert!(!table.has_site("Site C"));
    }

    #[test]
    fn class_values_parse_from_integers_and_floats() {
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::Success.class_value(), 1);
    }
}
