//! Chart specifications and the two functions that build them.
//!
//! Both functions are pure: they read the immutable [`LaunchTable`], filter
//! it through [`crate::data::filter`] and return plain data that the UI layer
//! knows how to draw. Nothing here depends on egui.

use std::collections::BTreeMap;

use crate::data::filter::{site_and_payload_indices, site_indices, PayloadRange, SiteSelection};
use crate::data::loader::{COL_CLASS, COL_PAYLOAD_MASS};
use crate::data::model::{LaunchTable, Outcome};

/// Surface id of the proportion chart.
pub const PROPORTION_CHART_ID: &str = "success-pie-chart";
/// Surface id of the correlation chart.
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Radius (in points) of the marker for the heaviest payload in view.
pub const MAX_MARKER_RADIUS: f64 = 10.0;

// ---------------------------------------------------------------------------
// Proportion (pie) chart
// ---------------------------------------------------------------------------

/// One wedge of a proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    pub title: String,
    pub segments: Vec<Segment>,
}

impl ProportionChart {
    /// Sum of all segment values.
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    /// Share of each segment in `[0, 1]`. Empty when the total is zero,
    /// since there is nothing to divide up.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }
        self.segments.iter().map(|s| s.value / total).collect()
    }
}

/// Success breakdown for the site selector value.
///
/// * All sites: one segment per site in the table, valued by its number of
///   successful launches (sum of `class`).
/// * One site: one segment per outcome observed at that site, valued by the
///   number of launches with that outcome.
pub fn render_proportions(table: &LaunchTable, selected_site: &SiteSelection) -> ProportionChart {
    match selected_site {
        SiteSelection::AllSites => {
            let mut successes: BTreeMap<&str, f64> =
                table.sites().iter().map(|s| (s.as_str(), 0.0)).collect();
            for r in table.records() {
                *successes.entry(r.launch_site.as_str()).or_default() +=
                    f64::from(r.outcome.class_value());
            }

            ProportionChart {
                title: "Total Success Launches by All Site".to_string(),
                segments: successes
                    .into_iter()
                    .map(|(site, value)| Segment {
                        label: site.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let records = table.records();
            let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
            for i in site_indices(table, selected_site) {
                *counts.entry(records[i].outcome).or_default() += 1;
            }

            ProportionChart {
                title: format!("Success and Failure for {site}"),
                segments: counts
                    .into_iter()
                    .map(|(outcome, n)| Segment {
                        label: outcome.to_string(),
                        value: n as f64,
                    })
                    .collect(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Correlation (scatter) chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Marker radius; the marker *area* is proportional to payload mass.
    pub radius: f64,
}

/// All points sharing a booster version (drawn in one colour).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_version: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Sorted by booster version.
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// Payload mass against outcome for launches whose payload lies strictly
/// inside `payload_range`, restricted to the selected site.
pub fn render_correlation(
    table: &LaunchTable,
    selected_site: &SiteSelection,
    payload_range: PayloadRange,
) -> ScatterChart {
    let records = table.records();
    let rows = site_and_payload_indices(table, selected_site, payload_range);

    let max_payload = rows
        .iter()
        .map(|&i| records[i].payload_mass_kg)
        .fold(0.0_f64, f64::max);

    let mut by_booster: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
    for i in rows {
        let r = &records[i];
        let radius = if max_payload > 0.0 {
            MAX_MARKER_RADIUS * (r.payload_mass_kg / max_payload).sqrt()
        } else {
            0.0
        };
        by_booster
            .entry(r.booster_version.as_str())
            .or_default()
            .push(ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                class: r.outcome.class_value(),
                radius,
            });
    }

    ScatterChart {
        title: format!("Correlation between Payload and Success for {selected_site}"),
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        series: by_booster
            .into_iter()
            .map(|(booster, points)| ScatterSeries {
                booster_version: booster.to_string(),
                points,
            })
            .collect(),
    }
}
