use crate::charts::{PROPORTION_CHART_ID, SCATTER_CHART_ID};
use crate::data::filter::{PayloadRange, SiteSelection, ALL_SITES};
use crate::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Static layout descriptor
// ---------------------------------------------------------------------------

pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Dropdown used to pick a launch site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSelectorSpec {
    pub id: &'static str,
    /// `"All Sites"` first, then every site of the table.
    pub options: Vec<String>,
    pub default: SiteSelection,
    pub placeholder: &'static str,
    pub searchable: bool,
}

/// Two-handle slider over payload mass.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick value and its label, one per step.
    pub marks: Vec<(f64, String)>,
    pub initial: PayloadRange,
}

/// Everything the dashboard shows, in display order. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub title_rgb: [u8; 3],
    pub title_size: f32,
    pub site_selector: SiteSelectorSpec,
    pub proportion_chart_id: &'static str,
    pub payload_slider: RangeSliderSpec,
    pub scatter_chart_id: &'static str,
}

impl DashboardLayout {
    pub fn new(table: &LaunchTable) -> Self {
        let options = std::iter::once(ALL_SITES.to_string())
            .chain(table.sites().iter().cloned())
            .collect();

        let steps = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP) as usize;
        let marks = (0..=steps)
            .map(|i| {
                let v = PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_STEP;
                (v, format!("{v} kg"))
            })
            .collect();

        // The slider cannot express values outside its domain.
        let initial = match table.payload_bounds() {
            Some(b) => PayloadRange::new(
                b.min.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
                b.max.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
            ),
            None => PayloadRange::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
        };

        DashboardLayout {
            title: "SpaceX Launch Records Dashboard",
            title_rgb: [0x50, 0x3D, 0x36],
            title_size: 40.0,
            site_selector: SiteSelectorSpec {
                id: "site_dropdown",
                options,
                default: SiteSelection::AllSites,
                placeholder: "Select Launch Site!!",
                searchable: true,
            },
            proportion_chart_id: PROPORTION_CHART_ID,
            payload_slider: RangeSliderSpec {
                id: "payload_slider",
                label: "Payload range (kg):",
                min: PAYLOAD_SLIDER_MIN,
                max: PAYLOAD_SLIDER_MAX,
                step: PAYLOAD_SLIDER_STEP,
                marks,
                initial,
            },
            scatter_chart_id: SCATTER_CHART_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{example_table, record};

    #[test]
    fn selector_lists_all_sites_then_table_sites() {
        let layout = DashboardLayout::new(&example_table());
        assert_eq!(
            layout.site_selector.options,
            vec!["All Sites".to_string(), "Site A".into(), "Site B".into()]
        );
        assert_eq!(layout.site_selector.default, SiteSelection::AllSites);
        assert!(layout.site_selector.searchable);
    }

    #[test]
    fn slider_has_eleven_fixed_marks() {
        let layout = DashboardLayout::new(&example_table());
        let marks = &layout.payload_slider.marks;
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[0], (0.0, "0 kg".to_string()));
        assert_eq!(marks[3], (3000.0, "3000 kg".to_string()));
        assert_eq!(marks[10], (10000.0, "10000 kg".to_string()));
    }

    #[test]
    fn slider_is_seeded_from_payload_bounds() {
        let layout = DashboardLayout::new(&example_table());
        assert_eq!(layout.payload_slider.initial, PayloadRange::new(500.0, 2500.0));
    }

    #[test]
    fn out_of_domain_bounds_are_clamped() {
        let table = LaunchTable::from_records(vec![
            record("A", 300.0, 1, "x"),
            record("A", 15600.0, 1, "x"),
        ]);
        let layout = DashboardLayout::new(&table);
        assert_eq!(layout.payload_slider.initial, PayloadRange::new(300.0, 10000.0));
    }

    #[test]
    fn empty_table_starts_with_full_domain() {
        let layout = DashboardLayout::new(&LaunchTable::from_records(Vec::new()));
        assert_eq!(layout.payload_slider.initial, PayloadRange::new(0.0, 10000.0));
        assert_eq!(layout.site_selector.options, vec!["All Sites".to_string()]);
    }

    #[test]
    fn chart_surfaces_have_stable_ids() {
        let layout = DashboardLayout::new(&example_table());
        assert_eq!(layout.proportion_chart_id, "success-pie-chart");
        assert_eq!(layout.scatter_chart_id, "success-payload-scatter-chart");
    }
}
