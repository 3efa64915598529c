use crate::charts::{render_correlation, render_proportions, ProportionChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchTable;
use crate::layout::DashboardLayout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Current values of the two dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

/// The full UI state, independent of rendering.
///
/// Chart specs are cached and only rebuilt when one of their inputs changes:
/// the pie depends on the site, the scatter on the site and payload range.
pub struct AppState {
    /// Loaded once at startup, never modified afterwards.
    table: LaunchTable,

    layout: DashboardLayout,

    /// Colour per booster version, over the whole table.
    pub booster_colors: ColorMap,

    selection: SelectionState,

    /// Text typed into the searchable site dropdown.
    pub site_search: String,

    proportions: ProportionChart,
    correlation: ScatterChart,

    /// Number of times each chart was rebuilt.
    renders: (u64, u64),

    /// Where the table came from, shown in the top bar.
    pub source: String,
}

impl AppState {
    /// Build the layout, colours and initial charts for a freshly loaded table.
    pub fn new(table: LaunchTable, source: impl Into<String>) -> Self {
        let layout = DashboardLayout::new(&table);
        let selection = SelectionState {
            site: layout.site_selector.default.clone(),
            payload_range: layout.payload_slider.initial,
        };
        let booster_colors = ColorMap::new(table.booster_versions());
        let proportions = render_proportions(&table, &selection.site);
        let correlation = render_correlation(&table, &selection.site, selection.payload_range);

        Self {
            table,
            layout,
            booster_colors,
            selection,
            site_search: String::new(),
            proportions,
            correlation,
            renders: (1, 1),
            source: source.into(),
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn proportions(&self) -> &ProportionChart {
        &self.proportions
    }

    pub fn correlation(&self) -> &ScatterChart {
        &self.correlation
    }

    /// Change the site selector; both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.selection.site {
            return;
        }
        self.selection.site = site;
        self.refresh_proportions();
        self.refresh_correlation();
    }

    /// Change the payload range; only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.selection.payload_range {
            return;
        }
        self.selection.payload_range = range;
        self.refresh_correlation();
    }

    /// Put both controls back to their layout defaults.
    pub fn reset_selection(&mut self) {
        self.site_search.clear();
        self.set_site(self.layout.site_selector.default.clone());
        self.set_payload_range(self.layout.payload_slider.initial);
    }

    fn refresh_proportions(&mut self) {
        self.proportions = render_proportions(&self.table, &self.selection.site);
        self.renders.0 += 1;
        log::debug!(
            "{} rebuilt for {} ({} segments, render #{})",
            self.layout.proportion_chart_id,
            self.selection.site,
            self.proportions.segments.len(),
            self.renders.0
        );
    }

    fn refresh_correlation(&mut self) {
        self.correlation = render_correlation(
            &self.table,
            &self.selection.site,
            self.selection.payload_range,
        );
        self.renders.1 += 1;
        log::debug!(
            "{} rebuilt for {} in ({}, {}) ({} points, render #{})",
            self.layout.scatter_chart_id,
            self.selection.site,
            self.selection.payload_range.low(),
            self.selection.payload_range.high(),
            self.correlation.point_count(),
            self.renders.1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::example_table;

    fn state() -> AppState {
        AppState::new(example_table(), "test")
    }

    #[test]
    fn starts_from_layout_defaults() {
        let s = state();
        assert_eq!(s.selection().site, SiteSelection::AllSites);
        assert_eq!(s.selection().payload_range, PayloadRange::new(500.0, 2500.0));
        assert_eq!(s.proportions().segments.len(), 2);
        // Bounds are excluded, so only the 1500 kg launch is in view.
        assert_eq!(s.correlation().point_count(), 1);
        assert_eq!(s.renders, (1, 1));
    }

    #[test]
    fn site_change_rebuilds_both_charts() {
        let mut s = state();
        s.set_site(SiteSelection::Site("Site A".into()));

        assert_eq!(s.renders, (2, 2));
        assert_eq!(s.proportions().title, "Success and Failure for Site A");
        assert_eq!(s.correlation().point_count(), 1);
    }

    #[test]
    fn range_change_rebuilds_only_scatter() {
        let mut s = state();
        let pie_before = s.proportions().clone();
        s.set_payload_range(PayloadRange::new(0.0, 10000.0));

        assert_eq!(s.renders, (1, 2));
        assert_eq!(s.proportions(), &pie_before);
        assert_eq!(s.correlation().point_count(), 3);
    }

    #[test]
    fn unchanged_inputs_do_not_rebuild() {
        let mut s = state();
        s.set_site(SiteSelection::AllSites);
        s.set_payload_range(PayloadRange::new(500.0, 2500.0));
        assert_eq!(s.renders, (1, 1));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = state();
        s.site_search.push_str("Site");
        s.set_site(SiteSelection::Site("Site B".into()));
        s.set_payload_range(PayloadRange::new(0.0, 1000.0));

        s.reset_selection();
        assert_eq!(s.selection().site, SiteSelection::AllSites);
        assert_eq!(s.selection().payload_range, PayloadRange::new(500.0, 2500.0));
        assert!(s.site_search.is_empty());
        assert_eq!(s.correlation().point_count(), 1);
    }
}
