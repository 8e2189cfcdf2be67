use crate::data::filter::{pitch_axis_indices, station_representatives};
use crate::data::loader::SolutionStats;
use crate::data::model::NodeSet;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which diagnostic figure the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Spanwise vs. chordwise scatter of the blade outline.
    Planform,
    /// Nodal y-displacement vs. span.
    Displacement,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded node set, span-sorted (None until a case is loaded).
    pub nodes: Option<NodeSet>,

    /// Counters from the last solution-report pass.
    pub stats: SolutionStats,

    /// Chordwise reference for the pitch-axis filter.
    pub x_ref: f64,

    /// Absolute tolerance around `x_ref`.
    pub tolerance: f64,

    /// Overlay toggles.
    pub show_pitch: bool,
    pub show_stations: bool,

    /// Active figure.
    pub plot_kind: PlotKind,

    /// Indices of pitch-axis nodes (cached).
    pub pitch_indices: Vec<usize>,

    /// Indices of station representatives (cached).
    pub station_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            nodes: None,
            stats: SolutionStats::default(),
            x_ref: 0.0,
            tolerance: 0.01,
            show_pitch: true,
            show_stations: false,
            plot_kind: PlotKind::Planform,
            pitch_indices: Vec::new(),
            station_indices: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a freshly loaded case: sort spanwise and rebuild filter caches.
    pub fn set_case(&mut self, mut set: NodeSet, stats: SolutionStats) {
        set.sort_spanwise();
        self.nodes = Some(set);
        self.stats = stats;
        self.status_message = if stats.out_of_range > 0 {
            Some(format!(
                "{} displacement lines referenced missing nodes",
                stats.out_of_range
            ))
        } else {
            None
        };
        self.refilter();
    }

    /// Recompute the cached index lists after a control change.
    pub fn refilter(&mut self) {
        if let Some(set) = &self.nodes {
            self.pitch_indices = pitch_axis_indices(set, self.x_ref, self.tolerance);
            self.station_indices = station_representatives(set, self.x_ref);
        }
    }

    /// Number of nodes that carry a displacement value.
    pub fn displaced_count(&self) -> usize {
        self.nodes
            .as_ref()
            .map(|set| set.nodes.iter().filter(|n| n.uy.is_some()).count())
            .unwrap_or(0)
    }
}
