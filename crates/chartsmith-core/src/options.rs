// File: crates/chartsmith-core/src/options.rs
// Summary: Closed render-option enums and the RenderOptions bundle.

use serde::{Deserialize, Serialize};

use crate::palette::{self, Palette};

/// Every chart kind a builder can produce. A closed set: the compiler
/// dispatches exhaustively on this tag and owns one data-shaping rule per
/// variant.
///
/// Graph and Sankey read each series as one node (value = the sum of its
/// scalars) and each `points` pair as a (source, target) link; see the
/// compiler for details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Radar,
    Heatmap,
    Boxplot,
    Candlestick,
    Funnel,
    Tree,
    Treemap,
    Sunburst,
    Parallel,
    Graph,
    PictorialBar,
    Gauge,
    Sankey,
    Calendar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 18] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Radar,
        ChartKind::Heatmap,
        ChartKind::Boxplot,
        ChartKind::Candlestick,
        ChartKind::Funnel,
        ChartKind::Tree,
        ChartKind::Treemap,
        ChartKind::Sunburst,
        ChartKind::Parallel,
        ChartKind::Graph,
        ChartKind::PictorialBar,
        ChartKind::Gauge,
        ChartKind::Sankey,
        ChartKind::Calendar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar => "radar",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Boxplot => "boxplot",
            ChartKind::Candlestick => "candlestick",
            ChartKind::Funnel => "funnel",
            ChartKind::Tree => "tree",
            ChartKind::Treemap => "treemap",
            ChartKind::Sunburst => "sunburst",
            ChartKind::Parallel => "parallel",
            ChartKind::Graph => "graph",
            ChartKind::PictorialBar => "pictorial-bar",
            ChartKind::Gauge => "gauge",
            ChartKind::Sankey => "sankey",
            ChartKind::Calendar => "calendar",
        }
    }

    /// Find a kind by name, falling back to `Line` for unknown input.
    pub fn from_name(name: &str) -> ChartKind {
        for k in ChartKind::ALL {
            if k.name().eq_ignore_ascii_case(name) {
                return k;
            }
        }
        ChartKind::Line
    }

    /// Kinds whose data comes from the document's node hierarchy rather than
    /// from flat series.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, ChartKind::Tree | ChartKind::Treemap | ChartKind::Sunburst)
    }

    /// Kinds whose category-shaped data honors `RenderOptions::sort`.
    pub fn is_sortable(&self) -> bool {
        matches!(
            self,
            ChartKind::Bar | ChartKind::Pie | ChartKind::Funnel | ChartKind::PictorialBar
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortOrder {
    /// Find an order by name, falling back to `None` for unknown input.
    pub fn from_name(name: &str) -> SortOrder {
        match name.to_ascii_lowercase().as_str() {
            "ascending" => SortOrder::Ascending,
            "descending" => SortOrder::Descending,
            _ => SortOrder::None,
        }
    }
}

/// Named palette selection. Closed set mirroring `palette::presets`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Standard,
    Warm,
    Cool,
    Pastel,
    Mono,
}

impl ColorScheme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            ColorScheme::Standard => &palette::STANDARD,
            ColorScheme::Warm => &palette::WARM,
            ColorScheme::Cool => &palette::COOL,
            ColorScheme::Pastel => &palette::PASTEL,
            ColorScheme::Mono => &palette::MONO,
        }
    }

    /// Find a scheme by palette name, falling back to `Standard`.
    pub fn from_name(name: &str) -> ColorScheme {
        match name.to_ascii_lowercase().as_str() {
            "warm" => ColorScheme::Warm,
            "cool" => ColorScheme::Cool,
            "pastel" => ColorScheme::Pastel,
            "mono" => ColorScheme::Mono,
            _ => ColorScheme::Standard,
        }
    }
}

/// Display options passed alongside a document on every compile. All fields
/// range over closed sets; unknown names default rather than coerce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub kind: ChartKind,
    pub sort: SortOrder,
    pub scheme: ColorScheme,
    pub show_legend: bool,
    /// Trailing moving-average window for candlestick charts. `None` disables
    /// the overlay line.
    pub ma_window: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            sort: SortOrder::None,
            scheme: ColorScheme::Standard,
            show_legend: true,
            ma_window: None,
        }
    }
}

impl RenderOptions {
    pub fn with_kind(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}
