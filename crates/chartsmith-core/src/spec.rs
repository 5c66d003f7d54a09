// File: crates/chartsmith-core/src/spec.rs
// Summary: RenderSpec: the compiled, renderer-agnostic configuration tree.
// Notes:
// - A RenderSpec is disposable output. It is recomputed wholesale on every
//   document or option change and never patched incrementally.

use serde::{Deserialize, Serialize};

use crate::document::Symbol;
use crate::options::ChartKind;

/// Axis descriptor handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AxisSpec {
    Numeric {
        label: String,
        min: f64,
        max: f64,
    },
    Categorical {
        label: String,
        categories: Vec<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub visible: bool,
    pub entries: Vec<String>,
}

/// Hierarchy node in compiled form (plain owned tree, no sharing).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub value: Option<f64>,
    pub style: Option<String>,
    pub children: Vec<NodeSpec>,
}

/// Kind-specific compiled data for one rendered series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SeriesData {
    /// Scalar sequence (bar, line, radar, gauge, pictorial bar).
    Values(Vec<f64>),
    /// Labelled slices (pie, funnel).
    NamedValues(Vec<(String, f64)>),
    /// XY points (scatter, calendar).
    Points(Vec<(f64, f64)>),
    /// (x, y, value) triples (heatmap).
    Cells(Vec<(f64, f64, f64)>),
    /// One box: [min, q1, median, q3, max] plus the fenced-out values.
    Box {
        summary: [f64; 5],
        outliers: Vec<f64>,
    },
    /// OHLC bars as [open, high, low, close], indexed by position.
    Candles(Vec<[f64; 4]>),
    /// Dimension-encoded records (parallel coordinates).
    Records(Vec<Vec<f64>>),
    /// Compiled hierarchy (tree, treemap, sunburst).
    Nodes(Vec<NodeSpec>),
    /// Node/link flow data (graph, sankey). Links are
    /// (source index, target index, weight).
    Flow {
        nodes: Vec<(String, f64)>,
        links: Vec<(usize, usize, f64)>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: String,
    pub symbol: Symbol,
    pub symbol_size: f64,
    pub repeat: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub kind: ChartKind,
    pub data: SeriesData,
    pub style: SeriesStyle,
}

/// Fields a renderer supplies when asking for a tooltip string.
#[derive(Clone, Debug, Default)]
pub struct PointContext {
    pub series: String,
    pub label: Option<String>,
    pub values: Vec<f64>,
}

const TOOLTIP_PLACEHOLDER: &str = "-";

/// Pure tooltip formatter, selected per chart kind. `resolve` is total: any
/// missing field renders as a neutral placeholder, never a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipResolver {
    /// "series: value" for category-shaped data.
    NameValue,
    /// "series (x, y)" for point-shaped data.
    Point,
    /// Open/high/low/close readout.
    OhlcSummary,
    /// Five-number readout for boxplots.
    BoxSummary,
}

impl TooltipResolver {
    pub fn resolve(&self, ctx: &PointContext) -> String {
        let name: &str = if ctx.series.is_empty() {
            ctx.label.as_deref().unwrap_or(TOOLTIP_PLACEHOLDER)
        } else {
            &ctx.series
        };
        match self {
            TooltipResolver::NameValue => match ctx.values.first() {
                Some(v) if v.is_finite() => format!("{name}: {v}"),
                _ => format!("{name}: {TOOLTIP_PLACEHOLDER}"),
            },
            TooltipResolver::Point => match (ctx.values.first(), ctx.values.get(1)) {
                (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                    format!("{name} ({x}, {y})")
                }
                _ => format!("{name} ({TOOLTIP_PLACEHOLDER})"),
            },
            TooltipResolver::OhlcSummary => {
                if ctx.values.len() >= 4 && ctx.values[..4].iter().all(|v| v.is_finite()) {
                    format!(
                        "{name} O:{} H:{} L:{} C:{}",
                        ctx.values[0], ctx.values[1], ctx.values[2], ctx.values[3]
                    )
                } else {
                    format!("{name} ({TOOLTIP_PLACEHOLDER})")
                }
            }
            TooltipResolver::BoxSummary => {
                if ctx.values.len() >= 5 && ctx.values[..5].iter().all(|v| v.is_finite()) {
                    format!(
                        "{name} min:{} q1:{} med:{} q3:{} max:{}",
                        ctx.values[0], ctx.values[1], ctx.values[2], ctx.values[3], ctx.values[4]
                    )
                } else {
                    format!("{name} ({TOOLTIP_PLACEHOLDER})")
                }
            }
        }
    }
}

/// The compiled, renderer-facing output of the pipeline. Always well-formed;
/// the renderer is expected to accept it without further validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub title: String,
    pub tooltip: TooltipResolver,
    pub legend: LegendSpec,
    pub axes: Vec<AxisSpec>,
    pub series: Vec<SeriesSpec>,
}

impl RenderSpec {
    /// The degraded spec surfaced when compilation fails. Callers never see
    /// an error from `compile`, only this.
    pub fn fallback() -> Self {
        Self {
            title: "Chart Error".to_string(),
            tooltip: TooltipResolver::NameValue,
            legend: LegendSpec::default(),
            axes: Vec::new(),
            series: Vec::new(),
        }
    }
}
