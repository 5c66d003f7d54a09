// File: crates/chartsmith-core/src/compile.rs
// Summary: Pure compiler from (ChartDocument, RenderOptions) to RenderSpec.
// Notes:
// - `compile` is total: internal failures are aggregated once and mapped to
//   `RenderSpec::fallback()`, never raised past this boundary.

use std::cmp::Ordering;
use std::rc::Rc;

use tracing::debug;

use crate::document::{ChartDocument, DomainKind, Series};
use crate::error::{PipelineError, Result};
use crate::options::{ChartKind, RenderOptions, SortOrder};
use crate::spec::{
    AxisSpec, LegendSpec, NodeSpec, RenderSpec, SeriesData, SeriesSpec, SeriesStyle,
    TooltipResolver,
};
use crate::stats;
use crate::tree::TreeNode;

/// Compile a document under the given options. Same inputs always yield the
/// same output; degenerate input (empty series, empty hierarchy) compiles to
/// a valid spec with empty data rather than failing.
pub fn compile(document: &ChartDocument, options: &RenderOptions) -> RenderSpec {
    match assemble(document, options) {
        Ok(spec) => spec,
        Err(err) => {
            debug!(error = %err, "compile failed; returning fallback spec");
            RenderSpec::fallback()
        }
    }
}

fn assemble(doc: &ChartDocument, opts: &RenderOptions) -> Result<RenderSpec> {
    let axes = derive_axes(doc, opts)?;
    let series = shape_series(doc, opts)?;
    let entries: Vec<String> = series.iter().map(|s| s.name.clone()).collect();
    Ok(RenderSpec {
        title: doc.title.clone(),
        tooltip: tooltip_for(opts.kind),
        legend: LegendSpec {
            visible: opts.show_legend,
            entries,
        },
        axes,
        series,
    })
}

fn tooltip_for(kind: ChartKind) -> TooltipResolver {
    match kind {
        ChartKind::Candlestick => TooltipResolver::OhlcSummary,
        ChartKind::Boxplot => TooltipResolver::BoxSummary,
        ChartKind::Scatter | ChartKind::Heatmap | ChartKind::Calendar => TooltipResolver::Point,
        _ => TooltipResolver::NameValue,
    }
}

// ---- axes -------------------------------------------------------------------

fn derive_axes(doc: &ChartDocument, opts: &RenderOptions) -> Result<Vec<AxisSpec>> {
    match opts.kind {
        // Axis-free kinds.
        ChartKind::Pie
        | ChartKind::Funnel
        | ChartKind::Gauge
        | ChartKind::Graph
        | ChartKind::Sankey
        | ChartKind::Tree
        | ChartKind::Treemap
        | ChartKind::Sunburst => Ok(Vec::new()),

        ChartKind::Parallel => {
            if doc.dimensions.is_empty() {
                return Err(PipelineError::Compile {
                    reason: "parallel chart declares no dimensions".to_string(),
                });
            }
            Ok(doc
                .dimensions
                .iter()
                .map(|d| match &d.domain {
                    DomainKind::Numeric { min, max } => AxisSpec::Numeric {
                        label: d.name.clone(),
                        min: *min,
                        max: *max,
                    },
                    DomainKind::Categorical(cats) => AxisSpec::Categorical {
                        label: d.name.clone(),
                        categories: cats.clone(),
                    },
                })
                .collect())
        }

        _ => Ok(vec![
            numeric_axis(doc.axis_labels.x.clone(), observed_x(doc, opts.kind)),
            numeric_axis(doc.axis_labels.y.clone(), observed_y(doc, opts.kind)),
        ]),
    }
}

fn numeric_axis(label: String, range: Option<(f64, f64)>) -> AxisSpec {
    let (mut min, mut max) = range.unwrap_or((0.0, 1.0));
    // Widen degenerate ranges so the renderer always gets a usable span.
    if (max - min).abs() < 1e-9 {
        max = min + 1.0;
    }
    AxisSpec::Numeric { label, min, max }
}

fn observed_x(doc: &ChartDocument, kind: ChartKind) -> Option<(f64, f64)> {
    match kind {
        ChartKind::Candlestick => fold_range(
            doc.series
                .iter()
                .flat_map(|s| s.bars.iter().map(|b| b.t)),
        ),
        ChartKind::Scatter | ChartKind::Heatmap | ChartKind::Calendar => fold_range(
            doc.series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.0)),
        ),
        // Scalar kinds run over value positions 0..n-1.
        _ => {
            let n = doc.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
            if n == 0 {
                None
            } else {
                Some((0.0, (n - 1) as f64))
            }
        }
    }
}

fn observed_y(doc: &ChartDocument, kind: ChartKind) -> Option<(f64, f64)> {
    match kind {
        ChartKind::Candlestick => fold_range(
            doc.series
                .iter()
                .flat_map(|s| s.bars.iter().flat_map(|b| [b.l, b.h])),
        ),
        ChartKind::Scatter | ChartKind::Heatmap | ChartKind::Calendar => fold_range(
            doc.series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.1)),
        ),
        _ => fold_range(doc.series.iter().flat_map(|s| s.values.iter().copied())),
    }
}

fn fold_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

// ---- series shaping ---------------------------------------------------------

fn shape_series(doc: &ChartDocument, opts: &RenderOptions) -> Result<Vec<SeriesSpec>> {
    let kind = opts.kind;

    if kind.is_hierarchical() {
        return Ok(vec![SeriesSpec {
            name: doc.title.clone(),
            kind,
            data: SeriesData::Nodes(compile_forest(&doc.hierarchy)),
            style: default_style(opts, 0),
        }]);
    }
    if kind == ChartKind::Parallel {
        return Ok(vec![SeriesSpec {
            name: doc.title.clone(),
            kind,
            data: SeriesData::Records(encode_records(doc)?),
            style: default_style(opts, 0),
        }]);
    }
    if matches!(kind, ChartKind::Graph | ChartKind::Sankey) {
        return Ok(vec![SeriesSpec {
            name: doc.title.clone(),
            kind,
            data: flow_data(&doc.series),
            style: default_style(opts, 0),
        }]);
    }

    let mut out = Vec::with_capacity(doc.series.len());
    for (i, s) in doc.series.iter().enumerate() {
        let data = shape_flat(doc, s, opts)?;
        out.push(SeriesSpec {
            name: s.name.clone(),
            kind,
            data,
            style: series_style(s, opts, i),
        });
        // Candlestick charts may carry a derived moving-average line.
        if kind == ChartKind::Candlestick {
            if let Some(w) = opts.ma_window {
                let closes: Vec<f64> = s.bars.iter().map(|b| b.c).collect();
                out.push(SeriesSpec {
                    name: format!("{} MA{w}", s.name),
                    kind: ChartKind::Line,
                    data: SeriesData::Values(stats::moving_average(&closes, w)),
                    style: default_style(opts, doc.series.len() + i),
                });
            }
        }
    }
    Ok(out)
}

fn shape_flat(doc: &ChartDocument, s: &Series, opts: &RenderOptions) -> Result<SeriesData> {
    Ok(match opts.kind {
        ChartKind::Bar
        | ChartKind::Line
        | ChartKind::Radar
        | ChartKind::Gauge
        | ChartKind::PictorialBar => SeriesData::Values(sorted_values(s, opts)),

        ChartKind::Pie | ChartKind::Funnel => {
            let mut slices = slice_labels(doc, s);
            sort_named(&mut slices, opts.sort);
            SeriesData::NamedValues(slices)
        }

        ChartKind::Scatter | ChartKind::Calendar => SeriesData::Points(s.points.clone()),

        ChartKind::Heatmap => SeriesData::Cells(
            s.points
                .iter()
                .enumerate()
                .map(|(i, p)| (p.0, p.1, s.values.get(i).copied().unwrap_or(1.0)))
                .collect(),
        ),

        ChartKind::Boxplot => SeriesData::Box {
            summary: stats::five_number_summary(&s.values).as_array(),
            outliers: stats::outliers(&s.values),
        },

        ChartKind::Candlestick => SeriesData::Candles(
            s.bars.iter().map(|b| [b.o, b.h, b.l, b.c]).collect(),
        ),

        // Handled before the per-series loop.
        ChartKind::Parallel
        | ChartKind::Tree
        | ChartKind::Treemap
        | ChartKind::Sunburst
        | ChartKind::Graph
        | ChartKind::Sankey => {
            return Err(PipelineError::Compile {
                reason: format!("{} is not a flat series kind", opts.kind.name()),
            })
        }
    })
}

fn sorted_values(s: &Series, opts: &RenderOptions) -> Vec<f64> {
    let mut values = s.values.clone();
    if opts.kind.is_sortable() {
        match opts.sort {
            SortOrder::Ascending => {
                values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            SortOrder::Descending => {
                values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
            }
            SortOrder::None => {}
        }
    }
    values
}

/// Slice labels come from the first categorical dimension when one is
/// declared, otherwise from the series name plus slot number.
fn slice_labels(doc: &ChartDocument, s: &Series) -> Vec<(String, f64)> {
    let categories = doc.dimensions.iter().find_map(|d| match &d.domain {
        DomainKind::Categorical(cats) => Some(cats),
        DomainKind::Numeric { .. } => None,
    });
    s.values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let label = categories
                .and_then(|c| c.get(i).cloned())
                .unwrap_or_else(|| format!("{} {}", s.name, i + 1));
            (label, v)
        })
        .collect()
}

fn sort_named(slices: &mut [(String, f64)], sort: SortOrder) {
    match sort {
        SortOrder::Ascending => {
            slices.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        }
        SortOrder::Descending => {
            slices.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        }
        SortOrder::None => {}
    }
}

fn encode_records(doc: &ChartDocument) -> Result<Vec<Vec<f64>>> {
    let dims = &doc.dimensions;
    let mut out = Vec::with_capacity(doc.records.len());
    for (index, record) in doc.records.iter().enumerate() {
        if record.len() != dims.len() {
            return Err(PipelineError::RecordShape {
                index,
                got: record.len(),
                expected: dims.len(),
            });
        }
        out.push(
            record
                .iter()
                .zip(dims)
                .map(|(cell, dim)| stats::encode_dimension(cell, dim))
                .collect(),
        );
    }
    Ok(out)
}

fn compile_forest(forest: &[Rc<TreeNode>]) -> Vec<NodeSpec> {
    forest.iter().map(|n| compile_node(n)).collect()
}

fn compile_node(node: &TreeNode) -> NodeSpec {
    NodeSpec {
        name: node.name.clone(),
        value: node.value,
        style: node.style.clone(),
        children: compile_forest(&node.children),
    }
}

/// Graph/sankey shaping: one node per series (value = sum of its scalars);
/// `points` pairs are (source, target) links weighted by the aligned scalar,
/// defaulting to 1.0. Links referencing nodes out of range are dropped.
fn flow_data(series: &[Series]) -> SeriesData {
    let nodes: Vec<(String, f64)> = series
        .iter()
        .map(|s| {
            let sum = s.values.iter().filter(|v| v.is_finite()).sum();
            (s.name.clone(), sum)
        })
        .collect();
    let mut links = Vec::new();
    for s in series {
        for (i, p) in s.points.iter().enumerate() {
            let (src, dst) = (p.0, p.1);
            if !src.is_finite() || !dst.is_finite() || src < 0.0 || dst < 0.0 {
                continue;
            }
            let (src, dst) = (src as usize, dst as usize);
            if src >= nodes.len() || dst >= nodes.len() {
                continue;
            }
            let weight = s
                .values
                .get(i)
                .copied()
                .filter(|w| w.is_finite())
                .unwrap_or(1.0);
            links.push((src, dst, weight));
        }
    }
    SeriesData::Flow { nodes, links }
}

// ---- style ------------------------------------------------------------------

fn series_style(s: &Series, opts: &RenderOptions, slot: usize) -> SeriesStyle {
    let color = if s.color.is_empty() {
        opts.scheme.palette().color_at(slot).to_string()
    } else {
        s.color.clone()
    };
    SeriesStyle {
        color,
        symbol: s.symbol,
        symbol_size: s.symbol_size,
        repeat: s.repeat,
    }
}

fn default_style(opts: &RenderOptions, slot: usize) -> SeriesStyle {
    SeriesStyle {
        color: opts.scheme.palette().color_at(slot).to_string(),
        symbol: Default::default(),
        symbol_size: 10.0,
        repeat: false,
    }
}
