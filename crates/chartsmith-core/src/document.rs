// File: crates/chartsmith-core/src/document.rs
// Summary: Chart document model: series, dimensions, axis labels, hierarchy.
// Notes:
// - The pipeline never mutates a document in place. Every edit produces a
//   whole new document value; derived output is recomputed from scratch.

use serde::{Deserialize, Serialize};

use crate::tree::Forest;

/// Axis title labels for the primary X/Y axes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

/// One OHLC bar at logical position `t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    pub t: f64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl Ohlc {
    /// Try to construct a bar enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(t: f64, o: f64, h: f64, l: f64, c: f64) -> Result<Self, &'static str> {
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo {
            return Err("low above min(open,close)");
        }
        if h < hi {
            return Err("high below max(open,close)");
        }
        if l > h {
            return Err("low above high");
        }
        Ok(Self { t, o, h, l, c })
    }
}

/// Marker symbol for point-shaped series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    Circle,
    Rect,
    Triangle,
    Diamond,
    Pin,
    Arrow,
}

/// One named data series. The chart kind selects which data vector is read:
/// `values` for scalar kinds, `points` for XY kinds, `bars` for candlesticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// Explicit color; empty string means "assign from the palette".
    pub color: String,
    pub values: Vec<f64>,
    pub points: Vec<(f64, f64)>,
    pub bars: Vec<Ohlc>,
    pub symbol: Symbol,
    pub symbol_size: f64,
    /// Pictorial-bar repeat flag: tile the symbol instead of stretching it.
    pub repeat: bool,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            values: Vec::new(),
            points: Vec::new(),
            bars: Vec::new(),
            symbol: Symbol::default(),
            symbol_size: 10.0,
            repeat: false,
        }
    }

    pub fn with_values(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            values,
            ..Self::new(name)
        }
    }

    pub fn with_points(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            ..Self::new(name)
        }
    }

    pub fn from_bars(name: impl Into<String>, bars: Vec<Ohlc>) -> Self {
        Self {
            bars,
            ..Self::new(name)
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Legal value set of a dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DomainKind {
    Numeric { min: f64, max: f64 },
    Categorical(Vec<String>),
}

/// One axis/facet of a multi-axis chart (parallel coordinates).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    pub domain: DomainKind,
}

impl DimensionSpec {
    pub fn numeric(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            domain: DomainKind::Numeric { min, max },
        }
    }

    pub fn categorical(name: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            domain: DomainKind::Categorical(categories),
        }
    }
}

/// One cell of a multi-dimensional record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DimValue {
    Number(f64),
    Label(String),
}

/// The typed document a builder hands to the compiler. Owned exclusively by
/// the caller; replaced wholesale on every edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub title: String,
    pub series: Vec<Series>,
    pub axis_labels: AxisLabels,
    /// Declared dimensions for multi-axis kinds; empty otherwise.
    pub dimensions: Vec<DimensionSpec>,
    /// Records addressed by the declared dimensions (parallel coordinates).
    pub records: Vec<Vec<DimValue>>,
    /// Node forest for hierarchical kinds (tree, treemap, sunburst).
    pub hierarchy: Forest,
}

impl ChartDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }
}
