// File: crates/chartsmith-core/src/lib.rs
// Summary: Core library entry point; exports the chart-definition pipeline API.

pub mod boundary;
pub mod codec;
pub mod compile;
pub mod document;
pub mod error;
pub mod options;
pub mod palette;
pub mod spec;
pub mod stats;
pub mod tree;

pub use boundary::{BoundaryState, FailureBoundary};
pub use codec::{deserialize, serialize, SavedChart};
pub use compile::compile;
pub use document::{AxisLabels, ChartDocument, DimValue, DimensionSpec, DomainKind, Ohlc, Series, Symbol};
pub use error::{PipelineError, Result};
pub use options::{ChartKind, ColorScheme, RenderOptions, SortOrder};
pub use spec::{AxisSpec, LegendSpec, PointContext, RenderSpec, SeriesData, SeriesSpec, TooltipResolver};
pub use stats::{encode_dimension, five_number_summary, moving_average, outliers, FiveNumberSummary};
pub use tree::{insert_child_at_path, update_at_path, Forest, Mutation, MutationOutcome, TreeNode};
