// File: crates/chartsmith-core/src/codec.rs
// Summary: Pure text serialization of a (document, options) pair.
// Notes:
// - Writing the text anywhere is the caller's concern; this module only
//   produces and consumes strings.

use serde::{Deserialize, Serialize};

use crate::document::ChartDocument;
use crate::error::Result;
use crate::options::RenderOptions;

/// Owned form of a saved chart, as read back by `deserialize`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedChart {
    pub document: ChartDocument,
    pub options: RenderOptions,
}

#[derive(Serialize)]
struct SavedChartRef<'a> {
    document: &'a ChartDocument,
    options: &'a RenderOptions,
}

/// Serialize a document/options pair to JSON text.
pub fn serialize(document: &ChartDocument, options: &RenderOptions) -> Result<String> {
    let saved = SavedChartRef { document, options };
    Ok(serde_json::to_string_pretty(&saved)?)
}

/// Read back text produced by `serialize`.
pub fn deserialize(text: &str) -> Result<SavedChart> {
    Ok(serde_json::from_str(text)?)
}
