//! scikit-learn loader boundary.
//!
//! Produces the raw tuple scikit-learn's internal `_load_svmlight_file`
//! returns (values, column indices, row pointers, labels, query ids) from a
//! byte window of a seekable reader.

use std::io::{BufRead, Seek};

use crate::error::SvmLightError;
use crate::io::try_load_lines;
use crate::label::LabelSet;
use crate::source::SlicedLines;
use crate::types::{Dataset, Indexing, LoadOptions};

/// Any loader failure, reduced to its message.
///
/// scikit-learn reports malformed input as a plain `ValueError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValueError(pub String);

impl From<SvmLightError> for ValueError {
    fn from(err: SvmLightError) -> Self {
        ValueError(err.to_string())
    }
}

/// Arguments of one scikit-learn load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawRequest {
    pub multilabel: bool,
    pub zero_based: bool,
    pub query_id: bool,
    /// Byte offset to start from; `0` reads from the current position.
    pub offset: u64,
    /// Bytes to read past `offset`; `0` reads to the end.
    pub length: u64,
}

/// Labels in the shape scikit-learn expects.
#[derive(Debug, Clone, PartialEq)]
pub enum RawLabels {
    Targets(Vec<f64>),
    Multilabel(Vec<LabelSet>),
}

/// Raw arrays handed back across the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSvmLight {
    pub data: Vec<f64>,
    pub indices: Vec<i64>,
    pub indptr: Vec<i64>,
    pub labels: RawLabels,
    /// Ids of the rows that carry a `qid` token, in row order. Empty unless
    /// `query_id` was requested.
    pub query_ids: Vec<i64>,
}

/// Load a byte window of `reader` and repack it for scikit-learn.
///
/// scikit-learn asks for zero-based parsing and then subtracts one from
/// every column itself when the caller wanted one-based data. Column
/// indices are therefore shifted up by one whenever `zero_based` is false,
/// so that its own adjustment lands back on zero-based columns.
pub fn load_svmlight_raw<R>(reader: R, request: RawRequest) -> Result<RawSvmLight, ValueError>
where
    R: BufRead + Seek,
{
    let lines = SlicedLines::new(reader, request.offset, request.length)
        .map_err(|e| ValueError::from(SvmLightError::from(e)))?;
    let opts = LoadOptions {
        indexing: Indexing::from_zero_based(request.zero_based),
        query_id: request.query_id,
    };

    if request.multilabel {
        let ds: Dataset<LabelSet> = try_load_lines(lines, &opts)?;
        Ok(repack(ds, request.zero_based, RawLabels::Multilabel))
    } else {
        let ds: Dataset<f64> = try_load_lines(lines, &opts)?;
        Ok(repack(ds, request.zero_based, RawLabels::Targets))
    }
}

fn repack<L>(
    ds: Dataset<L>,
    zero_based: bool,
    wrap: impl FnOnce(Vec<L>) -> RawLabels,
) -> RawSvmLight {
    let shift = if zero_based { 0 } else { 1 };
    let (indptr, indices, data) = ds.matrix.into_parts();
    RawSvmLight {
        data,
        indices: indices.into_iter().map(|c| c as i64 + shift).collect(),
        indptr: indptr.into_iter().map(|p| p as i64).collect(),
        labels: wrap(ds.labels),
        query_ids: ds.query_ids.into_iter().flatten().flatten().collect(),
    }
}
