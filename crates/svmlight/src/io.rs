//! Loaders for SVMLight / LIBSVM sparse text data.
//!
//! Format: `<label> <column>:<value> <column>:<value> ... # comment`, with an
//! optional `qid:<id>` token among the features. Semantics follow
//! scikit-learn's `load_svmlight_file`.

use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::comments::{strip_comments, try_strip_comments, Stripped};
use crate::error::{Result, SvmLightError};
use crate::label::{Label, LabelSet};
use crate::matrix::CsrMatrix;
use crate::parse::parse_line;
use crate::source::ReaderLines;
use crate::types::{Dataset, Indexing, LoadOptions, Task, TaskDataset};

// ─── Row accumulation ────────────────────────────────────────────────

/// Flat CSR arrays grown one row at a time.
struct RowAccumulator<L> {
    indexing: Indexing,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
    max_column: Option<usize>,
    labels: Vec<L>,
    query_ids: Option<Vec<Option<i64>>>,
}

impl<L: Label> RowAccumulator<L> {
    fn new(opts: &LoadOptions) -> Self {
        RowAccumulator {
            indexing: opts.indexing,
            indptr: vec![0],
            indices: Vec::new(),
            data: Vec::new(),
            max_column: None,
            labels: Vec::new(),
            query_ids: opts.query_id.then(Vec::new),
        }
    }

    fn push_line(&mut self, line: &[u8]) -> Result<()> {
        let example = self.labels.len() + 1;
        let indices = &mut self.indices;
        let data = &mut self.data;
        let max_column = &mut self.max_column;

        let row = parse_line::<L, _>(line, self.indexing, example, |column, value| {
            indices.push(column);
            data.push(value);
            *max_column = Some(max_column.map_or(column, |m| m.max(column)));
        })?;

        self.indptr.push(self.indices.len());
        self.labels.push(row.label);
        if let Some(query_ids) = self.query_ids.as_mut() {
            query_ids.push(row.qid);
        }
        Ok(())
    }

    fn finish(self) -> Result<Dataset<L>> {
        let matrix =
            CsrMatrix::from_accumulated(self.indptr, self.indices, self.data, self.max_column)?;
        Ok(Dataset {
            matrix,
            labels: self.labels,
            query_ids: self.query_ids,
        })
    }
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Feed comment-stripped lines through a fresh accumulator.
fn accumulate<L, I, B, E>(stripped: I, opts: &LoadOptions) -> Result<Dataset<L>>
where
    L: Label,
    I: Iterator<Item = std::result::Result<Stripped<B>, E>>,
    B: AsRef<[u8]>,
    SvmLightError: From<E>,
{
    let mut acc = RowAccumulator::<L>::new(opts);
    for line in stripped {
        let line = line?;
        if is_blank(&line) {
            continue;
        }
        acc.push_line(&line)?;
    }

    let dataset = acc.finish()?;
    debug!(
        task = L::TASK.as_str(),
        rows = dataset.matrix.n_rows(),
        cols = dataset.matrix.n_cols(),
        nnz = dataset.matrix.nnz(),
        "loaded svmlight data"
    );
    Ok(dataset)
}

// ─── Line loaders ────────────────────────────────────────────────────

/// Load rows from a fallible line source, stopping at the first error.
///
/// Lines must not contain their trailing newline. Comment-only, empty and
/// whitespace-only lines are skipped and do not count as examples.
pub fn try_load_lines<L, I, B, E>(lines: I, opts: &LoadOptions) -> Result<Dataset<L>>
where
    L: Label,
    I: IntoIterator<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    SvmLightError: From<E>,
{
    accumulate(try_strip_comments(lines), opts)
}

/// Load rows of any label kind from in-memory lines.
pub fn load_lines<L, I>(lines: I, opts: &LoadOptions) -> Result<Dataset<L>>
where
    L: Label,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    accumulate(strip_comments(lines).map(Ok::<_, Infallible>), opts)
}

/// Load a classification dataset: one signed integer label per row.
///
/// ```
/// use svmlight_rs::io::classification_from_lines;
/// use svmlight_rs::LoadOptions;
///
/// let ds = classification_from_lines(["-1 1:0.43 3:0.12 9:0.2"], &LoadOptions::default())?;
/// assert_eq!(ds.labels, vec![-1]);
/// assert_eq!(ds.matrix.indices(), &[0, 2, 8]);
/// # Ok::<(), svmlight_rs::SvmLightError>(())
/// ```
pub fn classification_from_lines<I>(lines: I, opts: &LoadOptions) -> Result<Dataset<i64>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    load_lines(lines, opts)
}

/// Load a regression dataset: one floating-point target per row.
pub fn regression_from_lines<I>(lines: I, opts: &LoadOptions) -> Result<Dataset<f64>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    load_lines(lines, opts)
}

/// Load a multilabel dataset: a sorted set of integer labels per row.
pub fn multilabel_from_lines<I>(lines: I, opts: &LoadOptions) -> Result<Dataset<LabelSet>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    load_lines(lines, opts)
}

/// Load from a fallible line source with the label kind chosen at runtime.
pub fn try_load_task<I, B, E>(lines: I, task: Task, opts: &LoadOptions) -> Result<TaskDataset>
where
    I: IntoIterator<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    SvmLightError: From<E>,
{
    Ok(match task {
        Task::Classification => try_load_lines::<i64, _, _, _>(lines, opts)?.into(),
        Task::Regression => try_load_lines::<f64, _, _, _>(lines, opts)?.into(),
        Task::Multilabel => try_load_lines::<LabelSet, _, _, _>(lines, opts)?.into(),
    })
}

/// Load in-memory lines with the label kind chosen at runtime.
pub fn load_task<I>(lines: I, task: Task, opts: &LoadOptions) -> Result<TaskDataset>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    Ok(match task {
        Task::Classification => load_lines::<i64, _>(lines, opts)?.into(),
        Task::Regression => load_lines::<f64, _>(lines, opts)?.into(),
        Task::Multilabel => load_lines::<LabelSet, _>(lines, opts)?.into(),
    })
}

// ─── Reader loaders ──────────────────────────────────────────────────

/// Load rows of any label kind from a buffered reader.
pub fn load_reader<L: Label>(reader: impl BufRead, opts: &LoadOptions) -> Result<Dataset<L>> {
    try_load_lines(ReaderLines::new(reader), opts)
}

pub fn classification_from_reader(
    reader: impl BufRead,
    opts: &LoadOptions,
) -> Result<Dataset<i64>> {
    load_reader(reader, opts)
}

pub fn regression_from_reader(reader: impl BufRead, opts: &LoadOptions) -> Result<Dataset<f64>> {
    load_reader(reader, opts)
}

pub fn multilabel_from_reader(
    reader: impl BufRead,
    opts: &LoadOptions,
) -> Result<Dataset<LabelSet>> {
    load_reader(reader, opts)
}

/// Load a whole file with the label kind chosen at runtime.
pub fn load_path(path: &Path, task: Task, opts: &LoadOptions) -> Result<TaskDataset> {
    let file = File::open(path)?;
    try_load_task(ReaderLines::new(BufReader::new(file)), task, opts)
}

// ─── Tests ───────────────────────────────────────────────────────────
