use crate::label::LabelSet;
use crate::matrix::CsrMatrix;

/// Column numbering used by a file.
///
/// SVMLight files are natively one-based; columns are always stored
/// zero-based in the returned matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Indexing {
    /// Columns start at 1; column `0` is rejected.
    #[default]
    OneBased,
    /// Columns start at 0 and are stored as-is.
    ZeroBased,
}

impl Indexing {
    /// Map a `zero_based` flag onto an indexing mode.
    pub fn from_zero_based(zero_based: bool) -> Self {
        if zero_based {
            Indexing::ZeroBased
        } else {
            Indexing::OneBased
        }
    }

    pub fn is_zero_based(self) -> bool {
        self == Indexing::ZeroBased
    }
}

/// Options shared by every loader.
///
/// Defaults match scikit-learn's `load_svmlight_file`: one-based columns and
/// no query ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Column numbering of the input.
    pub indexing: Indexing,
    /// Whether to collect one query id per row.
    pub query_id: bool,
}

/// Kind of label carried by each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Signed integer class labels.
    Classification,
    /// Floating-point targets.
    Regression,
    /// Comma-separated sets of integer labels.
    Multilabel,
}

impl Task {
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Classification => "classification",
            Task::Regression => "regression",
            Task::Multilabel => "multilabel",
        }
    }
}

impl std::str::FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classification" => Ok(Task::Classification),
            "regression" => Ok(Task::Regression),
            "multilabel" => Ok(Task::Multilabel),
            _ => Err(format!("unknown task: {}", s)),
        }
    }
}

/// A loaded dataset: the feature matrix, one label per row and, when
/// requested, one query id per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    /// Feature values in compressed-row form.
    pub matrix: CsrMatrix,
    /// Label per row.
    pub labels: Vec<L>,
    /// Query id per row, present only when [`LoadOptions::query_id`] is set.
    /// Rows without a `qid` token hold `None`.
    pub query_ids: Option<Vec<Option<i64>>>,
}

impl<L> Dataset<L> {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Labels of a dataset whose task was chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Labels {
    Classification(Vec<i64>),
    Regression(Vec<f64>),
    Multilabel(Vec<LabelSet>),
}

impl Labels {
    pub fn len(&self) -> usize {
        match self {
            Labels::Classification(v) => v.len(),
            Labels::Regression(v) => v.len(),
            Labels::Multilabel(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn task(&self) -> Task {
        match self {
            Labels::Classification(_) => Task::Classification,
            Labels::Regression(_) => Task::Regression,
            Labels::Multilabel(_) => Task::Multilabel,
        }
    }
}

/// A dataset whose task was chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDataset {
    pub matrix: CsrMatrix,
    pub labels: Labels,
    pub query_ids: Option<Vec<Option<i64>>>,
}

impl From<Dataset<i64>> for TaskDataset {
    fn from(ds: Dataset<i64>) -> Self {
        TaskDataset {
            matrix: ds.matrix,
            labels: Labels::Classification(ds.labels),
            query_ids: ds.query_ids,
        }
    }
}

impl From<Dataset<f64>> for TaskDataset {
    fn from(ds: Dataset<f64>) -> Self {
        TaskDataset {
            matrix: ds.matrix,
            labels: Labels::Regression(ds.labels),
            query_ids: ds.query_ids,
        }
    }
}

impl From<Dataset<LabelSet>> for TaskDataset {
    fn from(ds: Dataset<LabelSet>) -> Self {
        TaskDataset {
            matrix: ds.matrix,
            labels: Labels::Multilabel(ds.labels),
            query_ids: ds.query_ids,
        }
    }
}
