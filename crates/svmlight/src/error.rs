/// Errors returned by svmlight-rs loaders.
///
/// Format errors carry the 1-based example index of the offending row,
/// counted over emitted rows only (blank and comment-only lines are not
/// counted).
#[derive(Debug, thiserror::Error)]
pub enum SvmLightError {
    /// Feature columns of a row are not strictly increasing.
    #[error("features are not in increasing order (example {example})")]
    OutOfOrderColumns {
        /// 1-based example index.
        example: usize,
    },

    /// A row contains column `0` while one-based indexing was requested.
    #[error("found column index 0 but indexing is one-based (example {example})")]
    ZeroIndexInOneBasedMode {
        /// 1-based example index.
        example: usize,
    },

    /// A token, label or query id could not be parsed.
    #[error("{message} (example {example})")]
    Malformed {
        /// 1-based example index.
        example: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// An I/O error occurred while reading lines.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parsed rows could not be assembled into a matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl SvmLightError {
    pub(crate) fn malformed(example: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            example,
            message: message.into(),
        }
    }

    /// Example index of the row that triggered a format error, if any.
    pub fn example(&self) -> Option<usize> {
        match self {
            Self::OutOfOrderColumns { example }
            | Self::ZeroIndexInOneBasedMode { example }
            | Self::Malformed { example, .. } => Some(*example),
            Self::Io(_) | Self::Matrix(_) => None,
        }
    }
}

impl From<std::convert::Infallible> for SvmLightError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Errors returned when assembling a [`CsrMatrix`](crate::matrix::CsrMatrix)
/// from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// `indptr` is empty or does not start at zero.
    #[error("row pointers must start with 0")]
    RowPtrStart,

    /// `indptr` decreases between two rows.
    #[error("row pointers not sorted at row {row}: {curr} > {next}")]
    RowPtrNotSorted {
        /// Row whose end pointer is smaller than its start.
        row: usize,
        /// Start pointer.
        curr: usize,
        /// End pointer.
        next: usize,
    },

    /// `indices` and `data` differ in length or disagree with `indptr`.
    #[error("length mismatch: {indices} indices, {data} values, last row pointer {last}")]
    LengthMismatch {
        /// Length of the column-index array.
        indices: usize,
        /// Length of the value array.
        data: usize,
        /// Last entry of `indptr`.
        last: usize,
    },

    /// A column index does not fit the declared column count.
    #[error("column index out of bounds: {col} >= {n_cols}")]
    ColumnOutOfBounds {
        /// Offending column index.
        col: usize,
        /// Declared column count.
        n_cols: usize,
    },

    /// The largest column leaves no room for a column count.
    #[error("column count overflows: largest column is {col}")]
    ColumnCountOverflow {
        /// Largest column index seen.
        col: usize,
    },
}

/// Shorthand for results carrying [`SvmLightError`].
pub type Result<T> = std::result::Result<T, SvmLightError>;
