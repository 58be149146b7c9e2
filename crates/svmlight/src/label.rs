//! Label strategies.
//!
//! Each task reads the label field of a row differently. The set of
//! strategies is closed: [`Label`] is sealed and implemented for `i64`
//! (classification), `f64` (regression) and [`LabelSet`] (multilabel).

use std::ops::Deref;
use std::str::FromStr;

use crate::parse::trim_ascii;
use crate::types::Task;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for super::LabelSet {}
}

/// A per-row label value.
pub trait Label: sealed::Sealed + Sized {
    /// Task this label kind belongs to.
    const TASK: Task;

    /// Parse a label field. The field has no surrounding whitespace and is
    /// never empty; empty fields are mapped to [`Label::unlabeled`].
    fn parse_field(field: &[u8]) -> Result<Self, String>;

    /// Value used for rows that carry no label.
    ///
    /// For classification this is `0`, so an unlabeled row cannot be told
    /// apart from a row of class `0`. Load with the regression (`NaN`) or
    /// multilabel (empty set) kind when that difference matters.
    fn unlabeled() -> Self;

    /// Parse a raw label field, mapping empty or all-blank input to
    /// [`Label::unlabeled`].
    fn from_field(field: &[u8]) -> Result<Self, String> {
        let field = trim_ascii(field);
        if field.is_empty() {
            Ok(Self::unlabeled())
        } else {
            Self::parse_field(field)
        }
    }
}

fn parse_number<T: FromStr>(field: &[u8]) -> Result<T, String> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .ok_or_else(|| format!("invalid label: {}", String::from_utf8_lossy(field)))
}

impl Label for i64 {
    const TASK: Task = Task::Classification;

    fn parse_field(field: &[u8]) -> Result<Self, String> {
        parse_number(field)
    }

    fn unlabeled() -> Self {
        0
    }
}

impl Label for f64 {
    const TASK: Task = Task::Regression;

    fn parse_field(field: &[u8]) -> Result<Self, String> {
        parse_number(field)
    }

    fn unlabeled() -> Self {
        f64::NAN
    }
}

/// Ascending-sorted integer labels of one multilabel row.
///
/// Repeated labels are kept: `2,2` yields `[2, 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LabelSet(Vec<i64>);

impl LabelSet {
    pub fn new() -> Self {
        LabelSet(Vec::new())
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }
}

impl Deref for LabelSet {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for LabelSet {
    fn from(mut labels: Vec<i64>) -> Self {
        labels.sort();
        LabelSet(labels)
    }
}

impl FromIterator<i64> for LabelSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        LabelSet::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Label for LabelSet {
    const TASK: Task = Task::Multilabel;

    fn parse_field(field: &[u8]) -> Result<Self, String> {
        field
            .split(|&b| b == b',')
            .map(trim_ascii)
            .filter(|segment| !segment.is_empty())
            .map(parse_number::<i64>)
            .collect::<Result<Vec<_>, _>>()
            .map(LabelSet::from)
    }

    fn unlabeled() -> Self {
        LabelSet::new()
    }
}
