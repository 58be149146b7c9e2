//! Line parsing.
//!
//! A content line is `<label> <token> <token> ...` where each token is either
//! `column:value` or `qid:id`. Columns must be strictly increasing once
//! normalized to zero-based numbering.

use crate::error::{Result, SvmLightError};
use crate::label::Label;
use crate::types::Indexing;

/// Largest column number accepted in a file.
///
/// Columns are handed out as `i64` at the scikit-learn boundary, and the
/// column count is the largest column plus one.
pub const MAX_COLUMN_INDEX: usize = if usize::BITS >= 64 {
    i64::MAX as usize - 1
} else {
    usize::MAX - 1
};

/// Strip leading and trailing ASCII whitespace.
pub(crate) fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Tokens separated by runs of ASCII whitespace.
pub(crate) fn split_whitespace(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}

fn lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn parse_ascii<T: std::str::FromStr>(bytes: &[u8]) -> Option<T> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

/// Split a line into its label field and the remaining feature text.
///
/// A label field that contains `:` is really a feature token: the line is
/// unlabeled and `None` is returned for the label, with the field handed
/// back as the first token.
fn split_label(line: &[u8]) -> (Option<&[u8]>, Option<&[u8]>, &[u8]) {
    let (field, rest) = match line.iter().position(|b| b.is_ascii_whitespace()) {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, &line[line.len()..]),
    };
    if field.contains(&b':') {
        (None, Some(field), rest)
    } else {
        (Some(field), None, rest)
    }
}

/// Label and query id of a parsed line; features go to the caller's sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary<L> {
    pub label: L,
    /// Last `qid` seen on the line.
    pub qid: Option<i64>,
}

/// Parse one comment-stripped content line.
///
/// Every feature is passed to `on_feature` as a zero-based `(column, value)`
/// pair, in line order. `example` is the 1-based row position reported in
/// errors.
pub fn parse_line<L, F>(
    line: &[u8],
    indexing: Indexing,
    example: usize,
    mut on_feature: F,
) -> Result<LineSummary<L>>
where
    L: Label,
    F: FnMut(usize, f64),
{
    let (label_field, first_token, rest) = split_label(line);

    let mut qid = None;
    let mut last_column: Option<usize> = None;

    for token in first_token.into_iter().chain(split_whitespace(rest)) {
        let colon = token.iter().position(|&b| b == b':').ok_or_else(|| {
            SvmLightError::malformed(
                example,
                format!("expected column:value, got: {}", lossy(token)),
            )
        })?;
        let (key, value) = (&token[..colon], &token[colon + 1..]);

        if key == b"qid" {
            let id = parse_ascii::<i64>(value).ok_or_else(|| {
                SvmLightError::malformed(example, format!("invalid qid: {}", lossy(value)))
            })?;
            qid = Some(id);
            continue;
        }

        let raw: usize = parse_ascii(key).ok_or_else(|| {
            SvmLightError::malformed(example, format!("invalid column index: {}", lossy(key)))
        })?;
        if raw > MAX_COLUMN_INDEX {
            return Err(SvmLightError::malformed(
                example,
                format!("column index {} exceeds limit ({})", raw, MAX_COLUMN_INDEX),
            ));
        }
        let column = match indexing {
            Indexing::ZeroBased => raw,
            Indexing::OneBased => raw
                .checked_sub(1)
                .ok_or(SvmLightError::ZeroIndexInOneBasedMode { example })?,
        };
        if last_column.is_some_and(|prev| column <= prev) {
            return Err(SvmLightError::OutOfOrderColumns { example });
        }
        last_column = Some(column);

        let value: f64 = parse_ascii(value).ok_or_else(|| {
            SvmLightError::malformed(example, format!("invalid feature value: {}", lossy(value)))
        })?;
        on_feature(column, value);
    }

    let label = match label_field {
        Some(field) => {
            L::from_field(field).map_err(|msg| SvmLightError::malformed(example, msg))?
        }
        None => L::unlabeled(),
    };

    Ok(LineSummary { label, qid })
}
