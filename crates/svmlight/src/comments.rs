//! Comment stripping.
//!
//! Everything from the first `#` on a line is a comment. Lines that are
//! empty once the comment is gone are dropped; whitespace is left alone.

use std::ops::Deref;

/// Length of the non-comment prefix of `line`.
pub fn content_len(line: &[u8]) -> usize {
    line.iter().position(|&b| b == b'#').unwrap_or(line.len())
}

/// A line with its comment cut off.
///
/// Keeps the original buffer and exposes only the prefix before `#`.
#[derive(Debug, Clone)]
pub struct Stripped<B> {
    line: B,
    len: usize,
}

impl<B: AsRef<[u8]>> Stripped<B> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.line.as_ref()[..self.len]
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for Stripped<B> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<B: AsRef<[u8]>> Deref for Stripped<B> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

fn strip<B: AsRef<[u8]>>(line: B) -> Option<Stripped<B>> {
    let len = content_len(line.as_ref());
    if len == 0 {
        None
    } else {
        Some(Stripped { line, len })
    }
}

/// Iterator returned by [`strip_comments`].
#[derive(Debug, Clone)]
pub struct StripComments<I> {
    inner: I,
}

impl<I, B> Iterator for StripComments<I>
where
    I: Iterator<Item = B>,
    B: AsRef<[u8]>,
{
    type Item = Stripped<B>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(strip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Strip comments from every line and drop lines left empty.
pub fn strip_comments<I>(lines: I) -> StripComments<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    StripComments {
        inner: lines.into_iter(),
    }
}

/// Iterator returned by [`try_strip_comments`].
#[derive(Debug, Clone)]
pub struct TryStripComments<I> {
    inner: I,
}

impl<I, B, E> Iterator for TryStripComments<I>
where
    I: Iterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    type Item = Result<Stripped<B>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(line) => {
                    if let Some(stripped) = strip(line) {
                        return Some(Ok(stripped));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Like [`strip_comments`] for fallible line sources; errors pass through.
pub fn try_strip_comments<I, B, E>(lines: I) -> TryStripComments<I::IntoIter>
where
    I: IntoIterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    TryStripComments {
        inner: lines.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(lines: &[&[u8]]) -> Vec<Vec<u8>> {
        strip_comments(lines.iter().copied())
            .map(|l| l.as_bytes().to_vec())
            .collect()
    }

    #[test]
    fn trailing_comment_is_removed() {
        let out = collect(&[b"1 1:0.5 # trailing junk 3:9"]);
        assert_eq!(out, vec![b"1 1:0.5 ".to_vec()]);
    }

    #[test]
    fn empty_and_comment_only_lines_are_dropped() {
        let out = collect(&[b"", b"# header", b"1 2:3", b"#", b"0"]);
        assert_eq!(out, vec![b"1 2:3".to_vec(), b"0".to_vec()]);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let out = collect(&[b"   # indented comment", b" 6:0.01"]);
        assert_eq!(out, vec![b"   ".to_vec(), b" 6:0.01".to_vec()]);
    }

    #[test]
    fn owned_lines_are_cut_in_place() {
        let stripped = strip_comments(vec![b"2 1:1 # note".to_vec()]).next().unwrap();
        assert_eq!(&*stripped, b"2 1:1 ");
        assert_eq!(content_len(b"2 1:1 # note"), 6);
    }

    #[test]
    fn fallible_source_passes_errors_through() {
        let lines: Vec<Result<&[u8], &str>> =
            vec![Ok(&b"# skip"[..]), Err("boom"), Ok(&b"1 1:2"[..])];
        let out: Vec<_> = try_strip_comments(lines)
            .map(|r| r.map(|l| l.as_bytes().to_vec()))
            .collect();
        assert_eq!(out, vec![Err("boom"), Ok(b"1 1:2".to_vec())]);
    }
}
