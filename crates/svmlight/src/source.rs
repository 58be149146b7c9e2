//! Line sources over byte readers.
//!
//! Lines are split on `\n` with the newline removed. Nothing else is
//! trimmed; a trailing `\r` is absorbed later by the whitespace tokenizer.

use std::io::{self, BufRead, Seek, SeekFrom};

use tracing::debug;

fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let n = reader.read_until(b'\n', buf)?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(n)
}

/// Every line of a reader, as owned byte buffers.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        ReaderLines {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = Vec::new();
        match read_line(&mut self.reader, &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(buf)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Lines of a byte window `[offset, offset + length)` of a seekable reader.
///
/// Follows scikit-learn's chunked-read contract:
/// - with `offset > 0`, reading starts at the first line boundary after
///   `offset` (the partial line under the offset is discarded);
/// - with `length > 0`, a line is read only if it starts at or before
///   `offset + length`, so the line crossing the mark is still yielded.
///
/// Consecutive windows that tile a file therefore yield each line once,
/// even windows narrower than a line.
#[derive(Debug)]
pub struct SlicedLines<R> {
    reader: R,
    position: u64,
    end: u64,
    done: bool,
}

impl<R: BufRead + Seek> SlicedLines<R> {
    /// Position `reader` for the window. `length == 0` reads to the end.
    pub fn new(mut reader: R, offset: u64, length: u64) -> io::Result<Self> {
        let (position, end) = if offset > 0 {
            reader.seek(SeekFrom::Start(offset))?;
            let mut partial = Vec::new();
            let skipped = read_line(&mut reader, &mut partial)? as u64;
            debug!(offset, skipped, "skipped to the first line boundary after offset");
            let end = if length > 0 { offset + length } else { 0 };
            (offset + skipped, end)
        } else {
            (reader.stream_position()?, length)
        };
        Ok(SlicedLines {
            reader,
            position,
            end,
            done: false,
        })
    }
}

impl<R: BufRead> Iterator for SlicedLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || (self.end > 0 && self.position > self.end) {
            return None;
        }
        let mut buf = Vec::new();
        match read_line(&mut self.reader, &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                self.position += n as u64;
                Some(Ok(buf))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TEXT: &[u8] = b"1 1:1\n2 2:2\n3 3:3\n4 4:4";

    fn sliced(offset: u64, length: u64) -> Vec<Vec<u8>> {
        SlicedLines::new(Cursor::new(TEXT), offset, length)
            .unwrap()
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn reader_lines_strip_newlines_only() {
        let lines: Vec<Vec<u8>> = ReaderLines::new(&b"a\r\n\nb"[..])
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec![b"a\r".to_vec(), b"".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn full_read_without_window() {
        assert_eq!(sliced(0, 0).len(), 4);
    }

    #[test]
    fn offset_skips_partial_line() {
        // offset 2 lands inside the first line
        let lines = sliced(2, 0);
        assert_eq!(lines, vec![b"2 2:2".to_vec(), b"3 3:3".to_vec(), b"4 4:4".to_vec()]);
    }

    #[test]
    fn offset_on_line_start_still_skips_that_line() {
        // byte 6 is the first byte of "2 2:2"; its remainder is discarded
        let lines = sliced(6, 0);
        assert_eq!(lines, vec![b"3 3:3".to_vec(), b"4 4:4".to_vec()]);
    }

    #[test]
    fn length_stops_after_crossing_line() {
        let lines = sliced(0, 3);
        assert_eq!(lines, vec![b"1 1:1".to_vec()]);

        // a line starting exactly on the mark belongs to this window
        let lines = sliced(0, 6);
        assert_eq!(lines, vec![b"1 1:1".to_vec(), b"2 2:2".to_vec()]);
    }

    #[test]
    fn window_inside_one_line_is_empty() {
        assert!(sliced(1, 2).is_empty());
    }

    #[test]
    fn windows_tile_the_file() {
        for chunk in 1..TEXT.len() as u64 {
            let mut all = Vec::new();
            let mut offset = 0;
            while offset < TEXT.len() as u64 {
                all.extend(sliced(offset, chunk));
                offset += chunk;
            }
            let expected: Vec<Vec<u8>> =
                TEXT.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
            assert_eq!(all, expected, "chunk size {}", chunk);
        }
    }
}
