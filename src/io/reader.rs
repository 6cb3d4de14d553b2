//! Point-stream reader.
//!
//! Input is a point count followed by that many whitespace-separated
//! coordinate triples:
//!
//! ```text
//! 2
//! 1.0 2.0 3.0
//! 4.0 5.0 6.0
//! ```
//!
//! Tokens may be split across lines arbitrarily. Anything after the last
//! declared triple is ignored. A malformed count, a non-numeric coordinate or
//! a stream that ends early fails with [`LinalgError::Parse`]; no partially
//! filled result is returned.

use crate::config::options::ReadOptions;
use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::vector::Vector;
use std::io::BufRead;
use std::str::FromStr;

// Upper bound on up-front allocation; larger counts grow as points arrive.
const PREALLOC_POINTS: usize = 4096;

/// Whitespace tokenizer that tracks the current line for error messages.
struct Tokens<R> {
    lines: std::io::Lines<R>,
    line: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, LinalgError> {
        loop {
            if let Some(tok) = self.pending.next() {
                return Ok(Some(tok));
            }
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    let line = line?;
                    self.line += 1;
                    self.pending = line
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }
    }

    fn parse_next<T: FromStr>(&mut self, what: &str) -> Result<T, LinalgError> {
        let tok = self.next_token()?.ok_or_else(|| LinalgError::Parse {
            line: self.line,
            msg: format!("unexpected end of input, expected {}", what),
        })?;
        tok.parse().map_err(|_| LinalgError::Parse {
            line: self.line,
            msg: format!("invalid {} `{}`", what, tok),
        })
    }

    fn triple<T: Scalar + FromStr>(&mut self) -> Result<Vector<T, 3>, LinalgError> {
        let x = self.parse_next("x coordinate")?;
        let y = self.parse_next("y coordinate")?;
        let z = self.parse_next("z coordinate")?;
        Ok(Vector::new([x, y, z]))
    }
}

/// Read one coordinate triple.
///
/// Tokens left on the line holding the third coordinate are discarded.
pub fn read_row<T, R>(reader: R) -> Result<Vector<T, 3>, LinalgError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    Tokens::new(reader).triple()
}

/// Read a point count followed by that many triples.
pub fn read_points<T, R>(reader: R) -> Result<Vec<Vector<T, 3>>, LinalgError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    read_points_with(reader, &ReadOptions::default())
}

/// [`read_points`] with explicit limits.
pub fn read_points_with<T, R>(reader: R, opts: &ReadOptions) -> Result<Vec<Vector<T, 3>>, LinalgError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let mut tokens = Tokens::new(reader);
    let count: usize = tokens.parse_next("point count")?;
    if let Some(max) = opts.max_points {
        if count > max {
            log::warn!("point count {} exceeds configured limit {}", count, max);
            return Err(LinalgError::Parse {
                line: tokens.line,
                msg: format!("point count {} exceeds limit {}", count, max),
            });
        }
    }
    log::debug!("reading {} points", count);

    let mut points = Vec::with_capacity(count.min(PREALLOC_POINTS));
    for _ in 0..count {
        points.push(tokens.triple()?);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_may_span_lines() {
        let input = "2 1 2\n3\n4 5 6";
        let pts: Vec<Vector<i64, 3>> = read_points(input.as_bytes()).unwrap();
        assert_eq!(pts, vec![Vector::new([1, 2, 3]), Vector::new([4, 5, 6])]);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let input = "2\n1.0 2.0 3.0\n4.0 oops 6.0\n";
        match read_points::<f64, _>(input.as_bytes()) {
            Err(LinalgError::Parse { line, msg }) => {
                assert_eq!(line, 3);
                assert!(msg.contains("oops"), "{}", msg);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
