//! Reading whitespace-delimited integer pairs.
//!
//! Every line must hold exactly two integer tokens, `x` then `y`. A blank
//! line, a line that is not UTF-8, or any other token count is a parse
//! error naming the 1-based line number. The newline ending the last line
//! is optional.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::file_exists;
use crate::core::{Pair, Sample};
use crate::errors::{ConjugationError, Result};

/// Parse a single line into a pair.
pub fn parse_line(line: &str, line_number: usize) -> Result<Pair> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => {
            let x = parse_integer(x, line, line_number)?;
            let y = parse_integer(y, line, line_number)?;
            Ok(Pair::new(x, y))
        }
        other => Err(ConjugationError::parse(
            line_number,
            line.trim_end(),
            format!("expected 2 integers, found {} tokens", other.len()),
        )),
    }
}

fn parse_integer(token: &str, line: &str, line_number: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|e| {
        ConjugationError::parse(
            line_number,
            line.trim_end(),
            format!("invalid integer {token:?}: {e}"),
        )
    })
}

/// Decode one raw line, dropping a trailing `\r`.
fn decode_line(bytes: Vec<u8>, line_number: usize) -> Result<String> {
    let mut line = String::from_utf8(bytes).map_err(|e| {
        ConjugationError::parse(
            line_number,
            String::from_utf8_lossy(e.as_bytes()).trim_end(),
            format!("line is not valid UTF-8: {}", e.utf8_error()),
        )
    })?;
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Parse pairs from any buffered reader, in input order.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Sample> {
    let mut sample = Sample::new();
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line = decode_line(bytes?, idx + 1)?;
        sample.push(parse_line(&line, idx + 1)?);
    }
    Ok(sample)
}

/// Parse pairs from in-memory text.
pub fn parse_pairs(text: &str) -> Result<Sample> {
    read_pairs(text.as_bytes())
}

/// Load pairs from a file, in file order.
///
/// Fails with [`ConjugationError::InputNotFound`] before opening anything if
/// `path` is not an existing file.
pub fn read_sample(path: &Path) -> Result<Sample> {
    if !file_exists(path) {
        return Err(ConjugationError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let sample = read_pairs(BufReader::new(file))?;
    debug!(path = %path.display(), pairs = sample.len(), "loaded input pairs");
    Ok(sample)
}
