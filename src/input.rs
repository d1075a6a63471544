use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected two strings, got one. Pass both operands or pipe two lines on stdin")]
    MissingOperand,
    #[error("expected two input lines on stdin, got {0}")]
    ShortStdin(usize),
    #[error("failed to read stdin: {source}")]
    Io {
        #[source]
        source: io::Error,
    },
}

/// Resolves the pair to compare: both positional operands when present,
/// otherwise two lines read from stdin. A lone operand is a malformed
/// invocation, not a prompt to wait for more input.
pub fn read_pair(left: Option<&str>, right: Option<&str>) -> Result<(String, String), InputError> {
    match (left, right) {
        (Some(l), Some(r)) => Ok((l.to_string(), r.to_string())),
        (Some(_), None) | (None, Some(_)) => Err(InputError::MissingOperand),
        (None, None) => read_pair_from(io::stdin().lock()),
    }
}

// Takes any reader so tests can feed canned input.
pub fn read_pair_from<R: BufRead>(reader: R) -> Result<(String, String), InputError> {
    let mut lines = Vec::with_capacity(2);
    for line in reader.lines().take(2) {
        let line = line.map_err(|err| InputError::Io { source: err })?;
        lines.push(line.trim_end_matches('\r').to_string());
    }

    match lines.len() {
        2 => {
            let right = lines.pop().expect("two lines collected");
            let left = lines.pop().expect("two lines collected");
            Ok((left, right))
        }
        count => Err(InputError::ShortStdin(count)),
    }
}
