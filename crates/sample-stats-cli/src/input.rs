use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::BufRead;

#[derive(Debug)]
pub(crate) enum InputError {
    Io(io::Error),
    /// Token that doesn't parse as a number, with its 1-based line
    InvalidNumber { line: usize, token: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "{e}"),
            InputError::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a number")
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::InvalidNumber { .. } => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Read whitespace separated numbers, in order.
pub(crate) fn read_values(r: impl BufRead) -> Result<Vec<f64>, InputError> {
    let mut values = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumber {
                    line: i + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_columns() {
        let values = read_values(Cursor::new("2 4\t4\n\n4 5 5\n  7\n9")).unwrap();
        assert_eq!(values, vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn empty_input() {
        assert!(read_values(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn reports_bad_token() {
        let err = read_values(Cursor::new("1 2\n3 abc 4\n")).unwrap_err();
        match err {
            InputError::InvalidNumber { line, ref token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.to_string(), "line 2: 'abc' is not a number");
    }

    #[test]
    fn accepts_signs_and_exponents() {
        let values = read_values(Cursor::new("-1.5 +2 1e3 -0")).unwrap();
        assert_eq!(values, vec![-1.5, 2.0, 1000.0, 0.0]);
    }
}
