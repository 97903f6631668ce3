use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::EigenvalueSeries;

/// Lines starting with one of these are xvg comments (`#`) or
/// xmgrace directives (`@`).
pub const METADATA_MARKERS: [char; 2] = ['#', '@'];

/// Errors that can occur while loading an eigenvalue file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: '{token}' is not a number")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load eigenvalues from a GROMACS `.xvg` file.
///
/// Layout handled (as written by `gmx covar`):
///
/// ```text
/// # comment lines
/// @    title "Eigenvalues of the covariance matrix"
///          1   0.5621
///          2   0.2230
/// ```
///
/// The second whitespace-separated column is the eigenvalue; anything after
/// it is ignored.
pub fn load_eigenvalues(path: &Path) -> Result<EigenvalueSeries, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_eigenvalues(BufReader::new(file))
}

/// Parse eigenvalues from any buffered reader.
///
/// * `#` / `@` lines are skipped whatever they contain.
/// * Lines with fewer than two tokens (blank lines included) are skipped.
/// * A second token that is not a float aborts the whole load.
pub fn parse_eigenvalues<R: BufRead>(reader: R) -> Result<EigenvalueSeries, LoadError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        if line.starts_with(&METADATA_MARKERS[..]) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(_index), Some(token)) = (tokens.next(), tokens.next()) else {
            log::debug!("line {line_no}: fewer than two columns, skipped");
            continue;
        };

        let value = token.parse::<f64>().map_err(|source| LoadError::Parse {
            line: line_no,
            token: token.to_string(),
            source,
        })?;
        values.push(value);
    }

    Ok(EigenvalueSeries::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> Result<EigenvalueSeries, LoadError> {
        parse_eigenvalues(Cursor::new(text))
    }

    #[test]
    fn skips_metadata_and_reads_second_column() {
        let series = parse("# comment\n@ comment\n1 10.0\n2 5.0\n3 5.0\n").unwrap();
        assert_eq!(series.values(), &[10.0, 5.0, 5.0]);
    }

    #[test]
    fn metadata_lines_never_contribute() {
        let series = parse("# 1 2.0\n@ 3 4.0\n@TYPE xy\n#\n1 1.5\n").unwrap();
        assert_eq!(series.values(), &[1.5]);
    }

    #[test]
    fn single_token_and_blank_lines_are_skipped() {
        let series = parse("1 2.5\n42\n\n   \n2 1.25\n").unwrap();
        assert_eq!(series.values(), &[2.5, 1.25]);
    }

    #[test]
    fn trailing_columns_are_ignored() {
        let series = parse("1   3.0   99.0 extra\n").unwrap();
        assert_eq!(series.values(), &[3.0]);
    }

    #[test]
    fn crlf_line_endings() {
        let series = parse("# header\r\n1 4.0\r\n2 1.0\r\n").unwrap();
        assert_eq!(series.values(), &[4.0, 1.0]);
    }

    #[test]
    fn value_is_parsed_exactly() {
        let series = parse("1 0.123456789012345\n").unwrap();
        assert_eq!(series.values()[0], "0.123456789012345".parse::<f64>().unwrap());
    }

    #[test]
    fn non_numeric_second_token_fails() {
        let err = parse("1 10.0\n2 abc\n3 1.0\n").unwrap_err();
        match err {
            LoadError::Parse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn indented_marker_is_not_metadata() {
        // Only a marker in the first column marks a metadata line.
        let err = parse("  # not a comment\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn no_data_lines_yields_empty_series() {
        let series = parse("# only\n@ metadata\n").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn loads_from_file_idempotently() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# gmx covar").unwrap();
        writeln!(file, "@    title \"Eigenvalues\"").unwrap();
        writeln!(file, "1 0.75").unwrap();
        writeln!(file, "2 0.25").unwrap();
        file.flush().unwrap();

        let first = load_eigenvalues(file.path()).unwrap();
        let second = load_eigenvalues(file.path()).unwrap();
        assert_eq!(first.values(), &[0.75, 0.25]);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eigenval.xvg");
        let err = load_eigenvalues(&path).unwrap_err();
        match &err {
            LoadError::Open { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected open error, got {other:?}"),
        }
        assert!(err.to_string().contains("eigenval.xvg"));
    }
}
