//! CARMEN-style log reading.
//!
//! Extracts laser sweeps and the matching odometry poses from a robot log.
//! Only `FLASER` records are consumed; every other line (parameters,
//! comments, `ODOM` records) is skipped.
//!
//! # Record Format
//!
//! ```text
//! FLASER n r1 ... rn x y theta ...
//! ```
//!
//! `n` range readings in meters, then the laser pose (x, y, theta).
//! Trailing fields (robot pose, timestamps, host) are ignored.

use std::path::Path;

use thiserror::Error;

use crate::core::types::{Pose2D, RangeScan};

/// Failure while reading or parsing a log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Read a CARMEN log file into aligned pose and scan sequences.
///
/// The sequences are index-aligned: `poses[i]` is the pose at which
/// `scans[i]` was taken.
pub fn read_log<P: AsRef<Path>>(path: P) -> Result<(Vec<Pose2D>, Vec<RangeScan>), LogError> {
    let contents = std::fs::read_to_string(path)?;
    parse_log(&contents)
}

/// Parse CARMEN log contents. See [`read_log`].
pub fn parse_log(contents: &str) -> Result<(Vec<Pose2D>, Vec<RangeScan>), LogError> {
    let mut poses = Vec::new();
    let mut scans = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("FLASER") {
            continue;
        }

        let count: usize = next_field(&mut fields, line_no, "reading count")?
            .parse()
            .map_err(|_| LogError::Malformed {
                line: line_no,
                reason: "reading count is not an integer".into(),
            })?;

        let mut ranges = Vec::with_capacity(count);
        for i in 0..count {
            let field = next_field(&mut fields, line_no, "range reading")?;
            let range: f32 = field.parse().map_err(|_| LogError::Malformed {
                line: line_no,
                reason: format!("range reading {} is not a number: {:?}", i, field),
            })?;
            ranges.push(range);
        }

        let mut pose = [0.0f32; 3];
        for (i, name) in ["x", "y", "theta"].iter().enumerate() {
            let field = next_field(&mut fields, line_no, name)?;
            pose[i] = field.parse().map_err(|_| LogError::Malformed {
                line: line_no,
                reason: format!("{} is not a number: {:?}", name, field),
            })?;
        }

        poses.push(Pose2D::new(pose[0], pose[1], pose[2]));
        scans.push(RangeScan::new(ranges));
    }

    Ok((poses, scans))
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<&'a str, LogError> {
    fields.next().ok_or_else(|| LogError::Malformed {
        line,
        reason: format!("missing {}", what),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_single_record() {
        let log = "FLASER 3 1.5 2.0 2.5 4.0 5.0 0.5 4.1 5.1 0.5 0.1 host 0.1\n";
        let (poses, scans) = parse_log(log).unwrap();

        assert_eq!(poses.len(), 1);
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].ranges, vec![1.5, 2.0, 2.5]);
        assert_relative_eq!(poses[0].x, 4.0);
        assert_relative_eq!(poses[0].y, 5.0);
        assert_relative_eq!(poses[0].theta, 0.5);
    }

    #[test]
    fn test_non_flaser_lines_skipped() {
        let log = "\
# robot log
PARAM laser_max_range 50.0
ODOM 1.0 2.0 0.0 0.5 0.0 0.0 0.1
FLASER 2 1.0 2.0 0.0 0.0 0.0 0.0 0.0 0.0 0.1 host 0.1
RAWLASER1 junk
FLASER 2 3.0 4.0 1.0 1.0 0.1 1.0 1.0 0.1 0.2 host 0.2
";
        let (poses, scans) = parse_log(log).unwrap();
        assert_eq!(poses.len(), 2);
        assert_eq!(scans[1].ranges, vec![3.0, 4.0]);
    }

    #[test]
    fn test_truncated_record_reports_line() {
        let log = "FLASER 2 1.0\nFLASER 5 1 2 3 4 5 0 0 0\n";
        match parse_log(log) {
            Err(LogError::Malformed { line: 1, .. }) => {}
            other => panic!("expected malformed line 1, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_reading_count_reports_line() {
        let log = "\nFLASER two 1.0 2.0\n";
        match parse_log(log) {
            Err(LogError::Malformed { line: 2, reason }) => {
                assert!(reason.contains("count"));
            }
            other => panic!("expected malformed line 2, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_range_rejected() {
        let log = "FLASER 2 1.0 oops 0.0 0.0 0.0\n";
        assert!(matches!(
            parse_log(log),
            Err(LogError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_log_yields_empty_sequences() {
        let (poses, scans) = parse_log("").unwrap();
        assert!(poses.is_empty());
        assert!(scans.is_empty());
    }

    #[test]
    fn test_read_log_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "FLASER 1 7.5 2.0 3.0 -0.5 2.0 3.0 -0.5 0.1 host 0.1").unwrap();

        let (poses, scans) = read_log(file.path()).unwrap();
        assert_eq!(poses.len(), 1);
        assert_relative_eq!(scans[0].ranges[0], 7.5);
        assert_relative_eq!(poses[0].theta, -0.5);
    }

    #[test]
    fn test_read_log_missing_file_is_io_error() {
        let result = read_log("/nonexistent/robot.log");
        assert!(matches!(result, Err(LogError::Io(_))));
    }
}
