use std::io::Write;
use std::path::PathBuf;

use censor_core::{AggregateStats, CensorError, Result};

/// Where the statistics report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsSink {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl StatsSink {
    /// Interpret a `--stats` value; `stdout` and `stderr` name the streams
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("stdout") => StatsSink::Stdout,
            Some("stderr") => StatsSink::Stderr,
            Some(path) => StatsSink::File(PathBuf::from(path)),
        }
    }

    pub fn write_report(&self, stats: &AggregateStats) -> Result<()> {
        let report = stats.report();
        match self {
            StatsSink::Stdout => write_stream(std::io::stdout().lock(), "<stdout>", &report),
            StatsSink::Stderr => write_stream(std::io::stderr().lock(), "<stderr>", &report),
            StatsSink::File(path) => {
                std::fs::write(path, report).map_err(|e| CensorError::io(path, e))
            }
        }
    }
}

fn write_stream(mut stream: impl Write, name: &str, report: &str) -> Result<()> {
    stream
        .write_all(report.as_bytes())
        .and_then(|_| stream.flush())
        .map_err(|e| CensorError::io(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use censor_core::{Category, DetectionResult};

    #[test]
    fn test_from_arg() {
        assert_eq!(StatsSink::from_arg(None), StatsSink::Stdout);
        assert_eq!(StatsSink::from_arg(Some("stdout")), StatsSink::Stdout);
        assert_eq!(StatsSink::from_arg(Some("stderr")), StatsSink::Stderr);
        assert_eq!(
            StatsSink::from_arg(Some("out/stats.txt")),
            StatsSink::File(PathBuf::from("out/stats.txt"))
        );
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");
        std::fs::write(&path, "stale contents that are longer than the report will be, surely")
            .unwrap();

        let mut result = DetectionResult::new();
        result.push(Category::Names, "Alice");
        let mut stats = AggregateStats::new();
        stats.merge(&result);

        StatsSink::File(path.clone()).write_report(&stats).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Sensitive Information Statistics:\nNames: 1\nDates: 0\nAddresses: 0\nPhones: 0\n"
        );
    }

    #[test]
    fn test_unwritable_stats_path() {
        let dir = tempfile::tempdir().unwrap();
        let sink = StatsSink::File(dir.path().join("missing").join("stats.txt"));
        assert!(matches!(
            sink.write_report(&AggregateStats::new()),
            Err(CensorError::Io { .. })
        ));
    }

    #[test]
    fn test_write_stream() {
        let mut buf = Vec::new();
        write_stream(&mut buf, "<buffer>", "report\n").unwrap();
        assert_eq!(buf, b"report\n");
    }
}
