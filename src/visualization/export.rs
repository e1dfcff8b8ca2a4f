use crate::error::Result;
use crate::metrics::TrainingHistory;
use std::io::Write;
use std::path::Path;

/// Export the per-episode series to CSV
pub fn export_history_csv<P: AsRef<Path>>(history: &TrainingHistory, path: P) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(file, "episode,start_value,return")?;
    for (i, (value, ret)) in history.convergence.iter().zip(&history.returns).enumerate() {
        writeln!(file, "{},{},{}", i + 1, value, ret)?;
    }
    file.flush()?;

    Ok(())
}

/// Export the whole history as JSON
pub fn export_history_json<P: AsRef<Path>>(history: &TrainingHistory, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut history = TrainingHistory::new(10.0);
        history.record(0.0, -10.1, false);
        history.record(0.5, 9.2, true);
        export_history_csv(&history, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["episode,start_value,return", "1,0,-10.1", "2,0.5,9.2"]);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = TrainingHistory::new(10.0);
        history.record(0.25, 9.5, true);
        export_history_json(&history, &path).unwrap();

        let restored: TrainingHistory = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, history);
    }
}
