//! Append-only JSONL writer for quiz session events.

use learnpal_application::{QuizEvent, QuizEventLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Writes each [`QuizEvent`] as one JSON object per line.
///
/// Object payloads are flattened next to `type` and `timestamp`; any other
/// payload lands under `data`. Records are appended, so one file can hold
/// several sessions.
pub struct JsonlQuizLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlQuizLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; callers fall back to
    /// running without a session log.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create event log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| warn!("Could not open event log {}: {}", path.display(), e))
            .ok()?;

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: QuizEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl QuizEventLogger for JsonlQuizLogger {
    fn log(&self, event: QuizEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if writeln!(writer, "{}", line).and_then(|_| writer.flush()).is_err() {
            warn!("Dropped event record for {}", self.path.display());
        }
    }
}

impl Drop for JsonlQuizLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlQuizLogger::open(&path).unwrap();

        logger.log(QuizEvent::new(
            "quiz_requested",
            json!({ "topic": "osmosis", "generation": 1 }),
        ));
        logger.log(QuizEvent::new(
            "answer_recorded",
            json!({ "question": 0, "key": "B", "correct": true }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "quiz_requested");
        assert_eq!(records[0]["topic"], "osmosis");
        assert_eq!(records[1]["type"], "answer_recorded");
        assert_eq!(records[1]["key"], "B");
        assert!(records.iter().all(|r| r["timestamp"].is_string()));
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlQuizLogger::open(&path).unwrap();

        logger.log(QuizEvent::new("quiz_restarted", json!(3)));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "quiz_restarted");
        assert_eq!(records[0]["data"], 3);
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.jsonl");

        let first = JsonlQuizLogger::open(&path).unwrap();
        first.log(QuizEvent::new("quiz_requested", json!({ "topic": "a" })));
        drop(first);

        let second = JsonlQuizLogger::open(&path).unwrap();
        second.log(QuizEvent::new("quiz_requested", json!({ "topic": "b" })));
        drop(second);

        let topics: Vec<_> = read_lines(&path)
            .into_iter()
            .map(|r| r["topic"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(topics, vec!["a", "b"]);
    }

    #[test]
    fn test_open_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlQuizLogger::open(dir.path()).is_none());
    }
}
