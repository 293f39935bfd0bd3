//! JSONL file writer for saved drafts.
//!
//! Each saved [`DraftSnapshot`] is serialized as a single JSON line with
//! `type` and `timestamp` fields added, appended via a buffered writer.

use composer_application::ports::draft_sink::DraftSink;
use composer_domain::DraftSnapshot;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Event type written for every saved draft.
const EVENT_TYPE: &str = "draft_saved";

/// Draft sink that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlDraftSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDraftSink {
    /// Create a sink appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create draft archive directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open draft archive {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftSink for JsonlDraftSink {
    fn publish(&self, snapshot: &DraftSnapshot) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match serde_json::to_value(snapshot) {
            Ok(serde_json::Value::Object(mut map)) => {
                map.insert(
                    "type".to_string(),
                    serde_json::Value::String(EVENT_TYPE.to_string()),
                );
                map.insert(
                    "timestamp".to_string(),
                    serde_json::Value::String(timestamp),
                );
                serde_json::Value::Object(map)
            }
            _ => return,
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Could not write to draft archive {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlDraftSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer_domain::{Category, Draft};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_saved_draft() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drafts.jsonl");
        let sink = JsonlDraftSink::new(&path).unwrap();

        sink.publish(&Draft::new("First", Category::Technology, "<p>1</p>").snapshot());
        sink.publish(&Draft::new("Second", Category::Unset, "").snapshot());
        drop(sink);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "draft_saved");
        assert!(lines[0].get("timestamp").is_some());
        assert_eq!(lines[0]["title"], "First");
        assert_eq!(lines[0]["category"], "Technology");
        assert_eq!(lines[0]["content"], "<p>1</p>");
        assert_eq!(lines[1]["category"], "Category");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("drafts.jsonl");

        JsonlDraftSink::new(&path)
            .unwrap()
            .publish(&Draft::new("a", Category::Travel, "").snapshot());
        JsonlDraftSink::new(&path)
            .unwrap()
            .publish(&Draft::new("b", Category::Travel, "").snapshot());

        let titles: Vec<_> = read_lines(&path)
            .into_iter()
            .map(|v| v["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
