//! Composite draft sink that delegates to multiple sinks.
//!
//! Used to report a saved draft to the diagnostic log and, when configured,
//! to a JSONL archive at the same time.

use super::draft_sink::DraftSink;
use composer_domain::DraftSnapshot;
use std::sync::Arc;

/// A sink that forwards every snapshot to each inner sink, in order.
#[derive(Clone, Default)]
pub struct CompositeDraftSink {
    delegates: Vec<Arc<dyn DraftSink>>,
}

impl CompositeDraftSink {
    pub fn new(delegates: Vec<Arc<dyn DraftSink>>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, sink: Arc<dyn DraftSink>) {
        self.delegates.push(sink);
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl DraftSink for CompositeDraftSink {
    fn publish(&self, snapshot: &DraftSnapshot) {
        for d in &self.delegates {
            d.publish(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer_domain::{Category, Draft};
    use std::sync::Mutex;

    struct Counting {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl DraftSink for Counting {
        fn publish(&self, snapshot: &DraftSnapshot) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, snapshot.title()));
        }
    }

    #[test]
    fn test_publishes_to_every_delegate_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut sink = CompositeDraftSink::default();
        sink.push(Arc::new(Counting {
            label: "first",
            log: log.clone(),
        }));
        sink.push(Arc::new(Counting {
            label: "second",
            log: log.clone(),
        }));

        sink.publish(&Draft::new("Post", Category::Travel, "").snapshot());

        assert_eq!(sink.len(), 2);
        assert_eq!(*log.lock().unwrap(), vec!["first:Post", "second:Post"]);
    }

    #[test]
    fn test_empty_composite_is_a_no_op() {
        let sink = CompositeDraftSink::new(Vec::new());
        assert!(sink.is_empty());
        sink.publish(&Draft::default().snapshot());
    }
}
