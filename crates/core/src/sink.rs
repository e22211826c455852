use colwatch_protocol::VisibilityEvent;

/// Consumer of one-time visibility notifications.
///
/// The tracker guarantees at-most-once delivery per (column, position);
/// sinks do not need their own deduplication.
pub trait VisibilitySink {
    fn deliver(&mut self, event: &VisibilityEvent);
}

/// Production sink: one `tracing` info line per transition, using the
/// event's literal message text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl VisibilitySink for LogSink {
    fn deliver(&mut self, event: &VisibilityEvent) {
        tracing::info!(target: "colwatch", "{}", event.message());
    }
}

/// Collects delivered events in order instead of logging them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<VisibilityEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[VisibilityEvent] {
        &self.events
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(VisibilityEvent::message).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl VisibilitySink for RecordingSink {
    fn deliver(&mut self, event: &VisibilityEvent) {
        self.events.push(event.clone());
    }
}
