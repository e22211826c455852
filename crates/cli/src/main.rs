mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use colwatch_core::{LogSink, VisibilitySink};
use colwatch_protocol::VisibilityEvent;
use tracing_subscriber::EnvFilter;

/// Logs each notification and keeps a tally for the end-of-replay line.
#[derive(Default)]
struct CountingLogSink {
    log: LogSink,
    delivered: usize,
}

impl VisibilitySink for CountingLogSink {
    fn deliver(&mut self, event: &VisibilityEvent) {
        self.delivered += 1;
        self.log.deliver(event);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: colwatch <session.json>");
        std::process::exit(1);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = PathBuf::from(&args[1]);
    let data = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let session: script::ScrollSession = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut sink = CountingLogSink::default();
    let steps = script::replay(session, &mut sink)?;
    tracing::info!(
        "replay complete: {steps} steps, {} notifications",
        sink.delivered
    );
    Ok(())
}
