// Search-as-you-type demo.
// Every input line is the current content of a search box; queries are
// debounced so only the text the user settles on hits the catalog.
use anyhow::{Context, Result};
use kompkit_core::Debouncer;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::config::SearchSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub matches: Vec<String>,
}

pub struct SearchIndex {
    catalog: Vec<String>,
    max_results: usize,
}

impl SearchIndex {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            catalog: settings.catalog.clone(),
            max_results: settings.max_results,
        }
    }

    // Case-insensitive substring match; a blank query matches nothing
    pub fn search(&self, query: &str) -> SearchOutcome {
        let needle = query.trim().to_lowercase();
        let matches = if needle.is_empty() {
            Vec::new()
        } else {
            self.catalog
                .iter()
                .filter(|item| item.to_lowercase().contains(&needle))
                .take(self.max_results)
                .cloned()
                .collect()
        };
        SearchOutcome {
            query: query.to_string(),
            matches,
        }
    }
}

/// Feeds every line of `input` into a debounced search and reports each
/// search that actually ran. Returns the number of keystrokes (lines) read.
pub async fn run_session<R, F>(input: R, index: SearchIndex, wait: Duration, mut on_outcome: F) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&SearchOutcome),
{
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let debouncer = Debouncer::on_current_runtime(wait, move |query: String| {
        let outcome = index.search(&query);
        tracing::debug!(query = %outcome.query, matches = outcome.matches.len(), "Search executed");
        if tx.send(outcome).is_err() {
            tracing::warn!("Search results receiver closed");
        }
    })?;

    let mut lines = input.lines();
    let mut keystrokes = 0;
    loop {
        tokio::select! {
            line = lines.next_line() => match line.context("Failed to read search input")? {
                Some(text) => {
                    keystrokes += 1;
                    debouncer.call(text);
                }
                None => break,
            },
            Some(outcome) = rx.recv() => on_outcome(&outcome),
        }
    }

    // Let the last keystroke settle before closing the channel
    while debouncer.is_pending() {
        tokio::time::sleep(debouncer.wait()).await;
    }
    drop(debouncer);
    while let Some(outcome) = rx.recv().await {
        on_outcome(&outcome);
    }

    tracing::info!(keystrokes, "Search session finished");
    Ok(keystrokes)
}
