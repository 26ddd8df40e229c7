//! Input session
//!
//! Reads one intent per line and hands it to the tracker. A line is fully
//! handled, including the re-render, before the next one is read. Lines that
//! are not valid UTF-8 are rejected on their own; the session keeps going.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{help_text, parse_intent, Outcome, Tracker};
use crate::domain::ports::{IdGenerator, OrderRepository, View};
use crate::error::AppError;

/// Counts from a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that produced an intent and were handled
    pub handled: usize,
    /// Lines rejected by the parser or the tracker
    pub rejected: usize,
}

/// Drive the tracker from `input` until it ends or the user quits.
///
/// Help text and per-line errors go to `notices`; rendered snapshots go
/// wherever the tracker's view writes them.
pub async fn run_session<R, G, V, I, N>(
    tracker: &mut Tracker<R, G, V>,
    mut input: I,
    notices: &mut N,
) -> Result<SessionSummary, AppError>
where
    R: OrderRepository,
    G: IdGenerator,
    V: View,
    I: AsyncBufRead + Unpin,
    N: Write,
{
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    tracker.start();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(bytes = buf.len(), "Rejected input: {}", e);
                writeln!(notices, "error: Input is not valid UTF-8: {}", e)?;
                notices.flush()?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_intent(line)
            .map_err(AppError::from)
            .and_then(|intent| {
                if intent.is_mutation() {
                    tracing::info!(?intent, "Received intent");
                }
                tracker.handle(intent)
            });

        match result {
            Ok(Outcome::Published) => summary.handled += 1,
            Ok(Outcome::Help) => {
                summary.handled += 1;
                notices.write_all(help_text().as_bytes())?;
            }
            Ok(Outcome::Quit) => {
                summary.handled += 1;
                tracing::info!("Quit requested");
                break;
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(line = %line, "Rejected input: {}", e);
                writeln!(notices, "error: {}", e)?;
            }
        }
        notices.flush()?;
    }

    tracing::info!(
        handled = summary.handled,
        rejected = summary.rejected,
        "Session finished"
    );
    Ok(summary)
}
