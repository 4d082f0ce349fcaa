use std::io::{self, Write};

use crate::session::{SessionEvent, SessionObserver};

/// Rings the terminal bell when an answer is wrong.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SessionObserver for TerminalBell {
    fn notify(&mut self, event: &SessionEvent) {
        if let SessionEvent::Answered { correct: false, .. } = event {
            let mut stdout = io::stdout();
            if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                tracing::warn!(%err, "failed to ring terminal bell");
            }
        }
    }
}
