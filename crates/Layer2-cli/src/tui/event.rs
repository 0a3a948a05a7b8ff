//! Event handling for TUI

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Tick 간격 (알림 만료 체크용)
const TICK_RATE: Duration = Duration::from_millis(100);

/// TUI Events
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Key press
    Key(KeyEvent),

    /// Terminal resize
    Resize,

    /// Tick (notification expiry)
    Tick,

    /// Quit request
    Quit,
}

/// Event handler that runs in background
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventHandler {
    /// Create new event handler
    pub fn new() -> (Self, mpsc::UnboundedSender<TuiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, tx)
    }

    /// Start event loop
    ///
    /// crossterm polling은 블로킹이므로 blocking 스레드에서 돌린다.
    pub fn start(tx: mpsc::UnboundedSender<TuiEvent>) {
        tokio::task::spawn_blocking(move || loop {
            if event::poll(TICK_RATE).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if is_quit(&key) {
                            let _ = tx.send(TuiEvent::Quit);
                            break;
                        }
                        let _ = tx.send(TuiEvent::Key(key));
                    }
                    Ok(Event::Resize(_, _)) => {
                        let _ = tx.send(TuiEvent::Resize);
                    }
                    _ => {}
                }
            }

            if tx.send(TuiEvent::Tick).is_err() {
                break;
            }
        });
    }

    /// Receive next event
    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }
}

/// Ctrl+C
fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[tokio::test]
    async fn test_channel_delivers_events() {
        let (mut handler, tx) = EventHandler::new();
        tx.send(TuiEvent::Tick).unwrap();
        tx.send(TuiEvent::Resize).unwrap();
        tx.send(TuiEvent::Quit).unwrap();

        assert!(matches!(handler.next().await, Some(TuiEvent::Tick)));
        assert!(matches!(handler.next().await, Some(TuiEvent::Resize)));
        assert!(matches!(handler.next().await, Some(TuiEvent::Quit)));
    }
}
