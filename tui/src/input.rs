//! Input handling for the sysdash TUI.

use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use sysdash_engine::App;
use sysdash_types::SortKey;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Reads terminal events on a dedicated thread and hands them to the
/// frame loop over a channel.
///
/// The reader exits on its own once the receiving half is dropped or the
/// terminal event stream errors out.
#[derive(Debug)]
pub struct InputPump {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl InputPump {
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            loop {
                match event::poll(INPUT_POLL_TIMEOUT) {
                    Ok(true) => {
                        let Ok(event) = event::read() else { break };
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(false) => {
                        if tx.is_closed() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!("terminal event stream failed: {err}");
                        break;
                    }
                }
            }
        });
        Self { rx }
    }

    /// Applies pending events to `app`, bounded per frame.
    pub fn drain_into(&mut self, app: &mut App) {
        for _ in 0..MAX_EVENTS_PER_FRAME {
            let Ok(event) = self.rx.try_recv() else {
                break;
            };
            handle_event(app, &event);
        }
    }
}

/// Applies one terminal event to the app.
pub fn handle_event(app: &mut App, event: &Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Release {
            return;
        }
        handle_key(app, key);
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_left(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Char(digit @ '1'..='4') => {
            if let Some(sort_key) = SortKey::from_digit(digit) {
                app.sort_by(sort_key);
            }
        }
        _ => {}
    }
}
