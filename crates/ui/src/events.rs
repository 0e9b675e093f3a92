use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum UiEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Input pump: polls crossterm on a background thread and forwards
/// key/resize events plus a steady tick over a channel
pub struct EventHandler {
    receiver: mpsc::Receiver<UiEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if sender.send(UiEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(width, height)) => {
                            if sender.send(UiEvent::Resize(width, height)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(UiEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        EventHandler { receiver }
    }

    pub fn next(&self) -> Result<UiEvent, mpsc::RecvError> {
        self.receiver.recv()
    }
}

pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, KeyModifiers::NONE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_quit_bindings() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(should_quit(&esc));
        assert!(should_quit(&ctrl_c));
        assert!(!should_quit(&plain_c));
    }
}
