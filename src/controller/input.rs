//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Ctrl-C quits from anywhere, including while typing.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.set_should_quit(true).await;
            return Ok(());
        }

        if self.model.active_section().await == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    self.model.cycle_section().await;
                    return Ok(());
                }
                // Explicit submit; the term itself is already current.
                KeyCode::Enter => {
                    self.refresh_results().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    self.model.clear_search().await;
                    self.refresh_results().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    self.model.backspace_search().await;
                    self.refresh_results().await;
                    return Ok(());
                }
                // Every edit refetches, like the field it models.
                KeyCode::Char(c) => {
                    self.model.append_to_search(c).await;
                    self.refresh_results().await;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        // Results section
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                self.model.cycle_section().await;
            }
            KeyCode::Up => {
                self.model.move_highlight_up().await;
            }
            KeyCode::Down => {
                self.model.move_highlight_down().await;
            }
            KeyCode::Enter => {
                self.select_highlighted().await;
            }
            KeyCode::Char(' ') => {
                self.toggle_playback().await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.next_track().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.previous_track().await;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.volume_up().await;
            }
            KeyCode::Char('-') => {
                self.volume_down().await;
            }
            _ => {}
        }
        Ok(())
    }
}
