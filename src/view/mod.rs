//! View module - UI rendering
//!
//! Pure mapping from a state snapshot to ratatui widgets; nothing in
//! here mutates state. Organized into submodules by component type:
//!
//! - `layout`: Search bar and results list
//! - `card`: Track card and the transport/volume bar

mod card;
mod layout;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::Snapshot;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Track card + results list
                Constraint::Length(3), // Transport + volume bar
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], snapshot);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // Track card
                Constraint::Percentage(55), // Results list
            ])
            .split(chunks[1]);

        card::render_track_card(frame, main_chunks[0], snapshot);
        layout::render_results_list(frame, main_chunks[1], snapshot);

        card::render_transport_bar(frame, chunks[2], snapshot);
    }
}
