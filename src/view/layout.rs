//! Search bar and results list rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::model::{ActiveSection, Snapshot};

pub fn render_search_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let focused = snapshot.active_section == ActiveSection::Search;

    let search_text = if snapshot.search_term.is_empty() {
        "Search Songs...".to_string()
    } else if focused {
        // Trailing block as a poor man's cursor.
        format!("{}█", snapshot.search_term)
    } else {
        snapshot.search_term.clone()
    };

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let title = if snapshot.loading {
        " Search (fetching…) "
    } else {
        " Search "
    };

    let search = Paragraph::new(search_text)
        .style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(search, area);
}

pub fn render_results_list(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let focused = snapshot.active_section == ActiveSection::Results;

    let items: Vec<ListItem> = snapshot
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if i == snapshot.current_index {
                if snapshot.is_playing { "▶ " } else { "⏸ " }
            } else if !track.has_preview() {
                "· "
            } else {
                "  "
            };

            let mut line = format!("{}{} | {}", marker, track.title(), track.artist());
            if !track.has_preview() {
                line.push_str("  (no preview)");
            }

            let style = if i == snapshot.highlight && focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == snapshot.current_index {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else if !track.has_preview() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({}) ", snapshot.tracks.len()))
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );

    let mut list_state = ListState::default();
    if !snapshot.tracks.is_empty() {
        list_state.select(Some(snapshot.highlight));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}
