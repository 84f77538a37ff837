//! Track card and transport/volume bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::model::Snapshot;

pub fn render_track_card(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Now Playing ")
        .padding(Padding::new(1, 1, 1, 0));

    // Until the first successful fetch lands there is nothing to show;
    // this stays up indefinitely if that fetch keeps failing.
    let Some(track) = snapshot.tracks.get(snapshot.current_index) else {
        let placeholder = Paragraph::new("Loading songs...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            track.title().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.artist().to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("🖼 {}", track.artwork()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if !track.has_preview() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "no preview available",
            Style::default().fg(Color::Red),
        )));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}

pub fn render_transport_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let status = match snapshot.tracks.get(snapshot.current_index) {
        None => " ⏮  ▶  ⏭ ".to_string(),
        Some(track) => {
            let toggle = if snapshot.is_playing { "⏸" } else { "▶" };
            format!(" ⏮  {}  ⏭  {} | {} ", toggle, track.title(), track.artist())
        }
    };

    let hints = " Tab focus | ↑↓ move | Enter select | Space play/pause | n/p skip | +/- vol | q quit ";

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status)
                .title_bottom(Line::from(hints).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(f64::from(snapshot.volume).clamp(0.0, 1.0))
        .label(format!("Vol {:.0}%", snapshot.volume * 100.0));

    frame.render_widget(gauge, area);
}
