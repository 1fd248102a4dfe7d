//! Terminal rendering.
//!
//! Scenes are free functions over `(frame, area, state)`; the simulation
//! never depends on anything in this module.

pub mod game_scene;
pub mod name_entry;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas for the game screen.
pub struct GameLayout {
    /// Play field area - top left, inside the outer border.
    pub play_area: Rect,
    /// Status bar area (2 lines) - bottom left.
    pub status_bar: Rect,
    /// Side panel area - right side, with its own border.
    pub side_panel: Rect,
}

/// Create the standard game layout with an outer border.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    side_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play field (left) | side panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(side_panel_width)])
        .split(inner);

    // Left side: play field (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        play_area: v_chunks[0],
        status_bar: v_chunks[1],
        side_panel: h_chunks[1],
    }
}

/// Render a two-line status bar: status message plus key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status_line = Line::from(Span::styled(
        format!(" {}", status_text),
        Style::default().fg(status_color),
    ));

    let mut control_spans = Vec::new();
    for (key, action) in controls {
        control_spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(Color::Cyan),
        ));
        control_spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = if area.height >= 2 {
        vec![status_line, Line::from(control_spans)]
    } else {
        vec![status_line]
    };
    frame.render_widget(Paragraph::new(lines), area);
}
