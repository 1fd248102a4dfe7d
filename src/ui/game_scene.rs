//! Rendering for the game screen: scaled play field, status bar, message
//! overlay, and the leaderboard side panel.

use crate::game::{Phase, Session};
use crate::scores::ScoreEntry;
use crate::ui::{create_game_layout, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the leaderboard panel currently knows.
#[derive(Debug, Clone)]
pub enum LeaderboardView {
    Loading,
    Ready(Vec<ScoreEntry>),
    Unavailable,
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, session: &Session, leaderboard: &LeaderboardView) {
    let layout = create_game_layout(frame, area, " Skyward ", Color::Cyan, 26);

    render_play_area(frame, layout.play_area, session);
    render_status_content(frame, layout.status_bar, session);
    render_side_panel(frame, layout.side_panel, session, leaderboard);

    if session.message.is_some() {
        render_message_overlay(frame, layout.play_area, session);
    }
}

/// Render the play field, scaling game units down to terminal cells.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = &session.config;
    let x_scale = config.field_width / width as f64;
    let y_scale = config.field_height / height as f64;

    let player = &session.player;
    let player_char = if player.velocity < -0.5 {
        "▲"
    } else if player.velocity > 2.0 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let game_x = (col as f64 + 0.5) * x_scale;

            if game_x >= player.x
                && game_x < player.x + player.width
                && game_y >= player.y
                && game_y < player.y + player.height
            {
                spans.push(Span::styled(
                    player_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let mut in_pipe = false;
            for pipe in &session.pipes {
                if game_x >= pipe.x && game_x < pipe.x + config.pipe_width {
                    if game_y < pipe.top_height || game_y >= pipe.bottom_y {
                        in_pipe = true;
                    }
                    break;
                }
            }

            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_content(frame: &mut Frame, area: Rect, session: &Session) {
    let status = format!(
        "Score: {}   Best: {}",
        session.score, session.high_score
    );
    let color = match session.phase {
        Phase::Running => Color::Green,
        Phase::Idle => Color::Yellow,
        Phase::GameOver => Color::Red,
    };
    render_status_bar(
        frame,
        area,
        &status,
        color,
        &[("[Space/Up]", "Jump"), ("[Enter]", "Start"), ("[Q]", "Quit")],
    );
}

/// Centered message box over the play field (entry, refusal, game over).
fn render_message_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let Some(message) = session.message.as_deref() else {
        return;
    };

    let box_width = (message.chars().count() as u16 + 6)
        .clamp(20, area.width.saturating_sub(2).max(20));
    let box_height = 3u16;
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(box_width) / 2,
        y: area.y + area.height.saturating_sub(box_height) / 2,
        width: box_width.min(area.width),
        height: box_height.min(area.height),
    };

    frame.render_widget(Clear, overlay);
    let border_color = match session.phase {
        Phase::GameOver => Color::Red,
        _ => Color::Yellow,
    };
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(paragraph, overlay);
}

fn render_side_panel(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    leaderboard: &LeaderboardView,
) {
    let block = Block::default()
        .title(" Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = Vec::new();
    match leaderboard {
        LeaderboardView::Loading => {
            lines.push(Line::from(Span::styled(
                " Loading...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        LeaderboardView::Unavailable => {
            lines.push(Line::from(Span::styled(
                " Unavailable",
                Style::default().fg(Color::Red),
            )));
        }
        LeaderboardView::Ready(entries) if entries.is_empty() => {
            lines.push(Line::from(Span::styled(
                " No scores yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
        LeaderboardView::Ready(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {}. ", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.name.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {}", entry.score),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    if let Some(name) = session.player_name.as_deref() {
        lines.push(Line::from(vec![
            Span::styled(" Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(name.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.1}", session.pipe_speed),
            Style::default().fg(Color::Green),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
