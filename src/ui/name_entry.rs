//! Player-name capture screen, shown once per app session before the game.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_NAME_LEN: usize = 24;

pub struct NameEntryScreen {
    pub name_input: String,
    pub cursor_position: usize,
    pub validation_error: Option<String>,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            cursor_position: 0,
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Rules
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Skyward")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let label = Paragraph::new("Your name (shown on the leaderboard):");
        f.render_widget(label, chunks[2]);

        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 1,
        };

        let input_text = {
            let char_count = self.name_input.chars().count();
            if self.cursor_position < char_count {
                let chars: Vec<char> = self.name_input.chars().collect();
                let before: String = chars[..self.cursor_position].iter().collect();
                let after: String = chars[self.cursor_position..].iter().collect();
                format!("{}{}{}", before, "_", after)
            } else {
                format!("{}_", self.name_input)
            }
        };

        let input_widget = Paragraph::new(input_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let rules = vec![
            Line::from(format!("• 1-{} characters", MAX_NAME_LEN)),
            Line::from("• Shown next to your score"),
        ];
        let rules_widget = Paragraph::new(rules).style(Style::default().fg(Color::Gray));
        f.render_widget(rules_widget, chunks[4]);

        let validation_text = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if !self.name_input.trim().is_empty() {
            Line::from(Span::styled(
                "✓ Name is valid",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(validation_text), chunks[5]);

        let controls = Paragraph::new("[Enter] Play    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.name_input.chars().count() >= MAX_NAME_LEN || c.is_control() {
            return;
        }
        let byte_index = self
            .name_input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.name_input.len());
        self.name_input.insert(byte_index, c);
        self.cursor_position += 1;
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self
                .name_input
                .char_indices()
                .nth(self.cursor_position - 1)
                .map(|(i, _)| i)
                .unwrap_or(self.name_input.len());
            self.name_input.remove(byte_index);
            self.cursor_position -= 1;
            self.validate();
        }
    }

    pub fn validate(&mut self) {
        self.validation_error = if self.name_input.trim().is_empty() {
            Some("Name cannot be empty".to_string())
        } else {
            None
        };
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none() && !self.name_input.trim().is_empty()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}
