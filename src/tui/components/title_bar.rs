//! # TitleBar Component
//!
//! Top status line: app name, the latest status message, an `ADMIN`
//! marker while admin mode is on, and the key hints.
//!
//! Stateless: everything comes in as props.
//!
//! ```text
//! DDEUM homepage | names: loaded | ADMIN          r reload · 1-3 pane · a admin · q quit
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = "r reload · 1-3 pane · a admin · q quit";

pub struct TitleBar {
    /// Status message (e.g. "metrics: loaded")
    pub status_message: String,
    pub admin: bool,
}

impl TitleBar {
    pub fn new(status_message: String, admin: bool) -> Self {
        Self {
            status_message,
            admin,
        }
    }

    fn title_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(
            "DDEUM homepage",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.admin {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "ADMIN",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Line::from(self.title_spans())), area);
        frame.render_widget(
            Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            area,
        );
    }
}
