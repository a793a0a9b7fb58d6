//! Metric cards side by side, value above label.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{pane_block, placeholder};
use crate::core::state::Container;
use crate::core::view::View;
use crate::tui::component::Component;

pub struct MetricsGrid<'a> {
    pub container: &'a Container,
    pub admin: bool,
}

impl<'a> MetricsGrid<'a> {
    pub fn new(container: &'a Container, admin: bool) -> Self {
        Self { container, admin }
    }
}

impl Component for MetricsGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = pane_block("Metrics", self.container, self.admin);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let view = &self.container.view;
        let View::Metrics(cards) = view else {
            if let Some(text) = view.placeholder() {
                frame.render_widget(placeholder(view, text), inner);
            }
            return;
        };

        let columns = Layout::horizontal(
            cards.iter().map(|_| Constraint::Fill(1)).collect::<Vec<_>>(),
        )
        .split(inner);

        for (card, column) in cards.iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    card.value.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.label.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                *column,
            );
        }
    }
}
