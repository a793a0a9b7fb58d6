//! # NameMarquee Component
//!
//! Student names in a fixed-column grid that scrolls upward forever.
//!
//! The names view is already doubled (second half == first half), so
//! scrolling by `offset` lines where `offset` wraps at the published shift
//! (half the rendered rows) never shows a seam.
//!
//! ```text
//! ┌ Names ──────────────────────────────┐
//! │ 김민지    이서준    박하은    최도윤 │  ← row `offset`
//! │ 정우진                              │
//! │ ...                                 │
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{fit_width, pane_block, placeholder};
use crate::core::state::Container;
use crate::core::view::View;
use crate::tui::component::Component;

/// Columns between cells.
const GUTTER: usize = 2;

pub struct NameMarquee<'a> {
    pub container: &'a Container,
    pub cols: usize,
    /// Lines already scrolled past.
    pub offset: u16,
    pub admin: bool,
}

impl<'a> NameMarquee<'a> {
    pub fn new(container: &'a Container, cols: usize, offset: u16, admin: bool) -> Self {
        Self {
            container,
            cols: cols.max(1),
            offset,
            admin,
        }
    }
}

/// Lays `items` out as grid lines of `cols` cells, each cell `cell_width`
/// columns wide. Blank items stay as blank cells.
pub fn grid_lines(items: &[String], cols: usize, cell_width: usize) -> Vec<String> {
    items
        .chunks(cols.max(1))
        .map(|row| {
            row.iter()
                .map(|name| fit_width(name, cell_width))
                .collect::<Vec<_>>()
                .join(&" ".repeat(GUTTER))
                .trim_end()
                .to_string()
        })
        .collect()
}

impl Component for NameMarquee<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = pane_block("Names", self.container, self.admin);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let view = &self.container.view;
        let View::Names(items) = view else {
            if let Some(text) = view.placeholder() {
                frame.render_widget(placeholder(view, text), inner);
            }
            return;
        };

        let gutters = GUTTER * (self.cols - 1);
        let cell_width = (inner.width as usize).saturating_sub(gutters) / self.cols;
        let lines: Vec<Line> = grid_lines(items, self.cols, cell_width)
            .into_iter()
            .map(Line::from)
            .collect();

        frame.render_widget(Paragraph::new(lines).scroll((self.offset, 0)), inner);
    }
}
