//! University names as a plain list, source order, duplicates kept.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem};

use super::{pane_block, placeholder};
use crate::core::state::Container;
use crate::core::view::View;
use crate::tui::component::Component;

pub struct UniversityList<'a> {
    pub container: &'a Container,
    pub admin: bool,
}

impl<'a> UniversityList<'a> {
    pub fn new(container: &'a Container, admin: bool) -> Self {
        Self { container, admin }
    }
}

impl Component for UniversityList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = pane_block("Universities", self.container, self.admin);

        let view = &self.container.view;
        let View::Universities(items) = view else {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if let Some(text) = view.placeholder() {
                frame.render_widget(placeholder(view, text), inner);
            }
            return;
        };

        let list = List::new(items.iter().map(|name| ListItem::new(format!("· {name}"))))
            .block(block);
        frame.render_widget(list, area);
    }
}
