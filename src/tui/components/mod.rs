//! # TUI Components
//!
//! One component per homepage container plus the title bar.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file, shared pane helpers)
//! ├── title_bar.rs        (status line)
//! ├── metrics_grid.rs     (#dtmMetricsGrid)
//! ├── name_marquee.rs     (#nameGrid, scrolling)
//! └── university_list.rs  (#dtmUnivGrid)
//! ```
//!
//! Components are stateless: they receive a `&Container` (and whatever
//! else they need) as props and render it. All state lives in `Page` or
//! `TuiState`.

mod metrics_grid;
mod name_marquee;
mod title_bar;
mod university_list;

pub use metrics_grid::MetricsGrid;
pub use name_marquee::NameMarquee;
pub use title_bar::TitleBar;
pub use university_list::UniversityList;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

use crate::core::state::Container;
use crate::core::view::View;

/// Bordered block for a container pane. Admin mode adds the source URL and
/// request token along the bottom border.
fn pane_block(title: &str, container: &Container, admin: bool) -> Block<'static> {
    let block = Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::DarkGray))
        .title_style(Style::default().fg(Color::Cyan));

    if admin {
        block.title_bottom(Line::styled(
            format!(
                " #{} token={} {} ",
                container.id(),
                container.latest_token(),
                container.source_url
            ),
            Style::default().fg(Color::Magenta),
        ))
    } else {
        block
    }
}

/// Centered placeholder text; failures are shown in red.
fn placeholder(view: &View, text: String) -> Paragraph<'static> {
    let style = match view {
        View::Failed(_) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    };
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Truncates or pads `text` to exactly `width` terminal columns.
fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_fit_width_pads_ascii() {
        assert_eq!(fit_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_fit_width_counts_wide_chars() {
        let fitted = fit_width("서울대학교", 5);
        assert_eq!(fitted, "서울 ");
        assert_eq!(fitted.width(), 5);
    }

    #[test]
    fn test_fit_width_zero() {
        assert_eq!(fit_width("abc", 0), "");
    }
}
