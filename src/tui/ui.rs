use crate::core::state::Page;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MetricsGrid, NameMarquee, TitleBar, UniversityList};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the metrics strip, borders included.
const METRICS_HEIGHT: u16 = 4;

/// Splits the frame into title, metrics, names and universities areas.
pub fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min, Percentage};
    let [title_area, metrics_area, body_area] =
        Layout::vertical([Length(1), Length(METRICS_HEIGHT), Min(0)]).areas(area);
    let [names_area, universities_area] =
        Layout::horizontal([Percentage(65), Percentage(35)]).areas(body_area);
    [title_area, metrics_area, names_area, universities_area]
}

pub fn draw_ui(frame: &mut Frame, page: &Page, tui: &TuiState) {
    let [title_area, metrics_area, names_area, universities_area] = layout(frame.area());
    let admin = page.admin.is_enabled();

    TitleBar::new(page.status_message.clone(), admin).render(frame, title_area);
    MetricsGrid::new(&page.metrics, admin).render(frame, metrics_area);
    NameMarquee::new(
        &page.names,
        page.settings.marquee.columns(),
        tui.marquee_offset(page.names.shift),
        admin,
    )
    .render(frame, names_area);
    UniversityList::new(&page.universities, admin).render(frame, universities_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::view::Target;
    use crate::test_support::test_page;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(page: &Page) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, page, &tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_while_loading() {
        let page = test_page();
        let text = screen(&page);
        assert!(text.contains("Metrics"));
        assert!(text.contains("Names"));
        assert!(text.contains("Universities"));
    }

    #[test]
    fn test_draw_ui_after_load() {
        let mut page = test_page();
        update(&mut page, Action::ReloadAll);
        for (target, body) in [
            (Target::Metrics, "Applicants,320\n"),
            (Target::Names, "name\nalice\nbob\n"),
            (Target::Universities, "KNUA\n"),
        ] {
            update(
                &mut page,
                Action::Loaded {
                    target,
                    token: 1,
                    result: Ok(body.to_string()),
                },
            );
        }

        let text = screen(&page);
        assert!(text.contains("Applicants"));
        assert!(text.contains("alice"));
        assert!(text.contains("KNUA"));
    }

    #[test]
    fn test_layout_fills_frame() {
        let [title, metrics, names, universities] = layout(Rect::new(0, 0, 100, 30));
        assert_eq!(title.height, 1);
        assert_eq!(metrics.height, METRICS_HEIGHT);
        assert_eq!(names.height, 25);
        assert_eq!(names.width + universities.width, 100);
    }
}
