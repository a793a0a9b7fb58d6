//! # HTML Rendering
//!
//! Renders the three containers as the HTML fragments the homepage expects.
//! Each container is emitted whole, so dropping the output into the page
//! replaces whatever was there before.
//!
//! ```text
//! <div id="dtmMetricsGrid">   metric cards      (value, then label)
//! <ul id="nameGrid">          marquee entries   (style="--shift: …px")
//! <ul id="dtmUnivGrid">       university names
//! ```
//!
//! Every sheet-provided string goes through [`escape_html`].

use std::fmt::Write;

use crate::core::state::{Container, Page};
use crate::core::view::{Target, View};

/// Escapes `& < > " '` for use in text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders all three containers, separated by newlines.
pub fn render_page(page: &Page) -> String {
    let admin = page.admin.is_enabled();
    page.containers()
        .iter()
        .map(|container| render_container(container, admin))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one container, including its wrapper element.
///
/// In admin mode the wrapper also carries the source URL, request token and
/// load time as `data-` attributes.
pub fn render_container(container: &Container, admin: bool) -> String {
    let (tag, class) = match container.target {
        Target::Metrics => ("div", "dtm-metrics-grid"),
        Target::Names => ("ul", "name-grid"),
        Target::Universities => ("ul", "dtm-univ-grid"),
    };

    let mut attrs = format!(r#"id="{}" class="{}""#, container.id(), class);
    if let Some(shift) = container.shift {
        let _ = write!(attrs, r#" style="--shift: {shift}px""#);
    }
    if admin {
        let _ = write!(
            attrs,
            r#" data-source="{}" data-token="{}""#,
            escape_html(&container.source_url),
            container.latest_token()
        );
        if let Some(loaded_at) = container.loaded_at {
            let _ = write!(attrs, r#" data-loaded-at="{}""#, loaded_at.to_rfc3339());
        }
    }

    format!("<{tag} {attrs}>{}</{tag}>", render_body(container.target, &container.view))
}

fn render_body(target: Target, view: &View) -> String {
    if let Some(text) = view.placeholder() {
        return placeholder(target, view, &text);
    }

    match view {
        View::Metrics(cards) => cards
            .iter()
            .map(|card| {
                format!(
                    r#"<div class="metric-card scroll-animate"><div class="metric-value">{}</div><div class="metric-label">{}</div></div>"#,
                    escape_html(&card.value),
                    escape_html(&card.label)
                )
            })
            .collect(),
        View::Names(items) | View::Universities(items) => items
            .iter()
            .map(|item| format!("<li>{}</li>", escape_html(item)))
            .collect(),
        View::Loading | View::Empty | View::Failed(_) => String::new(),
    }
}

fn placeholder(target: Target, view: &View, text: &str) -> String {
    let state = match view {
        View::Failed(_) => "failed",
        View::Empty => "empty",
        _ => "loading",
    };
    let text = escape_html(text);
    match target {
        Target::Metrics => {
            format!(r#"<div class="loading-placeholder" data-state="{state}">{text}</div>"#)
        }
        Target::Names => {
            format!(r#"<li class="loading-placeholder" data-state="{state}">{text}</li>"#)
        }
        Target::Universities => format!(
            r#"<li class="loading-placeholder" data-state="{state}" style="grid-column:span 4;">{text}</li>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::MetricCard;
    use crate::test_support::test_page;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b> 'x'"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; &#039;x&#039;"
        );
        assert_eq!(escape_html("서울대"), "서울대");
    }

    #[test]
    fn test_metric_card_renders_value_then_label() {
        let mut container = Container::new(Target::Metrics, "m".to_string());
        container.view = View::Metrics(vec![MetricCard {
            label: "응시자 수".to_string(),
            value: "320".to_string(),
        }]);
        let html = render_container(&container, false);
        assert!(html.starts_with(r#"<div id="dtmMetricsGrid""#));
        let value_at = html.find("320").unwrap();
        let label_at = html.find("응시자 수").unwrap();
        assert!(value_at < label_at);
        assert_eq!(html.matches("metric-card").count(), 1);
    }

    #[test]
    fn test_names_publish_shift_and_keep_blank_entries() {
        let mut container = Container::new(Target::Names, "n".to_string());
        container.view = View::Names(vec!["가".to_string(), String::new()]);
        container.shift = Some(20.0);
        let html = render_container(&container, false);
        assert!(html.contains(r#"style="--shift: 20px""#));
        assert!(html.contains("<li>가</li><li></li>"));
    }

    #[test]
    fn test_sheet_content_is_escaped() {
        let mut container = Container::new(Target::Universities, "u".to_string());
        container.view = View::Universities(vec!["<script>".to_string()]);
        let html = render_container(&container, false);
        assert!(html.contains("<li>&lt;script&gt;</li>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_placeholders() {
        let mut container = Container::new(Target::Universities, "u".to_string());
        assert!(render_container(&container, false).contains("로딩중..."));

        container.view = View::Empty;
        let html = render_container(&container, false);
        assert!(html.contains("데이터가 없습니다."));
        assert!(html.contains("grid-column:span 4;"));

        container.view = View::Failed("network error: <refused>".to_string());
        let html = render_container(&container, false);
        assert!(html.contains("데이터 로딩 실패: network error: &lt;refused&gt;"));
        assert!(html.contains(r#"data-state="failed""#));
    }

    #[test]
    fn test_admin_mode_exposes_source_and_token() {
        let mut page = test_page();
        page.begin_load(Target::Metrics);

        let plain = render_page(&page);
        assert!(!plain.contains("data-source"));

        page.admin.set(true);
        let html = render_page(&page);
        assert!(html.contains(r#"data-source="http://sheets.test/metrics.csv" data-token="1""#));
        assert_eq!(html.lines().count(), 3);
    }
}
