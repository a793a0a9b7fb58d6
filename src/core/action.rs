//! # Actions
//!
//! Everything that can happen to the homepage becomes an `Action`.
//! User presses `r`? That's `Action::ReloadAll`.
//! A sheet arrives? That's `Action::Loaded { .. }`.
//!
//! The `update()` function takes the page and an action, mutates the page,
//! and returns an `Effect` describing any I/O the caller has to perform.
//! No I/O happens here: parsing and transforming are pure, fetching is the
//! caller's job.
//!
//! ```text
//! Page + Action  →  update()  →  Page' + Effect
//! ```

use log::{debug, info, warn};

use crate::core::csv;
use crate::core::state::{FetchRequest, Page, RequestToken};
use crate::core::transform;
use crate::core::view::{Target, View};
use crate::sheets::FetchError;

#[derive(Debug)]
pub enum Action {
    /// Start a fresh load of one container.
    Reload(Target),
    /// Start a fresh load of every container.
    ReloadAll,
    /// A fetch finished, successfully or not.
    Loaded {
        target: Target,
        token: RequestToken,
        result: Result<String, FetchError>,
    },
    /// Viewport changed; the marquee shift is recomputed with the new row height.
    Resize { row_height: u32 },
    ToggleAdmin,
    SetStatus(String),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetches the caller must start, one per container.
    Fetch(Vec<FetchRequest>),
    Quit,
}

pub fn update(page: &mut Page, action: Action) -> Effect {
    match action {
        Action::Reload(target) => Effect::Fetch(vec![page.begin_load(target)]),
        Action::ReloadAll => Effect::Fetch(
            Target::ALL
                .into_iter()
                .map(|target| page.begin_load(target))
                .collect(),
        ),
        Action::Loaded {
            target,
            token,
            result,
        } => {
            if !page.container(target).is_current(token) {
                debug!("Ignoring stale {target} load (token={token})");
                return Effect::None;
            }

            let view = match result {
                Ok(body) => {
                    let table = csv::parse(&body);
                    debug!("Parsed {} {target} rows", table.len());
                    transform::to_view(target, &table, &page.settings)
                }
                Err(e) => {
                    warn!("Failed to load {target}: {e}");
                    View::Failed(e.to_string())
                }
            };

            page.status_message = match &view {
                View::Failed(_) => format!("{target}: load failed"),
                View::Empty => format!("{target}: no data"),
                _ => format!("{target}: loaded"),
            };
            info!("Settled {target} (token={token}): {}", page.status_message);

            page.container_mut(target).apply(token, view);
            if target == Target::Names {
                page.refresh_shift();
            }
            Effect::None
        }
        Action::Resize { row_height } => {
            page.row_height = row_height;
            page.refresh_shift();
            Effect::None
        }
        Action::ToggleAdmin => {
            page.admin.toggle();
            Effect::None
        }
        Action::SetStatus(message) => {
            page.status_message = message;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_page;

    fn loaded(target: Target, token: RequestToken, body: &str) -> Action {
        Action::Loaded {
            target,
            token,
            result: Ok(body.to_string()),
        }
    }

    #[test]
    fn test_reload_all_requests_every_container() {
        let mut page = test_page();
        let effect = update(&mut page, Action::ReloadAll);
        let Effect::Fetch(requests) = effect else {
            panic!("expected fetch effect");
        };
        let targets: Vec<Target> = requests.iter().map(|r| r.target).collect();
        assert_eq!(targets, Target::ALL.to_vec());
        assert!(requests.iter().all(|r| r.token == 1));
    }

    #[test]
    fn test_loaded_metrics_renders_cards() {
        let mut page = test_page();
        update(&mut page, Action::Reload(Target::Metrics));
        update(&mut page, loaded(Target::Metrics, 1, "대학,값\n응시자 수,320\n"));

        let View::Metrics(cards) = &page.metrics.view else {
            panic!("expected metrics view, got {:?}", page.metrics.view);
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].label, "응시자 수");
        assert_eq!(cards[0].value, "320");
    }

    #[test]
    fn test_loaded_names_publishes_shift() {
        let mut page = test_page();
        page.row_height = 40;
        update(&mut page, Action::Reload(Target::Names));
        update(&mut page, loaded(Target::Names, 1, "이름\n가\n나\n다\n라\n마\n"));

        let View::Names(items) = &page.names.view else {
            panic!("expected names view");
        };
        assert_eq!(items.len(), 128);
        // 128 items / 4 cols = 32 rows × 40px, halved.
        assert_eq!(page.names.shift, Some(640.0));
    }

    #[test]
    fn test_resize_recomputes_shift() {
        let mut page = test_page();
        update(&mut page, Action::Reload(Target::Names));
        update(&mut page, loaded(Target::Names, 1, "h\na\nb\nc\nd\n"));
        let before = page.names.shift;
        let row_height = page.row_height * 2;

        update(&mut page, Action::Resize { row_height });
        assert_eq!(page.names.shift, before.map(|s| s * 2.0));
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newer() {
        let mut page = test_page();
        update(&mut page, Action::Reload(Target::Universities));
        update(&mut page, Action::Reload(Target::Universities));

        // Second (newer) response lands first.
        update(&mut page, loaded(Target::Universities, 2, "연세대\n"));
        // First (stale) response arrives late.
        update(&mut page, loaded(Target::Universities, 1, "고려대\n"));

        assert_eq!(
            page.universities.view,
            View::Universities(vec!["연세대".to_string()])
        );
    }

    #[test]
    fn test_failed_fetch_renders_failure_placeholder() {
        let mut page = test_page();
        update(&mut page, Action::Reload(Target::Names));
        update(
            &mut page,
            Action::Loaded {
                target: Target::Names,
                token: 1,
                result: Err(FetchError::Network("connection refused".to_string())),
            },
        );
        let text = page.names.view.placeholder().unwrap();
        assert!(text.contains("실패"));
        assert!(text.contains("connection refused"));
        assert_eq!(page.names.shift, None);
    }

    #[test]
    fn test_empty_sheet_renders_no_data() {
        let mut page = test_page();
        update(&mut page, Action::Reload(Target::Metrics));
        update(&mut page, loaded(Target::Metrics, 1, ""));
        assert_eq!(page.metrics.view, View::Empty);
        assert_eq!(page.status_message, "metrics: no data");
    }

    #[test]
    fn test_toggle_admin_and_quit() {
        let mut page = test_page();
        assert_eq!(update(&mut page, Action::ToggleAdmin), Effect::None);
        assert!(page.admin.is_enabled());
        assert_eq!(update(&mut page, Action::Quit), Effect::Quit);
    }
}
