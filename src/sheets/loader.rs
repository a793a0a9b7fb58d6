//! Runs the fetches that `update()` asks for and turns their outcome back
//! into actions.
//!
//! ```text
//! Effect::Fetch(requests) ──► fetch() per request ──► Action::Loaded
//! ```
//!
//! Loads are independent: one slow or failing sheet never holds up the
//! others, and a failure only ever ends up as that container's placeholder.

use futures::future::join_all;
use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::state::{FetchRequest, Page};
use crate::sheets::SheetSource;

/// Characters of the body echoed to the log on receipt.
const PREVIEW_CHARS: usize = 200;

/// Performs one fetch and wraps the outcome for `update()`.
pub async fn fetch(source: &dyn SheetSource, request: FetchRequest) -> Action {
    info!(
        "Fetching {} (token={}) via {} from {}",
        request.target,
        request.token,
        source.name(),
        request.url
    );

    let result = source.fetch_csv(&request.url).await;
    match &result {
        Ok(body) => info!(
            "{} CSV received: {} bytes, preview: {:?}",
            request.target,
            body.len(),
            preview(body)
        ),
        Err(e) => warn!("Failed to fetch {}: {}", request.target, e),
    }

    Action::Loaded {
        target: request.target,
        token: request.token,
        result,
    }
}

/// Reloads every container concurrently and applies the results.
/// Returns once all three containers have settled.
pub async fn load_all(page: &mut Page, source: &dyn SheetSource) {
    let Effect::Fetch(requests) = update(page, Action::ReloadAll) else {
        return;
    };

    let actions = join_all(requests.into_iter().map(|request| fetch(source, request))).await;
    for action in actions {
        update(page, action);
    }
}

fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}
