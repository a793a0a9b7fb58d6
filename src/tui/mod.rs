//! # TUI Adapter
//!
//! The ratatui-specific layer. Draws the three homepage containers, animates
//! the name marquee, and translates keys into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! key / resize ──► Action ──► update(page) ──► Effect::Fetch ──► tokio::spawn
//!                                 ▲                                  │
//!                                 └──────── Action::Loaded ◄─────────┘
//! ```
//!
//! Fetch results come back over a channel and go through the same
//! `update()`; the page's request tokens drop any that were overtaken by a
//! newer reload. The loop redraws at ~12fps so the marquee keeps moving.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{FetchRequest, Page};
use crate::sheets::{self, HttpSheetSource, SheetSource};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// One marquee row is one terminal line.
const MARQUEE_ROW_HEIGHT: u32 = 1;

/// Marquee speed in lines per second.
const MARQUEE_LINES_PER_SEC: f64 = 1.5;

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// TUI-specific presentation state (not part of the page)
pub struct TuiState {
    started: Instant,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Current marquee scroll position for a loop of `shift` lines.
    pub fn marquee_offset(&self, shift: Option<f64>) -> u16 {
        marquee_offset(self.started.elapsed().as_secs_f64(), shift)
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines scrolled after `elapsed` seconds, wrapping every `shift` lines.
fn marquee_offset(elapsed: f64, shift: Option<f64>) -> u16 {
    let loop_len = shift.map_or(0, |s| s.floor() as u64);
    if loop_len == 0 {
        return 0;
    }
    let travelled = (elapsed * MARQUEE_LINES_PER_SEC) as u64;
    (travelled % loop_len) as u16
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn SheetSource> = Arc::new(HttpSheetSource::new());
    let mut page = Page::from_config(&config, MARQUEE_ROW_HEIGHT);
    let tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let admin_tx = tx.clone();
    page.admin.subscribe(move |enabled| {
        let status = if enabled { "admin mode on" } else { "admin mode off" };
        if admin_tx.send(Action::SetStatus(status.to_string())).is_err() {
            warn!("Failed to send admin status: receiver dropped");
        }
    });

    let mut terminal = ratatui::init();
    info!("Terminal viewer started");

    dispatch(&mut page, Action::ReloadAll, &source, &tx);

    loop {
        terminal.draw(|f| ui::draw_ui(f, &page, &tui))?;

        let mut should_quit = false;
        let first_event = poll_event_timeout(FRAME_INTERVAL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            should_quit |= dispatch(&mut page, event_action(event), &source, &tx);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results, status changes)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            dispatch(&mut page, action, &source, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

fn event_action(event: TuiEvent) -> Action {
    match event {
        TuiEvent::Quit => Action::Quit,
        TuiEvent::Reload => Action::ReloadAll,
        TuiEvent::ReloadPane(target) => Action::Reload(target),
        TuiEvent::ToggleAdmin => Action::ToggleAdmin,
        TuiEvent::Resize(width, height) => {
            debug!("Terminal resized to {width}x{height}");
            Action::Resize {
                row_height: MARQUEE_ROW_HEIGHT,
            }
        }
    }
}

/// Runs `action` through `update()` and carries out the effect.
/// Returns true when the loop should exit.
fn dispatch(
    page: &mut Page,
    action: Action,
    source: &Arc<dyn SheetSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(page, action) {
        Effect::Quit => true,
        Effect::Fetch(requests) => {
            for request in requests {
                spawn_fetch(source.clone(), request, tx.clone());
            }
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(source: Arc<dyn SheetSource>, request: FetchRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning {} fetch (token={})",
        request.target, request.token
    );
    tokio::spawn(async move {
        let action = sheets::fetch(source.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver sheet result: receiver dropped");
        }
    });
}
