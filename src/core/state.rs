//! # Page State
//!
//! Everything the homepage shows, owned in one place. There are no
//! module-level caches: the caller owns a `Page` and changes it only
//! through `update(page, action)` in action.rs.
//!
//! ```text
//! Page
//! ├── metrics: Container        // #dtmMetricsGrid
//! ├── names: Container          // #nameGrid (+ --shift)
//! ├── universities: Container   // #dtmUnivGrid
//! ├── settings: TransformSettings
//! ├── row_height: u32           // marquee row height, px or terminal lines
//! ├── admin: AdminMode
//! └── status_message: String
//! ```
//!
//! ## Stale responses
//!
//! Each container hands out a new `RequestToken` when a load starts. A
//! finished load is applied only if it carries the latest token, so a slow
//! old response can never overwrite a newer one.

use chrono::{DateTime, Local};
use log::debug;

use crate::core::admin::AdminMode;
use crate::core::config::ResolvedConfig;
use crate::core::transform::{TransformSettings, marquee_shift};
use crate::core::view::{Target, View};

/// Per-container load id, strictly increasing.
pub type RequestToken = u64;

/// A fetch the event loop has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub target: Target,
    pub token: RequestToken,
    pub url: String,
}

#[derive(Debug)]
pub struct Container {
    pub target: Target,
    pub source_url: String,
    pub view: View,
    /// Half the rendered marquee height; only set on the names container.
    pub shift: Option<f64>,
    pub loaded_at: Option<DateTime<Local>>,
    latest_token: RequestToken,
}

impl Container {
    pub fn new(target: Target, source_url: String) -> Self {
        Self {
            target,
            source_url,
            view: View::Loading,
            shift: None,
            loaded_at: None,
            latest_token: 0,
        }
    }

    pub fn id(&self) -> &'static str {
        self.target.container_id()
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Issues a new token and shows the loading placeholder.
    pub fn begin_load(&mut self) -> RequestToken {
        self.latest_token += 1;
        self.view = View::Loading;
        self.shift = None;
        self.latest_token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest_token
    }

    /// Replaces the content wholesale if `token` is still the latest.
    /// Returns false for stale tokens, leaving the container untouched.
    pub fn apply(&mut self, token: RequestToken, view: View) -> bool {
        if !self.is_current(token) {
            debug!(
                "Discarding stale {} response (token={}, latest={})",
                self.target, token, self.latest_token
            );
            return false;
        }
        self.view = view;
        self.shift = None;
        self.loaded_at = Some(Local::now());
        true
    }
}

#[derive(Debug)]
pub struct Page {
    pub metrics: Container,
    pub names: Container,
    pub universities: Container,
    pub settings: TransformSettings,
    pub row_height: u32,
    pub admin: AdminMode,
    pub status_message: String,
}

impl Page {
    pub fn new(
        metrics_url: String,
        names_url: String,
        universities_url: String,
        settings: TransformSettings,
        row_height: u32,
    ) -> Self {
        Self {
            metrics: Container::new(Target::Metrics, metrics_url),
            names: Container::new(Target::Names, names_url),
            universities: Container::new(Target::Universities, universities_url),
            settings,
            row_height,
            admin: AdminMode::default(),
            status_message: String::new(),
        }
    }

    /// Builds a page from resolved config. `row_height` is the marquee row
    /// height in the unit of the presentation (pixels for HTML, lines for
    /// the terminal).
    pub fn from_config(config: &ResolvedConfig, row_height: u32) -> Self {
        let mut page = Self::new(
            config.metrics_url.clone(),
            config.names_url.clone(),
            config.universities_url.clone(),
            config.settings,
            row_height,
        );
        page.admin.set(config.admin);
        page
    }

    pub fn container(&self, target: Target) -> &Container {
        match target {
            Target::Metrics => &self.metrics,
            Target::Names => &self.names,
            Target::Universities => &self.universities,
        }
    }

    pub fn container_mut(&mut self, target: Target) -> &mut Container {
        match target {
            Target::Metrics => &mut self.metrics,
            Target::Names => &mut self.names,
            Target::Universities => &mut self.universities,
        }
    }

    pub fn containers(&self) -> [&Container; 3] {
        [&self.metrics, &self.names, &self.universities]
    }

    /// Starts a load for `target` and describes the fetch to perform.
    pub fn begin_load(&mut self, target: Target) -> FetchRequest {
        let container = self.container_mut(target);
        let token = container.begin_load();
        FetchRequest {
            target,
            token,
            url: container.source_url.clone(),
        }
    }

    /// Recomputes the marquee `--shift` from the current names view.
    pub fn refresh_shift(&mut self) {
        let cols = self.settings.marquee.columns();
        self.names.shift = match &self.names.view {
            View::Names(items) => Some(marquee_shift(items.len(), cols, self.row_height)),
            _ => None,
        };
    }

    pub fn all_settled(&self) -> bool {
        self.containers().iter().all(|c| c.view.is_settled())
    }

    /// Settled views keyed by container id. Each entry carries the marquee
    /// `shift` next to the view, `null` where there is none.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for container in self.containers() {
            map.insert(
                container.id().to_string(),
                serde_json::json!({
                    "view": serde_json::to_value(&container.view)?,
                    "shift": container.shift,
                }),
            );
        }
        Ok(serde_json::Value::Object(map))
    }
}
