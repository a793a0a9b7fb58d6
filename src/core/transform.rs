//! # Per-Target Transforms
//!
//! Turn a parsed [`Table`] into display items for one container.
//!
//! ```text
//! metrics       cols A/B → drop blank → sniff header → first N cards
//! names         col A → drop row 0 + blanks → pad → repeat → prefix → double
//! universities  col A → drop blanks → sniff header → everything
//! ```
//!
//! Header policy differs on purpose: the marquee drops row 0 no matter what,
//! the other two only when the header heuristics match.

use crate::core::csv::Table;
use crate::core::header::{is_label_value_header, is_university_header};
use crate::core::view::{MetricCard, Target, View};

pub const DEFAULT_METRICS_CAPACITY: usize = 4;
pub const DEFAULT_MARQUEE_COLS: usize = 4;
pub const DEFAULT_MARQUEE_VISIBLE_ROWS: usize = 5;
pub const DEFAULT_MARQUEE_MAX_ITEMS: usize = 400;

/// Extra rows kept beyond the visible window so the loop never shows a gap.
const MARQUEE_SPARE_ROWS: usize = 8;

/// Grid shape of the name marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeLayout {
    pub cols: usize,
    pub visible_rows: usize,
    pub max_items: usize,
}

impl Default for MarqueeLayout {
    fn default() -> Self {
        Self {
            cols: DEFAULT_MARQUEE_COLS,
            visible_rows: DEFAULT_MARQUEE_VISIBLE_ROWS,
            max_items: DEFAULT_MARQUEE_MAX_ITEMS,
        }
    }
}

impl MarqueeLayout {
    /// Columns, never zero.
    pub fn columns(&self) -> usize {
        self.cols.max(1)
    }

    /// Minimum sequence length before the prefix is taken.
    pub fn min_items(&self) -> usize {
        (self.visible_rows + MARQUEE_SPARE_ROWS) * self.columns()
    }
}

/// Settings shared by all three transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSettings {
    pub metrics_capacity: usize,
    pub marquee: MarqueeLayout,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            metrics_capacity: DEFAULT_METRICS_CAPACITY,
            marquee: MarqueeLayout::default(),
        }
    }
}

/// Builds the view for `target`, falling back to [`View::Empty`].
pub fn to_view(target: Target, table: &Table, settings: &TransformSettings) -> View {
    match target {
        Target::Metrics => {
            let cards = metrics(table, settings.metrics_capacity);
            if cards.is_empty() { View::Empty } else { View::Metrics(cards) }
        }
        Target::Names => {
            let names = marquee(table, &settings.marquee);
            if names.is_empty() { View::Empty } else { View::Names(names) }
        }
        Target::Universities => {
            let items = universities(table);
            if items.is_empty() { View::Empty } else { View::Universities(items) }
        }
    }
}

/// Label/value cards from columns A and B, at most `capacity` of them.
pub fn metrics(table: &Table, capacity: usize) -> Vec<MetricCard> {
    let mut cards: Vec<MetricCard> = table
        .iter()
        .map(|row| MetricCard {
            label: cell(row, 0),
            value: cell(row, 1),
        })
        .filter(|card| !card.label.is_empty() || !card.value.is_empty())
        .collect();

    if cards
        .first()
        .is_some_and(|card| is_label_value_header(&card.label, &card.value))
    {
        cards.remove(0);
    }

    cards.truncate(capacity);
    cards
}

/// Marquee sequence from column A.
///
/// Row 0 is always treated as a header. The result is aligned to the grid,
/// long enough to fill the loop, and doubled so its second half repeats the
/// first. Returns an empty vec when no names survive filtering.
pub fn marquee(table: &Table, layout: &MarqueeLayout) -> Vec<String> {
    let mut names: Vec<String> = table
        .iter()
        .skip(1)
        .map(|row| cell(row, 0))
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return names;
    }

    let cols = layout.columns();
    let remainder = names.len() % cols;
    if remainder != 0 {
        names.resize(names.len() + cols - remainder, String::new());
    }

    while names.len() < layout.min_items() {
        names.extend_from_within(..);
    }

    let half = names.len().min(layout.max_items / 2);
    names.truncate(half);
    names.extend_from_within(..);
    names
}

/// University names from column A, duplicates kept.
pub fn universities(table: &Table) -> Vec<String> {
    let mut items: Vec<String> = table
        .iter()
        .map(|row| cell(row, 0))
        .filter(|item| !item.is_empty())
        .collect();

    if items.first().is_some_and(|item| is_university_header(item)) {
        items.remove(0);
    }

    items
}

/// Half the rendered height of a marquee of `len` items, in `row_height`
/// units. This is the distance the scroll animation travels per loop.
pub fn marquee_shift(len: usize, cols: usize, row_height: u32) -> f64 {
    let rows = len.div_ceil(cols.max(1));
    (rows as f64 * f64::from(row_height)) / 2.0
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).map(|s| s.trim().to_string()).unwrap_or_default()
}
