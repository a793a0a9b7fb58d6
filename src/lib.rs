//! Ddeum homepage sheet loader: fetches the academy's published spreadsheet
//! exports, parses them, and renders the metrics grid, name marquee and
//! university list as HTML or in the terminal.

pub mod core;
pub mod html;
pub mod sheets;
pub mod tui;

#[cfg(test)]
pub mod test_support;
