//! csslens Render
//!
//! Everything the visualizer shows that is derived from a token stream:
//! display lines, the frequency legend, the per-kind style table and
//! highlighted HTML. Also builds the playground's sandbox document.
//!
//! ```text
//! source → tokenize() → [Token] → lines() / legend() / highlight_html()
//! (css, html) → sandbox_document() → preview frame
//! ```
//!
//! All projections are pure and leave the token sequence untouched.

pub mod highlight;
pub mod legend;
pub mod lines;
pub mod sandbox;
pub mod style;

pub use highlight::{escape_html, highlight_html, legend_html, HighlightOptions};
pub use legend::{legend, LegendEntry};
pub use lines::{lines, Line};
pub use sandbox::{sandbox_document, Playground, Preset};
pub use style::{class_name, style, stylesheet, TokenStyle};

/// Playground error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaygroundError {
    #[error("Unknown preset: '{0}'")]
    UnknownPreset(String),
}
