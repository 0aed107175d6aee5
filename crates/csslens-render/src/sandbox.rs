//! Playground state and the sandbox document shown in the preview frame.
//!
//! The preview is a complete HTML document: a fixed scaffold with the
//! learner's CSS spliced into a `<style>` element and their HTML into `<body>`.
//! The browser renders it; nothing here interprets the CSS.

use serde::{Deserialize, Serialize};

use crate::PlaygroundError;

/// Reset applied before the learner's CSS so every demo starts from the
/// same baseline.
pub const BASE_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; padding: 1rem; font-family: system-ui, sans-serif; line-height: 1.5; }";

/// Build the sandbox document for a CSS and HTML snippet.
pub fn sandbox_document(css: &str, html: &str) -> String {
    let mut doc = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    doc.push_str("  <style>\n");
    doc.push_str(BASE_CSS);
    doc.push_str("\n  </style>\n");
    doc.push_str("  <style>\n");
    doc.push_str(&neutralize_style_close(css));
    doc.push_str("\n  </style>\n</head>\n<body>\n");
    doc.push_str(html);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

/// Rewrite `</style` (any case) so user CSS cannot end the style element.
/// `\/` is a CSS escape for `/`, so the CSS itself is unchanged.
fn neutralize_style_close(css: &str) -> String {
    const NEEDLE: &str = "</style";
    // ASCII lowercasing keeps byte offsets aligned with `css`
    let lower = css.to_ascii_lowercase();
    let mut out = String::with_capacity(css.len());
    let mut last = 0;
    for (index, _) in lower.match_indices(NEEDLE) {
        out.push_str(&css[last..index]);
        out.push_str("<\\/");
        last = index + 2;
    }
    out.push_str(&css[last..]);
    out
}

/// A named snippet pair that swaps into the playground.
///
/// Deserializes from `{ "name": ..., "css": ..., "html": ... }`; `html` may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub css: String,
    #[serde(default)]
    pub html: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, css: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
            html: html.into(),
        }
    }
}

/// Editable CSS and HTML plus the presets a demo offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playground {
    css: String,
    html: String,
    presets: Vec<Preset>,
    active: Option<String>,
}

impl Playground {
    pub fn new(css: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            html: html.into(),
            ..Self::default()
        }
    }

    pub fn with_presets(mut self, presets: impl IntoIterator<Item = Preset>) -> Self {
        self.presets.extend(presets);
        self
    }

    /// Offer another preset. When names repeat, lookups use the first.
    pub fn add_preset(&mut self, preset: Preset) {
        self.presets.push(preset);
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Name of the preset last applied, cleared by any manual edit.
    pub fn active_preset(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn set_css(&mut self, css: impl Into<String>) {
        self.css = css.into();
        self.active = None;
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
        self.active = None;
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    /// Replace both snippets with those of the named preset.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), PlaygroundError> {
        let preset = self
            .presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PlaygroundError::UnknownPreset(name.to_string()))?;

        log::debug!("applying preset {name:?}");
        self.css = preset.css.clone();
        self.html = preset.html.clone();
        self.active = Some(preset.name.clone());
        Ok(())
    }

    /// The sandbox document for the current snippets.
    pub fn document(&self) -> String {
        sandbox_document(&self.css, &self.html)
    }
}
