//! WASM bindings for the csslens visualizer.
//!
//! Exposes the scanner and its projections to the browser widget via
//! wasm-bindgen. Token lists cross the boundary as plain JS objects
//! `{ kind, text, start, end, line, column }`.

use csslens_lexer::Token;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A token as handed to JavaScript, with its text materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
    pub kind: &'static str,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl TokenView {
    fn new(source: &str, token: &Token) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text(source).to_string(),
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

fn token_views(source: &str) -> Vec<TokenView> {
    csslens_lexer::tokenize(source)
        .iter()
        .map(|t| TokenView::new(source, t))
        .collect()
}

fn line_views(source: &str) -> Vec<Vec<TokenView>> {
    let tokens = csslens_lexer::tokenize(source);
    csslens_render::lines(source, &tokens)
        .iter()
        .map(|line| line.iter().map(|t| TokenView::new(source, t)).collect())
        .collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Tokenize CSS source.
///
/// Returns an array of `{ kind, text, start, end, line, column }`.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    to_js(&token_views(source))
}

/// Tokenize and split into display lines: an array of token arrays.
#[wasm_bindgen]
pub fn lines(source: &str) -> Result<JsValue, JsError> {
    to_js(&line_views(source))
}

/// Token counts per kind, most frequent first, whitespace excluded.
///
/// Returns an array of `{ kind, label, count, color }`.
#[wasm_bindgen]
pub fn legend(source: &str) -> Result<JsValue, JsError> {
    let tokens = csslens_lexer::tokenize(source);
    let entries = js_sys::Array::new();

    for entry in csslens_render::legend(&tokens) {
        let style = csslens_render::style(entry.kind);
        let obj = js_sys::Object::new();
        set(&obj, "kind", entry.kind.name().into())?;
        set(&obj, "label", style.label.into())?;
        set(&obj, "count", (entry.count as f64).into())?;
        set(&obj, "color", style.color.into())?;
        entries.push(&obj);
    }

    Ok(entries.into())
}

fn set(obj: &js_sys::Object, key: &str, value: JsValue) -> Result<(), JsError> {
    js_sys::Reflect::set(obj, &key.into(), &value)
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
}

/// Highlighted HTML for CSS source, with inline styles.
#[wasm_bindgen]
pub fn highlight(source: &str, line_numbers: bool) -> String {
    let tokens = csslens_lexer::tokenize(source);
    let options = csslens_render::HighlightOptions {
        inline_styles: true,
        line_numbers,
        show_whitespace: false,
    };
    csslens_render::highlight_html(source, &tokens, &options)
}

/// Describe the type of a CSS value, e.g. `"length"` for `12px`.
#[wasm_bindgen]
pub fn classify(value: &str) -> String {
    csslens_values::classify(value).label().to_string()
}

/// Build the preview document for a CSS and HTML snippet.
#[wasm_bindgen]
pub fn sandbox(css: &str, html: &str) -> String {
    csslens_render::sandbox_document(css, html)
}

/// Editable playground state for one demo, held on the JS side.
#[wasm_bindgen(js_name = Playground)]
pub struct PlaygroundHandle {
    inner: csslens_render::Playground,
}

#[wasm_bindgen(js_class = Playground)]
impl PlaygroundHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(css: &str, html: &str) -> PlaygroundHandle {
        PlaygroundHandle {
            inner: csslens_render::Playground::new(css, html),
        }
    }

    #[wasm_bindgen(js_name = addPreset)]
    pub fn add_preset(&mut self, name: &str, css: &str, html: &str) {
        self.inner.add_preset(csslens_render::Preset::new(name, css, html));
    }

    /// Swap in a preset's snippets. Throws for an unknown name.
    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&mut self, name: &str) -> Result<(), JsError> {
        self.inner
            .apply_preset(name)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = presetNames)]
    pub fn preset_names(&self) -> Vec<String> {
        self.inner.preset_names().map(str::to_string).collect()
    }

    /// Name of the preset last applied, `undefined` after a manual edit.
    #[wasm_bindgen(getter, js_name = activePreset)]
    pub fn active_preset(&self) -> Option<String> {
        self.inner.active_preset().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn css(&self) -> String {
        self.inner.css().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.inner.html().to_string()
    }

    #[wasm_bindgen(js_name = setCss)]
    pub fn set_css(&mut self, css: &str) {
        self.inner.set_css(css);
    }

    #[wasm_bindgen(js_name = setHtml)]
    pub fn set_html(&mut self, html: &str) {
        self.inner.set_html(html);
    }

    /// The preview document for the current snippets.
    pub fn document(&self) -> String {
        self.inner.document()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): the data behind each export
    // =========================================================================

    #[test]
    fn test_empty_source() {
        assert!(token_views("").is_empty());
        assert_eq!(line_views("").len(), 1);
    }

    #[test]
    fn test_token_views() {
        assert_eq!(
            token_views("a:1%"),
            vec![
                TokenView {
                    kind: "Identifier",
                    text: "a".into(),
                    start: 0,
                    end: 1,
                    line: 1,
                    column: 1,
                },
                TokenView {
                    kind: "Colon",
                    text: ":".into(),
                    start: 1,
                    end: 2,
                    line: 1,
                    column: 2,
                },
                TokenView {
                    kind: "Percentage",
                    text: "1%".into(),
                    start: 2,
                    end: 4,
                    line: 1,
                    column: 3,
                },
            ]
        );
    }

    #[test]
    fn test_token_view_texts_rebuild_source() {
        let source = "p { margin: 0 auto; } /* é */";
        let text: String = token_views(source).into_iter().map(|t| t.text).collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_line_views() {
        let views = line_views("a {\n}");
        assert_eq!(views.len(), 2);
        assert_eq!(views[1][0].kind, "RightBrace");
        assert_eq!(views[1][0].line, 2);
    }

    #[test]
    fn test_highlight_uses_inline_styles() {
        let html = highlight("#fff", true);
        assert!(html.contains("style=\"color:#db2777\""));
        assert!(html.contains("data-line=\"1\""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("12px"), "length");
        assert_eq!(classify("1px solid red"), "list");
        assert_eq!(classify(""), "empty");
    }

    #[test]
    fn test_sandbox() {
        let doc = sandbox("p{}", "<p>x</p>");
        assert!(doc.contains("p{}"));
        assert!(doc.contains("<p>x</p>"));
    }

    #[test]
    fn test_playground_presets() {
        let mut demo = PlaygroundHandle::new(".box { color: red; }", "<div></div>");
        demo.add_preset("blue", ".box { color: blue; }", "<div>b</div>");
        demo.add_preset("green", ".box { color: green; }", "");
        assert_eq!(demo.preset_names(), vec!["blue", "green"]);

        demo.apply_preset("green").unwrap();
        assert_eq!(demo.css(), ".box { color: green; }");
        assert_eq!(demo.html(), "");
        assert_eq!(demo.active_preset().as_deref(), Some("green"));
        assert!(demo.document().contains(".box { color: green; }"));
    }

    #[test]
    fn test_playground_edits() {
        let mut demo = PlaygroundHandle::new("", "");
        demo.add_preset("blue", ".box { color: blue; }", "");
        demo.apply_preset("blue").unwrap();
        demo.set_css("p { margin: 0; }");
        demo.set_html("<p>x</p>");
        assert_eq!(demo.active_preset(), None);
        let doc = demo.document();
        assert!(doc.contains("p { margin: 0; }"));
        assert!(doc.contains("<p>x</p>"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = token_views("a");
        let _ = token_views("b c d");
        assert_eq!(token_views("a"), first);
    }
}
