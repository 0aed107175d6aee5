//! HTML rendering of a token stream.
//!
//! Produces a `<pre>` block with one `<span>` per token, grouped into line
//! spans. Token text is HTML-escaped; stripping the tags and unescaping gives
//! back the source exactly.

use csslens_lexer::{Token, TokenKind};

use crate::legend::LegendEntry;
use crate::lines::lines;
use crate::style::{class_name, style};

/// Options for [`highlight_html`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Add `style="..."` to every token span, for pages without [`stylesheet`](crate::stylesheet).
    pub inline_styles: bool,
    /// Add `data-line="N"` to every line span.
    pub line_numbers: bool,
    /// Wrap whitespace in its own token span instead of emitting it bare.
    pub show_whitespace: bool,
}

/// Render tokens scanned from `source` as highlighted HTML.
pub fn highlight_html(source: &str, tokens: &[Token], options: &HighlightOptions) -> String {
    let mut out = String::from("<pre class=\"csslens\"><code>");

    for (index, line) in lines(source, tokens).iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if options.line_numbers {
            out.push_str(&format!("<span class=\"line\" data-line=\"{}\">", index + 1));
        } else {
            out.push_str("<span class=\"line\">");
        }
        for token in line {
            push_token(&mut out, token.kind, token.text(source), options);
        }
        out.push_str("</span>");
    }

    out.push_str("</code></pre>");
    out
}

fn push_token(out: &mut String, kind: TokenKind, text: &str, options: &HighlightOptions) {
    if kind == TokenKind::Whitespace && !options.show_whitespace {
        out.push_str(text);
        return;
    }

    out.push_str("<span class=\"tok ");
    out.push_str(&class_name(kind));
    out.push('"');
    if options.inline_styles {
        out.push_str(" style=\"");
        out.push_str(&style(kind).declarations());
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Render a legend as an HTML list, one item per kind.
pub fn legend_html(entries: &[LegendEntry]) -> String {
    let mut out = String::from("<ul class=\"csslens-legend\">");
    for entry in entries {
        let style = style(entry.kind);
        out.push_str(&format!(
            "<li class=\"{}\"><span class=\"swatch\" style=\"background:{}\"></span>{} <b>{}</b></li>",
            class_name(entry.kind),
            style.color,
            style.label,
            entry.count
        ));
    }
    out.push_str("</ul>");
    out
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::legend;
    use csslens_lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn render(source: &str, options: HighlightOptions) -> String {
        highlight_html(source, &tokenize(source), &options)
    }

    /// Strip tags and undo escaping. Escaped text never contains `<`.
    fn plain_text(html: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("a > b & 'c' \"d\" <e>"),
            "a &gt; b &amp; &#39;c&#39; &quot;d&quot; &lt;e&gt;"
        );
    }

    #[test]
    fn test_simple_declaration() {
        assert_eq!(
            render("a: 1px", HighlightOptions::default()),
            "<pre class=\"csslens\"><code><span class=\"line\">\
             <span class=\"tok tok-identifier\">a</span>\
             <span class=\"tok tok-colon\">:</span> \
             <span class=\"tok tok-dimension\">1px</span>\
             </span></code></pre>"
        );
    }

    #[test]
    fn test_inline_styles() {
        let html = render(
            "@media",
            HighlightOptions {
                inline_styles: true,
                ..Default::default()
            },
        );
        assert!(html.contains(
            "<span class=\"tok tok-at-keyword\" style=\"color:#7c3aed;font-weight:bold\">@media</span>"
        ));
    }

    #[test]
    fn test_line_numbers() {
        let html = render(
            "a\nb",
            HighlightOptions {
                line_numbers: true,
                ..Default::default()
            },
        );
        assert!(html.contains("<span class=\"line\" data-line=\"1\">"));
        assert!(html.contains("<span class=\"line\" data-line=\"2\">"));
        assert!(!html.contains("data-line=\"3\""));
    }

    #[test]
    fn test_show_whitespace() {
        let html = render(
            "a b",
            HighlightOptions {
                show_whitespace: true,
                ..Default::default()
            },
        );
        assert!(html.contains("<span class=\"tok tok-whitespace\"> </span>"));
    }

    #[test]
    fn test_escapes_token_text() {
        let html = render("content: \"<b>\"", HighlightOptions::default());
        assert!(html.contains("&quot;&lt;b&gt;&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_plain_text_reproduces_source() {
        let source = "/* <theme> */\n.a > .b { content: '&'; }\n\n@media (x) {}\n";
        for options in [
            HighlightOptions::default(),
            HighlightOptions {
                inline_styles: true,
                line_numbers: true,
                show_whitespace: true,
            },
        ] {
            assert_eq!(plain_text(&render(source, options)), source);
        }
    }

    #[test]
    fn test_legend_html() {
        let html = legend_html(&legend(&tokenize("a b {")));
        assert_eq!(
            html,
            "<ul class=\"csslens-legend\">\
             <li class=\"tok-identifier\"><span class=\"swatch\" style=\"background:#2563eb\"></span>identifier <b>2</b></li>\
             <li class=\"tok-left-brace\"><span class=\"swatch\" style=\"background:#0f172a\"></span>left brace <b>1</b></li>\
             </ul>"
        );
    }
}
