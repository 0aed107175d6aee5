use clap::{Parser, Subcommand};
use csslens_lexer::{Token, TokenKind};
use csslens_render::{HighlightOptions, Playground, PlaygroundError, Preset};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csslens")]
#[command(about = "csslens — see how a lexer reads your CSS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a CSS file
    Tokens {
        /// Input CSS file, or `-` for stdin
        path: String,

        /// Print tokens as a JSON array
        #[arg(long)]
        json: bool,

        /// Leave whitespace tokens out
        #[arg(long)]
        skip_whitespace: bool,

        /// Only print tokens of this kind, e.g. `Dimension` or `at-keyword` (repeatable)
        #[arg(long = "kind", value_name = "KIND")]
        kinds: Vec<TokenKind>,
    },

    /// Count tokens per kind, most frequent first
    Legend {
        /// Input CSS file, or `-` for stdin
        path: String,
    },

    /// Render a CSS file as a highlighted HTML page
    Highlight {
        /// Input CSS file, or `-` for stdin
        path: String,

        /// Output file (default: next to the input, or stdout for stdin)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number every line
        #[arg(long)]
        line_numbers: bool,

        /// Style tokens inline instead of with a stylesheet
        #[arg(long)]
        inline_styles: bool,
    },

    /// Describe the type of one or more CSS values
    Classify {
        /// Values such as `12px` or `"1px solid red"`
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Build the playground preview document for a CSS (and HTML) snippet
    Preview {
        /// CSS snippet file
        #[arg(long, required_unless_present = "preset")]
        css: Option<String>,

        /// HTML snippet file
        #[arg(long)]
        html: Option<String>,

        /// JSON file holding an array of `{ "name", "css", "html" }` presets
        #[arg(long)]
        presets: Option<String>,

        /// Start from the named preset instead of the snippet files
        #[arg(long, requires = "presets")]
        preset: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// CLI error.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error encoding JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid presets in {path}: {source}")]
    Presets {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Playground(#[from] PlaygroundError),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tokens {
            path,
            json,
            skip_whitespace,
            kinds,
        } => cmd_tokens(&path, json, skip_whitespace, &kinds),
        Command::Legend { path } => cmd_legend(&path),
        Command::Highlight {
            path,
            output,
            line_numbers,
            inline_styles,
        } => {
            let options = HighlightOptions {
                inline_styles,
                line_numbers,
                show_whitespace: false,
            };
            cmd_highlight(&path, output, &options)
        }
        Command::Classify { values } => {
            cmd_classify(&values);
            Ok(())
        }
        Command::Preview {
            css,
            html,
            presets,
            preset,
            output,
        } => cmd_preview(
            css.as_deref(),
            html.as_deref(),
            presets.as_deref(),
            preset.as_deref(),
            output,
        ),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_string(),
        source,
    };

    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(read_error)
}

fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn cmd_tokens(
    path: &str,
    json: bool,
    skip_whitespace: bool,
    kinds: &[TokenKind],
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tokens = select_tokens(csslens_lexer::tokenize(&source), skip_whitespace, kinds);
    log::debug!("{path}: {} tokens", tokens.len());

    if json {
        println!("{}", tokens_json(&source, &tokens)?);
    } else {
        print!("{}", format_tokens(&source, &tokens));
    }
    Ok(())
}

fn cmd_legend(path: &str) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tokens = csslens_lexer::tokenize(&source);
    print!("{}", format_legend(&tokens));
    Ok(())
}

fn cmd_highlight(
    path: &str,
    output: Option<PathBuf>,
    options: &HighlightOptions,
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let title = if path == "-" {
        "stdin"
    } else {
        Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
    };
    let page = highlight_page(title, &source, options);

    // Default output sits next to the source, like `style.css` → `style.html`
    let output = output.or_else(|| (path != "-").then(|| Path::new(path).with_extension("html")));
    match output {
        Some(out) => {
            write_output(&out, &page)?;
            eprintln!("Built: {}", out.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

fn cmd_classify(values: &[String]) {
    for value in values {
        println!("{}", format_classification(value));
    }
}

fn cmd_preview(
    css: Option<&str>,
    html: Option<&str>,
    presets: Option<&str>,
    preset: Option<&str>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let css = match css {
        Some(path) => read_source(path)?,
        None => String::new(),
    };
    let html = match html {
        Some(path) => read_source(path)?,
        None => String::new(),
    };
    let presets = match presets {
        Some(path) => parse_presets(path, &read_source(path)?)?,
        None => Vec::new(),
    };
    let doc = preview_document(&css, &html, presets, preset)?;

    match output {
        Some(out) => write_output(&out, &doc),
        None => {
            print!("{doc}");
            Ok(())
        }
    }
}

fn parse_presets(path: &str, json: &str) -> Result<Vec<Preset>, CliError> {
    serde_json::from_str(json).map_err(|source| CliError::Presets {
        path: path.to_string(),
        source,
    })
}

/// The sandbox document for the snippets, or for `preset` when one is named.
fn preview_document(
    css: &str,
    html: &str,
    presets: Vec<Preset>,
    preset: Option<&str>,
) -> Result<String, CliError> {
    let mut playground = Playground::new(css, html).with_presets(presets);
    if let Some(name) = preset {
        playground.apply_preset(name)?;
    }
    Ok(playground.document())
}

fn select_tokens(tokens: Vec<Token>, skip_whitespace: bool, kinds: &[TokenKind]) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| !(skip_whitespace && t.is_whitespace()))
        .filter(|t| kinds.is_empty() || kinds.contains(&t.kind))
        .collect()
}

// =========================================================================
// Output formatting
// =========================================================================

/// One token per line: `line:column  Kind  "text"`.
fn format_tokens(source: &str, tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            let position = format!("{}:{}", t.span.line, t.span.column);
            format!("{position:<8}{:<12}{:?}\n", t.kind.name(), t.text(source))
        })
        .collect()
}

fn tokens_json(source: &str, tokens: &[Token]) -> Result<String, CliError> {
    let records: Vec<serde_json::Value> = tokens
        .iter()
        .map(|t| {
            serde_json::json!({
                "kind": t.kind,
                "text": t.text(source),
                "span": t.span,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn format_legend(tokens: &[Token]) -> String {
    csslens_render::legend(tokens)
        .iter()
        .map(|entry| format!("{:>6}  {}\n", entry.count, csslens_render::style(entry.kind).label))
        .collect()
}

fn format_classification(value: &str) -> String {
    let parts = csslens_values::components(value);
    let ty = csslens_values::classify(value);
    if parts.len() > 1 {
        let labels: Vec<_> = parts.iter().map(|p| p.label()).collect();
        format!("{value}\t{ty} ({})", labels.join(", "))
    } else {
        format!("{value}\t{ty}")
    }
}

/// A standalone HTML page with the highlighted source and its legend.
fn highlight_page(title: &str, source: &str, options: &HighlightOptions) -> String {
    let tokens = csslens_lexer::tokenize(source);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "  <title>{}</title>\n",
        csslens_render::escape_html(title)
    ));
    if !options.inline_styles {
        html.push_str(&format!(
            "  <style>\n{}  </style>\n",
            csslens_render::stylesheet()
        ));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&csslens_render::highlight_html(source, &tokens, options));
    html.push('\n');
    html.push_str(&csslens_render::legend_html(&csslens_render::legend(&tokens)));
    html.push_str("\n</body>\n</html>\n");
    html
}
