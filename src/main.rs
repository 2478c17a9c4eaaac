use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use difline::Renderer;
use difline::highlight::Highlighter;
use difline::palette::{Palette, palette_for};
use difline::settings::{self, AppTheme, ColorChoice, RenderSettings};

/// Render a prefixed-line diff with word-level highlighting.
#[derive(Debug, Parser)]
#[command(name = "difline", version)]
struct Cli {
    /// Diff to render; reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Path of the changed file, used to pick a syntax highlighting language.
    #[arg(long)]
    path: Option<String>,

    #[arg(long, value_enum)]
    theme: Option<AppTheme>,

    /// When to emit colors.
    #[arg(long, value_enum, value_name = "WHEN")]
    color: Option<ColorChoice>,

    /// Disable syntax highlighting of unpaired lines.
    #[arg(long, default_value_t = false)]
    no_syntax: bool,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => settings::load_from(path)?,
            None => settings::load()?,
        };

        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(color) = self.color {
            settings.color = color;
        }
        if self.no_syntax {
            settings.syntax_highlight = false;
        }

        Ok(settings)
    }

    fn read_input(&self) -> Result<String> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("failed to read diff from `{}`", path.display())),
            _ => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read diff from stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let input = cli.read_input()?;

    let colored = settings.color.enabled();
    log::debug!(
        "theme {}, color {}, syntax {}",
        settings.theme.label(),
        colored,
        settings.syntax_highlight
    );

    let palette = if colored {
        palette_for(settings.theme)
    } else {
        Palette::plain()
    };

    let highlighter =
        (colored && settings.syntax_highlight).then(|| Highlighter::new(settings.theme));
    let mut renderer = Renderer::new(palette);
    if let Some(highlighter) = &highlighter {
        renderer = renderer.with_syntax(highlighter, cli.path.as_deref());
    }

    let rendered = renderer.render(input.strip_suffix('\n').unwrap_or(&input));
    let mut stdout = io::stdout().lock();
    if !rendered.is_empty() {
        writeln!(stdout, "{rendered}").context("failed to write rendered diff")?;
    }

    Ok(())
}
