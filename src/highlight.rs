use std::collections::BTreeMap;
use std::path::Path;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::as_24_bit_terminal_escaped;

use crate::settings::AppTheme;

const RESET: &str = "\u{1b}[0m";

pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new(app_theme: AppTheme) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let themes = ThemeSet::load_defaults().themes;

        let preferred: &[&str] = match app_theme {
            AppTheme::Ocean => &["base16-ocean.dark", "base16-ocean.light"],
            AppTheme::Eighties => &["base16-eighties.dark", "base16-eighties.light"],
            AppTheme::Solarized => &["Solarized (dark)", "Solarized (light)"],
            AppTheme::Monokai => &["Monokai Extended", "Monokai Extended Bright"],
        };

        Self {
            syntax_set,
            theme: pick_theme(&themes, preferred),
        }
    }

    pub fn language_for_path(&self, path: &str) -> Option<&str> {
        self.syntax_for_path(path).map(|syntax| syntax.name.as_str())
    }

    fn syntax_for_path(&self, path: &str) -> Option<&SyntaxReference> {
        let file_path = Path::new(path);

        if let Some(ext) = file_path.extension().and_then(|value| value.to_str())
            && let Some(syntax) = self.syntax_set.find_syntax_by_extension(ext)
        {
            return Some(syntax);
        }

        file_path
            .file_name()
            .and_then(|value| value.to_str())
            .and_then(|name| self.syntax_set.find_syntax_by_extension(name))
    }

    pub fn highlight_line(&self, line: &str, language: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }

        let syntax = self.syntax_set.find_syntax_by_name(language)?;
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        match highlighter.highlight_line(line, &self.syntax_set) {
            Ok(ranges) if !ranges.is_empty() => {
                let mut escaped = as_24_bit_terminal_escaped(&ranges[..], false);
                escaped.push_str(RESET);
                Some(escaped)
            }
            Ok(_) => None,
            Err(err) => {
                log::warn!("syntax highlighting failed for {language}: {err}");
                None
            }
        }
    }
}

fn pick_theme(themes: &BTreeMap<String, Theme>, preferred: &[&str]) -> Theme {
    preferred
        .iter()
        .find_map(|name| themes.get(*name).cloned())
        .or_else(|| themes.values().next().cloned())
        .unwrap_or_default()
}
