use crate::diff::{Block, DiffLine, LineKind, group_blocks};
use crate::highlight::Highlighter;
use crate::pairing::{PairMode, mode_for};
use crate::palette::Palette;
use crate::word_diff::{HighlightedLine, SimilarWordDiff, WordDiff, highlight_pair};

// Syntax color never stacks with the category color or the inversion marker.
enum LineContent<'a> {
    Plain(&'a str),
    Syntax(String),
    WordLevel(&'a HighlightedLine),
}

pub struct Renderer<'a, D = SimilarWordDiff> {
    palette: Palette,
    highlighter: Option<&'a Highlighter>,
    language: Option<String>,
    word_diff: D,
}

impl<'a> Renderer<'a, SimilarWordDiff> {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            highlighter: None,
            language: None,
            word_diff: SimilarWordDiff,
        }
    }
}

impl<'a, D: WordDiff> Renderer<'a, D> {
    pub fn with_word_diff<E: WordDiff>(self, word_diff: E) -> Renderer<'a, E> {
        Renderer {
            palette: self.palette,
            highlighter: self.highlighter,
            language: self.language,
            word_diff,
        }
    }

    pub fn with_syntax(mut self, highlighter: &'a Highlighter, path: Option<&str>) -> Self {
        self.language = path
            .and_then(|path| highlighter.language_for_path(path))
            .map(str::to_owned);
        match (&self.language, path) {
            (Some(language), _) => log::debug!("highlighting as {language}"),
            (None, Some(path)) => log::debug!("no syntax for `{path}`, highlighting disabled"),
            (None, None) => {}
        }
        self.highlighter = Some(highlighter);
        self
    }

    pub fn render(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut rendered = Vec::new();
        for block in group_blocks(input.split('\n')) {
            match block {
                Block::Raw(text) => rendered.push(self.palette.paint(LineKind::Context, &text)),
                Block::Context(line) => rendered.push(self.render_line(&line)),
                Block::Added(run) => rendered.extend(run.iter().map(|line| self.render_line(line))),
                Block::Change { removed, added } => {
                    self.render_change(&removed, &added, &mut rendered)
                }
            }
        }

        rendered.join("\n")
    }

    fn render_change(&self, removed: &[DiffLine], added: &[DiffLine], out: &mut Vec<String>) {
        match (mode_for(removed, added), removed, added) {
            (PairMode::IntraLine, [old], [new]) => {
                let pair = highlight_pair(&self.word_diff, &old.content, &new.content);
                out.push(self.compose(old, LineContent::WordLevel(&pair.removed)));
                out.push(self.compose(new, LineContent::WordLevel(&pair.added)));
            }
            (mode, _, _) => {
                log::debug!(
                    "{mode:?} rendering for {} removed / {} added lines",
                    removed.len(),
                    added.len()
                );
                out.extend(removed.iter().map(|line| self.render_line(line)));
                out.extend(added.iter().map(|line| self.render_line(line)));
            }
        }
    }

    pub fn render_line(&self, line: &DiffLine) -> String {
        let highlighted = match (self.highlighter, self.language.as_deref()) {
            (Some(highlighter), Some(language)) => {
                highlighter.highlight_line(&line.content, language)
            }
            _ => None,
        };

        let content = match highlighted {
            Some(styled) => LineContent::Syntax(styled),
            None => LineContent::Plain(&line.content),
        };
        self.compose(line, content)
    }

    fn compose(&self, line: &DiffLine, content: LineContent<'_>) -> String {
        let prefix = format!("{}{} ", line.kind.marker(), line.line_number.as_str());
        let mut out = self.palette.paint(line.kind, &prefix);

        match content {
            LineContent::Plain(text) => out.push_str(text),
            LineContent::Syntax(styled) => out.push_str(&styled),
            LineContent::WordLevel(highlighted) => {
                for segment in &highlighted.segments {
                    let styled = if segment.emphasized {
                        self.palette.invert(line.kind, &segment.text)
                    } else {
                        self.palette.paint(line.kind, &segment.text)
                    };
                    out.push_str(&styled);
                }
            }
        }

        out
    }
}
