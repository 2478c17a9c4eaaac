use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Unchanged,
    RemovedOnly,
    AddedOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDiffPart {
    pub kind: PartKind,
    pub text: String,
}

impl WordDiffPart {
    pub fn new(kind: PartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// Unchanged + RemovedOnly parts concatenate to `old`, Unchanged + AddedOnly
// parts to `new`.
pub trait WordDiff {
    fn diff_words(&self, old: &str, new: &str) -> Vec<WordDiffPart>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarWordDiff;

impl WordDiff for SimilarWordDiff {
    fn diff_words(&self, old: &str, new: &str) -> Vec<WordDiffPart> {
        let diff = TextDiff::from_words(old, new);
        let mut parts: Vec<WordDiffPart> = Vec::new();

        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => PartKind::Unchanged,
                ChangeTag::Delete => PartKind::RemovedOnly,
                ChangeTag::Insert => PartKind::AddedOnly,
            };
            let text = change.value();
            if text.is_empty() {
                continue;
            }

            match parts.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(text),
                _ => parts.push(WordDiffPart::new(kind, text)),
            }
        }

        parts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedLine {
    pub segments: Vec<Segment>,
}

impl HighlightedLine {
    fn push(&mut self, text: &str, emphasized: bool) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.emphasized == emphasized => last.text.push_str(text),
            _ => self.segments.push(Segment {
                text: text.to_owned(),
                emphasized,
            }),
        }
    }

    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }

    pub fn emphasized_text(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|segment| segment.emphasized)
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntraLinePair {
    pub removed: HighlightedLine,
    pub added: HighlightedLine,
}

#[derive(Default)]
struct SideState {
    line: HighlightedLine,
    first_seen: bool,
}

impl SideState {
    fn push_changed(&mut self, text: &str) {
        let mut rest = text;
        if !self.first_seen {
            // Indentation-only differences are not flagged as changed words.
            let trimmed = text.trim_start();
            self.line.push(&text[..text.len() - trimmed.len()], false);
            self.first_seen = true;
            rest = trimmed;
        }
        self.line.push(rest, true);
    }
}

pub fn highlight_pair<D>(word_diff: &D, removed: &str, added: &str) -> IntraLinePair
where
    D: WordDiff + ?Sized,
{
    let mut removed_side = SideState::default();
    let mut added_side = SideState::default();

    for part in word_diff.diff_words(removed, added) {
        match part.kind {
            PartKind::Unchanged => {
                removed_side.line.push(&part.text, false);
                added_side.line.push(&part.text, false);
            }
            PartKind::RemovedOnly => removed_side.push_changed(&part.text),
            PartKind::AddedOnly => added_side.push_changed(&part.text),
        }
    }

    IntraLinePair {
        removed: removed_side.line,
        added: added_side.line,
    }
}
