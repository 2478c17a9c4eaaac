#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Context,
    Added,
    Removed,
}

impl LineKind {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ' ' => Some(Self::Context),
            '+' => Some(Self::Added),
            '-' => Some(Self::Removed),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Context => ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineNumber(String);

impl LineNumber {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: LineKind,
    pub line_number: LineNumber,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Raw(String),
    Context(DiffLine),
    Added(Vec<DiffLine>),
    Change {
        removed: Vec<DiffLine>,
        added: Vec<DiffLine>,
    },
}

const TAB_ESCAPE: &str = "\\t";
const TAB_REPLACEMENT: &str = "   ";

// Targets the literal backslash-t escape, not the tab character.
pub fn expand_tab_escapes(text: &str) -> String {
    text.replace(TAB_ESCAPE, TAB_REPLACEMENT)
}

pub fn parse_line(raw_line: &str) -> Option<DiffLine> {
    let mut chars = raw_line.chars();
    let kind = LineKind::from_marker(chars.next()?)?;
    let rest = chars.as_str();

    let padding = rest.len() - rest.trim_start_matches(' ').len();
    let digits = rest[padding..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    let token_end = padding + digits;
    let (token, content) = match rest[token_end..].strip_prefix(' ') {
        Some(content) if digits > 0 => (&rest[..token_end], content),
        // Blank-only token: the last blank is the separator and any digits
        // after it belong to the content.
        _ => {
            let separator = padding.checked_sub(1)?;
            (&rest[..separator], &rest[padding..])
        }
    };

    Some(DiffLine {
        kind,
        line_number: LineNumber::new(token),
        content: expand_tab_escapes(content),
    })
}

pub fn group_blocks<'a, I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = &'a str>,
{
    let parsed = lines
        .into_iter()
        .map(|line| parse_line(line).ok_or(line))
        .collect::<Vec<_>>();

    let mut blocks = Vec::new();
    let mut cursor = 0usize;

    while cursor < parsed.len() {
        match &parsed[cursor] {
            Err(raw) => {
                blocks.push(Block::Raw(expand_tab_escapes(raw)));
                cursor += 1;
            }
            Ok(line) if line.kind == LineKind::Context => {
                blocks.push(Block::Context(line.clone()));
                cursor += 1;
            }
            Ok(line) if line.kind == LineKind::Removed => {
                let removed = take_run(&parsed, &mut cursor, LineKind::Removed);
                let added = take_run(&parsed, &mut cursor, LineKind::Added);
                blocks.push(Block::Change { removed, added });
            }
            Ok(_) => {
                let added = take_run(&parsed, &mut cursor, LineKind::Added);
                blocks.push(Block::Added(added));
            }
        }
    }

    blocks
}

fn take_run(
    parsed: &[Result<DiffLine, &str>],
    cursor: &mut usize,
    kind: LineKind,
) -> Vec<DiffLine> {
    let mut run = Vec::new();
    while let Some(Ok(line)) = parsed.get(*cursor) {
        if line.kind != kind {
            break;
        }
        run.push(line.clone());
        *cursor += 1;
    }
    run
}
