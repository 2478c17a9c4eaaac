use difline::Renderer;
use difline::diff::LineKind;
use difline::highlight::Highlighter;
use difline::palette::{Palette, palette_for};
use difline::settings::AppTheme;

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if chars.next() == Some('[') {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

fn rendered_lines(renderer: &Renderer<'_>, input: &str) -> Vec<String> {
    renderer
        .render(input)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

#[test]
fn modified_line_between_context_lines() {
    let palette = palette_for(AppTheme::Ocean);
    let renderer = Renderer::new(palette);
    let lines = rendered_lines(&renderer, " 1 foo\n-2 bar\n+2 baz\n 3 qux");

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], palette.paint(LineKind::Context, " 1 ") + "foo");
    assert_eq!(lines[3], palette.paint(LineKind::Context, " 3 ") + "qux");
    assert_eq!(
        lines[1],
        palette.paint(LineKind::Removed, "-2 ") + &palette.invert(LineKind::Removed, "bar")
    );
    assert_eq!(
        lines[2],
        palette.paint(LineKind::Added, "+2 ") + &palette.invert(LineKind::Added, "baz")
    );
}

#[test]
fn two_removed_one_added_is_block_mode() {
    let palette = palette_for(AppTheme::Solarized);
    let renderer = Renderer::new(palette);
    let lines = rendered_lines(&renderer, "-1 a\n-2 b\n+1 c");

    assert_eq!(
        lines,
        vec![
            palette.paint(LineKind::Removed, "-1 ") + "a",
            palette.paint(LineKind::Removed, "-2 ") + "b",
            palette.paint(LineKind::Added, "+1 ") + "c",
        ]
    );
}

#[test]
fn two_by_two_edit_stays_in_block_mode() {
    let palette = palette_for(AppTheme::Ocean);
    let renderer = Renderer::new(palette);
    let output = renderer.render("-1 let a = 1;\n-2 let b = 2;\n+1 let a = 10;\n+2 let b = 20;");

    assert!(!output.contains(&palette.invert(LineKind::Removed, "1;")));
    assert!(!output.contains(&palette.invert(LineKind::Added, "10;")));
    assert_eq!(
        strip_ansi(&output),
        "-1 let a = 1;\n-2 let b = 2;\n+1 let a = 10;\n+2 let b = 20;"
    );
}

#[test]
fn raw_lines_pass_through_context_styled() {
    let palette = palette_for(AppTheme::Monokai);
    let renderer = Renderer::new(palette);

    assert_eq!(
        renderer.render("diff --git a/x b/x"),
        palette.paint(LineKind::Context, "diff --git a/x b/x")
    );
    assert_eq!(
        Renderer::new(Palette::plain()).render("diff --git a/x b/x"),
        "diff --git a/x b/x"
    );
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(Renderer::new(palette_for(AppTheme::Ocean)).render(""), "");
}

#[test]
fn tab_escapes_become_three_spaces_before_diffing() {
    let renderer = Renderer::new(Palette::plain());
    assert_eq!(
        renderer.render("-1 \\tfoo\n+1 \\t\\tfoo"),
        "-1    foo\n+1       foo"
    );
}

#[test]
fn line_number_padding_is_preserved() {
    let renderer = Renderer::new(Palette::plain());
    let input = "   9 nine\n-  10 ten\n+  10 TEN\n+  11 eleven";
    assert_eq!(renderer.render(input), input);
}

#[test]
fn every_input_line_yields_one_output_line() {
    let renderer = Renderer::new(palette_for(AppTheme::Eighties));
    let input = [
        "diff --git a/src/lib.rs b/src/lib.rs",
        "@@ -1,6 +1,7 @@",
        " 1 use std::fmt;",
        "-2 fn old() {}",
        "+2 fn new() {}",
        "+3 fn extra() {}",
        " 4 ",
        "-5     indent()",
        "+5   indent()",
        "+6 // added",
        "",
        "-7 gone",
    ]
    .join("\n");

    let output = renderer.render(&input);
    assert_eq!(output.split('\n').count(), input.split('\n').count());
    assert_eq!(strip_ansi(&output), input);
}

#[test]
fn indentation_only_change_highlights_nothing() {
    let palette = palette_for(AppTheme::Ocean);
    let renderer = Renderer::new(palette);
    let lines = rendered_lines(&renderer, "-5     call()\n+5   call()");

    assert_eq!(strip_ansi(&lines[0]), "-5     call()");
    assert_eq!(strip_ansi(&lines[1]), "+5   call()");
    assert!(!lines[0].contains("\u{1b}[7m"));
    assert!(!lines[1].contains("\u{1b}[7m"));
}

#[test]
fn syntax_highlighting_keeps_visible_text() {
    let highlighter = Highlighter::new(AppTheme::Monokai);
    let line = "let answer = 42;";
    let styled = highlighter
        .highlight_line(line, "Rust")
        .expect("rust line should highlight");

    assert_ne!(styled, line);
    assert_eq!(strip_ansi(&styled), line);
}

#[test]
fn digit_content_with_empty_line_number_keeps_its_category() {
    let palette = palette_for(AppTheme::Ocean);
    let lines = rendered_lines(&Renderer::new(palette), "- 1\n+ 2");

    assert_eq!(
        lines,
        vec![
            palette.paint(LineKind::Removed, "- ") + &palette.invert(LineKind::Removed, "1"),
            palette.paint(LineKind::Added, "+ ") + &palette.invert(LineKind::Added, "2"),
        ]
    );
}

#[test]
fn rendering_is_deterministic() {
    let highlighter = Highlighter::new(AppTheme::Ocean);
    let renderer =
        Renderer::new(palette_for(AppTheme::Ocean)).with_syntax(&highlighter, Some("main.rs"));
    let input = " 1 fn main() {\n-2     println!(\"hi\");\n+2     println!(\"hello\");\n 3 }";

    assert_eq!(renderer.render(input), renderer.render(input));
    assert_eq!(strip_ansi(&renderer.render(input)), input);
}
