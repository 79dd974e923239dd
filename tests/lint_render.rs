//! Lint: keep click targets and their rendering in step.
//!
//! 1. Every action ID declared in `actions.rs` must be registered by
//!    `render.rs` and dispatched by `mod.rs`. An ID that is dispatched but
//!    never rendered is unreachable by touch; one that is rendered but never
//!    dispatched is a dead button.
//! 2. `render.rs` must not spell out bracket-key text (`[S]`) in string
//!    literals. Buttons go through `ButtonBar`, which builds the label and
//!    registers its tap region together.

use std::fs;
use std::path::{Path, PathBuf};

fn dessert_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/dessert")
}

/// Extract `pub const NAME: u16` names from an actions module.
fn action_names(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("pub const "))
        .filter_map(|rest| {
            let (name, ty) = rest.split_once(':')?;
            ty.trim_start().starts_with("u16").then(|| name.trim().to_string())
        })
        .collect()
}

/// Lines of code, with `//` comments and the `#[cfg(test)]` tail removed.
fn code_lines(source: &str) -> Vec<(usize, &str)> {
    source
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line))
        .collect()
}

fn mentions(source: &str, name: &str) -> bool {
    code_lines(source).iter().any(|(_, line)| {
        line.match_indices(name).any(|(at, _)| {
            let before = line[..at].chars().next_back();
            let after = line[at + name.len()..].chars().next();
            let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
            !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
        })
    })
}

/// Check if a string contains a bracket-key pattern like `[I]`, `[S]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes
        .windows(3)
        .any(|w| w[0] == b'[' && w[2] == b']' && w[1].is_ascii_alphanumeric())
}

/// String literals on a line (naive: good enough for `"..."` without escapes of quotes).
fn string_literals(line: &str) -> Vec<&str> {
    line.split('"').skip(1).step_by(2).collect()
}

fn find_bracket_keys(source: &str) -> Vec<(usize, String)> {
    code_lines(source)
        .into_iter()
        .filter(|(_, line)| string_literals(line).into_iter().any(contains_bracket_key))
        .map(|(n, line)| (n, line.trim().to_string()))
        .collect()
}

#[test]
fn every_action_is_rendered_and_dispatched() {
    let dir = dessert_dir();
    let actions = fs::read_to_string(dir.join("actions.rs")).expect("actions.rs");
    let render = fs::read_to_string(dir.join("render.rs")).expect("render.rs");
    let dispatch = fs::read_to_string(dir.join("mod.rs")).expect("mod.rs");

    let names = action_names(&actions);
    assert!(!names.is_empty(), "no action IDs found in actions.rs");

    let mut problems = Vec::new();
    for name in &names {
        if !mentions(&render, name) {
            problems.push(format!("  {name}: never registered as a click target in render.rs"));
        }
        if !mentions(&dispatch, name) {
            problems.push(format!("  {name}: never dispatched in mod.rs"));
        }
    }
    assert!(problems.is_empty(), "Action ID problems:\n{}", problems.join("\n"));
}

#[test]
fn no_hand_written_bracket_keys_in_render() {
    let render = fs::read_to_string(dessert_dir().join("render.rs")).expect("render.rs");
    let violations = find_bracket_keys(&render);
    if !violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in render.rs string literals.\n\
             Use ButtonBar so the label and its tap region are registered together.\n\n",
        );
        for (line_num, line) in &violations {
            msg.push_str(&format!("  render.rs:{}: {}\n", line_num, line));
        }
        panic!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_names() {
        let src = "// ── App bar ──\npub const TOGGLE_THEME: u16 = 10;\npub const LABEL: &str = \"x\";\n";
        assert_eq!(action_names(src), vec!["TOGGLE_THEME".to_string()]);
    }

    #[test]
    fn mention_requires_whole_identifier() {
        let src = "let x = SHARE_SUMMARY_EXTRA;\n";
        assert!(!mentions(src, "SHARE_SUMMARY"));
        assert!(mentions("    SHARE_SUMMARY => {\n", "SHARE_SUMMARY"));
    }

    #[test]
    fn mentions_ignore_comments_and_tests() {
        let src = "// SELL_DESSERT\nfn f() {}\n#[cfg(test)]\nmod tests { SELL_DESSERT }\n";
        assert!(!mentions(src, "SELL_DESSERT"));
    }

    #[test]
    fn detects_bracket_key_literal() {
        let src = r#"Span::raw("[S] Share"),"#;
        assert_eq!(find_bracket_keys(src).len(), 1);
    }

    #[test]
    fn allows_button_bar() {
        let src = r#".button('s', "Share", style, SHARE_SUMMARY)"#;
        assert!(find_bracket_keys(src).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[I]"));
        assert!(contains_bracket_key("[1]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[II]"));
        assert!(!contains_bracket_key("abc"));
    }
}
