//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! End-to-end lexing of terminal captures

use proptest::prelude::*;
use std::sync::Arc;
use wallart_lexer::{Decoration, Lexer, LexerConfig, StyleState, StyledRun, scan, strip_escapes};
use wallart_palette::{Color, TerminalPalette, Theme};

const WHITE: Color = Color::new(0xff, 0xff, 0xff);
const RED: Color = Color::new(0xff, 0x00, 0x00);

/// White on nothing, with 31 resolving to red and everything else to grey.
struct TestTheme;

impl Theme for TestTheme {
    fn default_foreground(&self) -> Color {
        WHITE
    }

    fn resolve(&self, code: u32) -> Color {
        match code {
            31 => RED,
            _ => Color::new(0x80, 0x80, 0x80),
        }
    }
}

#[test]
fn test_red_word_between_defaults() {
    let runs: Vec<_> = scan("A\x1b[31mB\x1b[0mC", &TestTheme).collect();
    let summary: Vec<(&str, Color)> = runs.iter().map(|r| (r.text, r.style.foreground)).collect();
    assert_eq!(summary, vec![("A", WHITE), ("B", RED), ("C", WHITE)]);
    assert!(runs.iter().all(|r| r.style.background.is_none()));
}

#[test]
fn test_compiler_style_capture() {
    let palette = TerminalPalette::xterm();
    let capture = "\x1b[1;31;40merror\x1b[0m\x1b[1m: unused variable\x1b[0m\n  \x1b[34m-->\x1b[0m src/main.rs\n";
    let runs: Vec<_> = scan(capture, &palette).collect();
    let text: String = runs.iter().map(|r| r.text).collect();
    assert_eq!(text, "error: unused variable\n  --> src/main.rs\n");

    let error = runs.iter().find(|r| r.text == "error").unwrap();
    assert_eq!(error.style.decoration, Some(Decoration::Bold));
    assert_eq!(error.style.foreground, palette.resolve(31));
    assert_eq!(error.style.background, Some(palette.resolve(40)));

    let message = runs.iter().find(|r| r.text == ": unused variable").unwrap();
    assert!(message.style.is_bold());
    assert_eq!(message.style.foreground, palette.default_foreground());
    assert_eq!(message.style.background, None);

    let arrow = runs.iter().find(|r| r.text == "-->").unwrap();
    assert_eq!(arrow.style.foreground, palette.resolve(34));
    assert_eq!(arrow.style.decoration, None);
}

#[test]
fn test_two_argument_aliasing_end_to_end() {
    let runs: Vec<_> = scan("\x1b[1;31mX", &TestTheme).collect();
    let last = runs.last().unwrap();
    assert!(last.style.is_bold());
    // The second argument selects the background, not the foreground
    assert_eq!(last.style.foreground, WHITE);
    assert_eq!(last.style.background, Some(RED));
}

#[test]
fn test_indexed_color_selectors_read_as_three_arguments() {
    let palette = TerminalPalette::xterm();
    let orange = Color::new(0xff, 0x87, 0x00);

    // Style 38 and foreground 5 select nothing; 208 lands in the background
    let runs: Vec<_> = scan("\x1b[38;5;208mX", &palette).collect();
    let last = runs.last().unwrap();
    assert_eq!(last.text, "X");
    assert_eq!(last.style.foreground, palette.default_foreground());
    assert_eq!(last.style.background, Some(orange));
    assert_eq!(last.style.decoration, None);
    assert_ne!(last.style.background, Some(last.style.foreground));

    let runs: Vec<_> = scan("\x1b[31m\x1b[48;5;21mX", &palette).collect();
    let last = runs.last().unwrap();
    assert_eq!(last.style.foreground, palette.resolve(31));
    assert_eq!(last.style.background, Some(Color::new(0x00, 0x00, 0xff)));
}

#[test]
fn test_scans_are_independent() {
    let lexer = Lexer::new(TerminalPalette::xterm());
    let first: Vec<_> = lexer.scan("\x1b[4mfirst").collect();
    let second: Vec<_> = lexer.scan("second").collect();
    assert!(first[1].style.is_underline());
    assert_eq!(second[0].style, StyleState::new(lexer.theme()));
}

#[test]
fn test_lexer_shared_across_threads() {
    let lexer = Arc::new(Lexer::with_config(
        TerminalPalette::witchhazel(),
        LexerConfig::new().with_suppress_empty_runs(true),
    ));
    let handles: Vec<_> = (31..=37)
        .map(|code| {
            let lexer = lexer.clone();
            std::thread::spawn(move || {
                let input = format!("\x1b[{}mcolored\x1b[0m plain", code);
                lexer
                    .scan(&input)
                    .map(|run| (run.text.to_string(), run.style.foreground))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (code, handle) in (31..=37).zip(handles) {
        let runs = handle.join().unwrap();
        assert_eq!(
            runs,
            vec![
                ("colored".to_string(), lexer.theme().resolve(code)),
                (" plain".to_string(), lexer.theme().default_foreground()),
            ]
        );
    }
}

fn escape() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..120).prop_map(|a| format!("\x1b[{}m", a)),
        (0u32..120, 0u32..120).prop_map(|(a, b)| format!("\x1b[{};{}m", a, b)),
        (0u32..120, 0u32..120, 0u32..120).prop_map(|(a, b, c)| format!("\x1b[{};{};{}m", a, b, c)),
    ]
}

fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ;\\[\\]\t\n日本é]{0,12}"
}

fn chunks() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((literal(), escape()), 0..8)
}

fn check_offsets(input: &str, runs: &[StyledRun<'_>]) {
    let mut last = 0;
    for run in runs {
        assert!(run.start >= last);
        assert_eq!(&input[run.start..run.end()], run.text);
        last = run.end();
    }
}

proptest! {
    #[test]
    fn prop_runs_cover_text_without_escapes(parts in chunks(), tail in literal()) {
        let mut input = String::new();
        let mut expected = String::new();
        for (text, code) in &parts {
            input.push_str(text);
            input.push_str(code);
            expected.push_str(text);
        }
        input.push_str(&tail);
        expected.push_str(&tail);

        let palette = TerminalPalette::xterm();
        let runs: Vec<_> = scan(&input, &palette).collect();
        let joined: String = runs.iter().map(|r| r.text).collect();

        prop_assert_eq!(runs.len(), parts.len() + 1);
        prop_assert_eq!(&joined, &expected);
        prop_assert_eq!(strip_escapes(&input), expected.as_str());
        check_offsets(&input, &runs);
    }

    #[test]
    fn prop_plain_text_is_one_default_run(input in "[^\x1b]{0,64}") {
        let runs: Vec<_> = scan(&input, &TestTheme).collect();
        prop_assert_eq!(runs.len(), 1);
        prop_assert_eq!(runs[0].start, 0);
        prop_assert_eq!(runs[0].text, input.as_str());
        prop_assert_eq!(runs[0].style, StyleState::new(&TestTheme));
    }

    #[test]
    fn prop_reset_restores_defaults(parts in chunks()) {
        let mut input: String = parts.iter().map(|(t, c)| format!("{}{}", t, c)).collect();
        input.push_str("\x1b[0mend");
        let palette = TerminalPalette::witchhazel();
        let last = scan(&input, &palette).last().unwrap();
        prop_assert_eq!(last.text, "end");
        prop_assert_eq!(last.style.foreground, palette.default_foreground());
        prop_assert_eq!(last.style.background, None);
        prop_assert_eq!(last.style.decoration, None);
    }

    #[test]
    fn prop_suppression_only_drops_empty_runs(parts in chunks(), tail in literal()) {
        let mut input: String = parts.iter().map(|(t, c)| format!("{}{}", t, c)).collect();
        input.push_str(&tail);
        let lexer = Lexer::with_config(
            TerminalPalette::xterm(),
            LexerConfig::new().with_suppress_empty_runs(true),
        );
        let all: Vec<_> = scan(&input, lexer.theme()).filter(|r| !r.is_empty()).collect();
        let suppressed: Vec<_> = lexer.scan(&input).collect();
        prop_assert_eq!(all, suppressed);
    }
}
