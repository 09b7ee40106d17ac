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

//! Styled Run Demonstration
//!
//! Reads a terminal capture, splits it into styled runs, and prints each run
//! with its resolved colors and decoration, then the grid extent a renderer
//! would need.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example render_runs -- capture.txt
//! cargo run --example render_runs -- capture.txt witchhazel
//! cargo run --example render_runs -- - my-palette.toml < capture.txt
//! ```
//!
//! The optional second argument is a built-in palette name or a palette file.

use std::io::Read;
use wallart_lexer::{LayoutConfig, Lexer, LexerConfig, layout};
use wallart_palette::TerminalPalette;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map(|s| s.as_str()).unwrap_or("-");
    let palette = match args.get(2) {
        Some(name) => TerminalPalette::load(name)?,
        None => TerminalPalette::default(),
    };
    tracing::info!("Using palette {}", palette.name);

    let mut text = String::new();
    if input == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = std::fs::read_to_string(input)?;
    }

    let lexer = Lexer::with_config(palette, LexerConfig::new().with_suppress_empty_runs(true));
    for run in lexer.scan(&text) {
        let background = run
            .style
            .background
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let decoration = run
            .style
            .decoration
            .map(|d| format!("{:?}", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6} fg={} bg={:<7} {:<9} {:?}",
            run.start, run.style.foreground, background, decoration, run.text
        );
    }

    let grid = layout(lexer.scan(&text), &LayoutConfig::default());
    println!(
        "\n{} fragments on a {}x{} grid",
        grid.fragments.len(),
        grid.columns,
        grid.lines
    );
    Ok(())
}
