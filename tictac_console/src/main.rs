//! Interactive console driver for the tictac board.
//!
//! Reads `<position> <mark>` lines from stdin, applies each update to a
//! [`BoardState`], and forwards the state to a [`ConsolePresenter`] on
//! stdout. On exit, `--html` writes a browser-ready snapshot of the
//! final board to a file. There is no win detection and no turn
//! enforcement; the caller picks the mark on every line.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tictac_board::{BoardState, Mark, Position};
use tictac_present::{render_html, BoardPresenter, ConsolePresenter};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Place marks on a tic-tac-toe board and watch it render.
#[derive(Debug, Parser)]
#[command(name = "tictac_console")]
struct Args {
    /// Write an HTML snapshot of the final board to this file on exit.
    #[arg(long)]
    html: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!("starting tictac console");

    let mut board = BoardState::new();
    let mut console = ConsolePresenter::new(io::stdout());
    console.display(&board)?;

    let stdin = io::stdin();
    loop {
        print!("move (`5 x`, `top-left o`, q to quit)> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        match parse_move(line) {
            Ok((pos, mark)) => match board.update(pos, mark) {
                Ok(state) => console.display(state)?,
                Err(err) => eprintln!("{err}"),
            },
            Err(msg) => eprintln!("{msg}"),
        }
    }

    if let Some(path) = args.html {
        std::fs::write(&path, render_html(&board))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote html snapshot");
    }

    Ok(())
}

/// Splits a `<position> <mark>` line into its parts.
///
/// The position may be a 1-based cell number or a label such as
/// `center`; the mark is `x` or `o` in any case.
fn parse_move(line: &str) -> Result<(Position, Mark), String> {
    let (pos_part, mark_part) = line
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| "expected `<position> <mark>`".to_string())?;

    let pos = Position::from_label_or_number(pos_part)
        .ok_or_else(|| format!("unknown position `{}`", pos_part.trim()))?;
    let mark = match mark_part.trim().to_ascii_lowercase().as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        other => return Err(format!("unknown mark `{other}` (use x or o)")),
    };

    Ok((pos, mark))
}
