use std::io::{BufRead, Write};

use crate::board::{BoardState, Leaderboard};
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(i64),
    Search(String),
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "commands: n (next), p (prev), g <page>, s <text>, c (clear search), q (quit)";

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" => Some(Command::Prev),
        "g" | "goto" => rest.parse().ok().map(Command::Goto),
        "s" | "search" => Some(Command::Search(rest.to_string())),
        "c" | "clear" => Some(Command::Clear),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Applies one command to the state. Returns false when browsing should stop.
pub fn apply(board: &Leaderboard, state: &mut BoardState, command: &Command) -> bool {
    match command {
        Command::Next => state.next_page(board.total_pages(&state.query)),
        Command::Prev => state.prev_page(board.total_pages(&state.query)),
        Command::Goto(page) => state.go_to(*page, board.total_pages(&state.query)),
        Command::Search(text) => state.set_query(text.as_str()),
        Command::Clear => state.set_query(""),
        Command::Help => {}
        Command::Quit => return false,
    }
    true
}

pub fn run<R: BufRead, W: Write>(board: &Leaderboard, input: R, mut output: W) -> anyhow::Result<()> {
    let mut state = BoardState::default();
    write!(output, "{}", render::render_table(&board.view(&state)))?;
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            log::warn!("unrecognised command {:?}", line.trim());
            writeln!(output, "{HELP}")?;
            continue;
        };

        if !apply(board, &mut state, &command) {
            break;
        }
        if command == Command::Help {
            writeln!(output, "{HELP}")?;
            continue;
        }
        write!(output, "{}", render::render_table(&board.view(&state)))?;
    }

    output.flush()?;
    Ok(())
}
