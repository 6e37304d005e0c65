//! Terminal driver for the roster board.
//!
//! # Responsibility
//! - Stand in for the browser view: fill the form, drop cards, print columns.
//! - Read one command per stdin line and never panic on bad input.

mod command;
mod config;

use command::{parse_command, Command, USAGE};
use config::CliConfig;
use log::info;
use roster_core::{DragPayload, MoveOutcome, PersonItem, RosterBoard};
use std::io::{self, BufRead, Write};

fn main() {
    let config = CliConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = roster_core::init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = run(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("roster_cli failed: {err}");
        std::process::exit(1);
    }
}

fn run(input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut board = RosterBoard::new();
    info!("event=cli_start module=cli status=ok");

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&mut board, command, &mut out)?,
            Err(err) => writeln!(out, "{err}\n{USAGE}")?,
        }
    }
    Ok(())
}

fn execute(board: &mut RosterBoard, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Add {
            position,
            name,
            about,
        } => {
            let form = board.input_mut();
            form.name = name;
            form.about = about;
            form.position = position;
            match board.submit() {
                Ok(id) => writeln!(out, "added {id}"),
                Err(err) => {
                    board.input_mut().clear();
                    writeln!(out, "{err}")
                }
            }
        }
        Command::Move { payload, level } => {
            let payload = DragPayload::text_plain(payload);
            board.drag_over(level, &payload);
            match board.drop_on(level, &payload) {
                MoveOutcome::Moved { from, to } => writeln!(out, "moved {from} -> {to}"),
                MoveOutcome::Unchanged => writeln!(out, "unchanged"),
                MoveOutcome::NotFound => writeln!(out, "not found"),
            }
        }
        Command::Show => print_board(board, out),
        Command::Json => {
            let json = serde_json::to_string_pretty(&*board.store().snapshot())
                .map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
        Command::Ping => writeln!(out, "roster_core ping={}", roster_core::ping()),
        Command::Version => writeln!(out, "roster_core version={}", roster_core::core_version()),
        Command::Quit => Ok(()),
    }
}

fn print_board(board: &RosterBoard, out: &mut impl Write) -> io::Result<()> {
    for column in board.columns() {
        writeln!(out, "{}", column.title())?;
        let persons = column.assigned_persons();
        if persons.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for person in persons.iter() {
            let item = PersonItem::new(person.clone());
            writeln!(
                out,
                "  [{}] {} ({}): {}",
                person.id,
                item.heading(),
                item.subheading(),
                item.body()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).expect("in-memory io should not fail");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    #[test]
    fn add_move_and_show() {
        let out = run_script(
            "add 2 Alice | does QA work\nmove 0 senior\nmove 0 senior\nmove 9 junior\nshow\n",
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "added 0");
        assert_eq!(lines[1], "moved junior -> senior");
        assert_eq!(lines[2], "unchanged");
        assert_eq!(lines[3], "not found");
        assert!(out.contains("SENIOR LIST\n  [0] Alice (QA): does QA work"));
        assert!(out.contains("JUNIOR LIST\n  (empty)"));
    }

    #[test]
    fn invalid_input_is_reported_not_added() {
        let out = run_script("add 2 Al | does QA work\njson\n");
        assert!(out.starts_with("invalid name"));
        assert!(out.contains("[]"));
    }

    #[test]
    fn quit_stops_processing() {
        let out = run_script("ping\nquit\nversion\n");
        assert_eq!(out, "roster_core ping=pong\n");
    }
}
