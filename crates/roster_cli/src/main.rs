//! Line-oriented roster driver.
//!
//! # Responsibility
//! - Feed UI events read from stdin into one roster session.
//! - Print the roster and counts after every event for manual sanity checks.
//!
//! Environment:
//! - `ROSTER_SEED`: `demo` (default) or `empty`.
//! - `ROSTER_LOG_DIR`: absolute directory to enable file logging.

use roster_core::{
    default_log_level, init_logging, AddOutcome, RecordingNotifier, RosterSeed, RosterSession,
    SessionConfig,
};
use std::io::{self, BufRead, Write};

const HELP: &str = "commands: name <text> | phone <text> | add | toggle <i> | delete <i> | \
confirm | cancel | call <i> | list | help | quit";

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level().as_str(), log_dir.as_str()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let seed = std::env::var("ROSTER_SEED")
        .map(|raw| RosterSeed::parse(raw.as_str()))
        .unwrap_or(RosterSeed::Demo);
    let mut session = RosterSession::from_config(SessionConfig { seed }, RecordingNotifier::new());

    println!("roster_core version={}", roster_core::core_version());
    println!("{HELP}");
    print_roster(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match handle_line(&mut session, line.trim_end_matches(['\n', '\r'])) {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn handle_line(session: &mut RosterSession<RecordingNotifier>, line: &str) -> Flow {
    let (command, arg) = match line.trim_start().split_once(' ') {
        Some((command, arg)) => (command, arg),
        None => (line.trim(), ""),
    };

    match command {
        "" => return Flow::Continue,
        "quit" | "exit" => return Flow::Quit,
        "help" => println!("{HELP}"),
        "list" => {}
        "name" => {
            if !session.on_name_input(arg) {
                println!("rejected: letters and spaces only");
            }
        }
        "phone" => {
            if !session.on_phone_input(arg) {
                println!("rejected: up to three groups of three digits");
            }
        }
        "add" => {
            if let AddOutcome::Declined(reason) = session.on_add_click() {
                println!("not added: {reason}");
            }
        }
        "toggle" => {
            report(with_index(arg, |i| session.on_toggle_click(i)));
        }
        "delete" => {
            if report(with_index(arg, |i| session.on_delete_click(i))) {
                println!("confirm or cancel?");
            }
        }
        "confirm" => {
            if session.on_confirm_click().is_none() {
                println!("no deletion pending");
            }
        }
        "cancel" => session.on_cancel_click(),
        "call" => {
            report(with_index(arg, |i| session.on_phone_tap(i).map(|_| ())));
            for message in session.notifier().take_messages() {
                println!("{message}");
            }
        }
        other => println!("unknown command `{other}`; {HELP}"),
    }

    print_roster(session);
    Flow::Continue
}

fn with_index<T, E: std::fmt::Display>(
    arg: &str,
    f: impl FnOnce(i64) -> Result<T, E>,
) -> Result<T, String> {
    let index = arg
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("expected an index, got `{}`", arg.trim()))?;
    f(index).map_err(|err| err.to_string())
}

fn report(result: Result<(), String>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            println!("error: {err}");
            false
        }
    }
}

fn print_roster(session: &RosterSession<RecordingNotifier>) {
    let snapshot = session.snapshot();
    let counts = snapshot.aggregates;
    println!(
        "Total: {}  Present: {}  Absent: {}",
        counts.total, counts.present, counts.absent
    );
    for (index, person) in snapshot.people.iter().enumerate() {
        let mark = if person.is_present() { 'x' } else { ' ' };
        let pending = if snapshot.pending_index == Some(index) {
            "  <- delete?"
        } else {
            ""
        };
        println!(
            "  {index}. [{mark}] {} ({}){pending}",
            person.name(),
            person.phone()
        );
    }
    if !session.name_draft().is_empty() || !session.phone_draft().is_empty() {
        println!(
            "  draft: name=`{}` phone=`{}`",
            session.name_draft(),
            session.phone_draft()
        );
    }
}
