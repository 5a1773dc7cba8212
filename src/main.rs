//! Tilewalk -- a line-protocol front end for the movement rules.
//!
//! Reads commands from stdin and writes presenter notifications to stdout.
//! An optional first argument names a JSON scenario file; without it the
//! default 5x5 scenario is loaded.

use std::env;
use std::io::{self, BufRead};
use std::process;

use tracing::{error, warn};

use tilewalk::presenter::{Presenter, TextPresenter};
use tilewalk::protocol::{load_scenario, parse_command, Command, Scenario};
use tilewalk::session::Session;

/// Runs the main protocol loop, reading commands from stdin
/// and writing notifications to stdout.
fn main() {
    tilewalk::logging::init("warn");

    let scenario = match env::args().nth(1) {
        Some(path) => match load_scenario(&path) {
            Ok(s) => s,
            Err(e) => {
                error!(path = %path, error = %e, "failed to load scenario");
                process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    let stdout = io::stdout();
    let presenter = TextPresenter::new(io::BufWriter::new(stdout.lock()));
    let mut session = match Session::from_scenario(&scenario, presenter) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "invalid scenario");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if cmd == Command::Quit {
            break;
        }
        if let Err(e) = session.execute(cmd) {
            warn!(error = %e, "command failed");
            session.presenter_mut().notify_error(&e.to_string());
        }
    }
}
