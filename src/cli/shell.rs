use std::collections::HashMap;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{Command, Followup, Request, finish, nothing_to_do, prepare};
use crate::Session;

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// Parse one shell line. Arguments may be quoted the way a POSIX shell
/// quotes them, so `search --cuisine "middle eastern"` keeps the cuisine whole.
///
/// The error is ready to print: clap usage and help text, or the quoting
/// problem.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let words = shell_words::split(line).map_err(|err| format!("error: {err}"))?;

    Line::try_parse_from(words)
        .map(|parsed| parsed.command)
        .map_err(|err| err.to_string())
}

/// Read commands from stdin until EOF or `quit`. Network jobs run in the
/// background and their results are printed as they arrive.
pub async fn shell(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut followups: HashMap<u64, Followup> = HashMap::new();

    if !session.has_api_key() {
        eprintln!("warning: no API key configured, searches will fail");
    }
    println!("larder shell. Type 'help' for commands, 'quit' to leave.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let line = line.trim();
                match line {
                    "" => continue,
                    "quit" | "exit" => break,
                    _ => {}
                }

                let command = match parse_line(line) {
                    Ok(command) => command,
                    Err(message) => {
                        // help output and usage errors alike
                        println!("{message}");
                        continue;
                    }
                };

                match prepare(session, command) {
                    Ok(Request::Done) => {}
                    Ok(Request::Fetch(job, followup)) => match session.spawn(job.clone()) {
                        Ok(Some(ticket)) => {
                            followups.insert(ticket, followup);
                            println!("[{ticket}] {} started", job.name());
                        }
                        Ok(None) => println!("{}", nothing_to_do(&job)),
                        Err(err) => println!("Error: {err}"),
                    },
                    Err(err) => println!("Error: {err}"),
                }
            }
            Some(outcome) = session.next_outcome() => {
                let ticket = outcome.ticket;
                let followup = followups.remove(&ticket).unwrap_or(Followup::Report);
                let event = session.apply(outcome);

                if let Err(err) = finish(session, event, followup) {
                    println!("[{ticket}] Error: {err}");
                }
            }
        }
    }

    Ok(())
}
