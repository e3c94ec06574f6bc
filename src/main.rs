// main.rs - terminal table for the pairing game
use std::io::{self, BufRead, Write};

use clap::Parser;
use flexi_logger::Logger;
use log::info;

use card_pairing::{SelectionPolicy, Session, SessionConfig, SessionError, DEFAULT_HAND_SIZE};

mod repl;

use repl::Command;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyCli {
    Reversible,
    LockIn,
}

impl From<PolicyCli> for SelectionPolicy {
    fn from(cli: PolicyCli) -> Self {
        match cli {
            PolicyCli::Reversible => SelectionPolicy::Reversible,
            PolicyCli::LockIn => SelectionPolicy::LockIn,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "card-pairing", about = "Deal attacker and defender cards and reveal the pairs")]
struct Config {
    /// Seed for card draws (random when omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// What happens when a side that already has a pick is picked again
    #[arg(long, value_enum, default_value = "reversible")]
    policy: PolicyCli,

    /// Cards dealt per side to each player
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE, value_parser = parse_hand_size)]
    hand_size: usize,

    /// Print the table as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_hand_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("hand size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

/// Re-prompt after input that did not change the table. Silent in JSON mode.
fn prompt(out: &mut impl Write, json: bool) -> io::Result<()> {
    if !json {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// Status and help text. Goes to stderr in JSON mode.
fn message(out: &mut impl Write, json: bool, text: &str) -> io::Result<()> {
    if json {
        eprintln!("{text}");
        Ok(())
    } else {
        writeln!(out, "{text}")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let mut session_config = SessionConfig::default()
        .with_policy(config.policy.into())
        .with_hand_size(config.hand_size);
    if let Some(seed) = config.seed {
        session_config = session_config.with_seed(seed);
    }

    let mut session = Session::new(session_config);
    info!("session ready, policy {:?}", session.config().policy);
    eprintln!("{}", repl::replay_hint(session.seed()));

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    repl::show(&mut out, &session.view(), config.json)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match repl::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(&mut out, config.json)?;
                continue;
            }
            Err(e) => {
                eprintln!("{e}");
                prompt(&mut out, config.json)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => message(&mut out, config.json, repl::HELP)?,
            _ => match repl::apply(&mut session, &command) {
                Ok(Some(status)) => message(&mut out, config.json, &status)?,
                Ok(None) => {}
                Err(e @ SessionError::InsufficientCards { .. }) => {
                    eprintln!("{}", repl::INSUFFICIENT_NOTICE);
                    eprintln!("{e}");
                }
                Err(e) => eprintln!("{e}"),
            },
        }
        repl::show(&mut out, &session.view(), config.json)?;
    }

    Ok(())
}
