use std::{
    fs,
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    str::FromStr as _,
};

use clap::Parser;
use dotenv::dotenv;
use opensleep::{OpenSleep, cli::Command};
use opensleep_algos::helpers::{format_hm::FormatHM as _, time_math::round_float};

#[derive(Parser)]
pub struct OpenSleepCli {
    /// Commands to run before the interactive prompt, one per line
    #[arg(env, long)]
    pub script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = OpenSleepCli::parse();
    let mut session = OpenSleep::new();

    if let Some(path) = cli.script {
        let script = fs::read_to_string(&path)?;
        for line in script.lines() {
            if execute_line(&mut session, line)? {
                return Ok(());
            }
        }
    }

    println!("opensleep - track your nights, type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "opensleep> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if execute_line(&mut session, &line)? {
            break;
        }
    }

    Ok(())
}

/// Runs one line of input against the session. Returns `true` when
/// the user asked to quit.
fn execute_line(session: &mut OpenSleep, line: &str) -> anyhow::Result<bool> {
    if line.trim().is_empty() {
        return Ok(false);
    }

    let command = match Command::from_str(line) {
        Ok(command) => command,
        Err(error) => {
            println!("{}", error);
            println!("Type `help` for the list of commands.");
            return Ok(false);
        }
    };

    match command {
        Command::Add {
            date,
            bedtime,
            wake_time,
        } => {
            let entry = session.submit_entry(date, bedtime, wake_time);
            println!(
                "Sleep entry added successfully! ({} hours slept)",
                round_float(entry.sleep_duration_hours)
            );
        }
        Command::List => print_entries(session),
        Command::Report => {
            if session.journal.is_empty() {
                println!("Add your sleep data to see analysis and recommendations.");
            } else {
                print!("{}", session.analysis());
            }
        }
        Command::Clear => {
            session.clear_all();
            println!("All sleep data cleared.");
        }
        Command::Help => print_help(),
        Command::Quit => return Ok(true),
    }

    Ok(false)
}

fn print_entries(session: &OpenSleep) {
    if session.journal.is_empty() {
        println!("No sleep entries yet.");
        return;
    }

    println!(
        "{:<12} {:>8} {:>10} {:>12}",
        "Date", "Bedtime", "Wake Time", "Hours Slept"
    );
    for entry in session.journal.entries() {
        println!(
            "{:<12} {:>8} {:>10} {:>12.2}",
            entry.date.to_string(),
            entry.bedtime.format_hm(),
            entry.wake_time.format_hm(),
            entry.sleep_duration_hours,
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <YYYY-MM-DD> <HH:MM> <HH:MM>   log a night (date, bedtime, wake time)");
    println!("  list                               show the logged entries");
    println!("  report                             show analysis and recommendations");
    println!("  clear                              drop all entries");
    println!("  quit                               end the session");
}
