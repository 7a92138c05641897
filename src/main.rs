mod cli;
mod logging;

use std::{
    io::{self, BufRead, Write},
    process,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use date_compare::{Rejection, Side, compare_dates};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Returns `false` when either date was rejected.
fn run(cli: Cli) -> Result<bool> {
    let base = resolve_input(cli.base, Side::Base)?;
    let compare = resolve_input(cli.compare, Side::Compare)?;

    let mut stdout = io::stdout().lock();
    match compare_dates(&base, &compare) {
        Ok(comparison) => {
            if cli.json {
                serde_json::to_writer_pretty(&mut stdout, &comparison)?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{comparison}")?;
            }
            Ok(true)
        }
        Err(err) => {
            info!(side = %err.side(), "date rejected");
            if cli.json {
                serde_json::to_writer_pretty(&mut stdout, &Rejection::from(&err))?;
                writeln!(stdout)?;
            } else {
                eprintln!("{err}");
            }
            Ok(false)
        }
    }
}

fn resolve_input(arg: Option<String>, side: Side) -> Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => read_date(side, &mut io::stdin().lock(), &mut io::stderr()),
    }
}

/// Prompts on `prompt` and reads one line from `input`, without the line
/// terminator.
fn read_date(side: Side, input: &mut impl BufRead, prompt: &mut impl Write) -> Result<String> {
    let which = match side {
        Side::Base => "a date",
        Side::Compare => "another date",
    };
    write!(
        prompt,
        "Enter {which} in the following format: MM/DD/YYYY. Optionally input time in the following format: HH:mm:SS: "
    )?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {side} date"))?;
    if read == 0 {
        bail!("no {side} date given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_date_strips_line_ending() {
        let mut input = io::Cursor::new("1/5/2021 10:30:00\r\n");
        let mut prompt = Vec::new();
        let date = read_date(Side::Base, &mut input, &mut prompt).unwrap();
        assert_eq!(date, "1/5/2021 10:30:00");
        assert!(String::from_utf8(prompt).unwrap().starts_with("Enter a date"));
    }

    #[test]
    fn test_read_date_prompts_for_compare() {
        let mut input = io::Cursor::new("02/28/2020\n");
        let mut prompt = Vec::new();
        read_date(Side::Compare, &mut input, &mut prompt).unwrap();
        assert!(String::from_utf8(prompt).unwrap().starts_with("Enter another date"));
    }

    #[test]
    fn test_read_date_empty_input() {
        let mut input = io::Cursor::new("");
        let mut prompt = Vec::new();
        let err = read_date(Side::Compare, &mut input, &mut prompt).unwrap_err();
        assert_eq!(err.to_string(), "no compare date given");
    }

    #[test]
    fn test_cli_parses_dates_and_flags() {
        let cli = Cli::try_parse_from(["datecompare", "--json", "-vv", "1/5/2021", "01/05/2021"]).unwrap();
        assert_eq!(cli.base.as_deref(), Some("1/5/2021"));
        assert_eq!(cli.compare.as_deref(), Some("01/05/2021"));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["datecompare"]).unwrap();
        assert!(cli.base.is_none());
        assert!(cli.compare.is_none());
    }
}
