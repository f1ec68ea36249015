use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::Weekday;

use crate::data::model::{parse_weekday, City, FilterCriteria, Month};

// ---------------------------------------------------------------------------
// Low-level line reading
// ---------------------------------------------------------------------------

/// Print `prompt` and read one reply line, trimmed and lowercased.
///
/// The only failure mode is a closed or broken input stream; invalid
/// *content* is handled by the callers, which re-ask.
fn read_reply<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let n = input.read_line(&mut line).context("reading reply")?;
    if n == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_lowercase())
}

/// Re-ask until `parse` accepts the reply.
fn prompt_until<R, T, F>(input: &mut R, prompt: &str, retry: &str, parse: F) -> Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let reply = read_reply(input, prompt)?;
        match parse(&reply) {
            Some(value) => return Ok(value),
            None => println!("{retry}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter prompts
// ---------------------------------------------------------------------------

fn parse_month_filter(reply: &str) -> Option<Option<Month>> {
    if reply == "all" {
        Some(None)
    } else {
        Month::parse(reply).map(Some)
    }
}

fn parse_day_filter(reply: &str) -> Option<Option<Weekday>> {
    if reply == "all" {
        Some(None)
    } else {
        parse_weekday(reply).map(Some)
    }
}

/// Ask for city, month, and day, re-asking each until valid.
pub fn filter_criteria<R: BufRead>(input: &mut R) -> Result<FilterCriteria> {
    let city = prompt_until(
        input,
        "Enter the name of the city (chicago, new york city, washington) to analyze: ",
        "Not a valid city, try again.",
        City::parse,
    )?;
    let month = prompt_until(
        input,
        "Enter the name of the month (january-june) to filter by, or 'all' for no month filter: ",
        "Not a valid month, try again.",
        parse_month_filter,
    )?;
    let day = prompt_until(
        input,
        "Enter the day of week to filter by, or 'all' for no day filter: ",
        "Not a valid day of week, try again.",
        parse_day_filter,
    )?;
    Ok(FilterCriteria { city, month, day })
}

/// Yes/no question. Only the exact word "yes" (any case) is affirmative;
/// anything else declines.
pub fn confirm<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    Ok(read_reply(input, prompt)? == "yes")
}
