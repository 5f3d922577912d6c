//! Interactive break entry.

use crate::errors::AppResult;
use crate::models::BreakSchedule;
use crate::utils::time::{parse_break_length, parse_clock_offset};
use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};

/// Ask for breaks until an empty answer. Offsets are taken relative to
/// `origin` (the activity start).
pub fn prompt_breaks<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    origin: DateTime<Utc>,
) -> AppResult<BreakSchedule> {
    let mut schedule = BreakSchedule::new();

    loop {
        let Some(offset) = ask(input, out, "Break time from start (hours:minutes:seconds): ")? else {
            break;
        };
        let offset = parse_clock_offset(&offset)?;

        let Some(length) = ask(input, out, "Break length (minutes:seconds): ")? else {
            break;
        };
        let length = parse_break_length(&length)?;

        schedule.insert_relative(origin, offset, length);
    }

    Ok(schedule)
}

/// `None` on empty input or end of stream.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> AppResult<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}
