use crate::cli::parser::Commands;
use crate::cli::prompt::prompt_breaks;
use crate::config::Config;
use crate::core::ShiftLogic;
use crate::errors::{AppError, AppResult};
use crate::models::BreakSchedule;
use crate::tcx::load_recording;
use crate::ui::messages::{success, warning};
use crate::utils::fs::ensure_writable;
use crate::utils::path::prefixed_sibling;
use crate::utils::time::{parse_break_length, parse_clock_offset};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift {
        input,
        output,
        breaks,
        force,
    } = cmd
    {
        let recording = load_recording(input)?;

        let schedule = if breaks.is_empty() {
            let stdin = io::stdin();
            prompt_breaks(&mut stdin.lock(), &mut io::stdout(), recording.id)?
        } else {
            let mut schedule = BreakSchedule::new();
            for flag in breaks {
                let (offset, length) = parse_break_flag(flag)?;
                schedule.insert_relative(recording.id, offset, length);
            }
            schedule
        };

        if schedule.is_empty() {
            warning("No breaks given, timestamps are copied unchanged.");
        }

        let out = output
            .clone()
            .unwrap_or_else(|| prefixed_sibling(input, &cfg.shift_prefix));
        ensure_writable(&out, *force)?;

        let activity = ShiftLogic::shift(&recording, &schedule, &out, &cfg.write_options())?;

        success(format!(
            "Shifted {} trackpoints past {} breaks into {}",
            activity.samples().len(),
            schedule.len(),
            out.display()
        ));
    }
    Ok(())
}

/// `1:10:00=5:30` → (4200, 330)
fn parse_break_flag(flag: &str) -> AppResult<(i64, i64)> {
    let (offset, length) = flag
        .split_once('=')
        .ok_or_else(|| AppError::InvalidBreak(format!("'{}' is not OFFSET=LENGTH", flag)))?;
    Ok((parse_clock_offset(offset)?, parse_break_length(length)?))
}
