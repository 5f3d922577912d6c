use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{MergeLogic, MergeOptions};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::fs::{ensure_writable, require_inputs};
use crate::utils::path::expand_tilde;
use chrono::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge {
        file1,
        file2,
        output,
        policy,
        id_offset,
        force,
    } = cmd
    {
        require_inputs(&[file1, file2])?;

        let out = output
            .clone()
            .unwrap_or_else(|| expand_tilde(&cfg.merge_output));
        ensure_writable(&out, *force)?;

        let opts = MergeOptions {
            policy: policy.unwrap_or(cfg.default_policy),
            id_offset: Duration::seconds(id_offset.unwrap_or(cfg.activity_id_offset_seconds)),
        };

        let outcome =
            MergeLogic::merge_files(file1, file2, &out, &opts, &cfg.write_options())?;

        if let Some(report) = outcome.gap_fill {
            info(format!(
                "Positions filled: {} from next, {} from previous",
                report.from_next, report.from_previous
            ));
            if report.unrepaired > 0 {
                warning(format!(
                    "{} trackpoints still have no position",
                    report.unrepaired
                ));
            }
        }

        success(format!(
            "Merged {} trackpoints by {} into {}",
            outcome.activity.samples().len(),
            opts.policy,
            out.display()
        ));
    }
    Ok(())
}
