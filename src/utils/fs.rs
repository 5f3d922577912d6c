//! File helpers for input and output documents.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Fail with `NotFound` on the first input that is not a readable file.
pub fn require_inputs<P: AsRef<Path>>(paths: &[P]) -> AppResult<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AppError::NotFound(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Make sure `path` may be (over)written: a new file or `force` pass
/// straight through, an existing one needs a yes from the terminal.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let stdin = io::stdin();
    if confirm_replace(path, &mut stdin.lock(), &mut io::stdout())? {
        info(format!("Replacing {}", path.display()));
        Ok(())
    } else {
        Err(AppError::OutputExists(path.to_path_buf()))
    }
}

/// Ask whether an existing output document should be replaced.
/// Anything but `y`/`yes` (including end of input) keeps it.
pub fn confirm_replace<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    out: &mut W,
) -> AppResult<bool> {
    warning(format!(
        "{} is already there (a previous merge or shift?)",
        path.display()
    ));
    write!(out, "Replace it with the new activity? [y/N]: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Write `bytes` to a sibling temp file, then rename it over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, bytes) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }
    fs::rename(&tmp, path).map_err(|e| {
        fs::remove_file(&tmp).ok();
        AppError::from(e)
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
