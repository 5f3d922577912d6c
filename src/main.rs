//! tcxmerge main entrypoint.

use tcxmerge::run;
use tcxmerge::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
