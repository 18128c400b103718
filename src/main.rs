//! daysheet main entrypoint.

use daysheet::run;
use daysheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
