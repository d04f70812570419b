//! rHousekeeper main entrypoint.

use rhousekeeper::run;
use rhousekeeper::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
