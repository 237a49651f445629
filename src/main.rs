//! rsheetlog main entrypoint.

use rsheetlog::run;
use rsheetlog::ui::messages::report;

fn main() {
    println!();
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
