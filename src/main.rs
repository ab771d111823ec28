//! rWorkhours main entrypoint.

use rworkhours::run;
use rworkhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e.report());
        std::process::exit(1);
    }
}
