//! rAttendance main entrypoint.

use rattendance::run;

fn main() {
    run();
}
