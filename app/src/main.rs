//! FILENAME: app/src/main.rs
// PURPOSE: Dashboard entry point with unified logging.
// FORMAT: seq|level|category|message

fn main() {
    if let Err(e) = app_lib::run() {
        app_lib::log_error!("SYS", "startup failed: {}", e);
        std::process::exit(1);
    }
}
