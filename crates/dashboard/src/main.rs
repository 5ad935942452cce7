use dashboard::bootstrap;
use log::error;

fn main() {
    init_logging();
    if let Err(err) = bootstrap::start() {
        error!("Failed to start the dashboard: {err}");
    }
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
