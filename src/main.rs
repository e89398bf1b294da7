//! Binary entry point: resolve configuration, start logging, and drive the
//! Ratatui event loop until the user exits.
use log::info;
use student_roster::{init_logging, run_app, App, AppConfig, StudentList};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    // Dropping the handle stops the logger, so it lives for the whole run.
    let _logger = init_logging(config.log_level, &config.log_dir)?;
    info!(
        "event=config_loaded status=ok data_dir={} log_level={}",
        config.data_dir.display(),
        config.log_level
    );

    let mut app = App::new(StudentList::new(), config.default_report);
    let result = run_app(&mut app);

    let mut list = app.into_list();
    let remaining = list.count();
    list.clear();
    info!("event=app_exit status=ok released={remaining}");
    result
}
