use anyhow::Result;
use config::LogConfig;
use rolling_file::*;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging from [`LogConfig`].
///
/// Console output always; optional size-rotated file output when
/// `config.write` is set. When a log file reaches `write_max_file_size`, it
/// is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
pub fn init(config: &LogConfig) -> Result<()> {
    // Create filter from level
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {}. Falling back to 'info'",
            config.level, e
        );
        EnvFilter::new("info")
    });

    let registry = tracing_subscriber::registry();

    if config.write {
        // Ensure log directory exists
        std::fs::create_dir_all(&config.write_path)?;

        let log_file_path = PathBuf::from(&config.write_path).join("logs.log");
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            9, // Keep up to 9 rotated files (logs.log.1 through logs.log.9)
        )?;

        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

        // We need to keep the guard alive for the lifetime of the program
        // Leak it to prevent dropping
        std::mem::forget(_guard);

        if config.json {
            let console_layer = fmt::layer().json();
            let file_layer = fmt::layer().json().with_writer(non_blocking);

            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // Never use ANSI in files
                .with_writer(non_blocking);

            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        }
    } else if config.json {
        let fmt_layer = fmt::layer().json();
        registry.with(filter).with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        registry.with(filter).with(fmt_layer).init();
    }

    Ok(())
}
