use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Installs the global logger.
///
/// Records go to stderr so stdout stays reserved for command output, and are
/// appended to `log_file_path` when one is given.
pub fn init_logger(log_level: &str, log_file_path: Option<&str>) -> Result<(), fern::InitError> {
    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(parse_level(log_level))
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = log_file_path {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }

        let log_file = OpenOptions::new().create(true).append(true).open(path)?;
        dispatch = dispatch.chain(log_file);
    }

    dispatch.apply()?;
    Ok(())
}

fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("manage.log");
        let path_str = path.to_str().unwrap();

        init_logger("info", Some(path_str)).expect("logger should install");
        log::info!("logger online");
        log::logger().flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logger online"));
    }
}
