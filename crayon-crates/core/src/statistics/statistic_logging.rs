//! The global sink for the statistics of the [`ColoringSolver`][crate::ColoringSolver].
//!
//! Nothing is written until [`configure_statistic_logging`] has been called.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// Where and how solver statistics are written.
pub struct StatisticOptions<'a> {
    /// Starts every statistic line, which reads `{prefix} {name}={value}`.
    statistic_prefix: &'a str,
    /// Written on its own line after the statistics of a solve.
    after_statistics: Option<&'a str>,
    /// Applied to the statistic names, which are otherwise left as given.
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl std::fmt::Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions<'static>>> = OnceLock::new();

/// Enables statistic output for the rest of the process.
///
/// Every statistic line starts with `prefix`, and `after` (if any) closes the statistics of a
/// solve. Without a `writer` the statistics go to standard out. Later calls have no effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

fn with_statistic_options(write: impl FnOnce(&mut StatisticOptions<'static>)) {
    let Some(lock) = STATISTIC_OPTIONS.get() else {
        return;
    };

    if let Ok(mut options) = lock.write() {
        write(&mut options);
    }
}

/// Writes the line `{prefix} {name}={value}`, with `name` in the configured casing.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_statistic_options(|options| {
        let name = match options.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let prefix = options.statistic_prefix;

        if let Err(e) = writeln!(options.statistics_writer, "{prefix} {name}={value}") {
            debug!("Could not write statistic {name}: {e}");
        }
    });
}

/// Writes the line closing the statistics of a solve, if one was configured.
pub fn log_statistic_postfix() {
    with_statistic_options(|options| {
        if let Some(after) = options.after_statistics {
            if let Err(e) = writeln!(options.statistics_writer, "{after}") {
                debug!("Could not close the statistics: {e}");
            }
        }
    });
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
