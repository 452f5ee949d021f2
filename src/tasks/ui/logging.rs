/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::fmt;
use std::path::{Path, PathBuf};
use log::{Level, LevelFilter};

use crate::ui::color::gpaint;

/// Log targets that `-v` makes more verbose.
const ISRT_TARGETS: &[&str] = &[
    "isrt",
    "isrt_insert",
    "isrt_structure",
    "isrt_structure_io",
    "isrt_tasks",
    "isrt_tasks_config",
];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Also write the log to this file.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: u64) -> &mut Self
    {
        self.verbosity = match level {
            0 => Verbosity::Default,
            1 => Verbosity::Loud,
            _ => Verbosity::Louder,
        };
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud, Louder }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl Verbosity {
    fn isrt_level(self) -> LevelFilter
    {
        match self {
            Verbosity::Default => LevelFilter::Info,
            Verbosity::Loud => LevelFilter::Debug,
            Verbosity::Louder => LevelFilter::Trace,
        }
    }
}

impl GlobalLogger {
    /// Install the logger.  This can only succeed once per process.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use std::time::Instant;

        let start = Instant::now();
        let mut fern = fern::Dispatch::new()
            .format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Info);

        for &target in ISRT_TARGETS {
            fern = fern.level_for(target, self.verbosity.isrt_level());
        }
        fern = fern.chain(std::io::stdout());

        if let Some(path) = self.path.as_ref() {
            let file = fern::log_file(path)
                .map_err(|e| format_err!("could not open log file {}: {}", path.display(), e))?;
            fern = fern.chain(file);
        }

        fern.apply().map_err(|e| format_err!("{}", e))?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", gpaint(style, self.0))
    }
}
