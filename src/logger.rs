// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;

use crate::Error;
use crate::Record;
use crate::Severity;
use crate::append::Append;
use crate::append::ExistingFile;
use crate::append::Stdout;
use crate::color::Style;

/// Dispatches log records to the console and file sinks.
///
/// A logger is cheap to construct and carries a single piece of
/// configuration: whether debug-severity records are emitted. Every other
/// parameter travels with the [`Record`].
///
/// # Examples
///
/// ```
/// use logerr::Logger;
/// use logerr::Record;
/// use logerr::Severity;
///
/// let logger = Logger::new();
/// logger.log(
///     &Record::builder("startup", "listening on 0.0.0.0:8080")
///         .severity(Severity::Notice)
///         .build(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    debug_mode: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger with debug mode tied to the build profile: debug
    /// builds emit debug-severity records, release builds suppress them.
    pub fn new() -> Logger {
        Logger::builder().build()
    }

    /// Returns a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            debug_mode: cfg!(debug_assertions),
        }
    }

    /// Whether debug-severity records are emitted.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Dispatch a record to its sinks.
    ///
    /// This method never fails: an unrecognized severity, a missing log
    /// file, or an unwritable sink degrades to a diagnostic on stderr while
    /// the call carries on. Diagnostics about the logger itself never reach
    /// the file sink.
    pub fn log(&self, record: &Record) {
        if let Err(raw) = record.severity_repr() {
            handle_error(record, Error::UnknownSeverity(raw).into());
        }

        let severity = record.severity();
        if severity == Some(Severity::Debug) && !self.debug_mode {
            return;
        }

        let message = record.render();

        // The file sink always receives the plain message; colorization
        // applies to a console-bound copy only.
        if record.targets().file() {
            let appender = ExistingFile::new(record.log_path());
            if let Err(err) = appender.append(&message) {
                handle_error(record, err);
            }
        }

        if record.targets().console() {
            let message = if record.colorize() {
                Style::for_severity(severity).paint(&message)
            } else {
                message
            };
            if let Err(err) = Stdout.append(&message) {
                handle_error(record, err);
            }
        }
    }
}

/// Builder for [`Logger`].
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    debug_mode: bool,
}

impl LoggerBuilder {
    /// Override debug mode, regardless of build profile.
    ///
    /// With debug mode off, debug-severity records are suppressed on every
    /// sink; all other severities are unaffected.
    pub fn debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Invoke the builder and return a [`Logger`].
    pub fn build(self) -> Logger {
        Logger {
            debug_mode: self.debug_mode,
        }
    }
}

fn handle_error(record: &Record, error: anyhow::Error) {
    let _ = writeln!(
        std::io::stderr(),
        "error dispatching log record for {label:?}: {error}",
        label = record.label(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_follows_build_profile() {
        assert_eq!(Logger::new().debug_mode(), cfg!(debug_assertions));
    }

    #[test]
    fn test_debug_mode_override() {
        assert!(!Logger::builder().debug_mode(false).build().debug_mode());
        assert!(Logger::builder().debug_mode(true).build().debug_mode());
    }
}
