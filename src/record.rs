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

//! Log record carrying the per-call parameters.

use std::path::Path;
use std::path::PathBuf;

use crate::Severity;
use crate::Targets;

/// The payload of a single logging call.
///
/// A record owns every parameter of the call: what to say (`label` and
/// `details`), how critical it is, whether console output is colorized,
/// which sinks receive it, and where the log file lives. Nothing is retained
/// between calls.
///
/// # Examples
///
/// ```
/// use logerr::Record;
/// use logerr::Severity;
/// use logerr::Targets;
///
/// let record = Record::builder("config", "missing key 'listen_addr'")
///     .severity(Severity::Alert)
///     .colorize(true)
///     .targets(Targets::CONSOLE | Targets::FILE)
///     .log_path("app.log")
///     .build();
///
/// assert_eq!(record.severity(), Some(Severity::Alert));
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    label: String,
    details: String,
    // Err carries an unrecognized raw value; resolution is deferred to
    // dispatch so the degraded path still emits a line.
    severity: Result<Severity, u8>,
    colorize: bool,
    targets: Targets,
    log_path: PathBuf,
}

impl Record {
    /// Returns a new builder for a record with the given label and details.
    pub fn builder(label: impl Into<String>, details: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Record {
                label: label.into(),
                details: details.into(),
                severity: Ok(Severity::Notice),
                colorize: false,
                targets: Targets::CONSOLE,
                log_path: PathBuf::new(),
            },
        }
    }

    /// The short name or code of the event.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The long-form description of the event.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// The severity of the record, or `None` if it was built from an
    /// unrecognized raw value.
    pub fn severity(&self) -> Option<Severity> {
        self.severity.ok()
    }

    pub(crate) fn severity_repr(&self) -> Result<Severity, u8> {
        self.severity
    }

    /// Whether console output is colorized.
    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// The sinks this record is dispatched to.
    pub fn targets(&self) -> Targets {
        self.targets
    }

    /// The log file path used when the file sink is selected.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Render the plain message line: prefix, label, details, newline. An
    /// unresolved severity renders with a blank prefix.
    pub(crate) fn render(&self) -> String {
        let prefix = match self.severity {
            Ok(severity) => severity.prefix(),
            Err(_) => "",
        };
        format!("{prefix}{}: {}\n", self.label, self.details)
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Set [`severity`](Record::severity). Defaults to [`Severity::Notice`].
    pub fn severity(mut self, severity: Severity) -> Self {
        self.record.severity = Ok(severity);
        self
    }

    /// Set the severity from a raw value, e.g. one read from configuration.
    ///
    /// Values outside the four recognized kinds are kept as-is and degrade
    /// at dispatch time: the logger reports them and still emits the line,
    /// without a prefix.
    pub fn severity_raw(mut self, raw: u8) -> Self {
        self.record.severity = Severity::from_raw(raw).ok_or(raw);
        self
    }

    /// Set [`colorize`](Record::colorize). Defaults to `false`.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.record.colorize = colorize;
        self
    }

    /// Set [`targets`](Record::targets). Defaults to [`Targets::CONSOLE`].
    pub fn targets(mut self, targets: Targets) -> Self {
        self.record.targets = targets;
        self
    }

    /// Set [`log_path`](Record::log_path); only used when the file sink is
    /// selected. Defaults to an empty path, which no file sink can resolve.
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.record.log_path = path.into();
        self
    }

    /// Invoke the builder and return a [`Record`].
    pub fn build(self) -> Record {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let record = Record::builder("label", "details").build();
        assert_eq!(record.severity(), Some(Severity::Notice));
        assert!(!record.colorize());
        assert_eq!(record.targets(), Targets::CONSOLE);
        assert_eq!(record.log_path(), Path::new(""));
    }

    #[test]
    fn test_render() {
        let record = Record::builder("cache", "warmed 128 entries")
            .severity(Severity::Debug)
            .build();
        assert_eq!(record.render(), "DEBUG: cache: warmed 128 entries\n");
    }

    #[test]
    fn test_render_unrecognized_severity() {
        let record = Record::builder("cache", "warmed 128 entries")
            .severity_raw(9)
            .build();
        assert_eq!(record.severity(), None);
        assert_eq!(record.render(), "cache: warmed 128 entries\n");
    }

    #[test]
    fn test_severity_raw_resolves_known_values() {
        let record = Record::builder("label", "details").severity_raw(3).build();
        assert_eq!(record.severity(), Some(Severity::Failure));
    }
}
