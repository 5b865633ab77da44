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

//! Severity classification for log records.

use std::fmt;

/// Criticality of a log record.
///
/// Severities are ordered by increasing criticality. The ordering carries no
/// filtering semantics: dispatch only distinguishes [`Severity::Debug`] from
/// the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic chatter; emitted only when the logger runs in debug mode.
    Debug,
    /// A routine event worth recording.
    Notice,
    /// Something went wrong, but not mission critical.
    Alert,
    /// A critical failure.
    Failure,
}

impl Severity {
    /// Resolve a raw severity value, e.g. one read from configuration.
    ///
    /// Returns `None` for values outside the four recognized kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::Severity;
    ///
    /// assert_eq!(Severity::from_raw(2), Some(Severity::Alert));
    /// assert_eq!(Severity::from_raw(9), None);
    /// ```
    pub const fn from_raw(raw: u8) -> Option<Severity> {
        match raw {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Notice),
            2 => Some(Severity::Alert),
            3 => Some(Severity::Failure),
            _ => None,
        }
    }

    /// The raw value of this severity; inverse of [`Severity::from_raw`].
    pub const fn as_raw(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Notice => 1,
            Severity::Alert => 2,
            Severity::Failure => 3,
        }
    }

    /// The line prefix for this severity, separator included.
    pub(crate) const fn prefix(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG: ",
            Severity::Notice => "NOTICE: ",
            Severity::Alert => "ALERT: ",
            Severity::Failure => "FAILURE: ",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Notice => "NOTICE",
            Severity::Alert => "ALERT",
            Severity::Failure => "FAILURE",
        };
        f.write_str(name)
    }
}
