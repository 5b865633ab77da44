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

use std::io;
use std::path::PathBuf;

/// Errors raised while dispatching a log record.
///
/// None of these propagate out of [`Logger::log`](crate::Logger::log): the
/// logger reports them on stderr and carries on. The coded variants carry
/// the diagnostic code shown to end users.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw severity value outside the four recognized kinds.
    #[error("unrecognized severity value {0}; contact the maintainer with Code 100")]
    UnknownSeverity(u8),
    /// The log file does not exist. It is never created implicitly.
    #[error("cannot find log file {path:?}; contact the maintainer with Code 200")]
    PathNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The log file exists but could not be opened for append.
    #[error("cannot open log file {path:?}; contact the maintainer with Code 201")]
    OpenFailed {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying open failure.
        #[source]
        source: io::Error,
    },
    /// An I/O failure on an already opened sink.
    #[error("failed to perform IO action: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The diagnostic code attached to this error, if any.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::UnknownSeverity(_) => Some(100),
            Error::PathNotFound { .. } => Some(200),
            Error::OpenFailed { .. } => Some(201),
            Error::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_codes() {
        assert_eq!(Error::UnknownSeverity(9).code(), Some(100));

        let path = PathBuf::from("app.log");
        assert_eq!(Error::PathNotFound { path: path.clone() }.code(), Some(200));

        let source = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(Error::OpenFailed { path, source }.code(), Some(201));

        let io = Error::Io(io::Error::from(io::ErrorKind::WriteZero));
        assert_eq!(io.code(), None);
    }

    #[test]
    fn test_diagnostics_name_their_code() {
        let err = Error::PathNotFound {
            path: PathBuf::from("app.log"),
        };
        assert!(err.to_string().contains("Code 200"));
        assert!(err.to_string().contains("app.log"));

        assert!(Error::UnknownSeverity(9).to_string().contains("Code 100"));
    }
}
