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

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::append::Append;

/// An appender that writes messages to an existing file.
///
/// The file must already exist: the appender opens it in append mode and
/// never creates it. A missing file maps to [`Error::PathNotFound`], any
/// other open failure to [`Error::OpenFailed`]; in both cases nothing is
/// written. Each append opens the file and closes the handle again before
/// returning, so no handle is retained across calls.
#[derive(Debug, Clone)]
pub struct ExistingFile {
    path: PathBuf,
}

impl ExistingFile {
    /// Create an appender for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> ExistingFile {
        ExistingFile { path: path.into() }
    }

    /// The path this appender writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Append for ExistingFile {
    fn append(&self, message: &str) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Error::PathNotFound {
                    path: self.path.clone(),
                },
                _ => Error::OpenFailed {
                    path: self.path.clone(),
                    source: err,
                },
            })?;
        file.write_all(message.as_bytes()).map_err(Error::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_append_to_existing_file() {
        let dir = tempfile::tempdir().expect("failed to create a temporary directory");
        let path = dir.path().join("app.log");
        fs::write(&path, "first\n").unwrap();

        let appender = ExistingFile::new(&path);
        appender.append("second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let dir = tempfile::tempdir().expect("failed to create a temporary directory");
        let path = dir.path().join("absent.log");

        let err = ExistingFile::new(&path).append("lost\n").unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err.code(), Some(200));
        assert!(!path.exists());
    }
}
