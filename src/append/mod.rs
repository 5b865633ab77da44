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

//! Sinks for formatted log messages.

use std::fmt;

pub use self::file::ExistingFile;
pub use self::stdio::Stdout;

mod file;
mod stdio;

/// A sink that formatted log messages are appended to.
pub trait Append: fmt::Debug {
    /// Append one formatted message to the sink.
    ///
    /// The message arrives fully rendered, trailing newline included; sinks
    /// write it verbatim.
    fn append(&self, message: &str) -> anyhow::Result<()>;

    /// Flush any buffered output.
    fn flush(&self) {}
}
