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

//! Logerr is a minimal severity-based error logging library. A log call
//! formats a message from a label, details, and severity, optionally
//! colorizes it for terminal display, and writes it to the console and/or
//! appends it to an existing log file.
//!
//! # Overview
//!
//! Every parameter of a logging call travels with a [`Record`]; the
//! [`Logger`] itself carries a single piece of configuration, whether
//! debug-severity records are emitted at all. A record can be dispatched to
//! any combination of sinks via [`Targets`], including none. Sink failures
//! never propagate to the caller: they degrade to a diagnostic on stderr and
//! the call carries on.
//!
//! # Examples
//!
//! Simple console logging:
//!
//! ```
//! use logerr::Logger;
//! use logerr::Record;
//! use logerr::Severity;
//!
//! let logger = Logger::new();
//! logger.log(
//!     &Record::builder("config", "missing key 'listen_addr'")
//!         .severity(Severity::Alert)
//!         .colorize(true)
//!         .build(),
//! );
//! ```
//!
//! Logging to a file appends to a file that must already exist; the file
//! sink never creates it:
//!
//! ```no_run
//! use logerr::Logger;
//! use logerr::Record;
//! use logerr::Severity;
//! use logerr::Targets;
//!
//! let logger = Logger::new();
//! logger.log(
//!     &Record::builder("disk", "scratch volume is not writable")
//!         .severity(Severity::Failure)
//!         .targets(Targets::CONSOLE | Targets::FILE)
//!         .log_path("app.log")
//!         .build(),
//! );
//! ```

pub mod append;

pub use append::Append;

mod color;
mod error;
mod logger;
mod record;
mod severity;
mod target;

pub use error::Error;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use record::Record;
pub use record::RecordBuilder;
pub use severity::Severity;
pub use target::Targets;
