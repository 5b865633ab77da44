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

//! Output targets for log records.

use std::ops::BitOr;
use std::ops::BitOrAssign;

/// The set of sinks a log record is dispatched to.
///
/// Targets combine with `|`, and any combination is valid, including none:
///
/// ```
/// use logerr::Targets;
///
/// let both = Targets::CONSOLE | Targets::FILE;
/// assert!(both.console() && both.file());
///
/// assert_eq!(Targets::default(), Targets::NONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Targets {
    console: bool,
    file: bool,
}

impl Targets {
    /// No sink; the record is formatted but emitted nowhere.
    pub const NONE: Targets = Targets {
        console: false,
        file: false,
    };

    /// The standard output stream.
    pub const CONSOLE: Targets = Targets {
        console: true,
        file: false,
    };

    /// The append-only log file.
    pub const FILE: Targets = Targets {
        console: false,
        file: true,
    };

    /// Whether the console sink is selected.
    pub const fn console(self) -> bool {
        self.console
    }

    /// Whether the file sink is selected.
    pub const fn file(self) -> bool {
        self.file
    }

    /// Whether every sink selected in `other` is also selected in `self`.
    pub const fn contains(self, other: Targets) -> bool {
        (self.console || !other.console) && (self.file || !other.file)
    }
}

impl BitOr for Targets {
    type Output = Targets;

    fn bitor(self, rhs: Targets) -> Targets {
        Targets {
            console: self.console || rhs.console,
            file: self.file || rhs.file,
        }
    }
}

impl BitOrAssign for Targets {
    fn bitor_assign(&mut self, rhs: Targets) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_algebra() {
        let both = Targets::CONSOLE | Targets::FILE;
        assert!(both.contains(Targets::CONSOLE));
        assert!(both.contains(Targets::FILE));
        assert!(both.contains(Targets::NONE));

        assert!(!Targets::CONSOLE.contains(Targets::FILE));
        assert!(!Targets::NONE.console());
        assert!(!Targets::NONE.file());

        let mut targets = Targets::NONE;
        targets |= Targets::FILE;
        assert_eq!(targets, Targets::FILE);
    }
}
