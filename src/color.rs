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

//! Terminal styles for each severity.

use colored::Color;
use colored::Colorize;

use crate::Severity;

/// Terminal style applied to the console-bound copy of a message when
/// colorization is requested. The file sink never sees a styled message.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Style {
    color: Option<Color>,
    bold: bool,
}

impl Style {
    /// The style for a resolved severity. Unresolved severities fall back to
    /// the plain style, so the mapping is total.
    pub(crate) fn for_severity(severity: Option<Severity>) -> Style {
        match severity {
            Some(Severity::Debug) => Style {
                color: Some(Color::White),
                bold: true,
            },
            Some(Severity::Alert) => Style {
                color: Some(Color::Yellow),
                bold: false,
            },
            Some(Severity::Failure) => Style {
                color: Some(Color::Red),
                bold: true,
            },
            Some(Severity::Notice) | None => Style::default(),
        }
    }

    /// Wrap `message` in this style's escape sequences.
    ///
    /// Rendering goes through [`colored`], so the global color control
    /// (`NO_COLOR`, tty detection, [`colored::control::set_override`]) still
    /// applies on top of the per-record colorize toggle.
    pub(crate) fn paint(&self, message: &str) -> String {
        let Some(color) = self.color else {
            return message.to_owned();
        };

        let mut painted = message.color(color);
        if self.bold {
            painted = painted.bold();
        }
        painted.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styles() {
        colored::control::set_override(true);

        let paint = |severity| Style::for_severity(severity).paint("message\n");
        assert_eq!(
            paint(Some(Severity::Debug)),
            "\u{1b}[1;37mmessage\n\u{1b}[0m"
        );
        assert_eq!(paint(Some(Severity::Notice)), "message\n");
        assert_eq!(paint(Some(Severity::Alert)), "\u{1b}[33mmessage\n\u{1b}[0m");
        assert_eq!(
            paint(Some(Severity::Failure)),
            "\u{1b}[1;31mmessage\n\u{1b}[0m"
        );
        assert_eq!(paint(None), "message\n");
    }
}
