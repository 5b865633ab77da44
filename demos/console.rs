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

use logerr::Logger;
use logerr::Record;
use logerr::Severity;

fn main() {
    let logger = Logger::builder().debug_mode(true).build();

    for (severity, label, details) in [
        (Severity::Debug, "cache", "warmed 128 entries"),
        (Severity::Notice, "startup", "listening on 0.0.0.0:8080"),
        (Severity::Alert, "config", "missing key 'listen_addr', using default"),
        (Severity::Failure, "disk", "scratch volume is not writable"),
    ] {
        logger.log(
            &Record::builder(label, details)
                .severity(severity)
                .colorize(true)
                .build(),
        );
    }
}
