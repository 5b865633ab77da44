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

use std::fs;

use logerr::Logger;
use logerr::Record;
use logerr::Severity;
use logerr::Targets;

fn main() {
    // The file sink only appends to files that already exist.
    let path = std::env::temp_dir().join("logerr-demo.log");
    fs::write(&path, "").unwrap();

    let logger = Logger::new();
    logger.log(
        &Record::builder("demo", "this line goes to both sinks")
            .severity(Severity::Alert)
            .targets(Targets::CONSOLE | Targets::FILE)
            .log_path(&path)
            .build(),
    );

    println!("--- {}:", path.display());
    print!("{}", fs::read_to_string(&path).unwrap());
}
