// Copyright 2026 SCION Android Team
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

//! Dispatcher launch sequence
//!
//! A single linear sequence, run once per process lifetime on the caller's
//! thread: publish the zlog config path, move into the working directory,
//! then block in the dispatcher's entry point until it returns. Both the
//! environment variable and the working directory are process-global and
//! are written without rollback; the service invokes this exactly once at
//! startup.

use crate::dispatcher::{self, DispatcherMain};
use crate::safety::validate_path;
use crate::workdir::{self, ChdirPolicy};
use crate::zlog;
use anyhow::Result;
use log::info;

/// Inputs for one dispatcher launch.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Path of the zlog configuration file, published as `ZLOG_CFG`.
    pub config_path: String,
    /// Directory the process moves into before the entry point runs.
    pub working_dir: String,
    pub chdir_policy: ChdirPolicy,
}

impl LaunchConfig {
    /// Config with the service wrapper's defaults (best-effort chdir).
    pub fn new(config_path: &str, working_dir: &str) -> Self {
        Self {
            config_path: config_path.to_string(),
            working_dir: working_dir.to_string(),
            chdir_policy: ChdirPolicy::BestEffort,
        }
    }
}

/// Run the launch sequence and return the dispatcher's exit status
/// unchanged.
///
/// The environment write strictly precedes the directory change, which
/// strictly precedes the entry-point call. Under normal operation the call
/// blocks for the remaining life of the process.
pub fn launch(config: &LaunchConfig, entry: DispatcherMain) -> Result<i32> {
    validate_path(&config.config_path)?;
    validate_path(&config.working_dir)?;

    zlog::publish_config_path(&config.config_path);
    workdir::enter(&config.working_dir, config.chdir_policy)?;

    info!(
        "invoking dispatcher entry point (cfg {}, dir {})",
        config.config_path, config.working_dir
    );
    let status = dispatcher::run(entry);
    info!("dispatcher returned {}", status);

    Ok(status)
}
