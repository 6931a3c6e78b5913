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

//! Working-directory change for the dispatcher
//!
//! The dispatcher resolves relative paths (socket directory, log files)
//! against the process working directory, so the bridge moves the process
//! into the app files directory before handing over control.

use anyhow::{Context, Result};
use log::{debug, warn};
use nix::unistd::chdir;
use std::path::Path;

/// What to do when the working directory cannot be entered.
///
/// The service wrapper uses [`ChdirPolicy::BestEffort`]: the dispatcher can
/// start from the wrong directory and fail on its own terms, which keeps the
/// failure visible in its log rather than aborting silently before launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChdirPolicy {
    /// Log the failure and continue in the previous working directory.
    BestEffort,
    /// Surface the failure to the caller; the dispatcher is not invoked.
    FailFast,
}

/// Change the process working directory to `dir` under the given policy.
pub fn enter(dir: &str, policy: ChdirPolicy) -> Result<()> {
    match chdir(Path::new(dir)) {
        Ok(()) => {
            debug!("working directory now {}", dir);
            Ok(())
        }
        Err(err) => match policy {
            ChdirPolicy::BestEffort => {
                warn!(
                    "cannot enter {}: {}, continuing in previous directory",
                    dir, err
                );
                Ok(())
            }
            ChdirPolicy::FailFast => {
                Err(err).with_context(|| format!("cannot enter working directory {}", dir))
            }
        },
    }
}
