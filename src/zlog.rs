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

//! zlog configuration hand-off
//!
//! The dispatcher binary links against zlog, which reads the path of its
//! configuration file from the `ZLOG_CFG` environment variable during its
//! own initialization. The bridge has no other channel to the dispatcher's
//! logging setup, so the path is published here before the entry point runs.

use log::{debug, info};
use std::env;

/// Environment variable zlog reads its configuration file path from.
pub const ZLOG_CFG: &str = "ZLOG_CFG";

/// Publish the zlog configuration path into the process environment.
///
/// First-write-wins: an already-present value is never overwritten, so an
/// operator override (or an earlier invocation) always takes precedence.
/// Returns whether the variable was actually written. The value is never
/// cleared by this crate; it persists for the life of the process.
pub fn publish_config_path(path: &str) -> bool {
    if env::var_os(ZLOG_CFG).is_some() {
        debug!("{} already set, keeping existing value", ZLOG_CFG);
        return false;
    }

    env::set_var(ZLOG_CFG, path);
    info!("{}={}", ZLOG_CFG, path);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::process_lock;

    #[test]
    fn test_publish_when_unset() {
        let _guard = process_lock();
        env::remove_var(ZLOG_CFG);

        assert!(publish_config_path("/etc/scion/disp.cfg"));
        assert_eq!(env::var(ZLOG_CFG).unwrap(), "/etc/scion/disp.cfg");

        env::remove_var(ZLOG_CFG);
    }

    #[test]
    fn test_existing_value_is_kept() {
        let _guard = process_lock();
        env::set_var(ZLOG_CFG, "/old/path");

        assert!(!publish_config_path("/new/path"));
        assert_eq!(env::var(ZLOG_CFG).unwrap(), "/old/path");

        env::remove_var(ZLOG_CFG);
    }
}
