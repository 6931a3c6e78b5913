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

//! Pre-launch runtime layout for the dispatcher
//!
//! The dispatcher expects its socket directory and log directory to exist
//! under the app files directory, and it cannot bind its default socket if
//! a previous process left one behind. The service runs this before the
//! launch call.

use crate::result::NativeResult;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Relative path of the dispatcher's default unix socket.
pub const DEFAULT_SOCKET: &str = "run/shm/dispatcher/default.sock";

/// Directories the dispatcher needs under the app files directory.
const RUNTIME_DIRS: &[&str] = &["run/shm", "logs"];

#[derive(Serialize)]
pub struct SetupReport {
    pub created: Vec<String>,
    #[serde(rename = "socketRemoved")]
    pub socket_removed: bool,
}

/// Prepare the dispatcher runtime layout under `base`, returning a JSON
/// report. Idempotent.
pub fn prepare_environment(base: &str) -> String {
    match prepare(Path::new(base)) {
        Ok(report) => NativeResult::success(report),
        Err(e) => NativeResult::<SetupReport>::error(&format!("{:#}", e)),
    }
}

fn prepare(base: &Path) -> Result<SetupReport> {
    let mut created = Vec::new();

    for rel in RUNTIME_DIRS {
        let dir = base.join(rel);
        if !dir.is_dir() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
            debug!("created {}", dir.display());
            created.push(rel.to_string());
        }
    }

    let socket_removed = remove_stale_socket(base)?;

    Ok(SetupReport {
        created,
        socket_removed,
    })
}

/// Delete a socket left behind by a previous dispatcher process so the next
/// one can bind it again. A missing socket is not an error.
pub fn remove_stale_socket(base: &Path) -> Result<bool> {
    let socket = base.join(DEFAULT_SOCKET);
    if !socket.exists() {
        return Ok(false);
    }

    fs::remove_file(&socket)
        .with_context(|| format!("cannot remove stale socket {}", socket.display()))?;
    info!("removed stale dispatcher socket {}", socket.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_runtime_dirs() {
        let base = tempfile::tempdir().unwrap();

        let report = prepare(base.path()).unwrap();
        assert_eq!(report.created, vec!["run/shm", "logs"]);
        assert!(!report.socket_removed);
        assert!(base.path().join("run/shm").is_dir());
        assert!(base.path().join("logs").is_dir());
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let base = tempfile::tempdir().unwrap();

        prepare(base.path()).unwrap();
        let report = prepare(base.path()).unwrap();
        assert!(report.created.is_empty());
    }

    #[test]
    fn test_stale_socket_is_removed() {
        let base = tempfile::tempdir().unwrap();
        let socket = base.path().join(DEFAULT_SOCKET);
        fs::create_dir_all(socket.parent().unwrap()).unwrap();
        fs::write(&socket, b"").unwrap();

        let report = prepare(base.path()).unwrap();
        assert!(report.socket_removed);
        assert!(!socket.exists());
    }

    #[test]
    fn test_prepare_environment_json() {
        let base = tempfile::tempdir().unwrap();

        let json = prepare_environment(base.path().to_str().unwrap());
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("run/shm"));
    }
}
