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

//! FFI boundary hardening
//!
//! Panics must not unwind across the JNI boundary into the JVM, and path
//! strings must survive the trip through the C environment intact.

use anyhow::{bail, Result};
use std::panic::{self, AssertUnwindSafe};

/// Exit status reported when the bridge itself fails before the dispatcher
/// entry point is reached. Distinct from any status the dispatcher is known
/// to return.
pub const LAUNCH_FAILED: i32 = -1;

/// Reject strings that cannot cross the C boundary intact.
///
/// An interior NUL would truncate the value zlog sees when it reads the
/// environment variable.
pub fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("empty path");
    }
    if path.contains('\0') {
        bail!("path contains NUL byte");
    }
    Ok(())
}

/// Run a JNI body that produces an exit status, converting panics into
/// [`LAUNCH_FAILED`] instead of unwinding into the JVM.
pub fn guard_jint<F: FnOnce() -> i32>(body: F) -> i32 {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(status) => status,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };

            log::error!("panic caught at JNI boundary: {}", msg);
            LAUNCH_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("/data/scion").is_ok());
        assert!(validate_path("").is_err());
        assert!(validate_path("path\0with\0nulls").is_err());
    }

    #[test]
    fn test_guard_jint_normal() {
        assert_eq!(guard_jint(|| 42), 42);
    }

    #[test]
    fn test_guard_jint_panic() {
        let status = guard_jint(|| -> i32 { panic!("test panic") });
        assert_eq!(status, LAUNCH_FAILED);
    }
}
