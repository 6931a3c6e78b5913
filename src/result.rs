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

//! JSON result envelope for cross-JNI data transfer
//!
//! Setup operations report back to the service as JSON strings so the Java
//! side never has to interpret native error types.

use chrono::Utc;
use serde::Serialize;

/// `{success, data?, error?, timestamp}` envelope serialized to a string.
#[derive(Serialize)]
pub struct NativeResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: i64,
}

impl<T: Serialize> NativeResult<T> {
    pub fn success(data: T) -> String {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().timestamp(),
        }
        .serialize_or_fallback()
    }

    pub fn error(msg: &str) -> String {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
            timestamp: Utc::now().timestamp(),
        }
        .serialize_or_fallback()
    }

    fn serialize_or_fallback(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"Critical serialization error","timestamp":0}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let json = NativeResult::success(vec!["run/shm".to_string()]);
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("run/shm"));
        assert!(!json.contains(r#""error""#));
    }

    #[test]
    fn test_error_shape() {
        let json = NativeResult::<()>::error("no such directory");
        assert!(json.contains(r#""success":false"#));
        assert!(json.contains("no such directory"));
    }
}
