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

//! Entry-point seam for the pre-linked dispatcher binary
//!
//! The dispatcher is compiled into this shared library as an external
//! object; the bridge only knows its `main` symbol and its exit status.
//! Everything else (packet demultiplexing, registration state, framing)
//! is the dispatcher's own business.

use libc::{c_char, c_int};

/// Signature of the dispatcher's process entry point.
pub type DispatcherMain = unsafe extern "C" fn(c_int, *mut *mut c_char) -> c_int;

/// Invoke an entry point with an empty argument vector and block until it
/// returns.
///
/// The dispatcher receives no command line through this path: it must
/// configure itself from `ZLOG_CFG` and its own default config discovery.
/// Under normal operation the call never returns; the dispatcher runs for
/// the remaining life of the process.
pub fn run(entry: DispatcherMain) -> i32 {
    // argc 0, argv NULL, matching the original service wrapper.
    unsafe { entry(0, std::ptr::null_mut()) }
}

/// The dispatcher `main` linked into this library.
#[cfg(target_os = "android")]
pub fn entry_point() -> DispatcherMain {
    extern "C" {
        fn main(argc: c_int, argv: *mut *mut c_char) -> c_int;
    }
    main
}
