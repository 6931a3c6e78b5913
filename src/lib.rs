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

//! SCION Dispatcher Native Bridge
//!
//! JNI shim that lets the Android app launch the pre-linked SCION end-host
//! dispatcher as a library call: it hands the zlog configuration path to
//! the dispatcher through the environment, moves the process into the app
//! files directory, and blocks in the dispatcher's `main` until it exits,
//! returning its status to the service verbatim.
//!
//! The dispatcher itself is an external object linked into this library;
//! the bridge never inspects it beyond the entry point and the exit status.

pub mod dispatcher;
pub mod launcher;
pub mod result;
pub mod safety;
pub mod setup;
pub mod workdir;
pub mod zlog;

#[cfg(target_os = "android")]
mod android {
    use crate::launcher::LaunchConfig;
    use crate::safety::{self, LAUNCH_FAILED};
    use crate::{dispatcher, launcher, result, setup};
    use android_logger::Config;
    use jni::objects::{JObject, JString};
    use jni::sys::{jint, jstring};
    use jni::JNIEnv;
    use log::{error, LevelFilter};

    /// Initialize logging for Android
    fn init_logging() {
        android_logger::init_once(
            Config::default()
                .with_max_level(LevelFilter::Debug)
                .with_tag("DispatcherBridge"),
        );
    }

    /// Convert a Rust string to JNI jstring, with error handling
    fn string_to_jstring(env: &JNIEnv, s: &str) -> jstring {
        env.new_string(s)
            .map(|js| js.into_raw())
            .unwrap_or_else(|_| std::ptr::null_mut())
    }

    /// JNI: Launch the dispatcher and block until it exits.
    ///
    /// The `JavaStr` guards returned by `get_string` release the native
    /// string copies on every exit path, including the early marshalling
    /// failures. A marshalling failure is logged and reported as
    /// [`LAUNCH_FAILED`]; the dispatcher is not invoked in that case.
    #[no_mangle]
    pub extern "system" fn Java_org_scionlab_endhost_DispatcherService_launchDispatcher(
        mut env: JNIEnv,
        _this: JObject,
        config_path: JString,
        working_dir: JString,
    ) -> jint {
        init_logging();

        let config: String = match env.get_string(&config_path) {
            Ok(s) => s.into(),
            Err(e) => {
                error!("cannot read config path argument: {}", e);
                return LAUNCH_FAILED;
            }
        };

        let dir: String = match env.get_string(&working_dir) {
            Ok(s) => s.into(),
            Err(e) => {
                error!("cannot read working directory argument: {}", e);
                return LAUNCH_FAILED;
            }
        };

        safety::guard_jint(|| {
            let launch_config = LaunchConfig::new(&config, &dir);
            match launcher::launch(&launch_config, dispatcher::entry_point()) {
                Ok(status) => status,
                Err(e) => {
                    error!("dispatcher launch failed: {:#}", e);
                    LAUNCH_FAILED
                }
            }
        })
    }

    /// JNI: Prepare the dispatcher runtime layout under the app files
    /// directory (socket and log directories, stale socket cleanup).
    #[no_mangle]
    pub extern "system" fn Java_org_scionlab_endhost_DispatcherService_prepareEnvironment(
        mut env: JNIEnv,
        _this: JObject,
        files_dir: JString,
    ) -> jstring {
        init_logging();

        let base: String = match env.get_string(&files_dir) {
            Ok(s) => s.into(),
            Err(_) => {
                return string_to_jstring(
                    &env,
                    &result::NativeResult::<()>::error("Invalid files dir"),
                )
            }
        };

        string_to_jstring(&env, &setup::prepare_environment(&base))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// The environment and the working directory are process-global; tests
    /// that touch either must hold this lock.
    pub fn process_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
