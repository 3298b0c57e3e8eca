use std::sync::{LazyLock, Mutex};

pub(super) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(super) struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub(super) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: Test-only helper. All tests using EnvVarGuard acquire
        // ENV_LOCK first, serializing concurrent env-var access.
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub(super) fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: Test-only helper. ENV_LOCK serializes access;
        // the guard restores the original value on drop.
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: Test-only restoration while ENV_LOCK is still held.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Every variable `apply_env_overrides` reads, cleared so host settings
/// cannot leak into assertions.
pub(super) fn clear_override_env() -> Vec<EnvVarGuard> {
    [
        "JOURNEY_DRAFTER_PORT",
        "PORT",
        "JOURNEY_DRAFTER_HOST",
        "JOURNEY_DRAFTER_PUBLIC_DIR",
        "JOURNEY_DRAFTER_JWT_SECRET",
        "SFMC_JWT_SECRET",
        "GEMINI_API_KEY",
        "GOOGLE_API_KEY",
        "JOURNEY_DRAFTER_MODEL",
        "JOURNEY_DRAFTER_TIMEOUT_SECS",
        "JOURNEY_DRAFTER_LOCALE",
        "JOURNEY_DRAFTER_CONFIG",
    ]
    .into_iter()
    .map(EnvVarGuard::unset)
    .collect()
}
