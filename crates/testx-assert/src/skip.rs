use crate::config::TestConfig;

/// Returns true when `config` asks for a short run.
///
/// A skip emits an `info` event through `tracing`, visible only when the
/// caller installs a subscriber. The test is named after the current thread,
/// which the built-in test harness names after the running test.
pub fn skip_if_short(config: &TestConfig) -> bool {
    if !config.short {
        return false;
    }
    let current = std::thread::current();
    tracing::info!(
        test = current.name().unwrap_or("<unnamed>"),
        "skipping test in short mode"
    );
    true
}

/// Returns early from the enclosing test when short mode is enabled.
///
/// The second form supplies the value to return, for tests returning `Result`.
///
/// ```
/// use testx_assert::{skip_if_short, TestConfig};
///
/// fn long_running(config: &TestConfig) -> u32 {
///     skip_if_short!(config, 0);
///     42
/// }
///
/// assert_eq!(long_running(&TestConfig::short_mode()), 0);
/// assert_eq!(long_running(&TestConfig::default()), 42);
/// ```
#[macro_export]
macro_rules! skip_if_short {
    ($config:expr) => {
        if $crate::skip::skip_if_short(&$config) {
            return;
        }
    };
    ($config:expr, $ret:expr) => {
        if $crate::skip::skip_if_short(&$config) {
            return $ret;
        }
    };
}
