use crate::Float;
use fastrand::Rng;
use fastrand_contrib::RngExt;
use parking_lot::Once;
use std::sync::atomic::{AtomicBool, Ordering};

/// A helper trait to get feature-gated floating-point random values
pub trait SampleFloat {
    /// Get a random value in the range `[lower, upper)`
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`
    fn float(&mut self) -> Float;
}
impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f64_range(lower..upper)
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f32_range(lower..upper)
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

static WARNINGS_ENABLED: AtomicBool = AtomicBool::new(true);
static WARNINGS_SET_BY_ENV: AtomicBool = AtomicBool::new(false);
static WARNINGS_OVERRIDE: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

fn init_env_override() {
    INIT.call_once(|| {
        if let Ok(val) = std::env::var("SCALAR_SWARM_WARNINGS") {
            if val == "0" {
                WARNINGS_SET_BY_ENV.store(true, Ordering::Relaxed);
                WARNINGS_ENABLED.store(false, Ordering::Relaxed);
            }
            if val == "1" {
                WARNINGS_SET_BY_ENV.store(true, Ordering::Relaxed);
                WARNINGS_ENABLED.store(true, Ordering::Relaxed);
            }
        }
    });
}

fn try_set_warnings_override(value: bool) {
    init_env_override();
    if WARNINGS_SET_BY_ENV.load(Ordering::Relaxed) {
        return;
    }
    let already_set = WARNINGS_OVERRIDE.swap(true, Ordering::Relaxed);
    if !already_set {
        WARNINGS_ENABLED.store(value, Ordering::Relaxed);
    }
}

/// A method which can force-enable warnings which may be disabled by dependencies.
///
/// This method will still not enable warnings if the environment variable
/// `SCALAR_SWARM_WARNINGS=0`.
pub fn enable_warnings() {
    try_set_warnings_override(true);
}

/// A method which can force-disable warnings which may be enabled by dependencies.
///
/// This method will still not disable warnings if the environment variable
/// `SCALAR_SWARM_WARNINGS=1`.
pub fn disable_warnings() {
    try_set_warnings_override(false);
}

/// Returns `true` if warnings are enabled.
///
/// Warnings are enabled by default and can be disabled either by setting the environment variable
/// `SCALAR_SWARM_WARNINGS=0` or by calling [`disable_warnings`] first. The first call of
/// [`enable_warnings`] or [`disable_warnings`] wins over any later call. Setting
/// `SCALAR_SWARM_WARNINGS=1` will force-enable warnings regardless of any calls to
/// [`disable_warnings`]. In all cases, the environment variable takes precedence.
pub fn should_warn() -> bool {
    init_env_override();
    WARNINGS_ENABLED.load(Ordering::Relaxed)
}

/// Conditionally warns the user (warns by default).
///
/// See [`should_warn`] for details on how to conditionally enable and disable warnings.
pub fn maybe_warn(msg: &str) {
    if should_warn() {
        eprintln!("Warning: {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastrand::Rng;

    #[test]
    fn test_range_is_half_open() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..10_000 {
            let v = rng.range(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_float_in_unit_interval() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..10_000 {
            let v = rng.float();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = Rng::with_seed(7);
        let mut b = Rng::with_seed(7);
        let xs: Vec<Float> = (0..16).map(|_| a.range(-10.0, 10.0)).collect();
        let ys: Vec<Float> = (0..16).map(|_| b.range(-10.0, 10.0)).collect();
        assert_eq!(xs, ys);
    }

    fn reset_globals() {
        WARNINGS_ENABLED.store(true, Ordering::Relaxed);
        WARNINGS_SET_BY_ENV.store(false, Ordering::Relaxed);
        WARNINGS_OVERRIDE.store(false, Ordering::Relaxed);
    }

    // Both checks share the global flags, so they run in one test.
    #[test]
    fn test_warning_overrides_and_branches() {
        reset_globals();
        assert!(should_warn());
        disable_warnings();
        assert!(!should_warn());
        enable_warnings();
        // a dependency trying to enable warnings after a user manually disables them
        assert!(!should_warn());
        maybe_warn("this should not print");

        reset_globals();
        enable_warnings();
        assert!(should_warn());
        disable_warnings();
        // a dependency trying to disable warnings after a user manually enables them
        assert!(should_warn());
        maybe_warn("this should print");
        reset_globals();
    }
}
