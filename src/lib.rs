//! `scalar-swarm` minimizes a scalar function $`f(\mathbb{R}) \to \mathbb{R}`$ over a closed
//! interval with a single-swarm Particle Swarm Optimizer. The user implements the
//! [`CostFunction`](crate::traits::CostFunction) trait on some struct (or wraps a closure in
//! [`Objective`](crate::traits::Objective)) which takes a position and returns a single-valued
//! [`Result`].
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [Observers](#observers)
//! - [Warnings](#warnings)
//!
//! # Quick Start
//!
//! The reference problem is the parabola $`f(x) = x^2`$, available as
//! [`Square`](crate::test_functions::Square):
//!
//! ```rust
//! use fastrand::Rng;
//! use scalar_swarm::prelude::*;
//! use scalar_swarm::test_functions::Square;
//!
//! let config = PSOConfig::default()
//!     .with_n_particles(10)
//!     .with_max_iterations(50)
//!     .with_omega(0.5)
//!     .with_c1(1.5)
//!     .with_c2(1.5)
//!     .with_bound(-10.0, 10.0);
//! let mut pso = PSO::new(config, Rng::with_seed(0)).unwrap();
//! let summary = pso.process(&Square, &mut (), Observers::empty()).unwrap();
//! let (x, fx) = summary.best();
//! assert!(x.abs() < 0.1);
//! assert!(fx < 1e-3);
//! assert_eq!(summary.best_value_history.len(), 50);
//! ```
//!
//! Closures can be used directly through [`Objective`](crate::traits::Objective):
//!
//! ```rust
//! use fastrand::Rng;
//! use scalar_swarm::prelude::*;
//!
//! let shifted = Objective::new(|x: Float| (x - 2.0).powi(2) + 1.0);
//! let mut pso = PSO::new(PSOConfig::default(), Rng::with_seed(1)).unwrap();
//! let summary = pso.process(&shifted, &mut (), Observers::empty()).unwrap();
//! assert!((summary.x - 2.0).abs() < 0.1);
//! ```
//!
//! # Observers
//!
//! Anything implementing [`Observer`](crate::traits::Observer) is called once per completed
//! iteration with read-only access to the [`SwarmStatus`](crate::algorithms::particles::SwarmStatus).
//! The [`observers`] module contains a console progress reporter and a debugging printer, and
//! [`TrackingSwarmObserver`](crate::algorithms::particles::TrackingSwarmObserver) records the
//! swarm history for plotting. Observers wrapped in [`Arc`](std::sync::Arc) and
//! [`RwLock`](parking_lot::RwLock) can be read back after the run.
//!
//! # Warnings
//!
//! Non-finite objective values are not rejected, but a warning is printed to `stderr`. See
//! [`should_warn`](crate::core::utils::should_warn) for how to silence them.

/// Module containing the optimization algorithms.
pub mod algorithms;
/// Module containing the core types shared by algorithms.
pub mod core;
/// Module containing [`Observer`](crate::traits::Observer) implementations.
pub mod observers;
/// Module containing standard functions for testing algorithms.
pub mod test_functions;
/// Module containing the traits which connect problems, algorithms, and observers.
pub mod traits;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes.
pub mod prelude {
    pub use crate::{
        algorithms::particles::{PSOConfig, SwarmStatus, TrackingSwarmObserver, PSO},
        core::{Bound, ConfigError, MinimizationSummary, Point},
        traits::{Algorithm, CostFunction, Objective, Observer, Observers, Status},
        Float,
    };
}

/// The floating-point type used throughout the crate.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;
