//! Mass-spring cloth simulation with Verlet integration.
//!
//! `drape` models a cloth sheet as a rectangular grid of point masses
//! connected by structural, shear, and flexion springs, hung from its two
//! top corners. Each tick saves every particle's state, applies an optional
//! flap perturbation, advances the particles with a finite-difference
//! (Verlet-style) integrator under spring, gravity, wind, and drag forces,
//! then caps spring stretch with a single sequential constraint pass.
//!
//! # Features
//!
//! - **Implicit velocity**: positions plus a two-step history, never a
//!   stored velocity — the scheme is self-starting and stable for stiff
//!   springs at small fixed time steps
//! - **Stretch constraints**: one-pass, order-dependent distance caps
//!   (Gauss-Seidel-style relaxation, deliberately not iterated)
//! - **Explicit configuration**: no ambient globals; construction and
//!   per-update parameters are plain structs
//! - **Snapshot/restore**: bit-exact save and resume of the full state
//! - **Observable**: monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! Rendering, windowing, and input are left to the caller; the cloth
//! exposes particle positions and spring segments for that purpose.
//!
//! # Quick start
//!
//! ```
//! use drape::{Cloth, ClothConfig, SimParams};
//!
//! let mut cloth: Cloth<f32> = Cloth::new(&ClothConfig::with_grid(10, 12)).unwrap();
//! let params = SimParams::new();
//! for _ in 0..100 {
//!     cloth.update(&params);
//! }
//! let hem = cloth.position_at(9, 6);
//! assert!(hem.y < 0.0); // the sheet has sagged
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod cloth;
pub mod config;
pub mod state;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use spring::{Spring, SpringKind};
pub use cloth::Cloth;
pub use config::{ClothConfig, SimParams};
pub use state::{ClothState, ParticleState};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
