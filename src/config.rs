//! Configuration types for cloth construction and simulation.
//!
//! The original formulation of this simulation kept its tunables in ambient
//! globals; here they are explicit values handed to the cloth, so behavior
//! is a pure function of inputs.

use crate::float::Float;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction-time cloth parameters: grid shape, physical layout, and the
/// spring coefficients (captured by each spring when it is wired, never
/// re-read afterwards).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Grid rows. Must be at least 2.
    pub rows: usize,
    /// Grid columns. Must be at least 2.
    pub cols: usize,
    /// Physical sheet width; the sheet is centered on x = 0.
    pub width: F,
    /// Physical sheet height, hanging downward from `top`.
    pub height: F,
    /// Y coordinate of the top row.
    pub top: F,
    /// Mass of every particle. Must be positive and finite.
    pub particle_mass: F,
    /// Stiffness of structural and shear springs. Must be positive.
    pub stiffness: F,
    /// Flexion springs use `stiffness * bend_factor`. Must be in (0, 1).
    pub bend_factor: F,
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        ClothConfig {
            rows: 31,
            cols: 41,
            width: F::from_f32(1.5),
            height: F::one(),
            top: F::one(),
            particle_mass: F::one(),
            stiffness: F::from_f32(5000.0),
            bend_factor: F::from_f32(0.333),
        }
    }
}

impl<F: Float> ClothConfig<F> {
    /// A config with the given grid shape and default physical parameters.
    pub fn with_grid(rows: usize, cols: usize) -> Self {
        ClothConfig { rows, cols, ..Self::default() }
    }
}

/// Per-update simulation parameters.
///
/// # Builder Pattern
/// ```
/// use drape::{SimParams, Vec3};
///
/// let params: SimParams<f32> = SimParams::new()
///     .with_time_step(1.0 / 200.0)
///     .with_wind(Vec3::new(0.0, 0.0, 50.0))
///     .with_wind_enabled(true)
///     .with_deformation(1.1);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimParams<F: Float> {
    /// Fixed integration time step. Default: 1/200.
    pub time_step: F,
    /// Gravitational constant (force is `mass * gravity`, downward).
    /// Default: 9.8.
    pub gravity: F,
    /// Whether the gravity term is applied. Default: true.
    pub gravity_on: bool,
    /// Uniform wind force vector, applied to every free particle when
    /// enabled. Default: 100 along +Z.
    pub wind: Vec3<F>,
    /// Whether the wind term is applied. Default: false.
    pub wind_on: bool,
    /// Linear drag coefficient opposing the implied velocity. Default: 0.9.
    pub drag: F,
    /// Velocity-retention factor of the integrator, in [0, 1]; 1.0 keeps
    /// the implied velocity untouched. Default: 0.9.
    pub damping: F,
    /// Whether the stretch-constraint pass runs. Default: true.
    pub constraint_on: bool,
    /// Maximum allowed stretch as a multiple of resting length.
    /// Default: 1.2.
    pub deformation: F,
    /// Displacement applied to the bottom row by a flap. Default: 0.25
    /// along +Z.
    pub flap_offset: Vec3<F>,
}

impl<F: Float> SimParams<F> {
    /// Create params with default values.
    pub fn new() -> Self {
        SimParams {
            time_step: F::one() / F::from_f32(200.0),
            gravity: F::from_f32(9.8),
            gravity_on: true,
            wind: Vec3::new(F::zero(), F::zero(), F::from_f32(100.0)),
            wind_on: false,
            drag: F::from_f32(0.9),
            damping: F::from_f32(0.9),
            constraint_on: true,
            deformation: F::from_f32(1.2),
            flap_offset: Vec3::new(F::zero(), F::zero(), F::from_f32(0.25)),
        }
    }

    /// Set the integration time step.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the gravitational constant.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Toggle the gravity term.
    pub fn with_gravity_enabled(mut self, on: bool) -> Self {
        self.gravity_on = on;
        self
    }

    /// Set the wind force vector.
    pub fn with_wind(mut self, wind: Vec3<F>) -> Self {
        self.wind = wind;
        self
    }

    /// Toggle the wind term.
    pub fn with_wind_enabled(mut self, on: bool) -> Self {
        self.wind_on = on;
        self
    }

    /// Set the drag coefficient.
    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    /// Set the velocity-retention factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Toggle the stretch-constraint pass.
    pub fn with_constraints_enabled(mut self, on: bool) -> Self {
        self.constraint_on = on;
        self
    }

    /// Set the deformation limit.
    pub fn with_deformation(mut self, deformation: F) -> Self {
        self.deformation = deformation;
        self
    }

    /// Set the flap displacement vector.
    pub fn with_flap_offset(mut self, offset: Vec3<F>) -> Self {
        self.flap_offset = offset;
        self
    }
}

impl<F: Float> Default for SimParams<F> {
    fn default() -> Self {
        Self::new()
    }
}
