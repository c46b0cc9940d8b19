//! Point masses with a two-step position history.

use crate::config::SimParams;
use crate::float::Float;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A point mass in the spring network.
///
/// Velocity is never stored; it is reconstructed from the two history
/// positions (`last_pos - second_last_pos`). The history always reflects the
/// last two completed steps, maintained by [`save_state`](Particle::save_state)
/// at the top of every tick.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub mass: F,
    /// Construction-time position; `reset` returns here.
    pub initial_pos: Vec3<F>,
    pub pos: Vec3<F>,
    pub last_pos: Vec3<F>,
    pub second_last_pos: Vec3<F>,
    /// Fixed particles never move, regardless of computed forces.
    pub fixed: bool,
    springs: AllocVec<usize>,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec3<F>, mass: F) -> Self {
        Particle {
            mass,
            initial_pos: pos,
            pos,
            last_pos: pos,
            second_last_pos: pos,
            fixed: false,
            springs: AllocVec::new(),
        }
    }

    /// Register an incident spring by its index in the cloth's spring list.
    /// Insertion order is kept so force summation is deterministic.
    pub fn attach_spring(&mut self, spring: usize) {
        self.springs.push(spring);
    }

    /// Indices of the springs incident on this particle.
    pub fn springs(&self) -> &[usize] {
        &self.springs
    }

    /// Restore the construction-time position and collapse the history onto
    /// it, so the implied velocity is zero immediately afterwards.
    pub fn reset(&mut self) {
        self.pos = self.initial_pos;
        self.last_pos = self.initial_pos;
        self.second_last_pos = self.initial_pos;
    }

    /// Shift the history window forward one step: what was current becomes
    /// one-step-prior, what was one-step-prior becomes two-steps-prior.
    ///
    /// Must run for every particle before any particle advances, because
    /// force evaluation reads the saved positions of spring neighbors.
    pub fn save_state(&mut self) {
        self.second_last_pos = self.last_pos;
        self.last_pos = self.pos;
    }

    /// Implied per-step velocity, from the two saved positions.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.last_pos - self.second_last_pos
    }

    /// Net acceleration from incident springs, gravity, wind, and drag.
    ///
    /// `index` is this particle's own slot in `particles`. Spring forces are
    /// evaluated against saved positions, so every particle in a tick sees
    /// the same pre-update snapshot. Computable for fixed particles too, but
    /// the integration loop never applies it to them.
    pub fn acceleration(
        &self,
        index: usize,
        particles: &[Particle<F>],
        springs: &[Spring<F>],
        params: &SimParams<F>,
    ) -> Vec3<F> {
        let mut force = Vec3::zero();

        for &s in self.springs.iter() {
            force = force + springs[s].force_on(index, particles);
        }

        if params.gravity_on {
            force = force + Vec3::new(F::zero(), -params.gravity * self.mass, F::zero());
        }

        if params.wind_on {
            force = force + params.wind;
        }

        force = force + self.velocity_raw().scale(-params.drag);

        force.scale(F::one() / self.mass)
    }

    /// Advance the current position one step with the finite-difference
    /// scheme: `last_pos + velocity * damping * dt + accel * dt^2`.
    ///
    /// `damping` is the velocity-retention factor; 1.0 keeps the implied
    /// velocity untouched. No-op for fixed particles.
    pub fn integrate(&mut self, dt: F, damping: F, accel: Vec3<F>) {
        if self.fixed {
            return;
        }
        let velocity = self.velocity_raw().scale(damping);
        self.pos = self.last_pos + velocity.scale(dt) + accel.scale(dt * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_state_shifts_history_window() {
        let mut p: Particle<f64> = Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
        p.pos = Vec3::new(1.0, 0.0, 0.0);
        p.save_state();
        p.pos = Vec3::new(2.0, 0.0, 0.0);
        p.save_state();
        assert_eq!(p.last_pos, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(p.second_last_pos, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn reset_zeroes_implied_velocity() {
        let mut p: Particle<f64> = Particle::new(Vec3::new(0.5, 0.5, 0.0), 1.0);
        p.pos = Vec3::new(3.0, -1.0, 2.0);
        p.save_state();
        p.reset();
        assert_eq!(p.pos, p.initial_pos);
        assert_eq!(p.velocity_raw(), Vec3::zero());
    }

    #[test]
    fn fixed_particle_ignores_integration() {
        let mut p: Particle<f32> = Particle::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        p.fixed = true;
        p.save_state();
        p.integrate(0.01, 1.0, Vec3::new(0.0, -1000.0, 0.0));
        assert_eq!(p.pos, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn integrate_matches_finite_difference_formula() {
        let mut p: Particle<f64> = Particle::new(Vec3::zero(), 1.0);
        p.second_last_pos = Vec3::new(0.0, 0.0, 0.0);
        p.last_pos = Vec3::new(0.1, 0.0, 0.0);
        p.pos = p.last_pos;
        let dt = 0.5;
        let accel = Vec3::new(0.0, -2.0, 0.0);
        p.integrate(dt, 1.0, accel);
        // last + vel*dt + accel*dt^2 = (0.1 + 0.1*0.5, -2.0*0.25, 0)
        assert!((p.pos.x - 0.15).abs() < 1e-12);
        assert!((p.pos.y - (-0.5)).abs() < 1e-12);
    }
}
