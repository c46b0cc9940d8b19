//! The cloth sheet: a particle grid wired with springs, advanced one tick
//! at a time.

use crate::config::{ClothConfig, SimParams};
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::spring::{Spring, SpringKind};
use crate::state::{ClothState, ParticleState};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A rectangular cloth sheet hung from its two top corners.
///
/// Particles live in a flattened arena indexed `row * cols + col`; springs
/// reference them by index. The spring list order is the creation order,
/// which is also the order of the constraint pass, so a given configuration
/// always produces the same dynamics.
pub struct Cloth<F: Float> {
    rows: usize,
    cols: usize,
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    flap_requested: bool,
}

impl<F: Float> Cloth<F> {
    /// Build a cloth from the given configuration.
    ///
    /// The lattice is centered on x = 0 with its top row at `config.top`,
    /// rows descending in y, all at z = 0. Four wiring passes per cell, in
    /// row-major order: structural south and east, shear southeast and
    /// southwest, flexion two-south and two-east. Flexion springs get
    /// `stiffness * bend_factor`. The (0,0) and (0,cols-1) corners are
    /// fixed after wiring.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        if config.rows < 2 || config.cols < 2 {
            return Err(ClothError::InvalidGridDimensions);
        }
        if !(config.particle_mass > F::zero()) || !config.particle_mass.is_finite() {
            return Err(ClothError::InvalidMass);
        }
        if !(config.stiffness > F::zero()) || !config.stiffness.is_finite() {
            return Err(ClothError::InvalidStiffness);
        }
        if !(config.bend_factor > F::zero()) || !(config.bend_factor < F::one()) {
            return Err(ClothError::InvalidBendFactor);
        }

        let rows = config.rows;
        let cols = config.cols;

        let x0 = -config.width * F::half();
        let y0 = config.top;
        let dx = config.width / F::from_f32((cols - 1) as f32);
        let dy = -config.height / F::from_f32((rows - 1) as f32);

        let mut particles = AllocVec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let x = x0 + dx * F::from_f32(c as f32);
                let y = y0 + dy * F::from_f32(r as f32);
                let pos = Vec3::new(x, y, F::zero());
                particles.push(Particle::new(pos, config.particle_mass));
            }
        }

        let mut cloth = Cloth {
            rows,
            cols,
            particles,
            springs: AllocVec::new(),
            flap_requested: false,
        };

        let bend_stiffness = config.stiffness * config.bend_factor;
        for r in 0..rows {
            for c in 0..cols {
                let here = cloth.index(r, c);

                // Structural: south and east neighbors. Only linking
                // forward keeps each unordered pair unique.
                if r + 1 < rows {
                    cloth.add_spring(here, cloth.index(r + 1, c), config.stiffness, SpringKind::Structural);
                }
                if c + 1 < cols {
                    cloth.add_spring(here, cloth.index(r, c + 1), config.stiffness, SpringKind::Structural);
                }

                // Shear: both diagonals toward the next row.
                if r + 1 < rows && c + 1 < cols {
                    cloth.add_spring(here, cloth.index(r + 1, c + 1), config.stiffness, SpringKind::Shear);
                }
                if r + 1 < rows && c > 0 {
                    cloth.add_spring(here, cloth.index(r + 1, c - 1), config.stiffness, SpringKind::Shear);
                }

                // Flexion: skip-one south and east, at reduced stiffness.
                if r + 2 < rows {
                    cloth.add_spring(here, cloth.index(r + 2, c), bend_stiffness, SpringKind::Flexion);
                }
                if c + 2 < cols {
                    cloth.add_spring(here, cloth.index(r, c + 2), bend_stiffness, SpringKind::Flexion);
                }
            }
        }

        // The two suspension points.
        let left = cloth.index(0, 0);
        let right = cloth.index(0, cols - 1);
        cloth.particles[left].fixed = true;
        cloth.particles[right].fixed = true;

        Ok(cloth)
    }

    fn add_spring(&mut self, a: usize, b: usize, stiffness: F, kind: SpringKind) {
        let spring_index = self.springs.len();
        self.springs.push(Spring::new(a, b, &self.particles, stiffness, kind));
        self.particles[a].attach_spring(spring_index);
        self.particles[b].attach_spring(spring_index);
    }

    /// Flattened index of the particle at (`row`, `col`).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The particle at (`row`, `col`).
    pub fn particle(&self, row: usize, col: usize) -> &Particle<F> {
        &self.particles[self.index(row, col)]
    }

    /// Current position of the particle at (`row`, `col`).
    pub fn position_at(&self, row: usize, col: usize) -> Vec3<F> {
        self.particles[self.index(row, col)].pos
    }

    /// All particles, row-major.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// All springs, in creation (and constraint-pass) order.
    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Endpoint position pairs of every spring, for drawing the mesh.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3<F>, Vec3<F>)> + '_ {
        self.springs
            .iter()
            .map(move |s| (self.particles[s.a].pos, self.particles[s.b].pos))
    }

    /// Fix the particle at (`row`, `col`) in place, killing its implied
    /// velocity so a later release does not launch it.
    pub fn fix(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        let p = &mut self.particles[idx];
        p.fixed = true;
        p.last_pos = p.pos;
        p.second_last_pos = p.pos;
    }

    /// Let the particle at (`row`, `col`) move again.
    pub fn release(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.particles[idx].fixed = false;
    }

    /// Reset every particle to its construction-time position and drop any
    /// pending flap. Springs are not rebuilt.
    pub fn reset(&mut self) {
        for p in self.particles.iter_mut() {
            p.reset();
        }
        self.flap_requested = false;
    }

    /// Schedule a one-shot flap perturbation for the next update.
    pub fn request_flap(&mut self) {
        self.flap_requested = true;
    }

    /// Displace the free particles of the bottom row by `offset`.
    ///
    /// Both the current and the saved position move, so the stretched
    /// configuration survives the integration step and the springs feel it.
    fn flap(&mut self, offset: Vec3<F>) {
        let bottom = self.rows - 1;
        for c in 0..self.cols {
            let idx = self.index(bottom, c);
            let p = &mut self.particles[idx];
            if p.fixed {
                continue;
            }
            p.pos = p.pos + offset;
            p.last_pos = p.last_pos + offset;
        }
    }

    /// Advance the simulation by one tick.
    pub fn update(&mut self, params: &SimParams<F>) {
        self.update_observed(params, &mut NoOpStepObserver);
    }

    /// Advance the simulation by one tick, reporting phases to `observer`.
    ///
    /// Phase order is fixed: save every particle's state, apply a pending
    /// flap, advance every free particle, then run the one-pass stretch
    /// constraint over the springs in creation order. Within each phase the
    /// per-particle (or per-spring) work is independent; across phases it
    /// is not.
    pub fn update_observed<O: StepObserver>(&mut self, params: &SimParams<F>, observer: &mut O) {
        for p in self.particles.iter_mut() {
            p.save_state();
        }

        if self.flap_requested {
            self.flap(params.flap_offset);
            self.flap_requested = false;
            observer.on_flap();
        }

        for i in 0..self.particles.len() {
            if self.particles[i].fixed {
                continue;
            }
            let accel = self.particles[i].acceleration(i, &self.particles, &self.springs, params);
            self.particles[i].integrate(params.time_step, params.damping, accel);
        }
        observer.on_integrate();

        if params.constraint_on {
            for spring in self.springs.iter() {
                spring.constrain(&mut self.particles, params.deformation);
            }
            observer.on_constrain();
        }

        observer.on_step_complete();
    }

    /// Capture every particle's position and history.
    pub fn snapshot(&self) -> ClothState<F> {
        ClothState {
            particles: self
                .particles
                .iter()
                .map(|p| ParticleState {
                    pos: p.pos,
                    last_pos: p.last_pos,
                    second_last_pos: p.second_last_pos,
                })
                .collect(),
        }
    }

    /// Restore a snapshot taken from a cloth with the same grid shape.
    pub fn restore(&mut self, state: &ClothState<F>) -> Result<(), ClothError> {
        if state.len() != self.particles.len() {
            return Err(ClothError::StateSizeMismatch {
                expected: self.particles.len(),
                actual: state.len(),
            });
        }
        for (p, s) in self.particles.iter_mut().zip(state.particles.iter()) {
            p.pos = s.pos;
            p.last_pos = s.last_pos;
            p.second_last_pos = s.second_last_pos;
        }
        Ok(())
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClothConfig<f32> {
        ClothConfig::with_grid(3, 4)
    }

    #[test]
    fn correct_particle_count() {
        let cloth = Cloth::new(&test_config()).unwrap();
        assert_eq!(cloth.particle_count(), 12); // 3 * 4
    }

    #[test]
    fn spring_counts_per_class() {
        let cloth = Cloth::new(&test_config()).unwrap(); // 3 rows, 4 cols
        let count = |kind: SpringKind| {
            cloth.springs().iter().filter(|s| s.kind == kind).count()
        };
        // South: (3-1)*4 = 8, east: 3*(4-1) = 9
        assert_eq!(count(SpringKind::Structural), 17);
        // Both diagonals: (3-1)*(4-1)*2 = 12
        assert_eq!(count(SpringKind::Shear), 12);
        // Two-south: (3-2)*4 = 4, two-east: 3*(4-2) = 6
        assert_eq!(count(SpringKind::Flexion), 10);
        assert_eq!(cloth.spring_count(), 39);
    }

    #[test]
    fn no_duplicate_pairs_within_class() {
        let cloth = Cloth::new(&ClothConfig::<f64>::with_grid(5, 5)).unwrap();
        let springs = cloth.springs();
        for (i, s) in springs.iter().enumerate() {
            for t in &springs[i + 1..] {
                let same_pair = (s.a == t.a && s.b == t.b) || (s.a == t.b && s.b == t.a);
                assert!(
                    !(same_pair && s.kind == t.kind),
                    "duplicate {:?} spring between {} and {}",
                    s.kind, s.a, s.b,
                );
            }
        }
    }

    #[test]
    fn top_corners_are_fixed() {
        let cloth = Cloth::new(&test_config()).unwrap();
        assert!(cloth.particle(0, 0).fixed);
        assert!(cloth.particle(0, 3).fixed);
        assert!(!cloth.particle(0, 1).fixed);
        assert!(!cloth.particle(2, 0).fixed);
    }

    #[test]
    fn flexion_springs_use_reduced_stiffness() {
        let config = test_config();
        let cloth = Cloth::new(&config).unwrap();
        let expected = config.stiffness * config.bend_factor;
        for s in cloth.springs() {
            match s.kind {
                SpringKind::Flexion => assert_eq!(s.stiffness, expected),
                _ => assert_eq!(s.stiffness, config.stiffness),
            }
        }
    }

    #[test]
    fn resting_lengths_match_lattice_spacing() {
        let config = ClothConfig::<f64> {
            rows: 3,
            cols: 3,
            width: 2.0,
            height: 1.0,
            ..ClothConfig::default()
        };
        let cloth = Cloth::new(&config).unwrap();
        let dx = 1.0; // width / (cols - 1)
        let dy = 0.5; // height / (rows - 1)
        for s in cloth.springs() {
            assert!(s.rest_length > 0.0);
            match s.kind {
                SpringKind::Shear => {
                    let diag = (dx * dx + dy * dy).sqrt();
                    assert!((s.rest_length - diag).abs() < 1e-12);
                }
                _ => {
                    let ok = (s.rest_length - dx).abs() < 1e-12
                        || (s.rest_length - dy).abs() < 1e-12
                        || (s.rest_length - 2.0 * dx).abs() < 1e-12
                        || (s.rest_length - 2.0 * dy).abs() < 1e-12;
                    assert!(ok, "unexpected rest length {}", s.rest_length);
                }
            }
        }
    }

    #[test]
    fn rejects_degenerate_grids() {
        let mut config = ClothConfig::<f32>::with_grid(1, 4);
        assert_eq!(Cloth::new(&config).err(), Some(ClothError::InvalidGridDimensions));
        config = ClothConfig::with_grid(4, 1);
        assert_eq!(Cloth::new(&config).err(), Some(ClothError::InvalidGridDimensions));
    }

    #[test]
    fn rejects_bad_coefficients() {
        let mut config = ClothConfig::<f32>::with_grid(3, 3);
        config.particle_mass = 0.0;
        assert_eq!(Cloth::new(&config).err(), Some(ClothError::InvalidMass));

        let mut config = ClothConfig::<f32>::with_grid(3, 3);
        config.stiffness = -1.0;
        assert_eq!(Cloth::new(&config).err(), Some(ClothError::InvalidStiffness));

        let mut config = ClothConfig::<f32>::with_grid(3, 3);
        config.bend_factor = 1.5;
        assert_eq!(Cloth::new(&config).err(), Some(ClothError::InvalidBendFactor));
    }
}
