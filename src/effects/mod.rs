//! Cosmetic effects: hero particles and the typewriter headline.

pub mod particles;
pub mod typewriter;

pub use particles::{Particle, ParticleField, particle_color};
pub use typewriter::{Step, Typewriter};
