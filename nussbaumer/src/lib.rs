#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Negacyclic convolution over `Z/QZ` with Nussbaumer's polynomial transform.
//!
//! Multiplication modulo `x^N + 1` needs no roots of unity in the ring: the transform
//! works with powers of `u` in `R[u] / (u^r + 1)`, which are signed rotations.

mod engine;
mod error;
mod mass;
mod params;
mod transformed;

pub mod backend;
pub mod rotate;

pub use engine::{multiply, NussbaumerEngine};
pub use error::NussbaumerError;
pub use mass::MassTransformed;
pub use params::Decomposition;
pub use transformed::Transformed;
