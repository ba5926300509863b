#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Modular integer rings and the polynomials over them.

mod arith;
mod count;
mod error;
mod ops;
mod random;
mod ring;

pub mod polynomial;

pub use arith::Xgcd;
pub use count::{OpCount, OpCountSnapshot};
pub use error::AlgebraError;
pub use ops::{AddOps, MulOps, RingOps, SubOps};
pub use polynomial::Polynomial;
pub use ring::{Ring, Zq, Zq12289, Zq2047};
