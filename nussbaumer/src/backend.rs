//! Fixed-size transform backends and their conformance checks.
//!
//! An accelerated backend works on flat `u16` buffers of one fixed size. The transformed
//! layout is column-major: coefficient `j` of entry `i` of [`NussbaumerEngine::transform_fast`]
//! is stored at `i + j * 2m`. Row `0` is unused. Forward outputs must stay below
//! [`TRANSFORMED_BOUND`], inverse outputs must be fully reduced.
//!
//! Componentwise multiplication takes two transformed buffers through a backend-specific
//! prepared format and multiplies every row modulo `u^r + 1`. Prepared values must stay
//! below [`PREPARED_BOUND`] and products below [`COMPONENTWISE_BOUND`].

use std::fmt;

use algebra::{Polynomial, Ring, Zq};
use itertools::iproduct;
use log::warn;

use crate::{Decomposition, NussbaumerEngine, NussbaumerError, Transformed};

/// Exclusive bound on the values a backend's forward transform may produce.
pub const TRANSFORMED_BOUND: u64 = 1 << 14;

/// Exclusive bound on the values of a buffer prepared for componentwise multiplication.
pub const PREPARED_BOUND: u64 = 1 << 15;

/// Exclusive bound on the values a backend's componentwise multiplication may produce.
pub const COMPONENTWISE_BOUND: u64 = 1 << 13;

/// The backend stage a conformance error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The forward transform.
    Forward,
    /// The inverse transform.
    Inverse,
    /// Preparing an operand for componentwise multiplication.
    Prepare,
    /// The componentwise multiplication.
    Componentwise,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Forward => f.write_str("Forward"),
            Stage::Inverse => f.write_str("Inverse"),
            Stage::Prepare => f.write_str("Prepare"),
            Stage::Componentwise => f.write_str("Componentwise"),
        }
    }
}

/// A fixed-size implementation of the fast forward transform, the componentwise
/// multiplication and the inverse transform.
pub trait TransformBackend {
    /// The size `N` of the polynomials this backend transforms.
    fn size(&self) -> usize;

    /// Transforms the `N` coefficients in `input` into `output`, laid out column-major.
    fn forward(&self, input: &[u16], output: &mut [u16]) -> Result<(), NussbaumerError>;

    /// Inverse transforms the column-major `input` into `N` coefficients in `output`.
    fn inverse(&self, input: &[u16], output: &mut [u16]) -> Result<(), NussbaumerError>;

    /// Converts the column-major `input` into the operand format of
    /// [`Self::componentwise`], of length [`Self::prepared_len`].
    fn componentwise_prepare(
        &self,
        input: &[u16],
        prepared: &mut [u16],
    ) -> Result<(), NussbaumerError>;

    /// Multiplies every row of two prepared operands modulo `u^r + 1`, writing the
    /// products column-major into `output`.
    fn componentwise(
        &self,
        lhs: &[u16],
        rhs: &[u16],
        output: &mut [u16],
    ) -> Result<(), NussbaumerError>;

    /// Returns the decomposition of [`Self::size`].
    #[inline]
    fn decomposition(&self) -> Result<Decomposition, NussbaumerError> {
        Decomposition::new(self.size())
    }

    /// Length of a transformed buffer, `2m * r`.
    #[inline]
    fn transformed_len(&self) -> Result<usize, NussbaumerError> {
        let d = self.decomposition()?;
        Ok(2 * d.m() * d.r())
    }

    /// Length of a prepared operand. Defaults to [`Self::transformed_len`].
    #[inline]
    fn prepared_len(&self) -> Result<usize, NussbaumerError> {
        self.transformed_len()
    }
}

/// The backend defined by [`NussbaumerEngine`] over `Z/QZ`, with every value in `[0, Q)`.
#[derive(Debug, Clone)]
pub struct ReferenceBackend<const Q: u32> {
    engine: NussbaumerEngine<Zq<Q>>,
    row_engine: NussbaumerEngine<Zq<Q>>,
}

impl<const Q: u32> ReferenceBackend<Q> {
    const FITS: () = assert!(
        Q as u64 <= COMPONENTWISE_BOUND,
        "the modulus must fit the componentwise value bound"
    );

    /// Creates a reference backend for polynomials of size `n`.
    pub fn new(n: usize) -> Result<Self, NussbaumerError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        let engine = NussbaumerEngine::new(n)?;
        if engine.decomposition().is_base_case() {
            return Err(NussbaumerError::InvalidSize { size: n });
        }
        let row_engine = NussbaumerEngine::new(engine.decomposition().r())?;
        Ok(Self { engine, row_engine })
    }

    /// Returns the engine behind this backend.
    #[inline]
    pub fn engine(&self) -> &NussbaumerEngine<Zq<Q>> {
        &self.engine
    }
}

impl<const Q: u32> TransformBackend for ReferenceBackend<Q> {
    #[inline]
    fn size(&self) -> usize {
        self.engine.size()
    }

    fn forward(&self, input: &[u16], output: &mut [u16]) -> Result<(), NussbaumerError> {
        check_buffer(output, self.transformed_len()?)?;
        let t = self.engine.transform_fast(&from_flat(input))?;
        write_column_major(&t, output);
        Ok(())
    }

    fn inverse(&self, input: &[u16], output: &mut [u16]) -> Result<(), NussbaumerError> {
        check_buffer(output, self.size())?;
        let t = from_column_major(input, self.engine.decomposition())?;
        let p = self.engine.inverse_transform(t)?;
        for (o, c) in output.iter_mut().zip(p) {
            *o = c.value() as u16;
        }
        Ok(())
    }

    fn componentwise_prepare(
        &self,
        input: &[u16],
        prepared: &mut [u16],
    ) -> Result<(), NussbaumerError> {
        check_buffer(input, self.transformed_len()?)?;
        check_buffer(prepared, self.prepared_len()?)?;
        for (p, &v) in prepared.iter_mut().zip(input) {
            *p = Zq::<Q>::new(v as u32).value() as u16;
        }
        Ok(())
    }

    fn componentwise(
        &self,
        lhs: &[u16],
        rhs: &[u16],
        output: &mut [u16],
    ) -> Result<(), NussbaumerError> {
        check_buffer(output, self.transformed_len()?)?;
        let d = self.engine.decomposition();
        let products = multiply_rows(
            &self.row_engine,
            &from_column_major(lhs, d)?,
            &from_column_major(rhs, d)?,
        )?;
        write_column_major(&products, output);
        Ok(())
    }
}

/// Multiplies the rows of two transformed operands pairwise, row `0` included.
fn multiply_rows<R: Ring>(
    row_engine: &NussbaumerEngine<R>,
    lhs: &Transformed<R>,
    rhs: &Transformed<R>,
) -> Result<Transformed<R>, NussbaumerError> {
    Ok(lhs
        .iter()
        .zip(rhs)
        .map(|(a, b)| row_engine.multiply(a, b))
        .collect::<Result<Vec<_>, _>>()?
        .into())
}

#[inline]
fn check_buffer(buffer: &[u16], expected: usize) -> Result<(), NussbaumerError> {
    if buffer.len() == expected {
        Ok(())
    } else {
        Err(NussbaumerError::LengthMismatch {
            expected,
            found: buffer.len(),
        })
    }
}

fn from_flat<R: Ring>(input: &[u16]) -> Polynomial<R> {
    input.iter().map(|&v| R::from_i64(v as i64)).collect::<Vec<R>>().into()
}

/// Reads a column-major buffer into a transformed representation, reducing every value.
fn from_column_major<R: Ring>(
    input: &[u16],
    d: Decomposition,
) -> Result<Transformed<R>, NussbaumerError> {
    let rows = 2 * d.m();
    check_buffer(input, rows * d.r())?;
    Ok((0..rows)
        .map(|i| from_flat(&input.iter().skip(i).step_by(rows).copied().collect::<Vec<_>>()))
        .collect::<Vec<_>>()
        .into())
}

fn write_column_major<const Q: u32>(t: &Transformed<Zq<Q>>, output: &mut [u16]) {
    let rows = t.len();
    for (i, entry) in t.iter().enumerate() {
        for (j, c) in entry.iter().enumerate() {
            output[i + j * rows] = c.value() as u16;
        }
    }
}

/// Checks `backend`'s forward transform of `input` against the engine over `Z/QZ`.
///
/// Row `0` is not compared. Every other value must be congruent to the engine's and
/// below [`TRANSFORMED_BOUND`].
pub fn verify_forward<const Q: u32, B: TransformBackend>(
    backend: &B,
    input: &[u16],
) -> Result<(), NussbaumerError> {
    let d = backend.decomposition()?;
    let engine = NussbaumerEngine::<Zq<Q>>::new(d.n())?;
    check_buffer(input, d.n())?;
    let expected = engine.transform_fast(&from_flat(input))?;

    let mut output = vec![0u16; backend.transformed_len()?];
    backend.forward(input, &mut output)?;

    let rows = 2 * d.m();
    for (i, j) in iproduct!(1..rows, 0..d.r()) {
        let index = i + j * rows;
        let found = output[index] as u64;
        if found >= TRANSFORMED_BOUND {
            warn!("forward transform value {found} at index {index} is too large");
            return Err(NussbaumerError::OutOfRange {
                stage: Stage::Forward,
                index,
                value: found,
                bound: TRANSFORMED_BOUND,
            });
        }
        let want = expected[i][j].to_u64();
        if found % Q as u64 != want {
            warn!("forward transform mismatch at index {index}: {found} != {want}");
            return Err(NussbaumerError::Conformance {
                stage: Stage::Forward,
                index,
                expected: want,
                found,
            });
        }
    }
    Ok(())
}

/// Checks `backend`'s inverse transform of the column-major `input` against the engine
/// over `Z/QZ`. Every output must equal the engine's value reduced into `[0, Q)`.
pub fn verify_inverse<const Q: u32, B: TransformBackend>(
    backend: &B,
    input: &[u16],
) -> Result<(), NussbaumerError> {
    let d = backend.decomposition()?;
    let engine = NussbaumerEngine::<Zq<Q>>::new(d.n())?;
    let expected = engine.inverse_transform(from_column_major(input, d)?)?;

    let mut output = vec![0u16; d.n()];
    backend.inverse(input, &mut output)?;

    for (index, (&found, want)) in output.iter().zip(expected).enumerate() {
        let found = found as u64;
        if found >= Q as u64 {
            warn!("inverse transform value {found} at index {index} is not reduced");
            return Err(NussbaumerError::OutOfRange {
                stage: Stage::Inverse,
                index,
                value: found,
                bound: Q as u64,
            });
        }
        if found != want.to_u64() {
            warn!("inverse transform mismatch at index {index}");
            return Err(NussbaumerError::Conformance {
                stage: Stage::Inverse,
                index,
                expected: want.to_u64(),
                found,
            });
        }
    }
    Ok(())
}

/// Checks `backend`'s componentwise multiplication of the column-major `lhs` and `rhs`
/// against an engine of size `r` over `Z/QZ`.
///
/// Both operands are prepared first, and every prepared value must be below
/// [`PREPARED_BOUND`]. Every row of the product, row `0` included, must be congruent to
/// the negacyclic product of the corresponding rows, with values below
/// [`COMPONENTWISE_BOUND`].
pub fn verify_componentwise<const Q: u32, B: TransformBackend>(
    backend: &B,
    lhs: &[u16],
    rhs: &[u16],
) -> Result<(), NussbaumerError> {
    let d = backend.decomposition()?;
    let row_engine = NussbaumerEngine::<Zq<Q>>::new(d.r())?;
    let expected = multiply_rows(
        &row_engine,
        &from_column_major(lhs, d)?,
        &from_column_major(rhs, d)?,
    )?;

    let mut prepared_lhs = vec![0u16; backend.prepared_len()?];
    let mut prepared_rhs = vec![0u16; backend.prepared_len()?];
    backend.componentwise_prepare(lhs, &mut prepared_lhs)?;
    backend.componentwise_prepare(rhs, &mut prepared_rhs)?;
    for (index, &v) in prepared_lhs.iter().chain(&prepared_rhs).enumerate() {
        let value = v as u64;
        if value >= PREPARED_BOUND {
            warn!("prepared value {value} at index {index} is too large");
            return Err(NussbaumerError::OutOfRange {
                stage: Stage::Prepare,
                index: index % prepared_lhs.len(),
                value,
                bound: PREPARED_BOUND,
            });
        }
    }

    let mut output = vec![0u16; backend.transformed_len()?];
    backend.componentwise(&prepared_lhs, &prepared_rhs, &mut output)?;

    let rows = 2 * d.m();
    for (i, j) in iproduct!(0..rows, 0..d.r()) {
        let index = i + j * rows;
        let found = output[index] as u64;
        if found >= COMPONENTWISE_BOUND {
            warn!("componentwise value {found} at index {index} is too large");
            return Err(NussbaumerError::OutOfRange {
                stage: Stage::Componentwise,
                index,
                value: found,
                bound: COMPONENTWISE_BOUND,
            });
        }
        let want = expected[i][j].to_u64();
        if found % Q as u64 != want {
            warn!("componentwise mismatch at index {index}: {found} != {want}");
            return Err(NussbaumerError::Conformance {
                stage: Stage::Componentwise,
                index,
                expected: want,
                found,
            });
        }
    }
    Ok(())
}
