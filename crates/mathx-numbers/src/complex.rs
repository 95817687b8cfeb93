//! Complex numbers over the real kinds of the tower.

use std::fmt;
use std::sync::Arc;

use crate::coerce::coerce;
use crate::error::{NumberError, Result};
use crate::number::Number;

/// A complex number `real + I*imag`.
///
/// Neither part is itself complex. The constructor guarantees that the
/// imaginary part is never the exact integer zero and that a machine real
/// part is never paired with a non-machine one.
#[derive(Clone, Debug)]
pub struct Complex {
    real: Number,
    imag: Number,
}

impl Complex {
    /// Builds `real + I*imag`.
    ///
    /// Collapses to `real` when `imag` is the exact integer zero. When exactly
    /// one part is a machine real, the other part is coerced to a machine real.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidComponentType`] if either part is complex,
    /// and [`NumberError::Overflow`] if the machine coercion overflows.
    pub fn new(real: Number, imag: Number) -> Result<Number> {
        for part in [&real, &imag] {
            if let Number::Complex(_) = part {
                return Err(NumberError::InvalidComponentType {
                    kind: part.kind().name(),
                });
            }
        }

        if imag.is_exact_zero() {
            return Ok(real);
        }

        let (real, imag) = match (&real, &imag) {
            (Number::MachineReal(_), Number::MachineReal(_)) => (real, imag),
            (Number::MachineReal(_), _) => {
                let imag = coerce(&imag, None)?;
                (real, imag)
            }
            (_, Number::MachineReal(_)) => (coerce(&real, None)?, imag),
            _ => (real, imag),
        };

        Ok(Number::Complex(Arc::new(Complex { real, imag })))
    }

    /// The real part.
    #[must_use]
    pub fn real(&self) -> &Number {
        &self.real
    }

    /// The imaginary part.
    #[must_use]
    pub fn imag(&self) -> &Number {
        &self.imag
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex[{}, {}]", self.real, self.imag)
    }
}
