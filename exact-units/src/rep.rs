use std::fmt::{Debug, Display};

use num_traits::{Bounded, Num, NumCast};

use crate::{error::{UnitError, UnitResult}, ratio::Ratio};

/// A value widened for rescaling: `i128` holds the product of any 64-bit
/// integer and an `i64` ratio component, `f64` holds every float we support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wide {
  Integral(i128),
  Floating(f64),
}

impl Wide {
  pub fn to_floating(self) -> Wide {
    match self {
      Wide::Integral(value) => Wide::Floating(value as f64),
      floating => floating,
    }
  }

  /// Multiply by `factor`, touching the value as little as the factor allows.
  /// `None` if an integral product overflows.
  pub fn rescale(self, factor: Ratio) -> Option<Wide> {
    if factor.is_one() {
      return Some(self);
    }
    match self {
      Wide::Integral(value) => {
        let (num, den) = (factor.numer() as i128, factor.denom() as i128);
        let scaled = if den == 1 {
          value.checked_mul(num)?
        } else if num == 1 {
          value / den
        } else {
          value.checked_mul(num)? / den
        };
        Some(Wide::Integral(scaled))
      },
      Wide::Floating(value) => {
        let (num, den) = (factor.numer() as f64, factor.denom() as f64);
        let scaled = if factor.is_integer() {
          value * num
        } else if factor.numer() == 1 {
          value / den
        } else {
          value * num / den
        };
        Some(Wide::Floating(scaled))
      }
    }
  }
}

/// Numeric types a [`crate::Quantity`] may carry. Only primitives implement
/// it, so quantities never nest.
pub trait Representation : Num + NumCast + Bounded + Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
  const INTEGRAL: bool;

  fn widen(self) -> Wide;
  fn narrow(wide: Wide) -> Option<Self>;
}

macro_rules! integral_representation {
  ($($t:ty),*) => {
    $(
      impl Representation for $t {
        const INTEGRAL: bool = true;

        fn widen(self) -> Wide {
          Wide::Integral(self as i128)
        }

        fn narrow(wide: Wide) -> Option<Self> {
          match wide {
            Wide::Integral(value) => <$t>::try_from(value).ok(),
            Wide::Floating(value) => <$t as NumCast>::from(value),
          }
        }
      }
    )*
  }
}

macro_rules! floating_representation {
  ($($t:ty),*) => {
    $(
      impl Representation for $t {
        const INTEGRAL: bool = false;

        fn widen(self) -> Wide {
          Wide::Floating(self as f64)
        }

        fn narrow(wide: Wide) -> Option<Self> {
          match wide {
            Wide::Integral(value) => Some(value as $t),
            Wide::Floating(value) => Some(value as $t),
          }
        }
      }
    )*
  }
}

integral_representation!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
floating_representation!(f32, f64);

/// Rescale `value` by `factor`, computing in `i128` when both sides are
/// integral and in `f64` otherwise. `None` on overflow or an unrepresentable
/// result.
pub fn rescale<S: Representation, T: Representation>(value: S, factor: Ratio) -> Option<T> {
  let wide = if S::INTEGRAL && T::INTEGRAL { value.widen() } else { value.widen().to_floating() };
  T::narrow(wide.rescale(factor)?)
}

/// Explicit construction of `T` from another representation. A float never
/// narrows into an integral type, whole-valued or not. Go through a unit
/// conversion (`convert_rep`/`cast_rep`) when that is what you mean.
pub fn convert_value<S: Representation, T: Representation>(value: S) -> UnitResult<T> {
  if T::INTEGRAL && !S::INTEGRAL {
    return Err(UnitError::NarrowingConstruction);
  }
  rescale(value, Ratio::ONE).ok_or(UnitError::Overflow)
}
