use std::{fmt::Display, ops::{Div, Mul}};

use crate::error::{UnitError, UnitResult};

/// Greatest common divisor, always non-negative. `gcd(0, k) == |k|`.
///
/// # Panics
/// If the result is 2^63, i.e. both inputs are `i64::MIN` or zero.
pub const fn gcd(a: i64, b: i64) -> i64 {
  match checked_gcd(a, b) {
    Some(g) => g,
    None => panic!("gcd overflowed i64"),
  }
}

pub const fn checked_gcd(a: i64, b: i64) -> Option<i64> {
  let mut a = a.unsigned_abs();
  let mut b = b.unsigned_abs();
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  if a > i64::MAX as u64 {
    return None;
  }
  Some(a as i64)
}

/// Least common multiple, always non-negative. `lcm(0, k) == 0`.
///
/// # Panics
/// If the result does not fit in an `i64`.
pub const fn lcm(a: i64, b: i64) -> i64 {
  match checked_lcm(a, b) {
    Some(l) => l,
    None => panic!("lcm overflowed i64"),
  }
}

pub const fn checked_lcm(a: i64, b: i64) -> Option<i64> {
  if a == 0 || b == 0 {
    return Some(0);
  }
  let g = match checked_gcd(a, b) {
    Some(g) => g,
    None => return None,
  };
  match (a / g).checked_mul(b) {
    Some(l) => l.checked_abs(),
    None => None,
  }
}

/// An exact fraction, stored in lowest terms with a positive denominator.
///
/// The `const` combinators panic when a numerator or denominator leaves the
/// `i64` range, the way integer arithmetic does in debug builds. The
/// `checked_*` variants report [`UnitError::Overflow`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
  num: i64,
  den: i64,
}

impl Ratio {
  pub const ONE: Ratio = Ratio { num: 1, den: 1 };

  pub const PICO: Ratio = Ratio { num: 1, den: 1_000_000_000_000 };
  pub const NANO: Ratio = Ratio { num: 1, den: 1_000_000_000 };
  pub const MICRO: Ratio = Ratio { num: 1, den: 1_000_000 };
  pub const MILLI: Ratio = Ratio { num: 1, den: 1_000 };
  pub const CENTI: Ratio = Ratio { num: 1, den: 100 };
  pub const DECI: Ratio = Ratio { num: 1, den: 10 };
  pub const KILO: Ratio = Ratio { num: 1_000, den: 1 };
  pub const MEGA: Ratio = Ratio { num: 1_000_000, den: 1 };
  pub const GIGA: Ratio = Ratio { num: 1_000_000_000, den: 1 };
  pub const TERA: Ratio = Ratio { num: 1_000_000_000_000, den: 1 };

  /// # Panics
  /// If `den` is zero. Use [`Ratio::try_new`] for untrusted input.
  pub const fn new(num: i64, den: i64) -> Self {
    if den == 0 {
      panic!("ratio denominator must not be zero");
    }
    Self::reduce(num, den)
  }

  pub const fn integer(num: i64) -> Self {
    Self { num, den: 1 }
  }

  pub fn try_new(num: i64, den: i64) -> UnitResult<Self> {
    if den == 0 {
      return Err(UnitError::ZeroDenominator);
    }
    Self::reduce_inner(num, den).ok_or(UnitError::Overflow)
  }

  const fn reduce(num: i64, den: i64) -> Self {
    match Self::reduce_inner(num, den) {
      Some(r) => r,
      None => panic!("ratio overflowed i64"),
    }
  }

  // `den` is non-zero. Fails only when flipping the sign of `i64::MIN`.
  const fn reduce_inner(num: i64, den: i64) -> Option<Self> {
    let g = match checked_gcd(num, den) {
      Some(g) => g,
      None => return None,
    };
    let (num, den) = (num / g, den / g);
    if den > 0 {
      return Some(Self { num, den });
    }
    match (num.checked_neg(), den.checked_neg()) {
      (Some(num), Some(den)) => Some(Self { num, den }),
      _ => None,
    }
  }

  pub const fn numer(self) -> i64 {
    self.num
  }

  pub const fn denom(self) -> i64 {
    self.den
  }

  pub const fn is_one(self) -> bool {
    self.num == 1 && self.den == 1
  }

  pub const fn is_integer(self) -> bool {
    self.den == 1
  }

  pub const fn is_positive(self) -> bool {
    self.num > 0
  }

  /// `const` counterpart of `==`.
  pub const fn equals(self, other: Ratio) -> bool {
    self.num == other.num && self.den == other.den
  }

  /// # Panics
  /// If the product does not fit in `i64` terms.
  pub const fn multiply(self, other: Ratio) -> Ratio {
    match self.multiply_inner(other) {
      Some(r) => r,
      None => panic!("ratio overflowed i64"),
    }
  }

  pub fn checked_multiply(self, other: Ratio) -> UnitResult<Ratio> {
    self.multiply_inner(other).ok_or(UnitError::Overflow)
  }

  const fn multiply_inner(self, other: Ratio) -> Option<Ratio> {
    // Cross-cancel first so the intermediate products stay small.
    let g1 = gcd(self.num, other.den);
    let g2 = gcd(other.num, self.den);
    match ((self.num / g1).checked_mul(other.num / g2), (self.den / g2).checked_mul(other.den / g1)) {
      (Some(num), Some(den)) => Self::reduce_inner(num, den),
      _ => None,
    }
  }

  /// # Panics
  /// If `other` is zero or the quotient overflows.
  pub const fn divide(self, other: Ratio) -> Ratio {
    self.multiply(other.recip())
  }

  pub fn checked_divide(self, other: Ratio) -> UnitResult<Ratio> {
    self.checked_multiply(other.try_recip()?)
  }

  /// # Panics
  /// If the ratio is zero.
  pub const fn recip(self) -> Ratio {
    Self::new(self.den, self.num)
  }

  pub fn try_recip(self) -> UnitResult<Ratio> {
    Self::try_new(self.den, self.num)
  }

  /// Integer power by repeated squaring. Negative exponents take the reciprocal.
  ///
  /// # Panics
  /// If the power overflows, or `k` is negative and the ratio is zero.
  pub const fn pow(self, k: i32) -> Ratio {
    let r = match self.pow_inner(k.unsigned_abs()) {
      Some(r) => r,
      None => panic!("ratio overflowed i64"),
    };
    if k < 0 {
      return r.recip();
    }
    r
  }

  pub fn checked_pow(self, k: i32) -> UnitResult<Ratio> {
    let r = self.pow_inner(k.unsigned_abs()).ok_or(UnitError::Overflow)?;
    if k < 0 {
      return r.try_recip();
    }
    Ok(r)
  }

  const fn pow_inner(self, mut k: u32) -> Option<Ratio> {
    let mut base = self;
    let mut acc = Self::ONE;
    while k > 0 {
      if k & 1 == 1 {
        acc = match acc.multiply_inner(base) {
          Some(r) => r,
          None => return None,
        };
      }
      k >>= 1;
      if k > 0 {
        base = match base.multiply_inner(base) {
          Some(r) => r,
          None => return None,
        };
      }
    }
    Some(acc)
  }

  /// Greatest common rational divisor: the largest ratio dividing both inputs
  /// into whole numbers. `gcrd(a/b, c/d) = gcd(a, c) / lcm(b, d)`.
  ///
  /// # Panics
  /// If `lcm(b, d)` overflows.
  pub const fn gcrd(self, other: Ratio) -> Ratio {
    Self::new(gcd(self.num, other.num), lcm(self.den, other.den))
  }

  pub fn checked_gcrd(self, other: Ratio) -> UnitResult<Ratio> {
    let num = checked_gcd(self.num, other.num).ok_or(UnitError::Overflow)?;
    let den = checked_lcm(self.den, other.den).ok_or(UnitError::Overflow)?;
    Self::try_new(num, den)
  }

  /// Least common rational multiple. `lcrm(a/b, c/d) = lcm(a, c) / gcd(b, d)`.
  pub const fn lcrm(self, other: Ratio) -> Ratio {
    Self::new(lcm(self.num, other.num), gcd(self.den, other.den))
  }

  pub fn to_f64(self) -> f64 {
    self.num as f64 / self.den as f64
  }
}

impl Default for Ratio {
  fn default() -> Self {
    Self::ONE
  }
}

impl Mul for Ratio {
  type Output = Ratio;

  fn mul(self, rhs: Ratio) -> Self::Output {
    self.multiply(rhs)
  }
}

impl Div for Ratio {
  type Output = Ratio;

  fn div(self, rhs: Ratio) -> Self::Output {
    self.divide(rhs)
  }
}

impl Display for Ratio {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.den == 1 {
      write!(f, "{}", self.num)
    } else {
      write!(f, "{}/{}", self.num, self.den)
    }
  }
}
