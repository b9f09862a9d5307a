use std::{
  cmp::Ordering,
  fmt::{Debug, Display},
  marker::PhantomData,
  ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::trace;
use num_traits::{PrimInt, Signed, Zero};

use crate::{
  dimension::{Dimension, DimensionInverse, DimensionProduct, DimensionQuotient, Dimensionless, Inverse, Product, Quotient, Signature},
  error::{UnitError, UnitResult},
  ratio::Ratio,
  rep::{convert_value, rescale, Representation},
  unit::{Unit, UnitDescriptor},
};

/// A raw value of representation `R` measured in some unit of dimension `D`.
///
/// The dimension is part of the type, so only same-dimension quantities can
/// be added, subtracted, compared or converted into one another. The unit's
/// scale is carried alongside the value; every conversion produces a new
/// quantity and never changes the unit of an existing one.
pub struct Quantity<D: ?Sized + Dimension, R = f64> {
  value: R,
  ratio: Ratio,
  dimension: PhantomData<D>,
}

impl<D: ?Sized + Dimension, R: Clone> Clone for Quantity<D, R> {
  fn clone(&self) -> Self {
    Self { value: self.value.clone(), ratio: self.ratio, dimension: PhantomData }
  }
}

impl<D: ?Sized + Dimension, R: Copy> Copy for Quantity<D, R> { }

impl<D: ?Sized + Dimension, R: Representation> Quantity<D, R> {
  pub const fn new(value: R, unit: Unit<D>) -> Self {
    Self { value, ratio: unit.ratio(), dimension: PhantomData }
  }

  /// Construct from any representation. A float is never narrowed into an
  /// integral `R`, even when it holds a whole number.
  pub fn try_new<S: Representation>(value: S, unit: Unit<D>) -> UnitResult<Self> {
    Ok(Self::new(convert_value(value)?, unit))
  }

  pub fn value(&self) -> R {
    self.value
  }

  pub fn unit(&self) -> Unit<D> {
    Unit::from_ratio(self.ratio)
  }

  pub fn descriptor(&self) -> UnitDescriptor {
    self.unit().descriptor()
  }

  pub fn zero(unit: Unit<D>) -> Self {
    Self::new(R::zero(), unit)
  }

  pub fn min(unit: Unit<D>) -> Self {
    Self::new(R::min_value(), unit)
  }

  pub fn max(unit: Unit<D>) -> Self {
    Self::new(R::max_value(), unit)
  }

  /// Explicit conversion; truncates when `R` is integral and the target
  /// unit does not divide this one.
  ///
  /// # Panics
  /// If the converted value overflows `R`.
  pub fn cast(self, target: Unit<D>) -> Self {
    self.cast_rep(target)
  }

  /// [`Quantity::cast`] into another representation.
  pub fn cast_rep<R2: Representation>(self, target: Unit<D>) -> Quantity<D, R2> {
    Quantity::new(self.value_in(target.ratio()), target)
  }

  pub fn checked_cast(self, target: Unit<D>) -> UnitResult<Self> {
    self.checked_cast_rep(target)
  }

  pub fn checked_cast_rep<R2: Representation>(self, target: Unit<D>) -> UnitResult<Quantity<D, R2>> {
    let factor = self.ratio.divide(target.ratio());
    rescale(self.value, factor)
      .map(|value| Quantity::new(value, target))
      .ok_or(UnitError::Overflow)
  }

  /// Lossless conversion. Into a floating representation this always
  /// succeeds; into an integral one only when the target unit divides this
  /// one exactly and the source is integral too.
  pub fn convert(self, target: Unit<D>) -> UnitResult<Self> {
    self.convert_rep(target)
  }

  pub fn convert_rep<R2: Representation>(self, target: Unit<D>) -> UnitResult<Quantity<D, R2>> {
    let factor = self.ratio.divide(target.ratio());
    if R2::INTEGRAL && (!R::INTEGRAL || !factor.is_integer()) {
      trace!("Rejected lossy conversion by {} into {}", factor, std::any::type_name::<R2>());
      return Err(UnitError::LossyConversion { from: self.descriptor(), to: target.descriptor() });
    }
    self.checked_cast_rep(target)
  }

  /// The raw value this quantity would have in `target`.
  pub fn to(self, target: Unit<D>) -> R {
    self.value_in(target.ratio())
  }

  pub fn to_base(self) -> R {
    self.value_in(Ratio::ONE)
  }

  fn value_in<R2: Representation>(self, ratio: Ratio) -> R2 {
    let factor = self.ratio.divide(ratio);
    match rescale(self.value, factor) {
      Some(value) => value,
      None => panic!("quantity overflowed {} when rescaling by {}", std::any::type_name::<R2>(), factor),
    }
  }

  /// Raw value after bringing `rhs` into this quantity's unit without loss.
  ///
  /// # Panics
  /// If that would truncate.
  fn aligned(&self, rhs: Self) -> R {
    if rhs.ratio == self.ratio {
      return rhs.value;
    }
    match rhs.convert(self.unit()) {
      Ok(rhs) => rhs.value,
      Err(err) => panic!("{}", err),
    }
  }
}

impl<D: ?Sized + Dimension, R: Representation + Signed> Quantity<D, R> {
  pub fn abs(self) -> Self {
    if self.value >= R::zero() { self } else { -self }
  }
}

impl<R: Representation> Quantity<Dimensionless, R> {
  /// The plain number, in the dimensionless unit of ratio 1.
  pub fn into_number(self) -> R {
    self.to_base()
  }
}

impl<D: ?Sized + Dimension, R: Representation> Debug for Quantity<D, R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Quantity")
      .field("value", &self.value)
      .field("unit", &self.descriptor())
      .finish()
  }
}

impl<D: ?Sized + Dimension, R: Representation> Display for Quantity<D, R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.value, f)?;
    let unit = self.descriptor().to_string();
    if !unit.is_empty() {
      write!(f, " {}", unit)?;
    }
    Ok(())
  }
}

impl<D: ?Sized + Dimension, R: Representation + Neg<Output = R>> Neg for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn neg(self) -> Self::Output {
    Quantity { value: -self.value, ..self }
  }
}

impl<D: ?Sized + Dimension, R: Representation> Add<Quantity<D, R>> for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn add(self, rhs: Quantity<D, R>) -> Self::Output {
    let common = self.unit().sum(rhs.unit());
    Quantity::new(self.to(common) + rhs.to(common), common)
  }
}

impl<D: ?Sized + Dimension, R: Representation> Sub<Quantity<D, R>> for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn sub(self, rhs: Quantity<D, R>) -> Self::Output {
    let common = self.unit().sum(rhs.unit());
    Quantity::new(self.to(common) - rhs.to(common), common)
  }
}

impl<D: ?Sized + Dimension, R: Representation> Rem<Quantity<D, R>> for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn rem(self, rhs: Quantity<D, R>) -> Self::Output {
    let common = self.unit().sum(rhs.unit());
    Quantity::new(self.to(common) % rhs.to(common), common)
  }
}

/// # Panics
/// If `rhs` cannot be expressed exactly in the unit of `self`.
impl<D: ?Sized + Dimension, R: Representation> AddAssign<Quantity<D, R>> for Quantity<D, R> {
  fn add_assign(&mut self, rhs: Quantity<D, R>) {
    self.value = self.value + self.aligned(rhs);
  }
}

/// # Panics
/// If `rhs` cannot be expressed exactly in the unit of `self`.
impl<D: ?Sized + Dimension, R: Representation> SubAssign<Quantity<D, R>> for Quantity<D, R> {
  fn sub_assign(&mut self, rhs: Quantity<D, R>) {
    self.value = self.value - self.aligned(rhs);
  }
}

/// Raw modulo of the stored values. The units are not aligned first, so
/// `1 min %= 17 s` leaves `1 min`. Use `%` for the common-unit remainder.
impl<D: ?Sized + Dimension, R: Representation + PrimInt> RemAssign<Quantity<D, R>> for Quantity<D, R> {
  fn rem_assign(&mut self, rhs: Quantity<D, R>) {
    self.value = self.value % rhs.value;
  }
}

impl<D: ?Sized + Dimension, R: Representation> MulAssign<R> for Quantity<D, R> {
  fn mul_assign(&mut self, rhs: R) {
    self.value = self.value * rhs;
  }
}

impl<D: ?Sized + Dimension, R: Representation> DivAssign<R> for Quantity<D, R> {
  fn div_assign(&mut self, rhs: R) {
    self.value = self.value / rhs;
  }
}

impl<D: ?Sized + Dimension, R: Representation> Mul<R> for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn mul(self, rhs: R) -> Self::Output {
    Quantity { value: self.value * rhs, ..self }
  }
}

impl<D: ?Sized + Dimension, R: Representation> Div<R> for Quantity<D, R> {
  type Output = Quantity<D, R>;

  fn div(self, rhs: R) -> Self::Output {
    Quantity { value: self.value / rhs, ..self }
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized, R: Representation> Mul<Quantity<Dr, R>> for Quantity<Dl, R>
where
  Dl: DimensionProduct<Dr>
{
  type Output = Quantity<Product<Dl, Dr>, R>;

  // Multiplication combines scales, it never needs a shared one. Panics if
  // the combined ratio leaves i64.
  fn mul(self, rhs: Quantity<Dr, R>) -> Self::Output {
    Quantity {
      value: self.value * rhs.value,
      ratio: self.ratio.multiply(rhs.ratio),
      dimension: PhantomData,
    }
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized, R: Representation> Div<Quantity<Dr, R>> for Quantity<Dl, R>
where
  Dl: DimensionQuotient<Dr>
{
  type Output = Quantity<Quotient<Dl, Dr>, R>;

  /// Across dimensions the raw values divide directly. Within one dimension
  /// both sides are first brought into their common unit, so the result is
  /// a plain number (ratio 1).
  fn div(self, rhs: Quantity<Dr, R>) -> Self::Output {
    if <Dl as Signature>::SIGNATURE.equals(<Dr as Signature>::SIGNATURE) {
      let common = self.ratio.gcrd(rhs.ratio);
      Quantity {
        value: self.value_in::<R>(common) / rhs.value_in::<R>(common),
        ratio: Ratio::ONE,
        dimension: PhantomData,
      }
    } else {
      Quantity {
        value: self.value / rhs.value,
        ratio: self.ratio.divide(rhs.ratio),
        dimension: PhantomData,
      }
    }
  }
}

impl<D: ?Sized + Dimension, R: Representation> PartialEq<Quantity<D, R>> for Quantity<D, R> {
  fn eq(&self, other: &Quantity<D, R>) -> bool {
    let common = self.ratio.gcrd(other.ratio);
    self.value_in::<R>(common) == other.value_in::<R>(common)
  }
}

impl<D: ?Sized + Dimension, R: Representation + Eq> Eq for Quantity<D, R> {}

impl<D: ?Sized + Dimension, R: Representation> PartialOrd<Quantity<D, R>> for Quantity<D, R> {
  fn partial_cmp(&self, other: &Quantity<D, R>) -> Option<Ordering> {
    let common = self.ratio.gcrd(other.ratio);
    self.value_in::<R>(common).partial_cmp(&other.value_in::<R>(common))
  }
}

impl<D: ?Sized + Dimension, R: Representation> Zero for Quantity<D, R> {
  fn zero() -> Self {
    Quantity::new(R::zero(), Unit::base())
  }

  fn is_zero(&self) -> bool {
    self.value.is_zero()
  }
}

impl<D: ?Sized + Dimension, R: Representation + AbsDiffEq<Epsilon = R>> AbsDiffEq<Quantity<D, R>> for Quantity<D, R> {
  type Epsilon = Quantity<D, R>;

  fn default_epsilon() -> Self::Epsilon {
    Quantity::new(R::default_epsilon(), Unit::base())
  }

  fn abs_diff_eq(&self, other: &Quantity<D, R>, epsilon: Self::Epsilon) -> bool {
    let common = self.ratio.gcrd(other.ratio).gcrd(epsilon.ratio);
    self.value_in::<R>(common).abs_diff_eq(&other.value_in::<R>(common), epsilon.value_in::<R>(common))
  }
}

impl<D: ?Sized + Dimension, R: Representation + RelativeEq<Epsilon = R>> RelativeEq<Quantity<D, R>> for Quantity<D, R> {
  fn default_max_relative() -> Self::Epsilon {
    Quantity::new(R::default_max_relative(), Unit::base())
  }

  // `max_relative` is a plain fraction; only its raw value is used.
  fn relative_eq(&self, other: &Quantity<D, R>, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
    let common = self.ratio.gcrd(other.ratio).gcrd(epsilon.ratio);
    self.value_in::<R>(common).relative_eq(&other.value_in::<R>(common), epsilon.value_in::<R>(common), max_relative.value)
  }
}

impl<D: ?Sized + Dimension, R: Representation + UlpsEq<Epsilon = R>> UlpsEq<Quantity<D, R>> for Quantity<D, R> {
  fn default_max_ulps() -> u32 {
    R::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Quantity<D, R>, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
    let common = self.ratio.gcrd(other.ratio).gcrd(epsilon.ratio);
    self.value_in::<R>(common).ulps_eq(&other.value_in::<R>(common), epsilon.value_in::<R>(common), max_ulps)
  }
}

macro_rules! scalar_ops {
  ($($t:ty),*) => {
    $(
      impl<D: ?Sized + Dimension> Mul<Unit<D>> for $t {
        type Output = Quantity<D, $t>;

        fn mul(self, rhs: Unit<D>) -> Self::Output {
          Quantity::new(self, rhs)
        }
      }

      impl<D: ?Sized + Dimension> Mul<Quantity<D, $t>> for $t {
        type Output = Quantity<D, $t>;

        fn mul(self, rhs: Quantity<D, $t>) -> Self::Output {
          Quantity { value: self * rhs.value, ..rhs }
        }
      }

      impl<D: ?Sized + DimensionInverse> Div<Quantity<D, $t>> for $t {
        type Output = Quantity<Inverse<D>, $t>;

        fn div(self, rhs: Quantity<D, $t>) -> Self::Output {
          Quantity { value: self / rhs.value, ratio: rhs.ratio.recip(), dimension: PhantomData }
        }
      }

      impl From<$t> for Quantity<Dimensionless, $t> {
        fn from(value: $t) -> Self {
          Quantity::new(value, Unit::base())
        }
      }

      impl From<Quantity<Dimensionless, $t>> for $t {
        fn from(value: Quantity<Dimensionless, $t>) -> Self {
          value.into_number()
        }
      }

      impl PartialEq<$t> for Quantity<Dimensionless, $t> {
        fn eq(&self, other: &$t) -> bool {
          self.into_number() == *other
        }
      }
    )*
  }
}

scalar_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use num_traits::Zero;
  use typenum::{N1, P1, Z0};

  use super::*;
  use crate::dimension::ISQ;

  type TimeDim = ISQ<P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
  type LengthDim = ISQ<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
  type SpeedDim = ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
  type FrequencyDim = ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

  const H: Unit<TimeDim> = Unit::new(Ratio::integer(3600));
  const MIN: Unit<TimeDim> = Unit::new(Ratio::integer(60));
  const S: Unit<TimeDim> = Unit::new(Ratio::ONE);
  const MS: Unit<TimeDim> = Unit::new(Ratio::MILLI);
  const US: Unit<TimeDim> = Unit::new(Ratio::MICRO);
  const NS: Unit<TimeDim> = Unit::new(Ratio::NANO);
  const M: Unit<LengthDim> = Unit::new(Ratio::ONE);
  const KM: Unit<LengthDim> = Unit::new(Ratio::KILO);
  const MM: Unit<LengthDim> = Unit::new(Ratio::MILLI);
  const KPH: Unit<SpeedDim> = Unit::new(Ratio::new(5, 18));
  const MPS: Unit<SpeedDim> = Unit::new(Ratio::ONE);

  #[test]
  fn test_cast() {
    let h = Quantity::new(1i64, H);
    assert_eq!(h.cast(MIN).value(), 60);
    assert_eq!(h.cast(S).value(), 3600);
    assert_eq!(h.cast(MS).value(), 3_600_000);
    assert_eq!(h.cast(NS).value(), 3_600_000_000_000);
    assert_eq!(h.cast(S).cast(MS).value(), 3_600_000);

    assert_eq!(Quantity::new(90i64, S).cast(MIN).value(), 1);
    assert_eq!(Quantity::new(72i64, KPH).cast(MPS).value(), 20);
    assert_relative_eq!(Quantity::new(3.218688, KM).cast(M).value(), 3218.688);
    assert_eq!(Quantity::new(7, S).cast(S).value(), 7);
  }

  #[test]
  fn test_cast_rep() {
    let km: Quantity<LengthDim, f64> = Quantity::new(2.5, KM);
    let m: Quantity<LengthDim, i64> = km.cast_rep(M);
    assert_eq!(m.value(), 2500);

    let whole: Quantity<LengthDim, i32> = Quantity::new(1.9, M).cast_rep(M);
    assert_eq!(whole.value(), 1);
  }

  #[test]
  fn test_checked_cast() {
    assert_eq!(Quantity::new(i64::MAX, H).checked_cast(S), Err(UnitError::Overflow));
    assert_eq!(Quantity::new(100u8, S).checked_cast_rep::<u8>(MS), Err(UnitError::Overflow));
    assert_eq!(Quantity::new(2i64, S).checked_cast(MS).map(|q| q.value()), Ok(2000));
  }

  #[test]
  #[should_panic]
  fn test_cast_overflow_panics() {
    Quantity::new(i64::MAX, H).cast(S);
  }

  #[test]
  fn test_convert() {
    assert_eq!(Quantity::new(2i64, MIN).convert(S).map(|q| q.value()), Ok(120));
    assert_eq!(
      Quantity::new(90i64, S).convert(MIN),
      Err(UnitError::LossyConversion { from: S.descriptor(), to: MIN.descriptor() })
    );
    assert_eq!(Quantity::new(90.0, S).convert(MIN).map(|q| q.value()), Ok(1.5));
    assert!(Quantity::new(90.0, S).convert_rep::<i64>(S).is_err());
    assert_eq!(Quantity::new(90i32, S).convert_rep::<i64>(MS).map(|q| q.value()), Ok(90_000));
    assert_eq!(Quantity::new(90i32, S).convert_rep::<f32>(MIN).map(|q| q.value()), Ok(1.5));
  }

  #[test]
  fn test_construction() {
    assert_eq!(Quantity::<TimeDim, i64>::try_new(4.0f64, S), Err(UnitError::NarrowingConstruction));
    assert_eq!(Quantity::<TimeDim, u8>::try_new(0.0f32, S), Err(UnitError::NarrowingConstruction));
    assert_eq!(Quantity::<TimeDim, i64>::try_new(4.5f64, S), Err(UnitError::NarrowingConstruction));
    assert_eq!(Quantity::<TimeDim, f64>::try_new(4i32, S).map(|q| q.value()), Ok(4.0));
    assert_eq!(Quantity::<TimeDim, u8>::try_new(-1i32, S), Err(UnitError::Overflow));
  }

  #[test]
  fn test_add_sub() {
    let d = Quantity::new(4i64, MIN) + Quantity::new(12i64, S);
    assert_eq!(d.unit(), S);
    assert_eq!(d.value(), 252);
    assert_eq!(d.cast(MS).value(), 252_000);

    let sum = Quantity::new(1200i64, US) + Quantity::new(1200i64, NS);
    let diff = Quantity::new(1200i64, US) - Quantity::new(1200i64, NS);
    assert_eq!(sum, Quantity::new(1_201_200i64, NS));
    assert_eq!(diff, Quantity::new(1_198_800i64, NS));
    assert_eq!(sum.unit(), NS);

    let t = Unit::<TimeDim>::new(Ratio::new(5, 2));
    let u = Unit::<TimeDim>::new(Ratio::new(2, 5));
    let mixed = Quantity::new(1i64, t) + Quantity::new(1i64, u);
    assert_eq!(mixed.unit().ratio(), Ratio::new(1, 10));
    assert_eq!(mixed.value(), 29);
  }

  #[test]
  fn test_compound_assign() {
    let mut t = Quantity::new(10i64, S);
    t += Quantity::new(2i64, MIN);
    assert_eq!(t.value(), 130);
    t -= Quantity::new(30i64, S);
    assert_eq!(t.value(), 100);
    t %= Quantity::new(17i64, S);
    assert_eq!(t.value(), 15);
    t *= 4;
    assert_eq!(t.value(), 60);
    t /= 7;
    assert_eq!(t.value(), 8);
    assert_eq!(t.unit(), S);
  }

  #[test]
  fn test_rem_assign_is_raw() {
    let mut t = Quantity::new(1i64, MIN);
    t %= Quantity::new(17i64, S);
    assert_eq!(t, Quantity::new(1i64, MIN));

    let mut t = Quantity::new(100i64, S);
    t %= Quantity::new(7i64, MIN);
    assert_eq!(t.value(), 2);
    assert_eq!(t.unit(), S);
    assert_eq!(Quantity::new(100i64, S) % Quantity::new(1i64, MIN), Quantity::new(40i64, S));
  }

  #[test]
  #[should_panic]
  fn test_lossy_compound_assign_panics() {
    let mut t = Quantity::new(1i64, MIN);
    t += Quantity::new(1i64, S);
  }

  #[test]
  fn test_scalar() {
    assert_eq!((Quantity::new(12.0, MM) * 1000.0), (Quantity::new(120.0, M) / 10.0));
    assert_eq!(3i64 * Quantity::new(2i64, S), Quantity::new(2i64, S) * 3);
    assert_eq!((3i64 * Quantity::new(2i64, S)).unit(), S);

    let f: Quantity<FrequencyDim, f64> = 25.0 / Quantity::new(100.0, S);
    assert_eq!(f, 2.5 / Quantity::new(10.0, S));
    assert_eq!(f.unit().ratio(), Ratio::ONE);
    assert_eq!((1.0f64 / Quantity::new(1.0f64, MS)).unit().ratio(), Ratio::KILO);
  }

  #[test]
  fn test_product_and_quotient() {
    let v: Quantity<SpeedDim, i64> = Quantity::new(20i64, M) / Quantity::new(1000i64, MS);
    assert_eq!(v.value(), 0);
    assert_eq!(v.unit().ratio(), Ratio::KILO);
    let v: Quantity<SpeedDim, f64> = Quantity::new(20.0, M) / Quantity::new(1000.0, MS);
    assert_relative_eq!(v, Quantity::new(72.0, KPH));
    assert_relative_eq!(v.to(MPS), 20.0);

    let back: Quantity<LengthDim, f64> = v * Quantity::new(2.0, S);
    assert_eq!(back.value(), 0.04);
    assert_eq!(back.unit(), KM);
    assert_relative_eq!(back.to(M), 40.0);
  }

  #[test]
  fn test_same_dimension_quotient() {
    assert_eq!(Quantity::new(2i64, MIN) / Quantity::new(17i64, S), 7i64);
    assert_eq!(Quantity::new(119.0, S) / Quantity::new(17.0, S), 7.0);
    let r = Quantity::new(1.0, H) / Quantity::new(30.0, MIN);
    assert_eq!(r.into_number(), 2.0);
    assert_eq!(f64::from(r), 2.0);
  }

  #[test]
  fn test_rem() {
    assert_eq!(Quantity::new(100i64, S) % Quantity::new(17i64, S), Quantity::new(15i64, S));
    assert_eq!(Quantity::new(2i64, MIN) % Quantity::new(17i64, S), Quantity::new(1i64, S));
  }

  #[test]
  fn test_comparison() {
    assert_eq!(Quantity::new(72i64, KPH), Quantity::new(20i64, MPS));
    assert!(Quantity::new(1i64, MIN) > Quantity::new(59i64, S));
    assert!(Quantity::new(1i64, MIN) >= Quantity::new(60i64, S));
    assert!(Quantity::new(1i64, MIN) <= Quantity::new(60i64, S));
    assert!(Quantity::new(999i64, MS) < Quantity::new(1i64, S));
    assert_ne!(Quantity::new(1i64, MIN), Quantity::new(1i64, S));
  }

  #[test]
  fn test_abs_neg_bounds() {
    assert_eq!(Quantity::new(-3i64, S).abs(), Quantity::new(3i64, S));
    assert_eq!(Quantity::new(3.5, S).abs(), Quantity::new(3.5, S));
    assert_eq!(-Quantity::new(3i64, MIN), Quantity::new(-180i64, S));
    assert_eq!(Quantity::<TimeDim, i32>::zero(MS).value(), 0);
    assert_eq!(Quantity::<TimeDim, i32>::min(MS).value(), i32::MIN);
    assert_eq!(Quantity::<TimeDim, u16>::max(MS).value(), u16::MAX);
    assert_eq!(Quantity::<TimeDim, f64>::min(S).value(), f64::MIN);
    assert!(<Quantity<TimeDim, f64> as Zero>::zero().is_zero());
  }

  #[test]
  fn test_approx() {
    assert_relative_eq!(Quantity::new(1.0, KM), Quantity::new(1000.0, M));
    assert_relative_eq!(Quantity::new(1.0, S), Quantity::new(1000.0001, MS), epsilon = Quantity::new(0.001, MS));
  }

  #[test]
  fn test_round_trip() {
    let q = Quantity::new(12_345i64, S);
    assert_eq!(q.cast(MS).cast(S), q);
    let q = Quantity::new(1.2345, S);
    assert_relative_eq!(q.cast(MIN).cast(S), q);
  }

  #[test]
  fn test_display() {
    assert_eq!(Quantity::new(3i64, Unit::<TimeDim>::new(Ratio::integer(7))).to_string(), "3 [7] s");
    assert_eq!(Quantity::new(2, Unit::<FrequencyDim>::new(Ratio::integer(7))).to_string(), "2 [7] s^{-1}");
    assert_eq!(Quantity::new(1.5, Unit::<Dimensionless>::base()).to_string(), "1.5");
  }
}
