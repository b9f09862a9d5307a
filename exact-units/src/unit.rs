use std::{borrow::Cow, fmt::{Debug, Display}, marker::PhantomData, ops::{Div, Mul}};

use crate::{
  dimension::{Dimension, DimensionInverse, DimensionProduct, DimensionQuotient, DimensionSignature, Inverse, Product, Quotient, Signature},
  error::{UnitError, UnitResult},
  ratio::Ratio,
  registry::{self, NamedUnit},
};

/// A dimension paired with its scale relative to the dimension's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitDescriptor {
  dimension: DimensionSignature,
  ratio: Ratio,
}

impl UnitDescriptor {
  /// # Panics
  /// If `ratio` is not strictly positive.
  pub const fn new(dimension: DimensionSignature, ratio: Ratio) -> Self {
    assert!(ratio.is_positive(), "unit ratio must be positive");
    Self { dimension, ratio }
  }

  pub fn make(dimension: DimensionSignature, ratio: Ratio) -> UnitResult<Self> {
    if !ratio.is_positive() {
      return Err(UnitError::NonPositiveRatio(ratio));
    }
    Ok(Self { dimension, ratio })
  }

  pub const fn dimension(self) -> DimensionSignature {
    self.dimension
  }

  pub const fn ratio(self) -> Ratio {
    self.ratio
  }

  /// `const` counterpart of `==`.
  pub const fn equals(self, other: UnitDescriptor) -> bool {
    self.dimension.equals(other.dimension) && self.ratio.equals(other.ratio)
  }

  /// The coarsest unit that represents both operands exactly.
  pub fn sum(self, other: UnitDescriptor) -> UnitResult<UnitDescriptor> {
    if !self.dimension.equals(other.dimension) {
      return Err(UnitError::DimensionMismatch { left: self.dimension, right: other.dimension });
    }
    Ok(Self { dimension: self.dimension, ratio: self.ratio.checked_gcrd(other.ratio)? })
  }

  pub fn sum_all(units: &[UnitDescriptor]) -> UnitResult<UnitDescriptor> {
    let (first, rest) = units.split_first().ok_or(UnitError::NoOperands)?;
    rest.iter().try_fold(*first, |acc, unit| acc.sum(*unit))
  }

  /// # Errors
  /// [`UnitError::Overflow`] if an exponent leaves `i32` or the ratio leaves
  /// `i64`, as with a picometer cubed.
  pub fn product(self, other: UnitDescriptor) -> UnitResult<UnitDescriptor> {
    Ok(Self {
      dimension: self.dimension.checked_product(other.dimension).ok_or(UnitError::Overflow)?,
      ratio: self.ratio.checked_multiply(other.ratio)?,
    })
  }

  /// Empty input is the dimensionless unit with ratio 1.
  pub fn product_all(units: &[UnitDescriptor]) -> UnitResult<UnitDescriptor> {
    let one = Self { dimension: DimensionSignature::DIMENSIONLESS, ratio: Ratio::ONE };
    units.iter().try_fold(one, |acc, unit| acc.product(*unit))
  }

  pub fn inverse(self) -> UnitResult<UnitDescriptor> {
    self.exponent(-1)
  }

  pub fn exponent(self, k: i32) -> UnitResult<UnitDescriptor> {
    Ok(Self {
      dimension: self.dimension.checked_exponent(k).ok_or(UnitError::Overflow)?,
      ratio: self.ratio.checked_pow(k)?,
    })
  }

  /// The canonical name, if this pair has been registered.
  pub fn named(&self) -> Option<NamedUnit> {
    registry::lookup(self)
  }

  pub fn name(&self) -> Option<Cow<'static, str>> {
    self.named().map(|named| named.name)
  }

  pub fn symbol(&self) -> Option<Cow<'static, str>> {
    self.named().map(|named| named.symbol)
  }

  pub fn is_canonical(&self) -> bool {
    self.named().is_some()
  }
}

impl Display for UnitDescriptor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if let Some(named) = self.named() {
      return write!(f, "{}", named.symbol);
    }
    match (self.dimension.is_dimensionless(), self.ratio.is_one()) {
      (true, true) => Ok(()),
      (true, false) => write!(f, "[{}]", self.ratio),
      (false, true) => write!(f, "{}", self.dimension),
      (false, false) => write!(f, "[{}] {}", self.ratio, self.dimension),
    }
  }
}

/// A unit of dimension `D`. The dimension lives in the type, the scale in
/// the value, so `Unit<D>` is as cheap to copy as a [`Ratio`].
pub struct Unit<D: ?Sized + Dimension> {
  ratio: Ratio,
  dimension: PhantomData<D>,
}

impl<D: ?Sized + Dimension> Clone for Unit<D> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<D: ?Sized + Dimension> Copy for Unit<D> { }

impl<D: ?Sized + Dimension> PartialEq for Unit<D> {
  fn eq(&self, other: &Self) -> bool {
    self.ratio == other.ratio
  }
}

impl<D: ?Sized + Dimension> Eq for Unit<D> { }

impl<D: ?Sized + Dimension> Debug for Unit<D> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Unit")
      .field("dimension", &<D as Signature>::SIGNATURE)
      .field("ratio", &self.ratio)
      .finish()
  }
}

impl<D: ?Sized + Dimension> Display for Unit<D> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.descriptor(), f)
  }
}

impl<D: ?Sized + Dimension> Unit<D> {
  /// # Panics
  /// If `ratio` is not strictly positive; in a `const` item this is a
  /// compile error.
  pub const fn new(ratio: Ratio) -> Self {
    assert!(ratio.is_positive(), "unit ratio must be positive");
    Self::from_ratio(ratio)
  }

  pub fn try_new(ratio: Ratio) -> UnitResult<Self> {
    if !ratio.is_positive() {
      return Err(UnitError::NonPositiveRatio(ratio));
    }
    Ok(Self::from_ratio(ratio))
  }

  pub(crate) const fn from_ratio(ratio: Ratio) -> Self {
    Self { ratio, dimension: PhantomData }
  }

  pub const fn base() -> Self {
    Self::from_ratio(Ratio::ONE)
  }

  pub const fn ratio(self) -> Ratio {
    self.ratio
  }

  pub const fn dimension(self) -> DimensionSignature {
    <D as Signature>::SIGNATURE
  }

  pub const fn descriptor(self) -> UnitDescriptor {
    UnitDescriptor { dimension: <D as Signature>::SIGNATURE, ratio: self.ratio }
  }

  /// Same as [`UnitDescriptor::sum`], infallible since both sides share `D`.
  pub const fn sum(self, other: Unit<D>) -> Unit<D> {
    Self::from_ratio(self.ratio.gcrd(other.ratio))
  }

  pub fn inverse(self) -> Unit<Inverse<D>>
  where
    D: DimensionInverse
  {
    Unit::from_ratio(self.ratio.recip())
  }

  pub fn named(self) -> Option<NamedUnit> {
    self.descriptor().named()
  }
}

impl<D: ?Sized + Dimension> From<Unit<D>> for UnitDescriptor {
  fn from(value: Unit<D>) -> Self {
    value.descriptor()
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> Mul<Unit<Dr>> for Unit<Dl>
where
  Dl: DimensionProduct<Dr>
{
  type Output = Unit<Product<Dl, Dr>>;

  fn mul(self, rhs: Unit<Dr>) -> Self::Output {
    Unit::from_ratio(self.ratio.multiply(rhs.ratio))
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> Div<Unit<Dr>> for Unit<Dl>
where
  Dl: DimensionQuotient<Dr>
{
  type Output = Unit<Quotient<Dl, Dr>>;

  fn div(self, rhs: Unit<Dr>) -> Self::Output {
    Unit::from_ratio(self.ratio.divide(rhs.ratio))
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;
  use typenum::{N1, P1, Z0};

  use super::*;
  use crate::dimension::ISQ;

  const TIME: DimensionSignature = DimensionSignature::make(1, 0, 0, 0, 0, 0, 0, 0);
  const LENGTH: DimensionSignature = DimensionSignature::make(0, 1, 0, 0, 0, 0, 0, 0);
  const FREQUENCY: DimensionSignature = DimensionSignature::make(-1, 0, 0, 0, 0, 0, 0, 0);
  const SPEED: DimensionSignature = DimensionSignature::make(-1, 1, 0, 0, 0, 0, 0, 0);

  type TimeDim = ISQ<P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
  type LengthDim = ISQ<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
  type SpeedDim = ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0, Z0>;

  #[test]
  fn test_make() {
    assert!(UnitDescriptor::make(TIME, Ratio::integer(60)).is_ok());
    assert_eq!(UnitDescriptor::make(TIME, Ratio::integer(-60)), Err(UnitError::NonPositiveRatio(Ratio::integer(-60))));
    assert_eq!(UnitDescriptor::make(TIME, Ratio::integer(0)), Err(UnitError::NonPositiveRatio(Ratio::integer(0))));
    assert!(UnitDescriptor::new(TIME, Ratio::ONE).equals(UnitDescriptor::new(TIME, Ratio::new(2, 2))));
    assert_ne!(UnitDescriptor::new(TIME, Ratio::ONE), UnitDescriptor::new(LENGTH, Ratio::ONE));
  }

  #[test]
  fn test_arithmetic() {
    assert_eq!(
      UnitDescriptor::new(FREQUENCY, Ratio::ONE).inverse(),
      Ok(UnitDescriptor::new(TIME, Ratio::ONE))
    );
    assert_eq!(
      UnitDescriptor::new(FREQUENCY, Ratio::new(5, 2)).inverse(),
      Ok(UnitDescriptor::new(TIME, Ratio::new(2, 5)))
    );
    assert_eq!(
      UnitDescriptor::new(FREQUENCY, Ratio::KILO).product(UnitDescriptor::new(LENGTH, Ratio::MILLI)),
      Ok(UnitDescriptor::new(SPEED, Ratio::ONE))
    );
    assert_eq!(
      UnitDescriptor::new(LENGTH, Ratio::ONE).exponent(2),
      Ok(UnitDescriptor::new(LENGTH.exponent(2), Ratio::ONE))
    );
    assert_eq!(
      UnitDescriptor::new(LENGTH, Ratio::KILO).exponent(-2),
      Ok(UnitDescriptor::new(LENGTH.exponent(-2), Ratio::MICRO))
    );
    assert_eq!(
      UnitDescriptor::new(TIME, Ratio::new(5, 2)).sum(UnitDescriptor::new(TIME, Ratio::new(2, 5))),
      Ok(UnitDescriptor::new(TIME, Ratio::new(1, 10)))
    );
    assert_eq!(UnitDescriptor::product_all(&[]), Ok(UnitDescriptor::new(DimensionSignature::DIMENSIONLESS, Ratio::ONE)));
  }

  #[test]
  fn test_arithmetic_overflow() {
    let pm = UnitDescriptor::new(LENGTH, Ratio::PICO);
    let nm = UnitDescriptor::new(LENGTH, Ratio::NANO);
    assert_eq!(nm.exponent(2), Ok(UnitDescriptor::new(LENGTH.exponent(2), Ratio::new(1, 1_000_000_000_000_000_000))));
    assert_eq!(pm.exponent(3), Err(UnitError::Overflow));
    assert_eq!(pm.product(pm), Err(UnitError::Overflow));
    assert_eq!(UnitDescriptor::product_all(&[pm, pm, pm]), Err(UnitError::Overflow));
    assert_eq!(pm.exponent(-3), Err(UnitError::Overflow));
    assert_eq!(UnitDescriptor::new(LENGTH, Ratio::new(1, i64::MAX)).inverse(), Ok(UnitDescriptor::new(LENGTH.inverse(), Ratio::integer(i64::MAX))));

    let huge = UnitDescriptor::new(DimensionSignature::make(0, i32::MAX, 0, 0, 0, 0, 0, 0), Ratio::ONE);
    assert_eq!(huge.product(UnitDescriptor::new(LENGTH, Ratio::ONE)), Err(UnitError::Overflow));
    assert_eq!(huge.exponent(2), Err(UnitError::Overflow));

    let tiny = UnitDescriptor::new(LENGTH, Ratio::new(1, i64::MAX));
    assert_eq!(tiny.sum(UnitDescriptor::new(LENGTH, Ratio::new(1, 2))), Err(UnitError::Overflow));
  }

  #[test]
  fn test_sum_rejects_mismatch() {
    assert_eq!(
      UnitDescriptor::new(LENGTH, Ratio::ONE).sum(UnitDescriptor::new(TIME, Ratio::ONE)),
      Err(UnitError::DimensionMismatch { left: LENGTH, right: TIME })
    );
    assert_eq!(
      UnitDescriptor::sum_all(&[
        UnitDescriptor::new(TIME, Ratio::integer(60)),
        UnitDescriptor::new(TIME, Ratio::ONE),
        UnitDescriptor::new(LENGTH, Ratio::ONE),
      ]),
      Err(UnitError::DimensionMismatch { left: TIME, right: LENGTH })
    );
    assert_eq!(UnitDescriptor::sum_all(&[]), Err(UnitError::NoOperands));
  }

  #[test]
  fn test_sum_all() {
    let units = [
      UnitDescriptor::new(TIME, Ratio::integer(3600)),
      UnitDescriptor::new(TIME, Ratio::integer(60)),
      UnitDescriptor::new(TIME, Ratio::MILLI),
    ];
    assert_eq!(UnitDescriptor::sum_all(&units), Ok(UnitDescriptor::new(TIME, Ratio::MILLI)));
    assert_eq!(UnitDescriptor::sum_all(&units[..1]), Ok(units[0]));
  }

  #[test]
  fn test_typed() {
    let km = Unit::<LengthDim>::new(Ratio::KILO);
    let h = Unit::<TimeDim>::new(Ratio::integer(3600));
    let kph: Unit<SpeedDim> = km / h;
    assert_eq!(kph.ratio(), Ratio::new(5, 18));
    assert_eq!(kph.descriptor(), UnitDescriptor::new(SPEED, Ratio::new(5, 18)));
    assert_eq!((kph * h).ratio(), Ratio::KILO);
    assert_eq!(h.inverse().dimension(), FREQUENCY);
    assert_eq!(km.sum(Unit::base()), Unit::base());
    assert!(Unit::<LengthDim>::try_new(Ratio::integer(-1)).is_err());
  }

  #[test]
  fn test_display_anonymous() {
    assert_eq!(UnitDescriptor::new(SPEED, Ratio::new(7, 3)).to_string(), "[7/3] m s^{-1}");
    assert_eq!(UnitDescriptor::new(DimensionSignature::DIMENSIONLESS, Ratio::ONE).to_string(), "");
    assert_eq!(UnitDescriptor::new(DimensionSignature::DIMENSIONLESS, Ratio::KILO).to_string(), "[1000]");
  }

  proptest! {
    #[test]
    fn sum_ratio_divides_operands(a in 1i64..1_000_000, b in 1i64..1_000_000, c in 1i64..1_000_000, d in 1i64..1_000_000) {
      let u1 = UnitDescriptor::new(SPEED, Ratio::new(a, b));
      let u2 = UnitDescriptor::new(SPEED, Ratio::new(c, d));
      let sum = u1.sum(u2).unwrap();
      prop_assert!(u1.ratio().divide(sum.ratio()).is_integer());
      prop_assert!(u2.ratio().divide(sum.ratio()).is_integer());
      prop_assert_eq!(sum.dimension(), SPEED);
    }

    #[test]
    fn exponent_negative_is_inverse(a in 1i64..30, b in 1i64..30, k in 0i32..5) {
      let u = UnitDescriptor::new(SPEED, Ratio::new(a, b));
      prop_assert_eq!(u.exponent(-k), u.exponent(k).and_then(UnitDescriptor::inverse));
    }
  }
}
