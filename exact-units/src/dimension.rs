use std::fmt::Display;

use typenum::{Diff, Integer, Negate, Sum, Z0};

// Inspired by uom, but with the exponents mirrored at runtime so unit
// descriptors can be compared, hashed and named without the type.
pub trait Dimension : Send + Sync + Unpin {
  type Time: Integer;
  type Length: Integer;
  type Mass: Integer;
  type Current: Integer;
  type Temperature: Integer;
  type Amount: Integer;
  type LuminousIntensity: Integer;
  type Angle: Integer;
}

pub type ISQ<Time, Length, Mass, Current, Temperature, Amount, LuminousIntensity, Angle> = dyn Dimension<Time = Time, Length = Length, Mass = Mass, Current = Current, Temperature = Temperature, Amount = Amount, LuminousIntensity = LuminousIntensity, Angle = Angle>;

pub type Dimensionless = ISQ<Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Time,
  Length,
  Mass,
  Current,
  Temperature,
  Amount,
  LuminousIntensity,
  AngularLength,
}

impl BaseDimension {
  pub const ALL: [BaseDimension; 8] = [
    BaseDimension::Time,
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::LuminousIntensity,
    BaseDimension::AngularLength,
  ];

  pub const fn index(self) -> usize {
    self as usize
  }

  pub const fn symbol(self) -> &'static str {
    match self {
      BaseDimension::Time => "s",
      BaseDimension::Length => "m",
      BaseDimension::Mass => "kg",
      BaseDimension::Current => "A",
      BaseDimension::Temperature => "K",
      BaseDimension::Amount => "mol",
      BaseDimension::LuminousIntensity => "cd",
      BaseDimension::AngularLength => "rad",
    }
  }
}

/// Exponents over the seven SI base dimensions plus angular length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionSignature {
  exponents: [i32; 8],
}

impl DimensionSignature {
  pub const DIMENSIONLESS: DimensionSignature = DimensionSignature { exponents: [0; 8] };

  #[allow(clippy::too_many_arguments)]
  pub const fn make(t: i32, l: i32, m: i32, i: i32, k: i32, n: i32, j: i32, r: i32) -> Self {
    Self { exponents: [t, l, m, i, k, n, j, r] }
  }

  pub const fn from_exponents(exponents: [i32; 8]) -> Self {
    Self { exponents }
  }

  pub const fn exponents(self) -> [i32; 8] {
    self.exponents
  }

  pub const fn get(self, axis: BaseDimension) -> i32 {
    self.exponents[axis.index()]
  }

  pub const fn is_dimensionless(self) -> bool {
    self.equals(Self::DIMENSIONLESS)
  }

  /// `const` counterpart of `==`.
  pub const fn equals(self, other: DimensionSignature) -> bool {
    let mut i = 0;
    while i < 8 {
      if self.exponents[i] != other.exponents[i] {
        return false;
      }
      i += 1;
    }
    true
  }

  /// # Panics
  /// If an exponent overflows `i32`.
  pub const fn product(self, other: DimensionSignature) -> DimensionSignature {
    match self.checked_product(other) {
      Some(product) => product,
      None => panic!("dimension exponent overflowed i32"),
    }
  }

  pub const fn checked_product(self, other: DimensionSignature) -> Option<DimensionSignature> {
    let mut exponents = self.exponents;
    let mut i = 0;
    while i < 8 {
      exponents[i] = match exponents[i].checked_add(other.exponents[i]) {
        Some(e) => e,
        None => return None,
      };
      i += 1;
    }
    Some(Self { exponents })
  }

  /// Left fold of [`DimensionSignature::product`]; empty input is dimensionless.
  pub const fn product_all(dimensions: &[DimensionSignature]) -> DimensionSignature {
    let mut acc = Self::DIMENSIONLESS;
    let mut i = 0;
    while i < dimensions.len() {
      acc = acc.product(dimensions[i]);
      i += 1;
    }
    acc
  }

  pub const fn inverse(self) -> DimensionSignature {
    self.exponent(-1)
  }

  /// Self-product `k` times. Exponents scale linearly, so this is a single
  /// pass regardless of `k`.
  ///
  /// # Panics
  /// If an exponent overflows `i32`.
  pub const fn exponent(self, k: i32) -> DimensionSignature {
    match self.checked_exponent(k) {
      Some(power) => power,
      None => panic!("dimension exponent overflowed i32"),
    }
  }

  pub const fn checked_exponent(self, k: i32) -> Option<DimensionSignature> {
    let mut exponents = self.exponents;
    let mut i = 0;
    while i < 8 {
      exponents[i] = match exponents[i].checked_mul(k) {
        Some(e) => e,
        None => return None,
      };
      i += 1;
    }
    Some(Self { exponents })
  }
}

impl Default for DimensionSignature {
  fn default() -> Self {
    Self::DIMENSIONLESS
  }
}

const DISPLAY_ORDER: [BaseDimension; 8] = [
  BaseDimension::Mass,
  BaseDimension::Length,
  BaseDimension::Time,
  BaseDimension::Current,
  BaseDimension::Temperature,
  BaseDimension::Amount,
  BaseDimension::LuminousIntensity,
  BaseDimension::AngularLength,
];

impl Display for DimensionSignature {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for axis in DISPLAY_ORDER {
      let value = self.get(axis);
      if value == 0 { continue; }
      if !first { write!(f, " ")?; }
      first = false;
      if value == 1 { write!(f, "{}", axis.symbol())?; }
      else { write!(f, "{}^{{{}}}", axis.symbol(), value)?; }
    }
    if first { write!(f, "1")?; }
    Ok(())
  }
}

/// Runtime signature of a type-level [`Dimension`].
pub trait Signature {
  const SIGNATURE: DimensionSignature;
}

impl<D: ?Sized + Dimension> Signature for D {
  const SIGNATURE: DimensionSignature = DimensionSignature::make(
    <D::Time as Integer>::I32,
    <D::Length as Integer>::I32,
    <D::Mass as Integer>::I32,
    <D::Current as Integer>::I32,
    <D::Temperature as Integer>::I32,
    <D::Amount as Integer>::I32,
    <D::LuminousIntensity as Integer>::I32,
    <D::Angle as Integer>::I32,
  );
}

pub trait DimensionProduct<Rhs: ?Sized + Dimension> : Dimension {
  type Output: ?Sized + Dimension;
}

pub trait DimensionQuotient<Rhs: ?Sized + Dimension> : Dimension {
  type Output: ?Sized + Dimension;
}

pub trait DimensionInverse : Dimension {
  type Output: ?Sized + Dimension;
}

pub type Product<Dl, Dr> = <Dl as DimensionProduct<Dr>>::Output;
pub type Quotient<Dl, Dr> = <Dl as DimensionQuotient<Dr>>::Output;
pub type Inverse<D> = <D as DimensionInverse>::Output;

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> DimensionProduct<Dr> for Dl
where
  Dl::Time: std::ops::Add<Dr::Time>,
  Sum<Dl::Time, Dr::Time>: Integer,
  Dl::Length: std::ops::Add<Dr::Length>,
  Sum<Dl::Length, Dr::Length>: Integer,
  Dl::Mass: std::ops::Add<Dr::Mass>,
  Sum<Dl::Mass, Dr::Mass>: Integer,
  Dl::Current: std::ops::Add<Dr::Current>,
  Sum<Dl::Current, Dr::Current>: Integer,
  Dl::Temperature: std::ops::Add<Dr::Temperature>,
  Sum<Dl::Temperature, Dr::Temperature>: Integer,
  Dl::Amount: std::ops::Add<Dr::Amount>,
  Sum<Dl::Amount, Dr::Amount>: Integer,
  Dl::LuminousIntensity: std::ops::Add<Dr::LuminousIntensity>,
  Sum<Dl::LuminousIntensity, Dr::LuminousIntensity>: Integer,
  Dl::Angle: std::ops::Add<Dr::Angle>,
  Sum<Dl::Angle, Dr::Angle>: Integer,
{
  type Output = ISQ<
    Sum<Dl::Time, Dr::Time>,
    Sum<Dl::Length, Dr::Length>,
    Sum<Dl::Mass, Dr::Mass>,
    Sum<Dl::Current, Dr::Current>,
    Sum<Dl::Temperature, Dr::Temperature>,
    Sum<Dl::Amount, Dr::Amount>,
    Sum<Dl::LuminousIntensity, Dr::LuminousIntensity>,
    Sum<Dl::Angle, Dr::Angle>,
  >;
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> DimensionQuotient<Dr> for Dl
where
  Dl::Time: std::ops::Sub<Dr::Time>,
  Diff<Dl::Time, Dr::Time>: Integer,
  Dl::Length: std::ops::Sub<Dr::Length>,
  Diff<Dl::Length, Dr::Length>: Integer,
  Dl::Mass: std::ops::Sub<Dr::Mass>,
  Diff<Dl::Mass, Dr::Mass>: Integer,
  Dl::Current: std::ops::Sub<Dr::Current>,
  Diff<Dl::Current, Dr::Current>: Integer,
  Dl::Temperature: std::ops::Sub<Dr::Temperature>,
  Diff<Dl::Temperature, Dr::Temperature>: Integer,
  Dl::Amount: std::ops::Sub<Dr::Amount>,
  Diff<Dl::Amount, Dr::Amount>: Integer,
  Dl::LuminousIntensity: std::ops::Sub<Dr::LuminousIntensity>,
  Diff<Dl::LuminousIntensity, Dr::LuminousIntensity>: Integer,
  Dl::Angle: std::ops::Sub<Dr::Angle>,
  Diff<Dl::Angle, Dr::Angle>: Integer,
{
  type Output = ISQ<
    Diff<Dl::Time, Dr::Time>,
    Diff<Dl::Length, Dr::Length>,
    Diff<Dl::Mass, Dr::Mass>,
    Diff<Dl::Current, Dr::Current>,
    Diff<Dl::Temperature, Dr::Temperature>,
    Diff<Dl::Amount, Dr::Amount>,
    Diff<Dl::LuminousIntensity, Dr::LuminousIntensity>,
    Diff<Dl::Angle, Dr::Angle>,
  >;
}

impl<D: Dimension + ?Sized> DimensionInverse for D
where
  D::Time: std::ops::Neg,
  Negate<D::Time>: Integer,
  D::Length: std::ops::Neg,
  Negate<D::Length>: Integer,
  D::Mass: std::ops::Neg,
  Negate<D::Mass>: Integer,
  D::Current: std::ops::Neg,
  Negate<D::Current>: Integer,
  D::Temperature: std::ops::Neg,
  Negate<D::Temperature>: Integer,
  D::Amount: std::ops::Neg,
  Negate<D::Amount>: Integer,
  D::LuminousIntensity: std::ops::Neg,
  Negate<D::LuminousIntensity>: Integer,
  D::Angle: std::ops::Neg,
  Negate<D::Angle>: Integer,
{
  type Output = ISQ<
    Negate<D::Time>,
    Negate<D::Length>,
    Negate<D::Mass>,
    Negate<D::Current>,
    Negate<D::Temperature>,
    Negate<D::Amount>,
    Negate<D::LuminousIntensity>,
    Negate<D::Angle>,
  >;
}
