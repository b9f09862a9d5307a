use std::{error::Error, fmt::Display};

use crate::{dimension::DimensionSignature, ratio::Ratio, unit::UnitDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
  /// Addition, subtraction, comparison or modulo across two dimensions.
  DimensionMismatch { left: DimensionSignature, right: DimensionSignature },
  ZeroDenominator,
  /// Units must scale by a strictly positive factor.
  NonPositiveRatio(Ratio),
  /// An implicit conversion into an integral representation would truncate.
  LossyConversion { from: UnitDescriptor, to: UnitDescriptor },
  /// A floating value was given to an integral quantity.
  NarrowingConstruction,
  Overflow,
  NoOperands,
  Conflict { descriptor: UnitDescriptor, existing: String, requested: String },
}

impl Display for UnitError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UnitError::DimensionMismatch { left, right } => write!(f, "Dimension Mismatch: [{}] vs [{}]", left, right),
      UnitError::ZeroDenominator => write!(f, "Zero Denominator"),
      UnitError::NonPositiveRatio(ratio) => write!(f, "Unit ratio must be positive, got {}", ratio),
      UnitError::LossyConversion { from, to } => write!(f, "Conversion from ({}) to ({}) is not exact", from, to),
      UnitError::NarrowingConstruction => write!(f, "Narrowing a floating value into an integral quantity"),
      UnitError::Overflow => write!(f, "Overflow"),
      UnitError::NoOperands => write!(f, "No Operands"),
      UnitError::Conflict { descriptor, existing, requested } =>
        write!(f, "Unit ({} [{}]) is already registered as '{}', cannot register '{}'", descriptor.ratio(), descriptor.dimension(), existing, requested),
    }
  }
}

impl Error for UnitError {}

pub type UnitResult<T> = Result<T, UnitError>;
