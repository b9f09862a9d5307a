//! Physical quantities whose dimensions are checked by the compiler and whose
//! unit conversions use exact rational factors.
//!
//! ```
//! use exact_units::{motion::kilometers_per_hour, meter, millisecond};
//!
//! let v = (20.0 * meter) / (1000.0 * millisecond);
//! assert_eq!(v, 72.0 * kilometers_per_hour);
//! ```
//!
//! `scalar * unit` is implemented for every primitive, `f32` and `f64`
//! included. A bare float literal is fine inside an expression whose type is
//! fixed elsewhere, as above. Calling a method straight on the product is
//! ambiguous, so suffix the literal or bind it to a typed variable:
//!
//! ```
//! use exact_units::{kilometer, meter, Length};
//!
//! assert_eq!((1500.0f64 * meter).to(kilometer), 1.5);
//! let d: Length = 1500.0 * meter;
//! assert_eq!(d.to(kilometer), 1.5);
//! ```
//!
//! Ratio arithmetic is exact in `i64`. Combining units whose scale leaves that
//! range, such as a picometer cubed, panics in operators and returns
//! [`UnitError::Overflow`] from the [`UnitDescriptor`] algebra.
//!
//! Quantities of different dimensions never combine:
//!
//! ```compile_fail
//! use exact_units::{meter, second};
//!
//! let _ = 1.0 * meter + 1.0 * second;
//! ```

pub mod dimension;
pub mod error;
pub mod quantity;
pub mod ratio;
pub mod registry;
pub mod rep;
pub mod unit;

#[cfg(feature = "catalog")]
pub mod base;
#[cfg(feature = "catalog")]
pub mod electrical;
#[cfg(feature = "catalog")]
pub mod force;
#[cfg(feature = "catalog")]
pub mod motion;

#[cfg(feature = "catalog")]
pub use base::*;
pub use dimension::{BaseDimension, Dimension, DimensionSignature, Dimensionless, Signature, ISQ};
pub use error::{UnitError, UnitResult};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use registry::{NamedUnit, UnitRegistry};
pub use rep::Representation;
pub use typenum;
pub use unit::{Unit, UnitDescriptor};

#[cfg(feature = "catalog")]
pub(crate) fn register_catalog(registry: &UnitRegistry) {
  base::register(registry);
  motion::register(registry);
  electrical::register(registry);
  force::register(registry);
}

/// Declares named units, grouped by dimension, as `const` [`Unit`]s together
/// with a `register` function that names them in a [`UnitRegistry`].
///
/// ```
/// use exact_units::{typenum::{P1, Z0}, units, ISQ, Quantity, UnitRegistry};
///
/// type Distance = ISQ<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
///
/// units! {
///   Distance {
///     furlong = 201168 / 1000, "fur";
///     chain = 201168 / 10000, "ch";
///   }
/// }
///
/// let registry = UnitRegistry::new();
/// register(&registry);
/// assert_eq!(registry.lookup(&furlong.descriptor()).unwrap().symbol, "fur");
/// assert_eq!(Quantity::new(1, furlong), Quantity::new(10, chain));
/// ```
#[macro_export]
macro_rules! units {
  ($($dim:ty { $($name:ident = $num:literal / $den:literal, $symbol:literal;)* })*) => {
    $($(
      #[allow(non_upper_case_globals)]
      pub const $name: $crate::Unit<$dim> = $crate::Unit::new($crate::Ratio::new($num, $den));
    )*)*

    pub fn register(registry: &$crate::UnitRegistry) {
      $($(
        if let Err(err) = registry.register($name.descriptor(), stringify!($name), $symbol) {
          $crate::__log::error!("Built-in unit '{}' was not registered: {}", stringify!($name), err);
        }
      )*)*
    }
  }
}

#[doc(hidden)]
pub use log as __log;
