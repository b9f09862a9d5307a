use std::{borrow::Cow, sync::OnceLock};

use dashmap::{DashMap, mapref::entry::Entry};
use log::{debug, warn};

use crate::{error::{UnitError, UnitResult}, unit::UnitDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedUnit {
  pub name: Cow<'static, str>,
  pub symbol: Cow<'static, str>,
}

/// Intern table from well-known (dimension, ratio) pairs to their names.
/// Written once per unit at definition time, read on every format.
#[derive(Debug, Default)]
pub struct UnitRegistry {
  units: DashMap<UnitDescriptor, NamedUnit>,
}

impl UnitRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registering the same name twice is a no-op; a different name for an
  /// already-named pair is a [`UnitError::Conflict`].
  pub fn register(
    &self,
    descriptor: UnitDescriptor,
    name: impl Into<Cow<'static, str>>,
    symbol: impl Into<Cow<'static, str>>
  ) -> UnitResult<()> {
    let name = name.into();
    match self.units.entry(descriptor) {
      Entry::Occupied(existing) => {
        if existing.get().name == name {
          return Ok(());
        }
        let err = UnitError::Conflict {
          descriptor,
          existing: existing.get().name.to_string(),
          requested: name.into_owned(),
        };
        warn!("{}", err);
        Err(err)
      },
      Entry::Vacant(slot) => {
        // Descriptor's Display reads the global registry, so log the parts.
        debug!("Registered unit '{}' as [{}] {}", name, descriptor.ratio(), descriptor.dimension());
        slot.insert(NamedUnit { name, symbol: symbol.into() });
        Ok(())
      }
    }
  }

  pub fn lookup(&self, descriptor: &UnitDescriptor) -> Option<NamedUnit> {
    self.units.get(descriptor).map(|entry| entry.value().clone())
  }

  pub fn contains(&self, descriptor: &UnitDescriptor) -> bool {
    self.units.contains_key(descriptor)
  }

  pub fn len(&self) -> usize {
    self.units.len()
  }

  pub fn is_empty(&self) -> bool {
    self.units.is_empty()
  }
}

static GLOBAL: OnceLock<UnitRegistry> = OnceLock::new();

/// The process-wide registry, seeded with the built-in catalog on first use.
pub fn global() -> &'static UnitRegistry {
  GLOBAL.get_or_init(|| {
    let registry = UnitRegistry::new();
    #[cfg(feature = "catalog")]
    crate::register_catalog(&registry);
    registry
  })
}

pub fn register_unit(
  descriptor: UnitDescriptor,
  name: impl Into<Cow<'static, str>>,
  symbol: impl Into<Cow<'static, str>>
) -> UnitResult<()> {
  global().register(descriptor, name, symbol)
}

pub fn lookup(descriptor: &UnitDescriptor) -> Option<NamedUnit> {
  global().lookup(descriptor)
}
