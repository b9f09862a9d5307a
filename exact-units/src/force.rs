use typenum::{N1, N2, P1, P2, Z0};

use crate::{units, Quantity, Unit, ISQ};

pub type ForceDim  = ISQ<N2, P1, P1, Z0, Z0, Z0, Z0, Z0>;
pub type EnergyDim = ISQ<N2, P2, P1, Z0, Z0, Z0, Z0, Z0>;
pub type MOIDim    = ISQ<Z0, P2, P1, Z0, Z0, Z0, Z0, Z0>;
pub type AngularMomentumDim = ISQ<N1, P1, P1, Z0, Z0, Z0, Z0, P1>;

pub type Force<R = f64>  = Quantity<ForceDim, R>;
pub type Energy<R = f64> = Quantity<EnergyDim, R>;
// Torque shares its dimension (and so its units) with energy.
pub type Torque<R = f64> = Energy<R>;
pub type MOI<R = f64>    = Quantity<MOIDim, R>;
pub type AngularMomentum<R = f64> = Quantity<AngularMomentumDim, R>;

units! {
  ForceDim {
    kilonewton = 1000 / 1, "kN";
    newton = 1 / 1, "N";
  }

  EnergyDim {
    kilojoule = 1000 / 1, "kJ";
    joule = 1 / 1, "J";
    watt_hour = 3600 / 1, "Wh";
  }

  MOIDim {
    kgm2 = 1 / 1, "kg m²";
  }

  AngularMomentumDim {
    kgm2_revs_per_second = 1 / 1, "kg m² rev/s";
    kgm2_rads_per_second = 99532 / 625378, "kg m² rad/s";
  }
}

#[allow(non_upper_case_globals)]
pub const newton_meter: Unit<EnergyDim> = joule;
