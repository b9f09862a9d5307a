use typenum::{N1, N2, N3, P1, P2, P4, Z0};

use crate::{units, Quantity, ISQ};

pub type ChargeDim      = ISQ<P1, Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type PowerDim       = ISQ<N3, P2, P1, Z0, Z0, Z0, Z0, Z0>;
pub type VoltageDim     = ISQ<N3, P2, P1, N1, Z0, Z0, Z0, Z0>;
pub type ResistanceDim  = ISQ<N3, P2, P1, N2, Z0, Z0, Z0, Z0>;
pub type CapacitanceDim = ISQ<P4, N2, N1, P2, Z0, Z0, Z0, Z0>;
pub type InductanceDim  = ISQ<N2, P2, P1, N2, Z0, Z0, Z0, Z0>;

pub type Charge<R = f64>      = Quantity<ChargeDim, R>;
pub type Power<R = f64>       = Quantity<PowerDim, R>;
pub type Voltage<R = f64>     = Quantity<VoltageDim, R>;
pub type Resistance<R = f64>  = Quantity<ResistanceDim, R>;
pub type Capacitance<R = f64> = Quantity<CapacitanceDim, R>;
pub type Inductance<R = f64>  = Quantity<InductanceDim, R>;

units! {
  ChargeDim {
    coulomb = 1 / 1, "C";
    milliampere_hour = 18 / 5, "mAh";
  }

  PowerDim {
    gigawatt = 1000000000 / 1, "GW";
    megawatt = 1000000 / 1, "MW";
    kilowatt = 1000 / 1, "kW";
    watt = 1 / 1, "W";
    milliwatt = 1 / 1000, "mW";
    microwatt = 1 / 1000000, "µW";
  }

  VoltageDim {
    kilovolt = 1000 / 1, "kV";
    volt = 1 / 1, "V";
    millivolt = 1 / 1000, "mV";
    microvolt = 1 / 1000000, "µV";
  }

  ResistanceDim {
    kiloohm = 1000 / 1, "kΩ";
    ohm = 1 / 1, "Ω";
    milliohm = 1 / 1000, "mΩ";
  }

  CapacitanceDim {
    farad = 1 / 1, "F";
    millifarad = 1 / 1000, "mF";
    microfarad = 1 / 1000000, "µF";
    nanofarad = 1 / 1000000000, "nF";
  }

  InductanceDim {
    henry = 1 / 1, "H";
    millihenry = 1 / 1000, "mH";
    microhenry = 1 / 1000000, "µH";
    nanohenry = 1 / 1000000000, "nH";
  }
}
