use typenum::{N1, N2, P1, P2, P3, Z0};

use crate::{units, ISQ, Quantity};

pub type RatioDim             = ISQ<Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type TimeDim              = ISQ<P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type LengthDim            = ISQ<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type MassDim              = ISQ<Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type CurrentDim           = ISQ<Z0, Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type TemperatureDim       = ISQ<Z0, Z0, Z0, Z0, P1, Z0, Z0, Z0>;
pub type AmountDim            = ISQ<Z0, Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type LuminousIntensityDim = ISQ<Z0, Z0, Z0, Z0, Z0, Z0, P1, Z0>;
// Angular length over radius, so a full turn is the same everywhere.
pub type AngleDim             = ISQ<Z0, N1, Z0, Z0, Z0, Z0, Z0, P1>;
pub type SolidAngleDim        = ISQ<Z0, N2, Z0, Z0, Z0, Z0, Z0, P2>;
pub type AreaDim              = ISQ<Z0, P2, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type VolumeDim            = ISQ<Z0, P3, Z0, Z0, Z0, Z0, Z0, Z0>;

pub type Unitless<R = f64>          = Quantity<RatioDim, R>;
pub type Time<R = f64>              = Quantity<TimeDim, R>;
pub type Length<R = f64>            = Quantity<LengthDim, R>;
pub type Mass<R = f64>              = Quantity<MassDim, R>;
pub type Current<R = f64>           = Quantity<CurrentDim, R>;
pub type Temperature<R = f64>       = Quantity<TemperatureDim, R>;
pub type Amount<R = f64>            = Quantity<AmountDim, R>;
pub type LuminousIntensity<R = f64> = Quantity<LuminousIntensityDim, R>;
pub type Angle<R = f64>             = Quantity<AngleDim, R>;
pub type SolidAngle<R = f64>        = Quantity<SolidAngleDim, R>;
pub type Area<R = f64>              = Quantity<AreaDim, R>;
pub type Volume<R = f64>            = Quantity<VolumeDim, R>;

units! {
  RatioDim {
    percent = 1 / 100, "%";
    permille = 1 / 1000, "‰";
  }

  TimeDim {
    day = 86400 / 1, "d";
    hour = 3600 / 1, "h";
    minute = 60 / 1, "min";
    second = 1 / 1, "s";
    millisecond = 1 / 1000, "ms";
    microsecond = 1 / 1000000, "µs";
    nanosecond = 1 / 1000000000, "ns";
    picosecond = 1 / 1000000000000, "ps";
  }

  LengthDim {
    kilometer = 1000 / 1, "km";
    meter = 1 / 1, "m";
    centimeter = 1 / 100, "cm";
    millimeter = 1 / 1000, "mm";
    micrometer = 1 / 1000000, "µm";
    nanometer = 1 / 1000000000, "nm";
    picometer = 1 / 1000000000000, "pm";
    mile = 1609344 / 1000, "mi";
    yard = 9144 / 10000, "yd";
    foot = 3048 / 10000, "ft";
    inch = 254 / 10000, "in";
  }

  MassDim {
    kilogram = 1 / 1, "kg";
    gram = 1 / 1000, "g";
    milligram = 1 / 1000000, "mg";
  }

  CurrentDim {
    ampere = 1 / 1, "A";
    milliampere = 1 / 1000, "mA";
    microampere = 1 / 1000000, "µA";
  }

  TemperatureDim {
    kelvin = 1 / 1, "K";
  }

  AmountDim {
    mol = 1 / 1, "mol";
  }

  LuminousIntensityDim {
    candela = 1 / 1, "cd";
  }

  AngleDim {
    revolution = 1 / 1, "rev";
    radian = 99532 / 625378, "rad";
    gradian = 1 / 400, "grad";
    degree = 1 / 360, "°";
  }

  SolidAngleDim {
    steradian = 2476654756 / 97774410721, "sr";
    square_degree = 1 / 129600, "deg²";
  }

  AreaDim {
    square_kilometer = 1000000 / 1, "km²";
    hectare = 10000 / 1, "ha";
    square_meter = 1 / 1, "m²";
  }

  VolumeDim {
    cubic_meter = 1 / 1, "m³";
    liter = 1 / 1000, "L";
    milliliter = 1 / 1000000, "mL";
  }
}
