use typenum::{N1, N2, N3, N4, N5, N6, P1, Z0};

use crate::{units, Quantity, Unit, ISQ};

pub type VelocityDim            = ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type AccelerationDim        = ISQ<N2, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type JerkDim                = ISQ<N3, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type SnapDim                = ISQ<N4, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type CrackleDim             = ISQ<N5, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type PopDim                 = ISQ<N6, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type FrequencyDim           = ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type AngularVelocityDim     = ISQ<N1, N1, Z0, Z0, Z0, Z0, Z0, P1>;
pub type AngularAccelerationDim = ISQ<N2, N1, Z0, Z0, Z0, Z0, Z0, P1>;
pub type AngularJerkDim         = ISQ<N3, N1, Z0, Z0, Z0, Z0, Z0, P1>;

pub type Velocity<R = f64>            = Quantity<VelocityDim, R>;
pub type Acceleration<R = f64>        = Quantity<AccelerationDim, R>;
pub type Jerk<R = f64>                = Quantity<JerkDim, R>;
pub type Snap<R = f64>                = Quantity<SnapDim, R>;
pub type Crackle<R = f64>             = Quantity<CrackleDim, R>;
pub type Pop<R = f64>                 = Quantity<PopDim, R>;
pub type Frequency<R = f64>           = Quantity<FrequencyDim, R>;
pub type AngularVelocity<R = f64>     = Quantity<AngularVelocityDim, R>;
pub type AngularAcceleration<R = f64> = Quantity<AngularAccelerationDim, R>;
pub type AngularJerk<R = f64>         = Quantity<AngularJerkDim, R>;

units! {
  VelocityDim {
    meters_per_second = 1 / 1, "m/s";
    kilometers_per_hour = 5 / 18, "km/h";
    miles_per_hour = 1397 / 3125, "mph";
    feet_per_second = 3048 / 10000, "ft/s";
    inches_per_second = 254 / 10000, "in/s";
  }

  AccelerationDim {
    meters_per_second2 = 1 / 1, "m/s²";
    feet_per_second2 = 3048 / 10000, "ft/s²";
    inches_per_second2 = 254 / 10000, "in/s²";
  }

  JerkDim {
    meters_per_second3 = 1 / 1, "m/s³";
    feet_per_second3 = 3048 / 10000, "ft/s³";
  }

  SnapDim {
    meters_per_second4 = 1 / 1, "m/s⁴";
  }

  CrackleDim {
    meters_per_second5 = 1 / 1, "m/s⁵";
  }

  PopDim {
    meters_per_second6 = 1 / 1, "m/s⁶";
  }

  FrequencyDim {
    terahertz = 1000000000000 / 1, "THz";
    gigahertz = 1000000000 / 1, "GHz";
    megahertz = 1000000 / 1, "MHz";
    kilohertz = 1000 / 1, "kHz";
    hertz = 1 / 1, "Hz";
    millihertz = 1 / 1000, "mHz";
  }

  AngularVelocityDim {
    revolutions_per_second = 1 / 1, "rev/s";
    revolutions_per_minute = 1 / 60, "rpm";
    rads_per_second = 99532 / 625378, "rad/s";
    degrees_per_second = 1 / 360, "°/s";
  }

  AngularAccelerationDim {
    revolutions_per_second2 = 1 / 1, "rev/s²";
    rads_per_second2 = 99532 / 625378, "rad/s²";
    degrees_per_second2 = 1 / 360, "°/s²";
  }

  AngularJerkDim {
    revolutions_per_second3 = 1 / 1, "rev/s³";
    rads_per_second3 = 99532 / 625378, "rad/s³";
    degrees_per_second3 = 1 / 360, "°/s³";
  }
}

#[allow(non_upper_case_globals)]
pub const rpm: Unit<AngularVelocityDim> = revolutions_per_minute;
