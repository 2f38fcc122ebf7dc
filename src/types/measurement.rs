//! Defines the measurement modes the trends tool can compare, and the Open-Meteo
//! field and unit each of them maps to.

use std::fmt;

/// The weather variable compared across years.
///
/// Exactly one measurement is selected for a whole run; it decides which hourly field
/// is requested from the API, which unit it is requested in, and how the output file
/// is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Measurement {
    /// Air temperature 2 meters above ground, in degrees Fahrenheit.
    #[default]
    Temperature,
    /// Total precipitation (rain, showers, snow) of the preceding hour, in inches.
    Precipitation,
}

impl Measurement {
    /// Name of the hourly field, as used in the `hourly` query parameter and in the
    /// `hourly` object of the response.
    pub fn field_name(&self) -> &'static str {
        match self {
            Measurement::Temperature => "temperature_2m",
            Measurement::Precipitation => "precipitation",
        }
    }

    /// Query parameter carrying the unit for this measurement.
    pub fn unit_param(&self) -> &'static str {
        match self {
            Measurement::Temperature => "temperature_unit",
            Measurement::Precipitation => "precipitation_unit",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Temperature => "fahrenheit",
            Measurement::Precipitation => "inch",
        }
    }

    /// Label used in the output file name.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Measurement::Temperature => "temperature",
            Measurement::Precipitation => "precipitation",
        }
    }
}

/// Formats a `Measurement` using its file-name label.
///
/// # Examples
///
/// ```
/// use weather_trends::Measurement;
///
/// assert_eq!(Measurement::Temperature.to_string(), "temperature");
/// assert_eq!(format!("{}", Measurement::Precipitation), "precipitation");
/// ```
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
