//! Supported sensor models and how each one frames its measurement.

use crate::error::UnknownSensorKind;

/// DHT sensor model attached to the data line.
///
/// The discriminants are the type identifiers used throughout the DHT
/// ecosystem (`11`, `12`, `21`, `22`).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SensorKind {
    /// DHT11, integer-resolution humidity and temperature.
    Dht11 = 11,
    /// DHT12, the single-wire mode of the DHT12.
    Dht12 = 12,
    /// DHT21 (AM2301).
    Dht21 = 21,
    /// DHT22 (AM2302).
    Dht22 = 22,
}

impl SensorKind {
    /// Type identifier of this model.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// How long (in microseconds) the MCU holds the line low to request a
    /// measurement.
    pub(crate) const fn start_low_us(self) -> u32 {
        match self {
            // datasheet asks for at least 18 ms
            SensorKind::Dht11 | SensorKind::Dht12 => 20_000,
            // datasheet asks for at least 1 ms
            SensorKind::Dht21 | SensorKind::Dht22 => 1_100,
        }
    }

    /// Relative humidity in percent, in tenths.
    pub(crate) fn humidity_tenths(self, data: [u8; 4]) -> i32 {
        let [hum_hi, hum_lo, _, _] = data;
        match self {
            SensorKind::Dht11 | SensorKind::Dht12 => hum_hi as i32 * 10 + hum_lo as i32,
            SensorKind::Dht21 | SensorKind::Dht22 => u16::from_be_bytes([hum_hi, hum_lo]) as i32,
        }
    }

    /// Temperature in degrees Celsius, in tenths.
    pub(crate) fn temperature_tenths(self, data: [u8; 4]) -> i32 {
        let [_, _, temp_hi, temp_lo] = data;
        match self {
            SensorKind::Dht11 => {
                let fraction = (temp_lo & 0x0F) as i32;
                if temp_lo & 0x80 != 0 {
                    (-1 - temp_hi as i32) * 10 + fraction
                } else {
                    temp_hi as i32 * 10 + fraction
                }
            }
            SensorKind::Dht12 => {
                let tenths = (temp_hi & 0x7F) as i32 * 10 + (temp_lo & 0x0F) as i32;
                if temp_hi & 0x80 != 0 { -tenths } else { tenths }
            }
            SensorKind::Dht21 | SensorKind::Dht22 => {
                let tenths = u16::from_be_bytes([temp_hi & 0x7F, temp_lo]) as i32;
                if temp_hi & 0x80 != 0 { -tenths } else { tenths }
            }
        }
    }
}

impl TryFrom<u8> for SensorKind {
    type Error = UnknownSensorKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(SensorKind::Dht11),
            12 => Ok(SensorKind::Dht12),
            21 => Ok(SensorKind::Dht21),
            22 => Ok(SensorKind::Dht22),
            other => Err(UnknownSensorKind(other)),
        }
    }
}

impl From<SensorKind> for u8 {
    fn from(kind: SensorKind) -> Self {
        kind.id()
    }
}
