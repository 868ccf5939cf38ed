use core::fmt;

/// Possible errors from the DHT driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out waiting for a pin state change.
    Timeout,
    /// Checksum did not match the received data.
    ChecksumMismatch,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> DhtError<E> {
    /// Short description of the failure, usable without `E: Format`.
    pub fn reason(&self) -> &'static str {
        match self {
            DhtError::Timeout => "timeout",
            DhtError::ChecksumMismatch => "checksum mismatch",
            DhtError::PinError(_) => "pin error",
        }
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

/// The sensor type identifier is not one the driver knows how to talk to.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownSensorKind(pub u8);

impl fmt::Display for UnknownSensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown DHT sensor type {}", self.0)
    }
}

impl core::error::Error for UnknownSensorKind {}
