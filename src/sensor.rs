//! Sentinel-based facade over the DHT driver.
//!
//! Each read returns a plain `f32`, with `f32::NAN` standing for a failed
//! acquisition. Callers check a pair with [`is_valid`] and decide themselves
//! whether to discard, read again, or substitute a default.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{
    dht::{Dht, Reading},
    error::{DhtError, UnknownSensorKind},
    kind::SensorKind,
};

/// Returns `true` iff neither value is the NaN sentinel.
pub fn is_valid(humidity: f32, temperature: f32) -> bool {
    !humidity.is_nan() && !temperature.is_nan()
}

/// A single DHT sensor bound to one data pin and one sensor model.
///
/// The facade performs no I/O until [`begin`](Self::begin) or a read is
/// called. Reading before `begin` is allowed; the transaction simply starts
/// from whatever state the line is in.
pub struct DhtSensor<PIN, D> {
    dht: Dht<PIN, D>,
}

impl<PIN, DELAY, E> DhtSensor<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a facade bound to one data pin and one sensor model.
    ///
    /// No I/O is performed until [`begin`](Self::begin) or a read.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the sensor data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `kind` - The sensor model on the line.
    pub fn new(pin: PIN, delay: DELAY, kind: SensorKind) -> Self {
        DhtSensor {
            dht: Dht::new(pin, delay, kind),
        }
    }

    /// Like [`new`](Self::new), taking the numeric type identifier
    /// (`11`, `12`, `21` or `22`).
    pub fn with_type_id(pin: PIN, delay: DELAY, type_id: u8) -> Result<Self, UnknownSensorKind> {
        let kind = SensorKind::try_from(type_id)?;
        Ok(Self::new(pin, delay, kind))
    }

    /// Sensor model this facade was constructed for.
    pub fn kind(&self) -> SensorKind {
        self.dht.kind()
    }

    /// One-time setup: puts the data line in its idle state.
    ///
    /// Never reports failure. A pin error is logged and dropped; use
    /// [`try_begin`](Self::try_begin) to observe it.
    pub fn begin(&mut self) {
        if let Err(err) = self.try_begin() {
            warn!("DHT{} begin failed: {}", self.kind().id(), err.reason());
        }
    }

    /// Same as [`begin`](Self::begin), but returns the pin error instead of
    /// dropping it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the line was released.
    /// * `Err(DhtError::PinError)` if the pin could not be driven high.
    pub fn try_begin(&mut self) -> Result<(), DhtError<E>> {
        self.dht.begin()
    }

    /// Relative humidity in percent, or NaN if the transaction failed.
    ///
    /// Blocks for one full transaction. No retry.
    ///
    /// The sensor ignores start requests that come sooner than its minimum
    /// sampling interval (about 1 s for DHT11, 2 s for DHT22) after the
    /// previous one, and such a read yields NaN. Pace calls accordingly, or
    /// use [`read`](Self::read) to get both channels from one transaction.
    pub fn humidity(&mut self) -> f32 {
        self.sample().map_or(f32::NAN, |r| r.relative_humidity)
    }

    /// Temperature in degrees Celsius, or NaN if the transaction failed.
    ///
    /// Runs its own transaction, independent of [`humidity`](Self::humidity),
    /// so the same minimum sampling interval applies between the two calls.
    pub fn temperature(&mut self) -> f32 {
        self.sample().map_or(f32::NAN, |r| r.temperature)
    }

    /// Reads both channels in one transaction, keeping the failure reason.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.dht.read()
    }

    /// Same as the free function [`is_valid`].
    pub fn is_valid(humidity: f32, temperature: f32) -> bool {
        is_valid(humidity, temperature)
    }

    /// Consumes the facade, handing back the pin and delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        self.dht.release()
    }

    fn sample(&mut self) -> Option<Reading> {
        match self.dht.read() {
            Ok(reading) => {
                debug!(
                    "DHT{}: {} %RH, {} C",
                    self.kind().id(),
                    reading.relative_humidity,
                    reading.temperature
                );
                Some(reading)
            }
            Err(err) => {
                warn!("DHT{} read failed: {}", self.kind().id(), err.reason());
                None
            }
        }
    }
}
