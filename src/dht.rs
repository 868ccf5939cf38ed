use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{error::DhtError, kind::SensorKind};

/// Maximum time to wait (in microseconds) for the pin to change state.
///
/// Used to detect timeouts when waiting for the sensor to respond.
const TIMEOUT_US: u8 = 100;

/// Time the MCU keeps the line released after the start request,
/// before it starts listening for the sensor's response.
const RELEASE_US: u32 = 40;

/// Delay after the rising edge of a data bit before sampling it.
///
/// A `0` bit stays high for ~27us, a `1` bit for ~70us.
const BIT_SAMPLE_US: u32 = 35;

/// Driver for the DHT family of temperature and humidity sensors.
pub struct Dht<PIN, D> {
    pin: PIN,
    delay: D,
    kind: SensorKind,
}

/// Reading returned by a DHT sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Returns `true` if neither channel holds the NaN sentinel.
    pub fn is_valid(&self) -> bool {
        crate::sensor::is_valid(self.relative_humidity, self.temperature)
    }
}

impl<PIN, DELAY, E> Dht<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT driver.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the sensor data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `kind` - The sensor model on the line; selects start timing and decoding.
    pub fn new(pin: PIN, delay: DELAY, kind: SensorKind) -> Self {
        Dht { pin, delay, kind }
    }

    /// Sensor model this driver was configured for.
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Releases the data line to its idle (high) state.
    ///
    /// The sensor needs the line idle before the first start request.
    pub fn begin(&mut self) -> Result<(), DhtError<E>> {
        self.pin.set_high()?;
        Ok(())
    }

    /// Reads a temperature and humidity measurement from the sensor.
    ///
    /// This method performs the complete communication sequence:
    /// sending a start signal, waiting for the sensor's response,
    /// reading 5 bytes, validating the checksum, and decoding the result.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if a communication or checksum error occurs.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.start()?;

        let mut data = [0; 4];

        for b in data.iter_mut() {
            *b = self.read_byte()?;
        }

        let checksum = self.read_byte()?;
        if data.iter().fold(0u8, |sum, v| sum.wrapping_add(*v)) != checksum {
            Err(DhtError::ChecksumMismatch)
        } else {
            Ok(self.parse_data(data))
        }
    }

    /// Gives back the pin and delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Converts the 4-byte data into a `Reading` according to the sensor model.
    fn parse_data(&self, data: [u8; 4]) -> Reading {
        Reading {
            temperature: self.kind.temperature_tenths(data) as f32 / 10.0,
            relative_humidity: self.kind.humidity_tenths(data) as f32 / 10.0,
        }
    }

    /// Sends the start signal and waits for the sensor's response.
    ///
    /// The line is pulled low for the model's start duration, then released,
    /// followed by waiting for the sensor's 80us low and 80us high response.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        // MCU sends start request
        self.pin.set_low()?;
        self.delay.delay_us(self.kind.start_low_us());
        self.pin.set_high()?;
        self.delay.delay_us(RELEASE_US);

        // Waiting for sensor response
        self.wait_for_low()?; // 80us
        self.wait_for_high()?; // 80us
        Ok(())
    }

    /// Reads one byte (8 bits) from the sensor, MSB first.
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut byte: u8 = 0;

        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            if self.read_bit()? {
                byte |= bit_mask;
            }
        }

        Ok(byte)
    }

    /// Reads a single bit from the sensor.
    ///
    /// The bit is determined by the duration of the high signal
    /// after the sensor pulls the line low.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        // ~50us low preamble
        self.wait_for_low()?;
        self.wait_for_high()?;

        self.delay.delay_us(BIT_SAMPLE_US);

        // Still high after the sample delay means a 1
        let bit_is_one = self.pin.is_high()?;
        self.wait_for_low()?;

        Ok(bit_is_one)
    }

    fn wait_for_high(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.delay, || self.pin.is_high())
    }

    fn wait_for_low(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.delay, || self.pin.is_low())
    }

    /// Polls `condition` once per microsecond until it holds.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` after `TIMEOUT_US` unsuccessful polls.
    fn wait_for_state<F>(delay: &mut DELAY, mut condition: F) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        for _ in 0..TIMEOUT_US {
            if condition()? {
                return Ok(());
            }
            delay.delay_us(1);
        }
        Err(DhtError::Timeout)
    }
}
