//! DHT Sensor Facade and Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11, DHT12, DHT21
//! (AM2301) and DHT22 (AM2302) temperature and humidity sensors, built on top
//! of the [`embedded-hal`] traits, plus a small facade in the style of the
//! Arduino DHT wrappers: `begin`, read humidity, read temperature, with NaN
//! marking a failed read.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`
//!
//! # Example
//!
//! ```ignore
//! let mut sensor = DhtSensor::new(pin, delay, SensorKind::Dht22);
//! sensor.begin();
//!
//! let humidity = sensor.humidity();
//! let temperature = sensor.temperature();
//! if is_valid(humidity, temperature) {
//!     // use the pair
//! }
//! ```
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and logs failed reads
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod dht;
pub mod error;
pub mod kind;
pub mod sensor;

pub use dht::{Dht, Reading};
pub use error::{DhtError, UnknownSensorKind};
pub use kind::SensorKind;
pub use sensor::{DhtSensor, is_valid};
