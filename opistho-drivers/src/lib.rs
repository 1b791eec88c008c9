//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the sensor traits
//! defined in opistho-core:
//!
//! - DHT11 single-wire temperature/humidity transducer
//! - HC-SR04 ultrasonic ranger
//!
//! Both drivers are written against `embedded-hal` 1.0 pin and delay
//! traits and are platform-agnostic.

#![no_std]
#![deny(unsafe_code)]

pub mod dht11;
pub mod hcsr04;

pub use dht11::Dht11;
pub use hcsr04::Hcsr04;
