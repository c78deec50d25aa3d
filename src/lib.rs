//! HTTP emulator of the CPN order service.
//!
//! Answers order queries with synthetic orders built from a static coupon
//! catalog, after a random delay.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod server;
pub mod time_format;
