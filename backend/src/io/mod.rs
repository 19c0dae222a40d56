//! # IO Module
//!
//! Interface layer exposing the domain to the outside world. Currently only
//! the JSON REST API.

pub mod rest;

pub use rest::*;
