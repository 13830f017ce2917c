//! API route definitions
//!
//! REST endpoints for the product catalog plus health probes.

pub mod health;
pub mod products;
