//! Procedural robot-face app icon: drawn from shape primitives, exported as
//! PNG and multi-size ICO.

pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod icon;
pub mod layout;
pub mod logger;
pub mod shape;

pub use config::OutputConfig;
pub use error::IconError;
pub use generate::{generate, run, run_main};
pub use icon::{Canvas, compose};
pub use layout::Design;
