// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod gallery;
pub mod gui;
pub mod loader;
pub mod modal;
pub mod net;
pub mod showroom;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::record::Record;
pub use error::LoadError;
