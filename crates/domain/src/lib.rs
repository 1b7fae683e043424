#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod name;
mod routine;
mod service;

pub use error::*;
pub use exercise::*;
pub use name::*;
pub use routine::*;
pub use service::*;
