#![warn(clippy::pedantic)]

pub mod in_memory;
