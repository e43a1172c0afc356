pub mod narrator;

pub use narrator::*;
