pub mod league;

pub use league::*;
