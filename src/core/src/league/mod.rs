pub mod league;
pub mod news;
pub mod result;
pub mod schedule;
pub mod table;

pub use league::*;
pub use news::*;
pub use result::*;
pub use schedule::*;
pub use table::*;
