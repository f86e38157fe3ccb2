pub mod harvest;
pub mod report;

pub use harvest::*;
pub use report::*;
