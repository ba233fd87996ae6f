//! Upload write mode types

mod mode;
mod revision;


pub use mode::WriteMode;
pub use revision::Revision;
