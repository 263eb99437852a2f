mod farm;
mod language;

pub use farm::*;
pub use language::*;
