#![warn(clippy::disallowed_types)]

pub use error::Error;
pub use truth_table::TruthTable;

pub mod combinations;
pub mod eval;
pub mod expr;
pub mod expr_io;
pub mod solver;

mod truth_table;

mod error;
