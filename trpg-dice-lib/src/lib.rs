pub mod check;
pub mod dice;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod limits;
pub mod parser;
pub mod roll;
mod rules;
pub mod solver;
mod tokenizer;

pub use dice::KeepPolicy;
pub use dice::RollSpec;
pub use error::Error;
pub use limits::Limits;
pub use parser::parse_expression;
