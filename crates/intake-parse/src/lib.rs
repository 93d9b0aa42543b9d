pub mod parser;
pub mod template;

pub use parser::{diagnostics, validate};
pub use template::{blank, render};
