pub mod diagnostic;
pub mod table;

pub use diagnostic::{Diagnostic, Severity};
pub use table::{Cell, Table};
