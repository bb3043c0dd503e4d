//! Output encoders (terminal text).

mod terminal;

pub use terminal::{Marks, TerminalEncoder};
