pub mod line_reader;

pub use line_reader::{lines_from_str, read_lines};
