// src/input/mod.rs
pub mod file_type;
pub mod reader;

#[allow(unused_imports)]
pub use file_type::FileType;
pub use reader::read_lines;
