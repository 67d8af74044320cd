pub mod libs;
pub mod structs;
