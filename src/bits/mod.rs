pub mod reader;
pub use reader::{read_u16_be, read_u24_be, read_u32_be, read_u8};
