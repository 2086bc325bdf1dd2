pub mod cursor;
pub mod header;

pub use cursor::WireCursor;
