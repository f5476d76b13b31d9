/// Driver module - the native graphics API seam and its handle types

pub mod driver;

pub use driver::*;

// Call-recording driver for unit tests (no GPU required)
#[cfg(test)]
pub mod mock_driver;
