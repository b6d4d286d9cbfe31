//! Menu data providers for `plate-core`'s [`MenuProvider`](plate_core::MenuProvider)
//! interface: built-in sample data and TOML menu files.

pub mod error;
pub mod file;
pub mod sample;

pub use error::MenuError;
pub use file::FileMenu;
pub use sample::SampleMenu;
