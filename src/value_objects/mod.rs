// src/value_objects/mod.rs
pub mod kernel_version;
pub mod parse_mode;

pub use kernel_version::{KernelVersion, MAGIC_KERNEL_VERSION, is_magic_code};
pub use parse_mode::ParseMode;
