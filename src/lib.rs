// src/lib.rs
//! Kernel version values and the packed `LINUX_VERSION_CODE` encoding used by
//! kernel-program loaders to gate version-dependent behaviour.
//!
//! ```
//! use kernel_version::{ErrorContext, KernelVersion, Result};
//!
//! fn minimum_kernel(setting: &str) -> Result<KernelVersion> {
//!     KernelVersion::parse(setting).with_context(|| format!("minimum kernel setting {setting:?}"))
//! }
//!
//! let min = minimum_kernel("5.10")?;
//! assert!(KernelVersion::from_code(0x04_13_00).less(min));
//!
//! let err = minimum_kernel("five").unwrap_err();
//! assert_eq!(err.to_string(), "minimum kernel setting \"five\": invalid version: five");
//! # Ok::<(), kernel_version::KernelVersionError>(())
//! ```

pub mod error;
pub mod value_objects;

pub use error::{ErrorContext, KernelVersionError, ParseResult, Result, VersionParseError};
pub use value_objects::{KernelVersion, MAGIC_KERNEL_VERSION, ParseMode, is_magic_code};
