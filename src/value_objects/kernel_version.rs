// src/value_objects/kernel_version.rs
use std::{str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ParseMode;
use crate::error::{ParseResult, VersionParseError};

/// Packed version code telling a loader to substitute the running kernel's
/// `LINUX_VERSION_CODE` before accepting a program. Shared with BCC, gobpf and RedSift.
///
/// This is a raw code, not a version: check for it before calling [`KernelVersion::from_code`].
pub const MAGIC_KERNEL_VERSION: u32 = 0xFFFF_FFFE;

/// Returns true when `code` is the substitution sentinel.
#[inline]
pub const fn is_magic_code(code: u32) -> bool {
    code == MAGIC_KERNEL_VERSION
}

/// Highest sublevel the kernel's `KERNEL_VERSION` macro keeps (kbuild clamps 4.4.x and 4.9.x).
const MAX_SUBLEVEL: u16 = 255;

/// A kernel version in the form `major.minor.patch`.
///
/// Each field is an 8-bit kernel component widened to 16 bits. The all-zero value
/// means "unspecified" rather than kernel 0.0.0. A missing patch and an explicit
/// patch of 0 are the same value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct KernelVersion {
    major: u16,
    minor: u16,
    patch: u16,
}

impl KernelVersion {
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self { major, minor, patch }
    }

    #[inline]
    pub const fn major(self) -> u16 {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> u16 {
        self.minor
    }

    #[inline]
    pub const fn patch(self) -> u16 {
        self.patch
    }

    /// Parses `"major.minor.patch"` or `"major.minor"` using [`ParseMode::Lenient`].
    pub fn parse(text: &str) -> ParseResult<Self> {
        Self::parse_with(text, ParseMode::default())
    }

    pub fn parse_with(text: &str, mode: ParseMode) -> ParseResult<Self> {
        let fields = match mode {
            ParseMode::Lenient => scan_lenient(text),
            ParseMode::Strict => match_strict(text),
        };
        fields.map(|[major, minor, patch]| Self::new(major, minor, patch)).ok_or_else(|| {
            log::debug!("rejected kernel version {text:?} ({mode} parsing)");
            VersionParseError::invalid_format(text, mode)
        })
    }

    /// Unpacks a `LINUX_VERSION_CODE`. Only the low 8 bits of each lane are kept,
    /// so the top byte of `code` is ignored.
    #[inline]
    pub const fn from_code(code: u32) -> Self {
        Self::new(
            ((code >> 16) & 0xff) as u16,
            ((code >> 8) & 0xff) as u16,
            (code & 0xff) as u16,
        )
    }

    /// Packs the version the way the kernel's `KERNEL_VERSION` macro does.
    ///
    /// The patch is clamped to 255 first, then each field is truncated to its low
    /// 8 bits so an oversized field wraps instead of spilling into its neighbour.
    pub fn kernel_code(self) -> u32 {
        let sublevel = if self.patch > MAX_SUBLEVEL {
            log::trace!("clamping sublevel {} of {} to {MAX_SUBLEVEL}", self.patch, self);
            MAX_SUBLEVEL
        } else {
            self.patch
        };

        (u32::from(self.major & 0xff) << 16)
            | (u32::from(self.minor & 0xff) << 8)
            | u32::from(sublevel & 0xff)
    }

    /// Strict lexicographic comparison on (major, minor, patch).
    pub const fn less(self, other: Self) -> bool {
        if self.major != other.major {
            return self.major < other.major;
        }
        if self.minor != other.minor {
            return self.minor < other.minor;
        }
        self.patch < other.patch
    }

    #[inline]
    pub const fn is_unspecified(self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }
}

/// Scans up to three dot-separated numbers from the front of `text`.
///
/// Whitespace other than a line break may precede each number. Scanning stops at the
/// first field that is missing, non-numeric or wider than 16 bits; at least major and
/// minor are required.
fn scan_lenient(text: &str) -> Option<[u16; 3]> {
    let mut fields = [0u16; 3];
    let mut rest = text;
    let mut scanned = 0;

    for (idx, slot) in fields.iter_mut().enumerate() {
        if idx > 0 {
            match rest.strip_prefix('.') {
                Some(after_dot) => rest = after_dot,
                None => break,
            }
        }
        let number = skip_blanks(rest);
        let digits = number.len() - number.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        let Ok(value) = number[..digits].parse::<u16>() else {
            break;
        };
        *slot = value;
        rest = &number[digits..];
        scanned += 1;
    }

    (scanned >= 2).then_some(fields)
}

/// Skips leading whitespace, stopping at a line break (`\n` or `\r\n`).
fn skip_blanks(text: &str) -> &str {
    let mut rest = text;
    while !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => rest = &rest[c.len_utf8()..],
            _ => break,
        }
    }
    rest
}

fn match_strict(text: &str) -> Option<[u16; 3]> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?$").expect("version pattern is valid")
    });

    let caps = re.captures(text)?;
    let field = |idx: usize| -> Option<u16> {
        caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    Some([field(1)?, field(2)?, field(3)?])
}

impl FromStr for KernelVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for KernelVersion {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

impl From<KernelVersion> for u32 {
    fn from(version: KernelVersion) -> Self {
        version.kernel_code()
    }
}

impl From<(u16, u16, u16)> for KernelVersion {
    fn from((major, minor, patch): (u16, u16, u16)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<KernelVersion> for (u16, u16, u16) {
    fn from(version: KernelVersion) -> Self {
        (version.major, version.minor, version.patch)
    }
}

mod display {
    use std::fmt;

    use super::KernelVersion;

    impl fmt::Display for KernelVersion {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.patch == 0 {
                write!(f, "v{}.{}", self.major, self.minor)
            } else {
                write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
            }
        }
    }
}
