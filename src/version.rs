//! Coarse major-version comparison.
//!
//! Versions are reduced to the integer formed by their leading numeric run,
//! so `"91.0.4472"` and `"91.5"` compare equal. Comparisons are tri-state:
//! `None` means the answer cannot be determined.

use std::cmp::Ordering;

/// Anything a version can be given as: version strings or plain numbers.
pub trait VersionLike {
    /// The leading integer of this version, or `None` when there is none.
    fn major(&self) -> Option<i128>;
}

impl VersionLike for str {
    fn major(&self) -> Option<i128> {
        leading_integer(self)
    }
}

impl VersionLike for String {
    fn major(&self) -> Option<i128> {
        leading_integer(self)
    }
}

impl<T: VersionLike + ?Sized> VersionLike for &T {
    fn major(&self) -> Option<i128> {
        (**self).major()
    }
}

macro_rules! impl_version_like_int {
    ($($t:ty),*) => {
        $(
            impl VersionLike for $t {
                fn major(&self) -> Option<i128> {
                    Some(*self as i128)
                }
            }
        )*
    };
}

impl_version_like_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl VersionLike for f64 {
    fn major(&self) -> Option<i128> {
        self.is_finite().then(|| self.trunc() as i128)
    }
}

impl VersionLike for f32 {
    fn major(&self) -> Option<i128> {
        f64::from(*self).major()
    }
}

/// Truncating integer parse: optional leading whitespace and sign, then the
/// longest run of ASCII digits. Anything after the run is ignored. Runs too
/// long for `i128` saturate.
pub fn leading_integer(version: &str) -> Option<i128> {
    let version = version.trim_start();
    let (negative, rest) = match version.as_bytes().first() {
        Some(b'-') => (true, &version[1..]),
        Some(b'+') => (false, &version[1..]),
        _ => (false, version),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    // The run is all digits, so parsing can only fail on overflow.
    let value = rest[..end].parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -value } else { value })
}

/// Compares version arguments against one known (or unknown) version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionComparator<'a> {
    current: Option<&'a str>,
}

impl<'a> VersionComparator<'a> {
    /// An absent or empty `current` version makes every comparison `None`.
    pub fn new(current: Option<&'a str>) -> Self {
        Self {
            current: current.filter(|v| !v.is_empty()),
        }
    }

    pub fn compare(&self, other: impl VersionLike) -> Option<Ordering> {
        let current = self.current?.major()?;
        Some(current.cmp(&other.major()?))
    }

    pub fn greater_than(&self, other: impl VersionLike) -> Option<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn less_than(&self, other: impl VersionLike) -> Option<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn equal_to(&self, other: impl VersionLike) -> Option<bool> {
        self.compare(other).map(Ordering::is_eq)
    }
}
