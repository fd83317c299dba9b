use crate::error::{Error, Result};

/// Sum of two 32-bit integers. Wraps on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Like [`add`], but reports overflow instead of wrapping.
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or_else(|| Error::overflow(a, b))
}
