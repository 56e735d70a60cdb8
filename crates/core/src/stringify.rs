// crates/core/src/stringify.rs
//! Compile-time rendering of integers to decimal text.
//!
//! [`Decimal`] is a `const fn` formatter, so an integer constant can be turned
//! into a `&'static str` inside a `const` item. [`stringify_const!`] wraps the
//! pattern and refuses anything that is not a non-negative integer:
//!
//! ```compile_fail
//! const TEXT: &str = elf2cfetbl_version_core::stringify_const!("36");
//! println!("{TEXT}");
//! ```
//!
//! ```compile_fail
//! const TEXT: &str = elf2cfetbl_version_core::stringify_const!(-1i32);
//! println!("{TEXT}");
//! ```
//!
//! ```
//! const BUILD_NUMBER: u32 = 36;
//! const TEXT: &str = elf2cfetbl_version_core::stringify_const!(BUILD_NUMBER);
//! assert_eq!(TEXT, "36");
//! ```

/// Width of `u64::MAX` in decimal.
pub const MAX_DECIMAL_LEN: usize = 20;

/// Decimal digits of an integer, rendered into an inline buffer.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    buf: [u8; MAX_DECIMAL_LEN],
    start: usize,
}

impl Decimal {
    pub const fn new(value: u64) -> Self {
        let mut buf = [b'0'; MAX_DECIMAL_LEN];
        let mut start = MAX_DECIMAL_LEN;
        let mut rest = value;
        loop {
            start -= 1;
            buf[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        Self { buf, start }
    }

    pub const fn as_str(&self) -> &str {
        let (_, digits) = self.buf.split_at(self.start);
        match core::str::from_utf8(digits) {
            Ok(text) => text,
            Err(_) => panic!("decimal buffer holds only ASCII digits"),
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        MAX_DECIMAL_LEN - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of decimal digits needed for `value`.
pub const fn decimal_len(value: u64) -> usize {
    Decimal::new(value).len()
}

/// Renders a non-negative integer constant as a `&'static str` at compile time.
///
/// The argument must be a constant expression of a primitive integer type;
/// unsuffixed literals need a suffix. Anything else fails the build.
#[macro_export]
macro_rules! stringify_const {
    ($value:expr) => {{
        const DIGITS: &$crate::stringify::Decimal = &{
            // `count_ones` only exists on primitive integers.
            let _ = ($value).count_ones();
            assert!(
                ($value) as u128 <= u64::MAX as u128,
                "stringify_const! expects a non-negative integer"
            );
            $crate::stringify::Decimal::new(($value) as u64)
        };
        DIGITS.as_str()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_edges() {
        assert_eq!(Decimal::new(0).as_str(), "0");
        assert_eq!(Decimal::new(9).as_str(), "9");
        assert_eq!(Decimal::new(10).as_str(), "10");
        assert_eq!(Decimal::new(u64::MAX).as_str(), u64::MAX.to_string());
        assert_eq!(Decimal::new(u64::MAX).len(), MAX_DECIMAL_LEN);
    }

    #[test]
    fn macro_accepts_every_unsigned_width() {
        const A: &str = stringify_const!(255u8);
        const B: &str = stringify_const!(65_535u16);
        const C: &str = stringify_const!(36u32);
        const D: &str = stringify_const!(0u64);
        const E: &str = stringify_const!(7usize);
        assert_eq!([A, B, C, D, E], ["255", "65535", "36", "0", "7"]);
    }

    #[test]
    fn macro_accepts_non_negative_signed() {
        const POSITIVE: i32 = 42;
        const TEXT: &str = stringify_const!(POSITIVE);
        assert_eq!(TEXT, "42");
    }

    #[test]
    fn decimal_len_matches_formatter() {
        for value in [0u64, 1, 9, 10, 99, 100, 36, 255, 1_000_000, u64::MAX] {
            assert_eq!(decimal_len(value), value.to_string().len(), "value {value}");
        }
    }

    #[test]
    fn rendering_twice_is_identical() {
        let first = Decimal::new(411);
        let second = Decimal::new(411);
        assert_eq!(first.as_str(), second.as_str());
    }
}
