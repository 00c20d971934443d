//! Numeric coercion for sequence analysis
//!
//! The analyzer does all of its difference and modulo arithmetic on a
//! single integer representation rather than on the caller's element
//! type. `Numeric` is that bridge: a cheap, fallible conversion to and
//! from `i64`. Failure to convert is how an unsupported element value
//! is rejected before any analysis starts.

/// Conversion between an element type and a 64-bit signed integer.
pub trait Numeric: Copy + PartialOrd {
    /// Coerce to `i64`, or `None` when the value has no exact
    /// representation (out of range, or fractional for floats).
    fn to_i64(self) -> Option<i64>;

    /// Recover a value of this type from an `i64`, or `None` when the
    /// integer does not fit.
    fn from_i64(value: i64) -> Option<Self>;
}

macro_rules! numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_i64(self) -> Option<i64> {
                    i64::try_from(self).ok()
                }

                fn from_i64(value: i64) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for f64 {
    fn to_i64(self) -> Option<i64> {
        // Exactly-integral values only; NaN and infinities fail here.
        // The upper bound is strict: `i64::MAX as f64` rounds up to 2^63,
        // which is itself out of range.
        if self.fract() == 0.0 && self >= i64::MIN as f64 && self < i64::MAX as f64 {
            Some(self as i64)
        } else {
            None
        }
    }

    fn from_i64(value: i64) -> Option<Self> {
        Some(value as f64)
    }
}

impl Numeric for f32 {
    fn to_i64(self) -> Option<i64> {
        (self as f64).to_i64()
    }

    fn from_i64(value: i64) -> Option<Self> {
        Some(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_round_trip() {
        assert_eq!(42u8.to_i64(), Some(42));
        assert_eq!(i64::from_i64(-7), Some(-7));
        assert_eq!(u32::from_i64(-1), None);
    }

    #[test]
    fn test_u64_out_of_range() {
        assert_eq!(u64::MAX.to_i64(), None);
        assert_eq!((i64::MAX as u64).to_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_float_integral_only() {
        assert_eq!(3.0f64.to_i64(), Some(3));
        assert_eq!(3.5f64.to_i64(), None);
        assert_eq!(f64::NAN.to_i64(), None);
        assert_eq!(f64::INFINITY.to_i64(), None);
        assert_eq!(2.0f32.to_i64(), Some(2));
    }
}
