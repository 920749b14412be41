//! Fixed-width scalar traits for stored entries.
//!
//! [`Element`] covers everything a container stores verbatim (values,
//! labels, weights, session ids) and knows its little-endian encoding.
//! [`Index`] narrows that to the unsigned integer types usable as feature
//! or field identifiers, and provides the checked conversion used when a
//! block of one index type is merged into a container of another.

use std::fmt;
use std::hash::Hash;

/// Default payload type for values, labels and weights.
///
/// Containers take the value type as a generic parameter defaulting to
/// `Real`; pick `f64` or an integer type explicitly when needed.
pub type Real = f32;

/// A fixed-width scalar with a little-endian byte encoding.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Append the little-endian encoding of `self` to `out`.
    fn encode_le(self, out: &mut Vec<u8>);

    /// Decode from exactly [`SIZE`](Element::SIZE) little-endian bytes.
    ///
    /// Returns `None` if `bytes` has any other length.
    fn decode_le(bytes: &[u8]) -> Option<Self>;
}

/// An unsigned integer type usable as a feature or field identifier.
pub trait Index: Element + Ord + Hash + fmt::Display {
    /// Largest representable identifier, widened to `u64`.
    const MAX: u64;

    /// Widen to `u64`. Never loses information.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, returning `None` if `v > Self::MAX`.
    fn from_u64(v: u64) -> Option<Self>;

    /// Convert an identifier of another index type, range checked.
    ///
    /// Returns the widened source value on failure so callers can report it.
    fn convert_from<J: Index>(src: J) -> Result<Self, u64> {
        let wide = src.to_u64();
        Self::from_u64(wide).ok_or(wide)
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                #[inline]
                fn encode_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn decode_le(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_le_bytes)
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

macro_rules! impl_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl Index for $t {
                const MAX: u64 = <$t>::MAX as u64;

                #[inline]
                fn to_u64(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                fn from_u64(v: u64) -> Option<Self> {
                    <$t>::try_from(v).ok()
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64);
