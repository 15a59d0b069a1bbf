use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingNeg, WrappingSub};

use crate::sealed::Sealed;

/// Primitive unsigned integer types the bit operations are defined over.
///
/// This trait is implemented for [`u8`], [`u16`], [`u32`], [`u64`], [`u128`]
/// and [`usize`], and is sealed: it cannot be implemented outside this crate.
/// Signed and non-integer types are rejected at compile time.
///
/// The wrapping-arithmetic bounds matter: the lowest-bit operations rely on
/// arithmetic being well-defined modulo `2^BITS`, e.g.
/// [`isolate_lowest_set_bit`](crate::isolate_lowest_set_bit) computes
/// `value & value.wrapping_neg()`.
pub trait UnsignedBits:
    Copy
    + Debug
    + Display
    + Hash
    + Eq
    + Ord
    + PrimInt
    + Unsigned
    + WrappingAdd
    + WrappingSub
    + WrappingNeg
    + Sealed
{
    /// The bit width of this type.
    const BITS: u32;

    /// The value `0` represented in this type.
    const ZERO: Self;
    /// The value `1` represented in this type.
    const ONE: Self;
    /// The all-ones value of this type.
    const MAX: Self;

    /// Creates a value by truncating a [`u128`] to the least significant
    /// `BITS` bits.
    fn from_wide(value: u128) -> Self;
}

macro_rules! impl_unsigned_bits {
    ($($primitive:ident),*) => {
        $(
            impl Sealed for $primitive {}

            impl UnsignedBits for $primitive {
                const BITS: u32 = <$primitive>::BITS;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$primitive>::MAX;

                #[inline(always)]
                fn from_wide(value: u128) -> Self {
                    value as $primitive
                }
            }
        )*
    };
}

impl_unsigned_bits!(u8, u16, u32, u64, u128, usize);
