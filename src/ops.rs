//! The bit-manipulation operations and their hardware mnemonic aliases.

use crate::traits::UnsignedBits;

/// Creates a bitmask with `bits` contiguous set bits starting at bit index
/// `shift`.
///
/// The mask is produced at the widest unsigned width; narrow it with
/// [`UnsignedBits::from_wide`] or an `as` cast. `mask(0, 0)` is zero and
/// `mask(128, 0)` is all ones.
///
/// The caller must ensure `bits + shift <= 128`. The precondition is
/// debug-asserted; release builds perform no check and the result for
/// out-of-range arguments is unspecified.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::mask(2, 2), 0b1100);
/// assert_eq!(bitmanip::mask(0, 7), 0);
/// assert_eq!(bitmanip::mask(128, 0), u128::MAX);
/// ```
#[inline(always)]
#[must_use]
pub const fn mask(bits: u32, shift: u32) -> u128 {
    debug_assert!(bits as u64 + shift as u64 <= u128::BITS as u64);
    if bits >= u128::BITS {
        u128::MAX << shift
    } else {
        ((1u128 << bits) - 1) << shift
    }
}

/// Returns `value` with the `bits` positions starting at bit index `shift`
/// forced to 1. Bits outside that range are unchanged.
///
/// The caller must ensure `bits + shift` does not exceed the width of `T`;
/// see [`mask`].
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::set_bits(0b1100u8, 2, 0), 0b1111);
/// ```
#[inline(always)]
#[must_use]
pub fn set_bits<T: UnsignedBits>(value: T, bits: u32, shift: u32) -> T {
    value | T::from_wide(mask(bits, shift))
}

/// Returns `value` with the `bits` positions starting at bit index `shift`
/// forced to 0. Bits outside that range are unchanged.
///
/// The caller must ensure `bits + shift` does not exceed the width of `T`;
/// see [`mask`].
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::clear_bits(0b1111u8, 2, 1), 0b1001);
/// ```
#[inline(always)]
#[must_use]
pub fn clear_bits<T: UnsignedBits>(value: T, bits: u32, shift: u32) -> T {
    value & !T::from_wide(mask(bits, shift))
}

/// Returns the number of set bits in `value`.
///
/// Zero has no set bits; the all-ones value has [`UnsignedBits::BITS`] of
/// them.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::count_bits_set(0b11u8), 2);
/// assert_eq!(bitmanip::count_bits_set(0u64), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn count_bits_set<T: UnsignedBits>(value: T) -> u32 {
    value.count_ones()
}

/// Alias of [`count_bits_set`].
#[inline(always)]
#[must_use]
pub fn popcnt<T: UnsignedBits>(value: T) -> u32 {
    count_bits_set(value)
}

/// Returns the number of consecutive clear bits in `value`, starting from the
/// most significant bit.
///
/// Unlike the bare hardware instruction, this is a total function: a zero
/// input returns the full bit width.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::leading_zeroes_count(0b0000_1111u8), 4);
/// assert_eq!(bitmanip::leading_zeroes_count(0u16), 16);
/// ```
#[inline(always)]
#[must_use]
pub fn leading_zeroes_count<T: UnsignedBits>(value: T) -> u32 {
    value.leading_zeros()
}

/// Alias of [`leading_zeroes_count`].
#[inline(always)]
#[must_use]
pub fn lzcnt<T: UnsignedBits>(value: T) -> u32 {
    leading_zeroes_count(value)
}

/// Returns the number of consecutive clear bits in `value`, starting from the
/// least significant bit.
///
/// Unlike the bare hardware instruction, this is a total function: a zero
/// input returns the full bit width.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::trailing_zeroes_count(0b1100u8), 2);
/// assert_eq!(bitmanip::trailing_zeroes_count(0u16), 16);
/// ```
#[inline(always)]
#[must_use]
pub fn trailing_zeroes_count<T: UnsignedBits>(value: T) -> u32 {
    value.trailing_zeros()
}

/// Alias of [`trailing_zeroes_count`].
#[inline(always)]
#[must_use]
pub fn tzcnt<T: UnsignedBits>(value: T) -> u32 {
    trailing_zeroes_count(value)
}

/// Isolates the lowest set bit in `value`.
///
/// The result has exactly one bit set, the lowest set bit of `value`, or is
/// zero if `value` is zero. Computed as `value & value.wrapping_neg()`.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::isolate_lowest_set_bit(0b1110_0011u8), 0b0000_0001);
/// assert_eq!(bitmanip::isolate_lowest_set_bit(0u8), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn isolate_lowest_set_bit<T: UnsignedBits>(value: T) -> T {
    value & value.wrapping_neg()
}

/// Alias of [`isolate_lowest_set_bit`].
#[inline(always)]
#[must_use]
pub fn blsi<T: UnsignedBits>(value: T) -> T {
    isolate_lowest_set_bit(value)
}

/// Isolates the lowest clear bit in `value`.
///
/// Computed as `value | !(value + 1)` under wrapping arithmetic: every bit is
/// set except the lowest clear bit of `value`. An all-ones input stays
/// all ones.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::isolate_lowest_clear_bit(0b1110_0011u8), 0b1111_1011);
/// ```
#[inline(always)]
#[must_use]
pub fn isolate_lowest_clear_bit<T: UnsignedBits>(value: T) -> T {
    value | !value.wrapping_add(&T::ONE)
}

/// Alias of [`isolate_lowest_clear_bit`].
#[inline(always)]
#[must_use]
pub fn blci<T: UnsignedBits>(value: T) -> T {
    isolate_lowest_clear_bit(value)
}

/// Clears the lowest set bit in `value`.
///
/// Computed as `value & (value - 1)` under wrapping arithmetic; a zero input
/// stays zero.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::clear_lowest_set_bit(0b1110_0010u8), 0b1110_0000);
/// assert_eq!(bitmanip::clear_lowest_set_bit(0u8), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn clear_lowest_set_bit<T: UnsignedBits>(value: T) -> T {
    value & value.wrapping_sub(&T::ONE)
}

/// Alias of [`clear_lowest_set_bit`].
#[inline(always)]
#[must_use]
pub fn blsc<T: UnsignedBits>(value: T) -> T {
    clear_lowest_set_bit(value)
}

/// Sets the lowest clear bit in `value`.
///
/// Computed as `value | (value + 1)` under wrapping arithmetic; an all-ones
/// input stays all ones.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::set_lowest_clear_bit(0b1110_0011u8), 0b1110_0111);
/// assert_eq!(bitmanip::set_lowest_clear_bit(u8::MAX), u8::MAX);
/// ```
#[inline(always)]
#[must_use]
pub fn set_lowest_clear_bit<T: UnsignedBits>(value: T) -> T {
    value | value.wrapping_add(&T::ONE)
}

/// Alias of [`set_lowest_clear_bit`].
#[inline(always)]
#[must_use]
pub fn blcs<T: UnsignedBits>(value: T) -> T {
    set_lowest_clear_bit(value)
}

/// Sets every bit below and including the lowest set bit in `value`.
///
/// Computed as `value | (value - 1)`; a zero input is returned unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::fill_from_lowest_set_bit(0b0111_0100u8), 0b0111_0111);
/// assert_eq!(bitmanip::fill_from_lowest_set_bit(0u8), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn fill_from_lowest_set_bit<T: UnsignedBits>(value: T) -> T {
    if value == T::ZERO {
        return value;
    }
    value | value.wrapping_sub(&T::ONE)
}

/// Alias of [`fill_from_lowest_set_bit`].
#[inline(always)]
#[must_use]
pub fn blsfill<T: UnsignedBits>(value: T) -> T {
    fill_from_lowest_set_bit(value)
}

/// Clears every bit below and including the lowest clear bit in `value`.
///
/// Computed as `value & (value + 1)`; an all-ones input is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(bitmanip::fill_from_lowest_clear_bit(0b1110_1011u8), 0b1110_1000);
/// assert_eq!(bitmanip::fill_from_lowest_clear_bit(u8::MAX), u8::MAX);
/// ```
#[inline(always)]
#[must_use]
pub fn fill_from_lowest_clear_bit<T: UnsignedBits>(value: T) -> T {
    if value == T::MAX {
        return value;
    }
    value & value.wrapping_add(&T::ONE)
}

/// Alias of [`fill_from_lowest_clear_bit`].
#[inline(always)]
#[must_use]
pub fn blcfill<T: UnsignedBits>(value: T) -> T {
    fill_from_lowest_clear_bit(value)
}
