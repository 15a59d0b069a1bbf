//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{
    blcfill, blci, blcs, blsc, blsfill, blsi, clear_bits, clear_lowest_set_bit, count_bits_set,
    fill_from_lowest_clear_bit, fill_from_lowest_set_bit, isolate_lowest_clear_bit,
    isolate_lowest_set_bit, leading_zeroes_count, lzcnt, mask, popcnt, set_bits,
    set_lowest_clear_bit, trailing_zeroes_count, tzcnt, UnsignedBits,
};
