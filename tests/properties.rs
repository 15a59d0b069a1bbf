use bitmanip::prelude::*;
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    fn popcount_of_mask_is_bits(bits: u32, shift: u32) -> bool {
        let bits = bits % 65;
        let shift = shift % (65 - bits);
        count_bits_set(u64::from_wide(mask(bits, shift))) == bits
    }

    fn popcount_is_zero_iff_value_is_zero(value: u64) -> bool {
        (count_bits_set(value) == 0) == (value == 0)
    }

    fn clearing_lowest_set_bit_decrements_popcount(value: u64) -> TestResult {
        if value == 0 {
            return TestResult::discard();
        }
        TestResult::from_bool(
            count_bits_set(clear_lowest_set_bit(value)) == count_bits_set(value) - 1,
        )
    }

    fn isolated_lowest_set_bit_has_popcount_at_most_one(value: u64) -> bool {
        let isolated = isolate_lowest_set_bit(value);
        if value == 0 {
            isolated == 0
        } else {
            count_bits_set(isolated) == 1
        }
    }

    fn isolated_lowest_set_bit_is_the_bit_clearing_removes(value: u64) -> bool {
        isolate_lowest_set_bit(value) == value ^ clear_lowest_set_bit(value)
    }

    fn trailing_zeroes_match_the_isolated_bit_position(value: u64) -> TestResult {
        if value == 0 {
            return TestResult::discard();
        }
        let below_lowest = isolate_lowest_set_bit(value) - 1;
        TestResult::from_bool(trailing_zeroes_count(value) == count_bits_set(below_lowest))
    }

    fn fill_from_lowest_clear_bit_is_idempotent(value: u64) -> bool {
        let filled = fill_from_lowest_clear_bit(value);
        fill_from_lowest_clear_bit(filled) == filled
    }

    fn setting_lowest_clear_bit_increments_popcount(value: u64) -> TestResult {
        if value == u64::MAX {
            return TestResult::discard();
        }
        TestResult::from_bool(
            count_bits_set(set_lowest_clear_bit(value)) == count_bits_set(value) + 1,
        )
    }

    fn isolated_lowest_clear_bit_has_one_clear_bit(value: u64) -> bool {
        let expected = if value == u64::MAX { 64 } else { 63 };
        count_bits_set(isolate_lowest_clear_bit(value)) == expected
    }

    fn clear_bits_undoes_set_bits(value: u64, bits: u32, shift: u32) -> bool {
        let bits = bits % 65;
        let shift = shift % (65 - bits);
        clear_bits(set_bits(value, bits, shift), bits, shift) == clear_bits(value, bits, shift)
    }

    fn aliases_agree_with_descriptive_names(value: u64) -> bool {
        popcnt(value) == count_bits_set(value)
            && lzcnt(value) == leading_zeroes_count(value)
            && tzcnt(value) == trailing_zeroes_count(value)
            && blsi(value) == isolate_lowest_set_bit(value)
            && blci(value) == isolate_lowest_clear_bit(value)
            && blsc(value) == clear_lowest_set_bit(value)
            && blcs(value) == set_lowest_clear_bit(value)
            && blsfill(value) == fill_from_lowest_set_bit(value)
            && blcfill(value) == fill_from_lowest_clear_bit(value)
    }

    fn eight_bit_results_match_the_wide_results(value: u8) -> bool {
        isolate_lowest_set_bit(value) as u64 == isolate_lowest_set_bit(value as u64) as u8 as u64
            && clear_lowest_set_bit(value) as u64 == clear_lowest_set_bit(value as u64) as u8 as u64
            && fill_from_lowest_set_bit(value) as u64
                == fill_from_lowest_set_bit(value as u64) as u8 as u64
            && count_bits_set(value) == count_bits_set(value as u64)
    }
}
