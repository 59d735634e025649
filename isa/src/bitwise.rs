use std::fmt::Debug;
use std::mem::size_of;
use std::ops::RangeInclusive;

/// Read-side helpers to inspect bits of an encoded value,
/// the index (`bit_idx`) is supposed to be from lsb to msb (right to left).
pub trait Bits
where
    Self: Clone + Sized + Into<u128> + TryFrom<u128>,
    <Self as TryFrom<u128>>::Error: Debug,
{
    fn is_bit_on(&self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < (size_of::<Self>() * 8) as u8);
        let bitwise: u128 = <Self as Into<u128>>::into(self.clone());
        let mask: u128 = 0b1 << bit_idx;
        (bitwise & mask) != 0
    }

    fn is_bit_off(&self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < (size_of::<Self>() * 8) as u8);
        let bitwise: u128 = <Self as Into<u128>>::into(self.clone());
        let mask = 0b1 << bit_idx;
        (bitwise & mask) == 0
    }

    fn get_bit(&self, bit_idx: u8) -> bool {
        self.is_bit_on(bit_idx)
    }

    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self {
        let start = bits_range.start();
        let length = bits_range.len() as u32;

        // Gets a value with `length` number of ones, then moves it to the
        // start of the range. If bits_range is 1..=10 then length is 10 and
        // the mask is ten ones shifted left by one.
        let mut mask = (2_u128.pow(length)) - 1;
        mask <<= start;

        let value: u128 = <Self as Into<u128>>::into(self.clone());

        // We apply the mask and then move the value back to the 0 position.
        <Self as TryFrom<u128>>::try_from((value & mask) >> start).unwrap()
    }

    /// Returns a copy of the value sign-extended from a `number_of_bits`
    /// wide two's complement number to the full width of `Self`.
    fn sign_extended(&self, number_of_bits: u8) -> Self {
        let value: u128 = <Self as Into<u128>>::into(self.clone());

        // XORing with a mask holding only the sign bit and then subtracting
        // that mask propagates the sign through all the upper bits: for a
        // negative value the XOR clears the sign bit and the subtraction
        // borrows all the way up, for a positive value the XOR sets it and
        // the subtraction removes it again.
        let mask = 1 << (number_of_bits - 1);
        let value = ((value as i128 ^ mask) - mask) as u128;

        // Drop the borrowed leading ones that do not fit `Self`, otherwise
        // the `try_from` below would fail for types smaller than 128 bits.
        let size_bits = (size_of::<Self>() * 8) as u128;
        let mask = (1 << size_bits) - 1;
        let value = value & mask;

        <Self as TryFrom<u128>>::try_from(value).unwrap()
    }
}

impl Bits for u64 {}
impl Bits for u32 {}
impl Bits for u16 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_on() {
        let b = 0b110011101_u32;
        assert!(b.is_bit_on(0));
        assert!(!b.is_bit_on(1));
        assert!(b.is_bit_on(2));
        assert!(b.is_bit_on(3));
        assert!(b.is_bit_on(8));
        assert!(!b.is_bit_on(31));
    }

    #[test]
    fn test_is_off() {
        let b = 0b110011101_u32;
        assert!(!b.is_bit_off(0));
        assert!(b.is_bit_off(1));
        assert!(!b.is_bit_off(2));
        assert!(!b.is_bit_off(3));
        assert!(!b.is_bit_off(8));
        assert!(b.is_bit_off(31));
    }

    #[test]
    fn get_bit() {
        let b = 0b1011001110_u32;
        assert!(b.get_bit(1));
        assert!(!b.get_bit(0));
        assert!(b.get_bit(2));
        assert!(!b.get_bit(31));
    }

    #[test]
    #[should_panic]
    fn invalid_index() {
        let b = 0u32;
        b.is_bit_on(32);
    }

    #[test]
    fn get_bits() {
        let b = 0b1011001110_u32;
        assert_eq!(b.get_bits(0..=3), 0b1110);
        assert_eq!(b.get_bits(1..=1), 0b1);
        assert_eq!(b.get_bits(4..=7), 0b1100);
        assert_eq!(b.get_bits(8..=9), 0b10);
        assert_eq!(b.get_bits(0..=9), 0b10_1100_1110);
        assert_eq!(b.get_bits(0..=31), 0b10_1100_1110);
        assert_eq!(b.get_bits(28..=31), 0b0);
    }

    #[test]
    fn get_bits_reassembles() {
        let word: u32 = rand::random();
        let low = word.get_bits(0..=15);
        let high = word.get_bits(16..=31);

        assert_eq!((high << 16) | low, word);
        assert_eq!(word.get_bits(0..=31), word);
    }

    #[test]
    fn check_sign_extended() {
        let a: u32 = 0b1001; // -7 in i4

        assert_eq!(a.sign_extended(4) as i32, -7);
    }

    #[test]
    fn sign_extended_positive_unchanged() {
        let a: u32 = 0b0111;

        assert_eq!(a.sign_extended(4), 7);
    }

    #[test]
    fn sign_extended_halfword() {
        let a: u32 = 0xFFFB; // -5 in i16

        assert_eq!(a.sign_extended(16) as i32, -5);
        assert_eq!(5_u32.sign_extended(16), 5);
    }
}
