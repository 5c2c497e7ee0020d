// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Conversion between integers and per-bit boolean fields.
//!
//! Bit `i` of an integer maps to index `i` of the boolean slice, so the least
//! significant bit comes first.

use crate::error::{ExtError, Result};

/// Expands an integer into its individual bits.
///
/// ```
/// use echo_ext::bits::{PackBits, Unpack};
///
/// let bits = 0b0000_0101_u8.unpack();
/// assert_eq!(bits, [true, false, true, false, false, false, false, false]);
/// assert_eq!(bits.pack_u8().ok(), Some(5));
/// ```
pub trait Unpack: Copy {
    /// Bit-field representation of the value.
    type Bits;

    /// Width of the integer in bits.
    const BITS: usize;

    /// Returns every bit of the value, least significant first.
    fn unpack(self) -> Self::Bits;

    /// Writes every bit into the front of `dest`.
    fn unpack_into(self, dest: &mut [bool]) -> Result<()>;
}

macro_rules! unpack_impl {
    ($($t:ty),* $(,)?) => {$(
        impl Unpack for $t {
            type Bits = [bool; <$t>::BITS as usize];
            const BITS: usize = <$t>::BITS as usize;

            fn unpack(self) -> Self::Bits {
                let mut bits = [false; <$t>::BITS as usize];
                for (i, bit) in bits.iter_mut().enumerate() {
                    *bit = (self >> i) & 1 == 1;
                }
                bits
            }

            fn unpack_into(self, dest: &mut [bool]) -> Result<()> {
                let actual = dest.len();
                let Some(slot) = dest.get_mut(..<Self as Unpack>::BITS) else {
                    return Err(ExtError::BufferTooSmall {
                        needed: <Self as Unpack>::BITS,
                        actual,
                    });
                };
                slot.copy_from_slice(&self.unpack());
                Ok(())
            }
        }
    )*};
}

unpack_impl!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Packs a boolean slice back into an integer.
///
/// Missing high bits are zero; a slice longer than the target width is
/// rejected with [`ExtError::TooManyBits`].
pub trait PackBits {
    /// Packs at most 8 bits.
    fn pack_u8(&self) -> Result<u8>;
    /// Packs at most 16 bits.
    fn pack_u16(&self) -> Result<u16>;
    /// Packs at most 32 bits.
    fn pack_u32(&self) -> Result<u32>;
    /// Packs at most 64 bits.
    fn pack_u64(&self) -> Result<u64>;
}

fn pack(bits: &[bool], max: usize) -> Result<u64> {
    if bits.len() > max {
        return Err(ExtError::TooManyBits {
            max,
            actual: bits.len(),
        });
    }
    Ok(bits
        .iter()
        .enumerate()
        .filter(|(_, &set)| set)
        .fold(0_u64, |acc, (i, _)| acc | (1 << i)))
}

#[allow(clippy::cast_possible_truncation)]
impl PackBits for [bool] {
    fn pack_u8(&self) -> Result<u8> {
        pack(self, 8).map(|v| v as u8)
    }

    fn pack_u16(&self) -> Result<u16> {
        pack(self, 16).map(|v| v as u16)
    }

    fn pack_u32(&self) -> Result<u32> {
        pack(self, 32).map(|v| v as u32)
    }

    fn pack_u64(&self) -> Result<u64> {
        pack(self, 64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_set_the_top_bit() {
        let bits = (-1_i8).unpack();
        assert!(bits.iter().all(|&b| b));
    }

    #[test]
    fn pack_rejects_oversized_slices() {
        let bits = [false; 9];
        assert!(matches!(
            bits.pack_u8(),
            Err(ExtError::TooManyBits { max: 8, actual: 9 })
        ));
    }
}
