// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Endianness-aware conversion between primitive numbers and bytes.
//!
//! Writers check the destination length up front: on
//! [`ExtError::BufferTooSmall`] no byte of the destination has been touched.

use std::io;

use crate::error::{ExtError, Result};

/// Byte order of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;
}

/// Primitive values with a fixed-width byte representation.
///
/// ```
/// use echo_ext::endian::{EndianBytes, Endianness};
///
/// assert_eq!(0x0F_u32.to_bytes(Endianness::Big), [0, 0, 0, 0x0F]);
/// assert_eq!(i16::read_bytes(&[0x01, 0xA4], Endianness::Big).ok(), Some(420));
/// ```
pub trait EndianBytes: Copy + Sized {
    /// Width of the encoding in bytes.
    const SIZE: usize;

    /// Fixed-size byte array holding one encoded value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Encodes the value.
    fn to_bytes(self, endianness: Endianness) -> Self::Bytes;

    /// Decodes a value.
    fn from_bytes(bytes: Self::Bytes, endianness: Endianness) -> Self;

    /// Little-endian encoding as an owned vector.
    fn to_le_vec(self) -> Vec<u8> {
        self.to_bytes(Endianness::Little).as_ref().to_vec()
    }

    /// Big-endian encoding as an owned vector.
    fn to_be_vec(self) -> Vec<u8> {
        self.to_bytes(Endianness::Big).as_ref().to_vec()
    }

    /// Encodes into the front of `dest`, returning the number of bytes written.
    fn write_bytes(self, dest: &mut [u8], endianness: Endianness) -> Result<usize> {
        let Some(slot) = dest.get_mut(..Self::SIZE) else {
            return Err(ExtError::BufferTooSmall {
                needed: Self::SIZE,
                actual: dest.len(),
            });
        };
        slot.copy_from_slice(self.to_bytes(endianness).as_ref());
        Ok(Self::SIZE)
    }

    /// Like [`EndianBytes::write_bytes`] but reports only success.
    fn try_write_bytes(self, dest: &mut [u8], endianness: Endianness) -> bool {
        self.write_bytes(dest, endianness).is_ok()
    }

    /// Decodes from the first [`EndianBytes::SIZE`] bytes of `src`.
    fn read_bytes(src: &[u8], endianness: Endianness) -> Result<Self> {
        let Some(head) = src.get(..Self::SIZE) else {
            return Err(ExtError::BufferTooSmall {
                needed: Self::SIZE,
                actual: src.len(),
            });
        };
        let mut bytes = Self::Bytes::default();
        bytes.as_mut().copy_from_slice(head);
        Ok(Self::from_bytes(bytes, endianness))
    }
}

macro_rules! endian_bytes_impl {
    ($($t:ty),* $(,)?) => {$(
        impl EndianBytes for $t {
            const SIZE: usize = core::mem::size_of::<$t>();
            type Bytes = [u8; core::mem::size_of::<$t>()];

            #[inline]
            fn to_bytes(self, endianness: Endianness) -> Self::Bytes {
                match endianness {
                    Endianness::Little => self.to_le_bytes(),
                    Endianness::Big => self.to_be_bytes(),
                }
            }

            #[inline]
            fn from_bytes(bytes: Self::Bytes, endianness: Endianness) -> Self {
                match endianness {
                    Endianness::Little => <$t>::from_le_bytes(bytes),
                    Endianness::Big => <$t>::from_be_bytes(bytes),
                }
            }
        }
    )*};
}

endian_bytes_impl!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

/// Reads endian-encoded values from any [`io::Read`].
pub trait ReadEndianExt: io::Read {
    /// Reads exactly `T::SIZE` bytes and decodes them.
    fn read_value<T: EndianBytes>(&mut self, endianness: Endianness) -> io::Result<T> {
        let mut bytes = T::Bytes::default();
        self.read_exact(bytes.as_mut())?;
        Ok(T::from_bytes(bytes, endianness))
    }
}

impl<R: io::Read + ?Sized> ReadEndianExt for R {}

/// Writes endian-encoded values to any [`io::Write`].
pub trait WriteEndianExt: io::Write {
    /// Encodes `value` and writes all of its bytes.
    fn write_value<T: EndianBytes>(&mut self, value: T, endianness: Endianness) -> io::Result<()> {
        self.write_all(value.to_bytes(endianness).as_ref())
    }
}

impl<W: io::Write + ?Sized> WriteEndianExt for W {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_matches_target() {
        assert_eq!(
            1_u16.to_bytes(Endianness::NATIVE),
            1_u16.to_ne_bytes()
        );
    }
}
