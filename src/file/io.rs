//! Bounds-checked little-endian access to byte buffers.
//!
//! The `_at` variants take an offset that is advanced past the value on success and left
//! untouched on failure. A buffer too short for the value yields [`crate::Error::OutOfBounds`].
//!
//! ```rust
//! use cilcolumn::file::io::{read_le_at, write_le_at};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//! write_le_at(&mut data, &mut offset, 1u16)?;
//! write_le_at(&mut data, &mut offset, 2u32)?;
//! assert_eq!(data, [0x01, 0x00, 0x02, 0x00, 0x00, 0x00]);
//!
//! let mut offset = 2;
//! let second: u32 = read_le_at(&data, &mut offset)?;
//! assert_eq!((second, offset), (2, 6));
//! # Ok::<(), cilcolumn::Error>(())
//! ```

use crate::{Error::OutOfBounds, Result};

/// Unsigned integers a column can be stored as.
pub trait CilIO: Sized {
    /// Fixed-size byte array holding the encoded value, e.g. `[u8; 4]` for `u32`
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Decodes a value from its little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Encodes a value into its little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_cil_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl CilIO for $ty {
                type Bytes = [u8; $len];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_cil_io!(u8 => 1, u16 => 2, u32 => 4);

/// Reads a `T` from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le<T: CilIO>(data: &[u8]) -> Result<T> {
    read_le_at(data, &mut 0)
}

/// Reads a `T` at `offset` and advances the offset past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use cilcolumn::file::io::read_le_at;
///
/// let data = [0x34, 0x12, 0xFF];
/// let mut offset = 0;
///
/// let value: u16 = read_le_at(&data, &mut offset)?;
/// assert_eq!((value, offset), (0x1234, 2));
/// assert!(read_le_at::<u16>(&data, &mut offset).is_err());
/// assert_eq!(offset, 2);
/// # Ok::<(), cilcolumn::Error>(())
/// ```
pub fn read_le_at<T: CilIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let end = offset.checked_add(std::mem::size_of::<T>()).ok_or(OutOfBounds)?;
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

/// Writes `value` to the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn write_le<T: CilIO>(data: &mut [u8], value: T) -> Result<()> {
    write_le_at(data, &mut 0, value)
}

/// Writes `value` at `offset` and advances the offset past it.
///
/// Nothing is written if the buffer is too short.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use cilcolumn::file::io::write_le_at;
///
/// let mut data = [0u8; 4];
/// let mut offset = 0;
///
/// write_le_at(&mut data, &mut offset, 1u16)?;
/// write_le_at(&mut data, &mut offset, 2u16)?;
/// assert_eq!(offset, 4);
/// assert_eq!(data, [0x01, 0x00, 0x02, 0x00]);
/// # Ok::<(), cilcolumn::Error>(())
/// ```
pub fn write_le_at<T: CilIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let end = offset.checked_add(std::mem::size_of::<T>()).ok_or(OutOfBounds)?;
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let bytes = value.to_le_bytes();
    data[*offset..end].copy_from_slice(bytes.as_ref());
    *offset = end;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u8() {
        let result = read_le::<u8>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x01);
    }

    #[test]
    fn read_le_u16() {
        let result = read_le::<u16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_u32() {
        let result = read_le::<u32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_le_at_sequential() {
        let mut offset = 1;
        let first = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        let second = read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap();

        assert_eq!(first, 0x0302);
        assert_eq!(second, 0x0706_0504);
        assert_eq!(offset, 7);
    }

    #[test]
    fn read_errors() {
        let buffer = [0xFF, 0xFF, 0xFF];

        let result = read_le::<u32>(&buffer);
        assert!(matches!(result, Err(OutOfBounds)));

        let mut offset = 2;
        let result = read_le_at::<u16>(&buffer, &mut offset);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, 2);
    }

    #[test]
    fn read_offset_overflow() {
        let mut offset = usize::MAX;
        let result = read_le_at::<u8>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, usize::MAX);
    }

    #[test]
    fn write_le_at_sequential() {
        let mut buffer = [0u8; 7];
        let mut offset = 0;

        write_le_at(&mut buffer, &mut offset, 0x01u8).unwrap();
        write_le_at(&mut buffer, &mut offset, 0x0302u16).unwrap();
        write_le_at(&mut buffer, &mut offset, 0x0706_0504u32).unwrap();

        assert_eq!(offset, 7);
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }

    #[test]
    fn write_errors_leave_buffer_untouched() {
        let mut buffer = [0xAAu8; 3];

        let result = write_le(&mut buffer, 0x1234_5678u32);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(buffer, [0xAA; 3]);

        let mut offset = 2;
        let result = write_le_at(&mut buffer, &mut offset, 0x1234u16);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, 2);
        assert_eq!(buffer, [0xAA; 3]);
    }
}
