//! Sequential byte sources and sinks consumed by the column codecs.
//!
//! A column never addresses the underlying storage directly. It is handed a cursor that is
//! already positioned on the column and pulls (or pushes) exactly as many bytes as its width
//! requires. [`ByteSource`] and [`ByteSink`] are that cursor.
//!
//! # Implementations
//!
//! - [`crate::file::parser::Parser`] - Reads from a borrowed `&[u8]`
//! - [`crate::file::writer::Writer`] - Writes into a borrowed `&mut [u8]`
//! - [`IoSource`] / [`IoSink`] - Adapt any [`std::io::Read`] / [`std::io::Write`]
//! - `Vec<u8>` - Appends to a growable buffer
//!
//! Errors of the underlying storage are handed back to the caller unchanged.

use std::io::{Read, Write};

use crate::Result;

/// A cursor yielding little-endian unsigned values.
///
/// Every successful call advances the cursor by the size of the returned value.
pub trait ByteSource {
    /// Reads one byte.
    ///
    /// # Errors
    /// Returns an error if the source is exhausted or the underlying reader fails.
    fn read_u8(&mut self) -> Result<u8>;

    /// Reads a little-endian `u16`.
    ///
    /// # Errors
    /// Returns an error if fewer than two bytes remain or the underlying reader fails.
    fn read_u16_le(&mut self) -> Result<u16>;

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    /// Returns an error if fewer than four bytes remain or the underlying reader fails.
    fn read_u32_le(&mut self) -> Result<u32>;
}

/// A cursor accepting little-endian unsigned values.
///
/// Every successful call advances the cursor by the size of the written value.
pub trait ByteSink {
    /// Writes one byte.
    ///
    /// # Errors
    /// Returns an error if the sink is full or the underlying writer fails.
    fn write_u8(&mut self, value: u8) -> Result<()>;

    /// Writes a little-endian `u16`.
    ///
    /// # Errors
    /// Returns an error if fewer than two bytes of space remain or the underlying writer fails.
    fn write_u16_le(&mut self, value: u16) -> Result<()>;

    /// Writes a little-endian `u32`.
    ///
    /// # Errors
    /// Returns an error if fewer than four bytes of space remain or the underlying writer fails.
    fn write_u32_le(&mut self, value: u32) -> Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_u8(&mut self) -> Result<u8> {
        (**self).read_u8()
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        (**self).read_u16_le()
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        (**self).read_u32_le()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_u8(&mut self, value: u8) -> Result<()> {
        (**self).write_u8(value)
    }

    fn write_u16_le(&mut self, value: u16) -> Result<()> {
        (**self).write_u16_le(value)
    }

    fn write_u32_le(&mut self, value: u32) -> Result<()> {
        (**self).write_u32_le(value)
    }
}

impl ByteSink for Vec<u8> {
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.push(value);
        Ok(())
    }

    fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }
}

/// Adapts a [`std::io::Read`] into a [`ByteSource`].
///
/// Short reads surface as [`crate::Error::FileError`] carrying
/// [`std::io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    /// Wraps a reader positioned on the first column to decode.
    pub fn new(inner: R) -> Self {
        IoSource { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buffer = [0u8; N];
        self.inner.read_exact(&mut buffer)?;
        Ok(buffer)
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_u8(&mut self) -> Result<u8> {
        Ok(u8::from_le_bytes(self.read_array()?))
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }
}

/// Adapts a [`std::io::Write`] into a [`ByteSink`].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wraps a writer positioned on the first column to encode.
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_all(&[value])?;
        Ok(())
    }

    fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;
    use crate::Error;

    #[test]
    fn io_source_reads_sequentially() {
        let mut source = IoSource::new(Cursor::new(vec![0x7F, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE]));

        assert_eq!(source.read_u8().unwrap(), 0x7F);
        assert_eq!(source.read_u16_le().unwrap(), 0x1234);
        assert_eq!(source.read_u32_le().unwrap(), 0xDEAD_BEEF);
        assert_eq!(source.into_inner().position(), 7);
    }

    #[test]
    fn io_source_short_read() {
        let mut source = IoSource::new(Cursor::new(vec![0x01, 0x02]));

        match source.read_u32_le() {
            Err(Error::FileError(error)) => assert_eq!(error.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn io_sink_writes_sequentially() {
        let mut sink = IoSink::new(Vec::new());

        sink.write_u8(0x7F).unwrap();
        sink.write_u16_le(0x1234).unwrap();
        sink.write_u32_le(0xDEAD_BEEF).unwrap();

        assert_eq!(
            sink.into_inner(),
            vec![0x7F, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE]
        );
    }

    #[test]
    fn io_sink_full_writer() {
        let mut storage = [0u8; 1];
        let mut sink = IoSink::new(&mut storage[..]);

        sink.write_u8(0x01).unwrap();
        assert!(matches!(sink.write_u16_le(0x0203), Err(Error::FileError(_))));
    }

    #[test]
    fn vec_sink_appends() {
        let mut sink = vec![0xAA];

        sink.write_u16_le(0x0102).unwrap();
        sink.write_u32_le(0x0304_0506).unwrap();

        assert_eq!(sink, vec![0xAA, 0x02, 0x01, 0x06, 0x05, 0x04, 0x03]);
    }

    #[test]
    fn mut_ref_forwarding() {
        fn emit<S: ByteSink>(mut sink: S) {
            sink.write_u8(0x42).unwrap();
        }

        let mut sink = Vec::new();
        emit(&mut sink);
        emit(&mut sink);
        assert_eq!(sink, vec![0x42, 0x42]);
    }
}
