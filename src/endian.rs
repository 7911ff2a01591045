//! Byte-order swapping and little-endian stream I/O.
//!
//! The swap functions reverse the byte order of a value regardless of the
//! host's endianness; applying a swap twice returns the original value.
//! The stream helpers read and write values in little-endian order over
//! any [`std::io::Read`]/[`std::io::Write`], which is the layout most
//! on-disk formats that predate network byte order use.
//!
//! Signed integers round-trip through the unsigned helpers with `as`
//! casts; only the bit pattern matters.

use std::io::{self, Read, Write};

/// Reverses the byte order of a `u16`.
#[must_use]
pub const fn swap_u16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverses the byte order of a `u32`.
#[must_use]
pub const fn swap_u32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Reverses the byte order of a `u64`.
#[must_use]
pub const fn swap_u64(value: u64) -> u64 {
    value.swap_bytes()
}

/// Reverses the byte order of an `i16`.
#[must_use]
pub const fn swap_i16(value: i16) -> i16 {
    value.swap_bytes()
}

/// Reverses the byte order of an `i32`.
#[must_use]
pub const fn swap_i32(value: i32) -> i32 {
    value.swap_bytes()
}

/// Reverses the byte order of an `i64`.
#[must_use]
pub const fn swap_i64(value: i64) -> i64 {
    value.swap_bytes()
}

/// Reverses the byte order of an `f32`'s bit pattern.
#[must_use]
pub fn swap_f32(value: f32) -> f32 {
    f32::from_bits(value.to_bits().swap_bytes())
}

/// Reverses the byte order of an `f64`'s bit pattern.
#[must_use]
pub fn swap_f64(value: f64) -> f64 {
    f64::from_bits(value.to_bits().swap_bytes())
}

/// Reads a little-endian `u16` from a stream.
///
/// # Errors
///
/// Any error from the underlying reader, including `UnexpectedEof` when
/// the stream ends mid-value.
pub fn read_u16_le<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Reads a little-endian `u32` from a stream.
///
/// # Errors
///
/// Any error from the underlying reader.
pub fn read_u32_le<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Reads a little-endian `u64` from a stream.
///
/// # Errors
///
/// Any error from the underlying reader.
pub fn read_u64_le<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Reads a little-endian `f32` from a stream.
///
/// # Errors
///
/// Any error from the underlying reader.
pub fn read_f32_le<R: Read>(reader: &mut R) -> io::Result<f32> {
    Ok(f32::from_bits(read_u32_le(reader)?))
}

/// Reads a little-endian `f64` from a stream.
///
/// # Errors
///
/// Any error from the underlying reader.
pub fn read_f64_le<R: Read>(reader: &mut R) -> io::Result<f64> {
    Ok(f64::from_bits(read_u64_le(reader)?))
}

/// Writes a `u16` to a stream in little-endian order.
///
/// # Errors
///
/// Any error from the underlying writer.
pub fn write_u16_le<W: Write>(writer: &mut W, value: u16) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Writes a `u32` to a stream in little-endian order.
///
/// # Errors
///
/// Any error from the underlying writer.
pub fn write_u32_le<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Writes a `u64` to a stream in little-endian order.
///
/// # Errors
///
/// Any error from the underlying writer.
pub fn write_u64_le<W: Write>(writer: &mut W, value: u64) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Writes an `f32` to a stream in little-endian order.
///
/// # Errors
///
/// Any error from the underlying writer.
pub fn write_f32_le<W: Write>(writer: &mut W, value: f32) -> io::Result<()> {
    write_u32_le(writer, value.to_bits())
}

/// Writes an `f64` to a stream in little-endian order.
///
/// # Errors
///
/// Any error from the underlying writer.
pub fn write_f64_le<W: Write>(writer: &mut W, value: f64) -> io::Result<()> {
    write_u64_le(writer, value.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_swap_known_values() {
        assert_eq!(swap_u16(0x1234), 0x3412);
        assert_eq!(swap_u32(0x1234_5678), 0x7856_3412);
        assert_eq!(swap_u64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(swap_i16(0x0102), 0x0201);
        assert_eq!(swap_i32(-1), -1);
    }

    #[test]
    fn test_swap_is_an_involution() {
        for value in [0u16, 1, 0x00ff, 0xff00, u16::MAX] {
            assert_eq!(swap_u16(swap_u16(value)), value);
        }
        for value in [0u32, 0xdead_beef, u32::MAX] {
            assert_eq!(swap_u32(swap_u32(value)), value);
        }
        for value in [0u64, 0x0123_4567_89ab_cdef, u64::MAX] {
            assert_eq!(swap_u64(swap_u64(value)), value);
        }
        for value in [0i64, -42, i64::MIN, i64::MAX] {
            assert_eq!(swap_i64(swap_i64(value)), value);
        }
        for value in [0.0f32, 1.5, -3.25, f32::MAX] {
            assert_eq!(swap_f32(swap_f32(value)).to_bits(), value.to_bits());
        }
        for value in [0.0f64, 1.5, -3.25, f64::MIN_POSITIVE] {
            assert_eq!(swap_f64(swap_f64(value)).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_read_is_little_endian() {
        let mut cursor = Cursor::new(vec![0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
        assert_eq!(read_u16_le(&mut cursor).unwrap(), 0x1234);
        assert_eq!(read_u32_le(&mut cursor).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_write_is_little_endian() {
        let mut out = Vec::new();
        write_u32_le(&mut out, 0x1234_5678).unwrap();
        assert_eq!(out, vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_float_stream_preserves_bits() {
        let mut out = Vec::new();
        write_f64_le(&mut out, -0.0).unwrap();
        let value = read_f64_le(&mut Cursor::new(out)).unwrap();
        assert_eq!(value.to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_short_stream_reports_eof() {
        let mut cursor = Cursor::new(vec![0x01]);
        let err = read_u16_le(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
