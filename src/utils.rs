//! Bit helpers, literal parsing and value file readers.

use std::fs::File;
use std::io::{BufReader, Error, ErrorKind, Read};
use std::path::Path;

use num_traits::FromBytes;

use crate::consts::{EXPONENT_MASK, MANTISSA_MASK, SIGN_MASK};
use crate::error::UlpError;

/// Reinterpret a bit pattern as f32.
#[inline]
pub fn hex_to_f32(hex: u32) -> f32 {
    f32::from_bits(hex)
}

/// Reinterpret an f32 as its bit pattern.
#[inline]
pub fn f32_to_hex(x: f32) -> u32 {
    x.to_bits()
}

/// Zero exponent with a non-zero mantissa.
#[inline]
pub fn is_subnormal(x: f32) -> bool {
    let bits = x.to_bits();
    bits & EXPONENT_MASK == 0 && bits & MANTISSA_MASK != 0
}

/// Replace a subnormal by zero of the same sign.
#[inline]
pub fn flush_subnormal(x: f32) -> f32 {
    if is_subnormal(x) {
        f32::from_bits(x.to_bits() & SIGN_MASK)
    } else {
        x
    }
}

/// Parse a decimal literal or a `0x` bit pattern.
///
/// A leading `-` on a bit pattern flips its sign bit, so `-0x00800000` is the
/// negative smallest normal.
pub fn parse_f32(literal: &str) -> Result<f32, UlpError> {
    let trimmed = literal.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let hex = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"));
    match hex {
        Some(digits) => {
            if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
                return Err(UlpError::InvalidLiteral(literal.to_string()));
            }
            let bits = u32::from_str_radix(&digits.replace('_', ""), 16)
                .map_err(|_| UlpError::InvalidLiteral(literal.to_string()))?;
            let value = f32::from_bits(bits);
            Ok(if negative { -value } else { value })
        }
        None => trimmed
            .parse::<f32>()
            .map_err(|_| UlpError::InvalidLiteral(literal.to_string())),
    }
}

/// Read an `fvecs`-style file: each record is a little-endian `u32` length
/// followed by that many 4-byte elements.
pub fn read_vecs<T>(path: &Path) -> std::io::Result<Vec<Vec<T>>>
where
    T: Sized + FromBytes<Bytes = [u8; 4]>,
{
    let file = File::open(path)?;
    let mut remaining = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let mut buf = [0u8; 4];
    let mut vecs = Vec::new();
    loop {
        let count = read_full(&mut reader, &mut buf)?;
        if count == 0 {
            break;
        }
        if count < buf.len() {
            return Err(Error::new(ErrorKind::InvalidData, "truncated record length"));
        }
        remaining = remaining.saturating_sub(buf.len() as u64);
        let dim = u32::from_le_bytes(buf) as usize;
        let record_bytes = dim as u64 * buf.len() as u64;
        if record_bytes > remaining {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("record of {dim} values exceeds the {remaining} bytes left"),
            ));
        }
        remaining -= record_bytes;
        let mut vec = Vec::with_capacity(dim);
        for _ in 0..dim {
            reader.read_exact(&mut buf)?;
            vec.push(T::from_le_bytes(&buf));
        }
        vecs.push(vec);
    }
    Ok(vecs)
}

/// Read a raw dump of little-endian 4-byte elements.
pub fn read_raw<T>(path: &Path) -> std::io::Result<Vec<T>>
where
    T: Sized + FromBytes<Bytes = [u8; 4]>,
{
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    if bytes.len() % 4 != 0 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("{} bytes is not a whole number of 4-byte values", bytes.len()),
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(chunk);
            T::from_le_bytes(&buf)
        })
        .collect())
}

/// Fill `buf` unless EOF comes first; returns the number of bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(hex_to_f32(0x3F80_0000), 1.0);
        assert_eq!(f32_to_hex(-2.0), 0xC000_0000);
    }

    #[test]
    fn test_subnormal() {
        assert!(is_subnormal(hex_to_f32(0x0000_0001)));
        assert!(is_subnormal(-hex_to_f32(0x007F_FFFF)));
        assert!(!is_subnormal(0.0));
        assert!(!is_subnormal(f32::MIN_POSITIVE));
        assert_eq!(flush_subnormal(-hex_to_f32(0x0000_0111)).to_bits(), SIGN_MASK);
        assert_eq!(flush_subnormal(1.5), 1.5);
    }

    #[test]
    fn test_parse_f32() {
        assert_eq!(parse_f32("1.5").unwrap(), 1.5);
        assert_eq!(parse_f32(" -4 ").unwrap(), -4.0);
        assert_eq!(parse_f32("0x00800000").unwrap(), f32::MIN_POSITIVE);
        assert_eq!(parse_f32("-0x0080_0000").unwrap(), -f32::MIN_POSITIVE);
        assert_eq!(parse_f32("+0X3F800000").unwrap(), 1.0);
        assert!(matches!(parse_f32("0xZZ"), Err(UlpError::InvalidLiteral(_))));
        assert!(matches!(parse_f32("one"), Err(UlpError::InvalidLiteral(_))));
        assert!(matches!(parse_f32("0x+1"), Err(UlpError::InvalidLiteral(_))));
        assert!(matches!(parse_f32("-0x-1"), Err(UlpError::InvalidLiteral(_))));
        assert!(matches!(parse_f32("0x"), Err(UlpError::InvalidLiteral(_))));
    }

    #[test]
    fn test_read_vecs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for vec in [vec![1.0f32, 2.0], vec![-0.5f32]] {
            file.write_all(&(vec.len() as u32).to_le_bytes()).unwrap();
            for v in vec {
                file.write_all(&v.to_le_bytes()).unwrap();
            }
        }
        file.flush().unwrap();

        let vecs = read_vecs::<f32>(file.path()).unwrap();
        assert_eq!(vecs, vec![vec![1.0, 2.0], vec![-0.5]]);
    }

    #[test]
    fn test_read_vecs_truncated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&2u32.to_le_bytes()).unwrap();
        file.write_all(&1.0f32.to_le_bytes()).unwrap();
        file.flush().unwrap();
        assert!(read_vecs::<f32>(file.path()).is_err());
    }

    #[test]
    fn test_read_vecs_oversized_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&u32::MAX.to_le_bytes()).unwrap();
        file.flush().unwrap();
        let err = read_vecs::<f32>(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        // a raw dump starting with 1.0 read as fvecs
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for v in [1.0f32, 2.0, 3.0] {
            file.write_all(&v.to_le_bytes()).unwrap();
        }
        file.flush().unwrap();
        let err = read_vecs::<f32>(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_raw() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&0x0080_0001u32.to_le_bytes()).unwrap();
        file.write_all(&3.0f32.to_le_bytes()).unwrap();
        file.flush().unwrap();
        assert_eq!(
            read_raw::<u32>(file.path()).unwrap(),
            vec![0x0080_0001, 3.0f32.to_bits()]
        );

        file.write_all(&[0u8; 3]).unwrap();
        file.flush().unwrap();
        let err = read_raw::<f32>(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
