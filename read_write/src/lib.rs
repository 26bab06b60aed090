//! Little-endian vector reading and writing.
//!
//! Used by the table generator to write lookup tables and by
//! `holdem_equity` to read them back. Values are stored as plain
//! little-endian integers with no header, so a file is just the
//! concatenation of its elements.

use std::io::{Error, ErrorKind, Read, Result, Write};
use std::mem::size_of;

/// number of elements encoded per write/read call
const CHUNK_LEN: usize = 1 << 16;

/// Fixed width integer that can be stored as little-endian bytes
pub trait LeBytes: Copy {
    /// number of bytes of one element
    const SIZE: usize;
    /// append the little-endian bytes of self to `out`
    fn put_le(self, out: &mut Vec<u8>);
    /// decode an element from the first `SIZE` bytes
    fn get_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_le_bytes {
    ($($t:ty),*) => {
        $(
            impl LeBytes for $t {
                const SIZE: usize = size_of::<$t>();

                #[inline]
                fn put_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn get_le(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$t>()];
                    buf.copy_from_slice(&bytes[..size_of::<$t>()]);
                    <$t>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_le_bytes!(u8, u16, u32, u64);

/// object used to extend functionality of writers
/// used for writing integer vectors to files
pub trait VecWriter {
    /// Writes a slice of type T as little-endian bytes
    fn write_vec<T: LeBytes>(&mut self, data: &[T]) -> Result<()>;
}

/// object used to extend functionality of readers
/// used for reading integer vectors from files
pub trait VecReader {
    /// Reads elements of type T until the end of the input
    ///
    /// Fails with `UnexpectedEof` when the input length is not a
    /// multiple of the element size.
    fn read_vec<T: LeBytes>(&mut self) -> Result<Vec<T>>;
    /// Reads exactly `len` elements of type T
    fn read_vec_exact<T: LeBytes>(&mut self, len: usize) -> Result<Vec<T>>;
}

impl<W: Write> VecWriter for W {
    fn write_vec<T: LeBytes>(&mut self, data: &[T]) -> Result<()> {
        let mut buf = Vec::with_capacity(CHUNK_LEN * T::SIZE);
        for chunk in data.chunks(CHUNK_LEN) {
            buf.clear();
            for &x in chunk {
                x.put_le(&mut buf);
            }
            self.write_all(&buf)?;
        }
        Ok(())
    }
}

impl<R: Read> VecReader for R {
    fn read_vec<T: LeBytes>(&mut self) -> Result<Vec<T>> {
        let mut data = Vec::new();
        let mut buf = vec![0u8; CHUNK_LEN * T::SIZE];
        let mut filled = 0;
        loop {
            let n = match self.read(&mut buf[filled..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if n == 0 {
                break;
            }
            filled += n;
            let whole = filled - filled % T::SIZE;
            data.extend(buf[..whole].chunks_exact(T::SIZE).map(T::get_le));
            buf.copy_within(whole..filled, 0);
            filled -= whole;
        }
        if filled != 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "read_vec() found {} trailing bytes, not a multiple of size ({})",
                    filled,
                    T::SIZE
                ),
            ));
        }
        Ok(data)
    }

    fn read_vec_exact<T: LeBytes>(&mut self, len: usize) -> Result<Vec<T>> {
        let n_bytes = len * T::SIZE;
        // grows with the data actually read, a bogus length can't allocate up front
        let mut bytes = Vec::new();
        self.by_ref().take(n_bytes as u64).read_to_end(&mut bytes)?;
        if bytes.len() != n_bytes {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "read_vec_exact() expected {} bytes but only {} were available",
                    n_bytes,
                    bytes.len()
                ),
            ));
        }
        Ok(bytes.chunks_exact(T::SIZE).map(T::get_le).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_little_endian_layout() {
        let mut out = Vec::new();
        out.write_vec::<u32>(&[0x0403_0201, 7]).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4, 7, 0, 0, 0]);
    }

    #[test]
    fn test_read_vec_spanning_chunks() {
        let data: Vec<u32> = (0..(CHUNK_LEN as u32 * 2 + 5)).collect();
        let mut out = Vec::new();
        out.write_vec(&data).unwrap();
        let read: Vec<u32> = Cursor::new(out).read_vec().unwrap();
        assert_eq!(read, data);
    }

    #[test]
    fn test_read_vec_trailing_bytes() {
        let err = Cursor::new(vec![1u8, 0, 0, 0, 9])
            .read_vec::<u32>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_vec_exact_sections() {
        let mut out = Vec::new();
        out.write_vec::<u32>(&[2, 3]).unwrap();
        out.write_vec::<u8>(&[1, 2, 3, 4, 5, 6]).unwrap();
        let mut reader = Cursor::new(out);
        let header: Vec<u32> = reader.read_vec_exact(2).unwrap();
        assert_eq!(header, vec![2, 3]);
        let codes: Vec<u8> = reader.read_vec_exact(6).unwrap();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
        // nothing left
        let err = reader.read_vec_exact::<u8>(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
