//! Byte-range access to the source document.

/// Random-access byte-range loader for a read-only document.
///
/// `read_range` fills `buf` starting at the absolute document offset and
/// returns the number of bytes read: fewer than requested only near the end
/// of the document, and 0 at or past it. In-range reads must not fail.
pub trait ByteRangeSource {
    /// Loader failure type.
    type Error;

    /// Read up to `buf.len()` bytes starting at `offset`.
    fn read_range(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// In-memory document, used for embedded resources and tests.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Wrap a byte slice as a document.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Total document length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ByteRangeSource for SliceSource<'_> {
    type Error = core::convert::Infallible;

    fn read_range(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let start = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.bytes.len());
        let n = buf.len().min(self.bytes.len() - start);
        buf[..n].copy_from_slice(&self.bytes[start..start + n]);
        Ok(n)
    }
}

/// Seek-and-read loader over a file on disk.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct FileSource {
    file: std::fs::File,
}

#[cfg(feature = "std")]
impl FileSource {
    /// Open a document file for paging.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self {
            file: std::fs::File::open(path)?,
        })
    }

    /// Wrap an already-open file.
    pub fn new(file: std::fs::File) -> Self {
        Self { file }
    }
}

#[cfg(feature = "std")]
impl ByteRangeSource for FileSource {
    type Error = std::io::Error;

    fn read_range(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
        use std::io::{Read, Seek, SeekFrom};

        self.file.seek(SeekFrom::Start(offset))?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}
