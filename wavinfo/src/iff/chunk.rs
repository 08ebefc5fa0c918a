use crate::error::Result;
use crate::macros::err;

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};

pub(crate) const RIFF_CHUNK_HEADER_SIZE: u64 = 8;

/// A cursor over the chunks of a RIFF stream
///
/// Chunks are always located from the *declared* size of the previous chunk, regardless of how
/// much of its body was actually read. The end of the stream is the only limit, a size reported
/// by the caller may be stale.
pub(crate) struct Chunks {
	pub fourcc: [u8; 4],
	pub size: u32,
	start: u64,
	cursor: u64,
}

impl Chunks {
	/// Start walking at `offset`
	#[must_use]
	pub const fn new(offset: u64) -> Self {
		Self {
			fourcc: [0; 4],
			size: 0,
			start: offset,
			cursor: offset,
		}
	}

	/// Read the next chunk header
	///
	/// Returns `false` if the stream ends before a full header.
	pub fn next<R>(&mut self, data: &mut R) -> Result<bool>
	where
		R: Read + Seek,
	{
		data.seek(SeekFrom::Start(self.cursor))?;

		let mut header = [0; RIFF_CHUNK_HEADER_SIZE as usize];
		if !read_full(data, &mut header)? {
			return Ok(false);
		}

		self.fourcc.copy_from_slice(&header[..4]);
		let size = LittleEndian::read_u32(&header[4..]);

		// The size is unsigned on disk, but anything past `i32::MAX` is treated as corrupt
		if i32::try_from(size).is_err() {
			err!(MalformedChunk(self.fourcc, size));
		}

		self.size = size;
		self.start = self.cursor;
		self.cursor = self.start + RIFF_CHUNK_HEADER_SIZE + u64::from(size);

		Ok(true)
	}

	/// Read the first `N` bytes of the current chunk's body
	///
	/// Returns `None` if the chunk or the stream is too short. This must be called directly after
	/// [`Chunks::next`].
	pub fn read_body<R, const N: usize>(&mut self, data: &mut R) -> Result<Option<[u8; N]>>
	where
		R: Read,
	{
		if (N as u64) > u64::from(self.size) {
			return Ok(None);
		}

		let mut body = [0; N];
		if !read_full(data, &mut body)? {
			return Ok(None);
		}

		Ok(Some(body))
	}

	/// Offset of the current chunk's header
	pub fn start(&self) -> u64 {
		self.start
	}
}

/// Fill `buf` entirely, returning `false` if the stream ends first
pub(crate) fn read_full<R>(data: &mut R, buf: &mut [u8]) -> Result<bool>
where
	R: Read,
{
	match data.read_exact(buf) {
		Ok(()) => Ok(true),
		Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
		Err(e) => Err(e.into()),
	}
}
