use super::properties::{FMT_CHUNK_READ_SIZE, FmtChunk};
use crate::error::{ErrorKind, Result, WavError};
use crate::iff::chunk::{Chunks, read_full};
use crate::macros::err;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

/// Size of the `RIFF` ... `WAVE` header
pub(crate) const RIFF_HEADER_SIZE: u64 = 12;

/// The chunks of a WAV file needed to describe its audio
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct WavChunks {
	pub(crate) fmt: FmtChunk,
	pub(crate) data_length: u32,
	pub(crate) riff_size: u32,
}

impl WavChunks {
	/// The first `fmt ` chunk
	pub fn fmt(&self) -> &FmtChunk {
		&self.fmt
	}

	/// The declared size of the first `data` chunk
	pub fn data_length(&self) -> u32 {
		self.data_length
	}

	/// The size stored in the `RIFF` header
	///
	/// This is not used for anything, writers are often wrong about it.
	pub fn riff_size(&self) -> u32 {
		self.riff_size
	}
}

/// Verifies that the stream is a WAV file and returns the RIFF size
pub(crate) fn verify_wav<R>(data: &mut R) -> Result<u32>
where
	R: Read,
{
	let mut id = [0; RIFF_HEADER_SIZE as usize];
	if !read_full(data, &mut id)? {
		err!(TruncatedHeader);
	}

	if &id[..4] != b"RIFF" {
		err!(InvalidContainer("WAV file doesn't contain a RIFF chunk"));
	}

	if &id[8..] != b"WAVE" {
		err!(InvalidContainer("Found RIFF file, format is not WAVE"));
	}

	log::debug!("File verified to be WAV");
	Ok(LittleEndian::read_u32(&id[4..8]))
}

/// Locate the `fmt ` and `data` chunks of the WAV file at `path`
///
/// `file_size` is the size of the file in bytes, as known by the caller. It is only reported in the
/// logs, the walk itself is bounded by the end of the file. The file is closed before returning,
/// whatever the outcome.
///
/// # Errors
///
/// * `path` can't be opened ([`ErrorKind::Open`])
/// * See [`read_wav_chunks`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> wavinfo::error::Result<()> {
/// use wavinfo::iff::wav::parse_wav_chunks;
///
/// let path = "song.wav";
/// let file_size = std::fs::metadata(path)?.len();
///
/// let chunks = parse_wav_chunks(path, file_size)?;
/// println!("{} channels", chunks.fmt().channels());
/// # Ok(()) }
/// ```
pub fn parse_wav_chunks<P>(path: P, file_size: u64) -> Result<WavChunks>
where
	P: AsRef<Path>,
{
	let mut file = File::open(path).map_err(|e| WavError::new(ErrorKind::Open(e)))?;
	read_wav_chunks(&mut file, file_size)
}

/// Locate the `fmt ` and `data` chunks in a WAV stream
///
/// The stream is expected to be positioned at the start of the `RIFF` header. `file_size` is the
/// caller's idea of the stream length, and is only logged. A stale size never rejects a readable
/// stream. Only the first `fmt ` and `data` chunks are considered, everything else is skipped.
/// The body of the `data` chunk is never read.
///
/// # Errors
///
/// * The stream is shorter than the `RIFF` header ([`ErrorKind::TruncatedHeader`])
/// * The stream isn't `RIFF` ... `WAVE` ([`ErrorKind::InvalidContainer`])
/// * The stream ends before both chunks are found ([`ErrorKind::TruncatedChunk`])
/// * A chunk has an impossible size ([`ErrorKind::MalformedChunk`])
/// * The `fmt ` chunk body is cut short ([`ErrorKind::MalformedFormatChunk`])
/// * The `fmt ` chunk isn't usable PCM ([`ErrorKind::InvalidFormat`])
pub fn read_wav_chunks<R>(data: &mut R, file_size: u64) -> Result<WavChunks>
where
	R: Read + Seek,
{
	let riff_size = verify_wav(data)?;
	log::trace!("RIFF size: {riff_size}, file size: {file_size}");

	let mut fmt: Option<FmtChunk> = None;
	let mut data_length: Option<u32> = None;

	let mut chunks = Chunks::new(RIFF_HEADER_SIZE);
	loop {
		if !chunks.next(data)? {
			err!(TruncatedChunk);
		}

		log::trace!(
			"Found chunk {:?} (size: {}) at offset {}",
			String::from_utf8_lossy(&chunks.fourcc),
			chunks.size,
			chunks.start()
		);

		match &chunks.fourcc {
			b"fmt " if fmt.is_none() => {
				FmtChunk::verify_length(chunks.size)?;

				// An 18 byte chunk has its trailing `cbSize` skipped along with the rest of the chunk
				let Some(body) = chunks.read_body::<_, FMT_CHUNK_READ_SIZE>(data)? else {
					err!(MalformedFormatChunk);
				};

				let chunk = FmtChunk::parse(chunks.size, &body);
				chunk.verify()?;

				log::debug!(
					"Found \"fmt \" chunk: {} channel(s), {} Hz, {} bits per sample",
					chunk.channels,
					chunk.sample_rate,
					chunk.bits_per_sample
				);
				fmt = Some(chunk);
			},
			b"data" if data_length.is_none() => {
				log::debug!("Found \"data\" chunk with a length of {}", chunks.size);
				data_length = Some(chunks.size);
			},
			_ => continue,
		}

		if let (Some(fmt), Some(data_length)) = (fmt, data_length) {
			return Ok(WavChunks {
				fmt,
				data_length,
				riff_size,
			});
		}
	}
}
