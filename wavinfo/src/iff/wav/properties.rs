use crate::config::MimeStyle;
use crate::error::Result;
use crate::macros::err;

use std::time::Duration;

use byteorder::{ByteOrder, LittleEndian};

const PCM: u16 = 0x0001;

/// Number of `fmt ` body bytes that are read
pub(crate) const FMT_CHUNK_READ_SIZE: usize = 16;

/// Size of the header of a canonical PCM WAV file, used to estimate the payload size
const CANONICAL_HEADER_SIZE: u64 = 44;

/// The DLNA profile name of every WAV file
pub const DLNA_PROFILE: &str = "LPCM";

/// The fields of a WAV file's `fmt ` chunk
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct FmtChunk {
	pub(crate) length: u32,
	pub(crate) format_tag: u16,
	pub(crate) channels: u16,
	pub(crate) sample_rate: u32,
	pub(crate) bits_per_sample: u16,
}

impl FmtChunk {
	/// Parse the first 16 bytes of a `fmt ` chunk body, with `length` being the chunk's declared size
	pub(crate) fn parse(length: u32, body: &[u8; FMT_CHUNK_READ_SIZE]) -> Self {
		// Byte rate (4) and block align (2) at 8..14 are ignored
		Self {
			length,
			format_tag: LittleEndian::read_u16(&body[0..2]),
			channels: LittleEndian::read_u16(&body[2..4]),
			sample_rate: LittleEndian::read_u32(&body[4..8]),
			bits_per_sample: LittleEndian::read_u16(&body[14..16]),
		}
	}

	/// Verify that the declared size can belong to a PCM `fmt ` chunk
	pub(crate) fn verify_length(length: u32) -> Result<()> {
		if length != 16 && length != 18 {
			err!(InvalidFormat(
				"Invalid \"fmt \" chunk size found (expected 16 or 18)"
			));
		}

		Ok(())
	}

	/// Verify that the chunk describes PCM audio with at least one channel
	pub(crate) fn verify(&self) -> Result<()> {
		Self::verify_length(self.length)?;

		if self.format_tag != PCM {
			err!(InvalidFormat("Non-PCM format identified"));
		}

		if self.channels == 0 {
			err!(InvalidFormat("File contains 0 channels"));
		}

		Ok(())
	}

	/// The declared size of the chunk body
	pub fn length(&self) -> u32 {
		self.length
	}

	/// Compression code (1 = PCM)
	pub fn format_tag(&self) -> u16 {
		self.format_tag
	}

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Bits per sample
	pub fn bits_per_sample(&self) -> u16 {
		self.bits_per_sample
	}
}

/// A WAV file's audio properties
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct WavProperties {
	pub(crate) bitrate: u64,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u16,
	pub(crate) bit_depth: u16,
	pub(crate) stream_len: u64,
	pub(crate) song_length: u64,
}

impl WavProperties {
	/// Duration of the audio
	pub fn duration(&self) -> Duration {
		Duration::from_millis(self.song_length)
	}

	/// Duration of the audio in milliseconds
	pub fn song_length(&self) -> u64 {
		self.song_length
	}

	/// Bit rate (bits per second)
	pub fn bitrate(&self) -> u64 {
		self.bitrate
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Bits per sample
	pub fn bit_depth(&self) -> u16 {
		self.bit_depth
	}

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}

	/// Number of audio bytes the duration was calculated from
	///
	/// This is either the size of the `data` chunk, or an estimate from the file size when the chunk
	/// declares a size of 0.
	pub fn stream_len(&self) -> u64 {
		self.stream_len
	}

	/// PCM WAV is always lossless
	#[allow(clippy::unused_self)]
	pub fn is_lossless(&self) -> bool {
		true
	}

	/// The DLNA profile name, always [`DLNA_PROFILE`]
	#[allow(clippy::unused_self)]
	pub fn dlna_profile(&self) -> &'static str {
		DLNA_PROFILE
	}

	/// The MIME type for the stream, see [`MimeStyle`]
	pub fn mime_type(&self, style: MimeStyle) -> String {
		style.mime_type(self.sample_rate, self.channels)
	}
}

/// Calculate the audio properties from a verified `fmt ` chunk
///
/// `data_length` is the declared size of the `data` chunk. A size of 0 is taken to mean the
/// writer never filled it in, and `file_size - 44` is used instead.
///
/// # Errors
///
/// * The format describes a bit rate of 0 ([`ErrorKind::DivisionGuard`](crate::error::ErrorKind::DivisionGuard))
///
/// # Examples
///
/// ```rust
/// # fn main() -> wavinfo::error::Result<()> {
/// use std::io::Cursor;
/// use wavinfo::iff::wav::{read_wav_chunks, synthesize};
///
/// # let mut bytes = Vec::new();
/// # bytes.extend_from_slice(b"RIFF\x2C\x00\x00\x00WAVEfmt \x10\x00\x00\x00");
/// # bytes.extend_from_slice(&[1, 0, 2, 0, 0x44, 0xAC, 0, 0, 0x10, 0xB1, 2, 0, 4, 0, 16, 0]);
/// # bytes.extend_from_slice(b"data\x10\x00\x00\x00");
/// # bytes.extend_from_slice(&[0; 16]);
/// let file_size = bytes.len() as u64;
/// let chunks = read_wav_chunks(&mut Cursor::new(bytes), file_size)?;
///
/// let properties = synthesize(chunks.fmt(), chunks.data_length(), file_size)?;
/// assert_eq!(properties.bitrate(), 1_411_200);
/// # Ok(()) }
/// ```
pub fn synthesize(fmt: &FmtChunk, data_length: u32, file_size: u64) -> Result<WavProperties> {
	let stream_len = if data_length == 0 {
		log::debug!("\"data\" chunk is empty, estimating the stream length from the file size");
		file_size.saturating_sub(CANONICAL_HEADER_SIZE)
	} else {
		u64::from(data_length)
	};

	// Samples are stored in whole bytes, a 12-bit sample still takes up 2 bytes
	let bytes_per_sample = u64::from(fmt.bits_per_sample).div_ceil(8);
	let byte_rate = u64::from(fmt.sample_rate) * u64::from(fmt.channels) * bytes_per_sample;
	if byte_rate == 0 {
		err!(DivisionGuard);
	}

	let bitrate = byte_rate * 8;

	let seconds = stream_len / byte_rate;
	// Always < 1000, but the product can exceed 64 bits
	let millis = (u128::from(stream_len % byte_rate) * 1000 / u128::from(byte_rate)) as u64;
	let song_length = seconds.saturating_mul(1000).saturating_add(millis);

	log::debug!(
		"Calculated duration ({song_length} ms) and bit rate ({bitrate} bps) from {stream_len} \
		 bytes of audio"
	);

	Ok(WavProperties {
		bitrate,
		sample_rate: fmt.sample_rate,
		channels: fmt.channels,
		bit_depth: fmt.bits_per_sample,
		stream_len,
		song_length,
	})
}
