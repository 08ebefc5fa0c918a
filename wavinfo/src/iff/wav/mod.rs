//! WAV specific items
//!
//! ## File notes
//!
//! * Only uncompressed PCM (`WAVE_FORMAT_PCM`) files with a 16 or 18 byte `fmt ` chunk are accepted.
//!   `WAVE_FORMAT_EXTENSIBLE` and floating point files are rejected.
//! * The MIME type defaults to `audio/L16` for every bit depth, see [`MimeStyle`].
//! * A `data` chunk with a size of 0 (common for files written by streaming recorders) has its
//!   size estimated from the file size, assuming a canonical 44 byte header.

mod properties;
pub(crate) mod read;

use crate::config::{MimeStyle, ParseOptions};
use crate::error::Result;
use crate::song::SongMetadata;

use std::io::{Read, Seek};
use std::path::Path;

// Exports
pub use properties::{DLNA_PROFILE, FmtChunk, WavProperties, synthesize};
pub use read::{WavChunks, parse_wav_chunks, read_wav_chunks};

/// A WAV file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct WavFile {
	pub(crate) chunks: WavChunks,
	pub(crate) properties: WavProperties,
}

impl WavFile {
	/// Read a WAV file from a reader
	///
	/// `file_size` is the length of the stream in bytes.
	///
	/// # Errors
	///
	/// See [`read_wav_chunks`] and [`synthesize`]
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> wavinfo::error::Result<()> {
	/// use std::fs::File;
	/// use wavinfo::iff::wav::WavFile;
	///
	/// let mut file = File::open("song.wav")?;
	/// let file_size = file.metadata()?.len();
	///
	/// let wav = WavFile::read_from(&mut file, file_size)?;
	/// println!("{:?}", wav.properties().duration());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, file_size: u64) -> Result<Self>
	where
		R: Read + Seek,
	{
		let chunks = read_wav_chunks(reader, file_size)?;
		let properties = synthesize(&chunks.fmt, chunks.data_length, file_size)?;

		Ok(Self { chunks, properties })
	}

	/// The chunks the properties were read from
	pub fn chunks(&self) -> &WavChunks {
		&self.chunks
	}

	/// The file's audio properties
	pub fn properties(&self) -> &WavProperties {
		&self.properties
	}
}

/// Fill in the audio fields of `song` from the WAV file at `path`
///
/// [`SongMetadata::file_size`] is only used to estimate the length of an empty `data` chunk, the
/// walk reads up to the actual end of the file. On success, the bit rate, sample rate, channel
/// count, length and MIME type are set. On failure, `song` is left untouched.
///
/// # Errors
///
/// See [`parse_wav_chunks`] and [`synthesize`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> wavinfo::error::Result<()> {
/// use wavinfo::config::ParseOptions;
/// use wavinfo::song::SongMetadata;
/// use wavinfo::iff::wav::get_wav_tags;
///
/// let path = "song.wav";
/// let mut song = SongMetadata::new(std::fs::metadata(path)?.len());
///
/// get_wav_tags(path, &mut song, ParseOptions::new())?;
/// println!("{}", song.mime().unwrap());
/// # Ok(()) }
/// ```
pub fn get_wav_tags<P>(path: P, song: &mut SongMetadata, parse_options: ParseOptions) -> Result<()>
where
	P: AsRef<Path>,
{
	let chunks = parse_wav_chunks(path, song.file_size)?;
	let properties = synthesize(&chunks.fmt, chunks.data_length, song.file_size)?;

	commit_properties(song, &properties, parse_options.mime_style);
	Ok(())
}

/// Fill in the fields of `song` that are the same for every WAV file
///
/// This sets the lossless flag and the DLNA profile ([`DLNA_PROFILE`]), and never touches the file.
pub fn get_wav_file_info(song: &mut SongMetadata) {
	song.lossless = true;
	song.dlna_pn = Some(String::from(DLNA_PROFILE));
}

fn commit_properties(song: &mut SongMetadata, properties: &WavProperties, mime_style: MimeStyle) {
	song.bitrate = properties.bitrate;
	song.sample_rate = properties.sample_rate;
	song.channels = properties.channels;
	song.song_length = properties.song_length;
	song.mime = Some(properties.mime_type(mime_style));
}
