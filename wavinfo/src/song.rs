//! The record filled in by the extractors

use std::time::Duration;

/// The metadata of a single song, as collected by a media scanner
///
/// The record is owned by the caller. Each extractor only fills in the fields it knows about, and
/// only once it has fully succeeded. A failed read leaves the record untouched.
///
/// # Examples
///
/// ```rust
/// use wavinfo::song::SongMetadata;
/// use wavinfo::iff::wav::get_wav_file_info;
///
/// let mut song = SongMetadata::new(1_764_044);
/// get_wav_file_info(&mut song);
///
/// assert!(song.is_lossless());
/// assert_eq!(song.dlna_profile(), Some("LPCM"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct SongMetadata {
	pub(crate) file_size: u64,
	pub(crate) bitrate: u64,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u16,
	pub(crate) lossless: bool,
	pub(crate) song_length: u64,
	pub(crate) mime: Option<String>,
	pub(crate) dlna_pn: Option<String>,
}

impl SongMetadata {
	/// Create an empty record for a file of `file_size` bytes
	///
	/// The size is expected to come from the scanner's own `stat` of the file, extractors never
	/// look it up themselves.
	#[must_use]
	pub fn new(file_size: u64) -> Self {
		Self {
			file_size,
			..Self::default()
		}
	}

	/// Size of the file in bytes
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// Bit rate (bits per second)
	pub fn bitrate(&self) -> u64 {
		self.bitrate
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}

	/// Whether the audio is stored losslessly
	pub fn is_lossless(&self) -> bool {
		self.lossless
	}

	/// Length of the song in milliseconds
	pub fn song_length(&self) -> u64 {
		self.song_length
	}

	/// Length of the song
	pub fn duration(&self) -> Duration {
		Duration::from_millis(self.song_length)
	}

	/// MIME type to serve the file as
	pub fn mime(&self) -> Option<&str> {
		self.mime.as_deref()
	}

	/// DLNA profile name
	pub fn dlna_profile(&self) -> Option<&str> {
		self.dlna_pn.as_deref()
	}
}
