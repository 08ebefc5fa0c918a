//! The scanner side of extraction
//!
//! The extractors in [`crate::iff::wav`] expect the caller to know the size of the file. [`Probe`]
//! does that part of the work: it stats the file, builds the [`SongMetadata`], and dispatches
//! to the extractors for the detected [`FileType`].

use crate::config::ParseOptions;
use crate::error::{ErrorKind, Result, WavError};
use crate::file::FileType;
use crate::iff::chunk::read_full;
use crate::iff::wav::{get_wav_file_info, get_wav_tags};
use crate::macros::err;
use crate::song::SongMetadata;

use std::fs::File;
use std::path::{Path, PathBuf};

/// A reader for a single file of a media scan
///
/// The [`FileType`] is inferred from the path's extension, or from the content with
/// [`Probe::guess_file_type`].
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> wavinfo::error::Result<()> {
/// use wavinfo::file::FileType;
/// use wavinfo::probe::Probe;
///
/// let probe = Probe::new("path/to/my.wav");
///
/// // Inferred from the `wav` extension
/// assert_eq!(probe.file_type(), Some(FileType::Wav));
///
/// let song = probe.read()?;
/// println!("{} ms", song.song_length());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Probe {
	path: PathBuf,
	file_type: Option<FileType>,
	options: Option<ParseOptions>,
}

impl Probe {
	/// Create a new `Probe` for the file at `path`
	///
	/// Nothing is read until [`Probe::read`].
	pub fn new<P>(path: P) -> Self
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref().to_path_buf();
		let file_type = FileType::from_path(&path);

		Self {
			path,
			file_type,
			options: None,
		}
	}

	/// Set the [`FileType`], overriding the one inferred from the extension
	#[must_use]
	pub fn set_file_type(mut self, file_type: FileType) -> Self {
		self.file_type = Some(file_type);
		self
	}

	/// Set the [`ParseOptions`] for the Probe
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> wavinfo::error::Result<()> {
	/// use wavinfo::config::{MimeStyle, ParseOptions};
	/// use wavinfo::probe::Probe;
	///
	/// let options = ParseOptions::new().mime_style(MimeStyle::XWav);
	/// let song = Probe::new("path/to/my.wav").options(options).read()?;
	/// # Ok(()) }
	/// ```
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = Some(options);
		self
	}

	/// Returns the current [`FileType`]
	pub fn file_type(&self) -> Option<FileType> {
		self.file_type
	}

	/// Returns the path being probed
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Attempts to get the [`FileType`] based on the file's content
	///
	/// If the content isn't recognized, the current [`FileType`] is kept.
	///
	/// # Errors
	///
	/// * The file can't be opened ([`ErrorKind::Open`])
	/// * The header can't be read
	pub fn guess_file_type(mut self) -> Result<Self> {
		let mut file = File::open(&self.path).map_err(|e| WavError::new(ErrorKind::Open(e)))?;

		let mut header = [0; 12];
		if !read_full(&mut file, &mut header)? {
			return Ok(self);
		}

		if let Some(file_type) = FileType::from_buffer(&header) {
			self.file_type = Some(file_type);
		}

		Ok(self)
	}

	/// Read the file into a new [`SongMetadata`]
	///
	/// # Errors
	///
	/// * No [`FileType`] is known ([`ErrorKind::UnknownFormat`])
	/// * The file can't be stat'd or opened ([`ErrorKind::Open`])
	/// * Any error from the format's extractor, see [`get_wav_tags`]
	pub fn read(self) -> Result<SongMetadata> {
		let Some(file_type) = self.file_type else {
			err!(UnknownFormat);
		};

		let options = self.options.unwrap_or_default();

		let file_size = std::fs::metadata(&self.path)
			.map_err(|e| WavError::new(ErrorKind::Open(e)))?
			.len();

		let mut song = SongMetadata::new(file_size);
		match file_type {
			FileType::Wav => {
				if options.read_properties {
					get_wav_tags(&self.path, &mut song, options)?;
				}

				get_wav_file_info(&mut song);
			},
		}

		Ok(song)
	}
}

/// Read a [`SongMetadata`] from a path
///
/// This is a shorthand for `Probe::new(path).read()`.
///
/// # Errors
///
/// See [`Probe::read`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> wavinfo::error::Result<()> {
/// let song = wavinfo::read_from_path("path/to/my.wav")?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> Result<SongMetadata>
where
	P: AsRef<Path>,
{
	Probe::new(path).read()
}
