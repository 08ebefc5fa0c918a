//! File type detection

use std::ffi::OsStr;
use std::path::Path;

/// List of extensions handled by wavinfo
///
/// This can be used as a filter when scanning directories.
///
/// # Examples
///
/// ```rust,no_run
/// use std::fs;
/// use wavinfo::file::EXTENSIONS;
///
/// # fn main() -> wavinfo::error::Result<()> {
/// for entry in fs::read_dir(".")? {
/// 	let entry = entry?;
///
/// 	let path = entry.path();
/// 	let Some(extension) = path.extension() else {
/// 		continue;
/// 	};
///
/// 	// Skip anything that isn't WAV
/// 	if !EXTENSIONS.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
/// 		continue;
/// 	}
///
/// 	let song = wavinfo::read_from_path(path)?;
/// }
/// # Ok(()) }
/// ```
pub const EXTENSIONS: &[&str] = &[
	// Also update `FileType::from_ext()` below
	"wav", "wave",
];

/// The type of file read
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum FileType {
	Wav,
}

impl FileType {
	/// Attempts to extract a [`FileType`] from an extension
	///
	/// The comparison is case-insensitive.
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::file::FileType;
	///
	/// let extension = "WAV";
	/// assert_eq!(FileType::from_ext(extension), Some(FileType::Wav));
	/// assert_eq!(FileType::from_ext("flac"), None);
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		match ext.as_str() {
			"wav" | "wave" => Some(Self::Wav),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a path
	///
	/// # Examples
	///
	/// ```rust
	/// use std::path::Path;
	/// use wavinfo::file::FileType;
	///
	/// let path = Path::new("path/to/my.wav");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Wav));
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let ext = path.as_ref().extension();
		ext.and_then(Self::from_ext)
	}

	/// Attempts to extract a [`FileType`] from a buffer
	///
	/// The buffer needs to hold at least the 12 byte `RIFF` header.
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::file::FileType;
	///
	/// let header = b"RIFF\x24\x00\x00\x00WAVEfmt ";
	/// assert_eq!(FileType::from_buffer(header), Some(FileType::Wav));
	/// assert_eq!(FileType::from_buffer(b"RIFF\x24\x00\x00\x00AVI "), None);
	/// ```
	pub fn from_buffer(buf: &[u8]) -> Option<Self> {
		match buf {
			[b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Self::Wav),
			_ => None,
		}
	}
}
