//! Contains the errors that can arise within wavinfo
//!
//! The primary error is [`WavError`]. The type of error is determined by [`ErrorKind`].
//!
//! Every error is terminal for the file being read. A media scanner is expected to skip the file
//! and move on to the next one.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, WavError>`
pub type Result<T> = std::result::Result<T, WavError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Unable to determine the format from the path
	UnknownFormat,

	// Container related errors
	/// The file could not be opened for reading
	Open(std::io::Error),
	/// Fewer than 12 bytes were available for the `RIFF`/`WAVE` header
	TruncatedHeader,
	/// The container signature is not `RIFF` ... `WAVE`
	InvalidContainer(&'static str),

	// Chunk related errors
	/// Fewer than 8 bytes were available where a chunk header was expected
	///
	/// This includes reaching the end of the file before both the `fmt ` and `data` chunks were found.
	TruncatedChunk,
	/// A chunk declared a size that is negative when interpreted as a signed 32-bit integer
	MalformedChunk([u8; 4], u32),
	/// Fewer than 16 bytes were available for the `fmt ` chunk body
	MalformedFormatChunk,
	/// The `fmt ` chunk does not describe PCM audio that can be handled
	InvalidFormat(&'static str),

	// Property related errors
	/// The format describes a bit rate of 0, the duration can't be calculated
	DivisionGuard,

	// Conversions for external errors
	/// Represents all other cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within wavinfo
pub struct WavError {
	pub(crate) kind: ErrorKind,
}

impl WavError {
	/// Create a `WavError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::error::{ErrorKind, WavError};
	///
	/// let truncated = WavError::new(ErrorKind::TruncatedHeader);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::error::{ErrorKind, WavError};
	///
	/// let truncated = WavError::new(ErrorKind::TruncatedChunk);
	/// if let ErrorKind::TruncatedChunk = truncated.kind() {
	/// 	println!("Where did the rest of the file go?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for WavError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Open(ref err) | ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for WavError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ErrorKind> for WavError {
	fn from(input: ErrorKind) -> Self {
		Self { kind: input }
	}
}

impl From<std::io::Error> for WavError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for WavError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::UnknownFormat => {
				write!(f, "No format could be determined from the provided file")
			},
			ErrorKind::Open(ref err) => write!(f, "Unable to open file: {err}"),
			ErrorKind::TruncatedHeader => write!(f, "WAV: Unable to read the 12 byte RIFF header"),
			ErrorKind::InvalidContainer(message) => write!(f, "WAV: {message}"),
			ErrorKind::TruncatedChunk => write!(
				f,
				"WAV: Reached the end of the file while expecting a chunk header"
			),
			ErrorKind::MalformedChunk(fourcc, size) => write!(
				f,
				"WAV: Chunk \"{}\" has an invalid size ({size})",
				String::from_utf8_lossy(&fourcc)
			),
			ErrorKind::MalformedFormatChunk => {
				write!(f, "WAV: Unable to read the \"fmt \" chunk")
			},
			ErrorKind::InvalidFormat(message) => write!(f, "WAV: {message}"),
			ErrorKind::DivisionGuard => write!(
				f,
				"WAV: Bit rate is 0, unable to calculate the duration"
			),
		}
	}
}
