/// Options to control how wavinfo reads a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
	pub(crate) mime_style: MimeStyle,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// 	mime_style: MimeStyle::Lpcm,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default MIME style
	pub const DEFAULT_MIME_STYLE: MimeStyle = MimeStyle::Lpcm;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
			mime_style: Self::DEFAULT_MIME_STYLE,
		}
	}

	/// Whether or not to read the audio properties
	///
	/// When disabled, the file is never opened. Only the fields that are fixed for every WAV file
	/// (lossless flag, DLNA profile) are filled in.
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::config::ParseOptions;
	///
	/// // By default, `read_properties` is enabled. Here, we don't want to read them.
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}

	/// The MIME type to advertise, see [`MimeStyle`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::config::{MimeStyle, ParseOptions};
	///
	/// // My renderer refuses `audio/L16`
	/// let parsing_options = ParseOptions::new().mime_style(MimeStyle::XWav);
	/// ```
	pub fn mime_style(&mut self, mime_style: MimeStyle) -> Self {
		self.mime_style = mime_style;
		*self
	}
}

/// The MIME type advertised for a WAV file
///
/// This is what ends up in [`SongMetadata::mime`](crate::song::SongMetadata::mime).
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum MimeStyle {
	/// Raw linear PCM, `audio/L16;rate=<sample rate>;channels=<channels>`
	///
	/// NOTE: This is always `L16`, no matter the bit depth of the file.
	#[default]
	Lpcm,
	/// `audio/x-wav`
	///
	/// Some renderers (the PS3 for one) will only play WAV files advertised this way.
	XWav,
}

impl MimeStyle {
	/// Create the MIME type string for a stream
	///
	/// # Examples
	///
	/// ```rust
	/// use wavinfo::config::MimeStyle;
	///
	/// assert_eq!(
	/// 	MimeStyle::Lpcm.mime_type(44100, 2),
	/// 	"audio/L16;rate=44100;channels=2"
	/// );
	/// assert_eq!(MimeStyle::XWav.mime_type(44100, 2), "audio/x-wav");
	/// ```
	pub fn mime_type(self, sample_rate: u32, channels: u16) -> String {
		match self {
			Self::Lpcm => format!("audio/L16;rate={sample_rate};channels={channels}"),
			Self::XWav => String::from("audio/x-wav"),
		}
	}
}
