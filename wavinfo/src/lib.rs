//! Read audio metadata from RIFF/WAVE files for media indexing.
//!
//! wavinfo walks the chunks of a WAV file until it finds the `fmt ` and `data` chunks, and
//! derives the bit rate, duration, MIME type and DLNA profile from them. Audio samples are never
//! decoded, and the `data` chunk body is never read.
//!
//! # Examples
//!
//! ## Reading a file during a scan
//!
//! ```rust,no_run
//! # fn main() -> wavinfo::error::Result<()> {
//! use wavinfo::config::ParseOptions;
//! use wavinfo::probe::Probe;
//!
//! let song = Probe::new("test.wav").options(ParseOptions::new()).read()?;
//!
//! println!("Bit rate: {} bps", song.bitrate());
//! println!("Length: {} ms", song.song_length());
//! println!("MIME: {}", song.mime().unwrap_or("unknown"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Filling in an existing record
//!
//! When the scanner already has a record and has stat'd the file itself, the extractors can be
//! used directly. They never look up the file size on their own.
//!
//! ```rust,no_run
//! # fn main() -> wavinfo::error::Result<()> {
//! use wavinfo::config::ParseOptions;
//! use wavinfo::iff::wav::{get_wav_file_info, get_wav_tags};
//! use wavinfo::song::SongMetadata;
//!
//! let path = "test.wav";
//! let mut song = SongMetadata::new(std::fs::metadata(path)?.len());
//!
//! get_wav_tags(path, &mut song, ParseOptions::new())?;
//! get_wav_file_info(&mut song);
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading from memory
//!
//! ```rust
//! # fn main() -> wavinfo::error::Result<()> {
//! use std::io::Cursor;
//! use wavinfo::iff::wav::WavFile;
//!
//! # let mut bytes = Vec::new();
//! # bytes.extend_from_slice(b"RIFF\x2C\x00\x00\x00WAVEfmt \x10\x00\x00\x00");
//! # bytes.extend_from_slice(&[1, 0, 1, 0, 0x40, 0x1F, 0, 0, 0x80, 0x3E, 0, 0, 2, 0, 16, 0]);
//! # bytes.extend_from_slice(b"data\x80\x3E\x00\x00");
//! # bytes.resize(44 + 16000, 0);
//! let file_size = bytes.len() as u64;
//! let wav = WavFile::read_from(&mut Cursor::new(bytes), file_size)?;
//!
//! assert_eq!(wav.properties().sample_rate(), 8000);
//! assert_eq!(wav.properties().song_length(), 1000);
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Progress is reported through the [`log`](https://docs.rs/log) facade at the `debug` and `trace`
//! levels. Failures are only ever returned, never logged.

pub mod config;
pub mod error;
pub mod file;
pub mod iff;
pub(crate) mod macros;
pub mod probe;
pub mod song;

pub use crate::probe::read_from_path;
