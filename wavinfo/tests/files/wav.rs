use crate::util::{RiffBuilder, fmt_body, read, temp_file};

use wavinfo::config::{MimeStyle, ParseOptions};
use wavinfo::error::ErrorKind;
use wavinfo::file::FileType;
use wavinfo::iff::wav::{WavFile, parse_wav_chunks};
use wavinfo::probe::Probe;

use std::io::Cursor;

#[test_log::test]
fn canonical_header() {
	// 2.5 seconds of 16-bit stereo at 44.1kHz
	let bytes = RiffBuilder::new().pcm(2, 44100, 16).data(441_000).build();
	assert_eq!(bytes.len(), 44 + 441_000);

	let song = read(&bytes).unwrap();

	assert_eq!(song.bitrate(), 44100 * 2 * 2 * 8);
	assert_eq!(song.sample_rate(), 44100);
	assert_eq!(song.channels(), 2);
	assert_eq!(song.song_length(), 2500);
	assert!(song.is_lossless());
	assert_eq!(song.dlna_profile(), Some("LPCM"));
	assert_eq!(song.mime(), Some("audio/L16;rate=44100;channels=2"));
}

#[test_log::test]
fn duration_is_truncated() {
	// 22050 Hz mono 8-bit, 1001 bytes = 45.3968... ms
	let bytes = RiffBuilder::new().pcm(1, 22050, 8).data(1001).build();

	let song = read(&bytes).unwrap();
	assert_eq!(song.bitrate(), 176_400);
	assert_eq!(song.song_length(), 45);
}

#[test_log::test]
fn l16_mime_for_every_bit_depth() {
	let bytes = RiffBuilder::new().pcm(1, 48000, 24).data(144).build();

	let song = read(&bytes).unwrap();
	assert_eq!(song.bitrate(), 48000 * 24);
	assert_eq!(song.mime(), Some("audio/L16;rate=48000;channels=1"));
}

#[test_log::test]
fn rifx_rejected() {
	let bytes = RiffBuilder::new()
		.signatures(b"RIFX", b"WAVE")
		.pcm(2, 44100, 16)
		.data(4)
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidContainer(_)));
}

#[test_log::test]
fn non_wave_riff_rejected() {
	let bytes = RiffBuilder::new()
		.signatures(b"RIFF", b"AVI ")
		.pcm(2, 44100, 16)
		.data(4)
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidContainer(_)));
}

#[test_log::test]
fn short_header() {
	for len in [0, 4, 11] {
		let bytes = &b"RIFF\x04\x00\x00\x00WAVE"[..len];

		let err = read(bytes).unwrap_err();
		assert!(
			matches!(err.kind(), ErrorKind::TruncatedHeader),
			"{len} bytes: {err:?}"
		);
	}
}

#[test_log::test]
fn fmt_chunk_of_14_bytes() {
	let body = &fmt_body(1, 2, 44100, 16)[..14];
	let bytes = RiffBuilder::new().chunk(b"fmt ", 14, body).build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat(_)));

	// Same outcome when a `data` chunk follows
	let bytes = RiffBuilder::new()
		.chunk(b"fmt ", 14, body)
		.data(16)
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat(_)));
}

#[test_log::test]
fn non_pcm_rejected() {
	// 2 = Microsoft ADPCM
	let bytes = RiffBuilder::new().fmt(2, 2, 44100, 4).data(16).build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat(_)));
}

#[test_log::test]
fn extensible_rejected() {
	let mut body = fmt_body(0xFFFE, 2, 48000, 24);
	// cbSize, valid bits, channel mask, sub format GUID
	body.extend_from_slice(&22_u16.to_le_bytes());
	body.extend_from_slice(&24_u16.to_le_bytes());
	body.extend_from_slice(&3_u32.to_le_bytes());
	body.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0x10, 0, 0x80, 0, 0, 0xAA, 0, 0x38, 0x9B, 0x71]);

	let bytes = RiffBuilder::new()
		.chunk(b"fmt ", 40, &body)
		.data(12)
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat(_)));
}

#[test_log::test]
fn zero_channels_rejected() {
	let bytes = RiffBuilder::new().pcm(0, 44100, 16).data(16).build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat(_)));
}

#[test_log::test]
fn missing_data_chunk() {
	let bytes = RiffBuilder::new()
		.pcm(2, 44100, 16)
		.chunk(b"LIST", 4, b"INFO")
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedChunk));
}

#[test_log::test]
fn missing_fmt_chunk() {
	let bytes = RiffBuilder::new().data(64).build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedChunk));
}

#[test_log::test]
fn truncated_fmt_chunk() {
	let body = &fmt_body(1, 2, 44100, 16)[..12];
	let bytes = RiffBuilder::new().chunk(b"fmt ", 16, body).build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedFormatChunk));
}

#[test_log::test]
fn negative_chunk_length() {
	let bytes = RiffBuilder::new()
		.chunk(b"JUNK", u32::MAX, &[])
		.pcm(2, 44100, 16)
		.data(4)
		.build();

	let err = read(&bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedChunk(..)));
}

#[test_log::test]
fn empty_data_chunk_uses_file_size() {
	// The recorder never went back to fill in the size
	let bytes = RiffBuilder::new()
		.pcm(1, 8000, 16)
		.chunk(b"data", 0, &[])
		.raw(&[0; 8000])
		.build();

	let song = read(&bytes).unwrap();
	assert_eq!(song.file_size(), 8044);
	assert_eq!(song.song_length(), 500);
}

#[test_log::test]
fn list_chunk_skipped() {
	let mut info = b"INFO".to_vec();
	info.extend_from_slice(b"INAM\x06\x00\x00\x00Title\x00");

	let bytes = RiffBuilder::new()
		.chunk(b"LIST", info.len() as u32, &info)
		.pcm(2, 48000, 16)
		.chunk(b"LIST", 4, b"adtl")
		.data(192_000)
		.build();

	let song = read(&bytes).unwrap();
	assert_eq!(song.sample_rate(), 48000);
	assert_eq!(song.channels(), 2);
	assert_eq!(song.song_length(), 1000);
}

#[test_log::test]
fn eighteen_byte_fmt_chunk() {
	let mut body = fmt_body(1, 1, 16000, 16);
	body.extend_from_slice(&[0, 0]);

	let bytes = RiffBuilder::new()
		.chunk(b"fmt ", 18, &body)
		.chunk(b"fact", 4, &[0x10, 0x27, 0, 0])
		.data(32000)
		.build();

	let chunks = parse_wav_chunks(temp_file(&bytes).path(), bytes.len() as u64).unwrap();
	assert_eq!(chunks.fmt().length(), 18);
	assert_eq!(chunks.data_length(), 32000);

	let song = read(&bytes).unwrap();
	assert_eq!(song.song_length(), 1000);
}

#[test_log::test]
fn parsing_is_repeatable() {
	let bytes = RiffBuilder::new()
		.chunk(b"JUNK", 28, &[0; 28])
		.pcm(2, 96000, 16)
		.data(1234)
		.build();

	let first = read(&bytes).unwrap();
	let second = read(&bytes).unwrap();
	assert_eq!(first, second);

	let len = bytes.len() as u64;
	let a = WavFile::read_from(&mut Cursor::new(bytes.clone()), len).unwrap();
	let b = WavFile::read_from(&mut Cursor::new(bytes), len).unwrap();
	assert_eq!(a, b);
}

#[test_log::test]
fn probe_read() {
	let bytes = RiffBuilder::new().pcm(2, 44100, 16).data(17_640).build();
	let file = temp_file(&bytes);

	let probe = Probe::new(file.path());
	assert_eq!(probe.file_type(), Some(FileType::Wav));

	let song = probe
		.options(ParseOptions::new().mime_style(MimeStyle::XWav))
		.read()
		.unwrap();

	assert_eq!(song.file_size(), bytes.len() as u64);
	assert_eq!(song.song_length(), 100);
	assert_eq!(song.mime(), Some("audio/x-wav"));
	assert_eq!(song.dlna_profile(), Some("LPCM"));

	let song = wavinfo::read_from_path(file.path()).unwrap();
	assert_eq!(song.mime(), Some("audio/L16;rate=44100;channels=2"));
}
