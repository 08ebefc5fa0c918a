use crate::{read, seed, timeout_test};

use wavinfo::error::ErrorKind;

#[test]
fn seed_is_valid() {
	let wav = read(seed()).unwrap();
	assert_eq!(wav.properties().sample_rate(), 44100);
	assert_eq!(wav.properties().stream_len(), 32);
}

#[test]
fn every_truncation() {
	let seed = seed();

	for len in 0..seed.len() {
		let Err(err) = read(seed[..len].to_vec()) else {
			// Everything after the data chunk header is optional
			assert!(len >= seed.len() - 32, "truncated to {len} bytes");
			continue;
		};

		assert!(
			matches!(
				err.kind(),
				ErrorKind::TruncatedHeader
					| ErrorKind::TruncatedChunk
					| ErrorKind::MalformedFormatChunk
			),
			"truncated to {len} bytes: {err:?}"
		);
	}
}

#[test]
fn every_byte_flipped() {
	let seed = seed();

	for idx in 0..seed.len() {
		for value in [0x00, 0x7F, 0x80, 0xFF] {
			let mut bytes = seed.clone();
			bytes[idx] = value;

			let _ = read(bytes);
		}
	}
}

#[test]
fn huge_chunk_sizes() {
	let mut bytes = seed();
	// The LIST chunk now claims to be nearly 2GiB
	bytes[16..20].copy_from_slice(&0x7FFF_FFFF_u32.to_le_bytes());
	timeout_test(bytes.clone());

	let err = read(bytes).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedChunk));
}

#[test]
fn many_empty_chunks() {
	let seed = seed();

	let mut bytes = seed[..12].to_vec();
	for _ in 0..100_000 {
		bytes.extend_from_slice(b"JUNK\x00\x00\x00\x00");
	}
	bytes.extend_from_slice(&seed[12..]);

	timeout_test(bytes);
}
