#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use wavinfo::iff::wav::WavFile;

fuzz_target!(|data: Vec<u8>| {
	let file_size = data.len() as u64;
	let _ = WavFile::read_from(&mut Cursor::new(data), file_size);
});
