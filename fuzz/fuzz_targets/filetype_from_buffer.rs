#![no_main]

use libfuzzer_sys::fuzz_target;
use wavinfo::file::FileType;

fuzz_target!(|data: &[u8]| {
	let _ = FileType::from_buffer(data);
});
