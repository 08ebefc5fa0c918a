#![allow(missing_docs)]

use wavinfo::config::{MimeStyle, ParseOptions};
use wavinfo::file::FileType;
use wavinfo::probe::Probe;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "wav_info", about = "Print the audio properties of WAV files")]
struct Opt {
	/// Report `audio/x-wav` instead of `audio/L16`
	#[structopt(short, long)]
	x_wav: bool,

	#[structopt(parse(from_os_str))]
	paths: Vec<PathBuf>,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	let mut options = ParseOptions::new();
	if opt.x_wav {
		options = options.mime_style(MimeStyle::XWav);
	}

	for path in opt.paths {
		if FileType::from_path(&path).is_none() {
			log::warn!("Skipping {}: not a WAV file", path.display());
			continue;
		}

		let song = match Probe::new(&path).options(options).read() {
			Ok(song) => song,
			Err(e) => {
				log::warn!("Failed to read {}: {e}", path.display());
				continue;
			},
		};

		let seconds = song.song_length() / 1000;

		println!("--- {} ---", path.display());
		println!("Size: {} bytes", song.file_size());
		println!("Bitrate: {} bps", song.bitrate());
		println!("Sample Rate: {} Hz", song.sample_rate());
		println!("Channels: {}", song.channels());
		println!(
			"Duration: {:02}:{:02}.{:03}",
			seconds / 60,
			seconds % 60,
			song.song_length() % 1000
		);
		println!("MIME: {}", song.mime().unwrap_or("None"));
		println!("DLNA Profile: {}", song.dlna_profile().unwrap_or("None"));
	}
}
