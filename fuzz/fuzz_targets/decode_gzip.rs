#![no_main]
use std::io::Write;

use flate2::{write::GzEncoder, Compression as Level};
use libfuzzer_sys::fuzz_target;
use nbtree::{compression::Compression, decode_root_with_opts, DecodeOpts};

fuzz_target!(|data: &[u8]| {
    let mut enc = GzEncoder::new(Vec::new(), Level::fast());
    if enc.write_all(data).is_err() {
        return;
    }
    let gz = match enc.finish() {
        Ok(gz) => gz,
        Err(_) => return,
    };

    let opts = DecodeOpts::new()
        .compression(Compression::Gzip)
        .max_inflated_len(1024 * 1024);
    let _ = decode_root_with_opts(&gz, opts);
});
