#![no_main]
use libfuzzer_sys::fuzz_target;
use nbtree::{compression::Compression, decode_root_with_opts, DecodeOpts};

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOpts::new().compression(Compression::None);
    let _ = decode_root_with_opts(data, opts);
});
