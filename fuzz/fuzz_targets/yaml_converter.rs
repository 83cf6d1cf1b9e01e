#![no_main]
use libfuzzer_sys::fuzz_target;
use yaml2bkl::convert_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(xml) = convert_str(s) {
            assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<makefile"));
        }
    }
});
