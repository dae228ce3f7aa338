#![no_main]

use libfuzzer_sys::fuzz_target;

use tombola_types::Seed;

// Seed parsing never panics, and anything accepted re-encodes to the
// same bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(seed) = Seed::from_hex(text) {
        let again = Seed::from_hex(&seed.to_hex()).expect("canonical encoding must parse");
        assert_eq!(seed, again);
    }
});
