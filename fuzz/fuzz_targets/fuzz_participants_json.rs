#![no_main]

use libfuzzer_sys::fuzz_target;

use tombola_participants::parse_participants_json;
use tombola_types::FieldNames;

// Arbitrary text either loads or fails with an error, never a panic.
// Loaded participants keep their whole record as payload.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(pool) = parse_participants_json(text, &FieldNames::default()) {
        assert!(pool.iter().all(|p| p.payload.is_object()));
    }
});
