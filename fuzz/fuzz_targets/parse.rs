#![no_main]
use full_name::{parse_name, Field, ParseOptions, ParsedName};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let parsed = ParsedName::parse(data);

    // Re-casing never changes which field a word lands in
    let forced = parse_name(Some(data), &ParseOptions::new().with_fix_case_override(true));
    for field in Field::ALL {
        assert_eq!(parsed.get(field).is_empty(), forced.get(field).is_empty());
    }
});
