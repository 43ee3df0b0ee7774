#![no_main]

use carbonlog::{resolve_unit, CarbonError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match resolve_unit(s) {
            Ok(unit) => {
                let again = resolve_unit(&unit.symbol).expect("resolved symbols resolve");
                assert_eq!(again, unit);
            }
            Err(CarbonError::UnknownUnit { suggestion, .. }) => assert!(!suggestion.is_empty()),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
});
