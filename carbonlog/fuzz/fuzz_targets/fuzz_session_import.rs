#![no_main]

use carbonlog::{AttributeDescriptor, AttributeIdentity, SessionState};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let catalog = vec![
            AttributeDescriptor {
                attribute: AttributeIdentity::event("ship", "weight"),
                numeric: true,
            },
            AttributeDescriptor {
                attribute: AttributeIdentity::object("truck", false, "capacity"),
                numeric: true,
            },
        ];

        if let Ok(state) = SessionState::import(s, &catalog) {
            let json = state.to_json().expect("imported state serializes");
            // Values near the decimal range limit may not survive the trip through f64
            if let Ok(again) = SessionState::from_json(&json) {
                assert_eq!(again.emission_rules.len(), state.emission_rules.len());
                assert_eq!(again.attribute_units, state.attribute_units);
            }
        }
    }
});
