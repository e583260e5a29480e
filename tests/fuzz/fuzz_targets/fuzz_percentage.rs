#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Percentage parsing and badge rendering must not panic on any input.
    if let Ok(s) = std::str::from_utf8(data) {
        let (label, tier) = covbadge::badge::color_and_label(covbadge::model::parse_percentage(s));
        let _ = covbadge::badge::render(&label, tier, s);
    }
});
