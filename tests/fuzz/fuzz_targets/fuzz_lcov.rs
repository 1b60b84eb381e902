#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parser must not panic on any input, and totals stay consistent.
    let totals = lcov_badge::lcov::parse(data);
    assert!(totals.covered_lines <= totals.total_lines);
    assert!(totals.covered_branches <= totals.total_branches);

    let formatted = lcov_badge::format::format_coverage(totals.line_rate());
    let _ = lcov_badge::badge::render(&formatted.display, "#4c1", "coverage");
});
