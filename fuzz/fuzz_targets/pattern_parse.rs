#![no_main]

use libfuzzer_sys::fuzz_target;
use smolder_grid::Pattern;

fuzz_target!(|data: &str| {
    // Pattern::parse should never panic on any input
    let _ = Pattern::parse(data);
});
