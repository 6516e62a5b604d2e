#![no_main]

use fuzz::Scenario;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    if let Ok(scenario) = fuzz::registry::Scenario::new(data) {
        if let Err(err) = scenario.run() {
            panic!("{err}: {scenario:?}");
        }
    }
});
