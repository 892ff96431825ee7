#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // The home calculator is total over any parseable config
        if let Ok(config) = serde_json::from_str::<homestead::HomeBuilderConfig>(content) {
            let country = homestead::CountryData::default();
            let _ = homestead::compute_home_specification(&config, &country);
        }
    }
});
