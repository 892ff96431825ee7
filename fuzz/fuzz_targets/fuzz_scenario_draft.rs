#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz the untrusted form shape - parsing, resolution and the full
        // calculation must never panic
        if let Ok(draft) = serde_json::from_str::<homestead::ScenarioDraft>(content) {
            if let Ok(scenario) = draft.resolve() {
                let budget = homestead::BudgetRange::new(0.0, 1e12, "USD");
                let assumptions = homestead::CostAssumptions::default();
                let _ = homestead::compute_scenario_results(
                    &scenario,
                    &budget,
                    5_000.0,
                    &assumptions,
                );
            }
        }
    }
});
