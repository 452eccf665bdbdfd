//! Fuzz target: `PipelineConfig::from_json` / `LevelConfig::from_json`
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Anything accepted also passes `validate()`
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use signalflow::config::{LevelConfig, PipelineConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(cfg) = PipelineConfig::from_json(text) {
        assert!(cfg.validate().is_ok());
        assert!(cfg.sample_period_ms > 0);
    }
    if let Ok(cfg) = LevelConfig::from_json(text) {
        assert!(cfg.validate().is_ok());
        assert!(cfg.min_level_cm < cfg.max_level_cm);
    }
});
