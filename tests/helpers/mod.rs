use std::sync::Once;

use kindreg::debugger::{DebugLevel, set_debug_level};

static INIT: Once = Once::new();

pub fn init_debug_for_tests() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| DebugLevel::from_name(&s))
        .unwrap_or(DebugLevel::Off);

    INIT.call_once(|| {
        set_debug_level(level);
    });
}
