//! Browser-only checks, run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use canvas_kinematics::core::{Clock, SystemClock};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn system_clock_reads_date_now() {
    let clock = SystemClock::new();
    assert!(clock.now_ms() > 1.0e12);
}

#[wasm_bindgen_test]
fn init_installs_console_logger() {
    canvas_kinematics::init();
    log::info!("logger reachable from tests");
    assert_eq!(canvas_kinematics::version(), env!("CARGO_PKG_VERSION"));
}
