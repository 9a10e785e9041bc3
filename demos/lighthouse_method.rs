//! Lighthouse method selection demo
//!
//! Runs the method select task against a simulated lighthouse driver that
//! cycles through base station visibility patterns. Watch the RTT log for
//! the method switching between sweep angle and crossing beam.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W (RP2350). No lighthouse deck is needed; the active
//! base station map is simulated.
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --features pico2_w --example lighthouse_method
//! probe-rs run --chip RP2350 target/thumbv8m.main-none-eabihf/release/examples/lighthouse_method
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use lighthouse_select_firmware::core::stores::{
    publish_active_map, register_lighthouse_entries, LighthouseEntries, LOGS, PARAMS,
};
use lighthouse_select_firmware::platform::rp2350::tasks::method_select_task;

/// Simulated visibility patterns, one per second
const PATTERNS: [u32; 6] = [0b0000, 0b0001, 0b0011, 0b0111, 0b0100, 0b1010];

#[embassy_executor::task]
async fn simulated_driver_task(entries: LighthouseEntries) {
    let mut ticker = Ticker::every(Duration::from_secs(1));

    for mask in PATTERNS.iter().cycle() {
        info!("Driver: active map = {}", *mask);
        publish_active_map(&LOGS, &entries, *mask);
        ticker.next().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let _p = embassy_rp::init(Default::default());

    info!("Lighthouse Method Selection Demo");
    info!("================================");

    // Stand-in for the lighthouse driver registering its entries
    let entries = match register_lighthouse_entries(&PARAMS, &LOGS) {
        Ok(entries) => entries,
        Err(e) => defmt::panic!("Failed to register lighthouse entries: {}", e),
    };

    spawner.spawn(simulated_driver_task(entries)).unwrap();
    spawner.spawn(method_select_task()).unwrap();

    info!("All tasks started");
}
