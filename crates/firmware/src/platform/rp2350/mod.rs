//! RP2350 (Raspberry Pi Pico 2 W) platform code

pub mod tasks;
