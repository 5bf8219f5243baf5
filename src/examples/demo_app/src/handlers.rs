use std::sync::atomic::{AtomicBool, Ordering};

use ucli_core::Arguments;

static LED: AtomicBool = AtomicBool::new(false);

pub fn ping(_args: &Arguments) {
    println!("pong");
}

pub fn led_on(_args: &Arguments) {
    LED.store(true, Ordering::Relaxed);
    println!("led | ON");
}

pub fn led_off(_args: &Arguments) {
    LED.store(false, Ordering::Relaxed);
    println!("led | OFF");
}

pub fn led_status(_args: &Arguments) {
    let state = if LED.load(Ordering::Relaxed) { "ON" } else { "OFF" };
    println!("led | {}", state);
}

pub fn set_channel(args: &Arguments) {
    println!("set | channel: {}, level: {}", args[1].as_int(), args[2].as_float());
}

pub fn greet(args: &Arguments) {
    println!("Hello, {}!", args[1].as_text());
}

pub fn read(args: &Arguments) {
    println!("read | port: {}, bytes: {}", args[1].as_text(), args[2].as_int());
}
