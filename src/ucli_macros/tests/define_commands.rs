use std::cell::RefCell;

use ucli_core::{ArgumentKind, Arguments, DispatchError, MAX_CMD_PARTS, TokenKind};
use ucli_macros::define_commands;

// Each test runs on its own thread; a thread-local log keeps them apart.
std::thread_local! {
    static CALLS: RefCell<Vec<(&'static str, Arguments)>> = const { RefCell::new(Vec::new()) };
}

fn record(name: &'static str, args: &Arguments) {
    CALLS.with(|calls| calls.borrow_mut().push((name, args.clone())));
}

fn calls() -> Vec<(&'static str, Arguments)> {
    CALLS.with(|calls| calls.borrow().clone())
}

mod handlers {
    use super::record;
    use ucli_core::Arguments;

    pub fn ping(args: &Arguments) {
        record("ping", args);
    }

    pub fn set(args: &Arguments) {
        record("set", args);
    }

    pub fn greet(args: &Arguments) {
        record("greet", args);
    }

    pub fn led_on(args: &Arguments) {
        record("led_on", args);
    }

    pub fn led_off(args: &Arguments) {
        record("led_off", args);
    }

    pub fn read(args: &Arguments) {
        record("read", args);
    }
}

define_commands! {
    mod console;
    "ping"        => handlers::ping,
    "set ?i ?f"   => handlers::set,
    "greet   ?s"  => handlers::greet,
}

define_commands! {
    mod from_file;
    path = "tests/commands.cfg"
}

// ==================== INLINE TABLE ====================

#[test]
fn test_table_shape() {
    assert_eq!(console::NUM_COMMANDS, 3);
    assert_eq!(console::SCHEMAS, ["ping", "set ?i ?f", "greet ?s"]);

    let commands = console::get_commands();
    assert_eq!(commands[1].len(), 3);
    assert_eq!(commands[1].tokens()[1].kind(), TokenKind::ArgInteger);
    assert!(commands.iter().all(|c| c.len() <= MAX_CMD_PARTS));
}

#[test]
fn test_dispatch_routes_to_handler() {
    assert_eq!(console::dispatch("set 3 2.5"), Ok(1));

    let calls = calls();
    assert_eq!(calls.len(), 1);
    let (name, args) = &calls[0];
    assert_eq!(*name, "set");
    assert_eq!(args[0].as_text(), "set");
    assert_eq!(args[1].as_int(), 3);
    assert_eq!(args[2].as_float(), 2.5);
}

#[test]
fn test_dispatch_string_argument() {
    assert_eq!(console::dispatch("greet world and more"), Ok(2));
    let (name, args) = &calls()[0];
    assert_eq!(*name, "greet");
    assert_eq!(args[1].kind(), ArgumentKind::Word);
    assert_eq!(args[1].as_text(), "world");
}

#[test]
fn test_dispatch_errors() {
    assert_eq!(console::dispatch("   "), Err(DispatchError::Empty));
    assert_eq!(console::dispatch("reboot"), Err(DispatchError::NoMatch));
    assert!(calls().is_empty());
}

#[test]
fn test_dispatch_strict() {
    assert_eq!(console::dispatch_strict("ping"), Ok(0));
    assert_eq!(console::dispatch_strict("ping now"), Err(DispatchError::NoMatch));
    assert_eq!(console::dispatch_strict("set x 1.0"), Err(DispatchError::NoMatch));
    assert_eq!(calls().len(), 1);
}

// ==================== FILE TABLE ====================

#[test]
fn test_file_table_shape() {
    assert_eq!(from_file::NUM_COMMANDS, 3);
    assert_eq!(from_file::SCHEMAS, ["led on", "led off", "read ?s ?i"]);
}

#[test]
fn test_file_table_dispatch() {
    assert_eq!(from_file::dispatch("led off"), Ok(1));
    assert_eq!(from_file::dispatch("read uart0 64"), Ok(2));

    let calls = calls();
    assert_eq!(calls[0].0, "led_off");
    assert_eq!(calls[1].0, "read");
    assert_eq!(calls[1].1[1].as_text(), "uart0");
    assert_eq!(calls[1].1[2].as_int(), 64);
}

#[test]
fn test_file_table_missing_literal() {
    assert_eq!(from_file::dispatch("led"), Err(DispatchError::NoMatch));
}
