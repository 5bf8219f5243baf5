use core::fmt;

use crate::command::Command;
use crate::words::skip_spaces;

/// Why a line was not dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// The line holds no word at all.
    Empty,

    /// Every command rejected the line.
    NoMatch,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Empty => f.write_str("empty input"),
            DispatchError::NoMatch => f.write_str("no matching command"),
        }
    }
}

/// Offers `line` to each command in order and stops at the first one whose
/// [`Command::try_run`] accepts it. Returns that command's index.
///
/// Leading spaces are dropped before matching.
pub fn dispatch<const MP: usize, const TL: usize>(
    commands: &[Command<'_, MP, TL>],
    line: &str,
) -> Result<usize, DispatchError> {
    dispatch_with(commands, line, Command::try_run)
}

/// [`dispatch`] using [`Command::try_run_strict`].
pub fn dispatch_strict<const MP: usize, const TL: usize>(
    commands: &[Command<'_, MP, TL>],
    line: &str,
) -> Result<usize, DispatchError> {
    dispatch_with(commands, line, Command::try_run_strict)
}

fn dispatch_with<'s, const MP: usize, const TL: usize>(
    commands: &[Command<'s, MP, TL>],
    line: &str,
    run: fn(&Command<'s, MP, TL>, &str) -> bool,
) -> Result<usize, DispatchError> {
    let line = skip_spaces(line);
    if line.is_empty() {
        return Err(DispatchError::Empty);
    }

    match commands.iter().position(|command| run(command, line)) {
        Some(index) => {
            cli_debug!("line '{}' dispatched to command {}", line, index);
            Ok(index)
        }
        None => {
            cli_debug!("no command accepts '{}'", line);
            Err(DispatchError::NoMatch)
        }
    }
}

// ==================== TESTS =======================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Arguments;
    use std::cell::Cell;

    std::thread_local! {
        static LAST: Cell<Option<&'static str>> = const { Cell::new(None) };
    }

    fn ping(_: &Arguments) {
        LAST.with(|last| last.set(Some("ping")));
    }

    fn set(_: &Arguments) {
        LAST.with(|last| last.set(Some("set")));
    }

    fn set_any(_: &Arguments) {
        LAST.with(|last| last.set(Some("set_any")));
    }

    fn last() -> Option<&'static str> {
        LAST.with(Cell::get)
    }

    fn table() -> [Command<'static>; 3] {
        [
            Command::new(&["ping"], ping),
            Command::new(&["set", "?i", "?f"], set),
            Command::new(&["set", "?s"], set_any),
        ]
    }

    #[test]
    fn test_dispatch_picks_first_match() {
        let commands = table();
        assert_eq!(dispatch(&commands, "ping"), Ok(0));
        assert_eq!(last(), Some("ping"));

        // Both `set` commands accept the line, the earlier one wins.
        assert_eq!(dispatch(&commands, "set 1 2.0"), Ok(1));
        assert_eq!(last(), Some("set"));
    }

    #[test]
    fn test_dispatch_skips_leading_spaces() {
        assert_eq!(dispatch(&table(), "   ping"), Ok(0));
    }

    #[test]
    fn test_dispatch_empty_line() {
        assert_eq!(dispatch(&table(), ""), Err(DispatchError::Empty));
        assert_eq!(dispatch(&table(), " \t\r\n"), Err(DispatchError::Empty));
        assert_eq!(last(), None);
    }

    #[test]
    fn test_dispatch_no_match() {
        assert_eq!(dispatch(&table(), "reboot now"), Err(DispatchError::NoMatch));
        assert_eq!(last(), None);
    }

    #[test]
    fn test_dispatch_with_no_commands() {
        let commands: [Command<'static>; 0] = [];
        assert_eq!(dispatch(&commands, "ping"), Err(DispatchError::NoMatch));
    }

    #[test]
    fn test_dispatch_strict_falls_through() {
        let commands = table();
        // `set ?i ?f` rejects "abc" as an integer strictly, `set ?s` takes it.
        assert_eq!(dispatch_strict(&commands, "set abc"), Ok(2));
        assert_eq!(last(), Some("set_any"));
        assert_eq!(dispatch_strict(&commands, "ping extra"), Err(DispatchError::NoMatch));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DispatchError::Empty.to_string(), "empty input");
        assert_eq!(DispatchError::NoMatch.to_string(), "no matching command");
    }
}
