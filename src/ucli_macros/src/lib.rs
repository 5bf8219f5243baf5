extern crate proc_macro;

mod commandsgen;

use commandsgen::define_commands_impl;
use proc_macro::TokenStream;

/// Generates a command table and dispatcher module.
///
/// ```ignore
/// define_commands! {
///     mod commands;
///     "ping"      => handlers::ping,
///     "set ?i ?f" => handlers::set,
/// }
///
/// define_commands! {
///     mod commands;
///     path = "src/commands.cfg"
/// }
/// ```
#[proc_macro]
pub fn define_commands(input: TokenStream) -> TokenStream {
    define_commands_impl(input)
}
