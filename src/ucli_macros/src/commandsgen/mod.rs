//! # Command Table Macro
//!
//! Generates a module holding a fixed table of `ucli_core::Command`s and a
//! dispatcher over it, from a list of schema lines.
//!
//! ## Schema Tokens
//!
//! +--------+-----------+   +--------+-----------+
//! | Marker | Argument  |   | Marker | Argument  |
//! +--------+-----------+   +--------+-----------+
//! | ?s     | word      |   | ?f     | decimal   |
//! | ?i     | integer   |   | other  | literal   |
//! +--------+-----------+   +--------+-----------+
//!
//! Examples:
//! - "ping"       => literal only
//! - "set ?i ?f"  => literal, integer, decimal
//!
//! ## Macro Input Format
//! - Inline: `define_commands!{ mod m; "set ?i ?f" => path::to::set, "ping" => path::to::ping }`
//! - File:   `define_commands!{ mod m; path = "src/commands.cfg" }`, one
//!   `schema => path` per line, `#` starts a comment line. The path is
//!   relative to the invoking crate's `CARGO_MANIFEST_DIR`.
//!
//! ## Generated Items
//! * `NUM_COMMANDS`, `SCHEMAS` (normalized schema lines, table order).
//! * `get_commands()` builds the `[Command<'static>; NUM_COMMANDS]` table.
//! * `dispatch(line)` / `dispatch_strict(line)` run the first matching command.
//!
//! Handler paths resolve as they would next to the macro call. Each one is
//! checked against `ucli_core::Handler`. Schemas must be non-empty, unique,
//! and hold at most `MAX_CMD_PARTS` tokens; violations are compile errors.
//!
//! The invoking crate must depend on `ucli_core`.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Result, Token, parse_macro_input};
use ucli_config::MAX_CMD_PARTS;

/// One `"schema" => path` pair.
struct CommandEntry {
    schema: LitStr,
    handler: syn::Path,
}

impl Parse for CommandEntry {
    fn parse(input: ParseStream) -> Result<Self> {
        let schema: LitStr = input.parse()?;
        input.parse::<Token![=>]>()?;
        let handler: syn::Path = input.parse()?;
        Ok(CommandEntry { schema, handler })
    }
}

/// Where the schema lines come from.
enum CommandSource {
    Inline(Vec<CommandEntry>),
    File(LitStr),
}

/// Parsed macro input: `mod <ident>;` followed by the entries or `path = "..."`.
struct CommandMacroInput {
    mod_ident: Ident,
    source: CommandSource,
}

impl Parse for CommandMacroInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // Expect: `mod <ident>;`
        input.parse::<Token![mod]>()?;
        let mod_ident: Ident = input.parse()?;
        input.parse::<Token![;]>()?;

        let source = if input.peek(syn::Ident) && input.peek2(Token![=]) {
            let key: Ident = input.parse()?;
            if key != "path" {
                return Err(syn::Error::new(key.span(), "Unexpected identifier, expected 'path'"));
            }
            input.parse::<Token![=]>()?;
            let path: LitStr = input.parse()?;
            if input.peek(Token![;]) {
                input.parse::<Token![;]>()?;
            }
            CommandSource::File(path)
        } else {
            let entries = Punctuated::<CommandEntry, Token![,]>::parse_terminated(input)?;
            CommandSource::Inline(entries.into_iter().collect())
        };

        Ok(CommandMacroInput { mod_ident, source })
    }
}

/// A validated entry, schema already split into tokens.
struct CompiledEntry {
    parts: Vec<String>,
    span: Span,
    handler: syn::Path,
}

pub fn define_commands_impl(input: TokenStream) -> TokenStream {
    let CommandMacroInput { mod_ident, source } = parse_macro_input!(input as CommandMacroInput);

    match expand(mod_ident, source) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(mod_ident: Ident, source: CommandSource) -> Result<TokenStream2> {
    let (entries, tracked_file) = match source {
        CommandSource::Inline(entries) => (entries, None),
        CommandSource::File(path) => {
            let (raw, full_path) = read_cfg(&path)?;
            (parse_cfg(&raw, path.span())?, Some(full_path))
        }
    };

    let compiled = compile_entries(entries)?;
    let num_commands = compiled.len();

    // Normalized schema lines for diagnostics and UIs.
    let schemas: Vec<LitStr> = compiled
        .iter()
        .map(|e| LitStr::new(&e.parts.join(" "), e.span))
        .collect();

    // One `Command` constructor per entry; the typed binding is the signature check.
    let commands: Vec<TokenStream2> = compiled
        .iter()
        .map(|e| {
            let parts = e.parts.iter().map(|p| LitStr::new(p, e.span));
            let handler = &e.handler;
            quote! {
                {
                    let handler: ::ucli_core::Handler = #handler;
                    ::ucli_core::Command::new(&[ #( #parts ),* ], handler)
                }
            }
        })
        .collect();

    // Rebuild when the descriptor file changes.
    let tracking = tracked_file.map(|full_path| {
        let lit = LitStr::new(&full_path, Span::call_site());
        quote! { const _: &[u8] = include_bytes!(#lit); }
    });

    Ok(quote! {
        #[allow(dead_code)]
        pub mod #mod_ident {
            //! Generated by `define_commands!`. See the macro docs for the schema syntax.

            #[allow(unused_imports)]
            use super::*;

            #tracking

            /// Number of commands in the table.
            pub const NUM_COMMANDS: usize = #num_commands;

            /// Schema line of each command, in table order.
            pub static SCHEMAS: [&str; NUM_COMMANDS] = [ #( #schemas ),* ];

            /// Build the command table (table order is match order).
            pub fn get_commands() -> [::ucli_core::Command<'static>; NUM_COMMANDS] {
                [ #( #commands ),* ]
            }

            /// Run the first command accepting `line`, return its index.
            pub fn dispatch(line: &str) -> ::core::result::Result<usize, ::ucli_core::DispatchError> {
                ::ucli_core::dispatch(&get_commands(), line)
            }

            /// Like `dispatch`, with whole-word matching and no leftover words.
            pub fn dispatch_strict(line: &str) -> ::core::result::Result<usize, ::ucli_core::DispatchError> {
                ::ucli_core::dispatch_strict(&get_commands(), line)
            }
        }
    })
}

/// Split and check every schema: non-empty, within `MAX_CMD_PARTS`, unique.
fn compile_entries(entries: Vec<CommandEntry>) -> Result<Vec<CompiledEntry>> {
    let mut compiled: Vec<CompiledEntry> = Vec::with_capacity(entries.len());

    for CommandEntry { schema, handler } in entries {
        let text = schema.value();
        let parts: Vec<String> = text.split_ascii_whitespace().map(str::to_owned).collect();

        if parts.is_empty() {
            return Err(syn::Error::new(schema.span(), "Empty command schema"));
        }
        if parts.len() > MAX_CMD_PARTS {
            return Err(syn::Error::new(
                schema.span(),
                format!(
                    "Schema `{}` has {} tokens, at most MAX_CMD_PARTS = {} are supported",
                    text,
                    parts.len(),
                    MAX_CMD_PARTS
                ),
            ));
        }
        if compiled.iter().any(|c| c.parts == parts) {
            return Err(syn::Error::new(
                schema.span(),
                format!("Duplicate schema `{}`", parts.join(" ")),
            ));
        }

        compiled.push(CompiledEntry { parts, span: schema.span(), handler });
    }

    Ok(compiled)
}

/// Read the descriptor file relative to the invoking crate's manifest dir.
/// Returns the contents and the absolute path.
fn read_cfg(path: &LitStr) -> Result<(String, String)> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map_err(|_| syn::Error::new(path.span(), "CARGO_MANIFEST_DIR is not set"))?;
    let full_path = std::path::Path::new(&manifest_dir).join(path.value());

    let raw = std::fs::read_to_string(&full_path).map_err(|e| {
        syn::Error::new(
            path.span(),
            format!("Failed to read command descriptor file {:?}: {}", full_path, e),
        )
    })?;

    Ok((raw, full_path.to_string_lossy().into_owned()))
}

/// Parse descriptor file lines: `schema => path`, optional quotes around the
/// schema, blank lines and `#` comments skipped.
fn parse_cfg(raw: &str, span: Span) -> Result<Vec<CommandEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (schema, handler) = line.split_once("=>").ok_or_else(|| {
            syn::Error::new(span, format!("line {}: expected `schema => path`", idx + 1))
        })?;

        let schema = schema.trim().trim_matches('"');
        let handler: syn::Path = syn::parse_str(handler.trim())
            .map_err(|e| syn::Error::new(span, format!("line {}: {}", idx + 1, e)))?;

        entries.push(CommandEntry {
            schema: LitStr::new(schema, span),
            handler,
        });
    }

    Ok(entries)
}

// ================= TESTS ==========================
