use heapless::Vec;
use ucli_config::{ARG_MAX_TEXT_LEN, MAX_CMD_PARTS};

use crate::argument::{Argument, Arguments};
use crate::token::Token;
use crate::words::{leading_word, next_word, skip_spaces};

/// Callback invoked with the parsed arguments of a matched command.
pub type Handler<const MP: usize = MAX_CMD_PARTS, const TL: usize = ARG_MAX_TEXT_LEN> =
    fn(&Arguments<MP, TL>);

/// A command template: up to `MP` schema tokens plus the handler to call when
/// an input line fits them.
///
/// # Type Parameters
/// - `MP`: maximum number of schema tokens, also the number of argument slots.
/// - `TL`: text capacity of each argument.
#[derive(Debug, Clone)]
pub struct Command<'s, const MP: usize = MAX_CMD_PARTS, const TL: usize = ARG_MAX_TEXT_LEN> {
    tokens: Vec<Token<'s>, MP>,
    handler: Handler<MP, TL>,
}

impl<'s, const MP: usize, const TL: usize> Command<'s, MP, TL> {
    /// Builds a command from schema strings such as `["set", "?i", "?f"]`.
    ///
    /// Tokens beyond `MP` are dropped with a warning.
    pub fn new(schema: &[&'s str], handler: Handler<MP, TL>) -> Self {
        Self::from_tokens(schema.iter().map(|&part| Token::new(part)), handler)
    }

    /// Builds a command from a whitespace separated schema line such as `"set ?i ?f"`.
    pub fn from_line(schema: &'s str, handler: Handler<MP, TL>) -> Self {
        Self::from_tokens(schema.split_ascii_whitespace().map(Token::new), handler)
    }

    /// Builds a command from compiled tokens. Tokens beyond `MP` are dropped
    /// with a warning.
    pub fn from_tokens<I>(tokens: I, handler: Handler<MP, TL>) -> Self
    where
        I: IntoIterator<Item = Token<'s>>,
    {
        let mut kept = Vec::new();
        let mut dropped = 0usize;
        for token in tokens {
            if kept.push(token).is_err() {
                dropped += 1;
            }
        }

        if dropped > 0 {
            cli_warn!(
                "command has {} more tokens than it can hold, increase MAX_CMD_PARTS",
                dropped
            );
        }

        Self { tokens: kept, handler }
    }

    pub fn tokens(&self) -> &[Token<'s>] {
        &self.tokens
    }

    /// Number of schema tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tries to run the command on `input`, returns `true` if it matched and
    /// the handler was called.
    ///
    /// Single pass, no backtracking. Each token parses the word under the
    /// cursor, then the cursor moves past that word and the spaces after it.
    /// Words left over after the last token are ignored. Leading spaces in
    /// `input` are not skipped.
    pub fn try_run(&self, input: &str) -> bool {
        match self.matches(input) {
            Some(arguments) => {
                (self.handler)(&arguments);
                true
            }
            None => false,
        }
    }

    /// The arguments [`try_run`](Self::try_run) would pass to the handler,
    /// without calling it.
    pub fn matches(&self, input: &str) -> Option<Arguments<MP, TL>> {
        let (arguments, _rest) = self.walk(input, |token, cursor| {
            Some(token.parse::<TL>(cursor)).filter(|arg| !arg.is_fail())
        })?;
        Some(arguments)
    }

    /// Like [`try_run`](Self::try_run) with [`Token::parse_strict`]: every
    /// word must fit its token exactly, leading spaces are skipped and extra
    /// trailing words reject the line.
    pub fn try_run_strict(&self, input: &str) -> bool {
        match self.matches_strict(input) {
            Some(arguments) => {
                (self.handler)(&arguments);
                true
            }
            None => false,
        }
    }

    /// The arguments [`try_run_strict`](Self::try_run_strict) would pass to
    /// the handler, without calling it.
    pub fn matches_strict(&self, input: &str) -> Option<Arguments<MP, TL>> {
        let (arguments, rest) =
            self.walk(skip_spaces(input), |token, cursor| token.parse_strict::<TL>(cursor))?;
        if !rest.is_empty() {
            cli_debug!("trailing input '{}' not covered by the schema", rest);
            return None;
        }
        Some(arguments)
    }

    /// Walks `input` in lockstep with the schema. Returns the arguments and
    /// the unconsumed tail, or `None` at the first token that rejects its word.
    /// An empty token ends the schema.
    fn walk<'i, F>(&self, input: &'i str, parse: F) -> Option<(Arguments<MP, TL>, &'i str)>
    where
        F: Fn(&Token<'s>, &str) -> Option<Argument<TL>>,
    {
        let mut arguments = Arguments::new();
        let mut cursor = input;

        for token in &self.tokens {
            if token.is_empty() {
                break;
            }

            let Some(argument) = parse(token, cursor) else {
                cli_debug!("cant parse '{}' according to token '{}'", cursor, token.as_str());
                return None;
            };

            cli_debug!(
                "arg {}: parsed '{}' with token '{}'",
                arguments.len(),
                leading_word(cursor),
                token.as_str()
            );
            arguments.push(argument);

            cursor = next_word(cursor);
        }

        Some((arguments, cursor))
    }
}

// ==================== TESTS =======================
