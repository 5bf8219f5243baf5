use crate::argument::Argument;
use crate::numeric::{leading_float, leading_int, strict_float, strict_int};
use crate::words::leading_word;

/// What a schema token matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenKind {
    /// Literal word compared verbatim.
    #[default]
    Subcommand,
    /// `?s`
    ArgString,
    /// `?i`
    ArgInteger,
    /// `?f`
    ArgDecimal,
}

impl TokenKind {
    /// Exact match against the placeholder markers, anything else is a literal.
    pub fn classify(schema: &str) -> Self {
        match schema {
            "?s" => TokenKind::ArgString,
            "?i" => TokenKind::ArgInteger,
            "?f" => TokenKind::ArgDecimal,
            _ => TokenKind::Subcommand,
        }
    }

    pub const fn is_placeholder(self) -> bool {
        !matches!(self, TokenKind::Subcommand)
    }
}

/// One compiled position of a command template.
///
/// A token borrows its schema text; schemas are normally `'static` literals.
/// `Token::default()` is the empty token: it never parses, and inside a
/// [`Command`](crate::Command) it marks the end of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token<'s> {
    schema: &'s str,
    len: usize,
    kind: TokenKind,
}

impl<'s> Token<'s> {
    /// Compiles `schema`, classifying it once.
    pub fn new(schema: &'s str) -> Self {
        Self {
            schema,
            len: schema.len(),
            kind: TokenKind::classify(schema),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn as_str(&self) -> &'s str {
        self.schema
    }

    /// Byte length of the schema text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parses the word at the start of `word` (the rest of the input line).
    ///
    /// - empty token: `Fail`;
    /// - literal: the first `len()` bytes of `word` must equal the schema,
    ///   the result is the whole leading word as `Word`;
    /// - `?s`: always the leading word (empty if there is none);
    /// - `?i` / `?f`: always succeed, unparsable text reads as zero.
    pub fn parse<const TL: usize>(&self, word: &str) -> Argument<TL> {
        if self.is_empty() {
            return Argument::fail();
        }

        match self.kind {
            TokenKind::Subcommand if self.cmp(word) => Argument::text(word),
            TokenKind::Subcommand => Argument::fail(),
            TokenKind::ArgString => Argument::text(word),
            TokenKind::ArgInteger => Argument::integer(leading_int(word)),
            TokenKind::ArgDecimal => Argument::decimal(leading_float(word)),
        }
    }

    /// Like [`parse`](Self::parse) but the leading word must fit entirely:
    /// literals must equal the schema, placeholders need a non-empty word and
    /// numbers must parse without leftovers (`0x`/`0o`/`0b` accepted for `?i`).
    pub fn parse_strict<const TL: usize>(&self, word: &str) -> Option<Argument<TL>> {
        if self.is_empty() {
            return None;
        }

        let word = leading_word(word);
        if word.is_empty() {
            return None;
        }

        match self.kind {
            TokenKind::Subcommand => (word == self.schema).then(|| Argument::text(word)),
            TokenKind::ArgString => Some(Argument::text(word)),
            TokenKind::ArgInteger => strict_int(word).map(Argument::integer),
            TokenKind::ArgDecimal => strict_float(word).map(Argument::decimal),
        }
    }

    /// Prefix compare of exactly `len()` bytes; `word` may run past the
    /// current word.
    fn cmp(&self, word: &str) -> bool {
        cli_debug!("comparing input '{}' with token '{}'", word, self.schema);
        word.as_bytes().get(..self.len) == Some(self.schema.as_bytes())
    }
}

impl<'s> From<&'s str> for Token<'s> {
    fn from(schema: &'s str) -> Self {
        Token::new(schema)
    }
}

// ==================== TESTS =======================
