use core::fmt;
use core::ops::Index;

use heapless::String;
use ucli_config::{ARG_MAX_TEXT_LEN, MAX_CMD_PARTS};

use crate::words::leading_word;

/// Type tag of an [`Argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentKind {
    Fail,
    Word,
    Integer,
    Decimal,
}

/// Value produced by parsing one input word against one schema token.
///
/// # Type Parameters
/// - `TL`: capacity in bytes of the text payload. Longer words are cut at the
///   last character boundary that fits.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Argument<const TL: usize = ARG_MAX_TEXT_LEN> {
    /// The word did not fit the token.
    #[default]
    Fail,
    /// Text from a `?s` placeholder or a matched literal.
    Word(String<TL>),
    /// Value from a `?i` placeholder.
    Integer(i32),
    /// Value from a `?f` placeholder.
    Decimal(f32),
}

impl<const TL: usize> Argument<TL> {
    pub const fn fail() -> Self {
        Argument::Fail
    }

    pub const fn integer(value: i32) -> Self {
        Argument::Integer(value)
    }

    pub const fn decimal(value: f32) -> Self {
        Argument::Decimal(value)
    }

    /// Builds a `Word` from the leading run of non-space characters of `value`.
    ///
    /// At most `TL` bytes are kept; the cut never splits a character.
    pub fn text(value: &str) -> Self {
        let word = leading_word(value);
        let mut end = word.len().min(TL);
        while !word.is_char_boundary(end) {
            end -= 1;
        }

        let mut text = String::new();
        // `end <= TL`, the push always fits.
        let _ = text.push_str(&word[..end]);
        Argument::Word(text)
    }

    pub const fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Fail => ArgumentKind::Fail,
            Argument::Word(_) => ArgumentKind::Word,
            Argument::Integer(_) => ArgumentKind::Integer,
            Argument::Decimal(_) => ArgumentKind::Decimal,
        }
    }

    pub const fn is_fail(&self) -> bool {
        matches!(self, Argument::Fail)
    }

    /// Text of a `Word`; any other kind logs a warning and yields `""`.
    pub fn as_text(&self) -> &str {
        match self {
            Argument::Word(text) => text.as_str(),
            _ => {
                cli_warn!("trying to get non-word argument as text");
                ""
            }
        }
    }

    /// Value of an `Integer`; any other kind logs a warning and yields `0`.
    pub fn as_int(&self) -> i32 {
        match self {
            Argument::Integer(value) => *value,
            _ => {
                cli_warn!("trying to get non-int argument as integer");
                0
            }
        }
    }

    /// Value of a `Decimal`; any other kind logs a warning and yields `0.0`.
    pub fn as_float(&self) -> f32 {
        match self {
            Argument::Decimal(value) => *value,
            _ => {
                cli_warn!("trying to get non-decimal argument as float");
                0.0
            }
        }
    }
}

impl<const TL: usize> fmt::Display for Argument<TL> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Fail => f.write_str("<fail>"),
            Argument::Word(text) => f.write_str(text),
            Argument::Integer(value) => write!(f, "{value}"),
            Argument::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// Fixed-capacity list of parsed arguments handed to a command handler.
///
/// Slots are filled in schema order, one per token, literal tokens included.
/// Slots past [`len`](Self::len) hold [`Argument::Fail`].
///
/// # Type Parameters
/// - `MP`: number of slots (maximum tokens per command).
/// - `TL`: text capacity of each argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments<const MP: usize = MAX_CMD_PARTS, const TL: usize = ARG_MAX_TEXT_LEN> {
    slots: [Argument<TL>; MP],
    found: usize,
}

impl<const MP: usize, const TL: usize> Arguments<MP, TL> {
    /// All slots `Fail`.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Argument::Fail),
            found: 0,
        }
    }

    /// Stores `argument` in the next free slot. Full lists drop it.
    pub(crate) fn push(&mut self, argument: Argument<TL>) {
        if let Some(slot) = self.slots.get_mut(self.found) {
            *slot = argument;
            self.found += 1;
        }
    }

    /// Number of parsed arguments.
    pub fn len(&self) -> usize {
        self.found
    }

    pub fn is_empty(&self) -> bool {
        self.found == 0
    }

    pub const fn capacity(&self) -> usize {
        MP
    }

    /// Parsed argument at `index`, `None` past [`len`](Self::len).
    pub fn get(&self, index: usize) -> Option<&Argument<TL>> {
        self.slots[..self.found].get(index)
    }

    /// Iterates over the parsed arguments only.
    pub fn iter(&self) -> core::slice::Iter<'_, Argument<TL>> {
        self.slots[..self.found].iter()
    }

    /// Every slot, unused ones included.
    pub fn slots(&self) -> &[Argument<TL>; MP] {
        &self.slots
    }
}

impl<const MP: usize, const TL: usize> Default for Arguments<MP, TL> {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot access like a plain array: unused slots read as `Fail`, indices
/// past the capacity panic.
impl<const MP: usize, const TL: usize> Index<usize> for Arguments<MP, TL> {
    type Output = Argument<TL>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a, const MP: usize, const TL: usize> IntoIterator for &'a Arguments<MP, TL> {
    type Item = &'a Argument<TL>;
    type IntoIter = core::slice::Iter<'a, Argument<TL>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ==================== TESTS =======================
