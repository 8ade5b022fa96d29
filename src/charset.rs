//! Character class bitset types.

/// The error type used by [`CharSet`].
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// An invalid range was given.
    #[error("invalid range ({0} > {1})")]
    Range(u8, u8),
    /// An unknown shorthand class was given.
    #[error("invalid shorthand class '\\{}'", _0.escape_ascii())]
    Shorthand(u8),
}

const WORDS: usize = 8;

/// A 256-bit byte membership set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CharSet {
    bits: [u32; WORDS],
}

impl CharSet {
    /// Creates a new empty character set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet { bits: [0; WORDS] }
    }

    /// Creates a set holding the members of the shorthand class `\<class_byte>`.
    ///
    /// Upper case spellings still produce the positive set here; whether the
    /// class is negated is recorded by [`CharClass::inverse`].
    ///
    /// # Errors
    ///
    /// If `class_byte` does not name a shorthand class, an [`Error`] is
    /// returned.
    pub fn shorthand(class_byte: u8) -> Result<Self, Error> {
        let mut set = Self::new();
        set.fill(shorthand_bounds(class_byte)?, false);
        Ok(set)
    }

    /// Adds the given byte to the character set.
    #[inline]
    pub const fn add_byte(&mut self, b: u8) {
        self.bits[(b / 32) as usize] |= 1 << (b % 32);
    }

    /// Adds an inclusive range of bytes to the character set.
    ///
    /// # Errors
    ///
    /// If the end of the range is before the start of the range, an [`Error`]
    /// is returned and the set is left untouched.
    pub fn add_range(&mut self, start: u8, end: u8) -> Result<(), Error> {
        if start <= end {
            for b in start..=end {
                self.add_byte(b);
            }
            Ok(())
        } else {
            Err(Error::Range(start, end))
        }
    }

    /// Adds a shorthand class (e.g. `\d`) to the character set. An upper case
    /// spelling adds the complement of the class.
    ///
    /// # Errors
    ///
    /// If `class_byte` does not name a shorthand class, an [`Error`] is
    /// returned.
    pub fn add_shorthand(&mut self, class_byte: u8) -> Result<(), Error> {
        let bounds = shorthand_bounds(class_byte)?;
        self.fill(bounds, class_byte.is_ascii_uppercase());
        Ok(())
    }

    /// Sets every byte in the half-open spans described by `bounds`, or every
    /// byte outside of them when `invert` is set. `bounds` alternates span
    /// starts and ends and must be sorted.
    fn fill(&mut self, bounds: &[u16], invert: bool) {
        let mut on = invert;
        let mut index = 0u16;
        for &next in bounds {
            if on {
                self.set_span(index, next);
            }
            on = !on;
            index = next;
        }

        if on {
            self.set_span(index, 256);
        }
    }

    fn set_span(&mut self, from: u16, to: u16) {
        for b in from..to {
            // `to` never exceeds 256, so every `b` fits a byte.
            #[allow(clippy::cast_possible_truncation)]
            self.add_byte(b as u8);
        }
    }

    /// Returns `true` if the character set contains the given byte.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.bits[(b / 32) as usize] & (1 << (b % 32)) != 0
    }

    /// Returns the number of bytes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterates over the members of the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl FromIterator<u8> for CharSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for b in iter {
            set.add_byte(b);
        }
        set
    }
}

const DIGIT: u16 = b'0' as u16;
const UPPER: u16 = b'A' as u16;
const LOWER: u16 = b'a' as u16;
const UNDERSCORE: u16 = b'_' as u16;

const ALPHA_BOUNDS: [u16; 4] = [UPPER, UPPER + 26, LOWER, LOWER + 26];
const DIGIT_BOUNDS: [u16; 2] = [DIGIT, DIGIT + 10];
// \t \n \v \f \r are contiguous (0x09..=0x0d).
const SPACE_BOUNDS: [u16; 4] = [0x09, 0x0e, 0x20, 0x21];
const WORD_BOUNDS: [u16; 8] = [
    DIGIT,
    DIGIT + 10,
    UPPER,
    UPPER + 26,
    UNDERSCORE,
    UNDERSCORE + 1,
    LOWER,
    LOWER + 26,
];

fn shorthand_bounds(class_byte: u8) -> Result<&'static [u16], Error> {
    Ok(match class_byte.to_ascii_lowercase() {
        b'a' => &ALPHA_BOUNDS,
        b'd' => &DIGIT_BOUNDS,
        b's' => &SPACE_BOUNDS,
        b'w' => &WORD_BOUNDS,
        _ => return Err(Error::Shorthand(class_byte)),
    })
}

/// The payload of a character class AST node: a membership set plus the
/// `inverse` flag set by a leading `^`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CharClass {
    members: CharSet,
    inverse: bool,
}

impl CharClass {
    #[must_use]
    pub const fn new(members: CharSet) -> Self {
        CharClass {
            members,
            inverse: false,
        }
    }

    /// Builds the class for a shorthand escape such as `\d` or `\W`.
    ///
    /// # Errors
    ///
    /// If `class_byte` does not name a shorthand class, an [`Error`] is
    /// returned.
    pub fn shorthand(class_byte: u8) -> Result<Self, Error> {
        Ok(CharClass {
            members: CharSet::shorthand(class_byte)?,
            inverse: class_byte.is_ascii_uppercase(),
        })
    }

    #[inline]
    pub const fn add_member(&mut self, b: u8) {
        self.members.add_byte(b);
    }

    /// Reports raw membership of `b`, ignoring the `inverse` flag.
    #[inline]
    #[must_use]
    pub const fn is_member(&self, b: u8) -> bool {
        self.members.contains(b)
    }

    /// Reports whether `b` is matched by the class, honouring `inverse`.
    #[inline]
    #[must_use]
    pub const fn matches(&self, b: u8) -> bool {
        self.members.contains(b) != self.inverse
    }

    /// Marks the class as inverted.
    #[inline]
    pub const fn invert(&mut self) {
        self.inverse = true;
    }

    #[must_use]
    pub const fn inverse(&self) -> bool {
        self.inverse
    }

    #[must_use]
    pub const fn members(&self) -> &CharSet {
        &self.members
    }

    pub(crate) const fn members_mut(&mut self) -> &mut CharSet {
        &mut self.members
    }
}
