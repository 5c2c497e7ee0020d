// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! String and character extensions.
//!
//! All character-level operations work on Unicode scalar values (`char`), not
//! bytes, so multi-byte input is never split mid-character.

use core::fmt::Display;
use core::iter::FusedIterator;
use core::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{ExtError, Result};

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::{FromJson, JsonStyle, ToJson};

/// Extension methods for `str`.
pub trait StrExt {
    /// `true` when every alphabetic character is lowercase. Non-letters are
    /// ignored, so `"hello, world!"` qualifies.
    fn is_lower(&self) -> bool;

    /// `true` when every alphabetic character is uppercase. Non-letters are
    /// ignored.
    fn is_upper(&self) -> bool;

    /// `true` when the alphanumeric characters read the same in both
    /// directions, ignoring case. Input without any alphanumeric character
    /// is not a palindrome.
    ///
    /// ```
    /// use echo_ext::text::StrExt;
    ///
    /// assert!("A man, a plan, a canal, panama".is_palindrome());
    /// assert!(!"".is_palindrome());
    /// ```
    fn is_palindrome(&self) -> bool;

    /// Characters in reverse order.
    fn reversed(&self) -> String;

    /// Splits into consecutive pieces of `size` characters; the last piece
    /// may be shorter.
    ///
    /// A `size` of zero yields a single empty piece.
    ///
    /// ```
    /// use echo_ext::text::StrExt;
    ///
    /// let pieces: Vec<_> = "Hello World".chunks_of(2).collect();
    /// assert_eq!(pieces, ["He", "ll", "o ", "Wo", "rl", "d"]);
    /// ```
    fn chunks_of(&self, size: usize) -> Chunks<'_>;

    /// A random permutation of the characters.
    fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// `length` characters drawn uniformly, with replacement, from `self`.
    fn randomize<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String>;

    /// `None` for the empty string.
    fn non_empty(&self) -> Option<&str>;

    /// `None` for empty or whitespace-only input.
    fn non_blank(&self) -> Option<&str>;

    /// `alternative` when `self` is empty.
    fn or_if_empty<'a>(&'a self, alternative: &'a str) -> &'a str;

    /// `alternative` when `self` is empty or whitespace-only.
    fn or_if_blank<'a>(&'a self, alternative: &'a str) -> &'a str;

    /// Trims surrounding whitespace and parses the remainder.
    ///
    /// ```
    /// use echo_ext::text::StrExt;
    ///
    /// assert_eq!(" 42 ".parse_trimmed::<i32>().ok(), Some(42));
    /// assert!("   ".parse_trimmed::<i32>().is_err());
    /// ```
    fn parse_trimmed<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display;

    /// Standard padded base64 of the UTF-8 bytes.
    fn base64_encode(&self) -> String;

    /// Decodes standard padded base64 into a UTF-8 string.
    fn base64_decode(&self) -> Result<String>;
}

impl StrExt for str {
    fn is_lower(&self) -> bool {
        self.chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_lowercase)
    }

    fn is_upper(&self) -> bool {
        self.chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
    }

    fn is_palindrome(&self) -> bool {
        let folded: Vec<char> = self
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        !folded.is_empty() && folded.iter().eq(folded.iter().rev())
    }

    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    fn chunks_of(&self, size: usize) -> Chunks<'_> {
        Chunks {
            rest: self,
            size,
            done: false,
        }
    }

    fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut chars: Vec<char> = self.chars().collect();
        chars.shuffle(rng);
        chars.into_iter().collect()
    }

    fn randomize<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let chars: Vec<char> = self.chars().collect();
        (0..length)
            .map(|_| chars.choose(rng).copied().ok_or(ExtError::EmptySequence))
            .collect()
    }

    fn non_empty(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }

    fn non_blank(&self) -> Option<&str> {
        (!self.trim().is_empty()).then_some(self)
    }

    fn or_if_empty<'a>(&'a self, alternative: &'a str) -> &'a str {
        self.non_empty().unwrap_or(alternative)
    }

    fn or_if_blank<'a>(&'a self, alternative: &'a str) -> &'a str {
        self.non_blank().unwrap_or(alternative)
    }

    fn parse_trimmed<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(ExtError::BlankInput);
        }
        trimmed.parse::<T>().map_err(|err| {
            debug!(input = trimmed, %err, "failed to parse trimmed input");
            ExtError::Parse(err.to_string())
        })
    }

    fn base64_encode(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    fn base64_decode(&self) -> Result<String> {
        let bytes = STANDARD.decode(self)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Iterator returned by [`StrExt::chunks_of`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    size: usize,
    done: bool,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.size == 0 {
            self.done = true;
            return Some("");
        }
        if self.rest.is_empty() {
            self.done = true;
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.size)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}

impl FusedIterator for Chunks<'_> {}

/// Extension methods for `char`.
pub trait CharExt {
    /// The character repeated `count` times.
    fn repeat_char(self, count: usize) -> String;
}

impl CharExt for char {
    fn repeat_char(self, count: usize) -> String {
        core::iter::repeat_n(self, count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_respect_char_boundaries() {
        let pieces: Vec<_> = "αβγδε".chunks_of(2).collect();
        assert_eq!(pieces, ["αβ", "γδ", "ε"]);
    }

    #[test]
    fn zero_size_chunk_yields_one_empty_piece() {
        let pieces: Vec<_> = "abc".chunks_of(0).collect();
        assert_eq!(pieces, [""]);
    }
}
