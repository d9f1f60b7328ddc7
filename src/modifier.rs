// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// An engine-level matching option, written as an inline flag
/// in front of the generated pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Modifier {
    /// `^` and `$` match at line boundaries (`m`).
    Multiline,
    /// Letters match both upper and lower case (`i`).
    CaseInsensitive,
    /// `.` also matches `\n` (`s`).
    DotMatchesNewline,
    /// Swap the meaning of greedy and lazy repetitions (`U`).
    Ungreedy,
}

impl Modifier {
    /// All modifiers in canonical flag order.
    pub const ALL: [Modifier; 4] = [
        Modifier::Multiline,
        Modifier::CaseInsensitive,
        Modifier::DotMatchesNewline,
        Modifier::Ungreedy,
    ];

    /// The inline flag letter understood by the regex engine.
    pub fn letter(&self) -> char {
        match self {
            Modifier::Multiline => 'm',
            Modifier::CaseInsensitive => 'i',
            Modifier::DotMatchesNewline => 's',
            Modifier::Ungreedy => 'U',
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Modifier::Multiline => 1,
            Modifier::CaseInsensitive => 1 << 1,
            Modifier::DotMatchesNewline => 1 << 2,
            Modifier::Ungreedy => 1 << 3,
        }
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modifier::Multiline => f.write_str("multiline"),
            Modifier::CaseInsensitive => f.write_str("case_insensitive"),
            Modifier::DotMatchesNewline => f.write_str("dot_matches_newline"),
            Modifier::Ungreedy => f.write_str("ungreedy"),
        }
    }
}

/// A set of independent modifiers.
///
/// The default set has only `Multiline` enabled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// A set with every modifier disabled.
    pub fn empty() -> Self {
        Modifiers { bits: 0 }
    }

    /// A copy of the set with `modifier` enabled.
    pub fn with(self, modifier: Modifier) -> Self {
        Modifiers {
            bits: self.bits | modifier.bit(),
        }
    }

    /// A copy of the set with `modifier` disabled.
    pub fn without(self, modifier: Modifier) -> Self {
        Modifiers {
            bits: self.bits & !modifier.bit(),
        }
    }

    /// Enables `modifier`, a no-op if it is already enabled.
    pub fn insert(&mut self, modifier: Modifier) {
        self.bits |= modifier.bit();
    }

    /// Disables `modifier`, a no-op if it is already disabled.
    pub fn remove(&mut self, modifier: Modifier) {
        self.bits &= !modifier.bit();
    }

    /// Whether `modifier` is enabled.
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.bits & modifier.bit() != 0
    }

    /// Whether every modifier is disabled.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The enabled modifiers, always in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }

    /// The flag letters of the enabled modifiers, e.g. `"miU"`.
    ///
    /// The order follows `Modifier::ALL` and never the order
    /// in which the modifiers were enabled.
    pub fn letters(&self) -> String {
        self.iter().map(|modifier| modifier.letter()).collect()
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty().with(Modifier::Multiline)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Modifier, Modifiers};

    #[test]
    fn test_default_modifiers() {
        let modifiers = Modifiers::default();

        assert!(modifiers.contains(Modifier::Multiline));
        assert!(!modifiers.contains(Modifier::CaseInsensitive));
        assert!(!modifiers.contains(Modifier::DotMatchesNewline));
        assert!(!modifiers.contains(Modifier::Ungreedy));
        assert_eq!(modifiers.letters(), "m");

        assert!(Modifiers::empty().is_empty());
        assert_eq!(Modifiers::empty().letters(), "");
    }

    #[test]
    fn test_letters_order() {
        // enabling order does not matter
        {
            let a = Modifiers::empty()
                .with(Modifier::Ungreedy)
                .with(Modifier::DotMatchesNewline)
                .with(Modifier::CaseInsensitive)
                .with(Modifier::Multiline);

            let b = Modifiers::empty()
                .with(Modifier::Multiline)
                .with(Modifier::CaseInsensitive)
                .with(Modifier::DotMatchesNewline)
                .with(Modifier::Ungreedy);

            assert_eq!(a, b);
            assert_eq!(a.letters(), "misU");
            assert_eq!(b.letters(), "misU");
        }

        // unset flags are omitted
        {
            let modifiers = Modifiers::empty()
                .with(Modifier::Ungreedy)
                .with(Modifier::CaseInsensitive);
            assert_eq!(modifiers.letters(), "iU");

            let modifiers = Modifiers::default()
                .with(Modifier::DotMatchesNewline)
                .without(Modifier::Multiline);
            assert_eq!(modifiers.letters(), "s");
        }
    }

    #[test]
    fn test_insert_and_remove() {
        let mut modifiers = Modifiers::default();

        modifiers.insert(Modifier::CaseInsensitive);
        modifiers.insert(Modifier::CaseInsensitive);
        assert_eq!(modifiers.letters(), "mi");

        modifiers.remove(Modifier::Multiline);
        modifiers.remove(Modifier::Multiline);
        assert_eq!(modifiers.letters(), "i");

        assert_eq!(
            modifiers.iter().collect::<Vec<_>>(),
            vec![Modifier::CaseInsensitive]
        );
    }

    #[test]
    fn test_modifier_display() {
        assert_eq!(Modifier::Multiline.to_string(), "multiline");
        assert_eq!(Modifier::DotMatchesNewline.to_string(), "dot_matches_newline");
        assert_eq!(Modifier::Ungreedy.letter(), 'U');
    }
}
