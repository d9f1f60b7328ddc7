// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{fmt::Display, sync::OnceLock};

use regex::{Regex, RegexBuilder};

use crate::{
    modifier::{Modifier, Modifiers},
    VerbalError,
};

const START_OF_LINE: &str = "^";
const END_OF_LINE: &str = "$";

// Character classes used when a literal set is empty.
const CLASS_NOTHING: &str = r"[^\s\S]";
const CLASS_EVERYTHING: &str = r"[\s\S]";

// Every `or` nests the body deeper and long literals grow the
// compiled program, so the engine defaults (250 / 10 MiB) are too tight.
const NEST_LIMIT: u32 = 4096;
const SIZE_LIMIT: usize = 1 << 30;

/// Escapes all regular expression meta characters in `text`,
/// so that the result matches `text` literally.
pub fn escape(text: &str) -> String {
    regex::escape(text)
}

/// A regular expression assembled from chainable method calls.
///
/// The pattern text is `(?<flags>)<prefix><body><suffix>`. Methods that
/// accept user text escape it before adding it to the body, only `add`
/// inserts raw regex syntax.
///
/// ```
/// use regex_verbal::Expression;
///
/// let mut exp = Expression::new();
/// exp.start_of_line()
///     .then("http")
///     .maybe("s")
///     .then("://")
///     .something_but(" ")
///     .end_of_line();
///
/// assert!(exp.is_match("https://www.example.com").unwrap());
/// assert!(!exp.is_match("ftp://example.com").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    prefix: String,
    body: String,
    suffix: String,
    modifiers: Modifiers,

    // Cleared by every mutation, filled by the next terminal operation.
    compiled: OnceLock<Regex>,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    pub fn new() -> Self {
        Expression {
            prefix: String::new(),
            body: String::new(),
            suffix: String::new(),
            modifiers: Modifiers::default(),
            compiled: OnceLock::new(),
        }
    }

    fn invalidate(&mut self) {
        self.compiled = OnceLock::new();
    }

    /// Appends raw regex fragments to the body, in order and without separator.
    ///
    /// The fragments are NOT escaped.
    pub fn add(&mut self, fragments: &[&str]) -> &mut Self {
        for fragment in fragments {
            self.body.push_str(fragment);
        }
        self.invalidate();
        self
    }

    /// Appends a single raw regex fragment to the body.
    pub fn add_str(&mut self, fragment: &str) -> &mut Self {
        self.add(&[fragment])
    }

    // Anchors

    pub fn set_start_of_line(&mut self, enable: bool) -> &mut Self {
        self.prefix = if enable {
            START_OF_LINE.to_owned()
        } else {
            String::new()
        };
        self.invalidate();
        self
    }

    pub fn start_of_line(&mut self) -> &mut Self {
        self.set_start_of_line(true)
    }

    pub fn has_start_of_line(&self) -> bool {
        !self.prefix.is_empty()
    }

    pub fn set_end_of_line(&mut self, enable: bool) -> &mut Self {
        self.suffix = if enable {
            END_OF_LINE.to_owned()
        } else {
            String::new()
        };
        self.invalidate();
        self
    }

    pub fn end_of_line(&mut self) -> &mut Self {
        self.set_end_of_line(true)
    }

    pub fn has_end_of_line(&self) -> bool {
        !self.suffix.is_empty()
    }

    // Modifiers

    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.insert(modifier);
        self.invalidate();
        self
    }

    pub fn remove_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.remove(modifier);
        self.invalidate();
        self
    }

    /// Replaces the whole modifier set.
    pub fn with_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers = modifiers;
        self.invalidate();
        self
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Match letters regardless of case.
    pub fn any_case(&mut self) -> &mut Self {
        self.add_modifier(Modifier::CaseInsensitive)
    }

    /// Let `^` and `$` match only at the start and end of the whole text.
    pub fn one_line(&mut self) -> &mut Self {
        self.remove_modifier(Modifier::Multiline)
    }

    /// Let `.` match `\n` as well.
    pub fn match_all_with_dot(&mut self) -> &mut Self {
        self.add_modifier(Modifier::DotMatchesNewline)
    }

    /// Make repetitions lazy by default.
    pub fn ungreedy(&mut self) -> &mut Self {
        self.add_modifier(Modifier::Ungreedy)
    }

    // Literal matchers

    fn add_quantified(&mut self, value: &str, quantifier: &str) -> &mut Self {
        let escaped = escape(value);
        if escaped.is_empty() {
            // a quantifier without an operand is not a valid pattern
            self.add(&["()"])
        } else {
            self.add(&["(", escaped.as_str(), quantifier, ")"])
        }
    }

    fn add_negated_class(&mut self, value: &str, quantifier: &str) -> &mut Self {
        let escaped = escape(value);
        if escaped.is_empty() {
            self.add(&["(", CLASS_EVERYTHING, quantifier, ")"])
        } else {
            self.add(&["([^", escaped.as_str(), "]", quantifier, ")"])
        }
    }

    /// Match the literal exactly once.
    pub fn then(&mut self, value: &str) -> &mut Self {
        self.add(&["(", escape(value).as_str(), ")"])
    }

    pub fn find(&mut self, value: &str) -> &mut Self {
        self.then(value)
    }

    pub fn maybe(&mut self, value: &str) -> &mut Self {
        self.add_quantified(value, "?")
    }

    pub fn at_least_one(&mut self, value: &str) -> &mut Self {
        self.add_quantified(value, "+")
    }

    pub fn any_number_of(&mut self, value: &str) -> &mut Self {
        self.add_quantified(value, "*")
    }

    pub fn multiple(&mut self, value: &str) -> &mut Self {
        self.add_quantified(value, "{2,}")
    }

    /// Zero or one character that is not in `value`.
    pub fn anything_but(&mut self, value: &str) -> &mut Self {
        self.add_negated_class(value, "?")
    }

    /// One or more characters that are not in `value`.
    pub fn something_but(&mut self, value: &str) -> &mut Self {
        self.add_negated_class(value, "+")
    }

    /// Exactly one character from `value`.
    pub fn any_of(&mut self, value: &str) -> &mut Self {
        let escaped = escape(value);
        if escaped.is_empty() {
            self.add(&[CLASS_NOTHING])
        } else {
            self.add(&["[", escaped.as_str(), "]"])
        }
    }

    pub fn any(&mut self, value: &str) -> &mut Self {
        self.any_of(value)
    }

    // Fixed matchers

    /// Zero or more of any character.
    pub fn anything(&mut self) -> &mut Self {
        self.add(&["(?:.*)"])
    }

    /// One or more of any character.
    pub fn something(&mut self) -> &mut Self {
        self.add(&["(?:.+)"])
    }

    /// `\n` or `\r\n`.
    pub fn line_break(&mut self) -> &mut Self {
        self.add(&[r"(\n|(\r\n))"])
    }

    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    pub fn tab(&mut self) -> &mut Self {
        self.add(&[r"\t"])
    }

    pub fn word(&mut self) -> &mut Self {
        self.add(&[r"\w+"])
    }

    /// Match either everything added so far, or the literal `value`.
    ///
    /// This replaces the body instead of appending to it.
    pub fn or(&mut self, value: &str) -> &mut Self {
        let alternative = escape(value);
        self.body = format!("(?:({})|(?:{}))", self.body, alternative);
        self.invalidate();
        self
    }

    // Terminal operations

    /// The pattern text handed to the regex engine, including the
    /// inline flag group. The flag group is omitted when no modifier is set.
    pub fn pattern(&self) -> String {
        let letters = self.modifiers.letters();
        let mut pattern = String::with_capacity(
            letters.len() + self.prefix.len() + self.body.len() + self.suffix.len() + 3,
        );

        if !letters.is_empty() {
            pattern.push_str("(?");
            pattern.push_str(&letters);
            pattern.push(')');
        }

        pattern.push_str(&self.prefix);
        pattern.push_str(&self.body);
        pattern.push_str(&self.suffix);
        pattern
    }

    /// The compiled pattern for the current state, compiling it when
    /// the expression has changed since the last call.
    pub fn compile(&self) -> Result<&Regex, VerbalError> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }

        let pattern = self.pattern();
        log::trace!("compiling pattern `{}`", pattern);

        let regex = RegexBuilder::new(&pattern)
            .nest_limit(NEST_LIMIT)
            .size_limit(SIZE_LIMIT)
            .build()
            .map_err(|source| {
                log::debug!("pattern `{}` rejected: {}", pattern, source);
                VerbalError::Compile {
                    pattern: pattern.clone(),
                    source,
                }
            })?;

        Ok(self.compiled.get_or_init(|| regex))
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool, VerbalError> {
        Ok(self.compile()?.is_match(text))
    }

    pub fn test(&self, text: &str) -> Result<bool, VerbalError> {
        self.is_match(text)
    }

    /// Replaces every non-overlapping match in `text`.
    ///
    /// `replacement` uses the engine's syntax for group references,
    /// e.g. `$1` or `${name}`.
    pub fn replace(&self, text: &str, replacement: &str) -> Result<String, VerbalError> {
        Ok(self
            .compile()?
            .replace_all(text, replacement)
            .into_owned())
    }

    /// Every non-overlapping match in `text`.
    pub fn find_all(&self, text: &str) -> Result<Vec<String>, VerbalError> {
        Ok(self
            .compile()?
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect())
    }

    /// The groups of the first match, group 0 being the whole match.
    pub fn captures(&self, text: &str) -> Result<Option<Vec<Option<String>>>, VerbalError> {
        let captures = match self.compile()?.captures(text) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let groups = captures
            .iter()
            .map(|group| group.map(|m| m.as_str().to_owned()))
            .collect();

        Ok(Some(groups))
    }

    /// The source text of the compiled pattern.
    pub fn to_regex_string(&self) -> Result<String, VerbalError> {
        Ok(self.compile()?.as_str().to_owned())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern())
    }
}
