//! Delimiter configuration.
//!
//! The segment terminator and element separator are fixed once a
//! [`Configuration`] is built. The sub-element separator is announced by the
//! document itself (ISA16), so it starts [`SubElementSeparator::Unset`] and
//! may be assigned exactly once; the only legal transition is `Unset -> Set`.

use crate::error::ConfigError;
use crate::token::Token;

pub const DEFAULT_SEGMENT_TERMINATOR: char = '~';
pub const DEFAULT_ELEMENT_SEPARATOR: char = '*';
pub const DEFAULT_SUB_ELEMENT_SEPARATOR: char = '|';

/// Two-state holder for the sub-element separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubElementSeparator {
    #[default]
    Unset,
    Set(char),
}

impl SubElementSeparator {
    pub fn get(self) -> Option<char> {
        match self {
            SubElementSeparator::Unset => None,
            SubElementSeparator::Set(ch) => Some(ch),
        }
    }
}

/// The three delimiter characters as plain values.
///
/// Used to describe what a reader should start from; the sub-element
/// separator here is only the fallback for documents whose ISA does not
/// announce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub segment_terminator: char,
    pub element_separator: char,
    pub sub_element_separator: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR,
            element_separator: DEFAULT_ELEMENT_SEPARATOR,
            sub_element_separator: DEFAULT_SUB_ELEMENT_SEPARATOR,
        }
    }
}

/// Live delimiter state for one parse or one writer.
///
/// Not shared between documents: the sub-element separator lock is
/// per-instance state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    segment_terminator: char,
    element_separator: char,
    sub_element_separator: SubElementSeparator,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR,
            element_separator: DEFAULT_ELEMENT_SEPARATOR,
            sub_element_separator: SubElementSeparator::Unset,
        }
    }
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn segment_terminator(&self) -> char {
        self.segment_terminator
    }

    pub fn element_separator(&self) -> char {
        self.element_separator
    }

    /// Fails until the separator has been assigned.
    pub fn sub_element_separator(&self) -> Result<char, ConfigError> {
        self.sub_element_separator
            .get()
            .ok_or(ConfigError::SubElementSeparatorUnassigned)
    }

    pub fn sub_element_separator_state(&self) -> SubElementSeparator {
        self.sub_element_separator
    }

    /// Assigns and locks the sub-element separator.
    pub fn set_sub_element_separator(&mut self, separator: char) -> Result<(), ConfigError> {
        if let SubElementSeparator::Set(current) = self.sub_element_separator {
            return Err(ConfigError::SubElementSeparatorLocked {
                current,
                attempted: separator,
            });
        }
        check_distinct(self.segment_terminator, self.element_separator, Some(separator))?;
        self.sub_element_separator = SubElementSeparator::Set(separator);
        Ok(())
    }

    pub fn is_segment_terminator(&self, ch: char) -> bool {
        ch == self.segment_terminator
    }

    pub fn is_element_separator(&self, ch: char) -> bool {
        ch == self.element_separator
    }

    pub fn is_sub_element_separator(&self, ch: char) -> bool {
        self.sub_element_separator.get() == Some(ch)
    }

    /// Maps a delimiter character to its token; `None` for ordinary text.
    pub fn delimiter_token(&self, ch: char) -> Option<Token> {
        if self.is_segment_terminator(ch) {
            Some(Token::SegmentTerminator)
        } else if self.is_element_separator(ch) {
            Some(Token::ElementSeparator)
        } else if self.is_sub_element_separator(ch) {
            Some(Token::SubElementSeparator)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    segment_terminator: Option<char>,
    element_separator: Option<char>,
    sub_element_separator: Option<char>,
}

impl ConfigurationBuilder {
    pub fn segment_terminator(mut self, ch: char) -> Self {
        self.segment_terminator = Some(ch);
        self
    }

    pub fn element_separator(mut self, ch: char) -> Self {
        self.element_separator = Some(ch);
        self
    }

    /// Pre-assigns (and therefore locks) the sub-element separator.
    pub fn sub_element_separator(mut self, ch: char) -> Self {
        self.sub_element_separator = Some(ch);
        self
    }

    /// Starts from `delimiters` but leaves the sub-element separator unset.
    pub fn delimiters(self, delimiters: Delimiters) -> Self {
        self.segment_terminator(delimiters.segment_terminator)
            .element_separator(delimiters.element_separator)
    }

    pub fn build(self) -> Result<Configuration, ConfigError> {
        let segment_terminator = self
            .segment_terminator
            .unwrap_or(DEFAULT_SEGMENT_TERMINATOR);
        let element_separator = self.element_separator.unwrap_or(DEFAULT_ELEMENT_SEPARATOR);
        check_distinct(
            segment_terminator,
            element_separator,
            self.sub_element_separator,
        )?;

        Ok(Configuration {
            segment_terminator,
            element_separator,
            sub_element_separator: self
                .sub_element_separator
                .map_or(SubElementSeparator::Unset, SubElementSeparator::Set),
        })
    }
}

fn check_distinct(
    segment_terminator: char,
    element_separator: char,
    sub_element_separator: Option<char>,
) -> Result<(), ConfigError> {
    if segment_terminator == element_separator {
        return Err(ConfigError::ConflictingDelimiters {
            delimiter: segment_terminator,
            first: "segment terminator",
            second: "element separator",
        });
    }
    match sub_element_separator {
        Some(ch) if ch == segment_terminator => Err(ConfigError::ConflictingDelimiters {
            delimiter: ch,
            first: "segment terminator",
            second: "sub-element separator",
        }),
        Some(ch) if ch == element_separator => Err(ConfigError::ConflictingDelimiters {
            delimiter: ch,
            first: "element separator",
            second: "sub-element separator",
        }),
        _ => Ok(()),
    }
}
