//! Delimiter-aware tokenizer.
//!
//! Unlike a fixed-grammar lexer, the delimiters come from the live
//! [`Configuration`]: assigning the sub-element separator mid-stream changes
//! how every following character is classified. The tokenizer reads one
//! character at a time and holds at most one token of lookahead (the
//! delimiter that ended the previous word).

use std::io::{self, BufReader, Read};

use crate::Result;
use crate::config::Configuration;
use crate::location::Location;
use crate::token::Token;

pub struct Tokenizer<R> {
    input: BufReader<R>,
    config: Configuration,
    location: Location,
    lookahead: Option<Token>,
    ignore_line_breaks: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(input: R, config: Configuration) -> Self {
        Self {
            input: BufReader::new(input),
            config,
            location: Location::new(),
            lookahead: None,
            ignore_line_breaks: false,
        }
    }

    /// Drop `\r` and `\n` from words instead of keeping them as text.
    pub fn ignore_line_breaks(mut self, ignore: bool) -> Self {
        self.ignore_line_breaks = ignore;
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }

    pub fn into_parts(self) -> (Configuration, Location) {
        (self.config, self.location)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Trailing whitespace after the last delimiter is not a word.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.lookahead.take() {
            return Ok(Some(token));
        }

        let mut word = String::new();
        while let Some(ch) = self.read_char()? {
            if let Some(delimiter) = self.config.delimiter_token(ch) {
                if word.is_empty() {
                    return Ok(Some(delimiter));
                }
                self.lookahead = Some(delimiter);
                return Ok(Some(Token::Word(word)));
            }
            if self.ignore_line_breaks && matches!(ch, '\r' | '\n') {
                continue;
            }
            word.push(ch);
        }

        if word.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(Token::Word(word)))
        }
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_utf8().into()),
        };

        let mut buf = [lead, 0, 0, 0];
        if width > 1 {
            self.input.read_exact(&mut buf[1..width]).map_err(|err| {
                if err.kind() == io::ErrorKind::UnexpectedEof {
                    invalid_utf8()
                } else {
                    err
                }
            })?;
        }

        let ch = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(invalid_utf8)?;
        self.location.advance(ch);
        Ok(Some(ch))
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream is not valid UTF-8")
}
