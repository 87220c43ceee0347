//! Zero-copy scanner for Git remote origins.
//!
//! Splits an origin such as `git@github.com:owner/repo.git` or
//! `https://github.com/owner/repo/` into [`Token`]s that borrow `&'src str`
//! slices straight from the input.
//!
//! The scanner is a small state machine pulled one token at a time through
//! [`Iterator::next`]:
//!
//! - `Text` looks for a literal prefix (`http://`, `https://`, `git@`) or the
//!   first `:` / `/` delimiter
//! - `Host`, `Org` and `Repo` cut the three path components
//! - the stream always ends with exactly one `Eof` or `Error` token, after
//!   which the iterator is exhausted

use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;
use thiserror::Error;

// ── Literals ──────────────────────────────────────────────────────────────────

const HTTP: &str = "http://";
const HTTPS: &str = "https://";
const GIT_USERNAME: &str = "git@";

const COLON: char = ':';
const SLASH: char = '/';
const PERIOD: char = '.';

fn is_delimiter(c: char) -> bool {
    c == COLON || c == SLASH || c == PERIOD
}

// ── Token ─────────────────────────────────────────────────────────────────────

/// Literal marker recognised in front of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    /// `http://`
    Http,
    /// `https://`
    Https,
    /// `git@`
    GitUser,
}

impl Prefix {
    /// The exact text this marker matches.
    pub fn literal(self) -> &'static str {
        match self {
            Prefix::Http => HTTP,
            Prefix::Https => HTTPS,
            Prefix::GitUser => GIT_USERNAME,
        }
    }
}

/// Why the scanner gave up on an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ScanError {
    /// The organisation was never terminated by a `/`.
    #[error("unexpected eof")]
    UnexpectedEof,
    /// The input holds neither a known prefix nor a `:` / `/` delimiter.
    #[error("no recognized prefix and no delimiter found")]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Prefix(Prefix),
    Host,
    Org,
    Repo,
    Eof,
    Error(ScanError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The raw source slice. For `Error` tokens this is the fragment that
    /// was being scanned when the error was raised.
    pub text: &'src str,
    /// Byte offset of `text` within the input.
    pub offset: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error(err) => write!(f, "{err}"),
            _ => write!(f, "<{}>", self.text),
        }
    }
}

// ── Lexer ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Http,
    Https,
    GitUsername,
    Host,
    Org,
    Repo,
    Eof,
    Failed(ScanError),
    Done,
}

#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    input: &'src str,
    /// Start of the token currently being scanned.
    start: usize,
    /// Current byte position.
    pos: usize,
    /// Byte width of the last char returned by `next_char`; 0 once backed up.
    width: usize,
    state: State,
    /// Whether any token has been emitted yet.
    emitted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            state: State::Text,
            emitted: false,
        }
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    // ── cursor ────────────────────────────────────────────────────────────────

    /// Consume and return the next char, or `None` at end of input.
    fn next_char(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the char returned by the last `next_char`.
    /// A second call without an intervening `next_char` does nothing.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek_char(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }

    fn emit(&mut self, kind: TokenKind) -> Token<'src> {
        let token = Token {
            kind,
            text: &self.input[self.start..self.pos],
            offset: self.start,
        };
        tracing::trace!(kind = ?token.kind, text = token.text, offset = token.offset, "emit");
        self.start = self.pos;
        self.emitted = true;
        token
    }

    /// Emit a host/org/repo token, dropping a single leading delimiter left
    /// over from the previous component.
    fn emit_component(&mut self, kind: TokenKind) -> Token<'src> {
        if self.input[self.start..self.pos].starts_with(is_delimiter) {
            self.start += 1;
        }
        self.emit(kind)
    }

    fn error(&mut self, err: ScanError) -> Token<'src> {
        self.state = State::Done;
        self.emit(TokenKind::Error(err))
    }

    // ── states ────────────────────────────────────────────────────────────────

    fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            let token = match self.state {
                State::Done => return None,
                State::Text => {
                    self.state = self.lex_text();
                    continue;
                }
                State::Http => self.lex_prefix(Prefix::Http),
                State::Https => self.lex_prefix(Prefix::Https),
                State::GitUsername => self.lex_prefix(Prefix::GitUser),
                State::Host => self.lex_host(),
                State::Org => self.lex_org(),
                State::Repo => self.lex_repo(),
                State::Eof => {
                    self.state = State::Done;
                    self.emit(TokenKind::Eof)
                }
                State::Failed(err) => self.error(err),
            };
            return Some(token);
        }
    }

    /// Scan forward until a prefix literal or a host delimiter is found.
    fn lex_text(&mut self) -> State {
        loop {
            let rest = &self.input[self.pos..];
            if rest.starts_with(HTTP) {
                return State::Http;
            }
            if rest.starts_with(HTTPS) {
                return State::Https;
            }
            if rest.starts_with(GIT_USERNAME) {
                return State::GitUsername;
            }
            match self.peek_char() {
                Some(COLON | SLASH) => return State::Host,
                Some(_) => {
                    self.next_char();
                }
                None if self.emitted => return State::Eof,
                None => return State::Failed(ScanError::Unrecognized),
            }
        }
    }

    fn lex_prefix(&mut self, prefix: Prefix) -> Token<'src> {
        self.pos += prefix.literal().len();
        let token = self.emit(TokenKind::Prefix(prefix));
        self.next_char();
        self.state = State::Text;
        token
    }

    fn lex_host(&mut self) -> Token<'src> {
        let token = self.emit_component(TokenKind::Host);
        self.next_char();
        self.state = State::Org;
        token
    }

    fn lex_org(&mut self) -> Token<'src> {
        loop {
            if self.peek_char() == Some(SLASH) {
                let token = self.emit_component(TokenKind::Org);
                self.next_char();
                self.state = State::Repo;
                return token;
            }
            if self.next_char().is_none() {
                return self.error(ScanError::UnexpectedEof);
            }
        }
    }

    fn lex_repo(&mut self) -> Token<'src> {
        loop {
            match self.peek_char() {
                Some(PERIOD | SLASH) => {
                    let token = self.emit_component(TokenKind::Repo);
                    self.next_char();
                    self.state = State::Text;
                    return token;
                }
                None => {
                    let token = self.emit_component(TokenKind::Repo);
                    self.state = State::Eof;
                    return token;
                }
                Some(_) => {
                    self.next_char();
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

// ── Tests ─────────────────────────────────────────────────────────────────────
