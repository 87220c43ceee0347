//! Token assembler: drains a [`Lexer`] and puts the pieces back together.
//!
//! [`parse_origin`] collects the tokens into a [`ParsedOrigin`] record.
//! [`normalize`] skips the record and reassembles the raw token text directly
//! into the canonical SCP-style form.

use crate::error::ParseError;
use crate::lexer::{Lexer, Prefix, Token, TokenKind};
use crate::types::{Component, ParsedOrigin};

/// Split an origin into host, organization, repository and optional `git@`
/// username.
///
/// Each component must appear exactly once and be non-empty. A prefix marker
/// is only accepted as the very first thing in the origin.
pub fn parse_origin(origin: &str) -> Result<ParsedOrigin<'_>, ParseError> {
    let mut host = None;
    let mut org = None;
    let mut repo = None;
    let mut git_username = None;

    for token in Lexer::new(origin) {
        let (slot, component) = match token.kind {
            TokenKind::Prefix(prefix) => {
                let text = checked_prefix(origin, prefix, &token)?;
                if prefix == Prefix::GitUser {
                    git_username = Some(text);
                }
                continue;
            }
            TokenKind::Eof => continue,
            TokenKind::Error(source) => return Err(scan_error(origin, source)),
            TokenKind::Host => (&mut host, Component::Host),
            TokenKind::Org => (&mut org, Component::Org),
            TokenKind::Repo => (&mut repo, Component::Repo),
        };
        if slot.is_some() {
            return Err(ParseError::Trailing {
                origin: origin.to_string(),
                component,
                text: token.text.to_string(),
            });
        }
        *slot = Some(checked(origin, component, token.text)?);
    }

    Ok(ParsedOrigin {
        host: required(origin, Component::Host, host)?,
        org: required(origin, Component::Org, org)?,
        repo: required(origin, Component::Repo, repo)?,
        git_username,
    })
}

/// Rewrite any accepted origin as `[git@]host:org/repo.git`.
///
/// Prefix markers other than `git@` are dropped. Exactly one host,
/// organization and repository must be recovered, in that order.
pub fn normalize(origin: &str) -> Result<String, ParseError> {
    reassemble(origin).inspect_err(|err| tracing::debug!(%err, "rejected origin"))
}

fn reassemble(origin: &str) -> Result<String, ParseError> {
    let mut items: Vec<(Component, &str)> = Vec::with_capacity(3);
    let mut git_username = "";

    for token in Lexer::new(origin) {
        let component = match token.kind {
            TokenKind::Prefix(prefix) => {
                let text = checked_prefix(origin, prefix, &token)?;
                if prefix == Prefix::GitUser {
                    git_username = text;
                }
                continue;
            }
            TokenKind::Eof => continue,
            TokenKind::Error(source) => return Err(scan_error(origin, source)),
            TokenKind::Host => Component::Host,
            TokenKind::Org => Component::Org,
            TokenKind::Repo => Component::Repo,
        };
        items.push((component, token.text));
    }

    match items.as_slice() {
        [(_, host), (_, org), (_, repo)] => {
            let host = checked(origin, Component::Host, host)?;
            let org = checked(origin, Component::Org, org)?;
            let repo = checked(origin, Component::Repo, repo)?;
            Ok(format!("{git_username}{host}:{org}/{repo}.git"))
        }
        [_, _, _, (component, text), ..] => Err(ParseError::Trailing {
            origin: origin.to_string(),
            component: *component,
            text: (*text).to_string(),
        }),
        found => Err(ParseError::Incomplete {
            origin: origin.to_string(),
            missing: Component::ALL[found.len()],
        }),
    }
}

fn scan_error(origin: &str, source: crate::lexer::ScanError) -> ParseError {
    ParseError::Scan {
        origin: origin.to_string(),
        source,
    }
}

/// A prefix token must sit at offset 0 and be exactly its literal; the
/// scanner also matches markers mid-string, with any lead-in folded into
/// the token text.
fn checked_prefix<'src>(
    origin: &str,
    prefix: Prefix,
    token: &Token<'src>,
) -> Result<&'src str, ParseError> {
    if token.offset != 0 || token.text != prefix.literal() {
        return Err(ParseError::MisplacedPrefix {
            origin: origin.to_string(),
            text: token.text.to_string(),
            offset: token.offset,
        });
    }
    Ok(token.text)
}

/// Reject empty components, components still holding a `:` or `/`, and
/// components with a leading or trailing `.`.
fn checked<'src>(
    origin: &str,
    component: Component,
    text: &'src str,
) -> Result<&'src str, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Incomplete {
            origin: origin.to_string(),
            missing: component,
        });
    }
    if text.contains([':', '/']) || text.starts_with('.') || text.ends_with('.') {
        return Err(ParseError::InvalidComponent {
            origin: origin.to_string(),
            component,
            text: text.to_string(),
        });
    }
    Ok(text)
}

fn required<'src>(
    origin: &str,
    component: Component,
    value: Option<&'src str>,
) -> Result<&'src str, ParseError> {
    value.ok_or_else(|| ParseError::Incomplete {
        origin: origin.to_string(),
        missing: component,
    })
}
