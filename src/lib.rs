//! Normalize and convert Git remote origins.
//!
//! Accepts the three common ways of naming a remote repository and converts
//! between them:
//!
//! - `http://host/org/repo`
//! - `https://host/org/repo[.git][/]`
//! - `[git@]host:org/repo[.git]` (SCP-style SSH)
//!
//! Nothing here touches the network; origins are only tokenised by
//! [`lexer::Lexer`] and reassembled.
//!
//! # Usage
//! ```
//! use gitorigin::{http_url_from_origin, normalize};
//!
//! assert_eq!(
//!     normalize("https://github.com/ali-wetrill/hello-react/").unwrap(),
//!     "github.com:ali-wetrill/hello-react.git"
//! );
//! assert_eq!(
//!     http_url_from_origin("git@github.com:ali-wetrill/hello-react.git").unwrap(),
//!     "http://github.com/ali-wetrill/hello-react"
//! );
//! ```

pub mod convert;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

pub use convert::{
    convert, convert_all, http_url_from_origin, https_url_from_origin, repo_name_from_origin,
    ssh_url_from_origin,
};
pub use error::{FormatParseError, ParseError};
pub use parser::{normalize, parse_origin};
pub use types::{Component, Format, ParsedOrigin};
