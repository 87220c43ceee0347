use crate::error::FormatParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target representation for a converted origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `http://host/org/repo`
    Http,
    /// `https://host/org/repo`
    Https,
    /// `[git@]host:org/repo.git`
    Ssh,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Http => "http",
            Format::Https => "https",
            Format::Ssh => "ssh",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Format {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Format::Http),
            "https" => Ok(Format::Https),
            "ssh" => Ok(Format::Ssh),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

/// One of the three path components every origin must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Host,
    Org,
    Repo,
}

impl Component {
    /// Components in the order the scanner produces them.
    pub const ALL: [Component; 3] = [Component::Host, Component::Org, Component::Repo];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Host => "host",
            Component::Org => "organization",
            Component::Repo => "repository",
        };
        write!(f, "{name}")
    }
}

/// The structural parts of an origin, borrowed from the input string.
///
/// `host`, `org` and `repo` are always non-empty and never contain `:` or
/// `/`. `git_username` is `Some("git@")` only when the origin started with
/// that literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedOrigin<'src> {
    pub host: &'src str,
    pub org: &'src str,
    pub repo: &'src str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_username: Option<&'src str>,
}

impl ParsedOrigin<'_> {
    pub fn to_http_url(&self) -> String {
        format!("http://{}/{}/{}", self.host, self.org, self.repo)
    }

    pub fn to_https_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.org, self.repo)
    }

    /// SCP-style reference. The username is written back verbatim, with no
    /// separator added when it is absent.
    pub fn to_ssh_url(&self) -> String {
        self.to_string()
    }

    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Http => self.to_http_url(),
            Format::Https => self.to_https_url(),
            Format::Ssh => self.to_ssh_url(),
        }
    }
}

impl fmt::Display for ParsedOrigin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}/{}.git",
            self.git_username.unwrap_or(""),
            self.host,
            self.org,
            self.repo
        )
    }
}
