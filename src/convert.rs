use crate::error::ParseError;
use crate::parser::parse_origin;
use crate::types::Format;
use rayon::prelude::*;

// ── single origin ────────────────────────────────────────────────────────────

/// Parse `origin` and render it in `format`.
pub fn convert(origin: &str, format: Format) -> Result<String, ParseError> {
    parse_origin(origin)
        .map(|parsed| parsed.format(format))
        .inspect_err(|err| tracing::debug!(%err, %format, "rejected origin"))
}

/// `http://host/org/repo`
pub fn http_url_from_origin(origin: &str) -> Result<String, ParseError> {
    convert(origin, Format::Http)
}

/// `https://host/org/repo`
pub fn https_url_from_origin(origin: &str) -> Result<String, ParseError> {
    convert(origin, Format::Https)
}

/// `[git@]host:org/repo.git`, keeping the `git@` username only when the
/// origin had one.
pub fn ssh_url_from_origin(origin: &str) -> Result<String, ParseError> {
    convert(origin, Format::Ssh)
}

/// Just the repository name, without any `.git` suffix.
pub fn repo_name_from_origin(origin: &str) -> Result<String, ParseError> {
    parse_origin(origin)
        .map(|parsed| parsed.repo.to_string())
        .inspect_err(|err| tracing::debug!(%err, "rejected origin"))
}

// ── batches ──────────────────────────────────────────────────────────────────

/// Convert many origins in parallel. Each origin is parsed independently;
/// results come back in input order.
pub fn convert_all<S>(origins: &[S], format: Format) -> Vec<Result<String, ParseError>>
where
    S: AsRef<str> + Sync,
{
    origins
        .par_iter()
        .map(|origin| convert(origin.as_ref(), format))
        .collect()
}
