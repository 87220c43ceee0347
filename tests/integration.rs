use anyhow::Result;
use gitorigin::lexer::ScanError;
use gitorigin::{
    Component, Format, ParseError, convert, http_url_from_origin, https_url_from_origin,
    normalize, parse_origin, repo_name_from_origin, ssh_url_from_origin,
};
use pretty_assertions::assert_eq;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Run `f` over `(name, input, want)` cases, reporting the failing case name.
fn check(f: fn(&str) -> Result<String, ParseError>, cases: &[(&str, &str, &str)]) -> Result<()> {
    for (name, input, want) in cases {
        let got = f(input)?;
        assert_eq!(got, *want, "case `{name}`: input `{input}`");
    }
    Ok(())
}

// ── normalize ────────────────────────────────────────────────────────────────

#[test]
fn test_normalize_reference_cases() -> Result<()> {
    check(
        normalize,
        &[
            (
                "base case",
                "github.com:ali-wetrill/hello-react.git",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "web url",
                "https://github.com/ali-wetrill/hello-react",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "web url trailing slash",
                "https://github.com/ali-wetrill/hello-react/",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "git username prefix",
                "git@github.com:ali-wetrill/hello-react.git",
                "git@github.com:ali-wetrill/hello-react.git",
            ),
            (
                "https with .git suffix",
                "https://github.com/ali-wetrill/hello-react.git",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "bitbucket web url",
                "https://bitbucket.org/classranked/classranked/",
                "bitbucket.org:classranked/classranked.git",
            ),
            (
                "bitbucket ssh url",
                "git@bitbucket.org:classranked/classranked.git",
                "git@bitbucket.org:classranked/classranked.git",
            ),
            (
                "bitbucket ssh url without git username",
                "bitbucket.org:classranked/classranked.git",
                "bitbucket.org:classranked/classranked.git",
            ),
        ],
    )
}

// ── http / https ─────────────────────────────────────────────────────────────

#[test]
fn test_http_url_reference_cases() -> Result<()> {
    check(
        http_url_from_origin,
        &[
            (
                "ssh url w/o git username",
                "github.com:ali-wetrill/hello-react.git",
                "http://github.com/ali-wetrill/hello-react",
            ),
            (
                "ssh url w/ git username",
                "git@github.com:ali-wetrill/hello-react.git",
                "http://github.com/ali-wetrill/hello-react",
            ),
            (
                "http url",
                "http://github.com/ali-wetrill/hello-react",
                "http://github.com/ali-wetrill/hello-react",
            ),
            (
                "https url",
                "https://github.com/ali-wetrill/hello-react",
                "http://github.com/ali-wetrill/hello-react",
            ),
        ],
    )
}

#[test]
fn test_https_url_reference_cases() -> Result<()> {
    check(
        https_url_from_origin,
        &[
            (
                "ssh url w/o git username",
                "github.com:ali-wetrill/hello-react.git",
                "https://github.com/ali-wetrill/hello-react",
            ),
            (
                "ssh url w/ git username",
                "git@github.com:ali-wetrill/hello-react.git",
                "https://github.com/ali-wetrill/hello-react",
            ),
            (
                "http url",
                "http://github.com/ali-wetrill/hello-react",
                "https://github.com/ali-wetrill/hello-react",
            ),
            (
                "https url",
                "https://github.com/ali-wetrill/hello-react",
                "https://github.com/ali-wetrill/hello-react",
            ),
        ],
    )
}

// ── ssh ──────────────────────────────────────────────────────────────────────

#[test]
fn test_ssh_url_reference_cases() -> Result<()> {
    check(
        ssh_url_from_origin,
        &[
            (
                "ssh url w/o git username",
                "github.com:ali-wetrill/hello-react.git",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "ssh url w/ git username",
                "git@github.com:ali-wetrill/hello-react.git",
                "git@github.com:ali-wetrill/hello-react.git",
            ),
            (
                "http url",
                "http://github.com/ali-wetrill/hello-react",
                "github.com:ali-wetrill/hello-react.git",
            ),
            (
                "https url",
                "https://github.com/ali-wetrill/hello-react",
                "github.com:ali-wetrill/hello-react.git",
            ),
        ],
    )
}

// ── repo name ────────────────────────────────────────────────────────────────

#[test]
fn test_repo_name_reference_cases() -> Result<()> {
    check(
        repo_name_from_origin,
        &[
            (
                "ssh url w/o git username",
                "github.com:ali-wetrill/hello-react.git",
                "hello-react",
            ),
            (
                "https url trailing slash",
                "https://bitbucket.org/classranked/classranked/",
                "classranked",
            ),
        ],
    )
}

// ── failures ─────────────────────────────────────────────────────────────────

#[test]
fn test_empty_origin_fails_for_every_entry_point() {
    for f in [
        normalize,
        http_url_from_origin,
        https_url_from_origin,
        ssh_url_from_origin,
        repo_name_from_origin,
    ] {
        assert_eq!(
            f(""),
            Err(ParseError::Scan {
                origin: String::new(),
                source: ScanError::Unrecognized,
            })
        );
    }
}

#[test]
fn test_org_without_repo_is_malformed() {
    let err = ssh_url_from_origin("github.com:ali-wetrill").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse origin `github.com:ali-wetrill`: unexpected eof"
    );
}

#[test]
fn test_username_without_host_is_incomplete() {
    let err = normalize("git@github.com").unwrap_err();
    assert_eq!(
        err,
        ParseError::Incomplete {
            origin: "git@github.com".to_string(),
            missing: Component::Host,
        }
    );
    assert_eq!(err.origin(), "git@github.com");
}

#[test]
fn test_scheme_only_is_incomplete() {
    assert!(matches!(
        http_url_from_origin("https://github.com"),
        Err(ParseError::Incomplete {
            missing: Component::Host,
            ..
        })
    ));
}

#[test]
fn test_prefix_away_from_start_is_rejected() {
    for origin in [
        "h:o/r.git@x",
        "h:o/r/git@x",
        "xgit@host:o/r",
        "xhttps://host/o/r",
    ] {
        assert!(
            matches!(
                parse_origin(origin),
                Err(ParseError::MisplacedPrefix { .. })
            ),
            "origin `{origin}`"
        );
        assert!(ssh_url_from_origin(origin).is_err(), "origin `{origin}`");
        assert!(http_url_from_origin(origin).is_err(), "origin `{origin}`");
        assert!(normalize(origin).is_err(), "origin `{origin}`");
    }
}

#[test]
fn test_stray_periods_are_rejected() {
    for (origin, component) in [
        ("github.com.:o./r", Component::Host),
        ("h:..o/r", Component::Org),
    ] {
        match parse_origin(origin) {
            Err(ParseError::InvalidComponent { component: got, .. }) => {
                assert_eq!(got, component, "origin `{origin}`")
            }
            other => panic!("origin `{origin}`: expected invalid component, got {other:?}"),
        }
        assert!(normalize(origin).is_err(), "origin `{origin}`");
    }
}

// ── structured access ────────────────────────────────────────────────────────

#[test]
fn test_parse_origin_to_json() -> Result<()> {
    let parsed = parse_origin("git@github.com:ali-wetrill/hello-react.git")?;
    let json = serde_json::to_value(parsed)?;
    assert_eq!(
        json,
        serde_json::json!({
            "host": "github.com",
            "org": "ali-wetrill",
            "repo": "hello-react",
            "git_username": "git@",
        })
    );
    Ok(())
}

#[test]
fn test_convert_with_format_parsed_from_str() -> Result<()> {
    let format: Format = "HTTPS".parse()?;
    assert_eq!(
        convert("bitbucket.org:classranked/classranked.git", format)?,
        "https://bitbucket.org/classranked/classranked"
    );
    Ok(())
}
