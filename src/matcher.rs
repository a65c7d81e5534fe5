//! Component grammar for generic URIs.
//!
//! The grammar splits a URI into seven optional segments, claimed left to
//! right, each taking the shortest text that still lets the rest of the
//! input match:
//!
//! ```text
//! [scheme "://"] [user [":" password] "@"] host [":" port] [path] [query] ["#" fragment]
//! ```
//!
//! Every segment except `host` is optional and `host` may be empty, so
//! nearly every string matches. The exception is a line feed, which no
//! segment may contain.

use std::fmt;

use crate::constants::{
    COLON, FRAGMENT_START, PATH_START, QUERY_START, SCHEME_SEPARATOR, USERINFO_TERMINATOR,
};
use crate::error::{ParseError, ParseErrorKind};

/// Characters that end the host (and port) and start the tail of a URI.
const TAIL_START: [char; 3] = [PATH_START, QUERY_START, FRAGMENT_START];

/// Names of the components produced by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// Text before `://`
    Scheme,
    /// User name from the user-info segment
    User,
    /// Password from the user-info segment
    Password,
    /// Host name or address, unvalidated
    Host,
    /// Decimal port digits
    Port,
    /// Path, including its leading `/`
    Path,
    /// Query, including its leading `?`
    Query,
    /// Fragment, without its leading `#`
    Fragment,
}

impl Component {
    /// All components in grammar order.
    pub const ALL: [Self; 8] = [
        Self::Scheme,
        Self::User,
        Self::Password,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Returns the lowercase component name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Password => "password",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successful match: one optional slice per [`Component`].
///
/// `host` is always present after a match, possibly as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Components<'a> {
    scheme: Option<&'a str>,
    user: Option<&'a str>,
    password: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<&'a str>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    /// Returns the text matched for `component`, if any.
    #[must_use]
    pub const fn get(&self, component: Component) -> Option<&'a str> {
        match component {
            Component::Scheme => self.scheme,
            Component::User => self.user,
            Component::Password => self.password,
            Component::Host => self.host,
            Component::Port => self.port,
            Component::Path => self.path,
            Component::Query => self.query,
            Component::Fragment => self.fragment,
        }
    }

    /// Iterates over every component in grammar order, matched or not.
    pub fn iter(&self) -> impl Iterator<Item = (Component, Option<&'a str>)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Matches `input` against the URI grammar.
///
/// The input is matched as given; callers wanting whitespace trimmed must do
/// it first. A single trailing line feed is tolerated by the end anchor and
/// is not part of any component.
///
/// # Errors
///
/// Returns `ParseError` if the input contains a line feed anywhere other
/// than as its last character.
///
/// # Examples
///
/// ```
/// use lax_uri::{match_components, Component};
///
/// let parts = match_components("https://www.example.com:8080/index.html?a=b#top").unwrap();
/// assert_eq!(parts.get(Component::Scheme), Some("https"));
/// assert_eq!(parts.get(Component::Port), Some("8080"));
/// assert_eq!(parts.get(Component::Query), Some("?a=b"));
/// assert_eq!(parts.get(Component::Fragment), Some("top"));
/// assert_eq!(parts.get(Component::User), None);
/// ```
pub fn match_components(input: &str) -> Result<Components<'_>, ParseError> {
    match_inner(input).map_err(|kind| ParseError {
        input: input.to_string(),
        kind,
    })
}

pub(crate) fn match_inner(input: &str) -> Result<Components<'_>, ParseErrorKind> {
    let body = input.strip_suffix('\n').unwrap_or(input);
    if let Some(position) = body.find('\n') {
        return Err(ParseErrorKind::UnexpectedChar {
            char: '\n',
            position,
        });
    }

    let (scheme, rest) = split_scheme(body);
    let (user, password, rest) = split_userinfo(rest);
    let (host, port, rest) = split_host_port(rest);
    let (path, rest) = split_path(rest);
    let (query, fragment) = split_query_fragment(rest);

    Ok(Components {
        scheme,
        user,
        password,
        host: Some(host),
        port,
        path,
        query,
        fragment,
    })
}

fn split_scheme(input: &str) -> (Option<&str>, &str) {
    // The scheme needs at least one character, so the search starts after it.
    let Some(first) = input.chars().next() else {
        return (None, input);
    };
    let skip = first.len_utf8();
    match input[skip..].find(SCHEME_SEPARATOR) {
        Some(idx) => {
            let end = skip + idx;
            (Some(&input[..end]), &input[end + SCHEME_SEPARATOR.len()..])
        }
        None => (None, input),
    }
}

fn split_userinfo(input: &str) -> (Option<&str>, Option<&str>, &str) {
    let Some(last_at) = input.rfind(USERINFO_TERMINATOR) else {
        return (None, None, input);
    };

    // The user needs at least one character, so its first one is never a delimiter.
    for (idx, c) in input.char_indices().skip(1) {
        if idx > last_at {
            break;
        }
        if c == COLON && idx < last_at {
            let pass_start = idx + 1;
            if let Some(at) = input[pass_start..].find(USERINFO_TERMINATOR) {
                let pass_end = pass_start + at;
                return (
                    Some(&input[..idx]),
                    Some(&input[pass_start..pass_end]),
                    &input[pass_end + 1..],
                );
            }
        }
        if c == USERINFO_TERMINATOR {
            return (Some(&input[..idx]), None, &input[idx + 1..]);
        }
    }

    (None, None, input)
}

fn split_host_port(input: &str) -> (&str, Option<&str>, &str) {
    for (idx, c) in input.char_indices() {
        if TAIL_START.contains(&c) {
            return (&input[..idx], None, &input[idx..]);
        }
        if c == COLON {
            let digits_start = idx + 1;
            let after = &input[digits_start..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            let rest = &after[digits..];
            if digits > 0 && starts_tail(rest) {
                return (&input[..idx], Some(&after[..digits]), rest);
            }
        }
    }
    (input, None, "")
}

fn split_path(input: &str) -> (Option<&str>, &str) {
    if !input.starts_with(PATH_START) {
        return (None, input);
    }
    let end = input[1..]
        .find([QUERY_START, FRAGMENT_START])
        .map_or(input.len(), |idx| idx + 1);
    (Some(&input[..end]), &input[end..])
}

fn split_query_fragment(input: &str) -> (Option<&str>, Option<&str>) {
    let (query, rest) = if input.starts_with(QUERY_START) {
        let end = input[1..]
            .find(FRAGMENT_START)
            .map_or(input.len(), |idx| idx + 1);
        (Some(&input[..end]), &input[end..])
    } else {
        (None, input)
    };
    (query, rest.strip_prefix(FRAGMENT_START))
}

fn starts_tail(rest: &str) -> bool {
    rest.chars().next().is_none_or(|c| TAIL_START.contains(&c))
}
