//! Main URI value type.

use std::fmt;
use std::str::FromStr;

use crate::constants::{COLON, FRAGMENT_START, SCHEME_SEPARATOR, USERINFO_TERMINATOR};
use crate::error::ParseError;
use crate::matcher::{self, Component};
use crate::query::{self, QueryParams};

/// A URI split into its components.
///
/// Every component is optional, and an absent component is distinct from an
/// empty one: only absent components are left out when the URI is written
/// back out. Nothing is validated beyond the structural split.
///
/// # Structure
///
/// ```text
/// [scheme://][user[:password]@]host[:port][/path][?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use lax_uri::Uri;
///
/// let mut uri = Uri::parse("https://www.example.com:8080/some-path.html?a=b").unwrap();
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.authority().as_deref(), Some("www.example.com:8080"));
///
/// uri.append_query_var("c", "d");
/// assert_eq!(uri.to_string(), "https://www.example.com:8080/some-path.html?a=b&c=d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uri {
    scheme: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    /// Creates a URI with every component absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URI from a string.
    ///
    /// Surrounding whitespace is trimmed first. Components missing from the
    /// input are absent on the result; `host` is always present, possibly
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the trimmed input contains a line feed, which
    /// no component may hold.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let offset = input.len() - input.trim_start().len();
        let parts = matcher::match_inner(trimmed).map_err(|kind| {
            log::debug!("no URI match for {input:?}: {kind:?}");
            ParseError {
                input: input.to_string(),
                kind: kind.shifted(offset),
            }
        })?;

        let owned = |c: Component| parts.get(c).map(str::to_string);
        let uri = Self {
            scheme: owned(Component::Scheme),
            user: owned(Component::User),
            password: owned(Component::Password),
            host: owned(Component::Host),
            port: owned(Component::Port),
            path: owned(Component::Path),
            query: owned(Component::Query),
            fragment: owned(Component::Fragment),
        };
        log::trace!("parsed URI {trimmed:?}");
        Ok(uri)
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the user name, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password, if present.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the host, if present.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port digits, if present.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Returns the path including its leading `/`, if present.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the raw query including its leading `?`, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without its leading `#`, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the text of `component`, if present.
    #[must_use]
    pub fn get(&self, component: Component) -> Option<&str> {
        match component {
            Component::Scheme => self.scheme(),
            Component::User => self.user(),
            Component::Password => self.password(),
            Component::Host => self.host(),
            Component::Port => self.port(),
            Component::Path => self.path(),
            Component::Query => self.query(),
            Component::Fragment => self.fragment(),
        }
    }

    /// Sets or clears the scheme.
    pub fn set_scheme(&mut self, scheme: Option<impl Into<String>>) -> &mut Self {
        self.scheme = scheme.map(Into::into);
        self
    }

    /// Sets or clears the user name.
    pub fn set_user(&mut self, user: Option<impl Into<String>>) -> &mut Self {
        self.user = user.map(Into::into);
        self
    }

    /// Sets or clears the password. It is only written out alongside a user.
    pub fn set_password(&mut self, password: Option<impl Into<String>>) -> &mut Self {
        self.password = password.map(Into::into);
        self
    }

    /// Sets or clears the host.
    pub fn set_host(&mut self, host: Option<impl Into<String>>) -> &mut Self {
        self.host = host.map(Into::into);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(&mut self, port: Option<impl Into<String>>) -> &mut Self {
        self.port = port.map(Into::into);
        self
    }

    /// Sets or clears the path. The path is written as given, so it should
    /// start with `/`.
    pub fn set_path(&mut self, path: Option<impl Into<String>>) -> &mut Self {
        self.path = path.map(Into::into);
        self
    }

    /// Sets or clears the raw query. The query is written as given, so it
    /// should start with `?`.
    pub fn set_query(&mut self, query: Option<impl Into<String>>) -> &mut Self {
        self.query = query.map(Into::into);
        self
    }

    /// Sets or clears the fragment, given without its leading `#`.
    pub fn set_fragment(&mut self, fragment: Option<impl Into<String>>) -> &mut Self {
        self.fragment = fragment.map(Into::into);
        self
    }

    /// Returns `host[:port]`, or `None` when there is no host.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::Uri;
    ///
    /// let uri = Uri::parse("ftp://example.com:21").unwrap();
    /// assert_eq!(uri.authority().as_deref(), Some("example.com:21"));
    ///
    /// assert_eq!(Uri::new().authority(), None);
    /// ```
    #[must_use]
    pub fn authority(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        Some(match self.port.as_deref() {
            Some(port) => format!("{host}{COLON}{port}"),
            None => host.to_string(),
        })
    }

    /// Decodes the query into parameters.
    ///
    /// Returns `None` when the query is absent or holds no parameters.
    #[must_use]
    pub fn decode_query(&self) -> Option<QueryParams> {
        query::decode(self.query.as_deref())
    }

    /// Sets a query parameter, overwriting any previous value for `key`.
    ///
    /// An empty key leaves the URI unchanged. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::Uri;
    ///
    /// let mut uri = Uri::parse("example.com").unwrap();
    /// uri.append_query_var("a", "1").append_query_var("b", "2");
    /// assert_eq!(uri.query(), Some("?a=1&b=2"));
    /// ```
    pub fn append_query_var(&mut self, key: &str, value: &str) -> &mut Self {
        if !key.is_empty() {
            let mut params = self.decode_query().unwrap_or_default();
            params.insert(key, value);
            self.query = query::encode(&params);
        }
        self
    }

    /// Removes a query parameter.
    ///
    /// The query is left untouched when `key` is empty or not present.
    /// Removing the last parameter clears the query entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::Uri;
    ///
    /// let mut uri = Uri::parse("example.com/?a=b").unwrap();
    /// uri.remove_query_var("a");
    /// assert_eq!(uri.query(), None);
    /// assert_eq!(uri.to_string(), "example.com/");
    /// ```
    pub fn remove_query_var(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }
        let Some(mut params) = self.decode_query() else {
            return;
        };
        if params.remove(key).is_some() {
            self.query = query::encode(&params);
        }
    }

    /// Dumps every component as a pretty-printed JSON object.
    ///
    /// Keys are sorted alphabetically and absent components are `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::Uri;
    ///
    /// let json = Uri::parse("ftp://example.com").unwrap().to_json();
    /// let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    /// assert_eq!(value["host"], "example.com");
    /// assert!(value["port"].is_null());
    /// ```
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> String {
        let fields: std::collections::BTreeMap<&str, Option<&str>> = Component::ALL
            .into_iter()
            .map(|c| (c.name(), self.get(c)))
            .collect();
        // A map of strings always serializes.
        serde_json::to_string_pretty(&fields).unwrap_or_default()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}{SCHEME_SEPARATOR}")?;
        }
        if let Some(user) = &self.user {
            f.write_str(user)?;
            if let Some(password) = &self.password {
                write!(f, "{COLON}{password}")?;
            }
            write!(f, "{USERINFO_TERMINATOR}")?;
        }
        if let Some(authority) = self.authority() {
            f.write_str(&authority)?;
        }
        if let Some(path) = &self.path {
            f.write_str(path)?;
        }
        if let Some(query) = &self.query {
            f.write_str(query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "{FRAGMENT_START}{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
