//! Query parameters and the query-string codec.

use std::fmt;

use crate::constants::{KEY_VALUE_SEPARATOR, PARAM_SEPARATOR, QUERY_START};

/// Key-value pairs decoded from a query string.
///
/// Keys are unique. Pairs keep the order in which each key was first
/// inserted; overwriting a key keeps its position. Values are stored raw,
/// with no percent-decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.params[idx].1.as_str())
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Sets a parameter, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.params[idx].1, value)),
            None => {
                self.params.push((key, value));
                None
            }
        }
    }

    /// Removes a parameter, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|idx| self.params.remove(idx).1)
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|(k, _)| k == key)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Formats the pairs as `k1=v1&k2=v2`, without the leading `?`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, "{PARAM_SEPARATOR}")?;
            }
            write!(f, "{k}{KEY_VALUE_SEPARATOR}{v}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Pairs come back in key order.
        let pairs = std::collections::BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// Decodes a raw query string into parameters.
///
/// A single leading `?` is stripped. Pairs are separated by `&` and split
/// once on the first `=`; a pair without `=` gets an empty value and empty
/// pairs are skipped. A repeated key keeps its last value.
///
/// Returns `None` when there is no query or when it holds no parameters, so
/// a query of just `?` decodes to `None` rather than an empty map.
///
/// # Examples
///
/// ```
/// use lax_uri::query;
///
/// let params = query::decode(Some("?a=b&c=d=e")).unwrap();
/// assert_eq!(params.get("a"), Some("b"));
/// assert_eq!(params.get("c"), Some("d=e"));
///
/// assert!(query::decode(Some("?")).is_none());
/// assert!(query::decode(None).is_none());
/// ```
#[must_use]
pub fn decode(query: Option<&str>) -> Option<QueryParams> {
    let raw = query?;
    let body = raw.strip_prefix(QUERY_START).unwrap_or(raw);

    let params: QueryParams = body
        .split(PARAM_SEPARATOR)
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once(KEY_VALUE_SEPARATOR).unwrap_or((pair, "")))
        .collect();

    if params.is_empty() { None } else { Some(params) }
}

/// Encodes parameters as a query string including the leading `?`.
///
/// Returns `None` for an empty set of parameters, so that removing the last
/// parameter drops the query entirely.
///
/// # Examples
///
/// ```
/// use lax_uri::{query, QueryParams};
///
/// let params: QueryParams = [("a", "b"), ("c", "d")].into_iter().collect();
/// assert_eq!(query::encode(&params).as_deref(), Some("?a=b&c=d"));
/// assert_eq!(query::encode(&QueryParams::new()), None);
/// ```
#[must_use]
pub fn encode(params: &QueryParams) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    Some(format!("{QUERY_START}{params}"))
}
