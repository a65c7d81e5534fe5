//! Delimiters shared by the matcher, the query codec and the serializer.

/// Separator between the scheme and the rest of the URI.
pub const SCHEME_SEPARATOR: &str = "://";

/// Terminates the user-info segment.
pub const USERINFO_TERMINATOR: char = '@';

/// Separates user from password, and host from port.
pub const COLON: char = ':';

/// First character of a path.
pub const PATH_START: char = '/';

/// First character of a query; kept as part of the stored query.
pub const QUERY_START: char = '?';

/// Introduces the fragment; never stored.
pub const FRAGMENT_START: char = '#';

/// Separates query parameters.
pub const PARAM_SEPARATOR: char = '&';

/// Separates a query parameter key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';
