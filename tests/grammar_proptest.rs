//! Property-based tests for the URI grammar, serializer and query codec.
//!
//! Generated URIs are well-formed: each component avoids the delimiters
//! that would let an earlier segment claim part of it. Only the password
//! may hold a `:`, and only the user-info terminator is an `@`.

use proptest::prelude::*;

use lax_uri::{ParseErrorKind, QueryParams, Uri, query};

/// Strategies for generating well-formed URI parts.
mod strategies {
    use super::*;

    /// A generated URI together with the components it was built from.
    #[derive(Debug, Clone)]
    pub struct Parts {
        pub scheme: Option<String>,
        pub userinfo: Option<(String, Option<String>)>,
        pub host: String,
        pub port: Option<String>,
        pub path: Option<String>,
        pub params: Vec<(String, String)>,
        pub fragment: Option<String>,
    }

    impl Parts {
        pub fn query(&self) -> Option<String> {
            let params: QueryParams = self.params.iter().cloned().collect();
            query::encode(&params)
        }

        pub fn render(&self) -> String {
            let mut s = String::new();
            if let Some(scheme) = &self.scheme {
                s.push_str(scheme);
                s.push_str("://");
            }
            if let Some((user, password)) = &self.userinfo {
                s.push_str(user);
                if let Some(password) = password {
                    s.push(':');
                    s.push_str(password);
                }
                s.push('@');
            }
            s.push_str(&self.host);
            if let Some(port) = &self.port {
                s.push(':');
                s.push_str(port);
            }
            if let Some(path) = &self.path {
                s.push_str(path);
            }
            if let Some(query) = self.query() {
                s.push_str(&query);
            }
            if let Some(fragment) = &self.fragment {
                s.push('#');
                s.push_str(fragment);
            }
            s
        }
    }

    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9+.-]{0,8}"
    }

    pub fn userinfo() -> impl Strategy<Value = (String, Option<String>)> {
        ("[a-z0-9._~-]{1,8}", prop::option::of("[a-z0-9._~:-]{0,8}"))
    }

    /// Dot-separated labels of alphanumerics and hyphens
    pub fn host() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9][a-z0-9-]{0,10}", 1..=4).prop_map(|labels| labels.join("."))
    }

    pub fn port() -> impl Strategy<Value = String> {
        (0u16..=65535).prop_map(|p| p.to_string())
    }

    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9._~-]{0,10}", 1..=5)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// Unique keys, so the encoded query matches what was generated
    pub fn params() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::btree_map("[a-z][a-z0-9_]{0,6}", "[a-zA-Z0-9%+./?-]{0,8}", 0..=4)
            .prop_map(|m| m.into_iter().collect())
    }

    pub fn fragment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9/?#._-]{0,12}"
    }

    pub fn parts() -> impl Strategy<Value = Parts> {
        (
            prop::option::of(scheme()),
            prop::option::of(userinfo()),
            host(),
            prop::option::of(port()),
            prop::option::of(path()),
            params(),
            prop::option::of(fragment()),
        )
            .prop_map(|(scheme, userinfo, host, port, path, params, fragment)| Parts {
                scheme,
                userinfo,
                host,
                port,
                path,
                params,
                fragment,
            })
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn generated_uris_roundtrip(p in parts()) {
            let input = p.render();
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.to_string(), input);
        }

        #[test]
        fn generated_uris_split_into_their_parts(p in parts()) {
            let uri = Uri::parse(&p.render()).unwrap();
            prop_assert_eq!(uri.scheme(), p.scheme.as_deref());
            prop_assert_eq!(uri.user(), p.userinfo.as_ref().map(|(u, _)| u.as_str()));
            prop_assert_eq!(
                uri.password(),
                p.userinfo.as_ref().and_then(|(_, pw)| pw.as_deref())
            );
            prop_assert_eq!(uri.host(), Some(p.host.as_str()));
            prop_assert_eq!(uri.port(), p.port.as_deref());
            prop_assert_eq!(uri.path(), p.path.as_deref());
            let query = p.query();
            prop_assert_eq!(uri.query(), query.as_deref());
            prop_assert_eq!(uri.fragment(), p.fragment.as_deref());
        }

        #[test]
        fn authority_is_host_and_port(p in parts()) {
            let uri = Uri::parse(&p.render()).unwrap();
            let expected = match &p.port {
                Some(port) => format!("{}:{port}", p.host),
                None => p.host.clone(),
            };
            prop_assert_eq!(uri.authority(), Some(expected));
        }

        #[test]
        fn padding_is_ignored(p in parts(), left in "[ \t]{0,3}", right in "[ \t\r\n]{0,3}") {
            let input = p.render();
            let padded = format!("{left}{input}{right}");
            prop_assert_eq!(Uri::parse(&padded).unwrap(), Uri::parse(&input).unwrap());
        }
    }
}

mod permissive_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Every component is a contiguous slice, so writing them back
        /// reproduces the trimmed input exactly.
        #[test]
        fn any_single_line_reserializes_to_trimmed_input(s in "[^\n]{0,40}") {
            let uri = Uri::parse(&s).unwrap();
            prop_assert_eq!(uri.to_string(), s.trim());
        }

        #[test]
        fn serialization_is_idempotent(s in "[^\n]{0,40}") {
            let once = Uri::parse(&s).unwrap().to_string();
            let twice = Uri::parse(&once).unwrap().to_string();
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn interior_line_feed_fails(a in "[a-z:/?#@]{1,10}", b in "[a-z:/?#@]{1,10}") {
            let input = format!("{a}\n{b}");
            let err = Uri::parse(&input).unwrap_err();
            prop_assert_eq!(
                err.kind,
                ParseErrorKind::UnexpectedChar { char: '\n', position: a.len() }
            );
            prop_assert_eq!(err.input, input);
        }
    }
}

mod query_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn append_then_decode_contains_value(
            p in parts(),
            key in "[a-z]{1,6}",
            value in "[a-z0-9]{0,6}",
        ) {
            let mut uri = Uri::parse(&p.render()).unwrap();
            uri.append_query_var(&key, &value);
            let params = uri.decode_query().unwrap();
            prop_assert_eq!(params.get(&key), Some(value.as_str()));
            prop_assert!(uri.query().unwrap().starts_with('?'));
        }

        #[test]
        fn append_then_remove_forgets_key(p in parts(), key in "[a-z]{1,6}") {
            let mut uri = Uri::parse(&p.render()).unwrap();
            uri.append_query_var(&key, "v");
            uri.remove_query_var(&key);
            let still_there = uri
                .decode_query()
                .is_some_and(|params| params.contains_key(&key));
            prop_assert!(!still_there);
        }

        #[test]
        fn removing_every_param_drops_query(p in parts()) {
            let mut uri = Uri::parse(&p.render()).unwrap();
            for (key, _) in &p.params {
                uri.remove_query_var(key);
            }
            prop_assert_eq!(uri.query(), None);
            prop_assert_eq!(uri.decode_query(), None);
        }

        #[test]
        fn decode_encode_preserves_generated_params(params in params()) {
            let built: QueryParams = params.iter().cloned().collect();
            let encoded = query::encode(&built);
            prop_assert_eq!(encoded.is_none(), params.is_empty());
            prop_assert_eq!(query::decode(encoded.as_deref()), (!params.is_empty()).then_some(built));
        }
    }
}
