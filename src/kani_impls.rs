//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{QueryParams, Uri, query};

/// Characters that never act as a delimiter anywhere in the grammar
const PLAIN_CHARS: &[u8] = b"abcxyz019-._~";

/// Digits for ports
const DIGITS: &[u8] = b"0123456789";

fn arbitrary_from(chars: &[u8], max_len: usize, min_len: usize) -> String {
    let len: usize = kani::any();
    let len = min_len + len % (max_len - min_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect()
}

fn maybe(chars: &[u8], max_len: usize, min_len: usize) -> Option<String> {
    if kani::any() {
        Some(arbitrary_from(chars, max_len, min_len))
    } else {
        None
    }
}

impl kani::Arbitrary for Uri {
    fn any() -> Self {
        let mut uri = Uri::new();
        uri.set_scheme(maybe(PLAIN_CHARS, 3, 1))
            .set_host(Some(arbitrary_from(PLAIN_CHARS, 3, 1)))
            .set_port(maybe(DIGITS, 2, 1))
            .set_path(maybe(PLAIN_CHARS, 2, 0).map(|p| format!("/{p}")))
            .set_fragment(maybe(PLAIN_CHARS, 2, 0));
        if let Some(user) = maybe(PLAIN_CHARS, 2, 1) {
            uri.set_user(Some(user))
                .set_password(maybe(PLAIN_CHARS, 2, 0));
        }
        if let Some(key) = maybe(PLAIN_CHARS, 2, 1) {
            uri.append_query_var(&key, &arbitrary_from(PLAIN_CHARS, 2, 0));
        }
        uri
    }
}

/// Proof: serializing then parsing gives back the same components
#[kani::proof]
#[kani::unwind(12)]
fn proof_display_parse_roundtrip() {
    let uri: Uri = kani::any();
    let reparsed = Uri::parse(&uri.to_string()).expect("serialized URI should parse");
    assert_eq!(reparsed, uri);
}

/// Proof: the authority is the host, followed by the port when there is one
#[kani::proof]
#[kani::unwind(12)]
fn proof_authority_shape() {
    let uri: Uri = kani::any();
    let authority = uri.authority().expect("host is always set");
    let host = uri.host().expect("host is always set");
    assert!(authority.starts_with(host));
    assert_eq!(authority.len() > host.len(), uri.port().is_some());
}

/// Proof: a non-empty parameter set always encodes to a query starting with '?'
#[kani::proof]
#[kani::unwind(8)]
fn proof_encode_has_question_mark() {
    let key = arbitrary_from(PLAIN_CHARS, 2, 1);
    let value = arbitrary_from(PLAIN_CHARS, 2, 0);
    let params: QueryParams = [(key, value)].into_iter().collect();
    let encoded = query::encode(&params).expect("non-empty params encode");
    assert!(encoded.starts_with('?'));
    assert_eq!(query::decode(Some(&encoded)), Some(params));
}
