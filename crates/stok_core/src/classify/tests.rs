use super::*;

fn set(bytes: &[u8]) -> DelimiterSet<'_> {
    match DelimiterSet::new(bytes) {
        Ok(set) => set,
        Err(err) => panic!("invalid test delimiter set: {err}"),
    }
}

// === DelimiterSet ===

#[test]
fn empty_set_is_valid() {
    let empty = set(b"");
    assert!(empty.is_empty());
    assert!(!empty.contains(b';'));
}

#[test]
fn membership_is_per_byte() {
    let delims = set(b";, ");
    assert_eq!(delims.len(), 3);
    assert!(delims.contains(b';'));
    assert!(delims.contains(b' '));
    assert!(!delims.contains(b'a'));
}

#[test]
fn terminator_in_set_is_rejected() {
    let err = DelimiterSet::new(b";\0").err();
    assert!(
        matches!(err, Some(TokenizeError::InvalidArgument { .. })),
        "expected InvalidArgument, got {err:?}"
    );
}

#[test]
fn try_from_str() {
    let delims = DelimiterSet::try_from(";,");
    assert_eq!(delims.map(|d| d.as_bytes()), Ok(&b";,"[..]));
}

// === accepted_prefix_len ===

#[test]
fn accepted_counts_leading_delimiters() {
    assert_eq!(accepted_prefix_len(b";;a;", &set(b";")), 2);
    assert_eq!(accepted_prefix_len(b";,;x", &set(b";,")), 3);
}

#[test]
fn accepted_zero_when_first_byte_is_not_member() {
    assert_eq!(accepted_prefix_len(b"a;;", &set(b";")), 0);
}

#[test]
fn accepted_spans_whole_delimiter_string() {
    assert_eq!(accepted_prefix_len(b";;;", &set(b";")), 3);
}

#[test]
fn accepted_stops_at_terminator() {
    assert_eq!(accepted_prefix_len(b";\0;", &set(b";")), 1);
}

#[test]
fn accepted_with_empty_set_is_zero() {
    assert_eq!(accepted_prefix_len(b";;;", &set(b"")), 0);
}

// === rejected_prefix_len ===

#[test]
fn rejected_measures_token_run() {
    assert_eq!(rejected_prefix_len(b"aaaa;bbbb", &set(b";")), 4);
}

#[test]
fn rejected_zero_at_delimiter() {
    assert_eq!(rejected_prefix_len(b";abc", &set(b";")), 0);
}

#[test]
fn rejected_spans_whole_string_without_delimiters() {
    assert_eq!(rejected_prefix_len(b"abcdef", &set(b";")), 6);
}

#[test]
fn rejected_stops_at_terminator() {
    assert_eq!(rejected_prefix_len(b"ab\0cd", &set(b";")), 2);
    assert_eq!(rejected_prefix_len(b"ab\0cd", &set(b"")), 2);
    assert_eq!(rejected_prefix_len(b"ab\0cd", &set(b";,.")), 2);
}

#[test]
fn rejected_with_each_set_size() {
    let input = b"hello world, again; done.";
    assert_eq!(rejected_prefix_len(input, &set(b"")), input.len());
    assert_eq!(rejected_prefix_len(input, &set(b" ")), 5);
    assert_eq!(rejected_prefix_len(input, &set(b",;")), 11);
    assert_eq!(rejected_prefix_len(input, &set(b".;,")), 11);
    assert_eq!(rejected_prefix_len(input, &set(b".;,o")), 4);
}

#[test]
fn prefix_lengths_on_empty_input() {
    assert_eq!(accepted_prefix_len(b"", &set(b";")), 0);
    assert_eq!(rejected_prefix_len(b"", &set(b";")), 0);
}

// === Property Tests: memchr paths vs. linear scan ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_rejected {
    use super::super::{rejected_prefix_len, scalar_rejected_prefix_len, DelimiterSet};
    use proptest::prelude::*;

    fn small_alphabet() -> impl Strategy<Value = u8> {
        prop_oneof![Just(b';'), Just(b','), Just(b' '), Just(b'a'), Just(b'b'), Just(0u8)]
    }

    proptest! {
        #[test]
        fn memchr_matches_scalar(
            bytes in proptest::collection::vec(small_alphabet(), 0..128),
            delims in proptest::collection::vec(
                prop_oneof![Just(b';'), Just(b','), Just(b' '), Just(b'a')],
                0..3,
            ),
        ) {
            let set = DelimiterSet::new(&delims);
            prop_assert!(set.is_ok());
            if let Ok(set) = set {
                prop_assert_eq!(
                    rejected_prefix_len(&bytes, &set),
                    scalar_rejected_prefix_len(&bytes, &set),
                    "mismatch for input {:?} and set {:?}", bytes, delims
                );
            }
        }

        #[test]
        fn rejected_prefix_holds_no_member(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
            delims in proptest::collection::vec(1u8..=255, 0..5),
        ) {
            if let Ok(set) = DelimiterSet::new(&delims) {
                let len = rejected_prefix_len(&bytes, &set);
                prop_assert!(bytes[..len].iter().all(|&b| b != 0 && !set.contains(b)));
                if let Some(&next) = bytes.get(len) {
                    prop_assert!(next == 0 || set.contains(next));
                }
            }
        }
    }
}
