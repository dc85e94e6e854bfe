//! Property-based tests for parsing and expansion.

use proptest::prelude::*;

use crate::attrpath::AttrPath;
use crate::command::CommandKind;
use crate::expand::expand;
use crate::parser::{join_installable, parse_installable};
use crate::system::System;

// Strategy for unquoted attribute segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,16}"
}

fn attr_path_strategy() -> impl Strategy<Value = AttrPath> {
    prop::collection::vec(segment_strategy(), 0..5)
        .prop_map(|segments| AttrPath::from_segments(segments).unwrap())
}

fn locator_string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        "[a-z][a-z0-9-]{0,12}".prop_map(String::from),
        ("[A-Za-z0-9-]{1,12}", "[A-Za-z0-9-]{1,12}")
            .prop_map(|(owner, repo)| format!("github:{owner}/{repo}")),
        "[a-z]{1,8}(/[a-z]{1,8}){1,3}".prop_map(|p| format!("/{p}")),
        "[a-z]{1,8}(/[a-z]{1,8}){0,2}".prop_map(|p| format!("~/{p}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing a joined (locator, path) pair yields the same pair
    #[test]
    fn installable_round_trip(
        locator in locator_string_strategy(),
        path in attr_path_strategy(),
    ) {
        let raw = if path.is_empty() {
            locator
        } else {
            format!("{locator}#{path}")
        };
        let (parsed_locator, parsed_path) = parse_installable(&raw).unwrap();
        let rejoined = join_installable(&parsed_locator, &parsed_path);
        let (locator2, path2) = parse_installable(&rejoined).unwrap();
        prop_assert_eq!(parsed_locator, locator2);
        prop_assert_eq!(parsed_path, path2);
    }

    // Attribute path display/parse round-trips
    #[test]
    fn attr_path_round_trip(path in attr_path_strategy()) {
        let reparsed: AttrPath = path.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Expansion always starts with the kind's output prefix, and ends
    // in `default` when the input path was empty
    #[test]
    fn expansion_prefix_invariant(path in attr_path_strategy()) {
        let system: System = "x86_64-linux".parse().unwrap();
        for kind in CommandKind::ALL {
            if kind == CommandKind::Repl {
                continue;
            }
            let expansion = expand(&path, kind, Some(&system)).unwrap();
            for candidate in expansion.candidates() {
                prop_assert!(!candidate.is_empty());
                if path.is_empty() {
                    prop_assert_eq!(candidate.last(), Some("default"));
                }
                if kind.is_per_system() {
                    prop_assert_eq!(candidate.segments()[1].as_str(), "x86_64-linux");
                }
            }
            prop_assert_eq!(
                expansion.primary().first(),
                kind.output_prefix()
            );
        }
    }

    // Expansion is stable: expanding the same inputs twice gives the
    // same candidates
    #[test]
    fn expansion_deterministic(path in attr_path_strategy()) {
        let system: System = "aarch64-darwin".parse().unwrap();
        let a = expand(&path, CommandKind::Run, Some(&system)).unwrap();
        let b = expand(&path, CommandKind::Run, Some(&system)).unwrap();
        prop_assert_eq!(a, b);
    }
}
