// Property-based tests for normalization and scoring.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;

use listmatch_core::{
    Candidate, Heuristic, combined_score, compare_candidates, normalize, normalize_compact,
    token_overlap_score,
};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Listing-like text: mixed case, digits, punctuation, a few non-ASCII letters.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _.,/()+éüßØ-]{0,40}"
}

fn maybe_text() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.9, text())
}

fn product_name() -> impl Strategy<Value = String> {
    "[A-C][a-c]{0,3}( [a-c0-9]{1,3}){0,2}"
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn compact_normalization_is_idempotent(s in text()) {
        let once = normalize_compact(Some(&s));
        prop_assert_eq!(normalize_compact(Some(&once)), once);
    }

    #[test]
    fn token_normalization_is_idempotent(s in text()) {
        let once = normalize(Some(&s)).join(" ");
        prop_assert_eq!(normalize(Some(&once)).join(" "), once);
    }

    #[test]
    fn null_arguments_always_score_zero(s in text()) {
        for heuristic in Heuristic::ALL {
            prop_assert_eq!(heuristic.score(None, Some(&s)), 0.0);
            prop_assert_eq!(heuristic.score(Some(&s), None), 0.0);
        }
        prop_assert_eq!(combined_score(None, Some(&s)), 0.0);
        prop_assert_eq!(combined_score(Some(&s), None), 0.0);
    }

    #[test]
    fn scores_stay_in_unit_interval(q in maybe_text(), r in maybe_text()) {
        for heuristic in Heuristic::ALL {
            let score = heuristic.score(q.as_deref(), r.as_deref());
            prop_assert!((0.0..=1.0).contains(&score), "{} gave {}", heuristic.name(), score);
        }
        let combined = combined_score(q.as_deref(), r.as_deref());
        prop_assert!((0.0..=1.0).contains(&combined));
    }

    #[test]
    fn combined_dominates_every_heuristic(q in maybe_text(), r in maybe_text()) {
        let combined = combined_score(q.as_deref(), r.as_deref());
        for heuristic in Heuristic::ALL {
            prop_assert!(combined >= heuristic.score(q.as_deref(), r.as_deref()));
        }
    }

    #[test]
    fn query_containing_reference_tokens_is_perfect(r in product_name(), extra in text()) {
        let query = format!("{extra} {r} {extra}");
        prop_assert_eq!(token_overlap_score(Some(&query), Some(&r)), 1.0);
        prop_assert_eq!(combined_score(Some(&query), Some(&r)), 1.0);
    }

    #[test]
    fn tie_break_picks_greatest_name(names in prop::collection::btree_set(product_name(), 2..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let forward = names
            .iter()
            .map(|name| Candidate { score: 1.0, name: name.as_str() })
            .max_by(compare_candidates)
            .unwrap();
        let backward = names
            .iter()
            .rev()
            .map(|name| Candidate { score: 1.0, name: name.as_str() })
            .max_by(compare_candidates)
            .unwrap();
        prop_assert_eq!(forward.name, names.last().unwrap().as_str());
        prop_assert_eq!(forward, backward);
    }
}

#[test]
fn token_overlap_has_asymmetric_pairs() {
    let q = "Canon PowerShot A100 Black";
    let r = "Canon PowerShot A100";
    assert_ne!(
        token_overlap_score(Some(q), Some(r)),
        token_overlap_score(Some(r), Some(q))
    );
}
