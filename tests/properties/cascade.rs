//! Property tests for tri-state checkbox cascading.

use proptest::prelude::*;
use proptest::sample::Index;

use treecascade::{CheckState, Config, TreeCascade};

use crate::forest::{forest, open_forest};

fn check_ops() -> impl Strategy<Value = Vec<(Index, bool)>> {
    prop::collection::vec((any::<Index>(), any::<bool>()), 1..20)
}

fn state(engine: &TreeCascade, pos: usize) -> CheckState {
    let id = engine.index().id(pos);
    engine.check_state(id.as_str()).unwrap().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Checking a node sets every enabled descendant to the same
    /// state, and leaves restricted ones alone.
    #[test]
    fn property_cascade_reaches_enabled_descendants(
        records in forest(40, 0.25),
        target in any::<Index>(),
        checked in any::<bool>(),
    ) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();
        let enabled: Vec<usize> = (0..engine.len())
            .filter(|&pos| engine.index().record(pos).rbac_cud)
            .collect();
        prop_assume!(!enabled.is_empty());

        let pos = enabled[target.index(enabled.len())];
        let id = engine.index().id(pos).clone();
        engine.set_checked(id.as_str(), checked).unwrap();

        prop_assert_eq!(state(&engine, pos), CheckState::from_bool(checked));
        for desc in engine.index().descendants(pos) {
            let expected = if engine.index().record(desc).rbac_cud {
                CheckState::from_bool(checked)
            } else {
                CheckState::Unchecked
            };
            prop_assert_eq!(state(&engine, desc), expected);
        }
    }

    /// PROPERTY: With every node enabled, any sequence of clicks leaves each
    /// parent equal to the aggregate of its children.
    #[test]
    fn property_parents_aggregate_children(records in open_forest(), ops in check_ops()) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();

        for (target, checked) in ops {
            let id = engine.index().id(target.index(engine.len())).clone();
            engine.set_checked(id.as_str(), checked).unwrap();
        }

        for pos in 0..engine.len() {
            let children = engine.index().children(pos);
            if children.is_empty() {
                prop_assert_ne!(state(&engine, pos), CheckState::Mixed);
                continue;
            }

            let states: Vec<CheckState> = children.iter().map(|&c| state(&engine, c)).collect();
            let uniform = states.iter().all(|s| *s == states[0]) && states[0] != CheckState::Mixed;
            let expected = if uniform { states[0] } else { CheckState::Mixed };
            prop_assert_eq!(state(&engine, pos), expected);
        }
    }

    /// PROPERTY: Restricted nodes never change state on their own.
    #[test]
    fn property_restricted_leaves_stay_unchecked(records in forest(40, 0.3), ops in check_ops()) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();
        let enabled: Vec<usize> = (0..engine.len())
            .filter(|&pos| engine.index().record(pos).rbac_cud)
            .collect();
        prop_assume!(!enabled.is_empty());

        for (target, checked) in ops {
            let pos = enabled[target.index(enabled.len())];
            let id = engine.index().id(pos).clone();
            engine.set_checked(id.as_str(), checked).unwrap();
        }

        for pos in 0..engine.len() {
            let restricted_leaf = !engine.index().record(pos).rbac_cud
                && !engine.index().has_children(pos);
            if restricted_leaf {
                prop_assert_eq!(state(&engine, pos), CheckState::Unchecked);
            }
        }
    }
}
