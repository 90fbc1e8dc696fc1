//! Property tests for expand/collapse visibility.

use proptest::prelude::*;
use proptest::sample::Index;

use treecascade::{Config, TreeCascade};

use crate::forest::forest;

#[derive(Debug, Clone)]
enum Op {
    Toggle(Index),
    ExpandAll,
    CollapseAll,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        8 => any::<Index>().prop_map(Op::Toggle),
        1 => Just(Op::ExpandAll),
        1 => Just(Op::CollapseAll),
    ];
    prop::collection::vec(op, 0..30)
}

fn run(engine: &mut TreeCascade, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Toggle(target) => {
                let id = engine.index().id(target.index(engine.len())).clone();
                engine.toggle_expand(id.as_str()).unwrap();
            }
            Op::ExpandAll => engine.expand_all(),
            Op::CollapseAll => engine.collapse_all(),
        }
    }
}

fn visible_ids(engine: &TreeCascade) -> Vec<String> {
    engine
        .visible_rows()
        .iter()
        .map(|row| row.id.to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A row is visible exactly when every ancestor is expanded.
    #[test]
    fn property_visible_iff_ancestors_expanded(records in forest(40, 0.0), ops in ops()) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();
        run(&mut engine, &ops);

        for pos in 0..engine.len() {
            let index = engine.index();
            let all_open = index
                .ancestors(pos)
                .all(|a| engine.is_expanded(index.id(a).as_str()).unwrap());
            let visible = engine.is_visible(index.id(pos).as_str()).unwrap();
            prop_assert_eq!(visible, all_open, "row {}", index.id(pos));
        }
    }

    /// PROPERTY: Collapsing a node and expanding it again restores the view.
    #[test]
    fn property_collapse_then_expand_restores_view(
        records in forest(40, 0.0),
        ops in ops(),
        target in any::<Index>(),
    ) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();
        run(&mut engine, &ops);

        let id = engine.index().id(target.index(engine.len())).clone();
        prop_assume!(engine.is_expanded(id.as_str()).unwrap());

        let before = visible_ids(&engine);
        engine.collapse(id.as_str()).unwrap();
        for desc in engine.index().descendants(engine.index().position(id.as_str()).unwrap()) {
            prop_assert!(!engine.is_visible(engine.index().id(desc).as_str()).unwrap());
        }
        engine.expand(id.as_str()).unwrap();

        prop_assert_eq!(visible_ids(&engine), before);
    }

    /// PROPERTY: Collapse all leaves only top-level rows (plus the first
    /// level under a lone root) in view.
    #[test]
    fn property_collapse_all_shows_top_level(records in forest(40, 0.0)) {
        let mut engine = TreeCascade::headless(records, Config::default()).unwrap();
        engine.collapse_all();

        let index = engine.index();
        let lone_root = index.roots().len() == 1;
        for pos in 0..engine.len() {
            let expected = index.depth(pos) == 0 || (lone_root && index.depth(pos) == 1);
            prop_assert_eq!(engine.is_visible(index.id(pos).as_str()).unwrap(), expected);
        }
    }
}
