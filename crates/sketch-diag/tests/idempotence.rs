mod common;
use common::{map, DefaultStrings, DocumentLines, IssueShape, RawIssue, Simplifier, TabOffsetTable};

use proptest::prelude::*;

fn messages() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~\n]{0,40}",
        "[a-z]{1,8}".prop_map(|token| format!("missing '{token}' at 'x'")),
        "[a-z;{}()]{1,8}".prop_map(|token| format!("mismatched input '{token}' expecting ';'")),
        "[a-z(){}<> \n]{1,20}".prop_map(|area| format!("no viable alternative at input '{area}'")),
        "[a-z0-9 =;'\"{}()<>,]{1,20}",
    ]
}

proptest! {
    #[test]
    fn simplifying_twice_changes_nothing(message in messages()) {
        let simplifier = Simplifier::new(&DefaultStrings);
        if let Some(first) = simplifier.simplify(&message) {
            let second = simplifier.simplify(&first.message);
            prop_assert!(second.is_none() || second.as_ref() == Some(&first));
            prop_assert_eq!(simplifier.message_for(&first.message), first.message);
        }
    }

    #[test]
    fn bare_syntax_template_keeps_hints_stable(message in messages()) {
        let bare = |key: &str| (key == "editor.status.error.syntax").then(|| "%s".to_string());
        let simplifier = Simplifier::new(&bare);
        if let Some(first) = simplifier.simplify(&message) {
            prop_assert_eq!(simplifier.simplify(&first.message), None);
            prop_assert_eq!(simplifier.message_for(&first.message), first.message);
        }
    }

    #[test]
    fn empty_lines_never_get_empty_ranges(lines in 1usize..8, target in 0usize..8, column in 0i64..5) {
        let text = "\n".repeat(lines - 1);
        let documents = vec![DocumentLines::new(&text)];
        let offsets = TabOffsetTable::build(2, [(0, lines)]);
        for shape in [IssueShape::FullLine, IssueShape::Column] {
            let problem = map(&RawIssue::new((2 + target) as i64, column, "x"), &offsets, &documents, shape)
                .expect("mapped");
            prop_assert!(problem.range_end > problem.range_start);
        }
    }
}
