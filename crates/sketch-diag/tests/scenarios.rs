mod common;
use common::*;

#[test]
fn semicolon_before_brace_means_missing_right_curly() {
    let hint = simplify("missing ';' at '{'").expect("simplified");
    assert_eq!(hint.message, "Syntax Error - Missing '}'");
    assert!(!hint.attribute_to_prior_token);
}

#[test]
fn unbalanced_curly() {
    let simplifier = Simplifier::new(&DefaultStrings);
    let strings = simplifier.strings();
    assert_eq!(
        Strategy::UnbalancedCurly
            .apply("class Test {", strings)
            .map(|hint| hint.message),
        Some("Syntax Error - Missing '}'?".to_string())
    );
    assert_eq!(Strategy::UnbalancedCurly.apply("class Test { }", strings), None);
}

#[test]
fn offending_area_of_viable_alternative() {
    assert_eq!(
        sketch_diag::simplify::offending::offending_area(
            "no viable alternative at input 'ellipse(\n\nellipse();'"
        ),
        "ellipse();"
    );
}

#[test]
fn issue_in_second_tab() {
    let offsets = TabOffsetTable::build(3, [(0, 10), (1, 5)]);
    assert_eq!(offsets.starts().collect::<Vec<_>>(), vec![3, 13]);

    let problem = map(&RawIssue::new(15, 0, "oops"), &offsets, &NoDocuments, IssueShape::Column)
        .expect("mapped");
    assert_eq!((problem.tab_index, problem.line), (1, 2));
    assert_eq!(problem.message, "oops");
}

#[test]
fn issue_one_past_the_end() {
    let offsets = TabOffsetTable::build(0, [(0, 12), (1, 8)]);
    assert_eq!(offsets.total_lines(), 20);

    let past = map(&RawIssue::new(20, 3, "eof"), &offsets, &NoDocuments, IssueShape::Column);
    let last = map(&RawIssue::new(19, 3, "eof"), &offsets, &NoDocuments, IssueShape::Column);
    assert_eq!(past, last);
    let past = past.expect("mapped");
    assert_eq!((past.tab_index, past.line), (1, 7));
}

#[test]
fn empty_generic_arguments() {
    let simplifier = Simplifier::new(&DefaultStrings);
    assert_eq!(
        simplifier.matching_strategy("List<>"),
        Some(Strategy::MissingGenericType)
    );
    assert_eq!(
        Strategy::MissingGenericType.apply("List<Integer>", simplifier.strings()),
        None
    );
    assert_eq!(
        simplifier.message_for("List<>"),
        "Syntax Error - Possibly missing type in generic near List<>?"
    );
}

#[test]
fn echoed_code_with_format_directives() {
    let hint = simplify("no viable alternative at input 'printf(\"%c\")'").expect("simplified");
    assert_eq!(
        hint.message,
        "Syntax Error - Error on parameter or method declaration near printf(\"%c\")?"
    );
}
