mod common;
use common::*;

#[test]
fn documented_order() {
    let names: Vec<String> = STRATEGY_ORDER.iter().map(|s| format!("{s:?}")).collect();
    expect_test::expect![[r#"
        [
            "MissingCurlyAtStart",
            "MissingCurlyAtSemicolon",
            "MissingGenericType",
            "MissingIdentifier",
            "KnownMissing",
            "ExtraneousInput",
            "MismatchedInput",
            "InvalidAssignment",
            "VariableDeclarationMissingType",
            "InvalidIdentifier",
            "MissingClassName",
            "MethodMissingName",
            "ErrorOnParameter",
            "MissingDoubleQuote",
            "MissingSingleQuote",
            "UnbalancedCurly",
            "UnbalancedParen",
            "UnbalancedChevron",
            "ViableAlternative",
        ]
    "#]]
    .assert_debug_eq(&names);
}

#[test]
fn earlier_strategy_wins() {
    let simplifier = Simplifier::new(&DefaultStrings);
    let strings = simplifier.strings();

    // Both the class-name rule and the brace rule match; the class-name rule
    // comes first.
    let message = "class Test {";
    assert!(Strategy::MissingClassName.apply(message, strings).is_some());
    assert!(Strategy::UnbalancedCurly.apply(message, strings).is_some());
    assert_eq!(
        simplifier.matching_strategy(message),
        Some(Strategy::MissingClassName)
    );
    assert_eq!(
        simplifier.message_for(message),
        "Syntax Error - Missing name near class Test {?"
    );

    let message = "missing ';' at '{'";
    assert!(Strategy::KnownMissing.apply(message, strings).is_some());
    assert_eq!(
        simplifier.matching_strategy(message),
        Some(Strategy::MissingCurlyAtSemicolon)
    );
}

#[test]
fn every_strategy_is_reachable() {
    let simplifier = Simplifier::new(&DefaultStrings);
    let samples = [
        ("mismatched input 'x' expecting {'throws', '{'}", Strategy::MissingCurlyAtStart),
        ("missing ';' at '{'", Strategy::MissingCurlyAtSemicolon),
        ("List<>", Strategy::MissingGenericType),
        ("missing Identifier at ';'", Strategy::MissingIdentifier),
        ("missing ')' at 'x'", Strategy::KnownMissing),
        ("extraneous input 'test' expecting ';'", Strategy::ExtraneousInput),
        ("mismatched input 'final' expecting ';'", Strategy::MismatchedInput),
        ("  int x =", Strategy::InvalidAssignment),
        ("x = 5;", Strategy::VariableDeclarationMissingType),
        ("test(a,01a", Strategy::InvalidIdentifier),
        ("class \n{", Strategy::MissingClassName),
        ("void (int x) \n{", Strategy::MethodMissingName),
        ("void test (int x,\ny) \n{", Strategy::ErrorOnParameter),
        ("String x = \" \" \"", Strategy::MissingDoubleQuote),
        ("char c = 'x", Strategy::MissingSingleQuote),
        ("{ { }", Strategy::UnbalancedCurly),
        ("())", Strategy::UnbalancedParen),
        ("< < >", Strategy::UnbalancedChevron),
        ("no viable alternative at input 'a b'", Strategy::ViableAlternative),
    ];
    for (message, expected) in samples {
        assert_eq!(
            simplifier.matching_strategy(message),
            Some(expected),
            "{message:?}"
        );
    }
}
