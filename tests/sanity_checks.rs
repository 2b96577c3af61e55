use anyhow::Result;
use rpn::test_impls::{eval_with, scan_eval};
use rpn::{convert, evaluate, scan, to_postfix, Token, Variables};

#[test]
fn test_precedence() -> Result<()> {
    assert_eq!(convert("A+B*C")?, "A B C * +");
    assert_eq!(convert("(A+B)*C")?, "A B + C *");
    assert_eq!(convert("A-B-C")?, "A B - C -");
    Ok(())
}

#[test]
fn test_postfix_has_no_parens() -> Result<()> {
    let postfix = to_postfix(&scan("((a)) * (b + (c - d)) ^ (2)")?)?;
    assert!(!postfix.iter().any(|t| matches!(t, Token::LP | Token::RP)));
    assert_eq!(postfix.len(), 9);
    Ok(())
}

#[test]
fn test_basic_maths() -> Result<()> {
    assert_eq!(scan_eval("2 + 2")?, 4.);
    assert_eq!(scan_eval("10 - 4 - 3")?, 3.);
    assert_eq!(scan_eval("2 * 3 + 4")?, 10.);
    assert_eq!(scan_eval("2 * (3 + 4)")?, 14.);
    assert_eq!(scan_eval("2 ^ 10")?, 1024.);
    assert_eq!(scan_eval("1 / 4")?, 0.25);
    assert_eq!(scan_eval("1.5 * 4")?, 6.);
    Ok(())
}

#[test]
fn test_with_variables() -> Result<()> {
    let mut vars = Variables::new();
    vars.define('a', 3.)?;
    vars.define('B', 4.)?;
    assert_eq!(eval_with("A+B*2", &vars)?, 11.);
    assert_eq!(eval_with("(a + b) / 2", &vars)?, 3.5);
    assert_eq!(evaluate(&convert("b ^ 0.5")?, &vars)?, 2.);
    Ok(())
}

#[test]
fn test_never_faults() {
    // every one of these must come back as a value or an error, never a panic
    let vars = Variables::new();
    for sentence in [
        "", "(", ")", "()", "+", "^^", "1..", ".", "(((1)))", "1 2 3", "a(b)c", "9^9^9",
        "0/0", "1/0.0", "é", "((", "))", "1+", "+1", "2*-3",
    ] {
        let _ = convert(sentence).map(|p| evaluate(&p, &vars));
    }
}
