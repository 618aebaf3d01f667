use crate::fuzzy::{fuzzy_equals, fuzzy_equals_many, make_fuzzy_set, FuzzyElement, FuzzySet};
use crate::Value;

fn round3(x: f32) -> f32 {
    ((x as f64 * 1000.0).round() / 1000.0) as f32
}

fn abc() -> FuzzySet {
    make_fuzzy_set(
        false,
        &[
            FuzzyElement::new("a", 0.1),
            FuzzyElement::new("b", 0.3),
            FuzzyElement::new("c", 0.6),
        ],
    )
}

#[test]
fn test_fuzzy_equals_single() {
    assert_eq!(
        round3(fuzzy_equals_many(&abc(), &[Value::string("c")])),
        0.6
    );
}

#[test]
fn test_fuzzy_equals_sum() {
    let found = fuzzy_equals_many(&abc(), &[Value::string("c"), Value::string("b")]);
    assert_eq!(round3(found), 0.9);
}

#[test]
fn test_fuzzy_equals_missing_is_zero() {
    assert_eq!(fuzzy_equals(&abc(), &Value::string("z")), 0.0);
    assert_eq!(fuzzy_equals(&FuzzySet::default(), &Value::string("a")), 0.0);
    assert_eq!(fuzzy_equals_many(&abc(), &[]), 0.0);
}

#[test]
fn test_fuzzy_equals_is_type_sensitive() {
    let set = make_fuzzy_set(false, &[FuzzyElement::new(Value::Int(1), 0.7)]);
    assert_eq!(fuzzy_equals(&set, &Value::Int(1)), 0.7);
    assert_eq!(fuzzy_equals(&set, &Value::string("1")), 0.0);
    assert_eq!(fuzzy_equals(&set, &Value::Float(1.0)), 0.0);
}

#[test]
fn test_first_match_wins() {
    let set = make_fuzzy_set(
        false,
        &[FuzzyElement::new("a", 0.2), FuzzyElement::new("a", 0.8)],
    );
    assert_eq!(fuzzy_equals(&set, &Value::string("a")), 0.2);
}

#[test]
fn test_repeated_queries_count_each_time() {
    let found = fuzzy_equals_many(&abc(), &[Value::string("b"), Value::string("b")]);
    assert_eq!(round3(found), 0.6);
}

#[test]
fn test_normalize_divides_by_sum() {
    let set = make_fuzzy_set(
        true,
        &[FuzzyElement::new("x", 1.0), FuzzyElement::new("y", 3.0)],
    );
    assert_eq!(fuzzy_equals(&set, &Value::string("x")), 0.25);
    assert_eq!(fuzzy_equals(&set, &Value::string("y")), 0.75);
}

#[test]
fn test_normalize_zero_sum_is_noop() {
    let set = make_fuzzy_set(
        true,
        &[FuzzyElement::new("x", 0.0), FuzzyElement::new("y", 0.0)],
    );
    assert_eq!(
        set.elements(),
        &[FuzzyElement::new("x", 0.0), FuzzyElement::new("y", 0.0)]
    );
}

#[test]
fn test_make_fuzzy_set_copies() {
    let elements = vec![FuzzyElement::new("x", 2.0)];
    let set = make_fuzzy_set(true, &elements);
    assert_eq!(set.elements()[0].weight, 1.0);
    assert_eq!(elements[0].weight, 2.0);
}

#[test]
fn test_expression_members() {
    let member = Value::expression([Value::string("p"), Value::Int(1)]);
    let set = make_fuzzy_set(false, &[FuzzyElement::new(member.clone(), 0.4)]);
    assert_eq!(fuzzy_equals(&set, &member), 0.4);
}
