use proptest::prelude::*;
use typeq::compare::{BACKSPACE, apply_edits, typed_eq};

// Forward pass with an explicit stack. The lazy backward scan must agree
// with this everywhere.
fn reduce_with_stack(input: &str) -> String {
    let mut stack = Vec::new();
    for ch in input.chars() {
        if ch == BACKSPACE {
            stack.pop();
        } else {
            stack.push(ch);
        }
    }
    stack.into_iter().collect()
}

#[test]
fn test_equal_after_edits() {
    assert!(typed_eq("ab#c", "ad#c")); // both reduce to "ac"
    assert!(typed_eq("a##c", "c"));
    assert!(typed_eq("xy##abc", "abc"));
    assert!(typed_eq("abc", "abc"));
}

#[test]
fn test_unequal_after_edits() {
    assert!(!typed_eq("ab#c", "adc"));
    assert!(!typed_eq("a#c", "b"));
    assert!(!typed_eq("abc", "ab"));
}

#[test]
fn test_same_raw_length_different_text() {
    assert!(!typed_eq("ab", "cb"));
    assert!(!typed_eq("ab#c", "ab#d"));
}

#[test]
fn test_empty_inputs() {
    assert!(typed_eq("", ""));
    assert!(typed_eq("#", ""));
    assert!(typed_eq("", "#"));
    assert!(typed_eq("###", ""));
    assert!(!typed_eq("", "a"));
    assert!(!typed_eq("a", ""));
}

#[test]
fn test_excess_markers_absorbed() {
    assert!(typed_eq("#####a", "a"));
    assert!(typed_eq("ab####", "xyz###"));
}

#[test]
fn test_prefix_survives_suffix_deleted() {
    assert!(typed_eq("hello#####world#####", ""));
    assert!(typed_eq("hello world#####", "hello "));
    assert!(!typed_eq("hello world#####", "hello"));
}

#[test]
fn test_unicode_code_points_count_as_one_character() {
    assert!(typed_eq("né#e", "ne"));
    assert!(typed_eq("日本#", "日"));
    assert!(!typed_eq("日本#", "本"));
}

fn edit_string() -> impl Strategy<Value = String> {
    // tiny alphabet so collisions and marker pile-ups actually happen
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', BACKSPACE]), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn test_reflexive(a in edit_string()) {
        prop_assert!(typed_eq(&a, &a));
    }

    #[test]
    fn test_symmetric(a in edit_string(), b in edit_string()) {
        prop_assert_eq!(typed_eq(&a, &b), typed_eq(&b, &a));
    }

    #[test]
    fn test_deterministic(a in edit_string(), b in edit_string()) {
        let first = typed_eq(&a, &b);
        prop_assert_eq!(first, typed_eq(&a, &b));
    }

    #[test]
    fn test_agrees_with_stack_reduction(a in edit_string(), b in edit_string()) {
        prop_assert_eq!(typed_eq(&a, &b), reduce_with_stack(&a) == reduce_with_stack(&b));
    }

    #[test]
    fn test_apply_edits_matches_stack_reduction(a in edit_string()) {
        prop_assert_eq!(apply_edits(&a), reduce_with_stack(&a));
    }
}
