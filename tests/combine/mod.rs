use outcome_rail::{sequence, traverse, traverse_with, zip3, Outcome};

#[test]
fn test_zip_both_success() {
    let a = Outcome::<i32, &str>::success(1);
    let b = Outcome::<&str, &str>::success("x");
    assert_eq!(a.zip(b), Outcome::success((1, "x")));
}

#[test]
fn test_zip_first_failure_wins() {
    let a = Outcome::<i32, &str>::failure("first");
    let b = Outcome::<i32, &str>::failure("second");
    assert_eq!(a.zip(b), Outcome::failure("first"));
}

#[test]
fn test_zip_right_failure() {
    let a = Outcome::<i32, &str>::success(1);
    let b = Outcome::<i32, &str>::failure("second");
    assert_eq!(a.zip(b), Outcome::failure("second"));
}

#[test]
fn test_zip3_success() {
    let o = zip3(
        Outcome::<_, &str>::success(1),
        Outcome::success("two"),
        Outcome::success(3.0),
    );
    assert_eq!(o, Outcome::success((1, "two", 3.0)));
}

#[test]
fn test_zip3_leftmost_failure_wins() {
    let o = zip3(
        Outcome::<i32, &str>::failure("a"),
        Outcome::<i32, &str>::failure("b"),
        Outcome::<i32, &str>::failure("c"),
    );
    assert_eq!(o, Outcome::failure("a"));

    let o = zip3(
        Outcome::<i32, &str>::success(1),
        Outcome::<i32, &str>::failure("b"),
        Outcome::<i32, &str>::failure("c"),
    );
    assert_eq!(o, Outcome::failure("b"));
}

#[test]
fn test_sequence_all_success_preserves_order() {
    let o = sequence(vec![
        Outcome::<i32, &str>::success(1),
        Outcome::success(2),
        Outcome::success(3),
    ]);
    assert_eq!(o, Outcome::success(vec![1, 2, 3]));
}

#[test]
fn test_sequence_first_failure_wins() {
    let o = sequence(vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("a"),
        Outcome::failure("b"),
    ]);
    assert_eq!(o, Outcome::failure("a"));
}

#[test]
fn test_sequence_empty_input() {
    let o: Outcome<Vec<i32>, &str> = sequence(Vec::new());
    assert_eq!(o, Outcome::success(vec![]));
}

#[test]
fn test_collect_matches_sequence() {
    let collected: Outcome<Vec<i32>, &str> =
        vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
            .into_iter()
            .collect();
    assert_eq!(collected, Outcome::failure("a"));
}

#[test]
fn test_traverse_collects_every_failure_in_order() {
    let o = traverse(vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("a"),
        Outcome::failure("b"),
        Outcome::success(2),
    ]);
    let errors = o.into_error().unwrap();
    assert_eq!(errors.as_slice(), ["a", "b"]);
}

#[test]
fn test_traverse_all_success_preserves_order() {
    let o = traverse(vec![
        Outcome::<i32, &str>::success(1),
        Outcome::success(2),
        Outcome::success(3),
    ]);
    assert_eq!(o.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn test_traverse_empty_input_is_success() {
    let o = traverse(Vec::<Outcome<i32, &str>>::new());
    assert_eq!(o.into_value(), Some(vec![]));
}

#[test]
fn test_traverse_with_fail_fast() {
    fn positive(x: i32) -> Outcome<i32, String> {
        if x > 0 {
            Outcome::success(x)
        } else {
            Outcome::failure(format!("{x} is not positive"))
        }
    }

    assert_eq!(
        traverse_with(vec![1, 2, 3], positive),
        Outcome::success(vec![1, 2, 3])
    );

    let failed = traverse_with(vec![1, -2, -3], positive);
    assert_eq!(failed.into_error().unwrap(), "-2 is not positive");
}
