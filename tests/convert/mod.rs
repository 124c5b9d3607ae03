use outcome_rail::convert::{option_to_outcome, outcome_to_result, result_to_outcome};
use outcome_rail::Outcome;

#[test]
fn test_result_to_outcome() {
    assert_eq!(result_to_outcome(Ok::<_, &str>(1)), Outcome::success(1));
    assert_eq!(result_to_outcome(Err::<i32, _>("e")), Outcome::failure("e"));
}

#[test]
fn test_outcome_to_result() {
    assert_eq!(outcome_to_result(Outcome::<_, &str>::success(1)), Ok(1));
    assert_eq!(outcome_to_result(Outcome::<i32, _>::failure("e")), Err("e"));
}

#[test]
fn test_from_impls() {
    let o: Outcome<i32, &str> = Ok(3).into();
    assert_eq!(o, Outcome::success(3));

    let r: Result<i32, &str> = Outcome::failure("e").into();
    assert_eq!(r, Err("e"));
}

#[test]
fn test_into_result_supports_question_mark() {
    fn run() -> Result<i32, String> {
        let v = Outcome::<i32, String>::failure("bad".to_string()).into_result()?;
        Ok(v)
    }
    assert_eq!(run(), Err("bad".to_string()));
}

#[test]
fn test_option_to_outcome() {
    assert_eq!(option_to_outcome(Some(3), "missing"), Outcome::success(3));
    assert_eq!(
        option_to_outcome(None::<i32>, "missing"),
        Outcome::failure("missing")
    );
}

#[test]
fn test_from_option_lazy_error() {
    let mut built = false;
    let o = Outcome::from_option(Some(1), || {
        built = true;
        "missing"
    });
    assert_eq!(o, Outcome::success(1));
    assert!(!built);

    let o = Outcome::from_option(None::<i32>, || "missing");
    assert_eq!(o, Outcome::failure("missing"));
}
