#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::error::{ExpectFailed, Panic, PreconditionViolated};
use crate::maybe::{Maybe, none, some};
use crate::util::counter::{CallCounter, CountedDrop};
use crate::util::panic::{assert_panics, assert_panics_with};

fn outcome_of(value: Result<i32, u8>) -> Outcome<i32, u8> {
    Outcome::from(value)
}

#[test]
fn test_variant_predicates() {
    assert!(ok::<_, ()>(1).is_ok());
    assert!(!ok::<_, ()>(1).is_err());
    assert!(err::<(), _>("e").is_err());
    assert!(err::<(), _>("e").is_failure());

    assert!(ok::<_, ()>(2).is_ok_and(|v| v == 2));
    assert!(!err::<u8, _>("e").is_ok_and(|_| true));
    assert!(err::<u8, _>("e").is_err_and(|e| e == "e"));
    assert!(!ok::<u8, &str>(1).is_err_and(|_| true));
}

#[test]
fn test_scenarios() {
    assert_eq!(ok::<_, ()>(5).map(|x| x * 2).unwrap(), 10);
    assert_eq!(
        err::<String, _>("e").or_else(|e| ok::<_, ()>(format!("recovered {e}"))).unwrap(),
        "recovered e"
    );
}

#[test]
fn test_map_family() {
    assert_eq!(ok::<u8, &str>(1).map_err(str::len), ok(1));
    assert_eq!(err::<u8, _>("four").map_err(str::len), err(4));
    assert_eq!(ok::<u8, &str>(1).map_or(0, |v| v + 1), 2);
    assert_eq!(err::<u8, _>("e").map_or(0, |v| v + 1), 0);

    let counter = CallCounter::new();
    let (ok_probe, err_probe) = (counter.clone(), counter.clone());
    let folded = ok::<u8, &str>(3).map_or_else(
        move |_| {
            err_probe.hit();
            0
        },
        move |v| {
            ok_probe.hit();
            v * 2
        },
    );
    assert_eq!(folded, 6);
    assert_eq!(counter.count(), 1, "Exactly one branch should run.");

    let probe = counter.clone();
    let mapped = err::<u8, _>("e").map(move |v| {
        probe.hit();
        v
    });
    assert_eq!(mapped, err("e"));
    assert_eq!(counter.count(), 1, "Map shouldn't invoke the function for a Failure.");
}

#[test]
fn test_failure_passes_through_untouched() {
    let counter = CallCounter::new();
    let failure: Outcome<u8, CountedDrop> = err(CountedDrop(counter.clone()));

    let failure = failure.map(|v| v + 1).and_then(|v| ok(v * 2)).inspect(|_| ());
    assert_eq!(counter.count(), 0, "The error should be moved, not dropped and rebuilt.");
    assert!(failure.is_err());

    drop(failure);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_chaining() {
    let half = |v: u32| Outcome::when(v % 2 == 0, v / 2, "odd");

    assert_eq!(ok(8).and_then(half).and_then(half), ok(2));
    assert_eq!(ok(6).and_then(half).flat_map(half), err("odd"));
    assert_eq!(err("early").and_then(half), err("early"));

    assert_eq!(ok::<u8, &str>(1).and(ok::<&str, &str>("b")), ok("b"));
    assert_eq!(err::<u8, _>("a").and(ok::<&str, &str>("b")), err("a"));
    assert_eq!(ok::<u8, &str>(1).or(ok::<u8, u32>(2)), ok(1));
    assert_eq!(err::<u8, &str>("a").or(err::<u8, u32>(2)), err(2));
    assert_eq!(ok::<u8, &str>(1).or_else(|_| err::<u8, ()>(())), ok(1));
}

#[test]
fn test_flatten() {
    assert_eq!(ok::<Outcome<u8, &str>, &str>(ok(1)).flatten(), ok(1));
    assert_eq!(ok::<Outcome<u8, &str>, &str>(err("inner")).flatten(), err("inner"));
    assert_eq!(err::<Outcome<u8, &str>, &str>("outer").flatten(), err("outer"));
}

#[test]
fn test_contains() {
    assert!(ok::<_, &str>(String::from("a")).contains("a"));
    assert!(!ok::<_, &str>(String::from("a")).contains("b"));
    assert!(!err::<String, _>("a").contains("a"));

    assert!(err::<u8, _>(String::from("e")).contains_err("e"));
    assert!(!err::<u8, _>(String::from("e")).contains_err("f"));
    assert!(!ok::<u8, String>(1).contains_err("e"));
}

#[test]
fn test_unwrapping() {
    assert_eq!(ok::<u8, &str>(1).unwrap(), 1);
    assert_eq!(err::<u8, _>("e").unwrap_or(2), 2);
    assert_eq!(err::<usize, _>("four").unwrap_or_else(str::len), 4);
    assert_eq!(err::<u8, _>("e").unwrap_or_default(), 0);
    assert_eq!(ok::<u8, &str>(1).expect("present"), 1);
    assert_eq!(err::<u8, _>("e").unwrap_err(), "e");
    assert_eq!(err::<u8, _>("e").expect_err("should fail"), "e");

    assert_panics!({ err::<u8, _>("boom").unwrap() });
    assert_panics_with!({ err::<u8, _>("boom").unwrap() }, "Called unwrap on Failure: \"boom\"");
    assert_panics_with!(
        { err::<u8, _>("boom").expect("loading config") },
        ExpectFailed { message: String::from("loading config: \"boom\"") }.to_string()
    );
    assert_panics_with!({ ok::<u8, &str>(1).unwrap_err() }, "Called unwrap_err on Success: 1");
    assert_panics_with!({ ok::<u8, &str>(1).expect_err("wanted failure") }, "wanted failure: 1");
    assert_panics_with!(
        { ok::<u8, &str>(1).into_error() },
        PreconditionViolated { reason: "error accessed on a Success" }.to_string()
    );
}

#[test]
fn test_inspect_and_match() {
    let counter = CallCounter::new();
    let (ok_probe, err_probe) = (counter.clone(), counter.clone());

    let outcome = ok::<u8, &str>(1).inspect(move |_| ok_probe.hit()).inspect_err(move |_| err_probe.hit());
    assert_eq!(outcome, ok(1), "Inspect should return the original Outcome.");
    assert_eq!(counter.count(), 1, "Only the success inspector should run.");

    let describe = |o: Outcome<u8, &str>| o.match_with(|v| format!("ok {v}"), |e| format!("err {e}"));
    assert_eq!(describe(ok(1)), "ok 1");
    assert_eq!(describe(err("x")), "err x");
}

#[test]
fn test_channel_conversions() {
    assert_eq!(ok::<u8, &str>(1).ok(), some(1));
    assert_eq!(err::<u8, &str>("e").ok(), Maybe::None);
    assert_eq!(err::<u8, &str>("e").err(), some("e"));
    assert_eq!(ok::<u8, &str>(1).into_std(), Ok(1));
    assert_eq!(Result::from(err::<u8, &str>("e")), Err("e"));
    assert_eq!(ok::<Maybe<u8>, &str>(some(1)).transpose(), some(ok(1)));
    assert_eq!(ok::<Maybe<u8>, &str>(none()).transpose(), Maybe::None);
}

#[test]
fn test_from_nullable() {
    assert_eq!(Outcome::from_nullable(None::<u8>), err("missing_value"));
    assert_eq!(Outcome::from_nullable(None::<u8>), err(MISSING_VALUE));
    assert_eq!(Outcome::from_nullable(Some(0)), ok(0), "Falsy values are not absent.");
    assert_eq!(Outcome::from_nullable(Some("")), ok(""));
    assert_eq!(Outcome::from_nullable_or(None::<u8>, 404), err(404));
}

#[test]
fn test_from_tuple() {
    assert_eq!(Outcome::from_tuple((1, none::<&str>())), ok(1));
    assert_eq!(Outcome::from_tuple((none::<u8>(), some("bad"))), err("bad"));
    assert_eq!(
        Outcome::from_tuple((some(1), some("bad"))),
        err("bad"),
        "The error slot should decide the variant."
    );
    assert_eq!(
        Outcome::from_tuple((none::<u8>(), none::<&str>())),
        ok(Maybe::None),
        "An absent value with no error is still a Success."
    );
    assert_eq!(Outcome::from_tuple((some(2), none::<&str>())), ok(some(2)));
}

#[test]
fn test_conditionals() {
    assert_eq!(Outcome::when(true, 1, "no"), ok(1));
    assert_eq!(Outcome::when(false, 1, "no"), err("no"));
    assert_eq!(Outcome::unless(true, 1, "no"), err("no"));
    assert_eq!(Outcome::unless(false, 1, "no"), ok(1));
    assert_eq!(Outcome::validate(5, |v| *v > 3, "small"), ok(5));
    assert_eq!(Outcome::validate(2, |v| *v > 3, "small"), err("small"));
}

#[test]
fn test_safe_try() {
    assert_eq!(Outcome::safe_try(|| 1 + 1), ok(2));

    let caught = Outcome::<u8, Panic>::safe_try(|| panic!("bad {}", 1));
    assert_eq!(caught, err(Panic { message: String::from("bad 1") }));

    let divide = Outcome::from_throwable(|(a, b): (u32, u32)| a / b);
    assert_eq!(divide((6, 3)), ok(2));
    assert!(divide((6, 0)).is_err(), "Each call should be guarded.");
    assert_eq!(divide((8, 2)), ok(4), "The wrapper should be reusable after a panic.");
}

#[test]
fn test_panics_in_combinators_propagate() {
    assert_panics!({ ok::<u8, &str>(1).map(|_| -> u8 { panic!("not captured") }) });
}

#[test]
fn test_chain() {
    let add = |n: i32| move |v: i32| Outcome::when(v + n <= 10, v + n, "too big");

    let pipeline = Outcome::chain([add(1), add(2), add(3)]);
    assert_eq!(pipeline(0), ok(6));
    assert_eq!(pipeline(6), err("too big"));

    let counter = CallCounter::new();
    let probe = counter.clone();
    let pipeline = crate::chain!(
        |v: i32| err::<i32, &str>(if v > 0 { "positive" } else { "other" }),
        move |v: i32| {
            probe.hit();
            ok(v)
        },
    );
    assert_eq!(pipeline(1), err("positive"));
    assert_eq!(counter.count(), 0, "Steps after a Failure shouldn't run.");

    let identity = Outcome::<u8, &'static str>::chain(Vec::<fn(u8) -> Outcome<u8, &'static str>>::new());
    assert_eq!(identity(7), ok(7), "An empty chain should wrap its input.");
}

#[test]
fn test_all_and_collect() {
    assert_eq!(Outcome::collect([ok(1), ok(2), err("x"), ok(3)]), err("x"));
    assert_eq!(Outcome::collect([ok::<_, &str>(1), ok(2)]), ok(vec![1, 2]));
    assert_eq!(Outcome::collect(Vec::<Outcome<u8, &str>>::new()), ok(vec![]));

    let counter = CallCounter::new();
    let probe = counter.clone();
    let visited = (0..5).map(move |i| {
        probe.hit();
        if i == 1 { err(i) } else { ok(i) }
    });
    assert_eq!(Outcome::collect(visited), err(1));
    assert_eq!(counter.count(), 2, "Collect should stop at the first Failure.");

    let mixed: Outcome<(u8, &str, bool), &str> = Outcome::all((ok(1), ok("a"), ok(true)));
    assert_eq!(mixed, ok((1, "a", true)));
    assert_eq!(
        Outcome::combine((ok::<u8, _>(1), ok::<u8, _>(2), err::<u8, _>("x"), ok::<u8, _>(3))),
        err("x")
    );
    assert_eq!(Outcome::all((err::<u8, _>("a"), err::<u8, _>("b"))), err("a"));

    let set: Outcome<std::collections::BTreeSet<u8>, &str> = [ok(2), ok(1), ok(2)].into_iter().collect();
    assert_eq!(set.map(|s| s.len()), ok(2));
}

#[test]
fn test_fail_slow() {
    assert_eq!(Outcome::combine_with_all_errors([ok(1), err("a"), err("b")]), err(vec!["a", "b"]));
    assert_eq!(Outcome::combine_with_all_errors([ok::<_, &str>(1), ok(2)]), ok(vec![1, 2]));

    let partition = Outcome::partition([ok(1), err("a"), ok(2), err("b")]);
    assert_eq!(partition.successes, vec![1, 2]);
    assert_eq!(partition.failures, vec!["a", "b"]);
    assert_eq!(partition.len(), 4);

    let settled = Outcome::all_settled([err("a"), ok(1), ok(2)]);
    assert_eq!(settled.successes, vec![ok(1), ok(2)]);
    assert_eq!(settled.failures, vec![err("a")], "Settled should keep the original Outcomes.");

    assert!(Outcome::partition(Vec::<Outcome<u8, u8>>::new()).is_empty());
}

#[test]
fn test_iterators() {
    let outcome = ok::<u8, &str>(2);
    assert_eq!(outcome.iter().count(), 1);
    assert_eq!(outcome.iter().count(), 1, "Each call should produce a fresh iterator.");
    assert_eq!(err::<u8, &str>("e").iter().count(), 0, "Errors shouldn't be iterated.");

    let mut outcome = ok::<u8, &str>(1);
    for v in &mut outcome {
        *v += 1;
    }
    assert_eq!(outcome.into_iter().collect::<Vec<_>>(), vec![2]);
}

proptest! {
    #[test]
    fn prop_map_identity(value in any::<Result<i32, u8>>()) {
        prop_assert_eq!(outcome_of(value).map(|v| v), outcome_of(value));
    }

    #[test]
    fn prop_and_then_associativity(value in any::<Result<i32, u8>>()) {
        let f = |v: i32| Outcome::from_nullable_or(v.checked_mul(2), 1);
        let g = |v: i32| Outcome::when(v >= 0, v, 2);

        prop_assert_eq!(
            outcome_of(value).and_then(f).and_then(g),
            outcome_of(value).and_then(|v| f(v).and_then(g))
        );
    }

    #[test]
    fn prop_maybe_round_trip(value in any::<i32>()) {
        prop_assert_eq!(some(value).to_outcome("e").ok(), some(value));
    }

    #[test]
    fn prop_partition_preserves_everything(values in proptest::collection::vec(any::<Result<i32, u8>>(), 0..20)) {
        let outcomes: Vec<_> = values.iter().copied().map(outcome_of).collect();
        let partition = Outcome::partition(outcomes.clone());

        prop_assert_eq!(partition.len(), values.len());
        prop_assert_eq!(
            partition.successes,
            values.iter().filter_map(|v| v.ok()).collect::<Vec<_>>()
        );
        prop_assert_eq!(Outcome::collect(outcomes).is_ok(), values.iter().all(Result::is_ok));
    }
}
