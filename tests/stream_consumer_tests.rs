use pullstream::stream::{
    accumulate, collect, count, from_iter, from_vec, Handler, Resolution, Stream, StreamExt,
};
use pullstream::StreamError;

// Yields its values, but only every third resolution hands one over
struct Sparse {
    values: Vec<u32>,
    ticks: usize,
}

impl Stream for Sparse {
    type Item = u32;

    fn resolve(&mut self, handler: &mut Handler<'_, u32>) -> Resolution {
        self.ticks += 1;
        if self.ticks % 3 != 0 {
            return Resolution::Progress;
        }
        if self.values.is_empty() {
            return Resolution::Exhausted;
        }
        Resolution::from_handled(handler(self.values.remove(0)))
    }
}

// Hands over its values and then fails as a source would
struct Failing {
    values: Vec<u32>,
    failed: bool,
}

impl Stream for Failing {
    type Item = u32;

    fn resolve(&mut self, handler: &mut Handler<'_, u32>) -> Resolution {
        if self.failed {
            return Resolution::Exhausted;
        }
        if self.values.is_empty() {
            self.failed = true;
            return Resolution::Failed(StreamError::source("device unplugged"));
        }
        Resolution::from_handled(handler(self.values.remove(0)))
    }
}

// Hands over two values in a single resolution
struct Pairs {
    pairs: Vec<(u32, u32)>,
}

impl Stream for Pairs {
    type Item = u32;

    fn resolve(&mut self, handler: &mut Handler<'_, u32>) -> Resolution {
        if self.pairs.is_empty() {
            return Resolution::Exhausted;
        }
        let (first, second) = self.pairs.remove(0);
        if let Err(err) = handler(first) {
            return Resolution::Failed(err);
        }
        Resolution::from_handled(handler(second))
    }
}

#[test]
fn test_collect() {
    let collected = collect(from_vec(vec![3, 1, 4]));
    assert_eq!(collected.value, vec![3, 1, 4]);
    assert!(collected.error.is_none());
}

#[test]
fn test_collect_empty() {
    let collected = collect(from_vec(Vec::<i32>::new()));
    assert!(collected.value.is_empty());
    assert_eq!(collected.into_result(), Ok(vec![]));
}

#[test]
fn test_accumulate() {
    let sum = accumulate(from_vec(vec![3, 1, 4, 1]), 0, |a, b| a + b);
    assert_eq!(sum.value, 9);
}

#[test]
fn test_accumulate_empty_returns_seed() {
    let sum = accumulate(from_vec(Vec::<i32>::new()), 1, |a, b| a + b);
    assert_eq!(sum.value, 1);
    assert!(sum.is_ok());
}

#[test]
fn test_accumulate_into_other_type() {
    let joined = from_vec(vec![3, 1, 4]).accumulate(String::new(), |mut acc, v| {
        acc.push_str(&v.to_string());
        acc
    });
    assert_eq!(joined.value, "314");
}

#[test]
fn test_count() {
    assert_eq!(count(from_vec(vec![3, 1, 4, 1])).value, 4);
}

#[test]
fn test_count_empty() {
    assert_eq!(count(from_vec(Vec::<i32>::new())).value, 0);
}

#[test]
fn test_count_lazy_iterator() {
    let counted = from_iter((0..1_000).filter(|v| v % 7 == 0)).count();
    assert_eq!(counted.value, 143);
}

#[test]
fn test_consumers_tolerate_no_op_resolutions() {
    let sparse = || Sparse { values: vec![3, 1, 4, 1], ticks: 0 };
    assert_eq!(collect(sparse()).value, vec![3, 1, 4, 1]);
    assert_eq!(accumulate(sparse(), 0, |a, b| a + b).value, 9);
    assert_eq!(count(sparse()).value, 4);
}

#[test]
fn test_consumers_keep_partial_results_on_error() {
    let failing = || Failing { values: vec![3, 1, 4], failed: false };

    let collected = collect(failing());
    assert_eq!(collected.value, vec![3, 1, 4]);
    assert_eq!(collected.error, Some(StreamError::Source("device unplugged".into())));

    let (sum, err) = accumulate(failing(), 0, |a, b| a + b).into_parts();
    assert_eq!(sum, 8);
    assert!(err.is_some_and(|e| e.is_source_error()));

    let counted = count(failing());
    assert_eq!(counted.value, 3);
    assert!(counted.into_result().is_err());
}

#[test]
fn test_consumers_over_borrowed_stream() {
    let mut stream = from_vec(vec![3, 1, 4, 1, 5]);
    let mut first = Vec::new();
    let resolution = stream.resolve(&mut |v| {
        first.push(v);
        Ok(())
    });
    assert_eq!(resolution, Resolution::Progress);

    assert_eq!(count(&mut stream).value, 4);
    assert_eq!(first, vec![3]);
    assert_eq!(count(&mut stream).value, 0);
}

#[test]
fn test_accumulate_folds_in_arrival_order() {
    let digits = from_vec(vec![3, 1, 4, 1, 5]).accumulate(0u64, |acc, d| acc * 10 + d);
    assert_eq!(digits.value, 31415);
}

#[test]
fn test_accumulate_folds_every_hand_over() {
    let pairs = Pairs { pairs: vec![(3, 1), (4, 1), (5, 9)] };
    let digits = accumulate(pairs, 0u64, |acc, d| acc * 10 + d as u64);
    assert_eq!(digits.value, 314159);
    assert!(digits.is_ok());
}

