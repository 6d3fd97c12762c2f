use pullstream::stream::{from_vec, Stream, StreamExt};
use quickcheck::{quickcheck, TestResult};

fn drained<S: Stream>(mut stream: S) -> bool {
    (0..3).all(|_| stream.resolve(&mut |_| Ok(())).is_end_of_stream())
}

quickcheck! {
    fn prop_collect_roundtrips(values: Vec<i32>) -> bool {
        from_vec(values.clone()).collect().value == values
    }

    fn prop_map_matches_iterator(values: Vec<i32>) -> bool {
        let expected: Vec<i64> = values.iter().map(|v| *v as i64 * 3).collect();
        from_vec(values).map(|v| Ok(v as i64 * 3)).collect().value == expected
    }

    fn prop_filter_matches_iterator(values: Vec<i32>) -> bool {
        let expected: Vec<i32> = values.iter().copied().filter(|v| v % 3 == 0).collect();
        from_vec(values).filter(|v| v % 3 == 0).collect().value == expected
    }

    fn prop_drop_first_matches_skip(values: Vec<u8>, n: u8) -> bool {
        let n = n as usize;
        let expected: Vec<u8> = values.iter().copied().skip(n).collect();
        from_vec(values).drop_first(n).collect().value == expected
    }

    fn prop_truncate_drops_last_n(values: Vec<u8>, n: u8) -> bool {
        let n = (n % 16) as usize;
        let kept = values.len().saturating_sub(n);
        from_vec(values.clone()).truncate(n).collect().value == values[..kept]
    }

    fn prop_diff_n_matches_lagged_difference(values: Vec<i16>, n: u8) -> bool {
        let n = (n % 8) as usize;
        let wide: Vec<i32> = values.iter().map(|v| *v as i32).collect();
        let expected: Vec<i32> = (n..wide.len()).map(|i| wide[i] - wide[i - n]).collect();
        from_vec(wide).diff_n(n).collect().value == expected
    }

    fn prop_windowed_matches_slice_windows(values: Vec<u8>, size: u8, compaction: u8) -> TestResult {
        let size = (size % 6) as usize;
        if size == 0 {
            return TestResult::discard();
        }
        let compaction = (compaction % 5) as usize + 1;
        let expected: Vec<Vec<u8>> = values.windows(size).map(|w| w.to_vec()).collect();
        let windows = from_vec(values)
            .windowed(size, compaction)
            .map(|window| window.collect().into_result())
            .collect()
            .value;
        TestResult::from_bool(windows == expected)
    }

    fn prop_flatten_windows_length(values: Vec<u8>, size: u8) -> TestResult {
        let size = (size % 6) as usize;
        if size == 0 {
            return TestResult::discard();
        }
        let windows = values.len().saturating_sub(size - 1);
        let flattened = from_vec(values).windowed(size, 2).flatten().count().value;
        TestResult::from_bool(flattened == windows * size)
    }

    fn prop_count_matches_len(values: Vec<u16>) -> bool {
        from_vec(values.clone()).count().value == values.len()
    }

    fn prop_accumulate_matches_fold(values: Vec<i32>, seed: i32) -> bool {
        let expected = values.iter().fold(seed as i64, |a, b| a + *b as i64);
        from_vec(values).accumulate(seed as i64, |a, b| a + b as i64).value == expected
    }

    fn prop_end_of_stream_is_absorbing(values: Vec<i16>, n: u8) -> bool {
        let n = (n % 4) as usize;
        let wide: Vec<i32> = values.iter().map(|v| *v as i32).collect();
        let mut stream = from_vec(wide).drop_first(n).truncate(n).diff();
        let _ = (&mut stream).collect();
        drained(stream)
    }
}
