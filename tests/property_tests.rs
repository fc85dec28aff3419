use std::collections::HashSet;

use quickcheck::quickcheck;
use rivulet::*;

quickcheck! {
    // Pulling a whole stream yields each element exactly once, in order.
    fn prop_single_pass_preserves_elements(input: Vec<i32>) -> bool {
        from_iter(input.clone()).to_vec().unwrap() == input
    }

    // take(n) ++ skip(n) reconstructs the input for every n.
    fn prop_take_skip_reconstruct(input: Vec<i32>, n: usize) -> bool {
        let n = n % (input.len() + 2);
        let taken = from_iter(input.clone()).take(n).to_vec().unwrap();
        let skipped = from_iter(input.clone()).skip(n).to_vec().unwrap();
        let cut = n.min(input.len());
        taken[..] == input[..cut] && [taken, skipped].concat() == input
    }

    // take_while(p) ++ skip_while(p) also reconstructs the input.
    fn prop_take_while_skip_while_reconstruct(input: Vec<i32>, pivot: i32) -> bool {
        let taken = from_iter(input.clone())
            .take_while(|x| *x < pivot)
            .to_vec()
            .unwrap();
        let skipped = from_iter(input.clone())
            .skip_while(|x| *x < pivot)
            .to_vec()
            .unwrap();
        [taken, skipped].concat() == input
    }

    // An exhausted stream keeps signalling empty.
    fn prop_exhaustion_is_idempotent(input: Vec<i32>) -> bool {
        let mut stream = from_iter(input.clone());
        let mut pulled = 0;
        while stream.pull().is_some() {
            pulled += 1;
        }
        pulled == input.len() && stream.pull().is_none() && stream.pull().is_none()
    }

    // sorted() agrees with std's sort.
    fn prop_sorted_matches_std(input: Vec<i32>) -> bool {
        let mut expected = input.clone();
        expected.sort();
        from_iter(input).sorted().unwrap().to_vec().unwrap() == expected
    }

    // reversed() agrees with std's reverse.
    fn prop_reversed_matches_std(input: Vec<i32>) -> bool {
        let mut expected = input.clone();
        expected.reverse();
        from_iter(input).reversed().unwrap().to_vec().unwrap() == expected
    }

    // distinct keeps the first occurrence of each element, in order.
    fn prop_distinct_keeps_first_occurrence(input: Vec<u8>) -> bool {
        let out = from_iter(input.clone()).distinct().to_vec().unwrap();
        let mut seen = HashSet::new();
        let expected: Vec<u8> = input.into_iter().filter(|x| seen.insert(*x)).collect();
        out == expected
    }

    // filter and exclude partition the input.
    fn prop_filter_exclude_partition(input: Vec<i32>) -> bool {
        let evens = from_iter(input.clone()).filter(|x| *x % 2 == 0).to_vec().unwrap();
        let odds = from_iter(input.clone()).exclude(|x| *x % 2 == 0).to_vec().unwrap();
        evens.len() + odds.len() == input.len()
            && evens.iter().all(|x| x % 2 == 0)
            && odds.iter().all(|x| x % 2 != 0)
    }

    // count agrees with the materialized length.
    fn prop_count_matches_len(input: Vec<i32>) -> bool {
        from_iter(input.clone()).count().unwrap() == input.len()
    }

    // fold with push replays the stream unchanged.
    fn prop_fold_accumulates_in_order(input: Vec<i32>) -> bool {
        let folded = from_iter(input.clone())
            .fold(Vec::new(), |mut acc, x| {
                acc.push(x);
                acc
            })
            .unwrap();
        folded == input
    }
}
