use rivulet::*;

#[test]
fn test_map() {
    let result = from_iter([1, 2, 3]).map(|x| x * 10).to_vec().unwrap();
    assert_eq!(result, vec![10, 20, 30]);
}

#[test]
fn test_map_changes_type() {
    let result = from_iter([1, 2, 3]).map(|x| x.to_string()).to_vec().unwrap();
    assert_eq!(result, vec!["1", "2", "3"]);
}

#[test]
fn test_filter() {
    let result = from_iter([56, 3, 23, 100, 42])
        .filter(|x| *x > 50)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![56, 100]);
}

#[test]
fn test_exclude() {
    let result = from_iter([56, 3, 23, 100, 42])
        .exclude(|x| *x > 50)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![3, 23, 42]);
}

#[test]
fn test_filter_map() {
    let result = from_iter(["5", "x", "23"])
        .filter_map(|s| s.parse::<i32>().ok())
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![5, 23]);
}

#[test]
fn test_flat_map() {
    let result = from_iter([1, 2, 3])
        .flat_map(|x| vec![x, x * 10])
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
}

#[test]
fn test_flat_map_skips_empty_inner() {
    let result = from_iter([vec![1], vec![], vec![], vec![2, 3], vec![]])
        .flat_map(|v| v)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_take() {
    let input = [56, 3, 23, 100, 42];
    assert_eq!(from_iter(input).take(3).to_vec().unwrap(), vec![56, 3, 23]);
    assert_eq!(from_iter(input).take(0).to_vec().unwrap(), Vec::<i32>::new());
    assert_eq!(from_iter(input).take(10).to_vec().unwrap(), input.to_vec());
}

#[test]
fn test_skip() {
    let input = [56, 3, 23, 100, 42];
    assert_eq!(from_iter(input).skip(3).to_vec().unwrap(), vec![100, 42]);
    assert_eq!(from_iter(input).skip(0).to_vec().unwrap(), input.to_vec());
    assert_eq!(from_iter(input).skip(10).to_vec().unwrap(), Vec::<i32>::new());
}

#[test]
fn test_take_while() {
    let input = [56, 3, 23, 100, 42];
    assert_eq!(
        from_iter(input).take_while(|x| *x < 80).to_vec().unwrap(),
        vec![56, 3, 23]
    );
    assert_eq!(
        from_iter(input).take_while(|x| *x > 80).to_vec().unwrap(),
        Vec::<i32>::new()
    );
    assert_eq!(
        from_iter(input).take_while(|x| *x < 1000).to_vec().unwrap(),
        input.to_vec()
    );
}

#[test]
fn test_take_while_is_fused() {
    // 3 trips the predicate; the later 1 must not resurrect the stream.
    let mut stream = from_iter([1, 3, 1]).take_while(|x| *x < 2);
    assert_eq!(stream.pull(), Some(1));
    assert_eq!(stream.pull(), None);
    assert_eq!(stream.pull(), None);
}

#[test]
fn test_skip_while() {
    let input = [56, 3, 23, 100, 42];
    assert_eq!(
        from_iter(input).skip_while(|x| *x < 80).to_vec().unwrap(),
        vec![100, 42]
    );
    assert_eq!(
        from_iter(input).skip_while(|x| *x > 80).to_vec().unwrap(),
        input.to_vec()
    );
    assert_eq!(
        from_iter(input).skip_while(|x| *x < 1000).to_vec().unwrap(),
        Vec::<i32>::new()
    );
}

#[test]
fn test_skip_while_passes_rematching_elements() {
    let result = from_iter([1, 5, 2, 1, 8])
        .skip_while(|x| *x < 5)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![5, 2, 1, 8]);
}

#[test]
fn test_distinct() {
    let result = from_iter([2, 1, 2, 3, 1]).distinct().to_vec().unwrap();
    assert_eq!(result, vec![2, 1, 3]);
}

#[test]
fn test_chain() {
    let result = from_iter([1, 2]).chain(from_iter([3, 4])).to_vec().unwrap();
    assert_eq!(result, vec![1, 2, 3, 4]);
}

#[test]
fn test_chain_unbounded_taints() {
    let stream = from_iter([1, 2]).chain(repeat(9));
    assert!(stream.is_unbounded());
    assert_eq!(stream.take(4).to_vec().unwrap(), vec![1, 2, 9, 9]);
}

#[test]
fn test_zip() {
    let result = from_iter([1, 2, 3]).zip(from_iter([10, 20])).to_vec().unwrap();
    assert_eq!(result, vec![(1, 10), (2, 20)]);
}

#[test]
fn test_zip_bounded_side_bounds_result() {
    let stream = from_iter([1, 2, 3]).zip(repeat(0));
    assert!(!stream.is_unbounded());
    assert_eq!(stream.to_vec().unwrap(), vec![(1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_zip_with() {
    let result = from_iter([1, 2, 3])
        .zip_with(from_iter([10, 20, 30]), |a, b| a + b)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![11, 22, 33]);
}

#[test]
fn test_reversed() {
    let result = from_iter([56, 3, 23, 100, 42])
        .reversed()
        .unwrap()
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![42, 100, 23, 3, 56]);
}

#[test]
fn test_reversed_is_chainable() {
    let result = from_iter([1, 2, 3, 4])
        .reversed()
        .unwrap()
        .take(2)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![4, 3]);
}

#[test]
fn test_sorted() {
    let result = from_iter([3, 1, 2]).sorted().unwrap().to_vec().unwrap();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_sorted_by() {
    let result = from_iter([3, 1, 2])
        .sorted_by(|a, b| b.cmp(a))
        .unwrap()
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![3, 2, 1]);
}

#[test]
fn test_sorted_by_key_is_stable() {
    let result = from_iter(["hello", "hi", "hey", "ok"])
        .sorted_by_key(|s| s.len())
        .unwrap()
        .to_vec()
        .unwrap();
    assert_eq!(result, vec!["hi", "ok", "hey", "hello"]);
}

#[test]
fn test_take_bounds_an_unbounded_stream() {
    let stream = repeat_with(|| 1).take(3);
    assert!(!stream.is_unbounded());
    assert_eq!(stream.to_vec().unwrap(), vec![1, 1, 1]);
}

#[test]
fn test_take_while_bounds_an_unbounded_stream() {
    let stream = iterate(1, |x| x + 1).take_while(|x| *x < 4);
    assert!(!stream.is_unbounded());
    assert_eq!(stream.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_skip_keeps_stream_unbounded() {
    assert!(repeat(1).skip(10).is_unbounded());
    assert!(repeat(1).skip_while(|x| *x > 5).is_unbounded());
    assert!(repeat(1).filter(|x| *x > 0).is_unbounded());
}

#[test]
fn test_pipeline_is_lazy_and_single_pass() {
    let mut mapped = 0;
    {
        let mut stream = from_iter([1, 2, 3, 4, 5])
            .map(|x| {
                mapped += 1;
                x * 2
            })
            .take(2);
        assert_eq!(stream.pull(), Some(2));
        assert_eq!(stream.pull(), Some(4));
        assert_eq!(stream.pull(), None);
    }
    // take(2) pulled exactly two elements through the map stage.
    assert_eq!(mapped, 2);
}

#[test]
fn test_long_pipeline_composition() {
    let result = range(1, 100)
        .filter(|x| x % 2 == 0)
        .map(|x| x * x)
        .skip(2)
        .take(4)
        .to_vec()
        .unwrap();
    assert_eq!(result, vec![36, 64, 100, 144]);
}
