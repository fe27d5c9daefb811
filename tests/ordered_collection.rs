use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use redwood::{IterBounds, OrderedTree, RedBlackTree, SortedCollection, TreeError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn init_logging() {
    // Several tests race to install the logger; only the first one wins.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

#[test]
fn shuffled_insertions_keep_every_invariant() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..20 {
        let mut values: Vec<u32> = (0..500).map(|v| v % (50 + round)).collect();
        values.shuffle(&mut rng);

        let mut tree = RedBlackTree::new();
        for (count, &v) in values.iter().enumerate() {
            tree.insert(v);
            tree.validate().unwrap();
            assert_eq!(tree.len(), count + 1);
            assert!(tree.contains(&v));
        }

        let mut expected = values.clone();
        expected.sort_unstable();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(tree.as_tree().count_reachable(), tree.len());
    }
}

#[test]
fn bounded_iteration_scenarios() {
    init_logging();

    let mut tree: RedBlackTree<i32> = [5, 10, 15, 15, 25].into_iter().collect();
    tree.set_iterator_bounds(IterBounds::unbounded().with_min(10).with_max(20));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 15, 15]);

    let mut tree: RedBlackTree<i32> = [10, 25, 5, 15, 15].into_iter().collect();
    tree.set_iterator_min(Some(15));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![15, 15, 25]);

    let mut tree: RedBlackTree<String> = ["h", "k", "a", "c", "j", "z", "b"]
        .into_iter()
        .map(String::from)
        .collect();
    tree.set_iterator_max(Some("k".to_owned()));
    let values: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(values, vec!["a", "b", "c", "h", "j", "k"]);
}

#[test]
fn exhausted_iterator_is_distinguishable() {
    let tree: RedBlackTree<i32> = [3].into_iter().collect();
    let mut iter = tree.iter();

    assert_eq!(iter.try_next(), Ok(&3));
    let err = iter.try_next().unwrap_err();
    assert!(err.is_exhausted());
    assert_eq!(err, TreeError::ExhaustedIterator);
}

#[test]
fn clear_empties_any_shape() {
    init_logging();

    let mut balanced: RedBlackTree<u64> = (0..1000).collect();
    let mut skewed: OrderedTree<u64> = (0..1000).rev().collect();

    SortedCollection::clear(&mut balanced);
    SortedCollection::clear(&mut skewed);

    assert!(balanced.is_empty() && balanced.len() == 0);
    assert!(skewed.is_empty() && skewed.len() == 0);
    assert!(balanced.iter().next().is_none());
}

#[test]
fn rotation_errors_surface_to_caller() {
    let mut tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    let root = tree.root();
    let left = root.and_then(|r| tree.left(r));
    let right = root.and_then(|r| tree.right(r));

    let err = tree.rotate(left, right).unwrap_err();
    assert!(err.is_rotation_error());
    assert!(matches!(err, TreeError::InvalidRelationship { .. }));
    assert_eq!(tree.rotate(None, root), Err(TreeError::NullArgument));

    tree.rotate(right, root).unwrap();
    tree.validate().unwrap();
    assert_eq!(tree.to_sorted_vec(), vec![&1, &2, &3]);
}
