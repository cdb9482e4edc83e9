use search_tree::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst = bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst = bst.delete(x);
                set.remove(x);
            }
            Op::Search(_) | Op::Inorder => {}
        }
    }

    bst
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut set = BTreeSet::new();
        let tree = do_ops(&ops, Tree::new(), &mut set);

        set.iter().all(|x| tree.search(x)) && tree.inorder().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree = tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.search(x))
            && still_present.iter().all(|x| tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        for delete in &deletes {
            tree = tree.delete(delete);
        }
        let values: Vec<_> = tree.inorder().collect();

        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn size_matches_distinct_inserts_minus_deletes(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut distinct: HashSet<_> = xs.into_iter().collect();
        for delete in &deletes {
            tree = tree.delete(delete);
            distinct.remove(delete);
        }

        tree.len() == distinct.len() && tree.inorder().count() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn checked_ops_agree_with_plain_ops(xs: Vec<i32>, deletes: Vec<i32>) -> bool {
        let mut plain = Tree::new();
        let mut checked = Tree::new();
        for x in &xs {
            plain = plain.insert(*x);
            if checked.try_insert(*x).is_err() {
                return false;
            }
        }
        for delete in &deletes {
            let present = plain.search(delete);
            plain = plain.delete(delete);
            if checked.try_delete(delete) != Ok(present) {
                return false;
            }
        }

        plain.inorder().eq(checked.inorder())
    }
}

#[test]
fn nan_is_rejected_without_touching_the_tree() {
    let mut tree = Tree::new();
    for x in [0.5, -1.0, 3.25] {
        assert_eq!(tree.try_insert(x), Ok(true));
    }

    assert_eq!(tree.try_insert(f64::NAN), Err(Error::Incomparable));
    assert_eq!(tree.try_delete(&f64::NAN), Err(Error::Incomparable));
    assert_eq!(tree.try_search(&f64::NAN), Err(Error::Incomparable));

    assert_eq!(tree.to_string(), "-1 0.5 3.25");
    assert_eq!(Error::Incomparable.to_string(), "values have no defined order");
}
