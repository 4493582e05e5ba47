use ordtree::{KeyValueCollector, Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
///
/// `SubTree` ops copy a range, mutate the copy, and check the tree didn't
/// notice.
fn do_ops<K, V>(ops: &[Op<K, V>], mut bst: Tree<K, V>, map: &mut HashMap<K, V>) -> Tree<K, V>
where
    K: std::hash::Hash + Eq + Clone + Ord + std::fmt::Debug,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst = bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Delete(k) => {
                bst = bst.delete(k);
                map.remove(k);
            }
            Op::SubTree(from, to) => {
                let copy = bst.sub_tree(from, to);
                let keys: Vec<K> = copy.collect_keys::<Vec<&K>>().into_iter().cloned().collect();
                let mut copy = keys.iter().fold(copy, |copy, k| copy.delete(k));
                for (k, v) in map.iter() {
                    copy = copy.insert(k.clone(), v.clone());
                }
                assert_eq!(copy.size(), map.len());
                assert!(map.iter().all(|(k, v)| bst.search(k) == Some(v)));
                assert_eq!(bst.size(), map.len());
            }
        }
    }

    bst
}

fn inorder<K: Clone, V>(tree: &Tree<K, V>) -> Vec<K> {
    let mut collector = KeyValueCollector::new();
    tree.traverse(&mut collector, Traversal::InOrder);
    collector.into_parts().0.into_iter().cloned().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    tree = do_ops(&ops, tree, &mut map);
    tree.size() == map.len() && map.keys().all(|key| tree.search(key) == map.get(key))
}

#[quickcheck]
fn inorder_is_strictly_ascending(ops: Vec<Op<i8, i8>>) -> bool {
    let tree = do_ops(&ops, Tree::new(), &mut HashMap::new());
    let keys = inorder(&tree);

    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn right_root_left_is_reversed_inorder(xs: Vec<i8>) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let mut forward = inorder(&tree);
    forward.reverse();

    let mut backward = Vec::new();
    tree.right_root_left_traversal(&mut |k: &i8, _: &()| backward.push(*k));

    forward == backward
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x, *x);
    }
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

    let expected: HashSet<_> = still_present.iter().collect();
    let keys: HashSet<&i8> = tree.collect_keys();

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
        && keys == expected
}

#[quickcheck]
fn insert_twice_is_insert_once(xs: Vec<(i8, i8)>) -> bool {
    let once: Tree<_, _> = xs.iter().copied().collect();
    let twice = xs.iter().fold(once.clone(), |tree, (k, v)| tree.insert(*k, *v));

    format!("{:?}", once) == format!("{:?}", twice)
}

#[quickcheck]
fn overwrite_keeps_size(xs: Vec<i8>, k: i8) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, 0)).collect();
    let tree = tree.insert(k, 1);
    let size = tree.size();
    let tree = tree.insert(k, 2);

    tree.size() == size && tree.search(&k) == Some(&2)
}

#[quickcheck]
fn sub_tree_matches_filter(xs: Vec<i8>, from: i8, to: i8) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let range = tree.sub_tree(&from, &to);

    let expected: BTreeSet<i8> = xs.into_iter().filter(|x| from <= *x && *x <= to).collect();
    let got: BTreeSet<i8> = inorder(&range).into_iter().collect();

    got == expected && inorder(&range).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn min_max_agree_with_inorder(xs: Vec<i8>) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let keys = inorder(&tree);

    tree.min().ok() == keys.first() && tree.max().ok() == keys.last()
}
