use std::collections::{BTreeSet, HashSet};

use owned_bst::{Error, Tree};

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let keys: Vec<_> = tree.inorder().collect();

        keys.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn inorder_matches_sorted_unique_input(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected: BTreeSet<_> = xs.into_iter().collect();

        tree.inorder().eq(expected.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present: BTreeSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            let expected = if still_present.remove(delete) {
                Ok(*delete)
            } else {
                Err(Error::NotFound)
            };
            if tree.delete(delete) != expected {
                return false;
            }
        }

        tree.is_valid_bst()
            && deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }

    fn failed_delete_leaves_tree_alone(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
        let before: Vec<_> = tree.preorder().copied().collect();

        tree.delete(&missing) == Err(Error::NotFound)
            && tree.preorder().copied().eq(before)
    }

    fn reinserting_keeps_count(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let count = tree.count_nodes();

        xs.into_iter().all(|x| !tree.insert(x)) && tree.count_nodes() == count
    }

    fn count_matches_unique_insertions(xs: Vec<u16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let unique: HashSet<_> = xs.into_iter().collect();

        tree.count_nodes() == unique.len() && tree.len() == unique.len()
    }

    fn clone_reproduces_every_walk(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let cloned = tree.clone();

        cloned.preorder().eq(tree.preorder())
            && cloned.postorder().eq(tree.postorder())
            && cloned.level_order().eq(tree.level_order())
            && cloned.height() == tree.height()
    }

    fn parents_first_walks_rebuild_the_shape(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        // Any insertion order that puts every key before its descendants rebuilds the same tree.
        let mut postorder: Vec<_> = tree.postorder().copied().collect();
        postorder.reverse();
        let from_postorder: Tree<_> = postorder.into_iter().collect();
        let from_level_order: Tree<_> = tree.level_order().copied().collect();

        from_postorder.preorder().eq(tree.preorder())
            && from_level_order.preorder().eq(tree.preorder())
    }

    fn min_max_bound_every_key(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        match (tree.find_min(), tree.find_max()) {
            (Some(min), Some(max)) => tree.iter().all(|x| min <= x && x <= max),
            (None, None) => xs.is_empty(),
            _ => false,
        }
    }
}
