use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use owned_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Without rebalancing this is a chain.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting keys so that, without any rebalancing, the resultant tree is still
/// balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone of the tree so
/// mutations don't leak between iterations.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests.iter() {
            let largest_element_in_tree = *tree.find_max().unwrap_or(&0);
            let id = BenchmarkId::new(*name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_batched_ref(
                    || tree.clone(),
                    |tree| f(tree, black_box(largest_element_in_tree)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// All benches run against balanced and unbalanced trees of various sizes and cover both
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _key = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        let _key = black_box(tree.delete(&i));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _key = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        let _key = black_box(tree.delete(&(i + 1)));
    });

    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.inorder().count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
