use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use std::collections::BTreeSet;

use avl_set::AvlSet;

#[derive(Clone)]
enum SetEnum<T> {
    Avl(AvlSet<T>),
    Std(BTreeSet<T>),
}

impl<T> SetEnum<T>
where
    T: Ord,
{
    fn find(&self, x: &T) -> Option<&T> {
        match self {
            Self::Avl(s) => s.find(x),
            Self::Std(s) => s.get(x),
        }
    }

    fn insert(&mut self, x: T) -> bool {
        match self {
            Self::Avl(s) => s.insert(x),
            Self::Std(s) => s.insert(x),
        }
    }

    fn erase(&mut self, x: &T) -> bool {
        match self {
            Self::Avl(s) => s.erase(x),
            Self::Std(s) => s.remove(x),
        }
    }

    fn distance(&self, a: &T, b: &T) -> usize {
        match self {
            Self::Avl(s) => s.distance(a, b),
            Self::Std(s) => s.range(a..b).count(),
        }
    }
}

/// Helper to bench a function on a set.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of ordered sets before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut SetEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_set = num_nodes as i32 - 1;

        // Ascending insertion is the worst case for an unbalanced tree.
        let avl_set: AvlSet<i32> = (0..num_nodes as i32).collect();
        let std_set: BTreeSet<i32> = (0..num_nodes as i32).collect();
        let set_tests = [
            ("avl", SetEnum::Avl(avl_set)),
            ("btree", SetEnum::Std(std_set)),
        ];
        for (name, set) in set_tests {
            let id = BenchmarkId::new(name, largest_element_in_set);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut set = black_box(set.clone());
                        let instant = std::time::Instant::now();
                        f(&mut set, black_box(largest_element_in_set));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |set, i| {
        let _value = black_box(set.find(&i));
    });
    bench_helper(c, "erase", |set, i| {
        set.erase(&i);
    });

    bench_helper(c, "insert", |set, i| {
        set.insert(i + 1);
    });

    bench_helper(c, "find-miss", |set, i| {
        let _value = black_box(set.find(&(i + 1)));
    });
    bench_helper(c, "erase-miss", |set, i| {
        set.erase(&(i + 1));
    });

    bench_helper(c, "distance", |set, i| {
        let _steps = black_box(set.distance(&0, &i));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
