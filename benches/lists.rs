use criterion::{black_box, criterion_group, criterion_main, Criterion};
use listkit::lists::{ArrayList, DoublyLinkedList, List};

const N: u32 = 1_000;

fn filled<L: List<u32> + Default>() -> L {
    let mut list = L::default();
    for i in 0..N {
        list.add(i);
    }
    list
}

fn bench_list<L: List<u32> + Default>(c: &mut Criterion, name: &str) {
    c.bench_function(&format!("{} add", name), |b| {
        b.iter(|| black_box(filled::<L>()))
    });

    c.bench_function(&format!("{} insert middle", name), |b| {
        b.iter(|| {
            let mut list = L::default();
            for i in 0..N {
                let mid = list.size() / 2;
                let _ = list.insert(mid, i);
            }
            black_box(list)
        })
    });

    let list = filled::<L>();
    c.bench_function(&format!("{} index_of", name), |b| {
        b.iter(|| black_box(list.index_of(black_box(&(N - 1)))))
    });

    c.bench_function(&format!("{} get", name), |b| {
        b.iter(|| black_box(list.get(black_box(3 * N as usize / 4)).ok().copied()))
    });

    c.bench_function(&format!("{} remove_at front", name), |b| {
        b.iter(|| {
            let mut list = filled::<L>();
            while list.remove_at(0).is_ok() {}
            black_box(list)
        })
    });
}

fn lists(c: &mut Criterion) {
    bench_list::<ArrayList<u32>>(c, "ArrayList");
    bench_list::<DoublyLinkedList<u32>>(c, "DoublyLinkedList");
}

criterion_group!(benches, lists);
criterion_main!(benches);
