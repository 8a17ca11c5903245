use basera_cache::CacheStore;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn sample_rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": format!("r-{i}"),
                "name": format!("Resident {i}"),
                "roomNumber": format!("{}-A", 100 + i),
                "status": "ACTIVE",
                "dues": 15_000 + i as i64,
            })
        })
        .collect()
}

fn bench_write_rows(c: &mut Criterion) {
    let store = CacheStore::open_in_memory().unwrap();
    let rows = sample_rows(100);

    c.bench_function("write_rows_100", |b| {
        b.iter(|| store.write_rows("residents", &rows).unwrap())
    });
}

fn bench_read_rows(c: &mut Criterion) {
    let store = CacheStore::open_in_memory().unwrap();
    store.write_rows("residents", &sample_rows(100)).unwrap();

    c.bench_function("read_rows_100", |b| {
        b.iter(|| store.read_rows("residents").unwrap())
    });
}

criterion_group!(benches, bench_write_rows, bench_read_rows);
criterion_main!(benches);
