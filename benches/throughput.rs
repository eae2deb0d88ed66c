use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use hamlog::{
    contact::ContactDraft,
    editor::table::LogTable,
    persist::{ContactStore, sqlite::SqliteContactStore},
    types::Column,
};

fn draft(call: &str, i: u64) -> ContactDraft {
    ContactDraft::new(
        call,
        format!("14.{:03}", i % 350),
        "SSB",
        "2024-01-01",
        format!("{:02}:{:02}", (i / 60) % 24, i % 60),
    )
}

fn filled_store(n: u64) -> SqliteContactStore {
    let mut store = SqliteContactStore::open_in_memory().expect("open");
    for i in 0..n {
        let _ = store.add(&draft(&format!("K{i}"), i)).expect("add");
    }
    store
}

fn bench_adds(c: &mut Criterion) {
    c.bench_function("store_add_1k", |b| {
        b.iter(|| filled_store(1_000));
    });
}

fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");
    for n in [100u64, 1_000, 10_000] {
        let store = filled_store(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| store.list_all().expect("list"));
        });
    }
    group.finish();
}

fn bench_sorted_view(c: &mut Criterion) {
    let rows = filled_store(10_000).list_all().expect("list");
    let mut table = LogTable::default();
    table.click_heading(Column::Callsign);
    c.bench_function("sort_by_callsign_10k", |b| {
        b.iter(|| table.sorted(&rows));
    });
}

criterion_group!(benches, bench_adds, bench_list_all, bench_sorted_view);
criterion_main!(benches);
