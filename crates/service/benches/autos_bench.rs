use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::Auto;
use service::autos::repo::MemoryAutoRepository;
use service::{AutoManager, AutoService};

fn bench_filtered_list(c: &mut Criterion) {
    let svc = AutoManager::new(Arc::new(MemoryAutoRepository::new()));
    let colors = ["red", "blue", "green", "black"];
    let makes = ["Honda", "Ford", "Toyota"];

    // seed outside of the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    for i in 0..1_000 {
        let auto = Auto::new(colors[i % colors.len()], makes[i % makes.len()], "Model", 2000 + (i % 20) as i32, &format!("BENCH{i:05}"));
        rt.block_on(svc.add_auto(auto)).unwrap();
    }

    c.bench_function("autos_list_color_and_make", |b| {
        b.iter(|| {
            let list = rt.block_on(svc.get_all_autos_filtered("red", "Honda")).unwrap();
            assert!(!list.is_empty());
        });
    });

    c.bench_function("autos_get_by_vin", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.get_auto("bench00500")).unwrap();
        });
    });
}

criterion_group!(benches, bench_filtered_list);
criterion_main!(benches);
