use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::io::Cursor;
use topoplan::loader::load_batch;
use topoplan::{ClassificationResult, Planner, UserInputs, WorkloadType};

fn sample_inputs() -> Vec<UserInputs> {
    let workloads = [
        WorkloadType::AiTraining,
        WorkloadType::WebServices,
        WorkloadType::Storage,
        WorkloadType::Mixed,
    ];
    (0..256)
        .map(|i: i64| {
            UserInputs::new(
                i * 3,
                i * 40,
                (i as f64) * 12_500.0,
                (i as f64) * 2.5,
                workloads[(i % 4) as usize],
            )
            .unwrap()
        })
        .collect()
}

fn sample_csv(rows: usize) -> String {
    let mut csv = String::from("racks,servers,budget_usd,power_kw,workload\n");
    for i in 0..rows {
        csv.push_str(&format!("{},{},{},{},mixed\n", i, i * 10, i * 5000, i * 2));
    }
    csv
}

fn criterion_benchmark(c: &mut Criterion) {
    let planner = Planner::standard().unwrap();
    let inputs = sample_inputs();

    c.bench_function("recommend_single", |b| {
        b.iter(|| planner.recommend(black_box(&inputs[97])))
    });

    c.bench_function("recommend_256", |b| {
        b.iter(|| {
            for i in &inputs {
                black_box(planner.recommend(i));
            }
        })
    });

    let triples = ClassificationResult::all();
    c.bench_function("rank_all_triples", |b| {
        b.iter(|| {
            for t in &triples {
                black_box(planner.scorer().rank(t, WorkloadType::Mixed));
            }
        })
    });

    let csv = sample_csv(1000);
    c.bench_function("load_batch_1000", |b| {
        b.iter(|| load_batch(Cursor::new(black_box(csv.as_bytes()))).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
