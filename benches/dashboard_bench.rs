use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cyberdash::{
    average_rating_by_concept, filter, unique_user_count_by_area, Dataset, DashboardSession,
    EvaluationRecord, FilterCriteria, Gender, ViewEvent,
};
use std::hint::black_box;

static AREAS: [&str; 5] = ["Redes", "Desarrollo", "Finanzas", "Soporte", "Legal"];
static CONCEPTS: [&str; 6] = [
    "Phishing",
    "Malware",
    "Contraseñas",
    "Ingeniería Social",
    "Redes Wi-Fi",
    "Respaldo",
];

fn synthetic_dataset(users: usize) -> Dataset {
    (0..users)
        .flat_map(|user| {
            CONCEPTS.iter().enumerate().map(move |(i, concept)| EvaluationRecord {
                email: format!("usuario{user}@corp.com"),
                name: format!("Usuario {user}"),
                age: 20 + (user % 45) as u32,
                gender: if user % 2 == 0 { Gender::Male } else { Gender::Female },
                area: AREAS[user % AREAS.len()].to_string(),
                concept: concept.to_string(),
                rating: ((user + i) % 3 != 0) as u8 as f64,
            })
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for users in [100, 1_000, 10_000] {
        let dataset = synthetic_dataset(users);
        let criteria = FilterCriteria::new().with_search("usuario1").with_area("Redes");
        group.bench_with_input(BenchmarkId::from_parameter(users), &dataset, |b, dataset| {
            b.iter(|| filter(black_box(dataset), black_box(&criteria)).len())
        });
    }
    group.finish();
}

fn benchmark_chart_aggregation(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    c.bench_function("chart_aggregation", |b| {
        b.iter(|| {
            let concepts = average_rating_by_concept(black_box(dataset.records()));
            let areas = unique_user_count_by_area(black_box(dataset.records()));
            (concepts.len(), areas.len())
        })
    });
}

fn benchmark_session_round_trip(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    c.bench_function("session_search_and_snapshot", |b| {
        b.iter(|| {
            let mut session = DashboardSession::new(dataset.clone());
            session
                .dispatch(ViewEvent::SearchChanged(black_box("usuario42".to_string())))
                .ok();
            session.snapshot().summary.total
        })
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_chart_aggregation,
    benchmark_session_round_trip
);
criterion_main!(benches);
