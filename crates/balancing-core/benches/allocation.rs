use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cs_balancing_core::{agents_from_scores, customers_from_scores, execute, AgentId};
use std::collections::HashSet;

fn bench_single_strong_agent(c: &mut Criterion) {
    let mut agent_scores = vec![0; 1000];
    agent_scores[998] = 100;
    let agents = agents_from_scores(&agent_scores);
    let customers = customers_from_scores(&vec![10; 10000]);
    let unavailable: HashSet<AgentId> = [AgentId(1000)].into_iter().collect();

    c.bench_function("1000 agents x 10000 customers", |b| {
        b.iter(|| execute(black_box(&agents), black_box(&customers), black_box(&unavailable)))
    });
}

fn bench_spread_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("spread scores");
    for &agent_count in &[10usize, 100, 1000] {
        let agent_scores: Vec<i64> = (0..agent_count as i64).map(|i| i * 10_000 / agent_count as i64).collect();
        let customer_scores: Vec<i64> = (0..10_000).map(|i| (i * 7919) % 10_000).collect();
        let agents = agents_from_scores(&agent_scores);
        let customers = customers_from_scores(&customer_scores);
        let unavailable = HashSet::new();

        group.bench_with_input(BenchmarkId::from_parameter(agent_count), &agent_count, |b, _| {
            b.iter(|| execute(black_box(&agents), black_box(&customers), black_box(&unavailable)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_strong_agent, bench_spread_scores);
criterion_main!(benches);
