use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lib::chess::{Player, Position};

fn movegen(c: &mut Criterion) {
    let pos = Position::default();

    c.benchmark_group("moves")
        .throughput(Throughput::Elements(pos.moves(Player::Bottom).count() as u64))
        .bench_function("start", |b| b.iter(|| pos.moves(Player::Bottom).count()));

    c.benchmark_group("successors")
        .throughput(Throughput::Elements(pos.successors(Player::Bottom).count() as u64))
        .bench_function("start", |b| {
            b.iter(|| pos.successors(Player::Bottom).collect::<Vec<_>>())
        });

    for depth in 2..=4 {
        c.benchmark_group("perft")
            .throughput(Throughput::Elements(pos.perft(Player::Bottom, depth) as u64))
            .bench_function(depth.to_string(), |b| b.iter(|| pos.perft(Player::Bottom, depth)));
    }
}

criterion_group!(benches, movegen);
criterion_main!(benches);
