use montyhall::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_game,
        revealing_goat_door,
        playing_single_round,
        simulating_batch,
        summarizing_batch,
}

fn dealing_game(c: &mut criterion::Criterion) {
    c.bench_function("deal a 3-door Game", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| create_game(rng))
    });
}

fn revealing_goat_door(c: &mut criterion::Criterion) {
    c.bench_function("open a goat door on a random Game", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let game = create_game(rng);
        b.iter(|| open_goat_door(rng, &game, Door::One))
    });
}

fn playing_single_round(c: &mut criterion::Criterion) {
    c.bench_function("play one Round under both strategies", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| play_game(rng))
    });
}

fn simulating_batch(c: &mut criterion::Criterion) {
    c.bench_function("simulate 10k rounds", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| simulate(rng, 10_000))
    });
}

fn summarizing_batch(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let set = simulate(rng, 10_000).expect("positive round count");
    c.bench_function("summarize 10k rounds", |b| b.iter(|| set.summary()));
}
