use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilewalk::board::{Coordinate, Direction, GameMap, Unit};
use tilewalk::presenter::RecordingPresenter;
use tilewalk::session::Session;
use tilewalk::wander::{run_wander, WanderConfig};

fn bench_in_bounds(c: &mut Criterion) {
    let map = GameMap::new(64);
    c.bench_function("in_bounds_64x64", |b| {
        b.iter(|| {
            let mut hits = 0;
            for x in -1..=64 {
                if map.in_bounds(black_box(Coordinate::new(x, x / 2))) {
                    hits += 1;
                }
            }
            hits
        })
    });
}

fn bench_walk_back_and_forth(c: &mut Criterion) {
    let mut session = Session::new(32, RecordingPresenter::new());
    let start = Coordinate::new(16, 16);
    session
        .spawn_unit(Unit::new(1, "bench", 0, start), start)
        .unwrap();

    c.bench_function("walk_east_then_west", |b| {
        b.iter(|| {
            session
                .unit_handler()
                .walk(1, black_box(Direction::EAST.as_coordinate()))
                .unwrap();
            session
                .unit_handler()
                .walk(1, black_box(Direction::WEST.as_coordinate()))
                .unwrap();
            session.presenter_mut().clear();
        })
    });
}

fn bench_walk_rejected(c: &mut Criterion) {
    let mut session = Session::new(8, RecordingPresenter::new());
    session
        .spawn_unit(Unit::new(1, "bench", 0, Coordinate::ORIGIN), Coordinate::ORIGIN)
        .unwrap();

    c.bench_function("walk_out_of_bounds", |b| {
        b.iter(|| {
            session
                .unit_handler()
                .walk(1, black_box(Direction::SOUTH_WEST.as_coordinate()))
                .unwrap();
            session.presenter_mut().clear();
        })
    });
}

fn bench_wander(c: &mut Criterion) {
    let config = WanderConfig {
        map_size: 32,
        units: 64,
        turns: 50,
        seed: 1,
    };
    c.bench_function("wander_64_units_50_turns", |b| {
        b.iter(|| run_wander(black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_in_bounds,
    bench_walk_back_and_forth,
    bench_walk_rejected,
    bench_wander
);
criterion_main!(benches);
