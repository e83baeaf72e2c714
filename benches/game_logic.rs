use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{slide, Grid, Spawner};
use tui_2048::types::{Direction, Tile};

/// Every row is [0, 0, 1, 1]: two merges per line on a Left swipe.
fn merge_heavy_grid() -> Grid {
    let mut grid = Grid::new(4, 4).unwrap();
    let mut id = 0;
    for y in 0..4 {
        for x in 0..4 {
            grid.place_tile(x, y, Tile::new(id, x / 2)).unwrap();
            id += 1;
        }
    }
    grid
}

/// Checkerboard levels: fully occupied, no equal neighbors, nothing moves.
fn compacted_grid() -> Grid {
    let mut grid = Grid::new(4, 4).unwrap();
    let mut id = 0;
    for y in 0..4 {
        for x in 0..4 {
            grid.place_tile(x, y, Tile::new(id, (x + y) % 2)).unwrap();
            id += 1;
        }
    }
    grid
}

/// 15 of 16 cells occupied: worst case for the rejection-sampling spawner.
fn near_full_grid() -> Grid {
    let mut grid = Grid::new(4, 4).unwrap();
    let mut id = 0;
    for y in 0..4 {
        for x in 0..4 {
            if (x, y) == (3, 3) {
                continue;
            }
            grid.place_tile(x, y, Tile::new(id, (x + y) % 2)).unwrap();
            id += 1;
        }
    }
    grid
}

fn bench_transition_merge_heavy(c: &mut Criterion) {
    c.bench_function("slide_merge_heavy_4x4", |b| {
        b.iter(|| {
            let mut grid = merge_heavy_grid();
            slide(&mut grid, black_box(Direction::Left)).unwrap()
        })
    });
}

fn bench_transition_compacted(c: &mut Criterion) {
    c.bench_function("slide_compacted_4x4", |b| {
        b.iter(|| {
            let mut grid = compacted_grid();
            slide(&mut grid, black_box(Direction::Left)).unwrap()
        })
    });
}

fn bench_spawn_near_full(c: &mut Criterion) {
    c.bench_function("spawn_into_one_free_cell", |b| {
        b.iter(|| {
            let mut grid = near_full_grid();
            let mut spawner = Spawner::new(12345);
            let mut events = Vec::new();
            spawner
                .spawn(&mut grid, black_box(1), 0, &mut events)
                .unwrap()
        })
    });
}

fn bench_count_free(c: &mut Criterion) {
    let grid = merge_heavy_grid();
    c.bench_function("count_free", |b| b.iter(|| black_box(&grid).count_free()));
}

criterion_group!(
    benches,
    bench_transition_merge_heavy,
    bench_transition_compacted,
    bench_spawn_near_full,
    bench_count_free
);
criterion_main!(benches);
