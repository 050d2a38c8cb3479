use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridmaze::{generate, Dims, MazeRequest, Seed};

fn request(width: i32, height: i32) -> MazeRequest {
    MazeRequest {
        width,
        height,
        seed: Seed::Number(7),
        ..Default::default()
    }
}

pub fn generate_open(c: &mut Criterion) {
    c.bench_function("generate_open_100x60", |b| {
        b.iter(|| generate(black_box(&request(100, 60))).unwrap())
    });
}

pub fn generate_masked(c: &mut Criterion) {
    // Diamond silhouette over a 60x60 grid.
    let size = 60;
    let mut packed = vec![0u8; (size * size + 7) / 8];
    for p in Dims::iter_fill(Dims::ZERO, Dims(size as i32, size as i32)) {
        let half = size as i32 / 2;
        if (p.0 - half).abs() + (p.1 - half).abs() > half {
            let index = (p.1 as usize) * size + p.0 as usize;
            packed[index / 8] |= 1 << (7 - index % 8);
        }
    }

    let mut req = request(size as i32, size as i32);
    req.mask = Some(packed);
    req.start = Some(Dims(size as i32 / 2, 0));
    req.end = Some(Dims(size as i32 / 2, size as i32 - 1));

    c.bench_function("generate_masked_60x60", |b| {
        b.iter(|| generate(black_box(&req)).unwrap())
    });
}

pub fn solve_generated(c: &mut Criterion) {
    let maze = generate(&request(100, 60)).unwrap();
    c.bench_function("solve_100x60", |b| {
        b.iter(|| black_box(&maze).solve().unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate_open, generate_masked, solve_generated}
criterion_main!(benches);
