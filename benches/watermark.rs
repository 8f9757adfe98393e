use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use imprint::watermark::{composite, resolve, Anchor, Dimensions, Offset, Padding};

fn create_bench_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 255]);
    }
    img
}

fn bench_resolve(c: &mut Criterion) {
    let target = Dimensions {
        width: 1920,
        height: 1080,
    };
    let logo = Dimensions {
        width: 200,
        height: 80,
    };
    let padding = Padding {
        right: 10,
        bottom: 10,
        ..Padding::default()
    };

    c.bench_function("resolve_bottom_right", |b| {
        b.iter(|| {
            resolve(
                black_box(Anchor::BottomRight),
                black_box(target),
                black_box(logo),
                black_box(&padding),
            )
        })
    });
}

fn bench_composite(c: &mut Criterion) {
    let target = create_bench_image(1920, 1080);
    let logo = create_bench_image(200, 80);

    let mut group = c.benchmark_group("composite");
    group.sample_size(10); // full-frame copies are slow, reduce sample size

    group.bench_function("stamp_1080p_corner", |b| {
        b.iter(|| {
            composite(
                black_box(&target),
                black_box(&logo),
                black_box(Offset::new(1710, 990)),
            )
        })
    });

    group.bench_function("stamp_1080p_clipped", |b| {
        b.iter(|| {
            composite(
                black_box(&target),
                black_box(&logo),
                black_box(Offset::new(-100, -40)),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_composite);
criterion_main!(benches);
