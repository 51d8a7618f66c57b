use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{ImageFormat, Rgba, RgbaImage};
use image_catalog::domain::value_objects::{BlobKey, ImageDimensions};
use std::hint::black_box;
use std::io::Cursor;

fn encode_png(side: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(side, side, Rgba([12, 34, 56, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

fn key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("blob_key");

    for name in ["cat.png", "archive.tar.gz", "IMG0001"] {
        group.bench_with_input(BenchmarkId::new("generate", name), &name, |b, &name| {
            b.iter(|| BlobKey::generate(black_box(name)))
        });
    }

    group.finish();
}

fn dimension_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_dimensions");

    for side in [16u32, 256, 1024] {
        let png = encode_png(side);
        group.throughput(Throughput::Bytes(png.len() as u64));
        group.bench_with_input(BenchmarkId::new("read_png", side), &png, |b, png| {
            b.iter(|| ImageDimensions::read(black_box(png)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, key_generation, dimension_reading);
criterion_main!(benches);
