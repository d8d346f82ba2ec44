use criterion::{criterion_group, criterion_main, Criterion};
use pixsteg_core::{LsbCodec, PixelGrid};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let carrier = PixelGrid::from_fn(300, 300, 3, |r, col, ch| (r + col + ch) as u8)
            .expect("Cannot create carrier");
        let secret = PixelGrid::from_fn(50, 50, 3, |r, col, ch| (r * col + ch) as u8)
            .expect("Cannot create secret");
        let codec = LsbCodec::default();

        b.iter(|| {
            codec
                .encode(&carrier, &secret)
                .expect("Cannot hide secret image")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
