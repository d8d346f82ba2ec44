use criterion::{criterion_group, criterion_main, Criterion};
use pixsteg_core::{LsbCodec, PixelGrid};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let carrier = PixelGrid::from_fn(300, 300, 3, |r, col, ch| (r + col + ch) as u8)
            .expect("Cannot create carrier");
        let secret = PixelGrid::from_fn(50, 50, 3, |r, col, ch| (r * col + ch) as u8)
            .expect("Cannot create secret");
        let codec = LsbCodec::default();
        let stego = codec
            .encode(&carrier, &secret)
            .expect("Cannot hide secret image");

        b.iter(|| codec.decode(&stego).expect("Cannot unveil secret image"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
