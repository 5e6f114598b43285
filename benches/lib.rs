use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};
use shortdec::Decimal;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let doubles: Vec<f64> = {
        let mut rng = thread_rng();
        (0..1024)
            .map(|_| loop {
                let x = f64::from_bits(rng.gen::<u64>());
                if x.is_finite() {
                    break x;
                }
            })
            .collect()
    };
    group.bench_function("binary64", |b| {
        let mut i = 0;
        b.iter(|| {
            let x = doubles[i % doubles.len()];
            let _ = black_box(Decimal::from(black_box(x)));
            i = i.wrapping_add(1);
        })
    });

    let singles: Vec<f32> = {
        let mut rng = thread_rng();
        (0..1024)
            .map(|_| loop {
                let x = f32::from_bits(rng.gen::<u32>());
                if x.is_finite() {
                    break x;
                }
            })
            .collect()
    };
    group.bench_function("binary32", |b| {
        let mut i = 0;
        b.iter(|| {
            let x = singles[i % singles.len()];
            let _ = black_box(Decimal::from(black_box(x)));
            i = i.wrapping_add(1);
        })
    });

    let quads: Vec<u128> = {
        let mut rng = thread_rng();
        (0..1024)
            .map(|_| loop {
                let bits = rng.gen::<u128>();
                let exp = (bits >> 112) & 0x7FFF;
                if exp != 0x7FFF {
                    break bits;
                }
            })
            .collect()
    };
    group.bench_function("binary128", |b| {
        let mut i = 0;
        b.iter(|| {
            let bits = quads[i % quads.len()];
            let _ = black_box(Decimal::from_f128_bits(black_box(bits)));
            i = i.wrapping_add(1);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
