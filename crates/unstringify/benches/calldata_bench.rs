use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use unstringify::Groth16Calldata;

fn gen_export(inputs: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut word = || {
        let limbs: [u64; 4] = rng.r#gen();
        format!(
            "\"0x{:016x}{:016x}{:016x}{:016x}\"",
            limbs[0] >> 2,
            limbs[1],
            limbs[2],
            limbs[3]
        )
    };
    let a = format!("[{}, {}]", word(), word());
    let b = format!("[[{}, {}],[{}, {}]]", word(), word(), word(), word());
    let c = format!("[{}, {}]", word(), word());
    let ins: Vec<String> = (0..inputs).map(|_| word()).collect();
    format!("{a},{b},{c},[{}]", ins.join(","))
}

pub fn calldata_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("groth16_calldata");
    for &n in &[1, 16, 256] {
        let s = gen_export(n);
        group.throughput(Throughput::Bytes(s.len() as u64));
        group.bench_function(format!("parse::{n}"), |b| {
            b.iter(|| black_box(Groth16Calldata::parse(&s).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, calldata_benchmarks);
criterion_main!(benches);
