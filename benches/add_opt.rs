use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use toad_pdu::{OptNumber, Pdu};

fn add_opt(c: &mut Criterion) {
  let mut group = c.benchmark_group("pdu/add_opt");

  for n_opts in [4u16, 16, 64] {
    // ascending hits the append fast path
    group.bench_with_input(BenchmarkId::new("ascending", n_opts), &n_opts, |b, &n| {
           b.iter_batched(Pdu::new,
                          |mut pdu| {
                            for i in 0..n {
                              pdu.add_opt(OptNumber(i * 7), &[0xAB; 8]).unwrap();
                            }
                            pdu
                          },
                          BatchSize::SmallInput)
         });

    // descending forces a scan, a shift and a successor-delta rewrite
    // every time
    group.bench_with_input(BenchmarkId::new("descending", n_opts), &n_opts, |b, &n| {
           b.iter_batched(Pdu::new,
                          |mut pdu| {
                            for i in (0..n).rev() {
                              pdu.add_opt(OptNumber(i * 7), &[0xAB; 8]).unwrap();
                            }
                            pdu
                          },
                          BatchSize::SmallInput)
         });
  }

  group.finish();
}

criterion_group!(benches, add_opt);
criterion_main!(benches);
