// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trowel_bond::{Bond, WildConfig};
use trowel_model::format::BrickFormat;

fn bench_wild_generation(c: &mut Criterion) {
    let format = BrickFormat::standard();
    let mut group = c.benchmark_group("wild_generation");

    for cells in [20usize, 40, 80] {
        let width = format.cells_to_width(cells);
        group.bench_with_input(BenchmarkId::from_parameter(cells), &width, |b, &width| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let bond = Bond::Wild(WildConfig::with_seed(seed));
                black_box(bond.generate(width, 8, &format))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wild_generation);
criterion_main!(benches);
