// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use proteus::engine::{CancelToken, NullRenderer};
use proteus::model::{generate_bars_with, Algorithm};
use proteus::sorts;

// Benchmark identity (keep stable):
// - Group name in this file: `sorts.run`
// - Case IDs are the lowercase algorithm labels (e.g. `bubble`, `quick`) at n=200, the size
//   cap. If implementations move, update the wiring but do not rename group or case IDs.
fn benches_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorts.run");
    let mut rng = StdRng::seed_from_u64(2026);
    let (bars, _) = generate_bars_with(&mut rng, Some(200));

    for algorithm in Algorithm::ALL {
        let bars = bars.clone();
        group.bench_function(algorithm.label().to_lowercase(), move |b| {
            b.iter(|| {
                let mut data = black_box(bars.clone());
                let token = CancelToken::new();
                let mut renderer = NullRenderer;
                let outcome = sorts::run(
                    black_box(algorithm),
                    &mut data,
                    &mut renderer,
                    &token,
                    Duration::ZERO,
                );
                black_box((data, outcome))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benches_sorts);
criterion_main!(benches);
