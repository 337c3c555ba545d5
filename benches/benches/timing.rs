// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_timing::TimerQueue;

fn bench_timing(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_timing");
    group.sample_size(50);

    for &timers in &[3_u64, 16, 256] {
        group.bench_function(format!("schedule_cancel(timers={timers})"), |b| {
            b.iter_batched(
                TimerQueue::<u64>::new,
                |mut queue| {
                    let ids: Vec<_> = (0..timers)
                        .map(|i| queue.schedule_after(0, 100 + i * 7 % 50, i))
                        .collect();
                    for id in ids.into_iter().step_by(2) {
                        queue.cancel(id);
                    }
                    black_box(queue.next_deadline());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("repeating_drain(timers={timers})"), |b| {
            b.iter_batched(
                || {
                    let mut queue = TimerQueue::new();
                    for i in 0..timers {
                        queue.schedule_repeating(0, 10 + i % 5, i);
                    }
                    queue
                },
                |mut queue| {
                    let mut fired = 0;
                    for now in (0..1_000).step_by(10) {
                        while let Some(expired) = queue.pop_expired(now) {
                            fired += expired.payload;
                        }
                    }
                    black_box(fired);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_timing);
criterion_main!(benches);
