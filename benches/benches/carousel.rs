// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_carousel::{Carousel, CarouselConfig, Transition, Viewport};

struct NullViewport;

impl Viewport for NullViewport {
    fn width(&self) -> f64 {
        400.0
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        black_box(transition);
    }

    fn set_offset(&mut self, percent: f64) {
        black_box(percent);
    }
}

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

const INTERVAL: u64 = 4_000;

fn build(n: usize) -> Carousel<usize, NullViewport> {
    Carousel::builder(0..n)
        .viewport(NullViewport)
        .config(CarouselConfig::default().with_auto_advance_interval_ms(INTERVAL))
        .build(0)
        .expect("valid carousel")
}

fn finish(carousel: &mut Carousel<usize, NullViewport>) {
    if let Some(id) = carousel.transition_id() {
        carousel.on_transition_end(id);
    }
    if carousel.wants_frame() {
        carousel.on_frame();
    }
}

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_carousel");
    group.sample_size(50);

    for &n in &[3_usize, 6, 64] {
        group.bench_function(format!("auto_advance_1k(n={n})"), |b| {
            b.iter_batched(
                || build(n),
                |mut carousel| {
                    for k in 1..=1_000 {
                        carousel.tick(k * INTERVAL);
                        finish(&mut carousel);
                    }
                    black_box(carousel.current_index());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("drag_1k(n=6,moves=8)", |b| {
        b.iter_batched(
            || (build(6), Lcg(0xCA20_0000_0000_0001)),
            |(mut carousel, mut rng)| {
                let mut now = 0;
                for _ in 0..1_000 {
                    now += 2_000;
                    let dx = f64::from(rng.next_u32() % 200) - 100.0;
                    let _ = carousel.pointer_down(Point::new(200.0, 0.0), now);
                    for step in 1..=8_u32 {
                        let x = 200.0 + dx * f64::from(step) / 8.0;
                        let _ = carousel.pointer_move(Point::new(x, 0.0), now + u64::from(step) * 16);
                        carousel.on_frame();
                    }
                    let _ = carousel.pointer_up(Point::new(200.0 + dx, 0.0), now + 140);
                    if carousel.state().is_transitioning() {
                        finish(&mut carousel);
                    }
                    carousel.tick(now + 1_500);
                }
                black_box(carousel.position());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("commands_1k(n=16)", |b| {
        b.iter_batched(
            || (build(16), Lcg(0xCA20_0000_0000_0002)),
            |(mut carousel, mut rng)| {
                for i in 0..1_000_u64 {
                    let _ = match rng.next_u32() % 3 {
                        0 => carousel.next(i),
                        1 => carousel.prev(i),
                        _ => carousel.go_to(rng.next_u32() as usize % 16, i),
                    };
                    finish(&mut carousel);
                }
                black_box(carousel.drain_events().len());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_carousel);
criterion_main!(benches);
