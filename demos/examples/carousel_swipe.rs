// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gestures on a carousel.
//!
//! Shows a short drag that snaps back, a long slow drag and a quick flick
//! that both commit, a drag that wraps from the first slide to the last, and
//! a tap on a pagination dot.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_swipe`

use tracing::info;
use understory_carousel::{Carousel, CarouselConfig, CarouselEvent};
use understory_demos::{LoggingViewport, SimulatedHost, init_tracing};

fn main() {
    init_tracing();

    let config = CarouselConfig::default().with_auto_advance_interval_ms(60_000);
    let Ok(carousel) = Carousel::builder(1..=4)
        .viewport(LoggingViewport::new(360.0))
        .config(config)
        .build(0)
    else {
        return;
    };
    let mut host = SimulatedHost::new(carousel, 0);
    host.carousel_mut().subscribe(|event| match event {
        CarouselEvent::GestureResolved(outcome) => info!(?outcome, "gesture"),
        CarouselEvent::Teleported { from, to } => info!(from, to, "re-centered"),
        _ => {}
    });

    info!("short drag: reverts");
    host.drag(200.0, 170.0, 300, 16);
    host.run_until(host.now() + 1_000);

    info!("long slow drag: commits");
    host.drag(300.0, 200.0, 800, 16);
    host.run_until(host.now() + 1_000);

    info!("flick: commits on velocity");
    host.drag(200.0, 180.0, 20, 10);
    host.run_until(host.now() + 1_000);

    info!("back to the first slide, then wrap backwards");
    let now = host.now();
    let _ = host.carousel_mut().go_to(0, now);
    host.run_until(host.now() + 1_000);
    host.drag(100.0, 220.0, 200, 16);
    host.run_until(host.now() + 1_000);

    let carousel = host.carousel();
    info!(
        slide = ?carousel.ring().get(carousel.current_index()).map(|s| *s.payload),
        position = carousel.position(),
        "finished"
    );
}
