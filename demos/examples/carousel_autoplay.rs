// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advancing carousel, scrolled out of view and back.
//!
//! Drives a three-slide carousel through half a minute of virtual time. The
//! carousel leaves the viewport at 10 s, returns at 18 s, and the page is
//! backgrounded between 24 s and 26 s.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_autoplay`
//! - `cargo run -p understory_demos --example carousel_autoplay -- config.json`

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use understory_carousel::{Carousel, CarouselEvent};
use understory_demos::{LoggingViewport, SimulatedHost, init_tracing, load_config};

const SLIDES: [&str; 3] = ["Design", "Build", "Grow"];

fn main() -> ExitCode {
    init_tracing();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match load_config(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let carousel = match Carousel::builder(SLIDES)
        .viewport(LoggingViewport::new(390.0))
        .config(config)
        .build(0)
    {
        Ok(carousel) => carousel,
        Err(err) => {
            error!(%err, "carousel failed to initialize");
            return ExitCode::FAILURE;
        }
    };
    let mut host = SimulatedHost::new(carousel, 0);
    host.carousel_mut().subscribe(|event| {
        if let CarouselEvent::SlideChanged { index, .. } = event {
            info!(slide = SLIDES[*index], "now showing");
        }
    });

    host.run_until(10_000);
    let now = host.now();
    let _ = host.carousel_mut().set_visible_fraction(0.0, now);
    host.run_until(18_000);
    let now = host.now();
    let _ = host.carousel_mut().set_visible_fraction(1.0, now);
    host.run_until(24_000);
    let now = host.now();
    let _ = host.carousel_mut().set_backgrounded(true, now);
    host.run_until(26_000);
    let now = host.now();
    let _ = host.carousel_mut().set_backgrounded(false, now);
    host.run_until(30_000);

    let carousel = host.carousel();
    let dots: String = carousel
        .indicators()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    info!(
        index = carousel.current_index(),
        offset = carousel.viewport().offset(),
        %dots,
        "finished"
    );
    ExitCode::SUCCESS
}
