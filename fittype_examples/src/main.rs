// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `fittype_core`.

use fittype_core::{Density, FitQuery, ScaleMode, SearchStrategy};
use fittype_text::{FitConstraints, HeuristicMeasurer, TextStyle};

fn main() {
    let long_text = "As the sun began to set, the traveler stood at the edge of the cliff, \
                     taking in the vibrant hues of orange, pink and purple that stretched \
                     across the sky.";
    let short_text = "The world is changed by your example, not by your opinion.";

    let density = Density::default();
    let measurer = HeuristicMeasurer;

    // Default uniform scaling: shrink a paragraph into a fixed banner.
    let config = ScaleMode::Uniform.configure(density).unwrap();
    let query = FitQuery::new(
        long_text,
        TextStyle::new(48.0),
        FitConstraints::new(360.0, 160.0),
    );
    let r = config.fit(&query, &measurer).unwrap();
    println!("uniform: requested {} -> fits at {}", r.original, r.optimal);

    // An explicit range with a coarse step.
    let config = ScaleMode::SizeRange {
        min: 10.0,
        max: 72.0,
        step: 2.0,
    }
    .configure(density)
    .unwrap();
    let query = FitQuery::new(
        short_text,
        TextStyle::new(72.0),
        FitConstraints::new(360.0, 160.0).with_max_lines(3),
    );
    let r = config.fit(&query, &measurer).unwrap();
    println!("range:   requested {} -> fits at {}", r.original, r.optimal);

    // Preset sizes, the textbook strategy, and a high-dpi density.
    let config = ScaleMode::Preset(vec![12.0, 18.0, 24.0, 36.0, 48.0])
        .configure(Density(2.0))
        .unwrap()
        .with_strategy(SearchStrategy::Canonical);
    let query = FitQuery::new(
        short_text,
        TextStyle::new(36.0),
        FitConstraints::new(240.0, 90.0),
    );
    let r = config.fit(&query, &measurer).unwrap();
    println!("preset:  requested {} -> fits at {}", r.original, r.optimal);
}
