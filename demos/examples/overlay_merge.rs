// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merged and separate highlight regions.
//!
//! This example highlights a search field together with the results list
//! below it, once as separate cut-outs and once merged into one outline, and
//! prints which border edges each region strokes.
//!
//! Run:
//! - `cargo run -p showcase_demos --example overlay_merge`

use kurbo::{Insets, Point, Rect, Size};
use showcase_overlay::{
    Auxiliary, Border, Edges, RegionKind, RegionRequest, build_overlay, place_tooltip,
};

fn edges(e: Edges) -> String {
    let names = [
        (Edges::TOP, "top"),
        (Edges::RIGHT, "right"),
        (Edges::BOTTOM, "bottom"),
        (Edges::LEFT, "left"),
    ];
    let on: Vec<&str> = names
        .iter()
        .filter(|(flag, _)| e.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
    on.join("+")
}

fn main() {
    let viewport = Size::new(400.0, 800.0);
    let search = Rect::new(20.0, 100.0, 380.0, 140.0);
    let results = Rect::new(20.0, 140.0, 380.0, 400.0);

    for merge in [false, true] {
        let request = RegionRequest {
            padding: Insets::uniform(4.0),
            auxiliaries: vec![Auxiliary::new(results).with_shift(4.0, 0.0)],
            merge,
            border: Some(Border::default()),
            ..RegionRequest::new(search)
        };
        let overlay = build_overlay(&request);

        println!("merge = {merge}");
        for region in &overlay.regions {
            let kind = match region.kind {
                RegionKind::Primary => "primary".to_string(),
                RegionKind::Auxiliary(i) => format!("aux[{i}]"),
            };
            println!(
                "  {kind:8} rect={:?} edges={}",
                region.rect,
                edges(region.edges)
            );
        }

        let around = if merge {
            overlay.bounds()
        } else {
            overlay.primary().map(|r| r.rect)
        };
        if let Some(around) = around {
            let tip = place_tooltip(around, Size::new(200.0, 80.0), viewport, None, 10.0);
            println!("  tooltip {:?} at {:?}", tip.side, tip.origin);
        }

        // A tap between the two fields lands in the shared hot zone.
        let seam = Point::new(200.0, 142.0);
        assert!(overlay.hit_test(seam).is_some());
        if merge {
            assert!(!overlay.regions[0].edges.contains(Edges::BOTTOM));
            assert!(!overlay.regions[1].edges.contains(Edges::TOP));
        } else {
            assert_eq!(overlay.regions[0].edges, Edges::all());
        }
    }
}
