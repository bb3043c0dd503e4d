//! Falsification Tests - Scene Composition
//!
//! Each test is a falsifiable claim about rasterization, anchors, composition
//! or refresh ordering that can be empirically refuted.
//!
//! Run: cargo test --test scene_composition_test

#![allow(clippy::unwrap_used, clippy::needless_range_loop)]

use std::collections::HashSet;

use shape_canvas::prelude::*;
use shape_canvas::render::line_points;

// ============================================================================
// SECTION 1: RASTERIZATION CLAIMS (1-4)
// ============================================================================

/// Claim 1: Every in-bounds line covers both endpoints
#[test]
fn claim_01_line_includes_both_endpoints() {
    for (p0, p1) in segments() {
        let cells: Vec<Point> = line_points(p0, p1).collect();
        assert!(cells.contains(&p0), "Claim 1 FALSIFIED: {p0} missing from {p0}->{p1}");
        assert!(cells.contains(&p1), "Claim 1 FALSIFIED: {p1} missing from {p0}->{p1}");
    }
}

/// Claim 2: Consecutive cells are 8-connected
#[test]
fn claim_02_line_is_connected() {
    for (p0, p1) in segments() {
        let cells: Vec<Point> = line_points(p0, p1).collect();
        for pair in cells.windows(2) {
            let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            assert!(
                dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0),
                "Claim 2 FALSIFIED: gap between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// Claim 3: Reversing the endpoints yields the same cell set
#[test]
fn claim_03_line_reversal_symmetric() {
    for (p0, p1) in segments() {
        let forward: HashSet<Point> = line_points(p0, p1).collect();
        let backward: HashSet<Point> = line_points(p1, p0).collect();
        assert_eq!(forward, backward, "Claim 3 FALSIFIED for {p0}->{p1}");
    }
}

/// Claim 4: A degenerate line is a single cell
#[test]
fn claim_04_degenerate_line_single_cell() {
    let p = Point::new(7, 7);
    assert_eq!(line_points(p, p).collect::<Vec<_>>(), vec![p]);
}

// ============================================================================
// SECTION 2: SHAPE CLAIMS (5-8)
// ============================================================================

/// Claim 5: Rectangle anchors follow the corner arithmetic
#[test]
fn claim_05_rectangle_anchors() {
    let r = Rectangle::new(Point::new(0, 0), Point::new(10, 4));
    assert_eq!(r.north(), Point::new(5, 4));
    assert_eq!(r.south(), Point::new(5, 0));
    assert_eq!(r.south_west(), Point::new(0, 0));
    assert_eq!(r.north_east(), Point::new(10, 4));
    assert_eq!(r.anchor(Anchor::East), Point::new(10, 2));
}

/// Claim 6: Rotation right-then-left is lossy under the cell aspect rule
#[test]
fn claim_06_rotation_round_trip_is_lossy() {
    let original = Rectangle::new(Point::new(0, 0), Point::new(10, 4));
    let mut r = original;
    r.rotate_right();
    r.rotate_left();
    assert_ne!(r, original, "Claim 6 FALSIFIED: rotation round-trip was exact");
}

/// Claim 7: Inverted corners still yield a valid crossed circle
#[test]
fn claim_07_crossed_circle_inverted_corners_normalize() {
    let mut c = CrossedCircle::new(Point::new(10, 0), Point::new(0, 10));
    assert!(c.radius() >= 0);
    assert_eq!(c.radius(), 5);
    assert_eq!(c.north_west(), Point::new(0, 10));
    assert_eq!(c.south_east(), Point::new(10, 0));

    let mut canvas = Canvas::default();
    c.draw(&mut canvas).unwrap();
    assert!(!c.is_degenerate());
    assert!(canvas.is_set(0, 10) && canvas.is_set(10, 0));
}

/// Claim 8: Moving a crossed circle off the canvas collapses it
#[test]
fn claim_08_crossed_circle_off_canvas_move_collapses() {
    for (dx, dy) in [(-1, -1), (0, 40), (110, 0), (-20, 5)] {
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.move_by(dx, dy);
        assert_eq!(c.radius(), 1, "Claim 8 FALSIFIED for move ({dx}, {dy})");
        assert_eq!(c.middle(), Point::new(1, 1));
        assert_eq!(c.corners(), [Point::new(1, 1); 4]);
    }
}

// ============================================================================
// SECTION 3: COMPOSITION CLAIMS (9-10)
// ============================================================================

/// Claim 9: `up` makes any pair of shapes touch, p on top
#[test]
fn claim_09_up_touches_for_all_pairs() {
    for (i, j) in pairs() {
        let mut p = zoo().swap_remove(i);
        let q = zoo().swap_remove(j);
        up(p.as_mut(), q.as_ref());
        assert_eq!(p.south().x, q.north().x, "Claim 9 FALSIFIED: {} on {}", p.name(), q.name());
        assert_eq!(p.south().y, q.north().y + 1, "Claim 9 FALSIFIED: {} on {}", p.name(), q.name());
    }

    // A crossed circle obeys the claim whenever it stays on the canvas
    let mut c = CrossedCircle::new(Point::new(50, 30), Point::new(60, 20));
    let q = HalfCircle::new(Point::new(40, 10), Point::new(50, 20));
    up(&mut c, &q);
    assert!(!c.is_degenerate());
    assert_eq!(c.south(), q.north().offset(0, 1));
}

/// Claim 10: `down` makes any pair of shapes touch, p underneath
#[test]
fn claim_10_down_touches_for_all_pairs() {
    for (i, j) in pairs() {
        let mut p = zoo().swap_remove(i);
        let q = zoo().swap_remove(j);
        down(p.as_mut(), q.as_ref());
        assert_eq!(p.north().x, q.south().x, "Claim 10 FALSIFIED: {} under {}", p.name(), q.name());
        assert_eq!(p.north().y, q.south().y - 1, "Claim 10 FALSIFIED: {} under {}", p.name(), q.name());
    }

    let mut c = CrossedCircle::new(Point::new(50, 30), Point::new(60, 20));
    let q = Rectangle::new(Point::new(30, 40), Point::new(40, 45));
    down(&mut c, &q);
    assert!(!c.is_degenerate());
    assert_eq!(c.north(), q.south().offset(0, -1));
}

// ============================================================================
// SECTION 4: REFRESH CLAIMS (11-14)
// ============================================================================

/// Claim 11: Refreshing an empty scene yields only background
#[test]
fn claim_11_empty_refresh_all_background() {
    let mut scene = Scene::default();
    let mut out = Vec::new();
    scene.refresh(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 50);
    assert!(text.lines().all(|l| l.len() == 120 && l.chars().all(|c| c == '.')));
}

/// Claim 12: A collapsing crossed circle erases everything painted before it
#[test]
fn claim_12_collapse_erases_earlier_paint() {
    let mut scene = Scene::default();
    scene.add(Line::new(Point::new(0, 5), Point::new(40, 5)));
    // Collapses on draw and clears everything painted before it
    scene.add(CrossedCircle::new(Point::new(100, 45), Point::new(125, 30)));

    let canvas = scene.redraw().unwrap();
    assert!(!canvas.is_set(0, 5), "Claim 12 FALSIFIED: earlier shape survived");
    assert_eq!(canvas.set_count(), 1);
}

/// Claim 12b: A crossed circle validates moves against its scene's canvas
#[test]
fn claim_12b_crossed_circle_moves_check_scene_canvas() {
    let mut scene = Scene::new(Canvas::new(30, 12).unwrap());
    let c = scene.add(CrossedCircle::new(Point::new(0, 10), Point::new(10, 0)));
    scene.move_by(c, 25, 0).unwrap();

    assert_eq!(
        scene.get(c).unwrap().north_east(),
        Point::new(1, 1),
        "Claim 12b FALSIFIED: circle left the 30x12 canvas without collapsing"
    );
}

/// Claim 13: The demo scene assembles into a touching stack
#[test]
fn claim_13_demo_scene_assembles() {
    let mut scene = Scene::default();
    let hat = scene.add(Rectangle::new(Point::new(0, 0), Point::new(14, 5)));
    let brim = scene.add(Line::horizontal(Point::new(0, 15), 17));
    let face = scene.add(Face::new(Point::new(15, 10), Point::new(27, 18)));
    let beard = scene.add(HalfCircle::new(Point::new(40, 10), Point::new(50, 20)));
    scene.add(CrossedCircle::new(Point::new(16, 44), Point::new(26, 34)));
    scene.redraw().unwrap();

    scene.rotatable_mut(hat).unwrap().unwrap().rotate_right();
    scene.resize(brim, 2).unwrap();
    scene.resize(face, 2).unwrap();
    scene.reflectable_mut(beard).unwrap().unwrap().flip_vertically();

    // The stretched brim pokes off the left edge until it is placed
    assert!(scene.redraw().unwrap_err().is_out_of_bounds());

    scene.up(brim, face).unwrap();
    scene.up(hat, brim).unwrap();
    scene.down(beard, face).unwrap();
    for id in [hat, brim, face, beard] {
        scene.move_by(id, 0, 6).unwrap();
    }

    let canvas = scene.redraw().unwrap();
    assert!(canvas.set_count() > 0);

    let get = |id| scene.get(id).unwrap();
    assert_eq!(get(face).south_west(), Point::new(15, 16));
    assert_eq!(get(brim).north(), Point::new(21, 25));
    assert_eq!(get(hat).south_west(), Point::new(16, 26));
    assert_eq!(get(hat).north_east(), Point::new(26, 33));
    assert_eq!(get(beard).north(), Point::new(21, 15));
    assert_eq!(get(hat).south().y, get(brim).north().y + 1);
    assert_eq!(get(beard).north().y, get(face).south().y - 1);
}

/// Claim 14: Emission honours configured marks
#[test]
fn claim_14_configured_marks_are_emitted() {
    let config = SceneConfig::parse("canvas:\n  width: 5\n  height: 2\nmarks:\n  set: '#'\n  background: ' '\n")
        .unwrap();
    let mut scene = Scene::with_config(&config).unwrap();
    scene.add(Line::new(Point::new(0, 1), Point::new(4, 1)));

    assert_eq!(scene.render().unwrap(), "#####\n     \n");
}

// ============================================================================
// Helpers
// ============================================================================

fn segments() -> Vec<(Point, Point)> {
    let mut out = Vec::new();
    let anchors = [(0, 0), (119, 49), (60, 0), (0, 49), (13, 7), (7, 13), (100, 3), (59, 24)];
    for &a in &anchors {
        for &b in &anchors {
            out.push((Point::from(a), Point::from(b)));
        }
    }
    out
}

fn zoo() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Line::new(Point::new(3, 9), Point::new(18, 2))),
        Box::new(Rectangle::new(Point::new(-5, -3), Point::new(8, 4))),
        Box::new(HalfCircle::new(Point::new(40, 10), Point::new(50, 20))),
        Box::new(Face::new(Point::new(15, 10), Point::new(27, 18))),
        // Last: only ever used as `q`, since moving it off-canvas collapses it
        Box::new(CrossedCircle::new(Point::new(50, 30), Point::new(60, 20))),
    ]
}

/// `(p, q)` index pairs; `p` never names the crossed circle.
fn pairs() -> Vec<(usize, usize)> {
    let n = zoo().len();
    (0..n - 1).flat_map(|i| (0..n).map(move |j| (i, j))).collect()
}
