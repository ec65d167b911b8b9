use boxkit_core::geometry::{Line, EPSILON};
use boxkit_core::BoxConfig;
use boxkit_notching::{BoxLayout, BoxMaker, Edge, EdgeOptions, Face, PathGenerator};

fn generate(config: BoxConfig) -> BoxLayout {
    BoxMaker::new(config)
        .expect("valid config")
        .generate()
        .expect("layout generation")
}

fn reference_config() -> BoxConfig {
    BoxConfig {
        width: 100.0,
        height: 60.0,
        depth: 40.0,
        thickness: 3.0,
        notch_width: 10.0,
        kerf: 0.0,
        padding: 5.0,
        ..BoxConfig::default()
    }
}

/// Two collinear segments sharing more than an endpoint.
fn interior_overlap(a: &Line, b: &Line) -> bool {
    let (a, b) = (a.normalized(), b.normalized());
    if a.is_horizontal() && b.is_horizontal() && (a.p1.y - b.p1.y).abs() < EPSILON {
        return a.p1.x.max(b.p1.x) < a.p2.x.min(b.p2.x) - EPSILON;
    }
    if a.is_vertical() && b.is_vertical() && (a.p1.x - b.p1.x).abs() < EPSILON {
        return a.p1.y.max(b.p1.y) < a.p2.y.min(b.p2.y) - EPSILON;
    }
    false
}

#[test]
fn test_full_box_generates_all_six_faces() {
    let layout = generate(reference_config());

    assert_eq!(layout.panels.len(), 6);
    assert_eq!(layout.faces.len(), 6);
    for face in Face::ORDER {
        let lines = layout.lines(face);
        assert!(lines.len() > 20, "{} has only {} lines", face, lines.len());
    }
}

#[test]
fn test_no_face_contains_overlapping_cuts() {
    let layout = generate(reference_config());

    for face in Face::ORDER {
        let lines = layout.lines(face);
        for (i, a) in lines.iter().enumerate() {
            for b in lines.iter().skip(i + 1) {
                assert!(
                    !interior_overlap(a, b),
                    "{}: {:?} overlaps {:?}",
                    face,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_face_lines_are_sorted_and_unique() {
    let layout = generate(reference_config());

    for face in Face::ORDER {
        let lines = layout.lines(face);
        for pair in lines.windows(2) {
            assert!(!pair[0].coincides_with(&pair[1]), "{} has duplicates", face);
        }
        let mut sorted = lines.to_vec();
        sorted.sort_by(|a, b| {
            a.p1.x
                .total_cmp(&b.p1.x)
                .then(a.p1.y.total_cmp(&b.p1.y))
                .then(a.p2.x.total_cmp(&b.p2.x))
                .then(a.p2.y.total_cmp(&b.p2.y))
        });
        assert_eq!(lines, sorted.as_slice(), "{} is not sorted", face);
    }
}

#[test]
fn test_enclosure_contains_every_cut_line() {
    let layout = generate(reference_config());

    for face in Face::ORDER {
        for line in layout.lines(face) {
            assert!(
                layout.enclosure.contains(&line.p1) && layout.enclosure.contains(&line.p2),
                "{}: {:?} escapes the enclosure",
                face,
                line
            );
        }
    }
    assert!(layout.enclosure.width() > 0.0);
    assert!(layout.enclosure.height() > 0.0);
}

#[test]
fn test_kerf_compensated_box_generates() {
    let layout = generate(BoxConfig {
        kerf: 0.5,
        ..reference_config()
    });

    for face in Face::ORDER {
        assert!(!layout.lines(face).is_empty());
    }
}

#[test]
fn test_imperial_config_generates_metric_layout() {
    let layout = generate(BoxConfig {
        width: 4.0,
        height: 3.0,
        depth: 2.0,
        thickness: 0.125,
        notch_width: 0.5,
        padding: 0.25,
        units: boxkit_core::MeasurementSystem::Imperial,
        ..BoxConfig::default()
    });

    // 4in panel -> 101.6mm wide front panel
    let front = &layout.panels[Face::Front.index()];
    assert!((front.rect.width() - 101.6).abs() < 1e-9);
}

#[test]
fn test_layout_serializes_to_json() {
    let layout = generate(reference_config());
    let value = serde_json::to_value(&layout).expect("serialize");

    assert!(value["faces"]["front"].is_array());
    assert!(value["enclosure"]["min"].is_array() || value["enclosure"]["min"].is_object());
    assert_eq!(value["panels"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_reference_edge_cut_path() {
    // the canonical edge: outer (0,0)-(10,0), inner (1,1)-(9,1)
    let edge = Edge::new(
        Line::from_coords(0.0, 0.0, 10.0, 0.0),
        Line::from_coords(1.0, 1.0, 9.0, 1.0),
        EdgeOptions {
            notch_width: 2.0,
            thickness: 1.0,
            kerf: 0.0,
            center_out: true,
            corners: true,
        },
    );
    assert_eq!(edge.notch_count, 5);
    assert!((edge.notch_width - 1.6).abs() < 1e-3);

    let path = PathGenerator::new(&edge).generate();
    assert_eq!(path.lines().len(), 19);
    assert_eq!(path.vertices.first().copied(), Some(edge.inside.p1));
}
