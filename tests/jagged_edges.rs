use quickcheck_macros::quickcheck;
use ylcv_canvas::domain::chart::EdgeSide;
use ylcv_canvas::infrastructure::rendering::jagged_edge::{PathPoint, edge_path};

fn render(points: &[PathPoint]) -> String {
    points.iter().map(|p| format!("{} {}", p.x, p.y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn left_edge_snapshot() {
    let points = edge_path(0.0, EdgeSide::Left, -5.0, 12.0, 5.0).expect("valid edge");
    insta::assert_snapshot!(render(&points), @r"
    0 -5
    -5 0
    0 5
    -5 10
    0 15
    ");
}

#[test]
fn right_edge_snapshot() {
    let points = edge_path(100.0, EdgeSide::Right, -5.0, 12.0, 5.0).expect("valid edge");
    insta::assert_snapshot!(render(&points), @r"
    100 15
    105 10
    100 5
    105 0
    100 -5
    ");
}

#[quickcheck]
fn right_edge_mirrors_left_edge(x: i16, top: i16, span: u16, tooth: u8) -> bool {
    let x = x as f64;
    let top = top as f64;
    let bottom = top + span as f64;
    let tooth = 1.0 + tooth as f64;

    let (Ok(left), Ok(right)) = (
        edge_path(x, EdgeSide::Left, top, bottom, tooth),
        edge_path(x, EdgeSide::Right, top, bottom, tooth),
    ) else {
        return false;
    };

    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter().rev())
            .all(|(l, r)| l.y == r.y && ((x - l.x) - (r.x - x)).abs() < 1e-9)
}

#[quickcheck]
fn edge_covers_the_whole_range(top: i16, span: u16, tooth: u8) -> bool {
    let top = top as f64;
    let bottom = top + span as f64;
    let tooth = 1.0 + tooth as f64;
    let Ok(points) = edge_path(0.0, EdgeSide::Left, top, bottom, tooth) else {
        return false;
    };

    let first = points[0];
    let last = points[points.len() - 1];
    first.y == top
        && last.y > bottom
        && points.iter().step_by(2).all(|p| p.x == 0.0)
        && points.iter().skip(1).step_by(2).all(|p| p.x == -tooth)
}

#[test]
fn inverted_range_is_rejected() {
    assert!(edge_path(0.0, EdgeSide::Left, 10.0, 0.0, 5.0).is_err());
    assert!(edge_path(f64::NAN, EdgeSide::Right, 0.0, 10.0, 5.0).is_err());
    assert!(edge_path(0.0, EdgeSide::Right, 0.0, 10.0, 0.0).is_err());
}
