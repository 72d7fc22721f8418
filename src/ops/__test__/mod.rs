use crate::lamination::Lamination;
use crate::ops::Occlusion;


pub(crate) const SCENE: &str = r#"{
    "polygons": [["0_003", "0_030", "0_300"],
      ["1_003", "3_030", "3_300"],
      ["2_003", "2_030", "2_300"],
      ["3_003", "1_030", "1_300"]],
    "chords": [],
    "points": [],
    "radix": 4}"#;

pub(crate) fn scene() -> Lamination {
    Lamination::from_json(SCENE).unwrap()
}

/// First and third vertex of the first polygon.
pub(crate) fn scene_occlusion(lam: &Lamination) -> Occlusion {
    Occlusion::from_polygon(&lam.polygons()[0], 0, 2).unwrap()
}

/// Distance along the circle.
pub(crate) fn circle_distance(x: f64, y: f64) -> f64 {
    let d = (x - y).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[test]
fn test_scene_fixture() {
    let lam = scene();
    let occ = scene_occlusion(&lam);
    assert_eq!(occ.bounds(), (1.0 / 84.0, 4.0 / 21.0));
    assert!(circle_distance(0.999, 0.001) < 0.0021);
}
