use strum::IntoEnumIterator;
use web_time::Duration;

use crate::approx_cmp::{rotations_approx_eq, vectors_approx_eq};
use crate::{CubeEngine, CubeGeometry, CubeletId, Cubelets, Face, Move, Sticker, Twist};


const FRAME: Duration = Duration::from_millis(16);

/// Where each cubelet is, and which sticker it shows toward each face of the
/// cube, in order of cubelet ID.
type Snapshot = Vec<([usize; 3], [Sticker; Face::COUNT])>;

fn new_engine() -> CubeEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    CubeEngine::default()
}

/// Steps frame by frame until the twist in progress is committed.
fn run_to_completion(engine: &mut CubeEngine) {
    let mut frames = 0;
    while engine.proceed(FRAME).unwrap() {
        frames += 1;
        assert!(frames < 1000, "animation never finished");
    }
    assert!(!engine.is_animating());
}

fn snapshot(engine: &CubeEngine) -> Snapshot {
    let geometry = &engine.prefs().geometry;
    engine
        .cubelets()
        .iter()
        .map(|c| {
            let mut stickers = [Sticker::Interior; Face::COUNT];
            for face in Face::iter() {
                stickers[face.idx()] = c.sticker_toward(face);
            }
            (geometry.nearest_indices(c.position()), stickers)
        })
        .collect()
}

/// Returns the cubelets whose position or orientation differs between two
/// registries. Unlike [`snapshot()`], this sees a center or the core turning
/// in place.
fn changed_cubelets(before: &Cubelets, after: &Cubelets) -> Vec<CubeletId> {
    before
        .iter()
        .zip(after)
        .filter(|(a, b)| {
            !vectors_approx_eq(a.position(), b.position())
                || !rotations_approx_eq(a.orientation(), b.orientation())
        })
        .map(|(a, _)| a.id())
        .collect()
}

#[test]
fn test_changed_cubelets_sees_turns_in_place() {
    let geometry = CubeGeometry::default();
    let solved = Cubelets::new(&geometry);
    let mut turned = solved.clone();
    let quarter = Twist::from(Move::Y).rotation();
    for id in [CubeletId(13), CubeletId(16)] {
        let c = turned.get_mut(id).unwrap();
        let (position, orientation) = (c.position(), c.orientation());
        c.set_transform(position, quarter * orientation);
    }

    assert!(changed_cubelets(&solved, &solved).is_empty());
    assert_eq!(
        changed_cubelets(&solved, &turned),
        vec![CubeletId(13), CubeletId(16)],
    );
}
