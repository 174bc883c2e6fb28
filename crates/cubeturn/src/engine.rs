//! Cube wrapper that adds animation and undo history functionality.

use cgmath::{Matrix4, One, Quaternion};
use cubeturn_notation::parse_notation;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use strum::IntoEnumIterator;
use web_time::Duration;

use crate::animations::{AnimationPhase, TwistAnimation};
use crate::approx_cmp::snap_rotation;
use crate::layer::select_layer;
use crate::prefs::DEFAULT_PREFS;
use crate::{
    Cubelet, CubeletId, Cubelets, EngineError, EnginePreferences, Face, Move, MoveScope, Sticker,
    Twist, TwistDirection,
};

/// Moves that scrambles are made of.
const SCRAMBLE_MOVES: [Move; 6] = [Move::U, Move::D, Move::L, Move::R, Move::F, Move::B];

/// Result of requesting a twist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// A layer twist started animating.
    Started,
    /// A whole-cube rotation was applied immediately.
    Applied,
    /// A layer twist was refused because another one is still animating.
    Rejected,
    /// The label was not recognized, or there was nothing to undo or redo.
    Ignored,
}

/// Sticker visible on one face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceSticker {
    /// Cubelet that carries the sticker.
    pub cubelet: CubeletId,
    /// Lattice point that the cubelet occupies.
    pub grid: [usize; 3],
    /// The sticker.
    pub sticker: Sticker,
}

/// 3x3x3 cube with animated layer twists, whole-cube rotations, and undo
/// history.
///
/// All cubelet coordinates are relative to the cube; the orientation of the
/// whole cube is stored separately and applied on top by
/// [`CubeEngine::cubelet_transform()`].
#[derive(Debug, Clone)]
pub struct CubeEngine {
    prefs: EnginePreferences,
    cubelets: Cubelets,
    /// Orientation of the whole cube.
    assembly: Quaternion<f32>,
    /// Layer twist being animated right now.
    animation: Option<TwistAnimation>,

    /// Scramble twists.
    scramble: Vec<Twist>,
    /// Undo history.
    undo_buffer: Vec<Twist>,
    /// Redo history.
    redo_buffer: Vec<Twist>,
}
impl Default for CubeEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PREFS.clone())
    }
}
impl CubeEngine {
    /// Constructs a solved cube.
    pub fn new(prefs: EnginePreferences) -> Self {
        Self {
            cubelets: Cubelets::new(&prefs.geometry),
            prefs,
            assembly: Quaternion::one(),
            animation: None,

            scramble: vec![],
            undo_buffer: vec![],
            redo_buffer: vec![],
        }
    }
    /// Resets the cube to solved, discarding any animation and history.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.prefs));
    }

    /// Returns the preferences.
    pub fn prefs(&self) -> &EnginePreferences {
        &self.prefs
    }
    /// Replaces the preferences. Changing the geometry resets the cube.
    /// Invalid preferences are rejected and the old ones are kept.
    pub fn set_prefs(&mut self, prefs: EnginePreferences) -> Result<(), EngineError> {
        prefs.validate()?;
        let geometry_changed = prefs.geometry != self.prefs.geometry;
        self.prefs = prefs;
        if geometry_changed {
            log::debug!("cube geometry changed; resetting");
            self.reset();
        }
        Ok(())
    }

    /// Looks up a move label and requests a twist in the normal direction.
    /// Unknown labels are ignored.
    pub fn press(&mut self, label: &str) -> Result<MoveOutcome, EngineError> {
        match Move::from_label(label) {
            Some(mv) => self.twist(mv.into()),
            None => {
                log::debug!("ignoring unknown move label {label:?}");
                Ok(MoveOutcome::Ignored)
            }
        }
    }

    /// Requests a twist and records it in the undo history.
    ///
    /// Layer twists start animating, unless another layer twist is already
    /// animating, in which case nothing happens. Whole-cube rotations are
    /// applied immediately in either case.
    pub fn twist(&mut self, twist: Twist) -> Result<MoveOutcome, EngineError> {
        let outcome = self.start_twist(twist)?;
        if outcome != MoveOutcome::Rejected {
            self.redo_buffer.clear();
            self.undo_buffer.push(twist);
        }
        Ok(outcome)
    }
    fn start_twist(&mut self, twist: Twist) -> Result<MoveOutcome, EngineError> {
        match twist.mv.scope() {
            MoveScope::WholeCube(_) => {
                self.rotate_assembly(twist);
                Ok(MoveOutcome::Applied)
            }
            MoveScope::Layer(_) => {
                if let Some(anim) = &self.animation {
                    log::debug!("rejecting {twist} while {} is animating", anim.twist());
                    return Ok(MoveOutcome::Rejected);
                }
                self.animation = Some(self.new_animation(twist, self.prefs.twist_duration())?);
                log::debug!("started {twist}");
                Ok(MoveOutcome::Started)
            }
        }
    }
    fn new_animation(
        &self,
        twist: Twist,
        duration: Duration,
    ) -> Result<TwistAnimation, EngineError> {
        let selection = select_layer(
            &self.cubelets,
            &self.prefs.geometry,
            twist.mv,
            self.prefs.layer_tolerance,
        )?;
        Ok(TwistAnimation::new(
            twist,
            selection.cubelets,
            duration,
            self.prefs.interpolation,
        ))
    }
    fn rotate_assembly(&mut self, twist: Twist) {
        self.assembly = snap_rotation(twist.rotation() * self.assembly);
        log::debug!("rotated whole cube by {twist}");
    }

    /// Applies a twist without animating it. Any twist in progress must have
    /// been committed first.
    fn apply_instantly(&mut self, twist: Twist) -> Result<(), EngineError> {
        match twist.mv.scope() {
            MoveScope::WholeCube(_) => {
                self.rotate_assembly(twist);
                Ok(())
            }
            MoveScope::Layer(_) => {
                let anim = self.new_animation(twist, Duration::ZERO)?;
                self.commit(anim)
            }
        }
    }

    /// Advances the animation using the time elapsed since the last frame,
    /// committing the twist once it completes. Returns whether the cube
    /// should be redrawn.
    pub fn proceed(&mut self, delta: Duration) -> Result<bool, EngineError> {
        let Some(anim) = &mut self.animation else {
            return Ok(false);
        };
        let complete = anim.proceed(delta);
        log::trace!("{} at {:.3}", anim.twist(), anim.progress());
        if complete && let Some(anim) = self.animation.take() {
            self.commit(anim)?;
        }
        Ok(true)
    }
    /// Immediately completes the twist being animated, if there is one.
    pub fn catch_up(&mut self) -> Result<(), EngineError> {
        match self.animation.take() {
            Some(mut anim) => {
                anim.finish();
                self.commit(anim)
            }
            None => Ok(()),
        }
    }
    /// Bakes the final rotation of a twist into its cubelets, snapping them
    /// to the lattice.
    fn commit(&mut self, anim: TwistAnimation) -> Result<(), EngineError> {
        let rotation = anim.target();
        let geometry = self.prefs.geometry;
        for &id in anim.participants() {
            if let Some(cubelet) = self.cubelets.get_mut(id) {
                let position = geometry.snap(rotation * cubelet.position());
                let orientation = snap_rotation(rotation * cubelet.orientation());
                cubelet.set_transform(position, orientation);
            }
        }
        log::debug!("committed {}", anim.twist());
        self.cubelets.check_lattice(&geometry).inspect_err(|e| {
            log::error!("cube state is corrupt after {}: {e}", anim.twist());
        })
    }

    /// Returns whether a layer twist is animating. New layer twists are
    /// rejected while this is true.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
    /// Returns the stage of the rotation state machine.
    ///
    /// [`Self::proceed()`] commits a twist in the same call that brings it to
    /// completion, so this is only ever [`AnimationPhase::Idle`] or
    /// [`AnimationPhase::Rotating`]. [`AnimationPhase::Committing`] is only
    /// reported by [`TwistAnimation::phase()`] on a finished animation.
    pub fn phase(&self) -> AnimationPhase {
        self.animation
            .as_ref()
            .map_or(AnimationPhase::Idle, TwistAnimation::phase)
    }
    /// Returns the twist currently being animated, along with a float between
    /// 0.0 and 1.0 indicating the eased progress on that animation.
    pub fn current_twist(&self) -> Option<(Twist, f32)> {
        let anim = self.animation.as_ref()?;
        Some((anim.twist(), anim.eased_progress()))
    }
    /// Returns the animation in progress.
    pub fn animation(&self) -> Option<&TwistAnimation> {
        self.animation.as_ref()
    }

    /// Parses a sequence of moves such as `R U R' U'` and applies them
    /// without animation, after completing any twist in progress. Moves with
    /// unknown labels are skipped. Returns the number of quarter turns
    /// applied.
    pub fn apply_sequence(&mut self, s: &str) -> Result<usize, EngineError> {
        let nodes = parse_notation(s)?;
        self.catch_up()?;
        let mut count = 0;
        for node in nodes.iter() {
            let Some(twists) = Twist::from_node(node) else {
                log::debug!("skipping unknown move {node}");
                continue;
            };
            for twist in twists {
                self.apply_instantly(twist)?;
                self.redo_buffer.clear();
                self.undo_buffer.push(twist);
                count += 1;
            }
        }
        Ok(count)
    }

    /// Resets the cube and then applies `n` random layer twists chosen by a
    /// PRNG seeded with `seed`. The same layer is never twisted twice in a
    /// row.
    pub fn scramble(&mut self, n: usize, seed: u64) -> Result<(), EngineError> {
        self.reset();
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let mut last = None;
        while self.scramble.len() < n {
            let mv = SCRAMBLE_MOVES[rng.random_range(0..SCRAMBLE_MOVES.len())];
            if last == Some(mv) {
                continue;
            }
            last = Some(mv);
            let direction = match rng.random::<bool>() {
                true => TwistDirection::Normal,
                false => TwistDirection::Prime,
            };
            let twist = Twist::new(mv, direction);
            self.apply_instantly(twist)?;
            self.scramble.push(twist);
        }
        log::debug!("scrambled with {}", self.scramble.iter().join(" "));
        Ok(())
    }
    /// Returns the twists of the last scramble.
    pub fn scramble_twists(&self) -> &[Twist] {
        &self.scramble
    }

    /// Undoes one twist. Layer twists are animated, and are rejected if
    /// another one is still animating.
    pub fn undo(&mut self) -> Result<MoveOutcome, EngineError> {
        let Some(&twist) = self.undo_buffer.last() else {
            return Ok(MoveOutcome::Ignored);
        };
        let outcome = self.start_twist(twist.rev())?;
        if outcome != MoveOutcome::Rejected {
            self.undo_buffer.pop();
            self.redo_buffer.push(twist);
        }
        Ok(outcome)
    }
    /// Redoes one twist. Layer twists are animated, and are rejected if
    /// another one is still animating.
    pub fn redo(&mut self) -> Result<MoveOutcome, EngineError> {
        let Some(&twist) = self.redo_buffer.last() else {
            return Ok(MoveOutcome::Ignored);
        };
        let outcome = self.start_twist(twist)?;
        if outcome != MoveOutcome::Rejected {
            self.redo_buffer.pop();
            self.undo_buffer.push(twist);
        }
        Ok(outcome)
    }
    /// Returns the twists in the undo buffer, oldest first.
    pub fn undo_buffer(&self) -> &[Twist] {
        &self.undo_buffer
    }
    /// Returns the twists in the redo buffer, most recently undone last.
    pub fn redo_buffer(&self) -> &[Twist] {
        &self.redo_buffer
    }

    /// Returns all cubelets, not including the twist in progress.
    pub fn cubelets(&self) -> &Cubelets {
        &self.cubelets
    }
    /// Returns a cubelet, not including the twist in progress.
    pub fn cubelet(&self, id: CubeletId) -> Option<&Cubelet> {
        self.cubelets.get(id)
    }
    /// Returns the orientation of the whole cube.
    pub fn assembly_orientation(&self) -> Quaternion<f32> {
        self.assembly
    }
    /// Returns the current orientation of the pivot that a cubelet is
    /// attached to, which is the identity if it is not part of the twist in
    /// progress.
    pub fn pivot_orientation(&self, id: CubeletId) -> Quaternion<f32> {
        match &self.animation {
            Some(anim) if anim.contains(id) => anim.pivot_orientation(),
            _ => Quaternion::one(),
        }
    }
    /// Returns the model matrix to draw a cubelet with, including the
    /// orientation of the whole cube and the twist in progress.
    pub fn cubelet_transform(&self, id: CubeletId) -> Option<Matrix4<f32>> {
        let cubelet = self.cubelets.get(id)?;
        Some(
            Matrix4::from(self.assembly)
                * Matrix4::from(self.pivot_orientation(id))
                * cubelet.transform(),
        )
    }

    /// Returns the sticker that a cubelet shows toward `face` of the cube,
    /// not including the twist in progress.
    pub fn sticker_facing(&self, id: CubeletId, face: Face) -> Option<Sticker> {
        Some(self.cubelets.get(id)?.sticker_toward(face))
    }
    /// Returns the stickers showing on one face of the cube, in order of
    /// cubelet ID, not including the twist in progress.
    pub fn face_stickers(&self, face: Face) -> Vec<FaceSticker> {
        let geometry = &self.prefs.geometry;
        self.cubelets
            .on_face(geometry, face, self.prefs.layer_tolerance)
            .map(|c| FaceSticker {
                cubelet: c.id(),
                grid: geometry.nearest_indices(c.position()),
                sticker: c.sticker_toward(face),
            })
            .collect()
    }
    /// Returns whether every face of the cube shows a single color,
    /// regardless of the orientation of the whole cube.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            self.face_stickers(face)
                .iter()
                .map(|s| s.sticker)
                .all_equal()
        })
    }
}
