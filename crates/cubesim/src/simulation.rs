use std::collections::VecDeque;

use cubeprefs::{AnimationPreferences, Preferences, ScramblePreferences};
use rand::Rng;

use crate::{Cubie, CubieTransform, Move, format_moves, solved_cubies};

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: f32 = 0.5;
/// Maximum speed multiplier when dynamic twist speed is enabled.
const MAX_SPEED_MULTIPLIER: f32 = 4.0;

/// Puzzle simulation, which manages the cubies, the move queue, and the twist
/// animation.
///
/// The simulation is idle when no move is animating. Committed state only
/// changes when a move finishes animating; partial progress is visible only
/// through [`Self::render_data()`].
#[derive(Debug, Clone, PartialEq)]
pub struct CubeSimulation {
    /// Cubies, ordered by ID.
    cubies: Vec<Cubie>,
    /// Moves waiting for the current move to finish.
    move_queue: VecDeque<Move>,
    /// Move being animated right now.
    current_move: Option<Move>,
    /// Linear progress of the current move, from 0.0 to 1.0.
    animation_progress: f32,
    /// Maximum number of moves in flight (reset when the queue drains).
    queue_max: usize,
    /// Every move that has been committed, in order.
    history: Vec<Move>,

    animation_prefs: AnimationPreferences,
    scramble_prefs: ScramblePreferences,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(&Preferences::default())
    }
}

impl CubeSimulation {
    /// Constructs a solved cube using the animation and scramble settings
    /// from `prefs`.
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            cubies: solved_cubies(),
            move_queue: VecDeque::new(),
            current_move: None,
            animation_progress: 0.0,
            queue_max: 0,
            history: vec![],

            animation_prefs: prefs.animation.clone(),
            scramble_prefs: prefs.scramble.clone(),
        }
    }

    /// Replaces the animation preferences. Takes effect on the next tick.
    pub fn set_animation_prefs(&mut self, prefs: AnimationPreferences) {
        self.animation_prefs = prefs;
    }
    /// Replaces the scramble preferences.
    pub fn set_scramble_prefs(&mut self, prefs: ScramblePreferences) {
        self.scramble_prefs = prefs;
    }

    /// Returns the cubies, ordered by ID.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubie with the given ID.
    pub fn cubie(&self, id: usize) -> Option<&Cubie> {
        self.cubies.get(id)
    }
    /// Returns the move being animated, if any.
    pub fn current_move(&self) -> Option<Move> {
        self.current_move
    }
    /// Returns the moves waiting behind the current move, in order.
    pub fn queued_moves(&self) -> impl Iterator<Item = Move> {
        self.move_queue.iter().copied()
    }
    /// Returns the linear progress of the current move.
    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }
    /// Returns the progress of the current move after easing, from 0.0 to
    /// 1.0.
    pub fn eased_progress(&self) -> f32 {
        self.animation_prefs
            .twist_interpolation
            .interpolate(self.animation_progress.min(1.0))
    }
    /// Returns whether a move is animating.
    pub fn is_animating(&self) -> bool {
        self.current_move.is_some()
    }
    /// Returns whether a move is animating or waiting to animate.
    ///
    /// Scramble and reset buttons should be disabled while this is `true`.
    pub fn is_busy(&self) -> bool {
        self.is_animating() || !self.move_queue.is_empty()
    }
    /// Returns every committed move, in the order it was committed.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Requests a move. If nothing is animating, the move starts right away;
    /// otherwise it waits at the back of the queue.
    ///
    /// Moves are always committed in the order they are requested.
    pub fn request_move(&mut self, m: Move) {
        if self.current_move.is_none() && self.move_queue.is_empty() {
            log::debug!("Starting move {m}");
            self.current_move = Some(m);
            self.animation_progress = 0.0;
        } else {
            log::trace!("Queueing move {m}");
            self.move_queue.push_back(m);
        }

        // Update queue_max.
        let in_flight = self.move_queue.len() + usize::from(self.current_move.is_some());
        self.queue_max = std::cmp::max(self.queue_max, in_flight);
    }

    /// Requests each move in order. See [`Self::request_move()`].
    pub fn request_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for m in moves {
            self.request_move(m);
        }
    }

    /// Advances the animation by `dt` seconds. Returns whether the cube must
    /// be redrawn.
    ///
    /// Commits at most one move per call, even if `dt` covers several moves.
    /// Negative `dt` counts as zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(current) = self.current_move else {
            self.queue_max = 0;
            return false;
        };

        let duration = self.animation_prefs.twist_duration;
        let mut delta = match duration > 0.0 {
            true => dt.max(0.0) / duration,
            false => 1.0, // Instantly complete the twist.
        };
        if self.animation_prefs.dynamic_twist_speed {
            delta *= self.speed_multiplier();
        }
        if !delta.is_finite() {
            delta = 1.0;
        }

        self.animation_progress += delta;
        if self.animation_progress >= 1.0 {
            self.commit(current);
            self.advance();
        }

        true
    }

    /// Twist exponentially faster if there are/were more moves in the queue.
    fn speed_multiplier(&self) -> f32 {
        let extra = self.queue_max.saturating_sub(1) as f32;
        (extra * EXP_TWIST_FACTOR).exp().min(MAX_SPEED_MULTIPLIER)
    }

    /// Applies a move to the committed cubie state.
    fn commit(&mut self, m: Move) {
        let twist = m.twist();
        let mut moved = 0;
        for cubie in &mut self.cubies {
            moved += usize::from(cubie.twist(twist));
        }
        log::debug!("Committed move {m} ({moved} cubies)");
        self.history.push(m);
    }

    /// Starts the next queued move, or goes idle if there is none.
    fn advance(&mut self) {
        self.current_move = self.move_queue.pop_front();
        self.animation_progress = 0.0;
    }

    /// Commits the current move and every queued move immediately, in order.
    pub fn catch_up(&mut self) {
        while let Some(m) = self.current_move {
            self.commit(m);
            self.advance();
        }
        self.queue_max = 0;
    }

    /// Requests a random scramble using the thread-local RNG. Returns the
    /// scramble moves.
    pub fn scramble(&mut self) -> Vec<Move> {
        self.scramble_with(&mut rand::rng())
    }

    /// Requests a random scramble of [`ScramblePreferences::length`] moves,
    /// each chosen uniformly from [`Move::ALL`]. Returns the scramble moves.
    ///
    /// Consecutive moves may cancel each other out.
    pub fn scramble_with(&mut self, rng: &mut impl Rng) -> Vec<Move> {
        let moves: Vec<Move> = (0..self.scramble_prefs.length)
            .map(|_| Move::ALL[rng.random_range(0..Move::ALL.len())])
            .collect();
        log::info!("Scrambling: {}", format_moves(&moves));
        self.request_moves(moves.iter().copied());
        moves
    }

    /// Returns the cube to the solved state, abandoning any animation and
    /// discarding queued moves.
    pub fn reset(&mut self) {
        log::info!("Resetting cube");
        self.cubies = solved_cubies();
        self.move_queue.clear();
        self.current_move = None;
        self.animation_progress = 0.0;
        self.queue_max = 0;
        self.history.clear();
    }

    /// Returns the transform of every cubie for the current frame, ordered by
    /// ID.
    ///
    /// Cubies in the layer of the current move are rotated partway along
    /// their arc according to the eased progress. All other cubies are at
    /// rest.
    pub fn render_data(&self) -> Vec<CubieTransform> {
        let animation = self
            .current_move
            .map(|m| (m.twist(), self.eased_progress()));
        self.cubies
            .iter()
            .map(|cubie| CubieTransform::new(cubie, animation))
            .collect()
    }
}
