use std::collections::HashSet;

use cgmath::{Deg, InnerSpace, Quaternion, Rotation3, Vector3};
use cubemath::{Face, Point};
use cubeprefs::Preferences;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::*;

const R: Move = Move::new(Face::R, false);
const U: Move = Move::new(Face::U, false);
const F: Move = Move::new(Face::F, false);
const L_PRIME: Move = Move::new(Face::L, true);

fn cubie_at(sim: &CubeSimulation, initial_position: Point) -> &Cubie {
    sim.cubies()
        .iter()
        .find(|c| c.initial_position() == initial_position)
        .expect("no cubie with that initial position")
}

/// Ticks until the simulation is idle, with one move committed per tick.
fn run_to_completion(sim: &mut CubeSimulation) {
    let mut ticks = 0;
    while sim.tick(1.0) {
        ticks += 1;
        assert!(ticks <= 10_000, "simulation never went idle");
    }
}

fn assert_lattice_invariant(sim: &CubeSimulation) {
    assert_eq!(27, sim.cubies().len());
    let mut seen = HashSet::new();
    for (i, cubie) in sim.cubies().iter().enumerate() {
        assert_eq!(i, cubie.id());
        let p = cubie.position();
        for x in [p.x, p.y, p.z] {
            assert!((-1..=1).contains(&x), "{p:?} is off the lattice");
        }
        assert!(seen.insert((p.x, p.y, p.z)), "two cubies at {p:?}");
        assert!(cubemath::is_cube_rotation(cubie.orientation()));
    }
}

#[test]
fn test_new_simulation_is_solved() {
    let sim = CubeSimulation::default();
    assert_eq!(solved_cubies(), sim.cubies());
    assert!(!sim.is_animating());
    assert!(!sim.is_busy());
    assert_eq!(None, sim.current_move());
    assert_eq!(0.0, sim.animation_progress());
    assert!(sim.history().is_empty());
    assert_lattice_invariant(&sim);

    // Cubie IDs follow x, then y, then z.
    assert_eq!(Point::new(-1, -1, -1), sim.cubie(0).unwrap().position());
    assert_eq!(Point::new(-1, -1, 0), sim.cubie(1).unwrap().position());
    assert_eq!(Point::new(0, 0, 0), sim.cubie(13).unwrap().position());
    assert_eq!(Point::new(1, 1, 1), sim.cubie(26).unwrap().position());
    assert_eq!(None, sim.cubie(27));
}

#[test]
fn test_single_move_animation() {
    let mut sim = CubeSimulation::default();
    assert!(!sim.tick(0.25), "idle simulation should not need a redraw");

    sim.request_move(R);
    assert_eq!(Some(R), sim.current_move());
    assert_eq!(0, sim.queued_moves().count());
    assert!(sim.is_animating());

    // Halfway through, nothing is committed yet.
    assert!(sim.tick(0.25));
    assert_eq!(0.5, sim.animation_progress());
    assert_eq!(solved_cubies(), sim.cubies());
    assert!(sim.history().is_empty());

    assert!(sim.tick(0.25));
    assert!(!sim.is_animating());
    assert_eq!(0.0, sim.animation_progress());
    assert_eq!(&[R], sim.history());

    assert_eq!(Point::new(1, 0, -1), sim.cubie(25).unwrap().position());
    assert_eq!(
        Point::new(1, 1, -1),
        cubie_at(&sim, Point::new(1, 1, 1)).position(),
    );

    // The right layer turns clockwise as seen from +X: (x, y, z) -> (x, z, -y).
    let quarter_turn = Quaternion::from_angle_x(Deg(-90.0));
    let mut moved = 0;
    for cubie in sim.cubies() {
        let start = cubie.initial_position();
        if start.x == 1 {
            moved += 1;
            assert_eq!(Point::new(start.x, start.z, -start.y), cubie.position());
            assert_eq!(
                cubemath::snap_orientation(quarter_turn),
                cubie.orientation(),
                "cubie {}",
                cubie.id(),
            );
        } else {
            assert_eq!(start, cubie.position());
            assert_eq!(cubemath::identity_orientation(), cubie.orientation());
        }
    }
    assert_eq!(9, moved);
    assert_lattice_invariant(&sim);

    assert!(!sim.tick(0.25));
}

#[test]
fn test_small_ticks_complete_move() {
    let mut sim = CubeSimulation::default();
    sim.request_move(U);
    for _ in 0..3 {
        sim.tick(0.125);
        assert!(sim.is_animating());
    }
    sim.tick(0.125);
    assert!(!sim.is_animating());
    assert_eq!(&[U], sim.history());
    assert_eq!(
        Point::new(-1, 1, 0),
        cubie_at(&sim, Point::new(0, 1, 1)).position(),
    );
}

#[test]
fn test_one_commit_per_tick() {
    let mut sim = CubeSimulation::default();
    sim.request_moves([R, U, F]);
    assert_eq!(Some(R), sim.current_move());
    assert_eq!(vec![U, F], sim.queued_moves().collect::<Vec<_>>());
    assert!(sim.is_busy());

    sim.tick(1000.0);
    assert_eq!(&[R], sim.history());
    assert_eq!(Some(U), sim.current_move());
    assert_eq!(0.0, sim.animation_progress());

    sim.tick(f32::INFINITY);
    assert_eq!(&[R, U], sim.history());
    assert_eq!(Some(F), sim.current_move());

    sim.tick(1000.0);
    assert_eq!(&[R, U, F], sim.history());
    assert!(!sim.is_busy());
}

#[test]
fn test_negative_and_nan_dt() {
    let mut sim = CubeSimulation::default();
    sim.request_move(R);
    sim.tick(-1.0);
    assert_eq!(0.0, sim.animation_progress());
    sim.tick(f32::NAN);
    assert_eq!(0.0, sim.animation_progress());
    assert!(sim.is_animating());
    assert!(sim.history().is_empty());
}

#[test]
fn test_zero_twist_duration() {
    let mut prefs = Preferences::default();
    prefs.animation.twist_duration = 0.0;
    let mut sim = CubeSimulation::new(&prefs);
    sim.request_moves([R, U]);
    assert!(sim.tick(0.0));
    assert_eq!(&[R], sim.history());
    assert!(sim.tick(0.0));
    assert_eq!(&[R, U], sim.history());
    assert!(!sim.tick(0.0));
}

#[test]
fn test_dynamic_twist_speed() {
    let mut prefs = Preferences::default();
    let mut sim = CubeSimulation::new(&prefs);
    sim.request_moves([R, U, F]);
    sim.tick(0.1);
    assert!((sim.animation_progress() - 0.2).abs() < 0.000_01);

    prefs.animation.dynamic_twist_speed = true;
    let mut sim = CubeSimulation::new(&prefs);
    sim.request_moves([R, U, F]);
    sim.tick(0.1);
    // Three moves in flight: e^1 times faster.
    assert!((sim.animation_progress() - 0.2 * 1_f32.exp()).abs() < 0.000_1);

    // Capped even with a long queue.
    let mut sim = CubeSimulation::new(&prefs);
    sim.request_moves(std::iter::repeat_n(R, 50));
    sim.tick(0.1);
    assert!((sim.animation_progress() - 0.8).abs() < 0.000_1);
}

#[test]
fn test_move_then_reverse_is_identity() {
    for m in Move::ALL {
        let mut sim = CubeSimulation::default();
        sim.request_moves([m, m.rev()]);
        run_to_completion(&mut sim);
        assert_eq!(solved_cubies(), sim.cubies(), "{m} {}", m.rev());
    }
}

#[test]
fn test_four_quarter_turns_are_identity() {
    for m in Move::ALL {
        let mut sim = CubeSimulation::default();
        sim.request_moves([m; 4]);
        sim.catch_up();
        assert_eq!(solved_cubies(), sim.cubies(), "{m} x4");
        assert_eq!(4, sim.history().len());
    }
}

#[test]
fn test_sexy_move_order() {
    // (R U R' U') has order 6.
    let seq = parse_moves("R U R' U'").unwrap();
    let mut sim = CubeSimulation::default();
    for i in 1..=6 {
        sim.request_moves(seq.iter().copied());
        sim.catch_up();
        assert_eq!(i == 6, sim.cubies() == solved_cubies(), "after {i} reps");
    }
}

#[test]
fn test_reset() {
    let fresh = CubeSimulation::default();

    let mut sim = CubeSimulation::default();
    sim.reset();
    assert_eq!(fresh, sim);

    sim.request_moves([R, U, F]);
    sim.tick(0.1);
    sim.reset();
    assert_eq!(fresh, sim);

    sim.request_moves([R, L_PRIME]);
    run_to_completion(&mut sim);
    sim.request_move(F);
    sim.tick(0.3);
    sim.reset();
    assert_eq!(fresh, sim);
    sim.reset();
    assert_eq!(fresh, sim);
}

#[test]
fn test_scramble() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut sim = CubeSimulation::default();
    let moves = sim.scramble_with(&mut rng);

    assert_eq!(20, moves.len());
    assert!(moves.iter().all(|m| Move::ALL.contains(m)));
    assert_eq!(Some(moves[0]), sim.current_move());
    assert_eq!(&moves[1..], sim.queued_moves().collect::<Vec<_>>());
    assert!(sim.is_busy());

    sim.catch_up();
    assert!(!sim.is_busy());
    assert_eq!(moves, sim.history());
    assert_lattice_invariant(&sim);

    // Same seed, same scramble.
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut other = CubeSimulation::default();
    assert_eq!(moves, other.scramble_with(&mut rng));
    other.catch_up();
    assert_eq!(sim.cubies(), other.cubies());
}

#[test]
fn test_scramble_length_from_prefs() {
    let mut prefs = Preferences::default();
    prefs.scramble.length = 5;
    let mut sim = CubeSimulation::new(&prefs);
    assert_eq!(5, sim.scramble().len());
    assert_eq!(4, sim.queued_moves().count());
}

#[test]
fn test_render_data_at_rest() {
    let mut sim = CubeSimulation::default();
    sim.request_moves([R, U]);
    sim.catch_up();
    let render_data = sim.render_data();
    assert_eq!(27, render_data.len());
    for (transform, cubie) in render_data.iter().zip(sim.cubies()) {
        assert_eq!(cubie.id(), transform.id);
        assert_eq!(cubie.initial_position(), transform.initial_position);
        assert_eq!(cubemath::point_to_f32(cubie.position()), transform.position);
        assert_eq!(cubie.orientation(), transform.orientation);
    }
}

#[test]
fn test_render_data_mid_animation() {
    let mut sim = CubeSimulation::default();
    sim.request_move(R);
    sim.tick(0.25);
    assert!((sim.eased_progress() - 0.5).abs() < 0.000_01);

    let render_data = sim.render_data();

    // Corner halfway along its arc.
    let urf = render_data[26];
    let expected = Vector3::new(1.0, std::f32::consts::SQRT_2, 0.0);
    assert!((urf.position - expected).magnitude() < 0.000_1, "{urf:?}");

    // Committed state is unchanged.
    assert_eq!(Point::new(1, 1, 1), sim.cubie(26).unwrap().position());

    // Cubies outside the right layer are at rest.
    for transform in &render_data {
        if transform.initial_position.x < 1 {
            assert_eq!(
                cubemath::point_to_f32(transform.initial_position),
                transform.position,
            );
            assert_eq!(cubemath::identity_orientation(), transform.orientation);
        }
    }
}

#[test]
fn test_stickers() {
    let sim = CubeSimulation::default();
    let count = |id: CubieId| sim.cubie(id).unwrap().stickers().count();
    assert_eq!(3, count(0)); // corner
    assert_eq!(2, count(1)); // edge
    assert_eq!(1, count(4)); // center
    assert_eq!(0, count(13)); // core
    assert_eq!(
        vec![Face::R, Face::U, Face::F],
        sim.render_data()[26].stickers().collect::<Vec<_>>(),
    );
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

proptest! {
    #[test]
    fn proptest_moves_commit_in_request_order(
        moves in prop::collection::vec(arbitrary_move(), 0..30),
        dts in prop::collection::vec(0.0_f32..0.4, 1..10),
    ) {
        let mut sim = CubeSimulation::default();
        let mut dts = dts.into_iter().cycle();
        for &m in &moves {
            sim.request_move(m);
            // Interleave requests with partial ticks.
            if let Some(dt) = dts.next() {
                sim.tick(dt);
            }
        }
        run_to_completion(&mut sim);
        prop_assert_eq!(&moves, sim.history());

        let mut immediate = CubeSimulation::default();
        immediate.request_moves(moves.iter().copied());
        immediate.catch_up();
        prop_assert_eq!(immediate.cubies(), sim.cubies());
    }

    #[test]
    fn proptest_lattice_invariant(moves in prop::collection::vec(arbitrary_move(), 0..60)) {
        let mut sim = CubeSimulation::default();
        sim.request_moves(moves.iter().copied());
        sim.catch_up();
        assert_lattice_invariant(&sim);

        // Undoing the sequence solves the cube.
        sim.request_moves(moves.iter().rev().map(|m| m.rev()));
        sim.catch_up();
        prop_assert_eq!(solved_cubies(), sim.cubies());
    }
}
