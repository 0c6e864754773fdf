//! End-to-end session runs with fixed seeds.

use hydrodrive::core::events::GameEvent;
use hydrodrive::core::layout::Layout;
use hydrodrive::core::maze::{Cell, Maze};
use hydrodrive::core::player::Direction;
use hydrodrive::core::rules::{Difficulty, Rules};
use hydrodrive::{Input, Phase, Session};

fn playing(maze: Maze, rules: Rules, difficulty: Difficulty) -> Session {
    let mut s = Session::new(maze, rules, Layout::default(), Some(2024)).unwrap();
    s.choose_difficulty(difficulty);
    s.start();
    assert_eq!(s.phase(), Phase::Playing);
    s.drain_events();
    s
}

fn no_stations() -> Rules {
    Rules { initial_stations: 0, ..Rules::default() }
}

#[test]
fn test_five_plain_moves_burn_five_units() {
    let maze = Maze::parse("########\n#......#\n########").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Medium);
    for _ in 0..5 {
        s.frame([Input::Move(Direction::Right)]);
    }
    assert_eq!(s.state.player.pos(), (1, 6));
    assert_eq!(s.state.player.fuel(), 95.0);
    assert_eq!(s.phase(), Phase::Playing);
}

#[test]
fn test_ten_pickups_win() {
    let maze = Maze::parse("#############\n#.HHHHHHHHHH#\n#############").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Medium);
    for i in 0..10 {
        assert_eq!(s.phase(), Phase::Playing, "ended early at pickup {i}");
        s.frame([Input::Move(Direction::Right)]);
    }
    assert_eq!(s.state.player.score, 5000);
    assert_eq!(s.state.player.fuel(), 99.0);
    assert_eq!(s.phase(), Phase::Won);
    assert_eq!(s.state.counters.walls_unlocked, 5);
    assert!(s.drain_events().contains(&GameEvent::PhaseChanged { from: Phase::Playing, to: Phase::Won }));
}

#[test]
fn test_queued_inputs_apply_in_order() {
    let maze = Maze::parse("#####\n#...#\n#.#.#\n#...#\n#####").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Medium);
    s.frame([
        Input::Move(Direction::Right),
        Input::Move(Direction::Right),
        Input::Move(Direction::Down),
        Input::Move(Direction::Down),
    ]);
    assert_eq!(s.state.player.pos(), (3, 3));
    assert_eq!(s.state.player.facing, Direction::Down);
    let moves: Vec<_> = s
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Moved { to, .. } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(moves, vec![(1, 2), (1, 3), (2, 3), (3, 3)]);
}

#[test]
fn test_running_dry_loses() {
    let maze = Maze::parse("####\n#..#\n####").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Hard);
    let mut frames = 0;
    while s.phase() == Phase::Playing {
        let dir = if frames % 2 == 0 { Direction::Right } else { Direction::Left };
        s.frame([Input::Move(dir)]);
        frames += 1;
        assert!(frames <= 100, "never ran dry");
    }
    assert_eq!(s.phase(), Phase::Lost);
    assert_eq!(s.state.player.fuel(), 0.0);
    // 100 / 1.5 rounds up to 67 moves
    assert_eq!(frames, 67);
}

#[test]
fn test_second_pickup_unlocks_a_wall_same_frame() {
    let maze = Maze::parse("######\n#.HH.#\n######").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Easy);
    let walls = s.state.maze.count(Cell::Wall);
    s.frame([Input::Move(Direction::Right)]);
    assert_eq!(s.state.counters.fuel_collected, 1);
    s.frame([Input::Move(Direction::Right)]);
    assert_eq!(s.state.counters.fuel_collected, 0);
    assert_eq!(s.state.counters.walls_unlocked, 1);
    assert_eq!(s.state.maze.count(Cell::Wall), walls - 1);
}

#[test]
fn test_build_places_station_on_path() {
    let maze = Maze::parse("#####\n#..H#\n#####").unwrap();
    let mut s = playing(maze, no_stations(), Difficulty::Medium);
    s.frame([Input::Move(Direction::Right), Input::Move(Direction::Right)]);
    assert_eq!(s.state.player.score, 500);

    s.frame([Input::BuildStation]);
    assert_eq!(s.state.player.score, 400);
    assert_eq!(s.state.counters.stations_built, 1);
    assert_eq!(s.state.maze.count(Cell::FuelStation), 1);
    let at = s.state.maze.cells_of(Cell::FuelStation)[0];
    assert!([(1, 1), (1, 2), (1, 3)].contains(&at));

    s.frame([Input::BuildStation, Input::BuildStation, Input::BuildStation, Input::BuildStation]);
    assert_eq!(s.state.player.score, 200);
    assert_eq!(s.state.counters.stations_built, 3);
    assert_eq!(s.state.maze.count(Cell::Path), 0);
}

#[test]
fn test_notice_fades_out_during_play() {
    let maze = Maze::parse("####\n#.H#\n####").unwrap();
    let rules = Rules { notice_frames: 5, particle_frames: 3, ..no_stations() };
    let mut s = playing(maze, rules, Difficulty::Medium);
    s.frame([Input::Move(Direction::Right)]);
    assert_eq!(s.state.effects.notices.len(), 1);
    assert_eq!(s.state.effects.particles.len(), 10);
    s.update();
    assert_eq!(s.state.effects.particles.len(), 10);
    s.update();
    assert!(s.state.effects.particles.is_empty());
    s.update();
    assert_eq!(s.state.effects.notices.len(), 1);
    s.update();
    assert!(s.state.effects.notices.is_empty());
}

#[test]
fn test_same_seed_replays_identically() {
    let run = || {
        let mut s = playing(Maze::authored(), Rules::default(), Difficulty::Medium);
        let script = [Direction::Right, Direction::Right, Direction::Right, Direction::Down, Direction::Down];
        for d in script.iter().cycle().take(40) {
            s.frame([Input::Move(*d), Input::BuildStation]);
        }
        (s.state.maze.clone(), s.state.player.clone(), s.phase())
    };
    assert_eq!(run(), run());
}
