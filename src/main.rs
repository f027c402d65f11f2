//! Terminal frontend for the match-pairs engine.
//!
//! Menu flow (grid preset, difficulty, start/load/quit), text grid
//! rendering, and a fixed-step tick loop driving the coordinator. Audio
//! cues are reported through the log.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use match_pairs::{
    AudioCue, AudioSink, CellId, Difficulty, FileStore, GameBuilder, GameConfig, GameEvent,
    GridPreset, MatchCoordinator, Phase, SaveStore,
};

const SAVE_PATH: &str = "match_pairs_save.bin";
const TICK_DT: f32 = 1.0 / 30.0;

/// Sink that reports cues through the log.
struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue) {
        log::info!("audio: {}", cue.as_str());
    }

    fn set_pitch(&mut self, pitch: f32) {
        log::debug!("audio pitch: {pitch}");
    }
}

fn main() {
    env_logger::init();

    let mut grid = GridPreset::FourByFour;
    let mut difficulty = Difficulty::Easy;

    loop {
        let has_save = FileStore::new(SAVE_PATH).has_save();

        println!();
        println!("=== Match Pairs ===");
        println!("1) New game   (grid {}, {})", grid.as_str(), difficulty.as_str());
        println!("2) Grid size");
        println!("3) Difficulty");
        if has_save {
            println!("4) Load game");
        }
        println!("q) Quit");

        match prompt("> ").as_str() {
            "1" => {
                let mut game = build_game(grid, difficulty);
                let (rows, cols) = grid.dims();
                if let Err(e) = game.start_new_game(rows, cols) {
                    println!("Could not start game: {e}");
                    continue;
                }
                run_game(&mut game);
            }
            "2" => grid = pick_grid().unwrap_or(grid),
            "3" => difficulty = pick_difficulty().unwrap_or(difficulty),
            "4" if has_save => {
                let mut game = build_game(grid, difficulty);
                if let Err(e) = game.load_game() {
                    println!("Could not load game: {e}");
                    continue;
                }
                run_game(&mut game);
            }
            "q" => {
                log::info!("quit game");
                return;
            }
            other => println!("Unknown option: {other}"),
        }
    }
}

fn build_game(grid: GridPreset, difficulty: Difficulty) -> MatchCoordinator {
    let (rows, cols) = grid.dims();
    let config = GameConfig::new()
        .with_grid(rows, cols)
        .with_difficulty(difficulty);

    GameBuilder::new()
        .config(config)
        .store(Box::new(FileStore::new(SAVE_PATH)))
        .sink(Box::new(LogSink))
        .build()
}

fn run_game(game: &mut MatchCoordinator) {
    // Let the initial reveal (if any) play out before the first prompt
    if game.phase() == Phase::Revealing {
        render(game);
        println!("Memorize the cards!");
        while game.phase() == Phase::Revealing {
            tick_once(game);
        }
    }
    settle_animations(game);

    loop {
        if handle_events(game) {
            return;
        }
        render(game);

        let started = Instant::now();
        let input = prompt("Flip which cell? (q to menu) ");
        // Charge the time spent thinking to the in-game timer
        game.tick(started.elapsed().as_secs_f32());

        if input == "q" {
            return;
        }
        let Ok(index) = input.parse::<u16>() else {
            println!("Enter a cell number or q.");
            continue;
        };
        if !game.request_flip(CellId::new(index)) {
            println!("Can't flip that card right now.");
            continue;
        }

        settle_animations(game);
        if game.phase() == Phase::Resolving {
            // Show the mismatched pair before it flips back
            render(game);
            println!("No match!");
            while game.phase() == Phase::Resolving {
                tick_once(game);
            }
            settle_animations(game);
        }
    }
}

/// Drain pending events; returns `true` when the game completed.
fn handle_events(game: &mut MatchCoordinator) -> bool {
    let mut completed = false;
    for event in game.drain_events() {
        if let GameEvent::GameCompleted {
            turn_count,
            elapsed_secs,
        } = event
        {
            println!();
            println!("*** Game completed! ***");
            println!("Total turns attempted: {turn_count}");
            println!("Time: {elapsed_secs:.1}s");
            completed = true;
        }
    }
    completed
}

fn tick_once(game: &mut MatchCoordinator) {
    game.tick(TICK_DT);
    std::thread::sleep(Duration::from_secs_f32(TICK_DT));
}

fn settle_animations(game: &mut MatchCoordinator) {
    while game
        .grid()
        .is_some_and(|g| g.iter().any(|(_, c)| c.is_animating()))
    {
        tick_once(game);
    }
}

fn render(game: &MatchCoordinator) {
    let Some(grid) = game.grid() else {
        return;
    };

    println!();
    println!("Total of pairs: {}", game.total_pairs());
    println!("Total pairs found: {}", game.found_pairs());
    println!("Total turns attempted: {}", game.turn_count());
    println!("Time: {:.1}s", game.elapsed_secs());
    println!();

    for row in 0..grid.rows() {
        let mut line = String::new();
        for col in 0..grid.cols() {
            let cell = grid.cell_at(row, col);
            let card = grid.card(cell).expect("cell in range");
            let glyph = game.designs().glyph(card.face());
            let rendered = if card.is_matched() {
                format!("{:>2}*{} ", cell.raw(), glyph)
            } else if card.is_face_up() {
                format!("{:>2}:{} ", cell.raw(), glyph)
            } else {
                format!("{:>2}:? ", cell.raw())
            };
            line.push_str(&rendered);
        }
        println!("  {line}");
    }
}

fn pick_grid() -> Option<GridPreset> {
    println!("Grid size:");
    for (i, preset) in GridPreset::all().iter().enumerate() {
        println!("{}) {}", i + 1, preset.as_str());
    }
    let choice = prompt("> ");
    // Accept a menu number or the preset name itself
    if let Ok(n) = choice.parse::<usize>() {
        return GridPreset::all().get(n.checked_sub(1)?).copied();
    }
    GridPreset::from_str(&choice)
}

fn pick_difficulty() -> Option<Difficulty> {
    println!("Difficulty:");
    for (i, d) in Difficulty::all().iter().enumerate() {
        println!("{}) {}", i + 1, d.as_str());
    }
    let choice = prompt("> ");
    if let Ok(n) = choice.parse::<usize>() {
        return Difficulty::all().get(n.checked_sub(1)?).copied();
    }
    Difficulty::from_str(&choice)
}

fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_string()
}
