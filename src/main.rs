use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use skyward::config::GameConfig;
use skyward::constants::{
    DEFAULT_LEADERBOARD_URL, INPUT_POLL_MS, LEADERBOARD_SIZE, LEADERBOARD_URL_ENV,
    TICK_INTERVAL_MS,
};
use skyward::game::{self, ActionOutcome, GameInput, Session};
use skyward::input::{map_key, InputAction};
use skyward::scheduler::TickScheduler;
use skyward::scores::{HighScoreStore, HttpLeaderboard, Leaderboard, ScoreEntry};
use skyward::ui::game_scene::{render_game, LeaderboardView};
use skyward::ui::name_entry::NameEntryScreen;

enum Screen {
    NameEntry,
    Game,
}

type FetchHandle = thread::JoinHandle<Result<Vec<ScoreEntry>, String>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Arcade Game\n");
                println!("Usage: skyward\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nEnvironment:");
                println!("  {}  Leaderboard API base URL", LEADERBOARD_URL_ENV);
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = GameConfig::default();
    config.validate();

    let store = HighScoreStore::new();
    let base_url = std::env::var(LEADERBOARD_URL_ENV)
        .unwrap_or_else(|_| DEFAULT_LEADERBOARD_URL.to_string());
    let leaderboard: Arc<dyn Leaderboard> = Arc::new(HttpLeaderboard::new(base_url));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, &store, leaderboard);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: GameConfig,
    store: &HighScoreStore,
    leaderboard: Arc<dyn Leaderboard>,
) -> io::Result<()> {
    let mut session = Session::new(config, store.get());
    let mut rng = rand::thread_rng();
    let mut scheduler = TickScheduler::new(TICK_INTERVAL_MS);
    let mut current_screen = Screen::NameEntry;
    let mut name_screen = NameEntryScreen::new();

    // Kick off the initial leaderboard fetch in the background
    let mut leaderboard_view = LeaderboardView::Loading;
    let mut fetch_handle: Option<FetchHandle> = Some(spawn_fetch(Arc::clone(&leaderboard)));

    loop {
        // Collect a finished background fetch, if any
        if let Some(handle) = fetch_handle.take() {
            if handle.is_finished() {
                leaderboard_view = match handle.join() {
                    Ok(Ok(entries)) => LeaderboardView::Ready(entries),
                    _ => LeaderboardView::Unavailable,
                };
            } else {
                // Not finished yet, put it back
                fetch_handle = Some(handle);
            }
        }

        match current_screen {
            Screen::NameEntry => {
                terminal.draw(|frame| name_screen.draw(frame, frame.size()))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => name_screen.handle_char_input(c),
                            KeyCode::Backspace => name_screen.handle_backspace(),
                            KeyCode::Enter => {
                                if name_screen.is_valid() {
                                    session.set_player_name(&name_screen.get_name());
                                    current_screen = Screen::Game;
                                } else {
                                    name_screen.validate();
                                }
                            }
                            KeyCode::Esc => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                terminal.draw(|frame| {
                    render_game(frame, frame.size(), &session, &leaderboard_view)
                })?;

                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        if let Some(action) = map_key(key_event) {
                            let input = match action {
                                InputAction::Quit => return Ok(()),
                                InputAction::Primary => GameInput::Jump,
                                InputAction::Start => GameInput::Start,
                            };
                            if game::process_input(&mut session, input, &mut rng)
                                == ActionOutcome::Started
                            {
                                scheduler.start();
                            }
                        }
                    }
                }

                for _ in 0..scheduler.poll() {
                    let outcome = game::process_tick(&mut session, &mut rng);
                    if let Some(summary) = outcome.run_over {
                        scheduler.cancel();

                        if summary.new_high_score {
                            // A failed write only costs the record, not the game
                            let _ = store.set(summary.score);
                        }

                        // Submit the score (if any) and refresh the board,
                        // fire-and-forget relative to the game loop.
                        let remote = Arc::clone(&leaderboard);
                        let submission = (summary.score > 0)
                            .then(|| (summary.player_name.clone(), summary.score));
                        fetch_handle = Some(thread::spawn(move || {
                            if let Some((name, score)) = submission {
                                let _ = remote.submit(&name, score, Utc::now().timestamp_millis());
                            }
                            remote.fetch_top(LEADERBOARD_SIZE)
                        }));
                        break;
                    }
                }
            }
        }
    }
}

fn spawn_fetch(leaderboard: Arc<dyn Leaderboard>) -> FetchHandle {
    thread::spawn(move || leaderboard.fetch_top(LEADERBOARD_SIZE))
}
