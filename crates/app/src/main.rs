//! Desktop entry point: page routing, session driving, score submission.

mod frame_input;
mod game_view;
mod page_view;
mod window_config;

use std::time::Duration;

use app::record_file::RecordFile;
use app::router::{self, Cursor, NavIntent, NavOutcome, Page};
use app::seed::{self, SeedChoice};
use app::settings_file::SettingsFile;
use app::theme::theme_by_index;
use game_core::{GameSession, MapSource, SessionConfig, SessionEvent};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

struct ActiveGame {
    session: GameSession,
    seed: u64,
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match seed::resolve_seed_from_args(&args, seed::generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };
    let debug_hud = args.iter().any(|argument| argument == "--debug-hud");

    let settings_path = SettingsFile::get_default_path();
    let mut settings = SettingsFile::load_or_default(settings_path.as_deref());
    let records_path = RecordFile::get_default_path();
    let mut records = RecordFile::load_or_default(records_path.as_deref());

    let mut page = Page::Menu;
    let mut menu_cursor = Cursor::default();
    let mut map_cursor = Cursor::default();
    let mut settings_cursor = Cursor::default();
    let mut game: Option<ActiveGame> = None;

    'frames: loop {
        let theme = theme_by_index(settings.theme_index);
        clear_background(theme.background);

        match page {
            Page::Menu => {
                if let Some(intent) = frame_input::capture_nav_intent() {
                    match router::navigate_menu(&mut menu_cursor, intent) {
                        NavOutcome::Go(next) => page = next,
                        NavOutcome::Quit => break 'frames,
                        _ => {}
                    }
                }
                page_view::draw_menu(&menu_cursor, theme);
            }
            Page::MapChoice => {
                if let Some(intent) = frame_input::capture_nav_intent() {
                    match router::navigate_map_choice(&mut map_cursor, intent) {
                        NavOutcome::Go(next) => page = next,
                        NavOutcome::StartGame { default_map } => {
                            let source =
                                if default_map { MapSource::Default } else { MapSource::Generated };
                            let run_seed = match seed_choice {
                                SeedChoice::Cli(seed) => seed,
                                SeedChoice::Generated(_) => seed::generate_runtime_seed(),
                            };
                            match GameSession::new(SessionConfig::new(run_seed, source)) {
                                Ok(session) => {
                                    game = Some(ActiveGame { session, seed: run_seed });
                                    page = Page::Game;
                                }
                                Err(error) => eprintln!("could not start a game: {error}"),
                            }
                        }
                        _ => {}
                    }
                }
                page_view::draw_map_choice(&map_cursor, theme);
            }
            Page::Settings => {
                if page_view::update_settings(&mut settings, &mut settings_cursor) {
                    if let Some(path) = settings_path.as_deref()
                        && let Err(error) = settings.write_atomic(path)
                    {
                        eprintln!("settings write failed ({error}); changes kept for this run");
                    }
                    page = Page::Menu;
                }
                page_view::draw_settings(&settings, &settings_cursor, theme);
            }
            Page::Leaderboard => {
                if let Some(NavIntent::Back) = frame_input::capture_nav_intent() {
                    page = Page::Menu;
                }
                page_view::draw_leaderboard(&records.board, &settings.player_name, theme);
            }
            Page::Game => {
                let Some(active) = game.as_mut() else {
                    page = Page::Menu;
                    next_frame().await;
                    continue;
                };

                let keys = frame_input::capture_game_page_keys();
                let now = Duration::from_secs_f64(get_time());
                if keys.to_menu {
                    page = Page::Menu;
                } else if keys.to_leaderboard {
                    page = Page::Leaderboard;
                } else {
                    active.session.update(frame_input::capture_game_input(), now);
                    for event in active.session.drain_events() {
                        match event {
                            // Fire-and-forget score submissions; sound cues
                            // would hook here once an audio backend exists.
                            SessionEvent::GameOver { score }
                            | SessionEvent::LevelCleared { score, .. } => {
                                records.submit_and_save(
                                    records_path.as_deref(),
                                    &settings.player_name,
                                    score,
                                );
                            }
                            _ => {}
                        }
                    }
                }

                let layout = game_view::playfield_layout(&active.session);
                game_view::draw_playfield(&active.session, theme, &layout, get_time());
                game_view::draw_hud(
                    &active.session,
                    theme,
                    &game_view::HudContext {
                        player_name: &settings.player_name,
                        player_high: records.board.player_high(&settings.player_name),
                        run_seed: active.seed,
                        now,
                        debug: debug_hud,
                    },
                );
            }
        }

        next_frame().await;
    }

    if let Some(path) = settings_path.as_deref()
        && let Err(error) = settings.write_atomic(path)
    {
        eprintln!("settings write failed on exit: {error}");
    }
}
