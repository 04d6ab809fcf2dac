//! Menu, settings, map-choice and leaderboard pages.

use app::router::{Cursor, MAP_CHOICES, MENU_ITEMS};
use app::settings_file::SettingsFile;
use app::theme::{THEMES, ThemeContext};
use game_core::ScoreBoard;
use macroquad::prelude::*;

const TITLE_SIZE: f32 = 72.0;
const ITEM_SIZE: f32 = 34.0;
const ITEM_STEP: f32 = 52.0;

fn draw_title(theme: &ThemeContext) -> f32 {
    let title = "PAC-MAN REMASTERED";
    let dims = measure_text(title, None, TITLE_SIZE as u16, 1.0);
    draw_text(title, (screen_width() - dims.width) / 2.0, 120.0, TITLE_SIZE, theme.player);
    220.0
}

fn draw_entries(entries: &[&str], selected: usize, top: f32, theme: &ThemeContext) {
    for (index, entry) in entries.iter().enumerate() {
        let selected_here = index == selected;
        let label = if selected_here { format!("> {entry}") } else { format!("  {entry}") };
        let color = if selected_here { theme.text } else { theme.text_dim };
        let dims = measure_text(&label, None, ITEM_SIZE as u16, 1.0);
        draw_text(
            &label,
            (screen_width() - dims.width) / 2.0,
            top + index as f32 * ITEM_STEP,
            ITEM_SIZE,
            color,
        );
    }
}

pub fn draw_menu(cursor: &Cursor, theme: &ThemeContext) {
    let top = draw_title(theme);
    let labels: Vec<&str> = MENU_ITEMS.iter().map(|item| item.label()).collect();
    draw_entries(&labels, cursor.index, top, theme);
    draw_footer("Arrows move, Enter selects", theme);
}

pub fn draw_map_choice(cursor: &Cursor, theme: &ThemeContext) {
    let top = draw_title(theme);
    draw_entries(&MAP_CHOICES, cursor.index, top, theme);
    draw_footer("Enter starts, Esc goes back", theme);
}

const SETTINGS_ROWS: usize = 4;

/// Process one frame of settings input. Returns true when the player backs
/// out and the caller should persist.
pub fn update_settings(settings: &mut SettingsFile, cursor: &mut Cursor) -> bool {
    if is_key_pressed(KeyCode::Escape) {
        return true;
    }
    if is_key_pressed(KeyCode::Up) {
        cursor.index = (cursor.index + SETTINGS_ROWS - 1) % SETTINGS_ROWS;
    }
    if is_key_pressed(KeyCode::Down) {
        cursor.index = (cursor.index + 1) % SETTINGS_ROWS;
    }

    let left = is_key_pressed(KeyCode::Left);
    let right = is_key_pressed(KeyCode::Right);
    match cursor.index {
        0 => {
            while let Some(typed) = get_char_pressed() {
                if typed.is_alphanumeric() && settings.player_name.chars().count() < 16 {
                    settings.player_name.push(typed);
                }
            }
            if is_key_pressed(KeyCode::Backspace) {
                settings.player_name.pop();
            }
        }
        1 => {
            if right {
                settings.theme_index = (settings.theme_index + 1) % THEMES.len();
            }
            if left {
                settings.theme_index = (settings.theme_index + THEMES.len() - 1) % THEMES.len();
            }
        }
        2 => settings.music_volume = nudge(settings.music_volume, left, right),
        _ => settings.sounds_volume = nudge(settings.sounds_volume, left, right),
    }
    false
}

fn nudge(volume: f32, left: bool, right: bool) -> f32 {
    let mut volume = volume;
    if right {
        volume += 0.1;
    }
    if left {
        volume -= 0.1;
    }
    volume.clamp(0.0, 1.0)
}

pub fn draw_settings(settings: &SettingsFile, cursor: &Cursor, theme: &ThemeContext) {
    let top = draw_title(theme);
    let rows = [
        format!("Name: {}_", settings.player_name),
        format!("Theme: {}", THEMES[settings.theme_index % THEMES.len()].name),
        format!("Music volume: {:.0}%", settings.music_volume * 100.0),
        format!("Sound volume: {:.0}%", settings.sounds_volume * 100.0),
    ];
    let labels: Vec<&str> = rows.iter().map(String::as_str).collect();
    draw_entries(&labels, cursor.index, top, theme);
    draw_footer("Type a name, arrows adjust, Esc saves", theme);
}

pub fn draw_leaderboard(board: &ScoreBoard, player_name: &str, theme: &ThemeContext) {
    let top = draw_title(theme);

    if board.records().is_empty() {
        draw_entries(&["No records yet - go play!"], usize::MAX, top, theme);
    } else {
        let rows: Vec<String> = board
            .top_n(10)
            .iter()
            .enumerate()
            .map(|(index, record)| format!("{:>2}. {:<16} {:>7}", index + 1, record.player, record.score))
            .collect();
        let labels: Vec<&str> = rows.iter().map(String::as_str).collect();
        let own_rank = board.player_rank(player_name);
        draw_entries(&labels, own_rank.map_or(usize::MAX, |rank| rank - 1), top, theme);

        if let Some(rank) = own_rank {
            let line = format!("Your rank: {rank}");
            draw_text(&line, 80.0, screen_height() - 90.0, 26.0, theme.text);
        }
    }
    draw_footer("Esc goes back", theme);
}

fn draw_footer(hint: &str, theme: &ThemeContext) {
    draw_text(hint, 80.0, screen_height() - 50.0, 22.0, theme.text_dim);
}
