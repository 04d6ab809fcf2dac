//! Playfield and HUD rendering for the game page. Read-only over the
//! session; all colors come from the active theme.

use std::time::Duration;

use app::theme::ThemeContext;
use app::{format_seed, format_snapshot_hash};
use game_core::{GameSession, GhostMode, PelletKind, SessionPhase, TileKind};
use macroquad::prelude::*;

const HUD_WIDTH: f32 = 340.0;
const HUD_PAD: f32 = 20.0;
const HUD_LINE: f32 = 26.0;

pub struct Layout {
    pub tile: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

pub fn playfield_layout(session: &GameSession) -> Layout {
    let grid = &session.state().grid;
    let tile = ((screen_width() - HUD_WIDTH) / grid.width() as f32)
        .min(screen_height() / grid.height() as f32);
    Layout {
        tile,
        origin_x: 0.0,
        origin_y: (screen_height() - tile * grid.height() as f32) / 2.0,
    }
}

pub fn draw_playfield(session: &GameSession, theme: &ThemeContext, layout: &Layout, time: f64) {
    let grid = &session.state().grid;
    let tile = layout.tile;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = game_core::Pos { y: y as i32, x: x as i32 };
            let px = layout.origin_x + x as f32 * tile;
            let py = layout.origin_y + y as f32 * tile;
            match grid.tile_at(pos) {
                TileKind::Wall => {
                    draw_rectangle(px + 1.0, py + 1.0, tile - 2.0, tile - 2.0, theme.wall);
                }
                TileKind::GhostGate => {
                    let mut color = theme.gate;
                    if grid.gates_open() {
                        color.a = 0.35;
                    }
                    draw_rectangle(px, py + tile * 0.4, tile, tile * 0.2, color);
                }
                _ => {}
            }
        }
    }

    let energizer_visible = (time * 3.0) as i64 % 2 == 0;
    for (pos, kind) in &session.state().pellets {
        let cx = layout.origin_x + (pos.x as f32 + 0.5) * tile;
        let cy = layout.origin_y + (pos.y as f32 + 0.5) * tile;
        match kind {
            PelletKind::Normal => draw_circle(cx, cy, tile * 0.12, theme.pellet),
            PelletKind::Energizer if energizer_visible => {
                draw_circle(cx, cy, tile * 0.32, theme.energizer);
            }
            PelletKind::Energizer => {}
        }
    }

    for ghost in session.state().ghosts.values() {
        let (cx, cy) = entity_center(layout, &ghost.mover);
        let color = match ghost.mode {
            GhostMode::Normal => theme.ghost_normal,
            GhostMode::Scared => theme.ghost_scared,
            GhostMode::Imprisoned => theme.ghost_imprisoned,
        };
        draw_circle(cx, cy, tile * 0.42, color);
        draw_rectangle(cx - tile * 0.42, cy, tile * 0.84, tile * 0.42, color);
        draw_circle(cx - tile * 0.16, cy - tile * 0.08, tile * 0.09, WHITE);
        draw_circle(cx + tile * 0.16, cy - tile * 0.08, tile * 0.09, WHITE);
    }

    let player = &session.state().player;
    let (cx, cy) = entity_center(layout, player);
    draw_circle(cx, cy, tile * 0.45, theme.player);
}

fn entity_center(layout: &Layout, mover: &game_core::Mover) -> (f32, f32) {
    let mut cx = layout.origin_x + (mover.pos.x as f32 + 0.5) * layout.tile;
    let mut cy = layout.origin_y + (mover.pos.y as f32 + 0.5) * layout.tile;
    if let Some(direction) = mover.facing {
        let (dy, dx) = direction.delta();
        cx += dx as f32 * mover.offset_fraction() * layout.tile;
        cy += dy as f32 * mover.offset_fraction() * layout.tile;
    }
    (cx, cy)
}

pub struct HudContext<'a> {
    pub player_name: &'a str,
    pub player_high: Option<u32>,
    pub run_seed: u64,
    pub now: Duration,
    pub debug: bool,
}

pub fn draw_hud(session: &GameSession, theme: &ThemeContext, hud: &HudContext<'_>) {
    let x = screen_width() - HUD_WIDTH + HUD_PAD;
    let mut y = HUD_PAD + 20.0;

    draw_text("PAC-MAN", x, y, 42.0, theme.text);
    y += HUD_LINE * 2.0;

    let high = hud.player_high.unwrap_or(0).max(session.score());
    let lines = [
        format!("Score: {}", session.score()),
        format!("High: {high}"),
        format!("Lives: {}", session.lives()),
        format!("Level: {}", session.difficulty()),
        format!("Player: {}", hud.player_name),
        format!("Seed: {}", format_seed(hud.run_seed)),
    ];
    for line in lines {
        draw_text(&line, x, y, 26.0, theme.text);
        y += HUD_LINE;
    }

    y += HUD_LINE;
    let help = [
        "P       pause",
        "R + C   replay this map",
        "R + G   new random map",
        "R + D   classic map",
        "V       records",
        "Esc     menu",
    ];
    for line in help {
        draw_text(line, x, y, 20.0, theme.text_dim);
        y += HUD_LINE * 0.8;
    }

    if hud.debug {
        y += HUD_LINE;
        draw_text(
            &format!("state {}", format_snapshot_hash(session.snapshot_hash())),
            x,
            y,
            16.0,
            theme.text_dim,
        );
    }

    if session.is_paused() {
        draw_banner("PAUSED", theme);
    } else if session.phase() == SessionPhase::GameOver {
        draw_banner("GAME OVER", theme);
    } else if session.start_delay_remaining(hud.now).is_some() {
        draw_banner("READY!", theme);
    }
}

fn draw_banner(text: &str, theme: &ThemeContext) {
    let size = 64.0;
    let dims = measure_text(text, None, size as u16, 1.0);
    let x = (screen_width() - HUD_WIDTH - dims.width) / 2.0;
    let y = screen_height() / 2.0;
    draw_text(text, x, y, size, theme.energizer);
}
