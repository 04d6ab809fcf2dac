//! Window configuration for the desktop app.

use app::APP_NAME;
use macroquad::window::Conf;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers
        // automatically; ask for a high-DPI one so text tracks display scale.
        high_dpi: true,
        ..Default::default()
    }
}
