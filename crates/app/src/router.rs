//! Keyboard-driven page navigation, kept free of rendering so the
//! transitions can be tested headlessly.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Menu,
    MapChoice,
    Settings,
    Leaderboard,
    Game,
}

/// Edge-triggered navigation input produced by the key capture layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Up,
    Down,
    Select,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Settings,
    Leaderboard,
    Quit,
}

pub const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Play, MenuItem::Settings, MenuItem::Leaderboard, MenuItem::Quit];

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Single player",
            Self::Settings => "Settings",
            Self::Leaderboard => "Leaderboard",
            Self::Quit => "Quit",
        }
    }
}

/// Cursor over a fixed list of entries, shared by the menu and the map
/// choice page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn step(&mut self, intent: NavIntent, entries: usize) {
        debug_assert!(entries > 0);
        match intent {
            NavIntent::Up => self.index = (self.index + entries - 1) % entries,
            NavIntent::Down => self.index = (self.index + 1) % entries,
            NavIntent::Select | NavIntent::Back => {}
        }
    }
}

/// Outcome of feeding one navigation intent into the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Stay,
    Go(Page),
    StartGame { default_map: bool },
    Quit,
}

pub fn navigate_menu(cursor: &mut Cursor, intent: NavIntent) -> NavOutcome {
    cursor.step(intent, MENU_ITEMS.len());
    match intent {
        NavIntent::Select => match MENU_ITEMS[cursor.index] {
            MenuItem::Play => NavOutcome::Go(Page::MapChoice),
            MenuItem::Settings => NavOutcome::Go(Page::Settings),
            MenuItem::Leaderboard => NavOutcome::Go(Page::Leaderboard),
            MenuItem::Quit => NavOutcome::Quit,
        },
        NavIntent::Back => NavOutcome::Stay,
        _ => NavOutcome::Stay,
    }
}

pub const MAP_CHOICES: [&str; 2] = ["Classic map", "Generated map"];

pub fn navigate_map_choice(cursor: &mut Cursor, intent: NavIntent) -> NavOutcome {
    cursor.step(intent, MAP_CHOICES.len());
    match intent {
        NavIntent::Select => NavOutcome::StartGame { default_map: cursor.index == 0 },
        NavIntent::Back => NavOutcome::Go(Page::Menu),
        _ => NavOutcome::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut cursor = Cursor::default();
        cursor.step(NavIntent::Up, 4);
        assert_eq!(cursor.index, 3);
        cursor.step(NavIntent::Down, 4);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn menu_select_routes_to_each_page() {
        let mut cursor = Cursor::default();
        assert_eq!(navigate_menu(&mut cursor, NavIntent::Select), NavOutcome::Go(Page::MapChoice));

        cursor.index = 1;
        assert_eq!(navigate_menu(&mut cursor, NavIntent::Select), NavOutcome::Go(Page::Settings));

        cursor.index = 3;
        assert_eq!(navigate_menu(&mut cursor, NavIntent::Select), NavOutcome::Quit);
    }

    #[test]
    fn map_choice_picks_the_highlighted_source() {
        let mut cursor = Cursor::default();
        assert_eq!(
            navigate_map_choice(&mut cursor, NavIntent::Select),
            NavOutcome::StartGame { default_map: true }
        );
        cursor.step(NavIntent::Down, MAP_CHOICES.len());
        assert_eq!(
            navigate_map_choice(&mut cursor, NavIntent::Select),
            NavOutcome::StartGame { default_map: false }
        );
        assert_eq!(navigate_map_choice(&mut cursor, NavIntent::Back), NavOutcome::Go(Page::Menu));
    }
}
