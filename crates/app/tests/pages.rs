use app::router::{self, Cursor, NavIntent, NavOutcome, Page};

#[test]
fn menu_walk_reaches_every_page_and_quit() {
    let mut cursor = Cursor::default();

    assert_eq!(
        router::navigate_menu(&mut cursor, NavIntent::Select),
        NavOutcome::Go(Page::MapChoice)
    );

    cursor = Cursor::default();
    router::navigate_menu(&mut cursor, NavIntent::Down);
    assert_eq!(
        router::navigate_menu(&mut cursor, NavIntent::Select),
        NavOutcome::Go(Page::Settings)
    );

    router::navigate_menu(&mut cursor, NavIntent::Down);
    assert_eq!(
        router::navigate_menu(&mut cursor, NavIntent::Select),
        NavOutcome::Go(Page::Leaderboard)
    );

    router::navigate_menu(&mut cursor, NavIntent::Down);
    assert_eq!(router::navigate_menu(&mut cursor, NavIntent::Select), NavOutcome::Quit);
}

#[test]
fn map_choice_round_trip_back_to_menu() {
    let mut cursor = Cursor::default();
    assert_eq!(
        router::navigate_map_choice(&mut cursor, NavIntent::Back),
        NavOutcome::Go(Page::Menu)
    );
    assert_eq!(
        router::navigate_map_choice(&mut cursor, NavIntent::Select),
        NavOutcome::StartGame { default_map: true }
    );
}

#[test]
fn both_map_sources_are_offered() {
    let mut cursor = Cursor::default();
    let mut seen = Vec::new();
    for _ in 0..router::MAP_CHOICES.len() {
        if let NavOutcome::StartGame { default_map } =
            router::navigate_map_choice(&mut cursor, NavIntent::Select)
        {
            seen.push(default_map);
        }
        router::navigate_map_choice(&mut cursor, NavIntent::Down);
    }
    assert_eq!(seen, vec![true, false]);
}
