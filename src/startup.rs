use crate::app::Screen;
use crate::consts;
use crate::game::Game;
use crate::logo::Logo;
use crate::util::{EnumExt, Globals};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};
use std::io;
use unicode_width::UnicodeWidthStr;

/// The screen shown before a game begins: name entry, the leaderboard, and
/// the New Game/Quit menu
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StartScreen {
    globals: Globals,
    selection: Selection,

    /// Edit buffer for the name field, committed to the profile when a game
    /// is started
    username: String,
}

impl StartScreen {
    pub(crate) fn new(globals: Globals) -> StartScreen {
        // The default name is shown as a blank field so that a first-time
        // player is invited to type their own.
        let username = if globals.profile.username == consts::DEFAULT_USERNAME {
            String::new()
        } else {
            globals.profile.username.clone()
        };
        StartScreen {
            globals,
            selection: Selection::min(),
            username,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let KeyEvent {
            code, modifiers, ..
        } = event.as_key_press_event()?;
        if (modifiers, code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Screen::Quit);
        }
        if !normal_modifiers.contains(modifiers) {
            return None;
        }
        match (self.selection, code) {
            (_, KeyCode::Down | KeyCode::Tab) => {
                self.selection = self.selection.next().unwrap_or_else(Selection::min);
            }
            (_, KeyCode::Up | KeyCode::BackTab) => {
                self.selection = self.selection.prev().unwrap_or_else(Selection::max);
            }
            (Selection::Username, KeyCode::Char(c)) => self.push_char(c),
            (Selection::Username, KeyCode::Backspace) => {
                let _ = self.username.pop();
            }
            (Selection::Username | Selection::NewGame, KeyCode::Enter)
            | (Selection::NewGame, KeyCode::Char('n')) => return Some(self.start_game()),
            (Selection::Quit, KeyCode::Enter)
            | (Selection::NewGame | Selection::Quit, KeyCode::Char('q')) => {
                return Some(Screen::Quit)
            }
            _ => (),
        }
        None
    }

    fn push_char(&mut self, c: char) {
        if !c.is_control() && self.username.chars().count() < consts::MAX_USERNAME_LEN {
            self.username.push(c);
        }
    }

    /// Commit the name field to the profile and start a fresh game
    fn start_game(&mut self) -> Screen {
        if self.globals.profile.set_username(&self.username) {
            self.globals.persist();
        }
        Screen::Game(Game::new(self.globals.clone()))
    }
}

impl Widget for &StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = crate::util::get_display_area(area);
        let [column] = Layout::horizontal([Constraint::Length(ScoreTable::WIDTH)])
            .flex(Flex::Center)
            .areas(display);
        let [logo_area, warning_area, menu_area, best_area, board_area] = Layout::vertical([
            Constraint::Length(Logo::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(Selection::LENGTH as u16),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .spacing(1)
        .areas(column);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        if let Some(ref warning) = self.globals.save_warning {
            Line::styled(format!("Warning: {warning}"), consts::WARNING_STYLE)
                .centered()
                .render(warning_area, buf);
        }

        for (selection, row) in Selection::iter().zip(menu_area.rows()) {
            self.menu_line(selection).render(row, buf);
        }

        Line::from(format!(
            "Best score: {}",
            self.globals.profile.high_score
        ))
        .centered()
        .render(best_area, buf);

        ScoreTable(&self.globals).render(board_area, buf);
    }
}

impl StartScreen {
    fn menu_line(&self, selection: Selection) -> Line<'_> {
        let mut line = Line::default();
        if self.selection == selection {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        match selection {
            Selection::Username => {
                let pad = consts::MAX_USERNAME_LEN.saturating_sub(self.username.width());
                line.push_span("Name: [");
                line.push_span(self.username.as_str());
                line.push_span(" ".repeat(pad));
                line.push_span("]");
            }
            Selection::NewGame => {
                line.push_span("New Game (");
                line.push_span(Span::styled("n", consts::KEY_STYLE));
                line.push_span(")");
            }
            Selection::Quit => {
                line.push_span("Quit (");
                line.push_span(Span::styled("q", consts::KEY_STYLE));
                line.push_span(")");
            }
        }
        if self.selection == selection {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

/// The persisted top-ten scores, as a bordered table.  Shown on the start
/// screen and over the board after a game ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScoreTable<'a>(pub(crate) &'a Globals);

impl ScoreTable<'_> {
    pub(crate) const WIDTH: u16 = 32;

    /// Height of the rendered table, borders included
    pub(crate) fn height(&self) -> u16 {
        let rows = self.0.profile.leaderboard.entries().len().max(1);
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for ScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" HIGH SCORES ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let board = &self.0.profile.leaderboard;
        if board.is_empty() {
            Line::from("No scores yet!").render(inner, buf);
            return;
        }
        for ((rank, entry), row) in board.entries().iter().enumerate().zip(inner.rows()) {
            Line::from(format!(
                "{:>2}. {:<W$} {:>5}",
                rank + 1,
                entry.name,
                entry.score,
                W = consts::MAX_USERNAME_LEN,
            ))
            .render(row, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum Selection {
    Username,
    NewGame,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Profile;

    fn test_globals() -> Globals {
        let config: Config =
            toml::from_str("[files]\nsave-profile = false\n").expect("config should parse");
        Globals {
            config,
            profile: Profile::default(),
            save_warning: None,
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn default_name_shows_blank_field() {
        let screen = StartScreen::new(test_globals());
        assert_eq!(screen.username, "");
        assert_eq!(screen.selection, Selection::Username);
    }

    #[test]
    fn saved_name_prefills_field() {
        let mut globals = test_globals();
        globals.profile.set_username("Maja");
        let screen = StartScreen::new(globals);
        assert_eq!(screen.username, "Maja");
    }

    #[test]
    fn typing_edits_the_name_field() {
        let mut screen = StartScreen::new(test_globals());
        for c in "Zoq".chars() {
            assert!(screen.handle_event(key(KeyCode::Char(c))).is_none());
        }
        assert_eq!(screen.username, "Zoq");
        assert!(screen.handle_event(key(KeyCode::Backspace)).is_none());
        assert_eq!(screen.username, "Zo");
    }

    #[test]
    fn name_field_is_bounded() {
        let mut screen = StartScreen::new(test_globals());
        for _ in 0..40 {
            let _ = screen.handle_event(key(KeyCode::Char('x')));
        }
        assert_eq!(screen.username.chars().count(), consts::MAX_USERNAME_LEN);
    }

    #[test]
    fn selection_cycles() {
        let mut screen = StartScreen::new(test_globals());
        assert_eq!(screen.selection, Selection::Username);
        let _ = screen.handle_event(key(KeyCode::Tab));
        assert_eq!(screen.selection, Selection::NewGame);
        let _ = screen.handle_event(key(KeyCode::Down));
        assert_eq!(screen.selection, Selection::Quit);
        let _ = screen.handle_event(key(KeyCode::Down));
        assert_eq!(screen.selection, Selection::Username);
        let _ = screen.handle_event(key(KeyCode::Up));
        assert_eq!(screen.selection, Selection::Quit);
    }

    #[test]
    fn enter_commits_name_and_starts_game() {
        let mut screen = StartScreen::new(test_globals());
        for c in "Noor".chars() {
            let _ = screen.handle_event(key(KeyCode::Char(c)));
        }
        match screen.handle_event(key(KeyCode::Enter)) {
            Some(Screen::Game(_)) => (),
            other => panic!("expected a game to start, got {other:?}"),
        }
        assert_eq!(screen.globals.profile.username, "Noor");
    }

    #[test]
    fn blank_name_keeps_previous() {
        let mut globals = test_globals();
        globals.profile.set_username("Maja");
        let mut screen = StartScreen::new(globals);
        screen.username.clear();
        let _ = screen.handle_event(key(KeyCode::Enter));
        assert_eq!(screen.globals.profile.username, "Maja");
    }

    #[test]
    fn quit_selected() {
        let mut screen = StartScreen::new(test_globals());
        screen.selection = Selection::Quit;
        assert!(matches!(
            screen.handle_event(key(KeyCode::Enter)),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn score_table_height_tracks_entries() {
        let mut globals = test_globals();
        assert_eq!(ScoreTable(&globals).height(), 3);
        for score in [10, 20, 30] {
            globals.profile.leaderboard.record(String::from("Player"), score);
        }
        assert_eq!(ScoreTable(&globals).height(), 5);
    }

    #[test]
    fn typed_q_is_text_not_quit() {
        let mut screen = StartScreen::new(test_globals());
        assert!(screen.handle_event(key(KeyCode::Char('q'))).is_none());
        assert_eq!(screen.username, "q");
    }
}
