//! Application state and main UI controller

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use delve_core::{GameEvent, GameLoop, GameLoopResult, GameMode, GameState, Position};

use crate::config::TuiConfig;
use crate::input::key_to_input;
use crate::theme::Theme;
use crate::widgets::{
    HelpScreen, LevelUpBanner, MapWidget, MessagesWidget, StatusWidget, Tombstone, WinScreen,
};

/// A magic missile being replayed one tile per frame
#[derive(Debug, Clone)]
struct MissileAnimation {
    path: Vec<Position>,
    frame: usize,
    next_frame_at: Instant,
}

/// Front-end state wrapped around a [`GameLoop`]
pub struct App {
    game_loop: GameLoop,
    theme: Theme,
    missile_frame: Duration,
    levelup_banner: Duration,
    missile: Option<MissileAnimation>,
    levelup_until: Option<Instant>,
    bell: bool,
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState, theme: Theme, config: &TuiConfig) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            theme,
            missile_frame: config.missile_frame(),
            levelup_banner: config.levelup_banner(),
            missile: None,
            levelup_until: None,
            bell: false,
            should_quit: false,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether an animation or banner is on screen
    pub fn is_busy(&self) -> bool {
        self.missile.is_some() || self.levelup_until.is_some()
    }

    /// Take the pending terminal-bell request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// Tile the missile animation is currently showing
    pub fn missile_position(&self) -> Option<Position> {
        self.missile
            .as_ref()
            .and_then(|m| m.path.get(m.frame).copied())
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) -> GameLoopResult {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            _ => GameLoopResult::Continue,
        }
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> GameLoopResult {
        // Terminal screens wait for any key, then exit
        if self.state().mode.is_terminal() {
            if key.kind == KeyEventKind::Press {
                self.should_quit = true;
            }
            return GameLoopResult::Continue;
        }

        // Input is held while the missile flies or the banner shows
        if self.is_busy() {
            return GameLoopResult::Continue;
        }

        let Some(input) = key_to_input(key) else {
            return GameLoopResult::Continue;
        };

        let result = self.game_loop.tick(input);
        self.after_tick(now);

        if result == GameLoopResult::PlayerQuit {
            self.should_quit = true;
        }
        result
    }

    /// React to what the last tick produced
    fn after_tick(&mut self, now: Instant) {
        let state = self.game_loop.state();

        for event in state.events() {
            match event {
                GameEvent::Starving => self.bell = true,
                GameEvent::LevelUp { level } => {
                    debug!("showing level-up banner for level {}", level);
                    self.levelup_until = Some(now + self.levelup_banner);
                }
                _ => {}
            }
        }

        if let Some(trace) = state.last_missile()
            && !trace.path.is_empty()
        {
            self.missile = Some(MissileAnimation {
                path: trace.path.clone(),
                frame: 0,
                next_frame_at: now + self.missile_frame,
            });
        }
    }

    /// Advance timers; returns true when the screen needs redrawing
    pub fn update(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(anim) = &mut self.missile {
            while now >= anim.next_frame_at && anim.frame < anim.path.len() {
                anim.frame += 1;
                anim.next_frame_at += self.missile_frame;
                changed = true;
            }
            if anim.frame >= anim.path.len() {
                self.missile = None;
            }
        }

        // The banner waits for the missile to land
        if self.missile.is_none()
            && let Some(until) = self.levelup_until
            && now >= until
        {
            self.levelup_until = None;
            self.game_loop.settle();
            changed = true;
        }

        changed
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: map at top, status line, message line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Map + border
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Message
            ])
            .split(frame.area());

        let state = self.game_loop.state();
        let theme = &self.theme;

        match state.mode {
            GameMode::GameOver => {
                let cause = state.player.cause_of_death.as_deref().unwrap_or("unknown");
                frame.render_widget(Tombstone::new(cause, state.player.score, theme), frame.area());
                return;
            }
            GameMode::Win => {
                frame.render_widget(WinScreen::new(state.player.score, theme), frame.area());
                return;
            }
            _ => {}
        }

        let map_widget = MapWidget::new(state, theme).missile(self.missile_position());
        frame.render_widget(map_widget, chunks[0]);
        frame.render_widget(
            StatusWidget::new(&state.player, state.dungeon_level, theme),
            chunks[1],
        );
        frame.render_widget(MessagesWidget::new(state.current_message(), theme), chunks[2]);

        // Modal overlays
        match state.mode {
            GameMode::Help => frame.render_widget(HelpScreen::new(theme), chunks[0]),
            GameMode::LevelUp if self.missile.is_none() => {
                frame.render_widget(LevelUpBanner::new(state.player.level, theme), chunks[0]);
            }
            _ => {}
        }
    }
}
