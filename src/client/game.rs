//! Game state machine
//!
//! Frontends feed pointer events (or call the semantic actions directly),
//! run backend calls whenever `pending_load` returns a request, and hand the
//! outcome back through `finish_loading`. The machine never performs I/O.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::api_client::ClientError;
use super::blocks::{create_sentence_blocks, total_content_height, SentenceBlock};
use super::geometry::Point;
use super::layout::{CellMeasure, ScreenLayout, TextMeasure};
use super::scroll::ScrollView;
use crate::domain::entities::{KeywordList, Problem, ScoreRecord};
use crate::domain::services::quiz_service::{build_quiz, count_correct, Quiz, MAX_SELECTIONS};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Backend call the Loading screen is waiting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Keywords,
    Problem(String),
}

/// Successful result of a `LoadRequest`
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Keywords(KeywordList),
    Problem(Problem),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading(LoadRequest),
    MainMenu,
    Playing,
    Result,
}

/// Pointer input in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click(Point),
    /// Positive notches scroll toward the top
    Wheel { pointer: Point, notches: i32 },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// Already at `MAX_SELECTIONS`, the click was undone
    LimitReached,
    Ignored,
}

/// One quiz attempt from problem load to the player leaving the result screen
#[derive(Debug, Clone)]
pub struct Round {
    keyword: String,
    quiz: Quiz,
    blocks: Vec<SentenceBlock>,
    scroll: ScrollView,
    started_at: Instant,
    finished_at: Option<Instant>,
    correct_count: usize,
    score_recorded: bool,
}

impl Round {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn blocks(&self) -> &[SentenceBlock] {
        &self.blocks
    }

    pub fn scroll(&self) -> &ScrollView {
        &self.scroll
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.index)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.selected).count()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total_errors(&self) -> usize {
        self.quiz.total_errors()
    }

    /// True when at least one falsified sentence is still unfound
    pub fn can_retry(&self) -> bool {
        self.correct_count < self.total_errors()
    }

    pub fn is_error(&self, index: usize) -> bool {
        self.quiz.is_error(index)
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        self.finished_at
            .unwrap_or(now)
            .saturating_duration_since(self.started_at)
    }
}

pub struct Game<C: Clock = SystemClock> {
    screen: Screen,
    keywords: Vec<String>,
    round: Option<Round>,
    layout: ScreenLayout,
    measure: Box<dyn TextMeasure + Send + Sync>,
    clock: C,
    seed: Option<u64>,
    running: bool,
}

impl Game<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Game<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Game<C> {
    /// Starts on the Loading screen waiting for keywords
    pub fn with_clock(clock: C) -> Self {
        Self {
            screen: Screen::Loading(LoadRequest::Keywords),
            keywords: Vec::new(),
            round: None,
            layout: ScreenLayout::default(),
            measure: Box::new(CellMeasure::default()),
            clock,
            seed: None,
            running: true,
        }
    }

    pub fn with_layout(
        mut self,
        layout: ScreenLayout,
        measure: impl TextMeasure + Send + Sync + 'static,
    ) -> Self {
        self.layout = layout;
        self.measure = Box::new(measure);
        self
    }

    /// Fix the falsified-sentence sampling for reproducible rounds
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_load(&self) -> Option<&LoadRequest> {
        match &self.screen {
            Screen::Loading(request) => Some(request),
            _ => None,
        }
    }

    /// Timer of the current round, frozen once submitted
    pub fn elapsed(&self) -> Option<Duration> {
        self.round
            .as_ref()
            .map(|round| round.elapsed_at(self.clock.now()))
    }

    /// Apply the result of the backend call requested by `pending_load`
    pub fn finish_loading(&mut self, result: Result<LoadOutcome, ClientError>) {
        let Screen::Loading(request) = self.screen.clone() else {
            warn!("Load finished outside the Loading screen, ignoring");
            return;
        };

        match (request, result) {
            (_, Err(e)) => {
                error!("[loading] backend call failed: {}", e);
                self.screen = Screen::MainMenu;
            }
            (_, Ok(LoadOutcome::Keywords(list))) => {
                info!("Loaded {} keywords", list.keywords.len());
                self.keywords = list.keywords;
                self.screen = Screen::MainMenu;
            }
            (request, Ok(LoadOutcome::Problem(problem))) => {
                let keyword = match request {
                    LoadRequest::Problem(keyword) => keyword,
                    LoadRequest::Keywords => problem.subject.clone(),
                };
                self.start_round(keyword, &problem);
            }
        }
    }

    fn start_round(&mut self, keyword: String, problem: &Problem) {
        let quiz = match build_quiz(problem, self.seed) {
            Ok(quiz) => quiz,
            Err(e) => {
                warn!("[loading] unusable problem for '{}': {}", keyword, e);
                self.screen = Screen::MainMenu;
                return;
            }
        };

        let content = self.layout.content_rect();
        let blocks = create_sentence_blocks(&quiz.sentences, self.measure.as_ref(), content);
        let scroll = ScrollView::new(total_content_height(&blocks, content.top()), content.height);

        debug!(
            "Round started: '{}' ({} sentences, errors at {:?})",
            keyword,
            quiz.sentences.len(),
            quiz.error_indices
        );

        self.round = Some(Round {
            keyword,
            quiz,
            blocks,
            scroll,
            started_at: self.clock.now(),
            finished_at: None,
            correct_count: 0,
            score_recorded: false,
        });
        self.screen = Screen::Playing;
    }

    /// Route one pointer event. Returns a score when it ends a perfect round.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ScoreRecord> {
        let content = self.layout.content_rect();

        match (self.screen.clone(), event) {
            (_, InputEvent::Quit) => {
                self.running = false;
                None
            }

            (Screen::MainMenu, InputEvent::Click(point)) => {
                let hit = (0..self.keywords.len())
                    .find(|&i| self.layout.keyword_button(i).contains(point));
                if let Some(index) = hit {
                    self.select_keyword(index);
                }
                None
            }

            (Screen::Playing, InputEvent::Click(point)) => {
                if content.contains(point) {
                    if let Some(index) = self.block_at(point) {
                        self.toggle_sentence(index);
                    }
                    None
                } else if self.layout.home_button().contains(point) {
                    self.go_home();
                    None
                } else if self.layout.submit_button().contains(point) {
                    self.submit()
                } else {
                    None
                }
            }

            (Screen::Playing, InputEvent::Wheel { pointer, notches }) => {
                if content.contains(pointer) {
                    self.scroll_by(notches);
                }
                None
            }

            (Screen::Result, InputEvent::Click(point)) => {
                let can_retry = self.round.as_ref().is_some_and(Round::can_retry);
                if can_retry && self.layout.retry_button().contains(point) {
                    self.retry();
                } else if self.layout.result_home_button().contains(point) {
                    self.go_home();
                }
                None
            }

            // Loading ignores input, other combinations are no-ops
            (_, _) => None,
        }
    }

    fn block_at(&self, point: Point) -> Option<usize> {
        let round = self.round.as_ref()?;
        let offset = round.scroll.offset();
        round
            .blocks
            .iter()
            .find(|b| b.hit(point, offset))
            .map(|b| b.index)
    }

    /// Start loading a problem for the `index`-th keyword
    pub fn select_keyword(&mut self, index: usize) -> bool {
        if self.screen != Screen::MainMenu {
            return false;
        }
        let Some(keyword) = self.keywords.get(index).cloned() else {
            return false;
        };

        info!("Keyword selected: {}", keyword);
        self.screen = Screen::Loading(LoadRequest::Problem(keyword));
        true
    }

    /// Fetch a fresh keyword list from the main menu
    pub fn reload_keywords(&mut self) -> bool {
        if self.screen != Screen::MainMenu {
            return false;
        }
        self.screen = Screen::Loading(LoadRequest::Keywords);
        true
    }

    pub fn toggle_sentence(&mut self, index: usize) -> SelectionChange {
        if self.screen != Screen::Playing {
            return SelectionChange::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return SelectionChange::Ignored;
        };

        let selected_count = round.selected_count();
        let Some(block) = round.blocks.get_mut(index) else {
            return SelectionChange::Ignored;
        };

        if block.selected {
            block.selected = false;
            SelectionChange::Deselected
        } else if selected_count >= MAX_SELECTIONS {
            SelectionChange::LimitReached
        } else {
            block.selected = true;
            SelectionChange::Selected
        }
    }

    /// Wheel-style scroll, positive notches toward the top
    pub fn scroll_by(&mut self, notches: i32) {
        if self.screen != Screen::Playing {
            return;
        }
        if let Some(round) = self.round.as_mut() {
            round.scroll.wheel(notches);
        }
    }

    /// Grade the selection and stop the timer
    pub fn submit(&mut self) -> Option<ScoreRecord> {
        if self.screen != Screen::Playing {
            return None;
        }
        let now = self.clock.now();
        let round = self.round.as_mut()?;

        round.correct_count = count_correct(&round.selected_indices(), &round.quiz.error_indices);
        round.finished_at = Some(now);
        self.screen = Screen::Result;

        let time = round.elapsed_at(now).as_secs_f64();
        info!(
            "Submitted '{}': {}/{} in {:.2}s",
            round.keyword,
            round.correct_count,
            round.total_errors(),
            time
        );

        let score = ScoreRecord {
            keyword: round.keyword.clone(),
            time,
            correct_count: round.correct_count,
            total_errors: round.total_errors(),
        };
        if !score.is_perfect() || round.score_recorded {
            return None;
        }
        round.score_recorded = true;

        Some(score)
    }

    /// Back to play with the selection kept and the timer running again
    pub fn retry(&mut self) -> bool {
        if self.screen != Screen::Result {
            return false;
        }
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        if !round.can_retry() {
            return false;
        }

        round.finished_at = None;
        self.screen = Screen::Playing;
        true
    }

    /// Abandon the round and show the keyword menu
    pub fn go_home(&mut self) {
        if matches!(self.screen, Screen::Playing | Screen::Result) {
            self.round = None;
            self.screen = Screen::MainMenu;
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
