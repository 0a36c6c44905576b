//! Drives a `Game` against a backend and the local score file

use tracing::{info, warn};

use super::api_client::QuizBackend;
use super::command::{Command, HELP};
use super::game::{Clock, Game, LoadOutcome, LoadRequest, Screen, SelectionChange, SystemClock};
use super::render::render_rankings;
use super::scores::ScoreStore;
use crate::domain::entities::{NewRanking, ScoreRecord};
use crate::domain::services::quiz_service::MAX_SELECTIONS;

/// Wheel notches per `up`/`down` command
const SCROLL_NOTCHES: i32 = 5;

pub struct Session<B, C: Clock = SystemClock> {
    game: Game<C>,
    backend: B,
    scores: ScoreStore,
    nickname: Option<String>,
}

impl<B: QuizBackend, C: Clock> Session<B, C> {
    pub fn new(game: Game<C>, backend: B, scores: ScoreStore, nickname: Option<String>) -> Self {
        Self {
            game,
            backend,
            scores,
            nickname,
        }
    }

    pub fn game(&self) -> &Game<C> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<C> {
        &mut self.game
    }

    /// Run the backend call the Loading screen waits on, if any
    pub async fn load_pending(&mut self) -> bool {
        let Some(request) = self.game.pending_load().cloned() else {
            return false;
        };

        let result = match &request {
            LoadRequest::Keywords => self.backend.keywords().await.map(LoadOutcome::Keywords),
            LoadRequest::Problem(keyword) => {
                self.backend.problem(keyword).await.map(LoadOutcome::Problem)
            }
        };
        self.game.finish_loading(result);
        true
    }

    /// Apply one command, returning a message for the player
    pub async fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Pick(n) => {
                if self.game.screen() != &Screen::MainMenu {
                    return Some("Pick a keyword from the main menu".to_string());
                }
                (!self.game.select_keyword(n.wrapping_sub(1))).then(|| format!("No keyword {}", n))
            }
            Command::Toggle(n) => match self.game.toggle_sentence(n.wrapping_sub(1)) {
                SelectionChange::LimitReached => {
                    Some(format!("At most {} sentences can be selected", MAX_SELECTIONS))
                }
                SelectionChange::Ignored => Some(format!("No sentence {}", n)),
                SelectionChange::Selected | SelectionChange::Deselected => None,
            },
            Command::ScrollUp => {
                self.game.scroll_by(SCROLL_NOTCHES);
                None
            }
            Command::ScrollDown => {
                self.game.scroll_by(-SCROLL_NOTCHES);
                None
            }
            Command::Submit => {
                if self.game.screen() != &Screen::Playing {
                    return Some("Nothing to submit".to_string());
                }
                match self.game.submit() {
                    Some(score) => Some(self.record_score(score).await),
                    None => None,
                }
            }
            Command::Retry => (!self.game.retry()).then(|| "Nothing to retry".to_string()),
            Command::Home => {
                self.game.go_home();
                None
            }
            Command::Reload => (!self.game.reload_keywords())
                .then(|| "Keywords can be reloaded from the main menu".to_string()),
            Command::Rank => match self.backend.rankings().await {
                Ok(rankings) => Some(render_rankings(&rankings)),
                Err(e) => {
                    warn!("Failed to load rankings: {}", e);
                    Some(format!("Failed to load rankings: {}", e))
                }
            },
            Command::Help => Some(HELP.to_string()),
            Command::Quit => {
                self.game.quit();
                None
            }
        }
    }

    async fn record_score(&mut self, score: ScoreRecord) -> String {
        let mut messages = Vec::new();

        match self.scores.append(score.clone()).await {
            Ok(total) => {
                info!("Score saved to {} ({} total)", self.scores.path().display(), total);
                messages.push(format!("Score saved ({:.1}s)", score.time));
            }
            Err(e) => {
                warn!("Failed to save score: {}", e);
                messages.push(format!("Failed to save score: {}", e));
            }
        }

        if let Some(nickname) = &self.nickname {
            let ranking = NewRanking::new(nickname.clone(), score.keyword.clone(), score.time);
            match self.backend.submit_ranking(&ranking).await {
                Ok(()) => messages.push(format!("Ranking submitted as {}", nickname)),
                Err(e) => {
                    warn!("Failed to submit ranking: {}", e);
                    messages.push(format!("Failed to submit ranking: {}", e));
                }
            }
        }

        messages.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::client::api_client::ClientError;
    use crate::domain::entities::{KeywordList, Problem, Ranking};

    #[derive(Default)]
    struct FakeBackend {
        submitted: Mutex<Vec<NewRanking>>,
    }

    #[async_trait]
    impl QuizBackend for FakeBackend {
        async fn keywords(&self) -> Result<KeywordList, ClientError> {
            Ok(KeywordList::new(["과학적 원리", "고장난 키워드"]))
        }

        async fn problem(&self, keyword: &str) -> Result<Problem, ClientError> {
            if keyword == "고장난 키워드" {
                return Err(ClientError::Status {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "llm down".to_string(),
                });
            }
            Ok(Problem {
                subject: keyword.to_string(),
                right_text: (0..8).map(|i| format!("fact {}", i)).collect(),
                wrong_text: (0..8).map(|i| format!("fiction {}", i)).collect(),
                ..Problem::default()
            })
        }

        async fn submit_ranking(&self, ranking: &NewRanking) -> Result<(), ClientError> {
            self.submitted.lock().unwrap().push(ranking.clone());
            Ok(())
        }

        async fn rankings(&self) -> Result<Vec<Ranking>, ClientError> {
            let submitted = self.submitted.lock().unwrap();
            Ok(submitted
                .iter()
                .enumerate()
                .map(|(i, r)| Ranking {
                    id: i as i64 + 1,
                    nickname: r.nickname.clone(),
                    keyword: r.keyword.clone(),
                    elapsed_time: r.elapsed_time,
                    created_at: String::new(),
                })
                .collect())
        }
    }

    fn session(nickname: Option<&str>) -> (Session<FakeBackend>, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("fh-session-{}", uuid::Uuid::new_v4()));
        let session = Session::new(
            Game::new().with_seed(11),
            FakeBackend::default(),
            ScoreStore::new(dir.join("scores.json")),
            nickname.map(str::to_string),
        );
        (session, dir)
    }

    async fn start_round(session: &mut Session<FakeBackend>) {
        assert!(session.load_pending().await);
        assert_eq!(session.execute(Command::Pick(1)).await, None);
        assert!(session.load_pending().await);
        assert_eq!(session.game().screen(), &Screen::Playing);
    }

    async fn select_all_errors(session: &mut Session<FakeBackend>) {
        let errors: Vec<usize> = {
            let round = session.game().round().unwrap();
            (0..round.blocks().len()).filter(|&i| round.is_error(i)).collect()
        };
        for i in errors {
            assert_eq!(session.execute(Command::Toggle(i + 1)).await, None);
        }
    }

    #[tokio::test]
    async fn test_perfect_round_saves_and_submits() {
        let (mut session, dir) = session(Some("neo"));
        start_round(&mut session).await;
        select_all_errors(&mut session).await;

        let message = session.execute(Command::Submit).await.unwrap();
        assert!(message.contains("Score saved"));
        assert!(message.contains("Ranking submitted as neo"));
        assert_eq!(session.game().screen(), &Screen::Result);

        let scores = session.scores.load().await;
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].keyword, "과학적 원리");
        assert!(scores[0].is_perfect());

        let board = session.execute(Command::Rank).await.unwrap();
        assert!(board.contains("neo"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_no_nickname_skips_ranking() {
        let (mut session, dir) = session(None);
        start_round(&mut session).await;
        select_all_errors(&mut session).await;

        let message = session.execute(Command::Submit).await.unwrap();
        assert!(!message.contains("Ranking"));
        assert!(session.backend.submitted.lock().unwrap().is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_partial_round_records_nothing() {
        let (mut session, dir) = session(Some("neo"));
        start_round(&mut session).await;

        assert_eq!(session.execute(Command::Submit).await, None);
        assert!(session.scores.load().await.is_empty());
        assert_eq!(session.execute(Command::Retry).await, None);
        assert_eq!(session.game().screen(), &Screen::Playing);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_problem_failure_returns_to_menu() {
        let (mut session, _dir) = session(None);
        session.load_pending().await;
        session.execute(Command::Pick(2)).await;
        session.load_pending().await;

        assert_eq!(session.game().screen(), &Screen::MainMenu);
        assert!(!session.load_pending().await);
    }

    #[tokio::test]
    async fn test_commands_out_of_context() {
        let (mut session, _dir) = session(None);
        session.load_pending().await;

        assert_eq!(session.execute(Command::Pick(9)).await, Some("No keyword 9".to_string()));
        assert_eq!(
            session.execute(Command::Submit).await,
            Some("Nothing to submit".to_string())
        );
        assert_eq!(
            session.execute(Command::Toggle(1)).await,
            Some("No sentence 1".to_string())
        );
        assert!(session.execute(Command::Help).await.is_some());

        session.execute(Command::Quit).await;
        assert!(!session.game().is_running());
    }
}
