//! Plain-text rendering of the game screens

use super::game::{Clock, Game, Round, Screen};
use crate::domain::entities::Ranking;
use crate::domain::services::quiz_service::MAX_SELECTIONS;

pub fn render<C: Clock>(game: &Game<C>) -> String {
    let lines = match game.screen() {
        Screen::Loading(_) => vec!["Loading...".to_string()],
        Screen::MainMenu => render_menu(game.keywords()),
        Screen::Playing => match game.round() {
            Some(round) => render_playing(game, round),
            None => Vec::new(),
        },
        Screen::Result => match game.round() {
            Some(round) => render_result(game, round),
            None => Vec::new(),
        },
    };
    lines.join("\n")
}

fn render_menu(keywords: &[String]) -> Vec<String> {
    let mut lines = vec!["== 할루시네이션을 찾아라! ==".to_string(), String::new()];
    if keywords.is_empty() {
        lines.push("No keywords available, type 'reload' to try again".to_string());
    }
    lines.extend(
        keywords
            .iter()
            .enumerate()
            .map(|(i, keyword)| format!("  {}. {}", i + 1, keyword)),
    );
    lines
}

fn timer<C: Clock>(game: &Game<C>) -> String {
    let secs = game.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.0);
    format!("Time {:.1}s", secs)
}

fn render_playing<C: Clock>(game: &Game<C>, round: &Round) -> Vec<String> {
    let content = game.layout().content_rect();
    let offset = round.scroll().offset();

    let mut lines = vec![format!(
        "{}   [{}]   selected {}/{}",
        timer(game),
        round.keyword(),
        round.selected_count(),
        MAX_SELECTIONS
    )];

    if offset > 0 {
        lines.push("   ... (up)".to_string());
    }

    let visible = round.blocks().iter().filter(|b| {
        let rect = b.visible_rect(offset);
        rect.bottom() > content.top() && rect.top() < content.bottom()
    });
    for block in visible {
        let mark = if block.selected { "[x]" } else { "[ ]" };
        for (i, line) in block.lines.iter().enumerate() {
            if i == 0 {
                lines.push(format!("{} {:>2}. {}", mark, block.index + 1, line));
            } else {
                lines.push(format!("        {}", line));
            }
        }
    }

    if offset < round.scroll().max() {
        lines.push("   ... (down)".to_string());
    }
    lines
}

fn render_result<C: Clock>(game: &Game<C>, round: &Round) -> Vec<String> {
    let mut lines = vec![
        format!("Correct {} / {}", round.correct_count(), round.total_errors()),
        timer(game),
    ];
    if round.can_retry() {
        lines.push("'retry' to keep looking, 'home' for the menu".to_string());
    } else {
        lines.push("Perfect! 'home' for the menu".to_string());
    }
    lines
}

pub fn render_rankings(rankings: &[Ranking]) -> String {
    if rankings.is_empty() {
        return "No rankings yet".to_string();
    }
    rankings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{:>2}. {:<20} {:>8.2}s  {}",
                i + 1,
                r.nickname,
                r.elapsed_time,
                r.keyword
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::game::LoadOutcome;
    use crate::domain::entities::{KeywordList, Problem};

    fn problem() -> Problem {
        Problem {
            right_text: (0..6).map(|i| format!("fact {}", i)).collect(),
            wrong_text: (0..6).map(|i| format!("fiction {}", i)).collect(),
            ..Problem::default()
        }
    }

    #[test]
    fn test_render_loading_and_menu() {
        let mut game = Game::new();
        assert_eq!(render(&game), "Loading...");

        game.finish_loading(Ok(LoadOutcome::Keywords(KeywordList::new(["우주 탐사"]))));
        let screen = render(&game);
        assert!(screen.contains("1. 우주 탐사"));
    }

    #[test]
    fn test_render_playing_marks_selection() {
        let mut game = Game::new().with_seed(3);
        game.finish_loading(Ok(LoadOutcome::Keywords(KeywordList::new(["AI 규제"]))));
        game.select_keyword(0);
        game.finish_loading(Ok(LoadOutcome::Problem(problem())));
        game.toggle_sentence(1);

        let screen = render(&game);
        assert!(screen.contains("[AI 규제]"));
        assert!(screen.contains("selected 1/5"));
        assert!(screen.contains("[x]  2."));
        assert!(screen.contains("[ ]  1."));
        assert!(!screen.contains("(down)"));
    }

    #[test]
    fn test_render_result() {
        let mut game = Game::new().with_seed(3);
        game.finish_loading(Ok(LoadOutcome::Keywords(KeywordList::new(["AI 규제"]))));
        game.select_keyword(0);
        game.finish_loading(Ok(LoadOutcome::Problem(problem())));
        game.submit();

        let screen = render(&game);
        assert!(screen.contains("Correct 0 / 5"));
        assert!(screen.contains("retry"));
    }

    #[test]
    fn test_render_rankings() {
        assert_eq!(render_rankings(&[]), "No rankings yet");
        let board = render_rankings(&[Ranking {
            id: 1,
            nickname: "neo".to_string(),
            keyword: "우주 탐사".to_string(),
            elapsed_time: 12.5,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }]);
        assert!(board.starts_with(" 1. neo"));
        assert!(board.contains("12.50s"));
    }
}
