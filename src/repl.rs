//! Terminal front-end: command parsing and text rendering.

use std::io::{self, Write};

use card_pairing::{CardId, CardView, PlayerId, SelectionChange, Session, SessionView, Side};

pub const TITLE: &str = "저런 공에는 이런 수가 딱이야!";
pub const INSUFFICIENT_NOTICE: &str = "남은 카드가 부족합니다!";
const EMPTY_TABLE: &str = "플레이어를 추가해서 게임을 시작하세요!";

pub const HELP: &str = "\
commands:
  add                              deal a new player
  select <player#> [side] <card>   pick a card (side: 공/a/attacker, 수/d/defender)
  reset                            clear players and refill both pools
  show                             redraw the table
  help                             this text
  quit                             leave";

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Select {
        player: PlayerId,
        side: Option<Side>,
        card: CardId,
    },
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a player number")]
    InvalidPlayer(String),

    #[error("'{0}' is not a side (use 공/a/attacker or 수/d/defender)")]
    InvalidSide(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse a line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "add" | "a" => Command::Add,
        "reset" => Command::Reset,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "select" | "pick" | "s" => {
            let args: Vec<&str> = words.by_ref().collect();
            return parse_select(&args).map(Some);
        }
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    match words.next() {
        Some(extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
        None => Ok(Some(command)),
    }
}

fn parse_select(args: &[&str]) -> Result<Command, ParseError> {
    let (player, side, card) = match args {
        [] => return Err(ParseError::MissingArgument("player number")),
        [_] => return Err(ParseError::MissingArgument("card id")),
        [player, card] => (player, None, card),
        [player, side, card] => (player, Some(parse_side(side)?), card),
        [_, _, _, extra, ..] => return Err(ParseError::UnexpectedArgument(extra.to_string())),
    };

    let player = player
        .parse::<u32>()
        .ok()
        .and_then(PlayerId::from_seat)
        .ok_or_else(|| ParseError::InvalidPlayer(player.to_string()))?;

    Ok(Command::Select {
        player,
        side,
        card: CardId::new(*card),
    })
}

fn parse_side(word: &str) -> Result<Side, ParseError> {
    match word.to_lowercase().as_str() {
        "공" | "a" | "attacker" | "gong" => Ok(Side::Attacker),
        "수" | "d" | "defender" | "su" => Ok(Side::Defender),
        _ => Err(ParseError::InvalidSide(word.to_string())),
    }
}

/// Short message describing a selection change.
pub fn describe(player: PlayerId, card: &CardId, change: &SelectionChange) -> String {
    let seat = player.seat();
    match change {
        SelectionChange::Selected => format!("플레이어 {seat}: {card} 선택"),
        SelectionChange::Replaced { previous } => {
            format!("플레이어 {seat}: {previous} -> {card}")
        }
        SelectionChange::Cleared => format!("플레이어 {seat}: {card} 선택 해제"),
        SelectionChange::Ignored => format!("플레이어 {seat}: 이미 선택이 고정되었습니다"),
    }
}

/// Apply a session command. Returns a status line, if any.
pub fn apply(session: &mut Session, command: &Command) -> card_pairing::Result<Option<String>> {
    match command {
        Command::Add => {
            let id = session.add_player()?;
            Ok(Some(format!("플레이어 {} 추가", id.seat())))
        }
        Command::Select { player, side, card } => {
            let change = match side {
                Some(side) => session.select_card(*player, *side, card)?,
                None => session.select_by_id(*player, card)?,
            };
            Ok(Some(describe(*player, card, &change)))
        }
        Command::Reset => {
            session.reset();
            Ok(Some("게임 리셋".to_string()))
        }
        Command::Show | Command::Help | Command::Quit => Ok(None),
    }
}

/// Startup line telling the user how to replay this table.
pub fn replay_hint(seed: u64) -> String {
    format!("seed {seed} (replay with --seed {seed})")
}

/// Write the table followed by a prompt.
///
/// In JSON mode each view is one line of JSON and no prompt is written, so
/// stdout stays a clean JSON stream.
pub fn show(out: &mut impl Write, view: &SessionView, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, view)?;
        writeln!(out)?;
    } else {
        render(out, view)?;
        write!(out, "> ")?;
    }
    out.flush()
}

/// Draw the table as text.
pub fn render(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(
        out,
        "남은 카드: 공 {}장, 수 {}장{}",
        view.attackers_remaining,
        view.defenders_remaining,
        if view.can_add_player { "" } else { " (플레이어 추가 불가)" }
    )?;

    if view.players.is_empty() {
        writeln!(out, "{EMPTY_TABLE}")?;
        return Ok(());
    }

    for player in &view.players {
        writeln!(out)?;
        writeln!(out, "플레이어 {}", player.id.seat())?;
        for side in Side::ALL {
            writeln!(out, "  {} 카드", side.label())?;
            for card in player.hand(side) {
                render_card(out, card)?;
            }
        }
        if let Some(pairing) = &player.revealed {
            writeln!(out, "  ==> 공: {} ({})", pairing.attacker.name, pairing.attacker.description)?;
            writeln!(out, "      수: {} ({})", pairing.defender.name, pairing.defender.description)?;
        }
    }
    Ok(())
}

fn render_card(out: &mut impl Write, card: &CardView) -> io::Result<()> {
    let marker = if card.selected { '*' } else { ' ' };
    writeln!(out, "   {marker}[{}] {} - {}", card.id, card.name, card.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_pairing::{SessionConfig, SessionError};

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("add"), Ok(Some(Command::Add)));
        assert_eq!(parse("  RESET "), Ok(Some(Command::Reset)));
        assert_eq!(parse("show"), Ok(Some(Command::Show)));
        assert_eq!(parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse("select 1 g3"),
            Ok(Some(Command::Select {
                player: PlayerId::new(0),
                side: None,
                card: CardId::new("g3"),
            }))
        );
        assert_eq!(
            parse("pick 2 수 s5"),
            Ok(Some(Command::Select {
                player: PlayerId::new(1),
                side: Some(Side::Defender),
                card: CardId::new("s5"),
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("deal"), Err(ParseError::UnknownCommand("deal".into())));
        assert_eq!(parse("add 2"), Err(ParseError::UnexpectedArgument("2".into())));
        assert_eq!(parse("select"), Err(ParseError::MissingArgument("player number")));
        assert_eq!(parse("select 1"), Err(ParseError::MissingArgument("card id")));
        assert_eq!(parse("select 0 g1"), Err(ParseError::InvalidPlayer("0".into())));
        assert_eq!(parse("select x g1"), Err(ParseError::InvalidPlayer("x".into())));
        assert_eq!(parse("select 1 up g1"), Err(ParseError::InvalidSide("up".into())));
        assert_eq!(
            parse("select 1 a g1 more"),
            Err(ParseError::UnexpectedArgument("more".into()))
        );
    }

    #[test]
    fn test_apply_round() {
        let mut session = Session::new(SessionConfig::default().with_seed(11));

        let msg = apply(&mut session, &Command::Add).unwrap();
        assert_eq!(msg.as_deref(), Some("플레이어 1 추가"));

        let card = session.player(PlayerId::new(0)).unwrap().hand(Side::Attacker)[0].id.clone();
        let select = Command::Select {
            player: PlayerId::new(0),
            side: None,
            card: card.clone(),
        };
        let msg = apply(&mut session, &select).unwrap().unwrap();
        assert!(msg.contains(card.as_str()));

        let msg = apply(&mut session, &select).unwrap().unwrap();
        assert!(msg.contains("해제"));

        assert_eq!(apply(&mut session, &Command::Show), Ok(None));
    }

    #[test]
    fn test_apply_reports_exhaustion() {
        let mut session = Session::new(SessionConfig::default().with_seed(11));
        for _ in 0..3 {
            apply(&mut session, &Command::Add).unwrap();
        }

        assert!(matches!(
            apply(&mut session, &Command::Add),
            Err(SessionError::InsufficientCards { .. })
        ));

        apply(&mut session, &Command::Reset).unwrap();
        assert_eq!(session.player_count(), 0);
    }

    #[test]
    fn test_replay_hint_names_seed() {
        assert_eq!(replay_hint(9), "seed 9 (replay with --seed 9)");
    }

    #[test]
    fn test_json_show_is_a_clean_stream() {
        let mut session = Session::new(SessionConfig::default().with_seed(6));
        let mut out = Vec::new();

        show(&mut out, &session.view(), true).unwrap();
        session.add_player().unwrap();
        show(&mut out, &session.view(), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('>'));

        let docs: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["players"].as_array().unwrap().len(), 0);
        assert_eq!(docs[1]["attackers_remaining"], 4);
    }

    #[test]
    fn test_text_show_ends_with_prompt() {
        let session = Session::new(SessionConfig::default().with_seed(6));
        let mut out = Vec::new();
        show(&mut out, &session.view(), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(TITLE));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn test_render_empty_table() {
        let session = Session::new(SessionConfig::default().with_seed(1));
        let mut out = Vec::new();
        render(&mut out, &session.view()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("남은 카드: 공 6장, 수 6장"));
        assert!(text.contains(EMPTY_TABLE));
    }

    #[test]
    fn test_render_reveal() {
        let mut session = Session::new(SessionConfig::default().with_seed(4));
        let id = session.add_player().unwrap();
        let player = session.player(id).unwrap();
        let attacker = player.hand(Side::Attacker)[0].clone();
        let defender = player.hand(Side::Defender)[1].clone();
        session.select_card(id, Side::Attacker, &attacker.id).unwrap();
        session.select_card(id, Side::Defender, &defender.id).unwrap();

        let mut out = Vec::new();
        render(&mut out, &session.view()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("플레이어 1"));
        assert!(text.contains(&format!("*[{}]", attacker.id)));
        assert!(text.contains(&format!("==> 공: {}", attacker.name)));
        assert!(text.contains(&format!("수: {}", defender.name)));
        assert!(text.contains("남은 카드: 공 4장, 수 4장"));
    }
}
