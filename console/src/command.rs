use core::str::FromStr;
use minesweep_core::Difficulty;
use thiserror::Error;

/// One line of player input during a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal { x: i64, y: i64 },
    Flag { x: i64, y: i64 },
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
    #[error("Expected two coordinates, got {0}")]
    WrongArity(usize),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

fn parse_coords(args: &[&str]) -> Result<(i64, i64), CommandError> {
    let &[x, y] = args else {
        return Err(CommandError::WrongArity(args.len()));
    };
    let parse = |s: &str| {
        s.parse::<i64>()
            .map_err(|_| CommandError::InvalidCoordinate(s.to_owned()))
    };
    Ok((parse(x)?, parse(y)?))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "r" | "reveal" => parse_coords(rest).map(|(x, y)| Self::Reveal { x, y }),
            "f" | "flag" => parse_coords(rest).map(|(x, y)| Self::Flag { x, y }),
            "q" | "quit" if rest.is_empty() => Ok(Self::Quit),
            // bare "x y" reveals
            _ if head.parse::<i64>().is_ok() => {
                parse_coords(&words).map(|(x, y)| Self::Reveal { x, y })
            }
            _ => Err(CommandError::UnknownCommand(head.to_owned())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Please enter a number from 1 to {max}")]
    NotANumber { max: usize },
    #[error("There is no option {choice}")]
    OutOfRange { choice: usize },
}

/// Maps a 1-based menu entry onto a difficulty preset.
pub fn parse_menu_choice(s: &str) -> Result<Difficulty, MenuError> {
    let max = Difficulty::ALL.len();
    let choice: usize = s
        .trim()
        .parse()
        .map_err(|_| MenuError::NotANumber { max })?;
    choice
        .checked_sub(1)
        .and_then(|i| Difficulty::ALL.get(i).copied())
        .ok_or(MenuError::OutOfRange { choice })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveal_forms() {
        assert_eq!("r 1 2".parse::<Command>(), Ok(Command::Reveal { x: 1, y: 2 }));
        assert_eq!("reveal 3 4".parse::<Command>(), Ok(Command::Reveal { x: 3, y: 4 }));
        assert_eq!("  5   6 ".parse::<Command>(), Ok(Command::Reveal { x: 5, y: 6 }));
        assert_eq!("R -1 0".parse::<Command>(), Ok(Command::Reveal { x: -1, y: 0 }));
    }

    #[test]
    fn parses_flag_and_quit() {
        assert_eq!("f 0 7".parse::<Command>(), Ok(Command::Flag { x: 0, y: 7 }));
        assert_eq!("FLAG 2 2".parse::<Command>(), Ok(Command::Flag { x: 2, y: 2 }));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(CommandError::UnknownCommand("dig".into()))
        );
        assert_eq!("r 1".parse::<Command>(), Err(CommandError::WrongArity(1)));
        assert_eq!("1 2 3".parse::<Command>(), Err(CommandError::WrongArity(3)));
        assert_eq!(
            "f a 1".parse::<Command>(),
            Err(CommandError::InvalidCoordinate("a".into()))
        );
        assert_eq!(
            "1 x".parse::<Command>(),
            Err(CommandError::InvalidCoordinate("x".into()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(CommandError::UnknownCommand("q".into()))
        );
    }

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_choice("1"), Ok(Difficulty::Easy));
        assert_eq!(parse_menu_choice(" 2\n"), Ok(Difficulty::Medium));
        assert_eq!(parse_menu_choice("3"), Ok(Difficulty::Hard));
        assert_eq!(parse_menu_choice("0"), Err(MenuError::OutOfRange { choice: 0 }));
        assert_eq!(parse_menu_choice("4"), Err(MenuError::OutOfRange { choice: 4 }));
        assert_eq!(parse_menu_choice("easy"), Err(MenuError::NotANumber { max: 3 }));
    }
}
