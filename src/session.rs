//! Interactive menu loop for one round.

use core::num::IntErrorKind;
use core::str::FromStr;

use crate::console::Console;
use crate::display::{BANNER, MENU, Visibility, render_hand};
use crate::error::{InputError, SessionError};
use crate::game::{Game, GameState};

const PLAYER: &str = "Player's Hand:";
const DEALER: &str = "Dealer's Hand:";

/// A choice from the player's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Draw another card.
    Hit,
    /// Stop drawing and let the dealer play.
    Stand,
    /// Export both hands to the save file.
    SaveGame,
    /// Leave without finishing the round.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u64 = match s.trim().parse() {
            Ok(number) => number,
            // Too many digits for any menu entry, but still a number.
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
            Err(_) => return Err(InputError::InvalidInput),
        };
        match number {
            1 => Ok(Self::Hit),
            2 => Ok(Self::Stand),
            3 => Ok(Self::SaveGame),
            4 => Ok(Self::Exit),
            other => Err(InputError::InvalidOption(other)),
        }
    }
}

fn show_player<C: Console + ?Sized>(game: &Game, console: &mut C) -> Result<(), SessionError> {
    console.write_str(&render_hand(PLAYER, game.player_hand(), Visibility::All))?;
    Ok(())
}

fn show_dealer<C: Console + ?Sized>(game: &Game, console: &mut C) -> Result<(), SessionError> {
    let visibility = if game.dealer_revealed() {
        Visibility::All
    } else {
        Visibility::FirstOnly
    };
    console.write_str(&render_hand(DEALER, game.dealer_hand(), visibility))?;
    Ok(())
}

fn announce_outcome<C: Console + ?Sized>(game: &Game, console: &mut C) -> Result<(), SessionError> {
    if let Some(outcome) = game.outcome() {
        log::debug!("round over: {outcome:?}");
        console.write_str(&format!("{outcome}\n"))?;
    }
    Ok(())
}

/// Applies one menu choice to the game and prints the result.
///
/// # Errors
///
/// Returns an error if the deck runs out or the console fails. Save failures
/// are reported on the console and are not errors.
pub fn apply_choice<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
    choice: MenuChoice,
) -> Result<(), SessionError> {
    match choice {
        MenuChoice::Hit => {
            game.hit()?;
            show_player(game, console)?;
            announce_outcome(game, console)?;
        }
        MenuChoice::Stand => {
            game.stand()?;
            show_dealer(game, console)?;
            game.dealer_play()?;
            show_dealer(game, console)?;
            announce_outcome(game, console)?;
        }
        MenuChoice::SaveGame => match game.save() {
            Ok(()) => console.write_str("Game progress saved successfully.\n")?,
            Err(_) => console.write_str("Unable to open file for saving game progress.\n")?,
        },
        MenuChoice::Exit => game.exit()?,
    }
    Ok(())
}

/// Plays a full round: deals, runs the menu until the round ends, and
/// announces the result.
///
/// End of input counts as choosing Exit.
///
/// # Errors
///
/// Returns an error if the deck runs out or the console fails.
pub fn run<C: Console + ?Sized>(game: &mut Game, console: &mut C) -> Result<(), SessionError> {
    console.write_str(BANNER)?;

    game.deal_initial()?;
    show_player(game, console)?;
    show_dealer(game, console)?;

    while game.state() == GameState::AwaitingPlayerChoice {
        console.write_str(MENU)?;
        let Some(line) = console.read_line()? else {
            log::debug!("input closed, leaving the round");
            game.exit()?;
            break;
        };

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(InputError::InvalidInput) => {
                log::debug!("non-numeric menu input {line:?}");
                console.write_str("Invalid input. Please enter a number.\n")?;
                continue;
            }
            Err(InputError::InvalidOption(number)) => {
                log::debug!("unknown menu option {number}");
                console.write_str("Invalid option. Please choose again.\n")?;
                continue;
            }
        };

        apply_choice(game, console, choice)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        assert_eq!("1".parse(), Ok(MenuChoice::Hit));
        assert_eq!(" 2 ".parse(), Ok(MenuChoice::Stand));
        assert_eq!("3".parse(), Ok(MenuChoice::SaveGame));
        assert_eq!("4".parse(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_unknown_and_non_numeric_input() {
        assert_eq!("0".parse::<MenuChoice>(), Err(InputError::InvalidOption(0)));
        assert_eq!("9".parse::<MenuChoice>(), Err(InputError::InvalidOption(9)));
        assert_eq!("hit".parse::<MenuChoice>(), Err(InputError::InvalidInput));
        assert_eq!("".parse::<MenuChoice>(), Err(InputError::InvalidInput));
        assert_eq!("-1".parse::<MenuChoice>(), Err(InputError::InvalidInput));
    }

    #[test]
    fn oversized_numbers_are_invalid_options() {
        assert_eq!(
            "99999999999".parse::<MenuChoice>(),
            Err(InputError::InvalidOption(99_999_999_999))
        );
        assert_eq!(
            "123456789012345678901234567890".parse::<MenuChoice>(),
            Err(InputError::InvalidOption(u64::MAX))
        );
    }
}
