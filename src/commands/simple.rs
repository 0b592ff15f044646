//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::Decision;
use crate::dictionary::DictionaryOracle;
use crate::game::GameState;
use crate::output::formatters::{rejection_text, score_line, used_word_line};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<D: DictionaryOracle>(game: &mut GameState<D>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock(), &mut rand::rng())
}

/// Drive a game from line-oriented input
///
/// Each line is either a command (`:new`, `:words`, `:score`, `:quit`) or a
/// word to submit. Returns at `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn play_lines<D, I, O, R>(
    game: &mut GameState<D>,
    input: I,
    mut output: O,
    rng: &mut R,
) -> io::Result<()>
where
    D: DictionaryOracle,
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Commands: ':new' new game, ':words' list words, ':score' show score, ':quit' exit\n")?;

    print_root(game, &mut output)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Final {}. Thanks for playing!\n", score_line(game.score()))?;
                return Ok(());
            }
            ":new" | ":n" => {
                game.start_game(rng);
                writeln!(output, "\n🔄 New game started!\n")?;
                print_root(game, &mut output)?;
            }
            ":words" | ":w" => {
                if game.used_words().is_empty() {
                    writeln!(output, "No words yet.")?;
                }
                for word in game.used_words() {
                    writeln!(output, "  {}", used_word_line(word))?;
                }
            }
            ":score" | ":s" => writeln!(output, "{}", score_line(game.score()))?,
            _ => match game.submit(&line) {
                None => {}
                Some(Decision::Accepted(word)) => {
                    writeln!(
                        output,
                        "{} {}   {}",
                        "✓".green().bold(),
                        used_word_line(&word).bright_white(),
                        score_line(game.score()).bright_yellow()
                    )?;
                }
                Some(Decision::Rejected(rejection)) => {
                    writeln!(
                        output,
                        "{} {}",
                        "✗".red().bold(),
                        rejection_text(rejection, game.root_word()).red()
                    )?;
                }
            },
        }
    }

    writeln!(output, "\nFinal {}", score_line(game.score()))?;
    Ok(())
}

fn print_root<D: DictionaryOracle, O: Write>(game: &GameState<D>, output: &mut O) -> io::Result<()> {
    writeln!(
        output,
        "Root word: {}\n",
        game.root_word().text().to_uppercase().bright_yellow().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::{Language, WordListDictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(script: &str) -> (GameState<WordListDictionary>, String) {
        colored::control::set_override(false);

        let mut game = GameState::with_root(
            RootWord::new("silkworm").unwrap(),
            WordListDictionary::embedded(),
            Language::english(),
        );
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        play_lines(&mut game, script.as_bytes(), &mut output, &mut rng).unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_and_scores() {
        let (game, output) = play("silk\nworm\n");

        assert_eq!(game.used_words(), ["worm", "silk"]);
        assert!(output.contains("④ silk"));
        assert!(output.contains("Score: 22"));
    }

    #[test]
    fn prints_rejection_title_and_message() {
        let (_, output) = play("silk\nsilk\nzebra\n");

        assert!(output.contains("Word used already: Be more original!"));
        assert!(output.contains("Word not possible: You can't spell that word from 'silkworm'!"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (game, output) = play("\n   \n");

        assert!(game.used_words().is_empty());
        assert!(!output.contains('✗'));
    }

    #[test]
    fn quit_stops_reading() {
        let (game, output) = play("silk\n:quit\nworm\n");

        assert_eq!(game.used_words(), ["silk"]);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn new_game_clears_words() {
        let (game, output) = play("silk\n:new\n:words\n");

        assert!(game.used_words().is_empty());
        assert!(output.contains("New game started"));
        assert!(output.contains("No words yet."));
    }

    #[test]
    fn words_command_lists_most_recent_first() {
        let (_, output) = play("silk\nmilk\n:words\n");

        let milk = output.rfind("④ milk").unwrap();
        let silk = output.rfind("④ silk").unwrap();
        assert!(milk < silk);
    }
}
