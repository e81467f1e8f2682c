//! Console output for CLI commands

use crate::{
    Result,
    game::{Board, Team},
    ports::Observer,
    spymaster::PositionValues,
    types::{Clue, ClueExplanation},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a clue with the words it covers.
pub fn print_explanation(explanation: &ClueExplanation) {
    print_kv("Clue", &explanation.clue.to_string());
    print_kv(
        "Expected value",
        &format!("{:.3}", explanation.expected_value),
    );
    if explanation.fallback {
        print_kv("Note", "fallback clue, may repeat an earlier one");
    }
    for covered in &explanation.covered {
        println!("    {:16} {}", covered.word, covered.probability);
    }
}

/// Render the position-value table, mover's cards down, opponent's across.
pub fn format_position_values(table: &PositionValues) -> String {
    let rows = table.rows();
    let mut out = String::from("m\\o ");
    for o in 0..rows.len() {
        out.push_str(&format!("{o:>7}"));
    }
    out.push('\n');
    for (m, row) in rows.iter().enumerate() {
        out.push_str(&format!("{m:<4}"));
        for value in row {
            out.push_str(&format!("{value:>7.3}"));
        }
        out.push('\n');
    }
    out
}

/// Prints a human-readable game transcript to stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    turn: usize,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for ConsoleObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        print_section("Board");
        println!("{board}");
        Ok(())
    }

    fn on_clue_chosen(&mut self, _team: Team, explanation: &ClueExplanation) -> Result<()> {
        for covered in &explanation.covered {
            println!("      aiming at {} ({})", covered.word, covered.probability);
        }
        Ok(())
    }

    fn on_clue_given(&mut self, team: Team, clue: &Clue) -> Result<()> {
        self.turn += 1;
        println!("\nTurn {} - {team}: {clue}", self.turn);
        Ok(())
    }

    fn on_guess(&mut self, _team: Team, word: &str, revealed: Team) -> Result<()> {
        println!("  guess {word} -> {revealed}");
        Ok(())
    }

    fn on_pass(&mut self, _team: Team) -> Result<()> {
        println!("  pass");
        Ok(())
    }

    fn on_game_end(&mut self, winner: Team) -> Result<()> {
        print_section(&format!("{winner} wins after {} turns", self.turn));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spymaster::PositionValueConfig;

    #[test]
    fn test_table_has_header_and_ten_rows() {
        let table = PositionValues::build(&PositionValueConfig::default()).unwrap();
        let text = format_position_values(&table);
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().nth(1).unwrap().starts_with('0'));
    }
}
