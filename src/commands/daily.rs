//! Word of the day lookup

use crate::daily;
use crate::wordlists::WordLists;
use chrono::NaiveDate;
use colored::Colorize;

/// The daily word for one length and date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub day: i64,
    pub word_length: usize,
    pub word: String,
}

/// Look up the daily word, `None` if the length has no pool
#[must_use]
pub fn daily_report(words: &WordLists, word_length: usize, date: NaiveDate) -> Option<DailyReport> {
    let word = daily::daily_word(words.answers(word_length), word_length, date)?;
    Some(DailyReport {
        date,
        day: daily::day_number(date),
        word_length,
        word: word.text().to_string(),
    })
}

/// Print the day number, and the word itself when `reveal` is set
pub fn print_daily_report(report: &DailyReport, reveal: bool) {
    println!(
        "Letreco #{} ({}) - {} letras",
        report.day.to_string().bright_cyan().bold(),
        report.date,
        report.word_length
    );
    if reveal {
        println!("Palavra: {}", report.word.bright_yellow().bold());
    } else {
        println!("{}", "Use --reveal para mostrar a palavra.".bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_stable_for_a_date() {
        let words = WordLists::embedded();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let first = daily_report(&words, 5, date).unwrap();
        let again = daily_report(&words, 5, date).unwrap();

        assert_eq!(first, again);
        assert_eq!(first.day, 0);
        assert_eq!(first.word.chars().count(), 5);
        assert!(words.answers(5).iter().any(|w| w.text() == first.word));
    }

    #[test]
    fn unknown_length_has_no_report() {
        let words = WordLists::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(daily_report(&words, 5, date), None);
    }
}
