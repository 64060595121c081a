//! Word-of-the-day selection
//!
//! Everyone gets the same word on the same day: the number of days since a
//! fixed seed date indexes the word pool, wrapping around at the end. Days
//! are counted in UTC so the pick is identical worldwide.

use crate::core::Word;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// The puzzle's day zero, 2021-06-19, as days since the Unix epoch
const SEED_DAY: i64 = 18_797;

/// Whole days elapsed between the seed date and the given moment
///
/// Negative for moments before the seed date.
#[must_use]
pub fn day_offset(at: SystemTime) -> i64 {
    let days_since_epoch = match at.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() / SECONDS_PER_DAY) as i64,
        Err(err) => -(err.duration().as_secs().div_ceil(SECONDS_PER_DAY) as i64),
    };
    days_since_epoch - SEED_DAY
}

/// The word of the day for the given moment
///
/// The day offset modulo the pool length indexes the pool. Returns `None`
/// for an empty pool.
#[must_use]
pub fn word_of_the_day(words: &[Word], at: SystemTime) -> Option<&Word> {
    if words.is_empty() {
        return None;
    }

    let index = day_offset(at).rem_euclid(words.len() as i64) as usize;
    Some(&words[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn utc_days(days: i64) -> SystemTime {
        let offset = Duration::from_secs(days.unsigned_abs() * SECONDS_PER_DAY);
        if days >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }

    #[test]
    fn seed_date_is_day_zero() {
        assert_eq!(day_offset(utc_days(SEED_DAY)), 0);
    }

    #[test]
    fn offset_counts_whole_days() {
        assert_eq!(day_offset(utc_days(SEED_DAY + 3)), 3);
        // Any time of day maps to the same offset
        let midday = utc_days(SEED_DAY + 3) + Duration::from_secs(12 * 3600);
        assert_eq!(day_offset(midday), 3);
    }

    #[test]
    fn offset_is_negative_before_the_seed() {
        assert_eq!(day_offset(utc_days(SEED_DAY - 2)), -2);
    }

    #[test]
    fn word_cycles_through_the_pool() {
        let words = pool(&["solar", "sonar", "sowar"]);

        assert_eq!(word_of_the_day(&words, utc_days(SEED_DAY)).unwrap().text(), "solar");
        assert_eq!(
            word_of_the_day(&words, utc_days(SEED_DAY + 1)).unwrap().text(),
            "sonar"
        );
        // Wraps at the end of the pool
        assert_eq!(
            word_of_the_day(&words, utc_days(SEED_DAY + 3)).unwrap().text(),
            "solar"
        );
    }

    #[test]
    fn word_before_the_seed_still_indexes_the_pool() {
        let words = pool(&["solar", "sonar", "sowar"]);
        // Offset -1 wraps to the last word
        assert_eq!(
            word_of_the_day(&words, utc_days(SEED_DAY - 1)).unwrap().text(),
            "sowar"
        );
    }

    #[test]
    fn empty_pool_has_no_word() {
        assert!(word_of_the_day(&[], utc_days(SEED_DAY)).is_none());
    }
}
