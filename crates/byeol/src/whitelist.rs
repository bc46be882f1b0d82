//! In-memory whitelist with a daily spots counter.

use chrono::{Local, NaiveDate};

/// A captured signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistEntry {
    /// Full name as entered.
    pub name: String,
    /// Email address as entered.
    pub email: String,
}

/// Signups captured this session plus the spots still open today.
///
/// The counter is keyed to the local calendar date and refills when the
/// date rolls over. Nothing is persisted; entries live only for the
/// session.
#[derive(Debug)]
pub struct Whitelist {
    entries: Vec<WhitelistEntry>,
    spots_per_day: u32,
    spots_left: u32,
    day: NaiveDate,
}

impl Whitelist {
    /// Open a whitelist with the given number of spots per day.
    pub fn new(spots_per_day: u32) -> Self {
        Self::starting_on(spots_per_day, Local::now().date_naive())
    }

    fn starting_on(spots_per_day: u32, day: NaiveDate) -> Self {
        Self {
            entries: Vec::new(),
            spots_per_day,
            spots_left: spots_per_day,
            day,
        }
    }

    /// Spots still open today.
    pub fn spots_left(&mut self) -> u32 {
        self.roll_day(Local::now().date_naive());
        self.spots_left
    }

    /// Entries captured so far.
    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    /// Capture a signup, spending one of today's spots.
    pub fn join(&mut self, name: String, email: String) -> Result<(), String> {
        self.join_on(name, email, Local::now().date_naive())
    }

    fn join_on(&mut self, name: String, email: String, today: NaiveDate) -> Result<(), String> {
        self.roll_day(today);

        if self.spots_left == 0 {
            return Err("no spots left today, come back tomorrow".to_string());
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.email.eq_ignore_ascii_case(&email))
        {
            return Err("that email is already on the list".to_string());
        }

        self.entries.push(WhitelistEntry { name, email });
        self.spots_left -= 1;
        Ok(())
    }

    /// Refill the counter when the calendar date changes.
    fn roll_day(&mut self, today: NaiveDate) {
        if today != self.day {
            self.day = today;
            self.spots_left = self.spots_per_day;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, n).unwrap()
    }

    #[test]
    fn test_join_captures_entry_and_spends_spot() {
        let mut list = Whitelist::starting_on(2, day(1));
        list.join_on("Jo".into(), "jo@star.dev".into(), day(1))
            .unwrap();

        assert_eq!(list.spots_left, 1);
        assert_eq!(
            list.entries(),
            [WhitelistEntry {
                name: "Jo".to_string(),
                email: "jo@star.dev".to_string(),
            }]
        );
    }

    #[test]
    fn test_join_rejects_when_no_spots_left() {
        let mut list = Whitelist::starting_on(1, day(1));
        list.join_on("Jo".into(), "jo@star.dev".into(), day(1))
            .unwrap();

        let result = list.join_on("Mx".into(), "mx@star.dev".into(), day(1));
        assert!(result.is_err());
        assert_eq!(list.entries().len(), 1);
    }

    #[test]
    fn test_spots_refill_on_new_day() {
        let mut list = Whitelist::starting_on(1, day(1));
        list.join_on("Jo".into(), "jo@star.dev".into(), day(1))
            .unwrap();
        assert_eq!(list.spots_left, 0);

        list.join_on("Mx".into(), "mx@star.dev".into(), day(2))
            .unwrap();
        assert_eq!(list.spots_left, 0);
        assert_eq!(list.entries().len(), 2);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut list = Whitelist::starting_on(5, day(1));
        list.join_on("Jo".into(), "jo@star.dev".into(), day(1))
            .unwrap();

        let result = list.join_on("Jo Again".into(), "JO@star.dev".into(), day(1));
        assert!(result.is_err());
        assert_eq!(list.spots_left, 4);
    }

    #[test]
    fn test_zero_spot_whitelist_rejects_everyone() {
        let mut list = Whitelist::starting_on(0, day(1));
        let result = list.join_on("Jo".into(), "jo@star.dev".into(), day(1));
        assert!(result.is_err());
        assert!(list.entries().is_empty());
    }
}
