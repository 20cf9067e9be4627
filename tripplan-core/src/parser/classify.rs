//! Keyword classification of a section into a booking type.
//!
//! Rules are checked in a fixed order and the first hit wins, so a section
//! mentioning both "hotel" and "flight" is a hotel.

use regex::Regex;
use std::sync::LazyLock;

use crate::booking::BookingType;

static RULES: LazyLock<Vec<(BookingType, Regex)>> = LazyLock::new(|| {
    [
        (
            BookingType::Hotel,
            r"(?i)\b(?:hotel|check[- ]?in|check[- ]?out|accommodation|hostel|resort|airbnb|guest ?house|room type|nights?)\b",
        ),
        (
            BookingType::Train,
            r"(?i)\b(?:train|rail|railway|railways|sncf|eurostar|trenitalia|italo|renfe|amtrak|deutsche bahn|tgv|platform|carriage|coach \d+)\b",
        ),
        (
            BookingType::Flight,
            r"(?i)\b(?:flight|airlines?|boarding|gate|airport|e-ticket|layover)\b",
        ),
        (
            BookingType::Restaurant,
            r"(?i)\b(?:restaurant|table for|dinner|lunch|breakfast|brunch|bistro|brasserie|trattoria|cafe|café|dining)\b",
        ),
        (
            BookingType::Activity,
            r"(?i)\b(?:tickets?|tour|museum|admission|entry|excursion|attraction|show|concert|theme park|zoo|aquarium|experience|activity)\b",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid classifier regex")))
    .collect()
});

/// Guess the booking type of a section. `Other` when no rule matches.
pub fn classify(section: &str) -> BookingType {
    RULES
        .iter()
        .find(|(_, re)| re.is_match(section))
        .map(|(kind, _)| *kind)
        .unwrap_or(BookingType::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_with_check_in() {
        assert_eq!(
            classify("Hotel Le Marais\nCheck-in: 2025-11-15"),
            BookingType::Hotel
        );
    }

    #[test]
    fn flight_with_boarding() {
        assert_eq!(
            classify("Flight AF276 Paris to Tokyo\nBoarding 09:40"),
            BookingType::Flight
        );
    }

    #[test]
    fn train_keywords() {
        assert_eq!(
            classify("Your SNCF e-ticket\nParis Gare de Lyon -> Lyon Part-Dieu"),
            BookingType::Train
        );
        assert_eq!(classify("Eurostar London to Paris"), BookingType::Train);
    }

    #[test]
    fn restaurant_keywords() {
        assert_eq!(
            classify("Reservation at Chez Janou\nTable for 4 at 19:30"),
            BookingType::Restaurant
        );
    }

    #[test]
    fn activity_keywords() {
        assert_eq!(
            classify("Louvre Museum\n2 adult tickets"),
            BookingType::Activity
        );
    }

    #[test]
    fn unknown_text_is_other() {
        assert_eq!(
            classify("Hello grandma, see you on the 15th!"),
            BookingType::Other
        );
    }

    #[test]
    fn first_rule_wins_on_ambiguous_text() {
        // Mentions an airport, but the hotel rule is checked first.
        assert_eq!(
            classify("Airport Hotel Berlin\nCheck-in 2025-03-01"),
            BookingType::Hotel
        );
        // Train rule precedes flight rule.
        assert_eq!(
            classify("Train to the airport, then flight AF12"),
            BookingType::Train
        );
    }

    #[test]
    fn keywords_match_whole_words_only() {
        // "gates" and "showroom" are not keywords.
        assert_eq!(classify("Bill Gates showroom visit"), BookingType::Other);
    }
}
