//! Payee extraction from free-text bank descriptions.
//!
//! Descriptions follow a handful of conventions depending on how the
//! transaction was made. Rules are tried in a fixed order and the first one
//! whose prefix matches decides the payee, even when it then fails to find a
//! name.

use std::sync::LazyLock;

use regex::Regex;

pub const UNKNOWN_PAYEE: &str = "Unknown Payee";
pub const UNKNOWN_FORMAT: &str = "Unknown Format";

/// Descriptions whose prefix alone identifies the payee.
const STATIC_PAYEES: &[(&str, &str)] = &[
    ("ABN AMRO Bank N.V.", "ABN AMRO Bank N.V."),
    ("RENTEAFSLUITING", "Renteafsluiting"),
];

/// Fixed-width column holding the payee in card and app payment descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// First character of the payee column
    pub offset: usize,
    /// Characters taken when no comma closes the column
    pub width: usize,
}

const PAYEE_COLUMN: ColumnLayout = ColumnLayout {
    offset: 33,
    width: 32,
};

// All four layouts are the same column so far; split them once a statement
// sample shows a different prefix width.
const POSITIONAL_FORMATS: &[(&str, ColumnLayout)] = &[
    ("BEA,", PAYEE_COLUMN), // card payment at a terminal
    ("GEA,", PAYEE_COLUMN), // cash withdrawal
    ("APP", PAYEE_COLUMN),
    ("eCom", PAYEE_COLUMN),
];

const SEPA_TRANSFER_PREFIX: &str = "SEPA Overboeking";
const STRUCTURED_PREFIX: &str = "/TRTP/";

static SEPA_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Naam:\s*(\S.*?)\s*(?:IBAN|BIC|Omschrijving|$)").expect("valid SEPA name pattern")
});

static STRUCTURED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/NAME/([^/]+)/").expect("valid structured name pattern"));

impl ColumnLayout {
    /// Cuts the column out of `description`: from `offset` up to the first
    /// comma, or `width` characters when there is none. Offsets count chars.
    pub fn extract<'a>(&self, description: &'a str) -> &'a str {
        let Some((start, _)) = description.char_indices().nth(self.offset) else {
            return "";
        };
        let rest = &description[start..];

        let column = match rest.find(',') {
            Some(comma) => &rest[..comma],
            None => rest
                .char_indices()
                .nth(self.width)
                .map_or(rest, |(end, _)| &rest[..end]),
        };

        column.trim()
    }
}

/// Returns the payee name for a bank description. Never empty.
pub fn classify(description: &str) -> String {
    if let Some((_, name)) = STATIC_PAYEES
        .iter()
        .find(|(prefix, _)| description.starts_with(prefix))
    {
        return name.to_string();
    }

    if let Some((_, layout)) = POSITIONAL_FORMATS
        .iter()
        .find(|(prefix, _)| description.starts_with(prefix))
    {
        return non_empty_or_unknown(layout.extract(description));
    }

    if description.starts_with(SEPA_TRANSFER_PREFIX) {
        return capture_or_unknown(&SEPA_NAME, description);
    }

    if description.starts_with(STRUCTURED_PREFIX) {
        return capture_or_unknown(&STRUCTURED_NAME, description);
    }

    UNKNOWN_FORMAT.to_string()
}

fn capture_or_unknown(pattern: &Regex, description: &str) -> String {
    let name = pattern
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str().trim());
    non_empty_or_unknown(name)
}

fn non_empty_or_unknown(name: &str) -> String {
    if name.is_empty() {
        UNKNOWN_PAYEE.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Pads `head` so that `tail` starts exactly at the payee column.
    fn at_payee_column(head: &str, tail: &str) -> String {
        format!("{:<width$}{}", head, tail, width = PAYEE_COLUMN.offset)
    }

    #[rstest]
    #[case("ABN AMRO Bank N.V. fee", "ABN AMRO Bank N.V.")]
    #[case("ABN AMRO Bank N.V.               Basic Package", "ABN AMRO Bank N.V.")]
    #[case("RENTEAFSLUITING 01-01-2024 T/M 31-03-2024", "Renteafsluiting")]
    fn test_static_prefixes(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(classify(description), expected);
    }

    #[rstest]
    #[case("BEA, Betaalpas", "Albert Heijn 1234,PAS123 NR:ABC", "Albert Heijn 1234")]
    #[case("GEA, Betaalpas", "ING Geldautomaat ,PAS123", "ING Geldautomaat")]
    #[case("APP Betaling", "  Bol.com  ,Ref 77", "Bol.com")]
    #[case("eCom, Apple Pay", "Thuisbezorgd.nl,PAS456", "Thuisbezorgd.nl")]
    fn test_positional_formats_stop_at_comma(
        #[case] head: &str,
        #[case] tail: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(classify(&at_payee_column(head, tail)), expected);
    }

    #[test]
    fn test_positional_without_comma_takes_column_width() {
        let tail = "A".repeat(40);
        let description = at_payee_column("BEA, Betaalpas", &tail);
        assert_eq!(classify(&description), "A".repeat(PAYEE_COLUMN.width));
    }

    #[test]
    fn test_positional_comma_beyond_width_is_still_used() {
        let tail = format!("{},rest", "B".repeat(40));
        let description = at_payee_column("BEA, Betaalpas", &tail);
        assert_eq!(classify(&description), "B".repeat(40));
    }

    #[test]
    fn test_positional_ignores_commas_before_offset() {
        // Only the character at index 33 onwards is considered.
        let description = "BEA, NR:12345 SUPERMARKT XYZ, CITY";
        assert_eq!(classify(description), "Y");
    }

    #[test]
    fn test_positional_short_description_is_unknown_payee() {
        assert_eq!(classify("BEA, short"), UNKNOWN_PAYEE);
        assert_eq!(classify("APP"), UNKNOWN_PAYEE);
    }

    #[test]
    fn test_positional_counts_characters_not_bytes() {
        let description = at_payee_column("BEA, Betaalpas € ü", "Café Zoë,PAS1");
        assert_eq!(classify(&description), "Café Zoë");
    }

    #[rstest]
    #[case("SEPA Overboeking Naam: John Doe IBAN: NL00BANK0123456789", "John Doe")]
    #[case(
        "SEPA Overboeking                 IBAN: NL00BANK0123456789        BIC: ABNANL2A                    Naam: Jan Jansen                 Omschrijving: huur",
        "Jan Jansen"
    )]
    #[case("SEPA Overboeking Naam: Acme B.V. BIC: ABNANL2A", "Acme B.V.")]
    #[case("SEPA Overboeking Naam:   Trailing Name   ", "Trailing Name")]
    fn test_sepa_transfers(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(classify(description), expected);
    }

    #[rstest]
    #[case("SEPA Overboeking IBAN: NL00BANK0123456789 BIC: ABNANL2A")]
    #[case("SEPA Overboeking")]
    #[case("SEPA Overboeking Naam:   ")]
    fn test_sepa_without_name_is_unknown_payee(#[case] description: &str) {
        assert_eq!(classify(description), UNKNOWN_PAYEE);
    }

    #[rstest]
    #[case("/TRTP/SEPA/NAME/Jane Smith/IBAN/NL00BANK0123456789/", "Jane Smith")]
    #[case("/TRTP/iDEAL/IBAN/NL00BANK0123456789/BIC/ABNANL2A/NAME/ Webshop BV /REMI/123", "Webshop BV")]
    fn test_structured_tags(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(classify(description), expected);
    }

    #[rstest]
    #[case("/TRTP/SEPA Incasso/IBAN/NL00BANK0123456789/")]
    #[case("/TRTP/SEPA/NAME/Unterminated")]
    #[case("/TRTP/SEPA/NAME/   /IBAN/")]
    fn test_structured_without_name_is_unknown_payee(#[case] description: &str) {
        assert_eq!(classify(description), UNKNOWN_PAYEE);
    }

    #[rstest]
    #[case("")]
    #[case("Some free text")]
    #[case("sepa overboeking Naam: lower case")]
    #[case(" ABN AMRO Bank N.V. leading space")]
    #[case("TRTP/NAME/No leading slash/")]
    fn test_unrecognized_is_unknown_format(#[case] description: &str) {
        assert_eq!(classify(description), UNKNOWN_FORMAT);
    }

    #[test]
    fn test_rules_apply_in_order() {
        // A static prefix wins even if a later rule would also match.
        assert_eq!(
            classify("RENTEAFSLUITING /TRTP/NAME/Someone/"),
            "Renteafsluiting"
        );
        // "APP" is positional, so a SEPA-like body is not inspected.
        assert_eq!(classify("APP Naam: John"), UNKNOWN_PAYEE);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let description = "SEPA Overboeking Naam: John Doe IBAN: NL00";
        assert_eq!(classify(description), classify(description));
    }
}
