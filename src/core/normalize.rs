//! Accent stripping and case folding for letter comparison
//!
//! Normalized text is only ever used for equality checks (dictionary
//! membership, guess against target, keyboard buckets). Whatever the player
//! typed is what gets displayed.

/// Map a single character to its unaccented uppercase form
///
/// Non-letters pass through unchanged.
#[must_use]
pub fn normalize_char(ch: char) -> char {
    let upper = ch.to_uppercase().next().unwrap_or(ch);
    match upper {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        other => other,
    }
}

/// Normalize a whole string for comparison purposes
///
/// # Examples
/// ```
/// use letreco::core::normalize;
///
/// assert_eq!(normalize("limão"), "LIMAO");
/// assert_eq!(normalize("Braço"), "BRACO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

/// Uppercase a character for display, keeping its accent
#[must_use]
pub fn display_char(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_portuguese_accents() {
        assert_eq!(normalize("ÁÀÂÃÄ"), "AAAAA");
        assert_eq!(normalize("éêè"), "EEE");
        assert_eq!(normalize("óôõ"), "OOO");
        assert_eq!(normalize("úü"), "UU");
        assert_eq!(normalize("íî"), "II");
    }

    #[test]
    fn cedilla_and_tilde_n() {
        assert_eq!(normalize_char('ç'), 'C');
        assert_eq!(normalize_char('Ç'), 'C');
        assert_eq!(normalize_char('ñ'), 'N');
    }

    #[test]
    fn case_folds_plain_letters() {
        assert_eq!(normalize("prato"), "PRATO");
        assert_eq!(normalize("PrAtO"), "PRATO");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(normalize("a-1 b!"), "A-1 B!");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn display_keeps_accent() {
        assert_eq!(display_char('ã'), 'Ã');
        assert_eq!(display_char('ç'), 'Ç');
        assert_eq!(display_char('q'), 'Q');
    }
}
