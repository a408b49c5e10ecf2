// Small text helpers shared by the field rules

/// Uppercase every token and join them with a single space.
pub fn concat_upper<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into words on anything that is not a letter or a digit.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Title-case text: the first letter of every alphabetic run is uppercased,
/// the rest lowercased. `TAN-TAN` becomes `Tan-Tan`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
