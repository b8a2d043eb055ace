/// Lowercases `input` and turns every character outside `a-z` into a space.
///
/// Lowercasing is full Unicode lowercasing, so `'É'` becomes `'é'`, which is
/// still outside `a-z` and therefore a separator.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        for lower in c.to_lowercase() {
            match lower {
                'a'..='z' => out.push(lower),
                _ => out.push(' '),
            }
        }
    }
    out
}

/// Splits normalized text into words, skipping runs of separators.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}
