use crate::timing::Element;

/// The fixed ITU code table for A-Z and 0-9.
const CODE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Looks up a dot/dash token, e.g. `"..."` -> `'S'`.
pub fn token_to_char(token: &str) -> Option<char> {
    CODE_TABLE
        .iter()
        .find(|&&(_, t)| t == token)
        .map(|&(c, _)| c)
}

/// Looks up the token for a character, case-insensitively.
pub fn char_to_token(c: char) -> Option<&'static str> {
    let c = c.to_ascii_uppercase();
    CODE_TABLE
        .iter()
        .find(|&&(ch, _)| ch == c)
        .map(|&(_, t)| t)
}

/// Assembles a classified element sequence into text.
///
/// Dots and dashes accumulate into the current token; a letter gap
/// closes the token through the code table (unknown tokens become a
/// literal `?`); a word gap additionally emits a single space. The
/// result is trimmed of leading and trailing separators.
pub fn elements_to_text(elements: &[Element]) -> String {
    let mut text = String::new();
    let mut token = String::new();
    for &element in elements {
        match element {
            Element::Dot => token.push('.'),
            Element::Dash => token.push('-'),
            Element::IntraGap => {}
            Element::LetterGap => close_letter(&mut text, &mut token),
            Element::WordGap => {
                close_letter(&mut text, &mut token);
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
            }
        }
    }
    close_letter(&mut text, &mut token);
    text.trim().to_string()
}

fn close_letter(text: &mut String, token: &mut String) {
    if token.is_empty() {
        return;
    }
    text.push(token_to_char(token).unwrap_or('?'));
    token.clear();
}
