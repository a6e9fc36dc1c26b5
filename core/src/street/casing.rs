//! Title-casing with Unicode titlecase mappings.
//!
//! `char::to_uppercase` is not a titlecase mapping: ligatures, digraphs and
//! Georgian letters title-case differently, and titlecase letters (Lt) are
//! cased without being upper- or lowercase.

/// Uppercase the first cased character of each word with its titlecase
/// mapping and lowercase the rest. Any uncased character ends a word.
pub(crate) fn title_case(input: &str) -> String {
    // Lowercasing the whole string keeps the final-sigma context; every other
    // lowercase mapping is context-free, so the output lines up char by char.
    let lowered = input.to_lowercase();
    let mut lowered_chars = lowered.chars();

    let mut titled = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let lowered_len = if ch == 'Σ' { 1 } else { ch.to_lowercase().count() };
        let lowered_ch = lowered_chars.by_ref().take(lowered_len);

        if previous_cased {
            titled.extend(lowered_ch);
        } else {
            lowered_ch.for_each(drop);
            push_titlecase(&mut titled, ch);
        }
        previous_cased = is_cased(ch);
    }

    titled
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase() || is_titlecase_letter(ch)
}

fn is_titlecase_letter(ch: char) -> bool {
    matches!(
        ch,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn push_titlecase(titled: &mut String, ch: char) {
    // Georgian Mkhedruli has an uppercase form but no titlecase form
    if matches!(ch, '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}') {
        titled.push(ch);
        return;
    }

    match titlecase_mapping(ch) {
        Some(mapped) => titled.push_str(mapped),
        None => titled.extend(ch.to_uppercase()),
    }
}

/// Characters whose titlecase mapping differs from their uppercase mapping.
fn titlecase_mapping(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        // Latin digraphs
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        // Latin and Armenian ligatures
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        _ => return greek_titlecase(ch),
    };
    Some(mapped)
}

/// Greek letters with ypogegrammeni title-case to a single prosgegrammeni letter.
fn greek_titlecase(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'ᾀ' | 'ᾈ' => "ᾈ",
        'ᾁ' | 'ᾉ' => "ᾉ",
        'ᾂ' | 'ᾊ' => "ᾊ",
        'ᾃ' | 'ᾋ' => "ᾋ",
        'ᾄ' | 'ᾌ' => "ᾌ",
        'ᾅ' | 'ᾍ' => "ᾍ",
        'ᾆ' | 'ᾎ' => "ᾎ",
        'ᾇ' | 'ᾏ' => "ᾏ",
        'ᾐ' | 'ᾘ' => "ᾘ",
        'ᾑ' | 'ᾙ' => "ᾙ",
        'ᾒ' | 'ᾚ' => "ᾚ",
        'ᾓ' | 'ᾛ' => "ᾛ",
        'ᾔ' | 'ᾜ' => "ᾜ",
        'ᾕ' | 'ᾝ' => "ᾝ",
        'ᾖ' | 'ᾞ' => "ᾞ",
        'ᾗ' | 'ᾟ' => "ᾟ",
        'ᾠ' | 'ᾨ' => "ᾨ",
        'ᾡ' | 'ᾩ' => "ᾩ",
        'ᾢ' | 'ᾪ' => "ᾪ",
        'ᾣ' | 'ᾫ' => "ᾫ",
        'ᾤ' | 'ᾬ' => "ᾬ",
        'ᾥ' | 'ᾭ' => "ᾭ",
        'ᾦ' | 'ᾮ' => "ᾮ",
        'ᾧ' | 'ᾯ' => "ᾯ",
        'ᾳ' | 'ᾼ' => "ᾼ",
        'ῃ' | 'ῌ' => "ῌ",
        'ῳ' | 'ῼ' => "ῼ",
        'ᾲ' => "\u{1FBA}\u{0345}",
        'ᾴ' => "\u{0386}\u{0345}",
        'ῂ' => "\u{1FCA}\u{0345}",
        'ῄ' => "\u{0389}\u{0345}",
        'ῲ' => "\u{1FFA}\u{0345}",
        'ῴ' => "\u{038F}\u{0345}",
        'ᾷ' => "\u{0391}\u{0342}\u{0345}",
        'ῇ' => "\u{0397}\u{0342}\u{0345}",
        'ῷ' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(mapped)
}
