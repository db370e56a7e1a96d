use phf::phf_set;

/// Words kept lowercase unless they open the title.
static MINOR_WORDS: phf::Set<&'static str> = phf_set! {
    "a",
    "an",
    "on",
    "the",
    "to",
};

/// Capitalize every word of a title, except minor words after the first.
///
/// Words are whitespace separated, and a word restarts after any other
/// non-alphanumeric character (`spider-man` becomes `Spider-Man`). An
/// apostrophe between letters stays inside the word. Whitespace is preserved
/// as is.
pub fn title_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut word = String::new();
    let mut first_word = true;

    for c in title.chars() {
        if c.is_whitespace() {
            flush_word(&mut out, &mut word, &mut first_word);
            out.push(c);
        } else {
            word.push(c);
        }
    }
    flush_word(&mut out, &mut word, &mut first_word);

    out
}

fn flush_word(out: &mut String, word: &mut String, first_word: &mut bool) {
    if word.is_empty() {
        return;
    }

    let lower = word.to_lowercase();
    if !*first_word && MINOR_WORDS.contains(lower.as_str()) {
        out.push_str(&lower);
    } else {
        capitalize_parts(out, &lower);
    }

    *first_word = false;
    word.clear();
}

/// Uppercase the first character of every alphanumeric run in `word`.
fn capitalize_parts(out: &mut String, word: &str) {
    let chars: Vec<char> = word.chars().collect();
    let mut at_start = true;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            if at_start {
                out.extend(c.to_uppercase());
                at_start = false;
            } else {
                out.push(c);
            }
            continue;
        }

        let inner_apostrophe = matches!(c, '\'' | '’')
            && i > 0
            && chars[i - 1].is_alphanumeric()
            && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
        if !inner_apostrophe {
            at_start = true;
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(title_case("foo"), "Foo");
        assert_eq!(title_case("a bad title"), "A Bad Title");
        assert_eq!(title_case("the bad title"), "The Bad Title");
    }

    #[test]
    fn test_minor_words_after_start() {
        assert_eq!(
            title_case("a bad title that makes one of a kind"),
            "A Bad Title That Makes One Of a Kind"
        );
        assert_eq!(
            title_case("journey to the center on an island"),
            "Journey to the Center on an Island"
        );
        assert_eq!(title_case("Back To The Future"), "Back to the Future");
    }

    #[test]
    fn test_rest_of_word_lowercased() {
        assert_eq!(title_case("SERIES TITLE"), "Series Title");
        assert_eq!(title_case("mIxEd"), "Mixed");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_hyphenated_words() {
        assert_eq!(
            title_case("spider-man far from home"),
            "Spider-Man Far From Home"
        );
        assert_eq!(title_case("X-MEN"), "X-Men");
        assert_eq!(title_case("the a-team"), "The A-Team");
        assert_eq!(title_case("back-to-back"), "Back-To-Back");
    }

    #[test]
    fn test_apostrophes_and_punctuation() {
        assert_eq!(title_case("don't look up"), "Don't Look Up");
        assert_eq!(title_case("'til death"), "'Til Death");
        assert_eq!(title_case("(500) days of summer"), "(500) Days Of Summer");
        assert_eq!(title_case("mr.robot"), "Mr.Robot");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(title_case("élan vital"), "Élan Vital");
    }
}
