//! Keyword detection over word sequences.

/// Splits a keyword phrase into its words.
fn phrase_words(keyword: &str) -> Vec<&str> {
    keyword.split_whitespace().collect()
}

fn matches_at(words: &[String], phrase: &[&str], index: usize) -> bool {
    words.len() >= index + phrase.len()
        && words[index..index + phrase.len()]
            .iter()
            .zip(phrase)
            .all(|(word, kw)| word.to_lowercase() == kw.to_lowercase())
}

/// Position of the first occurrence of `keyword` that leaves at least one
/// word next to it. A keyword that makes up the whole sequence does not count.
fn find_keyword(words: &[String], keyword: &str) -> Option<(usize, usize)> {
    let phrase = phrase_words(keyword);
    if phrase.is_empty() || words.len() <= phrase.len() {
        return None;
    }
    (0..=words.len() - phrase.len())
        .find(|&index| matches_at(words, &phrase, index))
        .map(|index| (index, phrase.len()))
}

/// Finds and removes keywords from a word sequence, ignoring case.
///
/// Each keyword in `keywords` is looked for in turn and its first occurrence
/// removed, so several distinct keywords can be stripped in one call.
/// Returns `None` when no keyword matched, which is distinct from
/// `Some(words)` where `words` may have become empty.
pub fn find_and_remove_keywords<S: AsRef<str>>(words: &[String], keywords: &[S]) -> Option<Vec<String>> {
    let mut remaining = words.to_vec();
    let mut matched = false;
    for keyword in keywords {
        if let Some((index, len)) = find_keyword(&remaining, keyword.as_ref()) {
            remaining.drain(index..index + len);
            matched = true;
        }
    }
    matched.then_some(remaining)
}

/// Position of `keyword` strictly inside `words`: never touching the first
/// or the last word. Returns the start index and the keyword's word count.
pub fn find_inner_phrase(words: &[String], keyword: &str) -> Option<(usize, usize)> {
    let phrase = phrase_words(keyword);
    if phrase.is_empty() || words.len() < phrase.len() + 2 {
        return None;
    }
    (1..words.len() - phrase.len())
        .find(|&index| matches_at(words, &phrase, index))
        .map(|index| (index, phrase.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(find_and_remove_keywords(&words("July 1999"), &["circa"]), None);
    }

    #[test]
    fn test_removes_keyword_anywhere() {
        struct TestCase {
            input:    &'static str,
            keywords: &'static [&'static str],
            expected: &'static str,
        }

        let cases = [
            TestCase {
                input:    "circa 1999",
                keywords: &["circa"],
                expected: "1999",
            },
            TestCase {
                input:    "July circa 1999",
                keywords: &["circa"],
                expected: "July 1999",
            },
            TestCase {
                input:    "1999 or after",
                keywords: &["or after"],
                expected: "1999",
            },
            TestCase {
                input:    "CIRCA 1999",
                keywords: &["circa"],
                expected: "1999",
            },
            TestCase {
                input:    "c. possibly 1999",
                keywords: &["c.", "possibly"],
                expected: "1999",
            },
        ];

        for case in &cases {
            let result = find_and_remove_keywords(&words(case.input), case.keywords);
            assert_eq!(result, Some(words(case.expected)), "input: {}", case.input);
        }
    }

    #[test]
    fn test_only_first_occurrence_is_removed() {
        let result = find_and_remove_keywords(&words("about 1999 about"), &["about"]);
        assert_eq!(result, Some(words("1999 about")));
    }

    #[test]
    fn test_keyword_must_be_whole_words() {
        assert_eq!(find_and_remove_keywords(&words("circa1999 x"), &["circa"]), None);
        assert_eq!(find_and_remove_keywords(&words("or 1999 after"), &["or after"]), None);
    }

    #[test]
    fn test_keyword_alone_is_not_stripped() {
        assert_eq!(find_and_remove_keywords(&words("circa"), &["circa"]), None);
    }

    #[test]
    fn test_removal_never_consumes_the_last_word() {
        let result = find_and_remove_keywords(&words("as of"), &["as", "of"]);
        assert_eq!(result, Some(words("of")));
    }

    #[test]
    fn test_find_inner_phrase() {
        let sequence = words("July 30 1999 until at least 2000");
        assert_eq!(find_inner_phrase(&sequence, "until at least"), Some((3, 3)));
        assert_eq!(find_inner_phrase(&words("until at least 2000"), "until at least"), None);
        assert_eq!(find_inner_phrase(&words("1999 until at least"), "until at least"), None);
        assert_eq!(find_inner_phrase(&words("1999 - 2000"), "-"), Some((1, 1)));
    }
}
