//! Hedge words and filler phrases
//!
//! Hedges weaken the certainty of a statement; fillers are wordy
//! constructions with shorter idiomatic replacements. Multi-word hedges are
//! matched as whole phrases, single words as whole-word matches.

/// Hedge word -> category (uncertainty, qualifier, intensifier, minimizer,
/// filler, approximation)
pub fn hedge_words() -> &'static [(&'static str, &'static str)] {
    &[
        // Uncertainty markers
        ("maybe", "uncertainty"),
        ("perhaps", "uncertainty"),
        ("possibly", "uncertainty"),
        ("probably", "uncertainty"),
        ("might", "uncertainty"),
        // Qualifiers that weaken statements
        ("somewhat", "qualifier"),
        ("slightly", "qualifier"),
        ("fairly", "qualifier"),
        ("rather", "qualifier"),
        ("quite", "qualifier"),
        ("relatively", "qualifier"),
        // Vague intensifiers and minimizers
        ("very", "intensifier"),
        ("really", "intensifier"),
        ("just", "minimizer"),
        ("simply", "minimizer"),
        ("basically", "minimizer"),
        ("essentially", "minimizer"),
        ("actually", "filler"),
        // Approximations
        ("kind of", "approximation"),
        ("sort of", "approximation"),
        ("a bit", "approximation"),
        ("a little", "approximation"),
    ]
}

/// Filler phrase -> replacement. Bracketed replacements mean "cut entirely".
pub fn filler_phrases() -> &'static [(&'static str, &'static str)] {
    &[
        ("in order to", "to"),
        ("due to the fact that", "because"),
        ("it is important to note that", "[cut - start with the point]"),
        ("it should be noted that", "[cut - state directly]"),
        ("at the end of the day", "[cut - be specific]"),
        ("in terms of", "regarding"),
        ("with respect to", "about"),
        ("for the purpose of", "to"),
        ("in the event that", "if"),
        ("in this article", "[cut - they know where they are]"),
        ("in this tutorial", "[cut - they know where they are]"),
        ("in this guide", "[cut - they know where they are]"),
        ("as previously mentioned", "[cut or use specific reference]"),
        ("needless to say", "[cut - if needless, don't say it]"),
        ("it goes without saying", "[cut - just say it]"),
        ("as a matter of fact", "[cut - just state the fact]"),
        ("the fact that", "[rephrase to remove]"),
        ("in my opinion", "[cut - it's your writing]"),
        ("i think that", "[cut - be direct]"),
        ("i believe that", "[cut - be direct]"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hedge_categories_are_closed() {
        let valid = [
            "uncertainty",
            "qualifier",
            "intensifier",
            "minimizer",
            "filler",
            "approximation",
        ];
        for (word, cat) in hedge_words() {
            assert!(valid.contains(cat), "{word} has unknown category {cat}");
        }
    }

    #[test]
    fn fillers_are_multi_word() {
        for (phrase, _) in filler_phrases() {
            assert!(phrase.contains(' '), "{phrase} should be a phrase");
        }
    }
}
