//! Flesch readability scoring over the cleaned prose

use crate::models::{round1, round2, Measured, ReadabilityScores};
use crate::profiles::AudienceProfile;
use crate::segment::SegmentedText;
use crate::syllables::count_syllables;

/// Compute readability scores, or `InsufficientContent` when the prose has no
/// eligible words or sentences. Never reports a numeric grade of zero for
/// empty input.
pub fn analyze(seg: &SegmentedText, profile: &AudienceProfile) -> Measured<ReadabilityScores> {
    if seg.words.is_empty() || seg.sentences.is_empty() {
        return Measured::InsufficientContent;
    }

    let word_count = seg.words.len();
    let sentence_count = seg.sentences.len();
    let syllable_count: u32 = seg.words.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;

    let flesch_ease =
        (206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word).clamp(0.0, 100.0);
    let fk_grade = (0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59).max(0.0);

    let meets_target = fk_grade <= profile.max_grade;

    Measured::Ok(ReadabilityScores {
        word_count,
        sentence_count,
        syllable_count,
        avg_sentence_length: round1(avg_sentence_length),
        avg_syllables_per_word: round2(avg_syllables_per_word),
        flesch_reading_ease: round1(flesch_ease),
        flesch_kincaid_grade: round1(fk_grade),
        general_band: general_band(flesch_ease).to_string(),
        audience_fit: audience_fit(flesch_ease, fk_grade, profile),
        meets_audience_target: meets_target,
    })
}

/// Audience-independent interpretation of the ease score
fn general_band(ease: f64) -> &'static str {
    if ease >= 80.0 {
        "Very easy to read (conversational)"
    } else if ease >= 70.0 {
        "Easy to read (plain English)"
    } else if ease >= 60.0 {
        "Standard (general audience)"
    } else if ease >= 50.0 {
        "Fairly difficult (educated audience)"
    } else if ease >= 30.0 {
        "Difficult (technical/academic)"
    } else {
        "Very difficult (specialized)"
    }
}

/// Verdict relative to the audience's grade and ease targets
fn audience_fit(ease: f64, grade: f64, profile: &AudienceProfile) -> String {
    if grade <= profile.max_grade && ease >= profile.target_ease {
        format!("Good fit for {} audience", profile.name)
    } else if grade <= profile.max_grade + 2.0 {
        format!("Slightly advanced for {} audience", profile.name)
    } else {
        format!("Too complex for {} audience - simplify", profile.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Audience;
    use crate::segment::segment;

    #[test]
    fn simple_prose_scores_easy() {
        let seg = segment("The cat sat on the mat. The dog ran to the park.");
        let profile = Audience::Beginner.profile();
        let scores = analyze(&seg, &profile);
        let s = scores.as_ok().expect("has scores");
        assert!(s.flesch_reading_ease > 70.0);
        assert!(s.flesch_kincaid_grade < 8.0);
        assert!(s.meets_audience_target);
        assert!(s.audience_fit.contains("Good fit"));
    }

    #[test]
    fn no_words_is_insufficient_not_zero() {
        let seg = segment("");
        let profile = Audience::Intermediate.profile();
        assert!(analyze(&seg, &profile).is_insufficient());

        let code_only = segment("```\nlet x = 1;\n```");
        assert!(analyze(&code_only, &profile).is_insufficient());
    }

    #[test]
    fn ease_clamped_on_pathological_runon() {
        // One extremely long sentence with many multisyllabic words
        let text = format!(
            "{} end.",
            ["configuration initialization authentication"; 40].join(" ")
        );
        let seg = segment(&text);
        let profile = Audience::Expert.profile();
        let s = analyze(&seg, &profile);
        let s = s.as_ok().expect("has scores");
        assert!(s.flesch_reading_ease >= 0.0);
        assert!(s.flesch_reading_ease <= 100.0);
        assert!(s.flesch_kincaid_grade >= 0.0);
    }

    #[test]
    fn grade_floored_at_zero() {
        let seg = segment("Go. Do. Be. So.");
        let profile = Audience::Beginner.profile();
        let s = analyze(&seg, &profile);
        let s = s.as_ok().expect("has scores");
        assert!(s.flesch_kincaid_grade >= 0.0);
    }
}
