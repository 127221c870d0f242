use pretty_assertions::assert_eq;
use rstest::rstest;
use text_classifier::{
    inference::{Label, postprocess, predict_text},
    model::{KeywordClassifier, NEGATIVE_CONFIDENCE, POSITIVE_CONFIDENCE},
};

#[rstest]
#[case("good")]
#[case("this is good")]
#[case("goodbye")]
#[case("not good at all")]
#[case("  good  \n")]
fn test_keyword_texts_are_positive(#[case] text: &str) {
    let prediction = predict_text(&KeywordClassifier::new(), text).unwrap();
    assert_eq!(prediction.label, Label::Positive);
    assert_eq!(prediction.confidence, POSITIVE_CONFIDENCE);
}

#[rstest]
#[case("terrible")]
#[case("")]
#[case("Good")]
#[case("g o o d")]
#[case("great")]
fn test_other_texts_are_negative(#[case] text: &str) {
    let prediction = predict_text(&KeywordClassifier::new(), text).unwrap();
    assert_eq!(prediction.label, Label::Negative);
    assert_eq!(prediction.confidence, NEGATIVE_CONFIDENCE);
}

#[test]
fn test_large_input() {
    let text = format!("{}good", "x".repeat(10_000));
    let prediction = predict_text(&KeywordClassifier::new(), &text).unwrap();
    assert_eq!(prediction.label, Label::Positive);
}

#[test]
fn test_label_matches_threshold_everywhere() {
    for step in 0..=1000 {
        let confidence = f64::from(step) / 1000.0;
        let expected = if confidence > 0.5 {
            Label::Positive
        } else {
            Label::Negative
        };
        assert_eq!(postprocess(confidence), expected, "confidence {}", confidence);
    }
}
