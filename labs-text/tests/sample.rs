use labs_text::{remove_words, Text};

const SAMPLE: &str = "Сонце світить яскраво.     Гарний день для прогулянки в парку!
Проте     4
сильний вітер псує настрій. Хмари пливуть швидко...";

#[test]
fn test_text_model_removes_consonant_words() {
    let mut text = Text::parse(SAMPLE);
    assert_eq!(text.sentences().len(), 4);
    let removed = text.remove_words_by(|word| word.starts_with_consonant() && word.len() == 5);
    assert_eq!(removed, 5);
    insta::assert_snapshot!(text.to_string(), @"світить яскраво. Гарний день для прогулянки в! 4 сильний псує настрій. пливуть швидко...");
}

#[test]
fn test_text_model_rendering_normalizes_whitespace() {
    let text = Text::parse(SAMPLE);
    insta::assert_snapshot!(text.to_string(), @"Сонце світить яскраво. Гарний день для прогулянки в парку! Проте 4 сильний вітер псує настрій. Хмари пливуть швидко...");
}

#[test]
fn test_filter_keeps_line_structure() {
    let filtered = remove_words(SAMPLE, 5).unwrap();
    assert_eq!(filtered.removed, 5);
    // a removed word at the start of a line leaves its separator behind
    assert_eq!(
        filtered.text,
        "світить яскраво. Гарний день для прогулянки в !\n 4\nсильний псує настрій. пливуть швидко..."
    );
}
