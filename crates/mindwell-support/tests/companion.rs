use mindwell_support::companion::{Companion, Sender, Topic, detect_topic, quick_prompts};
use mindwell_support::error::SupportError;
use mindwell_support::language::Language;

#[test]
fn keywords_select_topics() {
    assert_eq!(detect_topic("I'm feeling anxious about exams"), Some(Topic::Anxiety));
    assert_eq!(detect_topic("I can't SLEEP well lately"), Some(Topic::Sleep));
    assert_eq!(detect_topic("so much stress"), Some(Topic::Overwhelmed));
    assert_eq!(detect_topic("I can't focus"), Some(Topic::Concentration));
    assert_eq!(detect_topic("I feel lonely"), Some(Topic::Isolation));
    assert_eq!(detect_topic("hello there"), None);
}

#[test]
fn earlier_topics_win_when_several_match() {
    assert_eq!(detect_topic("exam stress keeps me from sleep"), Some(Topic::Anxiety));
    assert_eq!(detect_topic("stress and no focus"), Some(Topic::Overwhelmed));
}

#[test]
fn native_script_keywords_match() {
    assert_eq!(detect_topic("मुझे रात में नींद नहीं आती"), Some(Topic::Sleep));
    assert_eq!(detect_topic("مجھے امتحان کی فکر ہو رہی ہے"), Some(Topic::Anxiety));
}

#[test]
fn english_quick_prompts_cover_every_topic() {
    let topics: Vec<Option<Topic>> = quick_prompts(Language::En)
        .iter()
        .map(|p| detect_topic(p))
        .collect();
    let expected: Vec<Option<Topic>> = Topic::ALL.into_iter().map(Some).collect();
    assert_eq!(topics, expected);

    for language in Language::ALL {
        assert_eq!(quick_prompts(language).len(), 5);
    }
}

#[test]
fn reply_uses_selected_language() {
    let companion = Companion::new(Language::Hi);
    let exchange = companion.respond("I can't sleep").unwrap();

    assert_eq!(exchange.message.sender, Sender::User);
    assert_eq!(exchange.message.content, "I can't sleep");
    assert_eq!(exchange.reply.sender, Sender::Companion);
    assert_eq!(exchange.reply.language, Language::Hi);
    assert_eq!(exchange.reply.topic, Some(Topic::Sleep));
    assert!(exchange.reply.content.starts_with("नींद"));
    assert_ne!(exchange.message.id, exchange.reply.id);
}

#[test]
fn unmatched_message_gets_fallback() {
    let exchange = Companion::default().respond("  just checking in  ").unwrap();

    assert_eq!(exchange.message.content, "just checking in");
    assert_eq!(exchange.reply.topic, None);
    assert!(exchange.reply.content.starts_with("I hear you"));
}

#[test]
fn blank_message_rejected() {
    let err = Companion::default().respond("   ").unwrap_err();
    assert_eq!(err, SupportError::EmptyMessage);
}

#[test]
fn greeting_per_language() {
    assert!(Companion::new(Language::En).greeting().content.starts_with("Hello!"));
    assert!(Companion::new(Language::Ur).greeting().content.starts_with("السلام علیکم"));
}

#[test]
fn language_parsing() {
    assert_eq!("UR".parse::<Language>().unwrap(), Language::Ur);
    assert_eq!(
        "fr".parse::<Language>(),
        Err(SupportError::UnsupportedLanguage("fr".to_string()))
    );
}
