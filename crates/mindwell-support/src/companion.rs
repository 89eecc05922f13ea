//! Scripted chat companion.
//!
//! Replies are chosen by keyword lookup over the user's message. Topics are
//! checked in a fixed priority order and the first match wins; messages that
//! match nothing get a supportive fallback in the selected language.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SupportError;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Companion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Topic {
    Anxiety,
    Sleep,
    Overwhelmed,
    Concentration,
    Isolation,
}

impl Topic {
    /// Priority order used when a message matches several topics.
    pub const ALL: [Topic; 5] = [
        Topic::Anxiety,
        Topic::Sleep,
        Topic::Overwhelmed,
        Topic::Concentration,
        Topic::Isolation,
    ];

    /// Lowercase keywords in English, Hindi and Urdu.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Anxiety => &["anxious", "anxiety", "exam", "चिंता", "فکر"],
            Topic::Sleep => &["sleep", "insomnia", "नींद", "نیند"],
            Topic::Overwhelmed => &["overwhelmed", "stress", "अभिभूत", "مغلوب"],
            Topic::Concentration => &["concentrat", "focus", "ध्यान", "توجہ"],
            Topic::Isolation => &["isolated", "lonely", "अकेला", "تنہا"],
        }
    }

    fn reply(self, language: Language) -> &'static str {
        match (self, language) {
            (Topic::Anxiety, Language::En) => {
                "I understand you're feeling anxious about exams. This is very common among students, especially in J&K where academic pressure can be intense. Let's work through some breathing exercises together. Take a deep breath in for 4 counts, hold for 4, then exhale for 6. Remember, you're not alone in this."
            }
            (Topic::Anxiety, Language::Hi) => {
                "मैं समझ सकता हूं कि आप परीक्षा को लेकर चिंतित हैं। यह छात्रों में बहुत आम है, खासकर J&K में जहां शैक्षणिक दबाव तीव्र हो सकता है। आइए कुछ सांस की तकनीकों का अभ्यास करते हैं।"
            }
            (Topic::Anxiety, Language::Ur) => {
                "میں سمجھ سکتا ہوں کہ آپ امتحان کو لے کر پریشان ہیں۔ یہ طلباء میں بہت عام ہے، خاص طور پر J&K میں جہاں تعلیمی دباؤ شدید ہو سکتا ہے۔"
            }
            (Topic::Sleep, Language::En) => {
                "Sleep difficulties are often connected to stress and anxiety. Given the unique challenges students face in our region, this is quite common. Try establishing a bedtime routine: no screens 1 hour before bed, some light reading, or meditation. Would you like me to guide you through a relaxation technique?"
            }
            (Topic::Sleep, Language::Hi) => {
                "नींद की समस्याएं अक्सर तनाव और चिंता से जुड़ी होती हैं। हमारे क्षेत्र के छात्रों के लिए यह काफी सामान्य है। सोने से पहले की दिनचर्या बनाने की कोशिश करें।"
            }
            (Topic::Sleep, Language::Ur) => {
                "نیند کی مسائل اکثر تناؤ اور پریشانی سے جڑے ہوتے ہیں۔ ہمارے علاقے کے طلباء کے لیے یہ کافی عام ہے۔"
            }
            (Topic::Overwhelmed, Language::En) => {
                "Feeling overwhelmed with studies is something many students experience. In J&K, we understand the additional pressures you might face. Let's break down your tasks into smaller, manageable pieces. What's the most urgent thing you need to focus on right now?"
            }
            (Topic::Overwhelmed, Language::Hi) => {
                "पढ़ाई से अभिभूत महसूस करना कई छात्रों का अनुभव है। J&K में हम समझते हैं कि आप पर अतिरिक्त दबाव हो सकते हैं।"
            }
            (Topic::Overwhelmed, Language::Ur) => {
                "پڑھائی سے مغلوب محسوس کرنا کئی طلباء کا تجربہ ہے۔ J&K میں ہم سمجھتے ہیں کہ آپ پر اضافی دباؤ ہو سکتے ہیں۔"
            }
            (Topic::Concentration, Language::En) => {
                "Difficulty concentrating can stem from stress, anxiety, or even trauma responses, which we know can affect students in our region. Try the Pomodoro technique: 25 minutes of focused study, then a 5-minute break. Also, ensure you're getting enough nutrition and water."
            }
            (Topic::Concentration, Language::Hi) => {
                "ध्यान केंद्रित करने में कठिनाई तनाव, चिंता या आघात की प्रतिक्रिया से हो सकती है। पोमोडोरो तकनीक आज़माएं।"
            }
            (Topic::Concentration, Language::Ur) => {
                "توجہ مرکوز کرنے میں دشواری تناؤ، پریشانی یا صدمے کی واکنش سے ہو سکتی ہے۔"
            }
            (Topic::Isolation, Language::En) => {
                "Feeling isolated is particularly challenging, and I understand this might be amplified by the unique social dynamics in J&K. Remember that reaching out, like you're doing now, is a brave first step. Consider joining study groups or online communities with fellow students."
            }
            (Topic::Isolation, Language::Hi) => {
                "अकेलापन महसूस करना विशेष रूप से चुनौतीपूर्ण है। याद रखें कि मदद मांगना, जैसा कि आप कर रहे हैं, एक साहसिक कदम है।"
            }
            (Topic::Isolation, Language::Ur) => {
                "تنہائی محسوس کرنا خاص طور پر مشکل ہے۔ یاد رکھیں کہ مدد مانگنا، جیسا کہ آپ کر رہے ہیں، ایک بہادری کا قدم ہے۔"
            }
        }
    }
}

fn greeting(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Hello! I'm your AI mental health companion. I'm here to listen and support you 24/7. How are you feeling today?"
        }
        Language::Hi => {
            "नमस्ते! मैं आपका AI मानसिक स्वास्थ्य साथी हूं। मैं 24/7 आपकी बात सुनने और सहायता करने के लिए यहां हूं। आज आप कैसा महसूस कर रहे हैं?"
        }
        Language::Ur => {
            "السلام علیکم! میں آپ کا AI ذہنی صحت کا ساتھی ہوں۔ میں 24/7 آپ کی بات سننے اور مدد کرنے کے لیے یہاں ہوں۔ آج آپ کیسا محسوس کر رہے ہیں؟"
        }
    }
}

fn fallback(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I hear you, and I want you to know that your feelings are valid. Many students in J&K face similar challenges. Can you tell me more about what's troubling you? I'm here to listen and support you."
        }
        Language::Hi => {
            "मैं आपकी बात सुन रहा हूं, और मैं चाहता हूं कि आप जानें कि आपकी भावनाएं वैध हैं। J&K के कई छात्र समान चुनौतियों का सामना करते हैं। क्या आप मुझे बता सकते हैं कि आपको क्या परेशान कर रहा है?"
        }
        Language::Ur => {
            "میں آپ کی بات سن رہا ہوں، اور میں چاہتا ہوں کہ آپ جانیں کہ آپ کے جذبات درست ہیں۔ J&K کے کئی طلباء اسی طرح کے مسائل کا سامنا کرتے ہیں۔ کیا آپ مجھے بتا سکتے ہیں کہ آپ کو کیا پریشان کر رہا ہے؟"
        }
    }
}

/// Suggested openers shown as one-tap buttons.
pub fn quick_prompts(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &[
            "I'm feeling anxious about exams",
            "I can't sleep well lately",
            "I feel overwhelmed with studies",
            "I'm having trouble concentrating",
            "I feel isolated from friends",
        ],
        Language::Hi => &[
            "मुझे परीक्षा की चिंता हो रही है",
            "मुझे रात में नींद नहीं आती",
            "मैं पढ़ाई से परेशान हूं",
            "मुझे ध्यान लगाने में समस्या है",
            "मैं दोस्तों से अलग महसूस करता हूं",
        ],
        Language::Ur => &[
            "مجھے امتحان کی فکر ہو رہی ہے",
            "مجھے رات کو نیند نہیں آتی",
            "میں پڑھائی سے پریشان ہوں",
            "مجھے توجہ مرکوز کرنے میں مشکل ہے",
            "میں دوستوں سے الگ محسوس کرتا ہوں",
        ],
    }
}

/// First topic, in priority order, with a keyword contained in `message`.
pub fn detect_topic(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    Topic::ALL
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|k| lower.contains(k)))
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub language: Language,
    pub topic: Option<Topic>,
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    fn new(sender: Sender, content: impl Into<String>, language: Language, topic: Option<Topic>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            language,
            topic,
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// A user message together with the companion's answer to it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exchange {
    pub message: ChatMessage,
    pub reply: ChatMessage,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Companion {
    language: Language,
}

impl Companion {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn greeting(&self) -> ChatMessage {
        ChatMessage::new(Sender::Companion, greeting(self.language), self.language, None)
    }

    /// Answer a user message. Blank messages are rejected.
    pub fn respond(&self, message: &str) -> Result<Exchange, SupportError> {
        let content = message.trim();
        if content.is_empty() {
            return Err(SupportError::EmptyMessage);
        }

        let topic = detect_topic(content);
        let reply = match topic {
            Some(t) => t.reply(self.language),
            None => fallback(self.language),
        };

        debug!(language = %self.language, topic = ?topic, "companion reply selected");

        Ok(Exchange {
            message: ChatMessage::new(Sender::User, content, self.language, None),
            reply: ChatMessage::new(Sender::Companion, reply, self.language, topic),
        })
    }
}
