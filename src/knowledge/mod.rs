mod suggestions;
mod topics;

pub use suggestions::suggestions_for;

/// Number of characters kept in a topic preview before the ellipsis.
pub const PREVIEW_CHARS: usize = 100;

/// A canned answer with the keywords that trigger it.
#[derive(Debug)]
pub struct Topic {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
    pub quick_replies: &'static [&'static str],
}

impl Topic {
    /// Lowercased `message` contains one of this topic's keywords.
    fn matches(&self, message_lower: &str) -> bool {
        self.keywords.iter().any(|kw| message_lower.contains(kw))
    }

    /// First `PREVIEW_CHARS` characters of the response followed by "...".
    pub fn preview(&self) -> String {
        let mut preview: String = self.response.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }
}

/// The static set of topics plus the fallback answer.
///
/// Built once from compiled-in data and never mutated, so a single
/// `&'static KnowledgeBase` is shared by every worker.
#[derive(Debug)]
pub struct KnowledgeBase {
    topics: &'static [Topic],
    fallback: &'static Topic,
}

static BUILTIN: KnowledgeBase = KnowledgeBase {
    topics: &topics::TOPICS,
    fallback: &topics::FALLBACK,
};

impl KnowledgeBase {
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Matchable topics in declaration order. Excludes the fallback.
    pub fn topics(&self) -> &[Topic] {
        self.topics
    }

    pub fn fallback(&self) -> &Topic {
        self.fallback
    }

    /// Returns the first topic, in declaration order, with a keyword
    /// contained in the lowercased message, or the fallback when none hit.
    pub fn find_match(&self, message: &str) -> &Topic {
        let message_lower = message.to_lowercase();
        self.topics
            .iter()
            .find(|topic| topic.matches(&message_lower))
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn declaration_order_is_fixed() {
        let ids: Vec<_> = kb().topics().iter().map(|t| t.id).collect();
        assert_eq!(ids, ["pipelines", "etl", "streaming", "cloud", "sql", "airflow"]);
    }

    #[test]
    fn every_topic_has_keywords() {
        for topic in kb().topics() {
            assert!(!topic.keywords.is_empty(), "{} has no keywords", topic.id);
        }
        assert!(kb().fallback().keywords.is_empty());
        assert_eq!(kb().fallback().id, "default");
    }

    #[test]
    fn every_keyword_routes_to_its_owner_in_any_case_and_position() {
        for topic in kb().topics() {
            for kw in topic.keywords {
                // A keyword may also contain an earlier topic's keyword, so
                // the expected owner is whichever topic wins first.
                let expected = kb()
                    .topics()
                    .iter()
                    .find(|t| t.matches(kw))
                    .map(|t| t.id);
                assert_eq!(expected, Some(topic.id), "keyword {kw} shadowed");

                let shouted = format!("PLEASE EXPLAIN {} TO ME", kw.to_uppercase());
                assert_eq!(kb().find_match(&shouted).id, topic.id);
                assert_eq!(kb().find_match(kw).id, topic.id);
            }
        }
    }

    #[test]
    fn tie_breaks_on_declaration_order() {
        // "pipeline" (pipelines) and "kafka" (streaming) both hit.
        assert_eq!(kb().find_match("What is a Kafka pipeline?").id, "pipelines");
        // "kafka" (streaming) and "aws" (cloud) both hit.
        assert_eq!(kb().find_match("Kafka on AWS").id, "streaming");
    }

    #[test]
    fn unmatched_messages_fall_back() {
        for msg in ["", "   ", "What's your favourite colour?", "xyzzy 42", "Bonjour!"] {
            assert_eq!(kb().find_match(msg).id, "default", "message {msg:?}");
        }
    }

    #[test]
    fn substring_containment_not_word_match() {
        // "download" contains the etl keyword "load".
        assert_eq!(kb().find_match("download speeds").id, "etl");
    }

    #[test]
    fn preview_truncates_by_character() {
        for topic in kb().topics() {
            let preview = topic.preview();
            assert!(preview.ends_with("..."));
            assert!(preview.chars().count() <= PREVIEW_CHARS + 3);
            let head: String = topic.response.chars().take(PREVIEW_CHARS).collect();
            assert!(preview.starts_with(&head));
        }
    }
}
