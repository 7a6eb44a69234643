const PIPELINE: &[&str] = &[
    "How do I monitor pipeline failures?",
    "What's the best way to handle late-arriving data?",
    "How do I implement incremental processing?",
];

const STREAMING: &[&str] = &[
    "How do I handle out-of-order events?",
    "What's the difference between at-least-once and exactly-once delivery?",
    "How do I scale Kafka consumers?",
];

const CLOUD: &[&str] = &[
    "What are best practices for cloud cost optimization?",
    "How do I set up disaster recovery?",
    "What's the right warehouse for my use case?",
];

const GENERAL: &[&str] = &[
    "Tell me about data pipelines",
    "What's the difference between batch and streaming?",
    "How do I choose a cloud platform?",
];

/// Follow-up questions for a conversation context.
///
/// Uses its own keyword sets, independent of the topic matcher.
pub fn suggestions_for(context: &str) -> &'static [&'static str] {
    let context = context.to_lowercase();
    let has = |kw: &str| context.contains(kw);

    if has("pipeline") {
        PIPELINE
    } else if has("streaming") || has("kafka") {
        STREAMING
    } else if has("cloud") || has("aws") || has("gcp") {
        CLOUD
    } else {
        GENERAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_list_by_context() {
        assert_eq!(suggestions_for("tell me about kafka streaming"), STREAMING);
        assert_eq!(suggestions_for("Our Pipeline keeps failing"), PIPELINE);
        assert_eq!(suggestions_for("moving to GCP"), CLOUD);
        assert_eq!(suggestions_for(""), GENERAL);
        assert_eq!(suggestions_for("airflow dags"), GENERAL);
    }

    #[test]
    fn pipeline_wins_over_streaming() {
        assert_eq!(suggestions_for("kafka pipeline"), PIPELINE);
    }
}
