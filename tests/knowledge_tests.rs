use robokit::knowledge::{AnswerSource, KnowledgeBase, QueryRequest, Topic};

#[test]
fn test_keyword_lookup() {
    let kb = KnowledgeBase::default();
    let response = kb.answer(&QueryRequest::new("What is ROS2?"));
    assert_eq!(response.source, AnswerSource::KnowledgeBase);
    assert!(response.answer.starts_with("ROS 2 (Robot Operating System)"));
}

#[test]
fn test_first_topic_in_table_order_wins() {
    let kb = KnowledgeBase::default();
    let response = kb.answer(&QueryRequest::new("kinematics and sensors"));
    assert!(response.answer.starts_with("Modern robots use vision systems"), "sensors precedes kinematics");
}

#[test]
fn test_keys_match_as_literal_substrings() {
    let kb = KnowledgeBase::default();
    // The key is `physical_ai`; a space does not match it.
    let response = kb.answer(&QueryRequest::new("what is physical ai"));
    assert_eq!(response.source, AnswerSource::None);
    assert!(response.answer.starts_with("Please select text from the book"));
}

#[test]
fn test_selection_answers_ignore_topic_table() {
    let kb = KnowledgeBase::default();
    let request = QueryRequest::new("Explain ros2 robots").with_selection("Nodes talk over topics.");
    let response = kb.answer(&request);
    assert_eq!(response.source, AnswerSource::SelectedText);
    assert_eq!(
        response.answer,
        "Based on your selection: Nodes talk over topics.... In response to 'Explain ros2 robots': \
         The selected text discusses robotic systems and their capabilities."
    );
}

#[test]
fn test_selection_physical_ai_requires_both_sides() {
    let kb = KnowledgeBase::default();

    let both = kb.answer(&QueryRequest::new("What is Physical AI?").with_selection("PHYSICAL AI is embodied."));
    assert!(both.answer.ends_with("Physical AI refers to embodied intelligence systems as described in your selected text."));

    let query_only = kb.answer(&QueryRequest::new("What is Physical AI?").with_selection("Sensors and actuators."));
    assert!(query_only.answer.ends_with("The selected text provides relevant context for your question."));
}

#[test]
fn test_selection_preview_is_truncated() {
    let kb = KnowledgeBase::default();
    let selection = "x".repeat(300);
    let response = kb.answer(&QueryRequest::new("why?").with_selection(selection));
    let expected_prefix = format!("Based on your selection: {}... ", "x".repeat(200));
    assert!(response.answer.starts_with(&expected_prefix));
    assert!(!response.answer.contains(&"x".repeat(201)));
}

#[test]
fn test_custom_topics_and_status() {
    let kb = KnowledgeBase::new(vec![Topic::new("lidar", "Lidar measures range with light.")]);
    assert_eq!(kb.answer(&QueryRequest::new("how does LIDAR work")).answer, "Lidar measures range with light.");

    let status = kb.status();
    assert_eq!(status.status, "operational");
    assert_eq!(status.topics, 1);
    assert_eq!(KnowledgeBase::default().topics().len(), 5);
}

#[test]
fn test_request_deserializes_without_selection() {
    let request: QueryRequest = serde_json::from_str(r#"{"query": "sensors"}"#).unwrap();
    assert!(request.selected_text.is_empty());
    assert_eq!(serde_json::to_string(&AnswerSource::KnowledgeBase).unwrap(), "\"knowledge_base\"");
}
