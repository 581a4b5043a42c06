use tracing::debug;

use super::types::{AnswerSource, QueryRequest, QueryResponse, ServiceStatus, Topic};

/// Characters of the selection quoted back in a selection-based answer.
const SELECTION_PREVIEW_CHARS: usize = 200;

const NO_CONTEXT_ANSWER: &str =
    "Please select text from the book to get accurate answers based on the specific context you're reading.";

/// Keyword-matched answers for the robotics textbook.
///
/// When the reader has selected text, answers are constrained to that
/// selection and the topic table is not consulted.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    // Table order decides which topic wins when several keys match.
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn answer(&self, request: &QueryRequest) -> QueryResponse {
        let query = request.query.to_lowercase();

        if !request.selected_text.is_empty() {
            return self.answer_from_selection(request, &query);
        }

        match self.topics.iter().find(|t| query.contains(t.key.as_str())) {
            Some(topic) => {
                debug!(topic = %topic.key, "knowledge base hit");
                QueryResponse {
                    answer: topic.answer.clone(),
                    source: AnswerSource::KnowledgeBase,
                }
            }
            None => {
                debug!("knowledge base miss");
                QueryResponse {
                    answer: NO_CONTEXT_ANSWER.to_string(),
                    source: AnswerSource::None,
                }
            }
        }
    }

    fn answer_from_selection(&self, request: &QueryRequest, query: &str) -> QueryResponse {
        let preview: String = request.selected_text.chars().take(SELECTION_PREVIEW_CHARS).collect();
        let selection = request.selected_text.to_lowercase();

        let tail = if query.contains("physical ai") && selection.contains("physical ai") {
            "Physical AI refers to embodied intelligence systems as described in your selected text."
        } else if query.contains("robot") {
            "The selected text discusses robotic systems and their capabilities."
        } else {
            "The selected text provides relevant context for your question."
        };

        QueryResponse {
            answer: format!(
                "Based on your selection: {}... In response to '{}': {}",
                preview, request.query, tail
            ),
            source: AnswerSource::SelectedText,
        }
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            name: "Physical AI Textbook Knowledge Base".to_string(),
            status: "operational".to_string(),
            topics: self.topics.len(),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new(default_topics())
    }
}

pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "physical_ai",
            "Physical AI represents embodied intelligence that interacts directly with the physical world, using sensors and actuators to perceive and act in real-time environments.",
        ),
        Topic::new(
            "humanoid_robots",
            "Humanoid robots like Tesla Optimus, Boston Dynamics Atlas, and Figure 01 are designed to resemble humans and operate in human-centered environments.",
        ),
        Topic::new(
            "ros2",
            "ROS 2 (Robot Operating System) is middleware for robot control, providing nodes, topics, and services for communication.",
        ),
        Topic::new(
            "sensors",
            "Modern robots use vision systems (cameras, LiDAR), proprioceptive sensors (encoders, IMUs), and tactile sensors for environmental awareness.",
        ),
        Topic::new(
            "kinematics",
            "Forward kinematics calculates end effector position from joint angles, while inverse kinematics determines required joint angles for desired positions.",
        ),
    ]
}

pub fn example_queries() -> Vec<QueryRequest> {
    vec![
        QueryRequest::new("Tell me about ros2 nodes"),
        QueryRequest::new("How do sensors work?"),
        QueryRequest::new("What is physical ai?").with_selection(
            "Physical AI represents embodied intelligence that acts in the physical world.",
        ),
        QueryRequest::new("What is a gripper?"),
    ]
}
