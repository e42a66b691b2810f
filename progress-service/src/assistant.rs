use std::time::Duration;

use anyhow::Result;
use rand::seq::IndexedRandom;
use schema::Course;
use tracing::debug;

/// Produces help and roadmap text from catalog and progress inputs. Pure
/// request/response; the core supplies inputs and stores nothing from
/// the reply. Real implementations call a model API.
pub trait TextGenerator {
    async fn quiz_help(&self, question_id: &str) -> Result<String>;
    async fn roadmap(&self, course_ids: &[String]) -> Result<String>;
}

/// Simulated latency of the text-generation backend.
const HELP_DELAY: Duration = Duration::from_millis(1000);
const ROADMAP_DELAY: Duration = Duration::from_millis(1500);

const DEFAULT_HELP: &str = "For this question, review the key concepts in the course material. Focus on understanding the foundational principles rather than memorizing facts. Think about how this concept relates to the broader blockchain ecosystem.";

const CHAT_FALLBACKS: [&str; 4] = [
    "That's an interesting question about blockchain technology. To give you the best answer, could you provide a bit more context about what you're trying to learn?",
    "I'm here to help with your blockchain learning journey. Could you elaborate on your question so I can provide more specific guidance?",
    "As your AI learning assistant, I'm continuously improving. For this particular question, I'd need some additional details to give you the most helpful response.",
    "I'd be happy to help with your blockchain studies. To offer the most relevant insights, could you share what course or topic you're currently focusing on?",
];

/// Keyword-matched canned text, standing in for a model integration.
#[derive(Clone, Debug)]
pub struct KeywordAssistant {
    courses: Vec<Course>,
}

impl KeywordAssistant {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Canned chat reply chosen by keyword; a random fallback otherwise.
    pub fn chat_reply(&self, message: &str) -> String {
        let lower = message.to_lowercase();

        if lower.contains("blockchain") && lower.contains("what") {
            return "Blockchain is a distributed ledger technology that enables secure, transparent, and immutable record-keeping without requiring a trusted third party. It's the foundation of cryptocurrencies like Bitcoin but has many other applications beyond finance.".to_string();
        }
        if lower.contains("smart") && lower.contains("contract") {
            return "Smart contracts are self-executing contracts with the terms directly written into code. They automatically enforce and execute agreements when predetermined conditions are met, eliminating the need for intermediaries.".to_string();
        }
        if lower.contains("nft") || lower.contains("non-fungible") {
            return "NFTs (Non-Fungible Tokens) are unique digital assets verified using blockchain technology. Unlike cryptocurrencies such as Bitcoin, each NFT has distinct information and properties making it non-interchangeable.".to_string();
        }
        if lower.contains("defi") || lower.contains("decentralized finance") {
            return "DeFi (Decentralized Finance) refers to financial applications built on blockchain technologies that don't rely on centralized financial intermediaries. These include lending platforms, decentralized exchanges, and yield farming opportunities.".to_string();
        }
        if lower.contains("course") && lower.contains("recommend") {
            return "Based on your interests, I'd recommend starting with our 'Blockchain Fundamentals' course to build a solid foundation. Then, depending on your goals, you might explore 'Smart Contract Development' or 'NFT Creation and Marketplaces'.".to_string();
        }
        if lower.contains("difficult") || lower.contains("struggling") {
            return "Learning blockchain concepts can be challenging at first. I suggest breaking your study into smaller sessions, focusing on practical applications, and joining our community forums to discuss concepts with peers. Would you like me to explain a specific topic in more detail?".to_string();
        }

        CHAT_FALLBACKS
            .choose(&mut rand::rng())
            .expect("fallback list is not empty")
            .to_string()
    }

    fn help_for(question_id: &str) -> &'static str {
        match question_id {
            "q001" => "This question is asking about the primary purpose of blockchain technology. Think about what fundamental problem blockchain was designed to solve - the need for trusted intermediaries in digital transactions.",
            "q002" => "When considering the consensus mechanism used by Bitcoin, remember that it requires miners to solve complex mathematical problems to validate transactions and create new blocks.",
            "q006" => "For Ethereum smart contract development, consider which programming language was specifically created for this purpose.",
            "q011" => "Think about how traditional financial services require middlemen like banks, and how DeFi aims to change this model.",
            "q016" => "This question is simply asking what the NFT acronym stands for. Remember that these tokens have a special property that makes each one distinct from others.",
            _ => DEFAULT_HELP,
        }
    }

    fn build_roadmap(&self, course_ids: &[String]) -> String {
        let selected: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| course_ids.contains(&c.id))
            .collect();

        let mut roadmap = String::from("# Your Personalized Learning Roadmap\n\n");
        let mut week = 1;

        for course in &selected {
            roadmap.push_str(&format!("## {}\n", course.title));

            // Two study weeks per course, then an assessment week.
            for i in 0..2 {
                let module_title = course
                    .modules
                    .get(i.min(course.modules.len().saturating_sub(1)))
                    .map(|m| m.title.as_str())
                    .unwrap_or("Course material");
                roadmap.push_str(&format!("\n### Week {week}: {module_title}\n"));
                roadmap.push_str("* Study core concepts (3 hours)\n");
                roadmap.push_str("* Complete practice exercises (2 hours)\n");
                roadmap.push_str("* Join community discussion (1 hour)\n");
                week += 1;
            }

            roadmap.push_str(&format!("\n### Week {week}: Assessment\n"));
            roadmap.push_str("* Review all modules (3 hours)\n");
            roadmap.push_str("* Take practice quizzes (2 hours)\n");
            roadmap.push_str("* Complete final assessment (1 hour)\n");
            week += 1;

            roadmap.push('\n');
        }

        roadmap.push_str("## Next Steps\n\n");
        if !course_ids.iter().any(|id| id == "c003") && !course_ids.iter().any(|id| id == "c004") {
            roadmap.push_str("* Consider taking an advanced course like \"DeFi Protocols and Tokenomics\" to further your knowledge\n");
        }
        roadmap.push_str("* Join blockchain developer communities\n");
        roadmap.push_str("* Start building your own projects\n");

        roadmap
    }
}

impl TextGenerator for KeywordAssistant {
    async fn quiz_help(&self, question_id: &str) -> Result<String> {
        tokio::time::sleep(HELP_DELAY).await;
        debug!(question_id, "generated quiz help");
        Ok(Self::help_for(question_id).to_string())
    }

    async fn roadmap(&self, course_ids: &[String]) -> Result<String> {
        tokio::time::sleep(ROADMAP_DELAY).await;
        debug!(courses = course_ids.len(), "generated roadmap");
        Ok(self.build_roadmap(course_ids))
    }
}
