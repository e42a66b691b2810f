use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-course progress inside a [`ProgressRecord`]. Unique per course id.
/// Append/update only; entries are never removed once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub completed: bool,
    #[serde(rename = "quizScore", default, skip_serializing_if = "Option::is_none")]
    pub quiz_score: Option<u32>,
    #[serde(rename = "quizPassed", default, skip_serializing_if = "Option::is_none")]
    pub quiz_passed: Option<bool>,
    #[serde(rename = "nftMinted", default, skip_serializing_if = "Option::is_none")]
    pub nft_minted: Option<bool>,
    /// Updated on every mutation.
    #[serde(rename = "lastAccessed")]
    pub last_accessed: DateTime<Utc>,
}

impl EnrollmentRecord {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            completed: false,
            quiz_score: None,
            quiz_passed: None,
            nft_minted: None,
            last_accessed: Utc::now(),
        }
    }
}

/// The durable per-wallet state: all enrollments, scores, and certificate
/// status. One record per wallet address, never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub wallet: String,
    #[serde(rename = "enrolledCourses")]
    pub enrolled_courses: Vec<EnrollmentRecord>,
}

impl ProgressRecord {
    pub fn new(wallet: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
            enrolled_courses: Vec::new(),
        }
    }

    pub fn enrollment(&self, course_id: &str) -> Option<&EnrollmentRecord> {
        self.enrolled_courses
            .iter()
            .find(|c| c.course_id == course_id)
    }

    pub fn enrollment_mut(&mut self, course_id: &str) -> Option<&mut EnrollmentRecord> {
        self.enrolled_courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Optional fields absent from a stored record must deserialize, and
    /// must not be written back as nulls.
    #[test]
    fn stored_record_schema_is_unchanged() {
        let stored = r#"{
            "wallet": "0x1111111111111111111111111111111111111111",
            "enrolledCourses": [
                {
                    "courseId": "c001",
                    "completed": false,
                    "lastAccessed": "2024-05-01T12:00:00Z"
                }
            ]
        }"#;

        let record: ProgressRecord = serde_json::from_str(stored).unwrap();
        let entry = record.enrollment("c001").unwrap();
        assert_eq!(entry.quiz_score, None);
        assert_eq!(entry.quiz_passed, None);
        assert_eq!(entry.nft_minted, None);

        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("quizScore"));
        assert!(!out.contains("nftMinted"));
        assert!(out.contains("\"courseId\":\"c001\""));
        assert!(out.contains("\"lastAccessed\""));
    }

    #[test]
    fn full_record_round_trips_exactly() {
        let mut record = ProgressRecord::new("0x2222222222222222222222222222222222222222");
        let mut entry = EnrollmentRecord::new("c002");
        entry.completed = true;
        entry.quiz_score = Some(85);
        entry.quiz_passed = Some(true);
        entry.nft_minted = Some(true);
        record.enrolled_courses.push(entry);

        let json = serde_json::to_string(&record).unwrap();
        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
