use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_archived: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 学生是否可以选修该课程
    pub fn is_enrollable(&self) -> bool {
        self.is_active && !self.is_archived
    }
}

// 章节实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Chapter {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archived_course_is_not_enrollable() {
        let mut course = Course {
            id: 1,
            title: "Rust 101".into(),
            description: None,
            is_active: true,
            is_archived: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert!(course.is_enrollable());

        course.is_archived = true;
        assert!(!course.is_enrollable());

        course.is_archived = false;
        course.is_active = false;
        assert!(!course.is_enrollable());
    }
}
