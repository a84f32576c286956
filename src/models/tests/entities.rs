use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Test {
    pub id: i64,
    pub course_id: i64,
    pub chapter_id: Option<i64>,
    pub title: String,
    /// 所有题目分值之和，题目变更时由存储层重算
    pub total_marks: i32,
    pub is_active: bool,
    pub is_published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Test {
    /// 是否可以分配给学生作答
    pub fn is_assignable(&self) -> bool {
        self.is_active && self.is_published
    }
}

// 题目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Question {
    pub id: i64,
    pub test_id: i64,
    pub text: String,
    pub marks: i32,
}

// 选项实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AnswerOption {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

// 分配（尝试）状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub enum AssignmentStatus {
    Assigned,  // 已分配，未开始
    Started,   // 作答中
    Submitted, // 已提交，待判分
    Evaluated, // 已判分
    Cancelled, // 已取消
}

impl AssignmentStatus {
    /// 是否可以进入作答：只有尚未开始的指派可以开始
    pub fn can_start(&self) -> bool {
        matches!(self, AssignmentStatus::Assigned)
    }

    /// 是否可以提交答卷：必须先开始作答
    pub fn can_submit(&self) -> bool {
        matches!(self, AssignmentStatus::Started)
    }

    /// 本次尝试是否已经完成（提交或判分后不可再作答）
    pub fn is_completed(&self) -> bool {
        matches!(self, AssignmentStatus::Submitted | AssignmentStatus::Evaluated)
    }

    /// 尝试尚未了结：阻止重复指派，也是可撤销的范围
    pub fn is_unfinished(&self) -> bool {
        matches!(self, AssignmentStatus::Assigned | AssignmentStatus::Started)
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentStatus>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Assigned => write!(f, "assigned"),
            AssignmentStatus::Started => write!(f, "started"),
            AssignmentStatus::Submitted => write!(f, "submitted"),
            AssignmentStatus::Evaluated => write!(f, "evaluated"),
            AssignmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(AssignmentStatus::Assigned),
            "started" => Ok(AssignmentStatus::Started),
            "submitted" => Ok(AssignmentStatus::Submitted),
            "evaluated" => Ok(AssignmentStatus::Evaluated),
            "cancelled" => Ok(AssignmentStatus::Cancelled),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 测验分配实体：一条记录即一次尝试
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestAssignment {
    pub id: i64,
    pub student_id: i64,
    pub test_id: i64,
    pub attempt_number: i32,
    pub status: AssignmentStatus,
    pub obtained_marks: Option<i32>,
    pub total_marks: Option<i32>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub evaluated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TestAssignment {
    /// 截止时间已过则不允许开始或提交
    pub fn is_overdue(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.due_at.is_some_and(|due| now > due)
    }
}

// 学生作答实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct StudentAnswer {
    pub id: i64,
    pub assignment_id: i64,
    pub question_id: i64,
    pub selected_option_id: i64,
    pub is_correct: bool,
    pub marks_obtained: i32,
    pub answered_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(
            "evaluated".parse::<AssignmentStatus>().unwrap(),
            AssignmentStatus::Evaluated
        );
        assert_eq!(AssignmentStatus::Cancelled.to_string(), "cancelled");
        assert!("graded".parse::<AssignmentStatus>().is_err());
    }

    #[test]
    fn test_status_transitions() {
        assert!(AssignmentStatus::Assigned.can_start());
        assert!(AssignmentStatus::Started.can_submit());
        assert!(!AssignmentStatus::Submitted.can_submit());
        assert!(!AssignmentStatus::Cancelled.can_start());
        assert!(AssignmentStatus::Evaluated.is_completed());
        assert!(!AssignmentStatus::Started.is_completed());
    }

    #[test]
    fn test_submit_requires_started_attempt() {
        // 未开始作答不能直接交卷
        assert!(!AssignmentStatus::Assigned.can_submit());
        assert!(!AssignmentStatus::Evaluated.can_submit());
        assert!(!AssignmentStatus::Cancelled.can_submit());
    }

    #[test]
    fn test_started_attempt_cannot_restart() {
        // 开始作答后不能再次开始，避免覆盖 started_at
        assert!(!AssignmentStatus::Started.can_start());
    }

    #[test]
    fn test_unfinished_statuses_block_reassignment() {
        assert!(AssignmentStatus::Assigned.is_unfinished());
        assert!(AssignmentStatus::Started.is_unfinished());
        // 已判分或已撤销的学生可以再次被指派
        assert!(!AssignmentStatus::Evaluated.is_unfinished());
        assert!(!AssignmentStatus::Submitted.is_unfinished());
        assert!(!AssignmentStatus::Cancelled.is_unfinished());
    }

    #[test]
    fn test_unpublished_test_is_not_assignable() {
        let mut test = Test {
            id: 1,
            course_id: 1,
            chapter_id: None,
            title: "Quiz 1".into(),
            total_marks: 10,
            is_active: true,
            is_published: false,
            created_at: chrono::Utc::now(),
        };
        assert!(!test.is_assignable());

        test.is_published = true;
        assert!(test.is_assignable());

        test.is_active = false;
        assert!(!test.is_assignable());
    }

    #[test]
    fn test_overdue_check() {
        let now = chrono::Utc::now();
        let assignment = TestAssignment {
            id: 1,
            student_id: 1,
            test_id: 1,
            attempt_number: 1,
            status: AssignmentStatus::Assigned,
            obtained_marks: None,
            total_marks: None,
            due_at: Some(now - chrono::TimeDelta::hours(1)),
            assigned_at: now - chrono::TimeDelta::days(1),
            started_at: None,
            submitted_at: None,
            evaluated_at: None,
        };
        assert!(assignment.is_overdue(now));

        let open = TestAssignment {
            due_at: None,
            ..assignment
        };
        assert!(!open.is_overdue(now));
    }
}
