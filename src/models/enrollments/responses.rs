use super::entities::Enrollment;
use crate::models::courses::entities::Course;
use serde::Serialize;
use ts_rs::TS;

// 选课响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// 我的课程条目：选课记录加课程信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrolledCourseItem {
    pub enrollment: Enrollment,
    pub course: Course,
}

// 我的课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct MyCoursesResponse {
    pub items: Vec<EnrolledCourseItem>,
}
