use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{LmsError, Result};
use crate::models::{
    courses::entities::Course,
    enrollments::entities::{Enrollment, EnrollmentStatus},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建报名记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Enrollment> {
        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建报名记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 按 ID 获取报名记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 获取某学生在某课程的报名记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 统计学生进行中的报名数量
    pub async fn count_active_enrollments_impl(&self, student_id: i64) -> Result<u64> {
        let count = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(EnrollmentStatus::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计报名数量失败: {e}")))?;

        Ok(count)
    }

    /// 列出学生的全部报名及对应课程
    pub async fn list_student_enrollments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(Enrollment, Course)>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::EnrolledAt)
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询报名列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|c| (enrollment.into_enrollment(), c.into_course()))
            })
            .collect())
    }

    /// 更新报名状态
    pub async fn set_enrollment_status_impl(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        let existing = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询报名记录失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            ..Default::default()
        };

        // 结课时间只在标记完成时落盘
        if status == EnrollmentStatus::Completed {
            model.completed_at = Set(Some(chrono::Utc::now().timestamp()));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新报名状态失败: {e}")))?;

        Ok(Some(result.into_enrollment()))
    }

    /// 列出课程中进行中报名的学生 ID
    pub async fn list_course_active_student_ids_impl(&self, course_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Status.eq(EnrollmentStatus::Active.to_string()))
            .select_only()
            .column(Column::StudentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程学生失败: {e}")))?;

        Ok(ids)
    }
}
