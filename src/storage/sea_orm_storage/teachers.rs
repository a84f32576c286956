use super::SeaOrmStorage;
use crate::entity::teacher_profiles::{ActiveModel, Column, Entity as TeacherProfiles};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::TeacherProfile,
        requests::{CreateTeacherProfileRequest, TeacherListQuery, UpdateTeacherProfileRequest},
        responses::TeacherListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// 教师档案完整 = 姓名、专长、资质均已填写且非空白
fn teacher_profile_completed(
    full_name: &str,
    expertise: Option<&str>,
    qualification: Option<&str>,
) -> bool {
    !full_name.trim().is_empty()
        && expertise.is_some_and(|e| !e.trim().is_empty())
        && qualification.is_some_and(|q| !q.trim().is_empty())
}

impl SeaOrmStorage {
    /// 创建教师档案
    pub async fn create_teacher_profile_impl(
        &self,
        user_id: i64,
        req: CreateTeacherProfileRequest,
    ) -> Result<TeacherProfile> {
        let now = chrono::Utc::now().timestamp();
        let completed = teacher_profile_completed(
            &req.full_name,
            req.expertise.as_deref(),
            req.qualification.as_deref(),
        );

        let model = ActiveModel {
            user_id: Set(user_id),
            full_name: Set(req.full_name),
            expertise: Set(req.expertise),
            experience_years: Set(req.experience_years),
            qualification: Set(req.qualification),
            bio: Set(req.bio),
            profile_completed: Set(completed),
            is_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建教师档案失败: {e}")))?;

        Ok(result.into_teacher_profile())
    }

    /// 按用户 ID 获取教师档案
    pub async fn get_teacher_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<TeacherProfile>> {
        let result = TeacherProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher_profile()))
    }

    /// 更新教师档案
    pub async fn update_teacher_profile_impl(
        &self,
        user_id: i64,
        update: UpdateTeacherProfileRequest,
    ) -> Result<Option<TeacherProfile>> {
        let existing = match self.get_teacher_profile_by_user_id_impl(user_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let final_full_name = update.full_name.clone().unwrap_or(existing.full_name);
        let final_expertise = update.expertise.clone().or(existing.expertise);
        let final_qualification = update.qualification.clone().or(existing.qualification);
        let completed = teacher_profile_completed(
            &final_full_name,
            final_expertise.as_deref(),
            final_qualification.as_deref(),
        );

        let mut model = ActiveModel {
            id: Set(existing.id),
            profile_completed: Set(completed),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if update.expertise.is_some() {
            model.expertise = Set(update.expertise);
        }

        if let Some(years) = update.experience_years {
            model.experience_years = Set(years);
        }

        if update.qualification.is_some() {
            model.qualification = Set(update.qualification);
        }

        if update.bio.is_some() {
            model.bio = Set(update.bio);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新教师档案失败: {e}")))?;

        Ok(Some(result.into_teacher_profile()))
    }

    /// 设置教师认证状态
    pub async fn set_teacher_verified_impl(
        &self,
        profile_id: i64,
        verified: bool,
    ) -> Result<Option<TeacherProfile>> {
        let existing = TeacherProfiles::find_by_id(profile_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师档案失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(profile_id),
            is_verified: Set(verified),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新教师认证状态失败: {e}")))?;

        Ok(Some(result.into_teacher_profile()))
    }

    /// 分页列出教师档案
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = TeacherProfiles::find();

        if let Some(verified) = query.is_verified {
            select = select.filter(Column::IsVerified.eq(verified));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师页数失败: {e}")))?;

        let profiles = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: profiles
                .into_iter()
                .map(|m| m.into_teacher_profile())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::teacher_profile_completed;

    #[test]
    fn test_profile_completed_requires_all_fields() {
        assert!(teacher_profile_completed("张老师", Some("数学"), Some("硕士")));
        assert!(!teacher_profile_completed("", Some("数学"), Some("硕士")));
        assert!(!teacher_profile_completed("张老师", None, Some("硕士")));
        assert!(!teacher_profile_completed("张老师", Some("  "), Some("硕士")));
        assert!(!teacher_profile_completed("张老师", Some("数学"), None));
    }
}
