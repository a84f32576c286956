use super::SeaOrmStorage;
use crate::entity::admin_notes::{
    ActiveModel as AdminNoteActiveModel, Column as AdminNoteColumn, Entity as AdminNotes,
};
use crate::entity::student_notes::{
    ActiveModel as StudentNoteActiveModel, Column as StudentNoteColumn, Entity as StudentNotes,
};
use crate::entity::video_lectures::{
    ActiveModel as LectureActiveModel, Column as LectureColumn, Entity as VideoLectures,
};
use crate::errors::{LmsError, Result};
use crate::models::content::{
    entities::{AdminNote, StudentNote, VideoLecture},
    requests::{
        CreateAdminNoteRequest, CreateLectureRequest, CreateStudentNoteRequest,
        UpdateAdminNoteRequest, UpdateLectureRequest,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建视频课时
    pub async fn create_lecture_impl(
        &self,
        chapter_id: i64,
        req: CreateLectureRequest,
    ) -> Result<VideoLecture> {
        let model = LectureActiveModel {
            chapter_id: Set(chapter_id),
            title: Set(req.title),
            video_url: Set(req.video_url),
            duration_seconds: Set(req.duration_seconds),
            sort_order: Set(req.sort_order),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建视频课时失败: {e}")))?;

        Ok(result.into_video_lecture())
    }

    /// 按章节列出视频课时
    pub async fn list_lectures_impl(&self, chapter_id: i64) -> Result<Vec<VideoLecture>> {
        let result = VideoLectures::find()
            .filter(LectureColumn::ChapterId.eq(chapter_id))
            .order_by_asc(LectureColumn::SortOrder)
            .order_by_asc(LectureColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频课时失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_video_lecture()).collect())
    }

    /// 更新视频课时
    pub async fn update_lecture_impl(
        &self,
        id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<VideoLecture>> {
        let existing = VideoLectures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频课时失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = LectureActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(video_url) = update.video_url {
            model.video_url = Set(video_url);
        }

        if update.duration_seconds.is_some() {
            model.duration_seconds = Set(update.duration_seconds);
        }

        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新视频课时失败: {e}")))?;

        Ok(Some(result.into_video_lecture()))
    }

    /// 删除视频课时
    pub async fn delete_lecture_impl(&self, id: i64) -> Result<bool> {
        let result = VideoLectures::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除视频课时失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建章节讲义
    pub async fn create_admin_note_impl(
        &self,
        chapter_id: i64,
        req: CreateAdminNoteRequest,
    ) -> Result<AdminNote> {
        let now = chrono::Utc::now().timestamp();

        let model = AdminNoteActiveModel {
            chapter_id: Set(chapter_id),
            title: Set(req.title),
            content: Set(req.content),
            sort_order: Set(req.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建讲义失败: {e}")))?;

        Ok(result.into_admin_note())
    }

    /// 按章节列出讲义
    pub async fn list_admin_notes_impl(&self, chapter_id: i64) -> Result<Vec<AdminNote>> {
        let result = AdminNotes::find()
            .filter(AdminNoteColumn::ChapterId.eq(chapter_id))
            .order_by_asc(AdminNoteColumn::SortOrder)
            .order_by_asc(AdminNoteColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询讲义失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_admin_note()).collect())
    }

    /// 更新讲义
    pub async fn update_admin_note_impl(
        &self,
        id: i64,
        update: UpdateAdminNoteRequest,
    ) -> Result<Option<AdminNote>> {
        let existing = AdminNotes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询讲义失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = AdminNoteActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新讲义失败: {e}")))?;

        Ok(Some(result.into_admin_note()))
    }

    /// 删除讲义
    pub async fn delete_admin_note_impl(&self, id: i64) -> Result<bool> {
        let result = AdminNotes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除讲义失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建学生笔记
    pub async fn create_student_note_impl(
        &self,
        student_id: i64,
        req: CreateStudentNoteRequest,
    ) -> Result<StudentNote> {
        let now = chrono::Utc::now().timestamp();

        let model = StudentNoteActiveModel {
            student_id: Set(student_id),
            chapter_id: Set(req.chapter_id),
            content: Set(req.content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建学生笔记失败: {e}")))?;

        Ok(result.into_student_note())
    }

    /// 按 ID 获取学生笔记
    pub async fn get_student_note_by_id_impl(&self, id: i64) -> Result<Option<StudentNote>> {
        let result = StudentNotes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生笔记失败: {e}")))?;

        Ok(result.map(|m| m.into_student_note()))
    }

    /// 列出某学生的全部笔记（按更新时间倒序）
    pub async fn list_student_notes_impl(&self, student_id: i64) -> Result<Vec<StudentNote>> {
        let result = StudentNotes::find()
            .filter(StudentNoteColumn::StudentId.eq(student_id))
            .order_by_desc(StudentNoteColumn::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生笔记失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student_note()).collect())
    }

    /// 更新学生笔记内容
    pub async fn update_student_note_impl(
        &self,
        id: i64,
        content: String,
    ) -> Result<Option<StudentNote>> {
        let existing = StudentNotes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生笔记失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = StudentNoteActiveModel {
            id: Set(id),
            content: Set(content),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新学生笔记失败: {e}")))?;

        Ok(Some(result.into_student_note()))
    }

    /// 删除学生笔记
    pub async fn delete_student_note_impl(&self, id: i64) -> Result<bool> {
        let result = StudentNotes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除学生笔记失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
