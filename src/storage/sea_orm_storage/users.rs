use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{User, UserProfile, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let min_age = AppConfig::get().enrollment.min_age;
        let completed = req.profile.is_completed(&req.name, min_age);

        let model = ActiveModel {
            email: Set(req.email),
            name: Set(req.name),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            father_name: Set(req.profile.father_name),
            city: Set(req.profile.city),
            address: Set(req.profile.address),
            age: Set(req.profile.age),
            phone: Set(req.profile.phone),
            education: Set(req.profile.education),
            bio: Set(req.profile.bio),
            is_profile_completed: Set(completed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户页数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息（管理员）
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = match self.get_user_by_id_impl(id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        // 档案完整标记跟随最终的 name/age 重算
        let final_name = update.name.clone().unwrap_or(existing.name);
        let final_profile = update.profile.clone().unwrap_or(existing.profile);
        let min_age = AppConfig::get().enrollment.min_age;
        model.is_profile_completed = Set(final_profile.is_completed(&final_name, min_age));

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(profile) = update.profile {
            model.father_name = Set(profile.father_name);
            model.city = Set(profile.city);
            model.address = Set(profile.address);
            model.age = Set(profile.age);
            model.phone = Set(profile.phone);
            model.education = Set(profile.education);
            model.bio = Set(profile.bio);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新用户失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 用户更新自己的资料
    pub async fn update_user_profile_impl(
        &self,
        id: i64,
        name: Option<String>,
        password_hash: Option<String>,
        profile: Option<UserProfile>,
    ) -> Result<Option<User>> {
        let existing = match self.get_user_by_id_impl(id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let final_name = name.clone().unwrap_or(existing.name);
        let final_profile = profile.clone().unwrap_or(existing.profile);
        let min_age = AppConfig::get().enrollment.min_age;

        let mut model = ActiveModel {
            id: Set(id),
            is_profile_completed: Set(final_profile.is_completed(&final_name, min_age)),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = name {
            model.name = Set(name);
        }

        if let Some(hash) = password_hash {
            model.password_hash = Set(hash);
        }

        if let Some(profile) = profile {
            model.father_name = Set(profile.father_name);
            model.city = Set(profile.city);
            model.address = Set(profile.address);
            model.age = Set(profile.age);
            model.phone = Set(profile.phone);
            model.education = Set(profile.education);
            model.bio = Set(profile.bio);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新用户资料失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计用户数失败: {e}")))
    }
}
