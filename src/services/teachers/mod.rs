pub mod list;
pub mod profile;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    CreateTeacherProfileRequest, TeacherListParams, UpdateTeacherProfileRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 教师建立自己的资料
    pub async fn create_profile(
        &self,
        data: CreateTeacherProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_create_profile(self, data, request).await
    }

    // 教师查看自己的资料
    pub async fn get_my_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_get_my_profile(self, request).await
    }

    // 教师更新自己的资料
    pub async fn update_profile(
        &self,
        data: UpdateTeacherProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_update_profile(self, data, request).await
    }

    // 管理员查看教师列表
    pub async fn list_teachers(
        &self,
        params: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    // 管理员审核教师资质
    pub async fn verify_teacher(
        &self,
        profile_id: i64,
        verified: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::handle_verify(self, profile_id, verified, request).await
    }
}
