use crate::models::users::entities::UserProfile;
use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 用户注册请求，注册产生的账号一律是学生
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

// 当前用户更新自己的资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub profile: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use crate::models::auth::requests::LoginRequest;
    use crate::models::auth::responses::LoginResponse;

    #[test]
    fn test_login_request_remember_me_defaults_to_false() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"secret"}"#).unwrap();
        assert_eq!(request.email, "a@b.com");
        assert!(!request.remember_me);
    }

    #[test]
    fn test_login_response_serializes_token_fields() {
        use crate::models::users::entities::{User, UserProfile, UserRole, UserStatus};

        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            name: "张三".to_string(),
            password_hash: String::new(),
            role: UserRole::Student,
            status: UserStatus::Active,
            profile: UserProfile::default(),
            is_profile_completed: false,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(LoginResponse {
            access_token: "token".to_string(),
            expires_in: 900,
            user,
            created_at: chrono::Utc::now(),
        })
        .unwrap();
        assert_eq!(json["access_token"], "token");
        assert_eq!(json["expires_in"], 900);
    }
}
