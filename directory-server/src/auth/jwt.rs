//! JWT 令牌服务
//!
//! 处理 JWT 令牌的生成、验证和解析。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::{ErrorCode, Role};
use thiserror::Error;

/// 未配置 `SECRET_KEY` 时使用的后备密钥
pub const FALLBACK_SECRET: &str = "fallback_secret_key";

/// 默认令牌有效期 (分钟)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 60;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC 签名密钥
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// 从环境变量加载
    ///
    /// `SECRET_KEY` 未设置时回退到 [`FALLBACK_SECRET`] 并记录警告。
    pub fn from_env() -> Self {
        let secret = match std::env::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("⚠️  SECRET_KEY not set! Falling back to the built-in signing key.");
                FALLBACK_SECRET.to_string()
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
        }
    }

    /// 使用指定密钥和默认有效期
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

/// 存储在令牌中的 JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID
    pub id: String,
    /// 角色
    pub role: Role,
    /// 签发时间戳
    pub iat: i64,
    /// 过期时间戳
    pub exp: i64,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),
}

impl JwtError {
    /// 对应的错误码
    pub fn code(&self) -> ErrorCode {
        match self {
            JwtError::ExpiredToken => ErrorCode::TokenExpired,
            JwtError::InvalidToken(_) | JwtError::InvalidSignature => ErrorCode::TokenInvalid,
            JwtError::GenerationFailed(_) => ErrorCode::InternalError,
        }
    }
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_minutes", &self.config.expiration_minutes)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// 使用指定配置创建新的 JWT 服务
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为用户生成新令牌
    ///
    /// 有效期超出时间范围时返回 [`JwtError::GenerationFailed`]。
    pub fn generate_token(&self, user_id: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = Duration::try_minutes(self.config.expiration_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                JwtError::GenerationFailed(format!(
                    "expiration out of range: {} minutes",
                    self.config.expiration_minutes
                ))
            })?;

        let claims = Claims {
            id: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::with_secret("test-secret-for-unit-tests"))
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = service();

        let token = service
            .generate_token("1", Role::Admin)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.id, "1");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_payload_carries_role_string() {
        let token = service().generate_token("2", Role::Employee).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"test-secret-for-unit-tests"),
            &validation,
        )
        .unwrap();

        assert_eq!(raw.claims["role"], "EMPLOYEE");
        assert_eq!(raw.claims["id"], "2");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().generate_token("1", Role::Admin).unwrap();
        let other = JwtService::with_config(JwtConfig::with_secret("another-secret"));

        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtService::with_config(JwtConfig {
            secret: "test-secret-for-unit-tests".to_string(),
            // Past the default 60s leeway
            expiration_minutes: -5,
        });
        let token = service.generate_token("1", Role::Admin).unwrap();

        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, JwtError::ExpiredToken));
        assert_eq!(err.code(), ErrorCode::TokenExpired);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let err = service().validate_token("not-a-jwt").unwrap_err();
        assert_eq!(err.code(), ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_out_of_range_expiration_fails_to_generate() {
        for minutes in [i64::MAX / 60, i64::MIN / 60] {
            let service = JwtService::with_config(JwtConfig {
                secret: "test-secret-for-unit-tests".to_string(),
                expiration_minutes: minutes,
            });

            let err = service.generate_token("1", Role::Admin).unwrap_err();
            assert!(matches!(err, JwtError::GenerationFailed(_)));
            assert_eq!(err.code(), ErrorCode::InternalError);
        }
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearer  abc "), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
