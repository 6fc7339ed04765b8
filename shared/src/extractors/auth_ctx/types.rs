/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - access middleware が検証結果から組み立てて request extensions に格納し、handler はこの型だけを受け取る
 */

use crate::services::verifier::VerifiedPrincipal;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `principal_id` は Authentication service 側の principal の ID（owner guard の比較対象）
/// - `role` は運ばれるだけで、ここでは権限判定に使わない
/// - `jti` はログ相関用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub principal_id: i64,
    pub username: Option<String>,
    pub role: Option<String>,
    pub jti: Option<String>,
}

impl AuthCtx {
    pub fn new(principal_id: i64) -> Self {
        Self {
            principal_id,
            username: None,
            role: None,
            jti: None,
        }
    }
}

impl From<VerifiedPrincipal> for AuthCtx {
    fn from(v: VerifiedPrincipal) -> Self {
        Self {
            principal_id: v.principal_id,
            username: v.username,
            role: v.role,
            jti: v.jti,
        }
    }
}
