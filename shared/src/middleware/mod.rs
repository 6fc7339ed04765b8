/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (bearer 検証), http (request-id / trace / limit / timeout), cors
 */
pub mod auth;
pub mod cors;
pub mod http;
