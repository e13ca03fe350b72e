//! Tests for JWT token generation and validation.

use uuid::Uuid;

use super::{JwtConfig, JwtService};
use crate::auth::UserRole;

fn create_test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key".to_string(),
        access_token_expires_secs: 3600,
    })
}

#[test]
fn test_generate_and_validate_token() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service
        .generate_access_token(user_id, UserRole::LocationManager)
        .unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(claims.user_id(), user_id);
    assert_eq!(claims.role, UserRole::LocationManager);
    assert!(!claims.is_admin());
}

#[test]
fn test_admin_role_survives_round_trip() {
    let service = create_test_service();

    let token = service
        .generate_access_token(Uuid::new_v4(), UserRole::Admin)
        .unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert!(claims.is_admin());
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    let result = service.validate_token("invalid.token.here");
    assert!(result.is_err());
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let service = create_test_service();
    let other = JwtService::new(JwtConfig {
        secret: "a-different-secret".to_string(),
        access_token_expires_secs: 3600,
    });

    let token = other
        .generate_access_token(Uuid::new_v4(), UserRole::Admin)
        .unwrap();
    assert!(service.validate_token(&token).is_err());
}
