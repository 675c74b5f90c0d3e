mod common;

use shared::{
    domain::requests::{LoginRequest, RegisterRequest},
    errors::ServiceError,
};

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Ana Perez".into(),
        email: email.into(),
        password: "s3cret-pass".into(),
    }
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let pool = common::memory_pool().await;
    let services = common::services(pool.clone()).await;
    let register = &services.auth_service.register;

    let first = register
        .register(&register_request("ana@example.com"))
        .await
        .unwrap();
    assert_eq!(first.data.email, "ana@example.com");
    assert_eq!(first.data.position, None);

    let mut second = register_request("ana@example.com");
    second.name = "Someone Else".into();
    let err = register.register(&second).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let stored = services
        .user_service
        .query
        .find_by_id(first.data.id)
        .await
        .unwrap();
    assert_eq!(stored.data.name, "Ana Perez");
}

#[tokio::test]
async fn password_is_stored_hashed() {
    let pool = common::memory_pool().await;
    let services = common::services(pool.clone()).await;

    services
        .auth_service
        .register
        .register(&register_request("hash@example.com"))
        .await
        .unwrap();

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
        .bind("hash@example.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "s3cret-pass");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let pool = common::memory_pool().await;
    let services = common::services(pool).await;

    services
        .auth_service
        .register
        .register(&register_request("ana@example.com"))
        .await
        .unwrap();

    let wrong_password = services
        .auth_service
        .login
        .login(&LoginRequest {
            username: "ana@example.com".into(),
            password: "not-the-password".into(),
        })
        .await
        .unwrap_err();
    let unknown_email = services
        .auth_service
        .login
        .login(&LoginRequest {
            username: "nobody@example.com".into(),
            password: "s3cret-pass".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, ServiceError::InvalidCredentials));
    assert!(matches!(unknown_email, ServiceError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn issued_token_resolves_to_the_identity() {
    let pool = common::memory_pool().await;
    let services = common::services(pool).await;

    let registered = services
        .auth_service
        .register
        .register(&register_request("ana@example.com"))
        .await
        .unwrap();

    let token = services
        .auth_service
        .login
        .login(&LoginRequest {
            username: "ana@example.com".into(),
            password: "s3cret-pass".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.token_type, "bearer");

    let me = services
        .auth_service
        .identity
        .authenticate(&token.access_token)
        .await
        .unwrap();
    assert_eq!(me, registered.data);
}

#[tokio::test]
async fn token_for_a_deleted_identity_is_rejected() {
    let pool = common::memory_pool().await;
    let services = common::services(pool).await;

    let registered = services
        .auth_service
        .register
        .register(&register_request("gone@example.com"))
        .await
        .unwrap();
    let token = common::jwt().generate_token("gone@example.com").unwrap();

    services
        .user_service
        .command
        .delete_user(registered.data.id)
        .await
        .unwrap();

    let err = services
        .auth_service
        .identity
        .authenticate(&token)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidToken));
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let pool = common::memory_pool().await;
    let services = common::services(pool).await;

    let err = services
        .auth_service
        .identity
        .authenticate("not.a.jwt")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Jwt(_)));
}
