use warehouse_backend::backend::database::DatabaseBackendConfig;
use warehouse_backend::backend::BackendFactory;
use warehouse_backend::password::{PasswordAlgorithm, PasswordManager};
use warehouse_backend::UserInput;

fn user_input(email: &str) -> UserInput {
    UserInput {
        name: "Hash Tester".to_string(),
        email: email.to_string(),
        password: "ComplexPassword123!".to_string(),
    }
}

#[tokio::test]
async fn test_default_algorithm_is_argon2id() {
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite())
        .await
        .unwrap();
    backend.init_schema().await.unwrap();

    let user = backend
        .create_user(&user_input("argon@example.com"))
        .await
        .unwrap();
    let stored = backend.find_user_by_id(user.id).await.unwrap();

    assert!(stored.password_hash.starts_with("$argon2id$"));

    let manager = PasswordManager::default();
    assert!(manager
        .verify_password("ComplexPassword123!", &stored.password_hash)
        .unwrap());
    assert!(!manager
        .verify_password("WrongPassword123!", &stored.password_hash)
        .unwrap());
}

#[tokio::test]
async fn test_configured_bcrypt_algorithm() {
    let config =
        DatabaseBackendConfig::memory_sqlite().with_password_algorithm(PasswordAlgorithm::Bcrypt);
    let backend = BackendFactory::create(&config).await.unwrap();
    backend.init_schema().await.unwrap();

    let user = backend
        .create_user(&user_input("bcrypt@example.com"))
        .await
        .unwrap();

    let manager = PasswordManager::default();
    assert_eq!(
        manager.detect_algorithm(&user.password_hash),
        Some(PasswordAlgorithm::Bcrypt)
    );
    assert!(manager
        .verify_password("ComplexPassword123!", &user.password_hash)
        .unwrap());
}

#[tokio::test]
async fn test_password_rehashed_on_update() {
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite())
        .await
        .unwrap();
    backend.init_schema().await.unwrap();

    let user = backend
        .create_user(&user_input("rehash@example.com"))
        .await
        .unwrap();

    let mut replacement = user_input("rehash@example.com");
    replacement.password = "BrandNewPassword456!".to_string();
    let updated = backend.update_user(user.id, &replacement).await.unwrap();

    let manager = PasswordManager::default();
    assert!(manager
        .verify_password("BrandNewPassword456!", &updated.password_hash)
        .unwrap());
    assert!(!manager
        .verify_password("ComplexPassword123!", &updated.password_hash)
        .unwrap());
}
