//! Repository tests against a real Postgres. Needs Docker:
//! `cargo test -p domain_users --test postgres_test -- --ignored`

use domain_users::{PgUserRepository, User, UserError, UserRepository};
use test_utils::{TestDataBuilder, TestDatabase};

fn user(builder: &TestDataBuilder, suffix: &str) -> User {
    User {
        id: builder.user_id_for(suffix),
        first_name: Some(builder.first_name(suffix)),
        last_name: Some(builder.last_name(suffix)),
        email: builder.email(suffix),
        password: Some(builder.password(suffix)),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_insert_and_find");

    let ada = user(&builder, "ada");
    let stored = repo.insert(ada.clone()).await.unwrap();
    assert_eq!(stored, ada);

    let found = repo.find_by_id(ada.id).await.unwrap();
    assert_eq!(found, Some(ada));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_duplicate_id() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_insert_duplicate_id");

    let first = user(&builder, "dup");
    repo.insert(first.clone()).await.unwrap();

    let mut second = user(&builder, "dup");
    second.email = "other@example.com".to_string();
    let result = repo.insert(second).await;

    assert!(matches!(result, Err(UserError::DuplicateId(id)) if id == first.id));
    assert_eq!(repo.find_all().await.unwrap(), vec![first]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_find_all_in_insertion_order");

    let users: Vec<User> = ["a", "b", "c"].iter().map(|s| user(&builder, s)).collect();
    for u in &users {
        repo.insert(u.clone()).await.unwrap();
    }

    assert_eq!(repo.find_all().await.unwrap(), users);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_moves_to_end() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_replace_moves_to_end");

    let first = user(&builder, "first");
    let second = user(&builder, "second");
    repo.insert(first.clone()).await.unwrap();
    repo.insert(second.clone()).await.unwrap();

    let replacement = User {
        email: "renamed@example.com".to_string(),
        first_name: None,
        ..first.clone()
    };
    let replaced = repo.replace(replacement.clone()).await.unwrap();
    assert_eq!(replaced, Some(replacement.clone()));

    assert_eq!(repo.find_all().await.unwrap(), vec![second, replacement]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_missing() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_replace_missing");

    let result = repo.replace(user(&builder, "ghost")).await.unwrap();

    assert!(result.is_none());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_remove() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_remove");

    let gone = user(&builder, "gone");
    repo.insert(gone.clone()).await.unwrap();

    assert_eq!(repo.remove(gone.id).await.unwrap(), Some(gone.clone()));
    assert_eq!(repo.remove(gone.id).await.unwrap(), None);
    assert_eq!(repo.find_by_id(gone.id).await.unwrap(), None);
}
