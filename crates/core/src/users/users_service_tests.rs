#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::users::{
        NewUser, NewUserRecord, PasswordHasherTrait, User, UserRepositoryTrait, UserService,
        UserServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    // --- Mock UserRepository ---
    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
        // Simulates a concurrent registration slipping past the pre-check.
        reject_inserts_as_duplicate: bool,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn get_by_id(&self, user_id: i64) -> Result<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(format!("user {}", user_id)).into())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn list(&self) -> Result<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn create(&self, record: NewUserRecord) -> Result<User> {
            if self.reject_inserts_as_duplicate {
                return Err(DatabaseError::UniqueViolation("users.email".into()).into());
            }
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: users.len() as i64 + 1,
                name: record.name,
                email: record.email,
                password_hash: record.password_hash,
                created_at: Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        }
    }

    // --- Mock PasswordHasher ---
    struct ReversingHasher;

    impl PasswordHasherTrait for ReversingHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(password.chars().rev().collect())
        }

        fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
            Ok(self.hash(password)? == password_hash)
        }
    }

    fn service_with(repository: MockUserRepository) -> UserService {
        UserService::new(Arc::new(repository), Arc::new(ReversingHasher))
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: " Ada ".to_string(),
            email: email.to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_and_normalizes() {
        let service = service_with(MockUserRepository::default());

        let user = service.register(new_user(" Ada@Example.COM ")).await.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash, "terc3s");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let service = service_with(MockUserRepository::default());
        service.register(new_user("ada@example.com")).await.unwrap();

        let err = service
            .register(new_user("ADA@example.com"))
            .await
            .unwrap_err();
        match err {
            Error::ConstraintViolation(msg) => assert_eq!(msg, "Email already registered"),
            other => panic!("expected constraint violation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_race_maps_unique_violation() {
        let service = service_with(MockUserRepository {
            reject_inserts_as_duplicate: true,
            ..Default::default()
        });

        let err = service
            .register(new_user("ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let service = service_with(MockUserRepository::default());

        let err = service.register(new_user("not-an-email")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));

        let mut blank_password = new_user("ada@example.com");
        blank_password.password.clear();
        let err = service.register(blank_password).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(field)) if field == "password"
        ));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let service = service_with(MockUserRepository::default());
        let registered = service.register(new_user("ada@example.com")).await.unwrap();

        let user = service.authenticate("ADA@example.com", "s3cret").unwrap();
        assert_eq!(user.id, registered.id);

        assert!(matches!(
            service.authenticate("ada@example.com", "wrong"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate("nobody@example.com", "s3cret"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_lookups() {
        let service = service_with(MockUserRepository::default());
        let ada = service.register(new_user("ada@example.com")).await.unwrap();
        service.register(new_user("bob@example.com")).await.unwrap();

        assert_eq!(service.get_user(ada.id).unwrap().email, "ada@example.com");
        assert!(service.get_user_by_email("Bob@Example.com").unwrap().is_some());
        assert!(service.get_user_by_email("carol@example.com").unwrap().is_none());
        assert_eq!(service.list_users().unwrap().len(), 2);
        assert!(matches!(
            service.get_user(99),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "hash".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
