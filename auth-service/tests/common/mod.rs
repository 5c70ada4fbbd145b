use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth_service::domain::authentication::service::AuthService;
use auth_service::domain::user::errors::UserError;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::models::UserWithPassword;
use auth_service::domain::user::ports::UserRepository;
use auth_service::inbound::http::router::create_router;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by an in-memory user store
pub struct TestApp {
    pub address: String,
    pub users: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub password_hasher: PasswordHasher,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let jwt_handler = Arc::new(JwtHandler::new(TEST_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&jwt_handler),
            Arc::new(PasswordHasher::new()),
        ));

        let router = create_router(auth_service, jwt_handler);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            users,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Store a user with an Argon2 hash of `password`
    pub fn seed_user(&self, email: &str, password: &str) -> User {
        let hash = self
            .password_hasher
            .hash(password)
            .expect("Failed to hash password");
        self.users.insert(email, hash)
    }

    /// Store a user with an already computed hash (e.g. bcrypt)
    pub fn seed_user_with_hash(&self, email: &str, hash: String) -> User {
        self.users.insert(email, hash)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}

/// User store kept in memory, keyed by user id
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, UserWithPassword>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, email: &str, password_hash: String) -> User {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: EmailAddress::from_stored(email.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.users.lock().unwrap().insert(
            user.id,
            UserWithPassword {
                user: user.clone(),
                password_hash,
            },
        );

        user
    }

    pub fn remove(&self, id: &UserId) {
        self.users.lock().unwrap().remove(id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email_with_password(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserWithPassword>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|stored| stored.user.email == *email)
            .cloned())
    }
}
