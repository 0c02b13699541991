//! Data-access client for the REST surface: one typed method per API
//! operation, plus an explicit [`Session`] for the token and signed-in user.
//!
//! Server failures come back as the same tagged [`Error`] the server maps
//! from, with the kind recovered from the status code and the message taken
//! verbatim from the response body.

mod session;
pub use self::session::Session;

use crate::{
    api::handlers::{
        answers::AnswerRequest, questions::QuestionRequest, user_login::LoginRequest,
        user_login::LoginResponse, user_register::RegisterRequest,
    },
    error::{Error, ErrorKind},
    store::models::{Question, UserPublic},
    APP_USER_AGENT,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client against a server base URL, e.g. `http://localhost:4000`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a new account.
    ///
    /// # Errors
    /// Fails with the server's validation/conflict error, or an internal
    /// error if the server is unreachable.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserPublic, Error> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&RegisterRequest {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(reach_error)?;

        read(response).await
    }

    /// Log in and store the issued token and user in `session`.
    ///
    /// # Errors
    /// Fails with the server's uniform invalid-credentials error, or an
    /// internal error if the server is unreachable.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<UserPublic, Error> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(reach_error)?;

        let login: LoginResponse = read(response).await?;

        debug!("Signed in as {}", login.user.username);
        session.sign_in(login.token, login.user.clone());

        Ok(login.user)
    }

    /// All questions, newest first.
    ///
    /// # Errors
    /// Fails if the server is unreachable or returns a failure.
    pub async fn questions(&self) -> Result<Vec<Question>, Error> {
        let response = self
            .http
            .get(self.url("/api/questions"))
            .send()
            .await
            .map_err(reach_error)?;

        read(response).await
    }

    /// One question with its answers.
    ///
    /// # Errors
    /// Fails with not-found for an unknown id.
    pub async fn question(&self, id: Uuid) -> Result<Question, Error> {
        let response = self
            .http
            .get(self.url(&format!("/api/questions/{id}")))
            .send()
            .await
            .map_err(reach_error)?;

        read(response).await
    }

    /// Post a question as the signed-in user.
    ///
    /// # Errors
    /// Fails with unauthenticated if the session holds no token.
    pub async fn create_question(
        &self,
        session: &Session,
        title: &str,
        body: &str,
    ) -> Result<Question, Error> {
        let token = require_token(session)?;

        let response = self
            .http
            .post(self.url("/api/questions"))
            .bearer_auth(token)
            .json(&QuestionRequest {
                title: title.to_string(),
                body: body.to_string(),
            })
            .send()
            .await
            .map_err(reach_error)?;

        read(response).await
    }

    /// Post an answer as the signed-in user. Returns the whole updated
    /// question.
    ///
    /// # Errors
    /// Fails with unauthenticated if the session holds no token, or
    /// not-found for an unknown question id.
    pub async fn add_answer(
        &self,
        session: &Session,
        question_id: Uuid,
        body: &str,
    ) -> Result<Question, Error> {
        let token = require_token(session)?;

        let response = self
            .http
            .post(self.url(&format!("/api/questions/{question_id}/answers")))
            .bearer_auth(token)
            .json(&AnswerRequest {
                body: body.to_string(),
            })
            .send()
            .await
            .map_err(reach_error)?;

        read(response).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn require_token(session: &Session) -> Result<&str, Error> {
    session
        .token()
        .ok_or_else(|| Error::unauthenticated("Authentication required"))
}

fn reach_error(e: reqwest::Error) -> Error {
    Error::internal(format!("Failed to reach server: {e}"))
}

async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| Error::internal(format!("Malformed response from server: {e}")));
    }

    // Recover the tagged kind from the status and surface the server's
    // message verbatim.
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    Err(Error::new(ErrorKind::from_status(status), message))
}
