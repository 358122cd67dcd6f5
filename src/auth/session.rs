use crate::auth::forms::{FormErrors, SignInForm, SignUpForm};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Where the app navigates after a successful submission when the
/// authenticator does not ask for a specific page.
pub const DEFAULT_REDIRECT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user: User,
    pub redirect_to: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// External service the sign-in and sign-up pages submit to.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, form: &SignInForm) -> Result<AuthOutcome, AuthError>;

    async fn sign_up(&self, form: &SignUpForm) -> Result<AuthOutcome, AuthError>;
}

/// Accepts every submission that reaches it. Stands in for the hosted auth
/// service in the CLI and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAuthenticator;

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn sign_in(&self, form: &SignInForm) -> Result<AuthOutcome, AuthError> {
        let email = form.email.trim().to_string();
        let name = email.split('@').next().unwrap_or_default().to_string();
        Ok(AuthOutcome {
            user: User { name, email },
            redirect_to: Some("/properties".to_string()),
        })
    }

    async fn sign_up(&self, form: &SignUpForm) -> Result<AuthOutcome, AuthError> {
        Ok(AuthOutcome {
            user: User {
                name: form.display_name(),
                email: form.email.trim().to_string(),
            },
            redirect_to: Some("/properties".to_string()),
        })
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("please fix the highlighted fields: {0}")]
    Invalid(FormErrors),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Signed-in state for the current browsing session. In memory only.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    remembered_email: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Email pre-filled on the sign-in form after a "remember me" sign-in.
    pub fn remembered_email(&self) -> Option<&str> {
        self.remembered_email.as_deref()
    }

    /// Validates and submits the sign-in form, returning the redirect target.
    /// Invalid forms never reach the authenticator.
    pub async fn submit_sign_in(
        &mut self,
        form: &SignInForm,
        auth: &dyn Authenticator,
    ) -> Result<String, SubmitError> {
        form.validate().map_err(SubmitError::Invalid)?;

        let outcome = auth.sign_in(form).await.map_err(|err| {
            warn!(error = %err, "sign-in rejected");
            err
        })?;

        self.remembered_email = form.remember_me.then(|| outcome.user.email.clone());
        Ok(self.complete(outcome))
    }

    pub async fn submit_sign_up(
        &mut self,
        form: &SignUpForm,
        auth: &dyn Authenticator,
    ) -> Result<String, SubmitError> {
        form.validate().map_err(SubmitError::Invalid)?;

        let outcome = auth.sign_up(form).await.map_err(|err| {
            warn!(error = %err, "sign-up rejected");
            err
        })?;

        Ok(self.complete(outcome))
    }

    fn complete(&mut self, outcome: AuthOutcome) -> String {
        info!(user = %outcome.user.email, "signed in");
        self.user = Some(outcome.user);
        outcome
            .redirect_to
            .unwrap_or_else(|| DEFAULT_REDIRECT.to_string())
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.email, "signed out");
        }
    }
}
