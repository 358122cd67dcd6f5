pub mod forms;
pub mod session;

pub use forms::{FormErrors, SignInForm, SignUpForm};
pub use session::{AuthError, AuthOutcome, Authenticator, DemoAuthenticator, Session, SubmitError, User};
