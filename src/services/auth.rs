use validator::Validate;

use crate::domain::session::{Credentials, PortalSession};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::gateway::AuthApi;
use crate::services::{ServiceError, ServiceResult};

/// Registers a new doctor account with the gateway.
pub async fn register<G>(gateway: &G, form: RegisterForm) -> ServiceResult<()>
where
    G: AuthApi + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate register form: {err}");
        return Err(ServiceError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let credentials = Credentials {
        username: form.username,
        password: form.password,
    };

    gateway.register(&credentials).await.map_err(|err| {
        log::error!("Registration failed: {err}");
        ServiceError::from(err)
    })
}

/// Logs in and stores the issued bearer token in the session.
///
/// On failure the session is left untouched, so the credential stays unset.
pub async fn login<G>(gateway: &G, session: &mut PortalSession, form: LoginForm) -> ServiceResult<()>
where
    G: AuthApi + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate login form: {err}");
        return Err(ServiceError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let credentials = Credentials {
        username: form.username,
        password: form.password,
    };

    let token = gateway.login(&credentials).await.map_err(|err| {
        log::error!("Login failed: {err}");
        ServiceError::from(err)
    })?;

    session.access_token = Some(token);
    Ok(())
}
