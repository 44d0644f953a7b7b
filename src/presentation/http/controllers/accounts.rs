// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateProfileCommand},
    dto::{AuthTokenDto, UserDto},
    error::ApplicationError,
};
use crate::domain::user::Role;
use crate::presentation::http::error::{IntoPageResult, LOGIN_PATH, PageResult};
use crate::presentation::http::extractors::{MaybeAuthenticated, SESSION_COOKIE};
use crate::presentation::http::flash::{self, Flash, FlashMessage};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::FormView;
use axum::{
    Extension, Form, Json,
    http::{HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{non_blank, parse_optional_id};

const PROFILE_PATH: &str = "/accounts/profile/";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Defaults to `reader`.
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

/// Profile edits. Absent fields are left alone; a blank `email` clears the
/// address and a blank `publisher` drops the affiliation.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProfileForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub publisher: Option<String>,
}

impl ProfileForm {
    fn into_command(self) -> Result<UpdateProfileCommand, ApplicationError> {
        let publisher_id = match self.publisher.as_deref() {
            None => None,
            Some(raw) => Some(parse_optional_id(Some(raw), "publisher")?),
        };
        Ok(UpdateProfileCommand {
            username: non_blank(self.username),
            email: self.email.map(|email| email.trim().to_string()),
            role: self.role,
            publisher_id,
        })
    }
}

fn session_cookie(token: &AuthTokenDto) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        token.token, token.expires_in
    ))
    .ok()
}

fn cleared_session_cookie() -> HeaderValue {
    HeaderValue::from_static("bronews_token=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

pub async fn register_form(flash: Flash) -> Response {
    flash.render(FormView::<UserDto>::blank("register", "Register"))
}

#[utoipa::path(
    post,
    path = "/accounts/register/",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created; redirects to the login view."),
        (status = 409, description = "Username already taken.", body = crate::presentation::http::error::FormErrors),
        (status = 422, description = "Invalid form input.", body = crate::presentation::http::error::FormErrors)
    ),
    tag = "Accounts"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Form(form): Form<RegisterForm>,
) -> PageResult {
    let command = RegisterUserCommand {
        username: form.username,
        password: form.password,
        email: non_blank(form.email),
        role: form.role,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .for_form("register", "/")?;

    tracing::info!(user_id = user.id, role = user.role.as_str(), "account registered");

    Ok(flash::redirect(
        LOGIN_PATH,
        FlashMessage::success("Account created. You can now log in."),
    ))
}

pub async fn login_form(flash: Flash) -> Response {
    flash.render(FormView::<UserDto>::blank("login", "Log in"))
}

#[utoipa::path(
    post,
    path = "/accounts/login/",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Signed token; also set as an HttpOnly session cookie.", body = LoginResponse),
        (status = 303, description = "Bad credentials; redirects back to the login view.")
    ),
    tag = "Accounts"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> PageResult {
    let command = LoginUserCommand {
        username: form.username,
        password: form.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .for_form("login", LOGIN_PATH)?;

    let cookie = session_cookie(&result.token);
    let mut response = Json(LoginResponse {
        token: result.token,
        user: result.user,
    })
    .into_response();
    if let Some(cookie) = cookie {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/accounts/logout/",
    responses((status = 303, description = "Session cookie cleared; redirects home.")),
    tag = "Accounts"
)]
pub async fn logout() -> Response {
    let mut response = flash::redirect("/", FlashMessage::success("You have been logged out."));
    response
        .headers_mut()
        .append(SET_COOKIE, cleared_session_cookie());
    response
}

#[utoipa::path(
    get,
    path = "/accounts/profile/",
    responses(
        (status = 200, description = "The caller's account and subscriptions.", body = crate::application::dto::ProfileDto),
        (status = 303, description = "Not logged in; redirects to the login view.")
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Accounts"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let profile = state
        .services
        .user_queries
        .get_profile(actor.user())
        .await
        .or_redirect("/")?;
    Ok(flash.render(profile))
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Form(form): Form<ProfileForm>,
) -> PageResult {
    let command = form.into_command().for_form("profile", PROFILE_PATH)?;

    state
        .services
        .user_commands
        .update_profile(actor.user(), command)
        .await
        .for_form("profile", PROFILE_PATH)?;

    Ok(flash::redirect(
        PROFILE_PATH,
        FlashMessage::success("Profile updated successfully!"),
    ))
}
