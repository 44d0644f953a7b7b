use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Self-service sign-up. The caller picks their own role; Reader when
    /// none is given.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::parse_optional(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let role = command.role.unwrap_or_default();

        let new_user = NewUser::new(username, email, password_hash, role, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, role = %role, "user registered");

        Ok(user.into())
    }
}
