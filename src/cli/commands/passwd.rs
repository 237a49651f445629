use crate::auth::{hash_password, read_password};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Passwd { user } = cmd {
        let password = read_password(user)?;
        if password.is_empty() {
            return Err(AppError::Auth("empty password".to_string()));
        }

        let hash = hash_password(&password)?;
        info("Add this line under `users:` in the configuration file:");
        println!("  {}: '{}'", user, hash);
    }

    Ok(())
}
