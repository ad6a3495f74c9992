//! Command line interface of the `sm-server` binary

use crate::error::Result as ServerErrorResult;

use sm_auth::hash_password;
use sm_core::{NewUser, User};
use sm_db::UserRepository;

use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

#[derive(Debug, Parser)]
#[command(name = "sm-server", version, about = "Social media REST backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Create an account with staff and superuser rights
    CreateSuperuser {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        username: Option<String>,
    },
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

pub async fn create_superuser(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    username: Option<&str>,
) -> ServerErrorResult<User> {
    let mut new_user = NewUser::superuser(email, password);
    if let Some(username) = username {
        new_user = new_user.with_username(username);
    }
    new_user.validate()?;

    let password_hash = hash_password(&new_user.password)?;
    let user = new_user.into_user(password_hash);

    UserRepository::new(pool.clone()).create(&user).await?;
    log::info!("Created superuser {} ({})", user.email, user.id);

    Ok(user)
}
