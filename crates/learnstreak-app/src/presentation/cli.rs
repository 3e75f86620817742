use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "learnstreak")]
#[command(about = "Daily learning streaks and achievement badges")]
#[command(version)]
pub struct Cli {
    /// SQLite database file, overrides LEARNSTREAK_DB_PATH
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert missing built-in achievements
    Seed,
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Enroll a user in a course
    Enroll(EnrollmentArgs),
    /// Show a user's enrollment in a course
    Enrollment(EnrollmentArgs),
    /// Record completed chapters and credit today's streak
    Complete(CompleteArgs),
    /// Show a user's streak summary
    Streak(UserArgs),
    /// Unlock an achievement directly
    Unlock(UnlockArgs),
    /// List a user's unlocked achievements
    Achievements(UserArgs),
    /// List the achievement catalog
    Catalog,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create the user unless it already exists
    Ensure(EnsureUserArgs),
}

#[derive(Debug, Args)]
pub struct EnsureUserArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(long)]
    pub user: String,
}

#[derive(Debug, Args)]
pub struct EnrollmentArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub course: String,
}

#[derive(Debug, Args)]
pub struct CompleteArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub course: String,
    /// Full list of completed chapters, e.g. `1,2,3`
    #[arg(long, value_delimiter = ',', required = true)]
    pub chapters: Vec<u32>,
}

#[derive(Debug, Args)]
pub struct UnlockArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub code: String,
}
