use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Greeting, progress figures, upcoming events and recent assignments.
    Dashboard,
    /// Browse curricula and read a lesson.
    Curriculum(CurriculumArgs),
    /// Assignment tracker.
    Assignments(AssignmentsArgs),
    /// Events of one calendar day.
    Calendar(CalendarArgs),
    /// Profile card for the current identity.
    Profile,
    /// Request a magic login code.
    Login(LoginArgs),
    /// Confirm a magic login code.
    Verify(VerifyArgs),
    /// Forget the remembered login email.
    Logout,
    /// Check that the backend is reachable.
    Health,
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CurriculumArgs {
    /// Lesson to open (defaults to the first lesson)
    #[arg(long)]
    pub lesson: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct AssignmentsArgs {
    /// Tab to show: all, todo, submitted, graded
    #[arg(long, default_value = "all")]
    pub tab: String,
}

#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    /// Day to show (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Email to send the magic code to
    pub email: String,
}

#[derive(Clone, Debug, Args)]
pub struct VerifyArgs {
    pub email: String,
    /// Code received by email
    pub code: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type, e.g. event, assignment-submission, curriculum
    pub type_name: String,
}
