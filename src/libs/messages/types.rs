/// All user-facing message texts, one variant per message.
///
/// Keeping every text behind a single enum keeps wording consistent and
/// makes the display layer the only place that knows how messages read.
#[derive(Debug, Clone)]
pub enum Message {
    // === AUTHENTICATION MESSAGES ===
    LoginSucceeded,
    LogoutSucceeded,
    WrongLoginCredentials,
    LoginFailed(u16),
    NotLoggedIn,

    // === ALIAS MESSAGES ===
    AliasAdded(String, String),
    AliasDeleted(String),
    AliasNotFound(String),
    NoAliasesSet,
    InvalidAliasKey(String),
    AliasValueNotInteger,

    // === DEFAULTS MESSAGES ===
    DefaultAdded(String, String),
    NoDefaultsSet,
    InvalidDefaultKey(Vec<String>),

    // === DATE MESSAGES ===
    InvalidDateFormat(String),

    // === ACTIVITY MESSAGES ===
    ActivitiesFetchFailed(String),
    InvalidActivity(Vec<String>),
    ActivityNotProvided,

    // === TIME ENTRY MESSAGES ===
    TimeEntryCreated,
    TimeEntryUpdated,
    TimeEntryDeleted(i64),
    TimeEntryCreateFailed(String),
    TimeEntryUpdateFailed(String),
    TimeEntryDeleteFailed(String),
    TimeEntriesFetchFailed(String),
    TimeEntryFetchFailed(i64, String),
    IdMustBeInteger(String, String),

    // === ISSUE AND PROJECT MESSAGES ===
    IssueFetchFailed(i64, String),
    IssuesFetchFailed(String),
    ProjectFetchFailed(i64, String),
    ProjectsFetchFailed(String),

    // === SEARCH MESSAGES ===
    SearchFailed(String),
    NoSearchResults,
    SearchSummary(i64, usize, usize),

    // === STATUS MESSAGES ===
    StatusFetchFailed(String),

    // === PROMPTS ===
    PromptHost,
    PromptUsername,
    PromptPassword,
}
