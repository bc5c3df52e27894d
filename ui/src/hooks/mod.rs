pub mod use_dashboard;
pub mod use_fetch;
pub mod use_groups;
pub mod use_pagination;
pub mod use_reset;
pub mod use_study_activities;
pub mod use_study_sessions;
pub mod use_words;

pub use use_dashboard::{DashboardHookReturn, use_dashboard};
pub use use_fetch::{FetchHookReturn, use_fetch, use_operation};
pub use use_groups::{
    use_group, use_group_study_sessions, use_group_words, use_groups,
};
pub use use_pagination::{PaginationHookReturn, use_pagination};
pub use use_reset::{ResetHookReturn, use_full_reset, use_reset_history};
pub use use_study_activities::{
    use_study_activities, use_study_activity, use_study_activity_launch,
    use_study_activity_sessions,
};
pub use use_study_sessions::{
    use_study_session, use_study_session_words, use_study_sessions,
};
pub use use_words::{use_word, use_words};
