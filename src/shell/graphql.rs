use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::profiles::use_cases::get_profile::inbound::graphql::ProfileQuery;
use crate::modules::profiles::use_cases::save_profile::inbound::graphql::SaveProfileMutation;
use crate::modules::reporting::use_cases::get_dashboard::inbound::graphql::DashboardQuery;
use crate::modules::work_logs::use_cases::list_work_logs::inbound::graphql::WorkLogsQuery;
use crate::modules::work_logs::use_cases::log_work_session::inbound::graphql::LogWorkSessionMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(WorkLogsQuery, ProfileQuery, DashboardQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(LogWorkSessionMutation, SaveProfileMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
