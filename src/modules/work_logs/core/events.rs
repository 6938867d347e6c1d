pub mod v1 {
    pub mod work_session_logged;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WorkLogEvent {
    WorkSessionLoggedV1(v1::work_session_logged::WorkSessionLoggedV1),
}
