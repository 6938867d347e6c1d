pub mod v1 {
    pub mod profile_saved;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ProfileEvent {
    ProfileSavedV1(v1::profile_saved::ProfileSavedV1),
}
