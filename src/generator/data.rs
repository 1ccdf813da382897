use serde::Serialize;

/// One entry of the manifest. Field order here is the key order in the JSON.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub excerpt: String,
    pub markdown_file: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub(crate) struct Manifest {
    pub posts: Vec<PostRecord>,
}
