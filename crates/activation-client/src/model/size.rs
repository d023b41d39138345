use serde::{Deserialize, Serialize};
use store_framework::{RecordId, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCreate {
    pub name: String,
}

impl Resource for Size {
    const NAME: &'static str = "sizes";
    type Create = SizeCreate;
    type Update = SizeCreate;
}
