use serde::{Deserialize, Serialize};
use store_framework::{RecordId, Resource};

/// One entry of the navigation menu and whether it is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: RecordId,
    pub key: String,
    pub label: String,
    pub visible: bool,
}

/// Menu entries are seeded server-side; this payload exists so [`NavigationItem`] can
/// implement `Resource`, and no store method sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationCreate {
    pub key: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationVisibility {
    pub visible: bool,
}

impl Resource for NavigationItem {
    const NAME: &'static str = "navigations";
    type Create = NavigationCreate;
    type Update = NavigationVisibility;
}
