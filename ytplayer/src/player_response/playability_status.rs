use serde::{Deserialize, Serialize};

use crate::serde_impl::null_as_default;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayabilityStatus {
    /// `OK`, `UNPLAYABLE`, `LOGIN_REQUIRED`, `ERROR`, ... Not checked against a known set.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub playable_in_embed: bool,
}

impl PlayabilityStatus {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}
