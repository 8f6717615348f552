use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserPostCode(String);

impl UserPostCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}
