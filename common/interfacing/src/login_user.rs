use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LoginUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
}
