//! GraphQL envelopes and the operations this client sends.
//!
//! Documents are kept next to their variable and data types so a change to
//! a selection set and its decoder lands in one place.

use crate::class::{ClassDetail, ClassInput};
use crate::imports::*;
use crate::login_user::LoginUser;
use serde::de::DeserializeOwned;

#[derive(Serialize, Debug)]
pub struct GraphQLRequest<V> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQLErrorEntry {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorEntry>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResponseError {
    #[error("Server reported errors: {}", .0.join("; "))]
    Server(Vec<String>),

    #[error("Response carries no data")]
    MissingData,
}

impl<T> GraphQLResponse<T> {
    /// Errors win over partial data.
    pub fn into_result(self) -> Result<T, ResponseError> {
        if !self.errors.is_empty() {
            return Err(ResponseError::Server(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ResponseError::MissingData)
    }
}

pub trait Operation {
    const NAME: &'static str;
    const DOCUMENT: &'static str;

    type Variables: Serialize;
    type Data: DeserializeOwned;

    fn request(variables: Self::Variables) -> GraphQLRequest<Self::Variables> {
        GraphQLRequest {
            query: Self::DOCUMENT,
            operation_name: Self::NAME,
            variables,
        }
    }
}

#[derive(Serialize, Debug, Default)]
pub struct NoVariables {}

pub struct FetchLoginUser;

#[derive(Deserialize, Debug)]
pub struct FetchLoginUserData {
    #[serde(rename = "fetchLoginUser")]
    pub user: LoginUser,
}

impl Operation for FetchLoginUser {
    const NAME: &'static str = "fetchLoginUser";
    const DOCUMENT: &'static str = "query fetchLoginUser {
  fetchLoginUser {
    user_id
    name
    email
  }
}";

    type Variables = NoVariables;
    type Data = FetchLoginUserData;
}

pub struct Logout;

#[derive(Deserialize, Debug)]
pub struct LogoutData {
    pub logout: String,
}

impl Operation for Logout {
    const NAME: &'static str = "logout";
    const DOCUMENT: &'static str = "mutation logout {
  logout
}";

    type Variables = NoVariables;
    type Data = LogoutData;
}

pub struct FetchClassDetail;

#[derive(Serialize, Debug)]
pub struct ClassIdVariables {
    pub class_id: String,
}

#[derive(Deserialize, Debug)]
pub struct FetchClassDetailData {
    #[serde(rename = "fetchClassDetail")]
    pub class: ClassDetail,
}

impl Operation for FetchClassDetail {
    const NAME: &'static str = "fetchClassDetail";
    const DOCUMENT: &'static str = "query fetchClassDetail($class_id: String!) {
  fetchClassDetail(class_id: $class_id) {
    class_id
    category
    title
    content_summary
    price
    class_mNum
    address
    address_detail
    content
    total_time
    accountNum
    accountName
    bankName
    image_ {
      url
      is_main
    }
    class_schedules {
      date
    }
  }
}";

    type Variables = ClassIdVariables;
    type Data = FetchClassDetailData;
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SavedClass {
    pub class_id: String,
}

pub struct CreateClass;

#[derive(Serialize, Debug)]
pub struct CreateClassVariables {
    #[serde(rename = "createClassInput")]
    pub input: ClassInput,
}

#[derive(Deserialize, Debug)]
pub struct CreateClassData {
    #[serde(rename = "createClass")]
    pub class: SavedClass,
}

impl Operation for CreateClass {
    const NAME: &'static str = "createClass";
    const DOCUMENT: &'static str =
        "mutation createClass($createClassInput: CreateClassInput!) {
  createClass(createClassInput: $createClassInput) {
    class_id
  }
}";

    type Variables = CreateClassVariables;
    type Data = CreateClassData;
}

pub struct UpdateClass;

#[derive(Serialize, Debug)]
pub struct UpdateClassVariables {
    pub class_id: String,
    #[serde(rename = "updateClassInput")]
    pub input: ClassInput,
}

#[derive(Deserialize, Debug)]
pub struct UpdateClassData {
    #[serde(rename = "updateClass")]
    pub class: SavedClass,
}

impl Operation for UpdateClass {
    const NAME: &'static str = "updateClass";
    const DOCUMENT: &'static str =
        "mutation updateClass($class_id: String!, $updateClassInput: UpdateClassInput!) {
  updateClass(class_id: $class_id, updateClassInput: $updateClassInput) {
    class_id
  }
}";

    type Variables = UpdateClassVariables;
    type Data = UpdateClassData;
}

/// Sent as a multipart request; `file` is filled in through the `map` part.
pub struct UploadFile;

#[derive(Serialize, Debug, Default)]
pub struct UploadFileVariables {
    pub file: Option<()>,
}

#[derive(Deserialize, Debug)]
pub struct UploadFileData {
    #[serde(rename = "uploadFile")]
    pub url: String,
}

impl Operation for UploadFile {
    const NAME: &'static str = "uploadFile";
    const DOCUMENT: &'static str = "mutation uploadFile($file: Upload!) {
  uploadFile(file: $file)
}";

    type Variables = UploadFileVariables;
    type Data = UploadFileData;
}

/// `map` part of a multipart request carrying a single file as `variables.file`.
pub fn single_file_map() -> serde_json::Value {
    serde_json::json!({ "0": ["variables.file"] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_document_and_variables() {
        let request = FetchClassDetail::request(ClassIdVariables {
            class_id: "c-7".into(),
        });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["operationName"], "fetchClassDetail");
        assert_eq!(json["variables"]["class_id"], "c-7");
        assert!(json["query"]
            .as_str()
            .unwrap()
            .starts_with("query fetchClassDetail"));
    }

    #[test]
    fn upload_variables_leave_file_null() {
        let json = serde_json::to_value(UploadFile::request(Default::default())).unwrap();
        assert!(json["variables"]["file"].is_null());
        assert_eq!(single_file_map()["0"][0], "variables.file");
    }

    #[test]
    fn data_is_unwrapped() {
        let response: GraphQLResponse<FetchLoginUserData> = serde_json::from_str(
            r#"{"data":{"fetchLoginUser":{"user_id":"u1","name":"철수","email":"a@b.c"}}}"#,
        )
        .unwrap();

        assert_eq!(response.into_result().unwrap().user.name, "철수");
    }

    #[test]
    fn errors_win_over_data() {
        let response: GraphQLResponse<LogoutData> = serde_json::from_str(
            r#"{"data":{"logout":"ok"},"errors":[{"message":"Unauthorized"}]}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_result().unwrap_err(),
            ResponseError::Server(vec!["Unauthorized".into()])
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        let response: GraphQLResponse<LogoutData> =
            serde_json::from_str(r#"{"data":null}"#).unwrap();

        assert_eq!(response.into_result().unwrap_err(), ResponseError::MissingData);
    }
}
