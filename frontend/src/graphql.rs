use crate::auth;
use crate::conf::GraphQLConf;
use gloo_console as console;
use gloo_net::http::{Request, Response};
use interfacing::graphql::{
    single_file_map, GraphQLResponse, Operation, ResponseError, UploadFile,
    UploadFileVariables,
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

pub mod request {
    pub type SendResult = std::result::Result<gloo_net::http::Response, gloo_net::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum GraphQLError {
    #[error("Request error")]
    RequestError(#[source] gloo_net::Error),

    #[error("Unexpected status {0}")]
    StatusError(u16),

    #[error("Parse error")]
    ParseError(#[source] gloo_net::Error),

    #[error(transparent)]
    ResponseError(#[from] ResponseError),

    #[error("Failed to build multipart body: {0}")]
    MultipartError(String),
}

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLClient {
    endpoint: String,
    upload_endpoint: String,
}

impl GraphQLClient {
    pub fn new(conf: &GraphQLConf) -> Self {
        Self {
            endpoint: conf.endpoint.clone(),
            upload_endpoint: conf.upload_endpoint.clone(),
        }
    }

    pub async fn execute<O: Operation>(
        &self,
        variables: O::Variables,
    ) -> Result<O::Data, GraphQLError> {
        let body = O::request(variables);
        console::log!(format!("graphql: {}", O::NAME));

        let response = authorized(Request::post(&self.endpoint))
            .json(&body)
            .map_err(GraphQLError::RequestError)?
            .send()
            .await;

        decode(response).await
    }

    /// Single-file upload following the GraphQL multipart request convention.
    pub async fn upload_file(&self, file: &web_sys::File) -> Result<String, GraphQLError> {
        let multipart = |e| GraphQLError::MultipartError(format!("{:?}", e));

        let operations = serde_json::to_string(&UploadFile::request(UploadFileVariables::default()))
            .map_err(|e| GraphQLError::MultipartError(e.to_string()))?;

        let form = web_sys::FormData::new().map_err(multipart)?;
        form.append_with_str("operations", &operations)
            .map_err(multipart)?;
        form.append_with_str("map", &single_file_map().to_string())
            .map_err(multipart)?;
        form.append_with_blob_and_filename("0", file, &file.name())
            .map_err(multipart)?;

        console::log!(format!("graphql: {} {}", UploadFile::NAME, file.name()));

        let response = authorized(Request::post(&self.upload_endpoint))
            .header("Apollo-Require-Preflight", "true")
            .body(form)
            .send()
            .await;

        decode::<<UploadFile as Operation>::Data>(response)
            .await
            .map(|data| data.url)
    }
}

fn authorized(request: Request) -> Request {
    match auth::access_token() {
        Some(token) => request.header(
            "Authorization",
            &format!("Bearer {}", token.expose_secret()),
        ),
        None => request,
    }
}

async fn decode<T: DeserializeOwned>(response: request::SendResult) -> Result<T, GraphQLError> {
    let response = response.map_err(GraphQLError::RequestError)?;
    response.log_status();

    if !response.ok() {
        Err(GraphQLError::StatusError(response.status()))?
    }

    let body = response
        .json::<GraphQLResponse<T>>()
        .await
        .map_err(GraphQLError::ParseError)?;

    Ok(body.into_result()?)
}
