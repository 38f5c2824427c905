use crate::graphql::{GraphQLClient, GraphQLError};
use async_trait::async_trait;
use interfacing::graphql::{
    CreateClass, CreateClassVariables, SavedClass, UpdateClass, UpdateClassVariables,
};
use interfacing::{ClassDetail, ClassDraft, ClassInput, FormErrors};

#[async_trait(?Send)]
pub trait ClassMutations {
    async fn create_class(&self, input: ClassInput) -> Result<SavedClass, GraphQLError>;

    async fn update_class(
        &self,
        class_id: String,
        input: ClassInput,
    ) -> Result<SavedClass, GraphQLError>;
}

#[async_trait(?Send)]
impl ClassMutations for GraphQLClient {
    async fn create_class(&self, input: ClassInput) -> Result<SavedClass, GraphQLError> {
        self.execute::<CreateClass>(CreateClassVariables { input })
            .await
            .map(|data| data.class)
    }

    async fn update_class(
        &self,
        class_id: String,
        input: ClassInput,
    ) -> Result<SavedClass, GraphQLError> {
        self.execute::<UpdateClass>(UpdateClassVariables { class_id, input })
            .await
            .map(|data| data.class)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitMode {
    Create,
    Update { class_id: String },
}

impl SubmitMode {
    pub fn new(is_edit: bool, data: Option<&ClassDetail>) -> Result<Self, SubmitError> {
        match (is_edit, data) {
            (false, _) => Ok(Self::Create),
            (true, Some(detail)) => Ok(Self::Update {
                class_id: detail.class_id.clone(),
            }),
            (true, None) => Err(SubmitError::MissingClass),
        }
    }

    pub fn done_message(&self) -> &'static str {
        match self {
            Self::Create => "클래스 등록이 완료되었습니다",
            Self::Update { .. } => "클래스 수정이 완료되었습니다",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("{} fields are invalid", .0.len())]
    Invalid(FormErrors),

    #[error("Editing requires the class being edited")]
    MissingClass,

    #[error("Saving the class failed")]
    Api(#[from] GraphQLError),
}

/// Validates the draft, then runs exactly one of the two mutations.
pub async fn submit_class<M: ClassMutations>(
    api: &M,
    mode: &SubmitMode,
    draft: &ClassDraft,
) -> Result<SavedClass, SubmitError> {
    let input = draft.to_input().map_err(SubmitError::Invalid)?;

    let saved = match mode {
        SubmitMode::Create => api.create_class(input).await?,
        SubmitMode::Update { class_id } => api.update_class(class_id.clone(), input).await?,
    };
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use interfacing::{ClassForm, Field};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ClassMutations for RecordingApi {
        async fn create_class(&self, input: ClassInput) -> Result<SavedClass, GraphQLError> {
            self.calls.borrow_mut().push(format!("create {}", input.title));
            Ok(SavedClass {
                class_id: "new-id".into(),
            })
        }

        async fn update_class(
            &self,
            class_id: String,
            input: ClassInput,
        ) -> Result<SavedClass, GraphQLError> {
            self.calls
                .borrow_mut()
                .push(format!("update {} {}", class_id, input.title));
            Ok(SavedClass { class_id })
        }
    }

    struct FailingApi;

    #[async_trait(?Send)]
    impl ClassMutations for FailingApi {
        async fn create_class(&self, _input: ClassInput) -> Result<SavedClass, GraphQLError> {
            Err(GraphQLError::StatusError(500))
        }

        async fn update_class(
            &self,
            _class_id: String,
            _input: ClassInput,
        ) -> Result<SavedClass, GraphQLError> {
            Err(GraphQLError::StatusError(500))
        }
    }

    fn valid_draft() -> ClassDraft {
        let mut form = ClassForm::default();
        for (field, value) in [
            (Field::Title, "요가 입문"),
            (Field::ContentSummary, "아침 요가"),
            (Field::ClassMNum, "10"),
            (Field::Price, "20000"),
            (Field::AddressDetail, "1층"),
            (Field::AccountNum, "3333012345678"),
            (Field::AccountName, "이요가"),
            (Field::BankName, "카카오뱅크"),
        ] {
            form.set(field, value.into());
        }
        ClassDraft {
            form,
            address: "서울 성동구 왕십리로 83".into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_mode_runs_create_mutation() {
        let api = RecordingApi::default();
        let mode = SubmitMode::new(false, None).unwrap();

        let saved = block_on(submit_class(&api, &mode, &valid_draft())).unwrap();

        assert_eq!(saved.class_id, "new-id");
        assert_eq!(*api.calls.borrow(), vec!["create 요가 입문".to_owned()]);
    }

    #[test]
    fn edit_mode_runs_update_mutation() {
        let api = RecordingApi::default();
        let mode = SubmitMode::Update {
            class_id: "c-42".into(),
        };

        let saved = block_on(submit_class(&api, &mode, &valid_draft())).unwrap();

        assert_eq!(saved.class_id, "c-42");
        assert_eq!(*api.calls.borrow(), vec!["update c-42 요가 입문".to_owned()]);
    }

    #[test]
    fn edit_without_class_is_rejected() {
        assert!(matches!(
            SubmitMode::new(true, None),
            Err(SubmitError::MissingClass)
        ));
    }

    #[test]
    fn invalid_draft_sends_nothing() {
        let api = RecordingApi::default();
        let mut draft = valid_draft();
        draft.form.set(Field::Title, String::new());

        let result = block_on(submit_class(&api, &SubmitMode::Create, &draft));

        match result {
            Err(SubmitError::Invalid(errors)) => assert_eq!(
                errors.message(Field::Title),
                Some("클래스 이름을 입력해주세요")
            ),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn api_failure_is_reported() {
        let result = block_on(submit_class(&FailingApi, &SubmitMode::Create, &valid_draft()));
        assert!(matches!(
            result,
            Err(SubmitError::Api(GraphQLError::StatusError(500)))
        ));
    }
}
