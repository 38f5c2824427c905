mod imports;

mod class;
mod class_form;
pub mod graphql;
mod login_user;

pub use class::{
    Category, ClassDetail, ClassImage, ClassInput, ClassSchedule, TotalTime, MAX_IMAGES,
};
pub use class_form::{
    effective_address, normalize_editor_html, ClassDraft, ClassForm, Field, FormErrors,
    EMPTY_EDITOR_DOCUMENT,
};
pub use login_user::LoginUser;
