#![allow(non_upper_case_globals)]

pub mod imports;

mod address;
mod auth;
mod calendar;
mod class_write;
mod default_styling;
mod dropdowns;
mod editor;
mod error_msg;
mod header;
mod map;
mod placeholder;
mod title;

pub use address::{AddressModal, AddressPicker};
pub use auth::WithAuth;
pub use calendar::Calendar;
pub use class_write::{ClassEdit, ClassWrite};
pub use default_styling::DefaultStyling;
pub use dropdowns::DropdownWriting;
pub use editor::ContentEditor;
pub use error_msg::{ErrorMessage, FieldError};
pub use header::Header;
pub use map::KakaoMap;
pub use placeholder::Placeholder;
pub use title::PageTitle;
