//! Client-side draft of a class listing and the schema it is validated with.
//!
//! Fields are kept exactly as typed. Messages are shown inline next to the
//! input that produced them.

use crate::class::{Category, ClassDetail, ClassImage, ClassInput, ClassSchedule, TotalTime};
use crate::imports::*;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// What the rich-text editor reports for a document with no content.
pub const EMPTY_EDITOR_DOCUMENT: &str = "<p><br></p>";

pub fn normalize_editor_html(html: &str) -> String {
    if html == EMPTY_EDITOR_DOCUMENT {
        String::new()
    } else {
        html.to_owned()
    }
}

/// Shown for digit runs that do not fit the backend's integer.
pub const NUMBER_TOO_LARGE: &str = "입력 가능한 범위를 넘었습니다";

/// Address picked in this session wins over the one the listing was saved with.
pub fn effective_address(picked: &str, fetched: Option<&str>) -> String {
    if picked.is_empty() {
        fetched.unwrap_or_default().to_owned()
    } else {
        picked.to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    ContentSummary,
    ClassMNum,
    Price,
    AddressDetail,
    AccountNum,
    AccountName,
    BankName,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Self::Title,
        Self::ContentSummary,
        Self::ClassMNum,
        Self::Price,
        Self::AddressDetail,
        Self::AccountNum,
        Self::AccountName,
        Self::BankName,
    ];

    fn rules(&self) -> &'static [Rule] {
        use Rule::*;
        match self {
            Self::Title => &[Required("클래스 이름을 입력해주세요")],
            Self::ContentSummary => &[Required("클래스 한줄요약을 입력해주세요")],
            Self::ClassMNum => &[
                Required("클래스 최대 인원을 입력해주세요"),
                Digits("숫자만 입력해주세요"),
                Fits(NUMBER_TOO_LARGE),
                Positive("1명 이상 입력해주세요"),
            ],
            Self::Price => &[
                Required("클래스 가격을 입력해주세요"),
                Digits("숫자만 입력해주세요"),
                Fits(NUMBER_TOO_LARGE),
            ],
            Self::AddressDetail => &[Required("상세주소를 입력해주세요")],
            Self::AccountNum => &[
                Required("입금 계좌를 입력해주세요"),
                Digits("'-' 빼고 숫자만 입력해주세요"),
            ],
            Self::AccountName => &[Required("예금주를 입력해주세요")],
            Self::BankName => &[Required("입금 은행을 입력해주세요")],
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        self.rules().iter().try_for_each(|rule| rule.check(value))
    }
}

enum Rule {
    Required(&'static str),
    Digits(&'static str),
    Fits(&'static str),
    Positive(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match *self {
            Rule::Required(message) if value.is_empty() => Err(message),
            Rule::Digits(message) if !value.chars().all(|c| c.is_ascii_digit()) => Err(message),
            Rule::Fits(message) if value.parse::<i64>().is_err() => Err(message),
            Rule::Positive(message) if value.parse::<i64>().map_or(true, |n| n < 1) => {
                Err(message)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn single(field: Field, message: &'static str) -> Self {
        Self(BTreeMap::from([(field, message)]))
    }

    /// Re-validates one field, the way a field reacts to its own change event.
    pub fn revalidate(&mut self, field: Field, value: &str) {
        match field.validate(value) {
            Ok(()) => self.0.remove(&field),
            Err(message) => self.0.insert(field, message),
        };
    }
}

/// Register-bound inputs of the class form.
#[derive(Clone, Debug)]
pub struct ClassForm {
    pub category: Category,
    pub title: String,
    pub content_summary: String,
    pub total_time: TotalTime,
    pub class_m_num: String,
    pub price: String,
    pub address_detail: String,
    pub content: String,
    pub account_num: SecretString,
    pub account_name: String,
    pub bank_name: String,
}

impl Default for ClassForm {
    fn default() -> Self {
        Self {
            category: Category::default(),
            title: String::new(),
            content_summary: String::new(),
            total_time: TotalTime::default(),
            class_m_num: String::new(),
            price: String::new(),
            address_detail: String::new(),
            content: String::new(),
            account_num: SecretString::new(String::new()),
            account_name: String::new(),
            bank_name: String::new(),
        }
    }
}

impl From<&ClassDetail> for ClassForm {
    fn from(detail: &ClassDetail) -> Self {
        Self {
            category: detail.category,
            title: detail.title.clone(),
            content_summary: detail.content_summary.clone(),
            total_time: detail.total_time,
            class_m_num: detail.class_m_num.to_string(),
            price: detail.price.to_string(),
            address_detail: detail.address_detail.clone(),
            content: detail.content.clone(),
            account_num: detail.account_num.clone(),
            account_name: detail.account_name.clone(),
            bank_name: detail.bank_name.clone(),
        }
    }
}

impl ClassForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::ContentSummary => &self.content_summary,
            Field::ClassMNum => &self.class_m_num,
            Field::Price => &self.price,
            Field::AddressDetail => &self.address_detail,
            Field::AccountNum => self.account_num.expose_secret(),
            Field::AccountName => &self.account_name,
            Field::BankName => &self.bank_name,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::ContentSummary => self.content_summary = value,
            Field::ClassMNum => self.class_m_num = value,
            Field::Price => self.price = value,
            Field::AddressDetail => self.address_detail = value,
            Field::AccountNum => self.account_num = SecretString::new(value),
            Field::AccountName => self.account_name = value,
            Field::BankName => self.bank_name = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            errors.revalidate(field, self.value(field));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Everything the write page holds before submission.
#[derive(Clone, Debug, Default)]
pub struct ClassDraft {
    pub form: ClassForm,
    pub address: String,
    pub image_urls: Vec<String>,
    pub schedule: Vec<NaiveDate>,
}

impl ClassDraft {
    pub fn to_input(&self) -> Result<ClassInput, FormErrors> {
        self.form.validate()?;
        let form = &self.form;

        let number = |field: Field| {
            form.value(field)
                .trim()
                .parse::<i64>()
                .map_err(|_| FormErrors::single(field, NUMBER_TOO_LARGE))
        };

        let mut schedule = self.schedule.clone();
        schedule.sort();
        schedule.dedup();

        Ok(ClassInput {
            category: form.category,
            title: form.title.trim().to_owned(),
            content_summary: form.content_summary.trim().to_owned(),
            price: number(Field::Price)?,
            class_m_num: number(Field::ClassMNum)?,
            address: self.address.clone(),
            address_detail: form.address_detail.trim().to_owned(),
            content: normalize_editor_html(&form.content),
            total_time: form.total_time,
            account_num: SecretString::new(form.account_num.expose_secret().trim().to_owned()),
            account_name: form.account_name.trim().to_owned(),
            bank_name: form.bank_name.trim().to_owned(),
            images: ClassImage::from_urls(self.image_urls.iter().cloned()),
            class_schedules: schedule
                .into_iter()
                .map(|date| ClassSchedule { date })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ClassForm {
        let mut form = ClassForm::default();
        form.set(Field::Title, "도자기 원데이 클래스".into());
        form.set(Field::ContentSummary, "물레로 컵 만들기".into());
        form.set(Field::ClassMNum, "8".into());
        form.set(Field::Price, "35000".into());
        form.set(Field::AddressDetail, "3층".into());
        form.set(Field::AccountNum, "110123456789".into());
        form.set(Field::AccountName, "김도예".into());
        form.set(Field::BankName, "신한은행".into());
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ClassForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), Field::ALL.len());
        assert_eq!(
            errors.message(Field::Title),
            Some("클래스 이름을 입력해주세요")
        );
        assert_eq!(
            errors.message(Field::ContentSummary),
            Some("클래스 한줄요약을 입력해주세요")
        );
        assert_eq!(
            errors.message(Field::Price),
            Some("클래스 가격을 입력해주세요")
        );
        assert_eq!(
            errors.message(Field::AccountNum),
            Some("입금 계좌를 입력해주세요")
        );
        assert_eq!(errors.message(Field::AccountName), Some("예금주를 입력해주세요"));
        assert_eq!(errors.message(Field::BankName), Some("입금 은행을 입력해주세요"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(
            Field::Title.validate("   "),
            Err("클래스 이름을 입력해주세요")
        );
    }

    #[test]
    fn numeric_fields_reject_non_digits() {
        assert_eq!(Field::Price.validate("3만원"), Err("숫자만 입력해주세요"));
        assert_eq!(Field::ClassMNum.validate("-3"), Err("숫자만 입력해주세요"));
        assert_eq!(Field::ClassMNum.validate("0"), Err("1명 이상 입력해주세요"));
        assert_eq!(
            Field::AccountNum.validate("110-123-456789"),
            Err("'-' 빼고 숫자만 입력해주세요")
        );
        assert_eq!(Field::Price.validate("0"), Ok(()));
    }

    #[test]
    fn oversized_numbers_are_rejected_not_zeroed() {
        let huge = "99999999999999999999";
        assert_eq!(Field::Price.validate(huge), Err(NUMBER_TOO_LARGE));
        assert_eq!(Field::ClassMNum.validate(huge), Err(NUMBER_TOO_LARGE));

        let mut draft = ClassDraft {
            form: filled_form(),
            ..Default::default()
        };
        draft.form.set(Field::Price, huge.into());
        let errors = draft.to_input().unwrap_err();
        assert_eq!(errors.message(Field::Price), Some(NUMBER_TOO_LARGE));

        draft.form.set(Field::Price, i64::MAX.to_string());
        assert_eq!(draft.to_input().unwrap().price, i64::MAX);
    }

    #[test]
    fn revalidate_clears_fixed_field() {
        let mut errors = ClassForm::default().validate().unwrap_err();
        errors.revalidate(Field::Title, "요가");
        assert_eq!(errors.message(Field::Title), None);
        errors.revalidate(Field::Title, "");
        assert!(errors.message(Field::Title).is_some());
    }

    #[test]
    fn filled_form_becomes_input() {
        let date = |d| NaiveDate::from_ymd_opt(2026, 11, d).unwrap();
        let draft = ClassDraft {
            form: filled_form(),
            address: "서울 종로구 인사동길 12".into(),
            image_urls: vec!["main.png".into(), "side.png".into()],
            schedule: vec![date(5), date(3), date(5)],
        };

        let input = draft.to_input().unwrap();
        assert_eq!(input.price, 35000);
        assert_eq!(input.class_m_num, 8);
        assert_eq!(input.address, "서울 종로구 인사동길 12");
        assert!(input.images[0].is_main && !input.images[1].is_main);
        assert_eq!(
            input.class_schedules,
            vec![ClassSchedule { date: date(3) }, ClassSchedule { date: date(5) }]
        );

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["accountNum"], "110123456789");
        assert_eq!(json["class_mNum"], 8);
        assert_eq!(json["classSchedules"][0]["date"], "2026-11-03");
        assert_eq!(json["category"], "교육");
    }

    #[test]
    fn invalid_draft_does_not_become_input() {
        let mut draft = ClassDraft {
            form: filled_form(),
            ..Default::default()
        };
        draft.form.set(Field::Price, String::new());
        let errors = draft.to_input().unwrap_err();
        assert_eq!(errors.message(Field::Price), Some("클래스 가격을 입력해주세요"));
    }

    #[test]
    fn empty_editor_document_is_empty_content() {
        assert_eq!(normalize_editor_html(EMPTY_EDITOR_DOCUMENT), "");
        assert_eq!(normalize_editor_html("<p>hi</p>"), "<p>hi</p>");
    }

    #[test]
    fn picked_address_wins_over_fetched() {
        assert_eq!(effective_address("", Some("부산 해운대구")), "부산 해운대구");
        assert_eq!(
            effective_address("서울 중구", Some("부산 해운대구")),
            "서울 중구"
        );
        assert_eq!(effective_address("", None), "");
    }
}
