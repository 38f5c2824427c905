use crate::imports::*;
use chrono::NaiveDate;

pub const MAX_IMAGES: usize = 5;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "교육")]
    Education,
    #[serde(rename = "여가")]
    Leisure,
    #[serde(rename = "운동")]
    Exercise,
    #[serde(rename = "요리")]
    Cooking,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::Education,
        Self::Leisure,
        Self::Exercise,
        Self::Cooking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Education => "교육",
            Self::Leisure => "여가",
            Self::Exercise => "운동",
            Self::Cooking => "요리",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TotalTime {
    #[default]
    #[serde(rename = "1시간")]
    OneHour,
    #[serde(rename = "2시간")]
    TwoHours,
    #[serde(rename = "3시간")]
    ThreeHours,
    #[serde(rename = "4시간")]
    FourHours,
}

impl TotalTime {
    pub const ALL: [TotalTime; 4] = [
        Self::OneHour,
        Self::TwoHours,
        Self::ThreeHours,
        Self::FourHours,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneHour => "1시간",
            Self::TwoHours => "2시간",
            Self::ThreeHours => "3시간",
            Self::FourHours => "4시간",
        }
    }
}

impl TryFrom<&str> for TotalTime {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|total_time| total_time.label() == value)
            .ok_or(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClassImage {
    pub url: String,
    pub is_main: bool,
}

impl ClassImage {
    /// Rebuilds the flags so that only the first image is the main one.
    pub fn from_urls<I, S>(urls: I) -> Vec<ClassImage>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter()
            .enumerate()
            .map(|(i, url)| ClassImage {
                url: url.into(),
                is_main: i == 0,
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClassSchedule {
    pub date: NaiveDate,
}

/// `fetchClassDetail` as returned by the backend.
#[derive(Deserialize, Clone, Debug)]
pub struct ClassDetail {
    pub class_id: String,
    pub category: Category,
    pub title: String,
    pub content_summary: String,
    pub price: i64,
    #[serde(rename = "class_mNum")]
    pub class_m_num: i64,
    pub address: String,
    pub address_detail: String,
    pub content: String,
    pub total_time: TotalTime,
    #[serde(rename = "accountNum", deserialize_with = "secret_string_from_str")]
    pub account_num: SecretString,
    #[serde(rename = "accountName")]
    pub account_name: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "image_", default)]
    pub images: Vec<ClassImage>,
    #[serde(default)]
    pub class_schedules: Vec<ClassSchedule>,
}

impl ClassDetail {
    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }

    pub fn schedule_dates(&self) -> Vec<NaiveDate> {
        self.class_schedules.iter().map(|s| s.date).collect()
    }
}

impl PartialEq for ClassDetail {
    fn eq(&self, other: &Self) -> bool {
        self.class_id == other.class_id
            && self.title == other.title
            && self.content == other.content
            && self.address == other.address
    }
}

/// Payload of both `createClass` and `updateClass`.
#[derive(Serialize, Clone, Debug)]
pub struct ClassInput {
    pub category: Category,
    pub title: String,
    pub content_summary: String,
    pub price: i64,
    #[serde(rename = "class_mNum")]
    pub class_m_num: i64,
    pub address: String,
    pub address_detail: String,
    pub content: String,
    pub total_time: TotalTime,
    #[serde(rename = "accountNum", serialize_with = "expose_secret_string")]
    pub account_num: SecretString,
    #[serde(rename = "accountName")]
    pub account_name: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "imageDetails")]
    pub images: Vec<ClassImage>,
    #[serde(rename = "classSchedules")]
    pub class_schedules: Vec<ClassSchedule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_form_is_the_label() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            assert_eq!(Category::try_from(category.label()), Ok(category));
        }
        assert!(Category::try_from("게임").is_err());
    }

    #[test]
    fn only_first_image_is_main() {
        let images = ClassImage::from_urls(["a.png", "b.png", "c.png"]);
        assert!(images[0].is_main);
        assert!(images[1..].iter().all(|image| !image.is_main));
        assert!(ClassImage::from_urls(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn class_detail_decodes_backend_field_names() {
        let json = r#"{
            "class_id": "c-1",
            "category": "요리",
            "title": "파스타 클래스",
            "content_summary": "생면 파스타 만들기",
            "price": 45000,
            "class_mNum": 6,
            "address": "서울 마포구 와우산로 94",
            "address_detail": "2층",
            "content": "<p>hello</p>",
            "total_time": "2시간",
            "accountNum": "1002123456789",
            "accountName": "홍길동",
            "bankName": "우리은행",
            "image_": [{ "url": "a.png", "is_main": true }],
            "class_schedules": [{ "date": "2026-11-02" }]
        }"#;

        let detail: ClassDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.category, Category::Cooking);
        assert_eq!(detail.total_time, TotalTime::TwoHours);
        assert_eq!(detail.class_m_num, 6);
        assert_eq!(detail.account_num.expose_secret(), "1002123456789");
        assert_eq!(detail.image_urls(), vec!["a.png".to_owned()]);
        assert_eq!(
            detail.schedule_dates(),
            vec![NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()]
        );
    }

    #[test]
    fn class_detail_debug_hides_account_number() {
        let detail = ClassDetail {
            class_id: "c-1".into(),
            category: Category::default(),
            title: String::new(),
            content_summary: String::new(),
            price: 0,
            class_m_num: 0,
            address: String::new(),
            address_detail: String::new(),
            content: String::new(),
            total_time: TotalTime::default(),
            account_num: SecretString::new("1002123456789".into()),
            account_name: String::new(),
            bank_name: String::new(),
            images: vec![],
            class_schedules: vec![],
        };
        assert!(!format!("{:?}", detail).contains("1002123456789"));
    }
}
