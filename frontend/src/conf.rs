// Configuration definitions, functions and tests
//
// Files are embedded at build time: the bundle has no filesystem to read
// them from at runtime. `FE_ENV` picks the overlay.

use serde::Deserialize;
use std::rc::Rc;

static DEFAULT_CONF: &str = include_str!("../conf/default.yaml");
static PROD_CONF: &str = include_str!("../conf/prod.yaml");

pub type ConfCtx = Rc<Conf>;

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("{0} is not a supported environment. Use either `local` or `prod`.")]
    UnknownEnv(String),

    #[error("Malformed configuration")]
    Parse(#[source] config::ConfigError),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Conf {
    pub graphql: GraphQLConf,
    pub kakao: KakaoConf,
    pub postcode: PostcodeConf,
    pub editor: EditorConf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQLConf {
    pub endpoint: String,
    pub upload_endpoint: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct KakaoConf {
    pub app_key: String,
    pub sdk_url: String,
    pub center: Coords,
    pub level: u8,
}

impl KakaoConf {
    pub fn script_src(&self) -> String {
        format!(
            "{}?autoload=false&appkey={}&libraries=services",
            self.sdk_url, self.app_key
        )
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostcodeConf {
    pub script_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EditorConf {
    pub script_url: String,
    pub style_url: String,
    pub height: String,
}

impl Conf {
    pub fn derive(env: Env) -> Result<Self, ConfError> {
        use config::{Config, File, FileFormat};

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONF, FileFormat::Yaml));

        if env.prod() {
            builder = builder.add_source(File::from_str(PROD_CONF, FileFormat::Yaml));
        }

        builder
            .build()
            .and_then(|conf| conf.try_deserialize())
            .map_err(ConfError::Parse)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Env {
    Local,
    Prod,
}

impl Env {
    pub fn derive() -> Result<Self, ConfError> {
        option_env!("FE_ENV").unwrap_or("local").try_into()
    }

    pub fn prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<&str> for Env {
    type Error = ConfError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => Err(ConfError::UnknownEnv(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_names() {
        assert_eq!(Env::try_from("local").unwrap(), Env::Local);
        assert_eq!(Env::try_from("PROD").unwrap(), Env::Prod);
        assert!(matches!(
            Env::try_from("staging"),
            Err(ConfError::UnknownEnv(name)) if name == "staging"
        ));
        assert_eq!(Env::Prod.as_ref(), "prod");
        assert!(Env::Prod.prod() && !Env::Local.prod());
    }

    #[test]
    fn local_conf_parses() {
        let conf = Conf::derive(Env::Local).unwrap();
        assert_eq!(conf.kakao.level, 3);
        assert_eq!(conf.kakao.center, Coords { lat: 33.450701, lng: 126.570667 });
        assert!(conf.graphql.endpoint.starts_with("http://localhost"));
    }

    #[test]
    fn prod_overrides_only_graphql() {
        let local = Conf::derive(Env::Local).unwrap();
        let prod = Conf::derive(Env::Prod).unwrap();
        assert_eq!(prod.graphql.endpoint, "/graphql");
        assert_eq!(prod.kakao, local.kakao);
        assert_eq!(prod.editor, local.editor);
    }

    #[test]
    fn kakao_script_does_not_autoload() {
        let src = Conf::derive(Env::Local).unwrap().kakao.script_src();
        assert!(src.contains("autoload=false"));
        assert!(src.contains("libraries=services"));
    }
}
