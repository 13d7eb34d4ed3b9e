use envconfig::Envconfig;

#[derive(Envconfig, Debug, Clone)]
pub struct Config {
    #[envconfig(from = "FIREBASE_DATABASE_URL")]
    pub database_url: String,

    #[envconfig(from = "FIREBASE_CREDENTIALS_PATH", default = "./info.json")]
    pub credentials_path: String,

    // Skips the service account flow entirely, e.g. against the emulator
    #[envconfig(from = "FIREBASE_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    #[envconfig(from = "REQUEST_TIMEOUT_SECONDS", default = "30")]
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }
}
