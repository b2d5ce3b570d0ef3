//! The fixed prompt schema for the generated project's `.env` files

/// Keys starting with this marker belong to the web client.
pub const FRONTEND_PREFIX: &str = "REACT_APP";

/// The single key written to the web client's env file.
pub const API_BASE_URL_KEY: &str = "REACT_APP_API_BASE_URL";

/// How the user's input is echoed while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Text,
    Masked,
}

/// Description of one configuration prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub message: &'static str,
    pub default: Option<&'static str>,
    pub mode: DisplayMode,
}

impl FieldSpec {
    const fn text(key: &'static str, message: &'static str, default: Option<&'static str>) -> Self {
        Self {
            key,
            message,
            default,
            mode: DisplayMode::Text,
        }
    }

    pub fn is_frontend(&self) -> bool {
        self.key.starts_with(FRONTEND_PREFIX)
    }

    /// Value to record for a raw input line: empty input falls back to the default.
    pub fn resolve(&self, input: &str) -> String {
        if input.is_empty() {
            self.default.unwrap_or_default().to_string()
        } else {
            input.to_string()
        }
    }
}

/// Prompts in the order they are asked.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("PORT", "What port should your backend run on?", Some("5000")),
    FieldSpec::text(
        "MONGO_URI",
        "What is your MongoDB URI?\n(💡 Create one here: https://www.mongodb.com/atlas/database)",
        Some("mongodb://localhost:27017/mern-auth"),
    ),
    FieldSpec::text(
        "JWT_SECRET",
        "What should we use as your JWT secret?\n(🔐 Generate: https://generate-random.org/string)",
        Some("your_jwt_secret"),
    ),
    FieldSpec::text("EMAIL_HOST", "What is your email SMTP host?", Some("smtp.gmail.com")),
    FieldSpec::text(
        "EMAIL_USER",
        "What is your email username?",
        Some("your_email@example.com"),
    ),
    FieldSpec {
        key: "EMAIL_PASS",
        message: "What is your email password?",
        default: None,
        mode: DisplayMode::Masked,
    },
    FieldSpec::text(
        "GOOGLE_CLIENT_ID",
        "What is your Google Client ID?\n(💡 https://console.cloud.google.com/apis/credentials)",
        None,
    ),
    FieldSpec::text("GOOGLE_CLIENT_SECRET", "What is your Google Client Secret?", None),
    FieldSpec::text(
        "GOOGLE_CALLBACK_URL",
        "What is your Google Callback URL?",
        Some("http://localhost:5000/api/auth/google/callback"),
    ),
    FieldSpec::text(
        API_BASE_URL_KEY,
        "What is your React API base URL?",
        Some("http://localhost:5000"),
    ),
];
