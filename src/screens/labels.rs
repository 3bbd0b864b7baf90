//! UI strings for the two screens.

use std::fmt;
use std::str::FromStr;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Vietnamese
    #[default]
    Vi,
    /// English
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Vi => &VI,
            Self::En => &EN,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Self::Vi),
            "en" => Ok(Self::En),
            other => Err(format!("Must be one of: vi, en, got: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text shown by the sign-in and home screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub sign_in_title: &'static str,
    pub phone_placeholder: &'static str,
    pub valid: &'static str,
    pub invalid: &'static str,
    pub submit: &'static str,
    pub home_title: &'static str,
    pub welcome_prefix: &'static str,
    pub logout: &'static str,
    pub please_sign_in: &'static str,
    pub go_to_sign_in: &'static str,
}

impl Labels {
    /// Greeting for the signed-in user.
    pub fn welcome(&self, phone_number: &str) -> String {
        format!("{}, {}!", self.welcome_prefix, phone_number)
    }
}

static VI: Labels = Labels {
    sign_in_title: "Đăng nhập",
    phone_placeholder: "Nhập số điện thoại của bạn",
    valid: "Hợp lệ",
    invalid: "Không hợp lệ",
    submit: "Tiếp tục",
    home_title: "Trang chủ",
    welcome_prefix: "Chào mừng",
    logout: "Đăng xuất",
    please_sign_in: "Vui lòng đăng nhập",
    go_to_sign_in: "Đi đến Đăng nhập",
};

static EN: Labels = Labels {
    sign_in_title: "Sign in",
    phone_placeholder: "Enter your phone number",
    valid: "Valid",
    invalid: "Invalid",
    submit: "Continue",
    home_title: "Home",
    welcome_prefix: "Welcome",
    logout: "Log out",
    please_sign_in: "Please sign in",
    go_to_sign_in: "Go to sign in",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("vi".parse::<Locale>(), Ok(Locale::Vi));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_vietnamese() {
        assert_eq!(Locale::default(), Locale::Vi);
        assert_eq!(Locale::default().to_string(), "vi");
    }

    #[test]
    fn test_welcome_text() {
        assert_eq!(
            Locale::En.labels().welcome("(555) 123-4567"),
            "Welcome, (555) 123-4567!"
        );
        assert_eq!(
            Locale::Vi.labels().welcome("(555) 123-4567"),
            "Chào mừng, (555) 123-4567!"
        );
    }
}
