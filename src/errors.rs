//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tutorlink_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TutorLinkError {
            $($variant(String),)*
        }

        impl TutorLinkError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TutorLinkError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TutorLinkError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TutorLinkError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TutorLinkError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TutorLinkError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tutorlink_errors! {
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    Validation("E005", "Validation Error"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    PushDelivery("E011", "Push Delivery Error"),
}

impl TutorLinkError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TutorLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TutorLinkError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TutorLinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        TutorLinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TutorLinkError {
    fn from(err: std::io::Error) -> Self {
        TutorLinkError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TutorLinkError {
    fn from(err: serde_json::Error) -> Self {
        TutorLinkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TutorLinkError {
    fn from(err: chrono::ParseError) -> Self {
        TutorLinkError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TutorLinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TutorLinkError::database_config("test").code(), "E002");
        assert_eq!(TutorLinkError::validation("test").code(), "E005");
        assert_eq!(TutorLinkError::push_delivery("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TutorLinkError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            TutorLinkError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TutorLinkError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = TutorLinkError::push_delivery("gateway unreachable");
        let formatted = err.format_simple();
        assert!(formatted.contains("Push Delivery Error"));
        assert!(formatted.contains("gateway unreachable"));
    }
}
