pub mod auth;
pub mod class_requests;
pub mod classes;
pub mod notifications;
pub mod push;
pub mod users;

pub use auth::AuthService;
pub use class_requests::ClassRequestService;
pub use classes::ClassService;
pub use notifications::NotificationService;
pub use users::UserService;
