pub mod auth;

pub mod users;

pub mod classes;

pub mod class_requests;

pub mod notifications;

pub mod system;

pub use auth::configure_auth_routes;
pub use class_requests::configure_class_request_routes;
pub use classes::configure_classes_routes;
pub use notifications::configure_notification_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
