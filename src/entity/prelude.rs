//! 预导入模块，方便使用

pub use super::class_requests::{
    ActiveModel as ClassRequestActiveModel, Entity as ClassRequests, Model as ClassRequestModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
