//! Domain layer - Core business entities and logic
//!
//! Content entities, their status state machines, and the value objects
//! shared across the six content tables. No infrastructure concerns here.

pub mod admin_user;
pub mod blog;
pub mod campaign;
pub mod contact_message;
pub mod localized;
pub mod password;
pub mod project;
pub mod subscriber;
pub mod testimonial;

pub use admin_user::{AdminUser, AdminUserResponse};
pub use blog::{Blog, CreateBlog, UpdateBlog};
pub use campaign::{Campaign, CampaignStatus, CreateCampaign, UpdateCampaign};
pub use contact_message::{ContactMessage, CreateContactMessage, MessageStatus};
pub use localized::{Bilingual, Locale};
pub use password::Password;
pub use project::{CreateProject, Project, UpdateProject};
pub use subscriber::{SubscribeRequest, Subscriber, SubscriberStatus, UnsubscribeRequest};
pub use testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
