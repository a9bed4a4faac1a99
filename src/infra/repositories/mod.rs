//! Repository layer: typed data access over the content tables.

mod admin_user_repository;
mod base;
mod blog_repository;
mod campaign_repository;
mod message_repository;
mod project_repository;
mod subscriber_repository;
mod testimonial_repository;

pub use admin_user_repository::{AdminUserRepository, AdminUserStore};
pub use base::{ContentRepository, ListOptions, SoftDeletable};
pub use blog_repository::{BlogRepository, BlogStore};
pub use campaign_repository::{CampaignRepository, CampaignStore};
pub use message_repository::{MessageRepository, MessageStore};
pub use project_repository::{ProjectRepository, ProjectStore};
pub use subscriber_repository::{SubscriberRepository, SubscriberStore};
pub use testimonial_repository::{TestimonialRepository, TestimonialStore};

#[cfg(any(test, feature = "test-utils"))]
pub use admin_user_repository::MockAdminUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use blog_repository::MockBlogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use campaign_repository::MockCampaignRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use project_repository::MockProjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use subscriber_repository::MockSubscriberRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use testimonial_repository::MockTestimonialRepository;
