//! Business logic services.

mod auth_service;
mod blog_service;
mod campaign_service;
mod container;
mod message_service;
mod project_service;
mod subscriber_service;
mod testimonial_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use blog_service::{BlogManager, BlogService};
pub use campaign_service::{CampaignManager, CampaignService};
pub use container::{ServiceContainer, Services};
pub use message_service::{MessageManager, MessageService};
pub use project_service::{ProjectManager, ProjectService};
pub use subscriber_service::{SubscriberManager, SubscriberService};
pub use testimonial_service::{TestimonialManager, TestimonialService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
