//! Service container - centralized service access.
//!
//! Handlers depend on the container trait, not on concrete services,
//! so tests can swap in mocks per service.

use std::sync::Arc;

use super::{
    AuthService, BlogService, CampaignService, MessageService, ProjectService, SubscriberService,
    TestimonialService,
};
use crate::config::Config;
use crate::infra::changefeed::ChangeFeed;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn blogs(&self) -> Arc<dyn BlogService>;
    fn projects(&self) -> Arc<dyn ProjectService>;
    fn testimonials(&self) -> Arc<dyn TestimonialService>;
    fn messages(&self) -> Arc<dyn MessageService>;
    fn subscribers(&self) -> Arc<dyn SubscriberService>;
    fn campaigns(&self) -> Arc<dyn CampaignService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    blog_service: Arc<dyn BlogService>,
    project_service: Arc<dyn ProjectService>,
    testimonial_service: Arc<dyn TestimonialService>,
    message_service: Arc<dyn MessageService>,
    subscriber_service: Arc<dyn SubscriberService>,
    campaign_service: Arc<dyn CampaignService>,
}

impl Services {
    /// Wire every service against one database connection and one
    /// change feed.
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        feed: Arc<ChangeFeed>,
        config: Config,
        campaign_queue: Arc<crate::jobs::PostgresCampaignQueue>,
    ) -> Self {
        use super::{
            Authenticator, BlogManager, CampaignManager, MessageManager, ProjectManager,
            SubscriberManager, TestimonialManager,
        };
        use crate::infra::repositories::{
            AdminUserStore, BlogStore, CampaignStore, MessageStore, ProjectStore, SubscriberStore,
            TestimonialStore,
        };

        let admin_users = Arc::new(AdminUserStore::new(db.clone()));
        let blogs = Arc::new(BlogStore::new(db.clone(), feed.clone()));
        let projects = Arc::new(ProjectStore::new(db.clone(), feed.clone()));
        let testimonials = Arc::new(TestimonialStore::new(db.clone(), feed.clone()));
        let messages = Arc::new(MessageStore::new(db.clone(), feed.clone()));
        let subscribers = Arc::new(SubscriberStore::new(db.clone(), feed.clone()));
        let campaigns = Arc::new(CampaignStore::new(db, feed));

        Self {
            auth_service: Arc::new(Authenticator::new(admin_users, config)),
            blog_service: Arc::new(BlogManager::new(blogs)),
            project_service: Arc::new(ProjectManager::new(projects)),
            testimonial_service: Arc::new(TestimonialManager::new(testimonials)),
            message_service: Arc::new(MessageManager::new(messages)),
            subscriber_service: Arc::new(SubscriberManager::new(subscribers.clone())),
            campaign_service: Arc::new(CampaignManager::new(
                campaigns,
                subscribers,
                campaign_queue,
            )),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn blogs(&self) -> Arc<dyn BlogService> {
        self.blog_service.clone()
    }

    fn projects(&self) -> Arc<dyn ProjectService> {
        self.project_service.clone()
    }

    fn testimonials(&self) -> Arc<dyn TestimonialService> {
        self.testimonial_service.clone()
    }

    fn messages(&self) -> Arc<dyn MessageService> {
        self.message_service.clone()
    }

    fn subscribers(&self) -> Arc<dyn SubscriberService> {
        self.subscriber_service.clone()
    }

    fn campaigns(&self) -> Arc<dyn CampaignService> {
        self.campaign_service.clone()
    }
}
