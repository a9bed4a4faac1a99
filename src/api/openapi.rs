//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, blog_handler, campaign_handler, events_handler, message_handler, project_handler,
    subscriber_handler, testimonial_handler,
};
use crate::domain::{
    AdminUserResponse, Bilingual, Blog, Campaign, CampaignStatus, ContactMessage, CreateBlog,
    CreateCampaign, CreateContactMessage, CreateProject, CreateTestimonial, MessageStatus,
    Project, SubscribeRequest, Subscriber, SubscriberStatus, Testimonial, UnsubscribeRequest,
    UpdateBlog,
    UpdateCampaign, UpdateProject, UpdateTestimonial,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Portfolio CMS API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "0.1.0",
        description = "Bilingual portfolio CMS backend with soft-delete lifecycle and live admin sync",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        auth_handler::logout,
        // Blog endpoints
        blog_handler::list_published,
        blog_handler::get_by_slug,
        blog_handler::list_all,
        blog_handler::list_deleted,
        blog_handler::get_one,
        blog_handler::create,
        blog_handler::update,
        blog_handler::delete,
        blog_handler::restore,
        blog_handler::publish,
        blog_handler::unpublish,
        // Project endpoints
        project_handler::list_published,
        project_handler::get_by_slug,
        project_handler::list_all,
        project_handler::list_deleted,
        project_handler::get_one,
        project_handler::create,
        project_handler::update,
        project_handler::delete,
        project_handler::restore,
        project_handler::publish,
        project_handler::unpublish,
        project_handler::feature,
        project_handler::unfeature,
        // Testimonial endpoints
        testimonial_handler::list_published,
        testimonial_handler::list_all,
        testimonial_handler::list_deleted,
        testimonial_handler::get_one,
        testimonial_handler::create,
        testimonial_handler::update,
        testimonial_handler::delete,
        testimonial_handler::restore,
        testimonial_handler::publish,
        testimonial_handler::unpublish,
        testimonial_handler::feature,
        testimonial_handler::unfeature,
        // Contact message endpoints
        message_handler::submit,
        message_handler::list_all,
        message_handler::list_deleted,
        message_handler::open,
        message_handler::set_status,
        message_handler::delete,
        message_handler::restore,
        // Newsletter endpoints
        subscriber_handler::subscribe,
        subscriber_handler::self_unsubscribe,
        subscriber_handler::list_all,
        subscriber_handler::list_deleted,
        subscriber_handler::get_one,
        subscriber_handler::unsubscribe,
        subscriber_handler::delete,
        subscriber_handler::restore,
        // Campaign endpoints
        campaign_handler::list_all,
        campaign_handler::get_one,
        campaign_handler::create,
        campaign_handler::update,
        campaign_handler::delete,
        campaign_handler::queue,
        // Live event streams
        events_handler::stream_table,
    ),
    components(
        schemas(
            // Shared types
            Bilingual,
            // Domain types
            AdminUserResponse,
            Blog,
            CreateBlog,
            UpdateBlog,
            Project,
            CreateProject,
            UpdateProject,
            Testimonial,
            CreateTestimonial,
            UpdateTestimonial,
            ContactMessage,
            CreateContactMessage,
            MessageStatus,
            Subscriber,
            SubscribeRequest,
            UnsubscribeRequest,
            SubscriberStatus,
            Campaign,
            CampaignStatus,
            CreateCampaign,
            UpdateCampaign,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Handler types
            message_handler::StatusRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin registration and login"),
        (name = "Blogs", description = "Bilingual blog posts"),
        (name = "Projects", description = "Portfolio projects"),
        (name = "Testimonials", description = "Client testimonials"),
        (name = "Messages", description = "Contact form messages"),
        (name = "Newsletter", description = "Newsletter subscribers"),
        (name = "Campaigns", description = "Email campaigns"),
        (name = "Events", description = "Live change event streams")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
