use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use vendora_api::app::create_app;
use vendora_api::routes::auth::AppState;
use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::auth::{AuthService, AuthServiceConfig};
use vendora_core::services::mail::MailerTrait;
use vendora_core::services::token::{TokenService, TokenServiceConfig};
use vendora_infra::database::create_pool;
use vendora_infra::database::mysql::{
    MySqlBusinessRepository, MySqlOtpRepository, MySqlUserRepository,
};
use vendora_infra::mail::{BrevoMailer, MockMailer};
use vendora_shared::config::{DatabaseConfig, JwtConfig, MailConfig, OtpConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Vendora API server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let otp_config = OtpConfig::from_env();
    let mail_config = MailConfig::from_env();

    if jwt_config.is_using_default_secrets() {
        warn!("JWT secrets are using development defaults; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let otp_repository = Arc::new(MySqlOtpRepository::new(pool.clone()));
    let business_repository = Arc::new(MySqlBusinessRepository::new(pool));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&jwt_config)));
    let auth_config = AuthServiceConfig::from(&otp_config);

    // Without an API key the mail provider cannot be used; fall back to the
    // logging mailer so local development still works end to end
    if mail_config.has_api_key() {
        let mailer = Arc::new(
            BrevoMailer::new(mail_config)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
        );
        run_server(
            server_config,
            user_repository,
            otp_repository,
            business_repository,
            mailer,
            token_service,
            auth_config,
        )
        .await
    } else {
        warn!("MAIL_API_KEY not set; outbound email will be logged, not sent");
        let mailer = Arc::new(MockMailer::new());
        run_server(
            server_config,
            user_repository,
            otp_repository,
            business_repository,
            mailer,
            token_service,
            auth_config,
        )
        .await
    }
}

/// Wire the service graph and run the HTTP server
async fn run_server<U, O, B, M>(
    server_config: ServerConfig,
    user_repository: Arc<U>,
    otp_repository: Arc<O>,
    business_repository: Arc<B>,
    mailer: Arc<M>,
    token_service: Arc<TokenService>,
    auth_config: AuthServiceConfig,
) -> std::io::Result<()>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    B: BusinessRepository + 'static,
    M: MailerTrait + 'static,
{
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_repository,
        business_repository,
        mailer,
        token_service.clone(),
        auth_config,
    ));

    let app_state = web::Data::new(AppState { auth_service });
    let token_data = web::Data::from(token_service);

    let bind_address = server_config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), token_data.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
