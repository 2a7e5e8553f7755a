use crate::{
    auth::{generate_token, AuthResponse, AuthenticatedUser, LoginRequest, SignupRequest},
    config::Config,
    error::AppError,
    models::UserProfile,
    store::UserStore,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
#[post("/signup")]
pub async fn signup(
    store: web::Data<UserStore>,
    config: web::Data<Config>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    let data = signup_data.validate()?;

    // Check if email or username is already taken
    let existing_user = store
        .find_by_email_or_username(data.email, data.username)
        .await?;

    if let Some(existing) = existing_user {
        if existing.email.eq_ignore_ascii_case(data.email) {
            return Err(AppError::Conflict("Email already exists".into()));
        }
        return Err(AppError::Conflict("Username already exists".into()));
    }

    // Create user (the store hashes the password)
    let user = store.create(data.username, data.email, data.password).await?;

    // Generate token
    let token = generate_token(user.id, &config.jwt_secret)?;

    log::info!("User created: {} (id {})", user.username, user.id);

    Ok(HttpResponse::Created().json(AuthResponse {
        message: "User created successfully".into(),
        token,
        user: UserProfile::from(&user),
    }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
#[post("/login")]
pub async fn login(
    store: web::Data<UserStore>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    let data = login_data.validate()?;

    // Get user from database
    let user = store.find_by_email(data.email).await?;

    match user {
        Some(user) => {
            // Verify password
            if store.verify_password(&user, data.password)? {
                // Generate token
                let token = generate_token(user.id, &config.jwt_secret)?;

                log::info!("User logged in: {} (id {})", user.username, user.id);

                Ok(HttpResponse::Ok().json(AuthResponse {
                    message: "Login successful".into(),
                    token,
                    user: UserProfile::from(&user),
                }))
            } else {
                log::debug!("Failed login for email: {}", data.email);
                Err(AppError::BadRequest("Invalid credentials".into()))
            }
        }
        None => {
            log::debug!("Failed login for email: {}", data.email);
            Err(AppError::BadRequest("Invalid credentials".into()))
        }
    }
}

/// Verify the caller's token
///
/// Reached only through the auth gate, so arriving here means the token
/// checked out and the user still exists.
#[get("/verify")]
pub async fn verify(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Token is valid",
        "user": UserProfile::from(&user.0)
    }))
}
