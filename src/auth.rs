use crate::{error::AppError, models::StudentId, SharedStore};
use axum::{
    async_trait,
    extract::{FromRequest, RequestParts},
    Extension,
};

/// Extracts the signed-in student, rejecting the request with 401 while the
/// session is still logged out.
pub struct LoggedIn(pub StudentId);

#[async_trait]
impl<B> FromRequest<B> for LoggedIn
where
    B: Send,
{
    type Rejection = AppError;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let Extension(store) = Extension::<SharedStore>::from_request(req).await?;
        let user = store.lock().await.session.user()?;
        Ok(LoggedIn(user))
    }
}
