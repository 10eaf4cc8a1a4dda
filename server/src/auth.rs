use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::{Report, ResultExt};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use kernel::prelude::entity::MemberId;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

const TOKEN_LIFETIME: Duration = Duration::hours(24);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    exp: i64,
}

/// Signs and checks the HS256 access tokens handed out on registration.
pub struct Authority {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Authority {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, member_id: &MemberId) -> error_stack::Result<String, KernelError> {
        let claims = Claims {
            sub: member_id.clone().into(),
            exp: (OffsetDateTime::now_utc() + TOKEN_LIFETIME).unix_timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to sign access token")
    }

    pub fn verify(&self, token: &str) -> error_stack::Result<MemberId, KernelError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .change_context_lazy(|| KernelError::Unauthorized)?;
        Ok(MemberId::new(data.claims.sub))
    }
}

/// The member a bearer token was issued to.
pub struct CurrentMember(pub MemberId);

#[axum::async_trait]
impl FromRequestParts<AppModule> for CurrentMember {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    Report::new(KernelError::Unauthorized).attach_printable(rejection.to_string())
                })?;
        let member_id = state.authority().verify(bearer.token())?;
        Ok(Self(member_id))
    }
}
