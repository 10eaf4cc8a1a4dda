use driver::database::PostgresDatabase;
use error_stack::ResultExt;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

use crate::auth::Authority;

static JWT_SECRET: &str = "JWT_SECRET";

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    authority: Authority,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let secret = dotenvy::var(JWT_SECRET)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to get env: {JWT_SECRET}"))?;
        let authority = Authority::new(secret.as_bytes());

        let pgpool = PostgresDatabase::new().await?;
        pgpool.migrate().await?;

        Ok(Self { pgpool, authority })
    }
}
