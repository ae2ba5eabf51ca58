// Institution authentication: salted password digests, in-memory sessions and
// the bearer-token extractor that gates the registry routes.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod sessions;

pub use extractor::AuthenticatedInstitution;
pub use sessions::{Session, SessionStore};
