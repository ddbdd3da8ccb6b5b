//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    CredentialRepository, CustomerRepository, RefreshTokenRepository, RepoResult,
};
