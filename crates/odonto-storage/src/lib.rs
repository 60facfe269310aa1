//! odonto-storage
//!
//! Survey record store on S3. Thin wrapper around the AWS S3 SDK plus a
//! polling live subscription.

pub mod error;
pub mod objects;
pub mod subscription;
pub mod surveys;
