// Handlers are organized by route area, one file per endpoint:
// auth/* is public except getuser; notes/* sits entirely behind the token gate.
pub mod auth;
pub mod notes;
