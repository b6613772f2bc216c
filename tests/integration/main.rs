mod errors;
mod validator;

#[cfg(feature = "async")]
mod async_validation;
