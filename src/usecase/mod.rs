pub mod change_password_usecase;
pub mod issue_password_usecase;
pub mod login_usecase;
pub mod register_credential_usecase;

#[cfg(test)]
mod test_support;
