pub mod argon2_password_hasher;
pub mod os_random_source;
