pub mod session;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Status,
    Login { email: String, password: SecretString },
    Logout,
    Visit { path: String },
}
